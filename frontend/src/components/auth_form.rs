use shared::{AuthMode, AuthState, LinkVariant, Navigator, Route};
use yew::prelude::*;

use crate::components::{AccountLinker, FormField};
use crate::hooks::{use_auth_flow, use_form_control};
use crate::services::{ApiClient, BrowserNavigator};

#[derive(Properties, PartialEq)]
pub struct AuthFormProps {
    pub mode: AuthMode,
    pub api_client: ApiClient,
    pub navigator: BrowserNavigator,
}

/// Client-side navigation for in-app anchors
fn link_to(navigator: &BrowserNavigator, route: Route) -> Callback<MouseEvent> {
    let navigator = navigator.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        navigator.navigate(&route);
    })
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub label: AttrValue,
    pub loading: bool,
}

#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    html! {
        <button type="submit" class="form-btn" disabled={props.loading}>
            {if props.loading {
                html! {
                    <>
                        <span class="loading-spinner"></span>
                        {" Loading..."}
                    </>
                }
            } else {
                html! { {props.label.clone()} }
            }}
        </button>
    }
}

#[function_component(AuthForm)]
pub fn auth_form(props: &AuthFormProps) -> Html {
    let control = use_form_control();
    let (model, actions) = use_auth_flow(props.mode, &control, &props.api_client, &props.navigator);
    let flow = model.flow();
    let loading = flow.state().is_loading();
    let control = control.with_disabled(loading);
    let mode = flow.mode();

    let onsubmit = {
        let submit = actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let failure = flow.state().failure().map(|failure| {
        let dismiss = actions.dismiss_failure.reform(|_: MouseEvent| ());
        html! {
            <div class="form-message error" role="alert">
                <span>{failure.to_string()}</span>
                <button type="button" class="form-message-dismiss" onclick={dismiss}>
                    {"×"}
                </button>
            </div>
        }
    });

    let body = match flow.state() {
        AuthState::Linking { user, .. } => html! {
            <div class="flex flex-col gap-4">
                <AccountLinker
                    user={user.clone()}
                    variant={LinkVariant::Primary}
                    api_client={props.api_client.clone()}
                    on_complete={actions.link_complete.clone()}
                />
            </div>
        },
        AuthState::Redirected { .. } => html! {
            <div class="loading">
                <div class="loading-spinner"></div>
                <p>{"Redirecting..."}</p>
            </div>
        },
        AuthState::Form { .. } | AuthState::Submitting { .. } => html! {
            <>
                <form class="auth-form-fields" onsubmit={onsubmit} novalidate={true}>
                    {for mode.fields().iter().map(|field| html! {
                        <FormField
                            key={field.name()}
                            control={control.clone()}
                            field={*field}
                            label={field.label()}
                            placeholder={field.placeholder()}
                        />
                    })}
                    <div class="flex flex-col gap-4">
                        <SubmitButton label={mode.title()} loading={loading} />
                    </div>
                </form>

                <footer class="auth-footer">
                    <p class="auth-footer-prompt">{mode.footer_prompt()}</p>
                    {if loading {
                        // No mode switch while a request is in flight
                        html! {
                            <span class="form-link disabled" aria-disabled="true">
                                {mode.footer_link_label()}
                            </span>
                        }
                    } else {
                        html! {
                            <a
                                href={mode.alternate().route()}
                                class="form-link"
                                onclick={link_to(&props.navigator, Route::new(mode.alternate().route()))}
                            >
                                {mode.footer_link_label()}
                            </a>
                        }
                    }}
                </footer>
            </>
        },
    };

    html! {
        <section class="auth-form">
            <header class="auth-form-header">
                <a
                    href="/"
                    class="auth-form-logo"
                    onclick={link_to(&props.navigator, Route::root())}
                >
                    <h1 class="auth-form-brand">{"Horizon"}</h1>
                </a>
                <div class="auth-form-titles">
                    <h1 class="auth-form-heading">{flow.heading()}</h1>
                    <p class="auth-form-subheading">{flow.subheading()}</p>
                </div>
            </header>

            {failure.unwrap_or_default()}
            {body}
        </section>
    }
}
