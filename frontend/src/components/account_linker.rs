use std::rc::Rc;

use shared::{
    LinkOutcome, LinkVariant, LinkerEvent, LinkerState, LinkingService, PublicToken, ServiceError,
    SessionUser,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::plaid::{self, LinkSession};
use crate::services::{ApiClient, Logger};

const COMPONENT: &str = "account-linker";

#[derive(Properties, PartialEq)]
pub struct AccountLinkerProps {
    pub user: SessionUser,
    #[prop_or_default]
    pub variant: LinkVariant,
    pub api_client: ApiClient,
    pub on_complete: Callback<LinkOutcome>,
}

/// Linker state plus the last outcome to report, numbered so each outcome
/// is emitted once
#[derive(Clone, Default, PartialEq)]
struct LinkerModel {
    state: LinkerState,
    reported: Option<LinkOutcome>,
    sequence: u32,
}

impl Reducible for LinkerModel {
    type Action = LinkerEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if let Some(outcome) = next.state.apply(action) {
            next.reported = Some(outcome);
            next.sequence += 1;
        }
        Rc::new(next)
    }
}

#[function_component(AccountLinker)]
pub fn account_linker(props: &AccountLinkerProps) -> Html {
    let model = use_reducer(LinkerModel::default);
    let fetching = matches!(model.state, LinkerState::FetchingToken);

    // Fetch a link token on mount and again after each retry
    {
        let dispatcher = model.dispatcher();
        let api_client = props.api_client.clone();
        let user = props.user.clone();
        use_effect_with(fetching, move |fetching| {
            if *fetching {
                spawn_local(async move {
                    let result = api_client.create_link_token(&user).await;
                    dispatcher.dispatch(LinkerEvent::TokenFetched(result));
                });
            }
            || ()
        });
    }

    {
        let on_complete = props.on_complete.clone();
        let reported = model.reported.clone();
        use_effect_with(model.sequence, move |sequence| {
            if *sequence > 0 {
                if let Some(outcome) = reported {
                    on_complete.emit(outcome);
                }
            }
            || ()
        });
    }

    // Plaid callbacks live until the session it opened has ended
    let session = use_mut_ref(|| Option::<LinkSession>::None);
    {
        let session = session.clone();
        let in_session = matches!(model.state, LinkerState::InSession(_));
        use_effect_with(in_session, move |in_session| {
            if !*in_session {
                session.borrow_mut().take();
            }
            || ()
        });
    }

    let onclick = {
        let session = session.clone();
        let dispatcher = model.dispatcher();
        let state = model.state.clone();
        let api_client = props.api_client.clone();
        let user = props.user.clone();

        Callback::from(move |_: MouseEvent| match &state {
            LinkerState::Failed(_) => dispatcher.dispatch(LinkerEvent::Retry),
            LinkerState::Ready(token) => {
                dispatcher.dispatch(LinkerEvent::SessionOpened);

                let on_success = {
                    let dispatcher = dispatcher.clone();
                    let api_client = api_client.clone();
                    let user = user.clone();
                    move |public_token: PublicToken| {
                        dispatcher.dispatch(LinkerEvent::SessionSucceeded(public_token.clone()));
                        spawn_local(async move {
                            let result = api_client.exchange_public_token(&user, &public_token).await;
                            dispatcher.dispatch(LinkerEvent::ExchangeFinished(result));
                        });
                    }
                };
                let on_exit = {
                    let dispatcher = dispatcher.clone();
                    move |error: Option<String>| match error {
                        Some(message) => dispatcher.dispatch(LinkerEvent::SessionFailed(ServiceError::Provider(message))),
                        None => dispatcher.dispatch(LinkerEvent::SessionExited),
                    }
                };

                match plaid::open_link_session(token, on_success, on_exit) {
                    Ok(opened) => *session.borrow_mut() = Some(opened),
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &e.to_string());
                        dispatcher.dispatch(LinkerEvent::SessionFailed(e));
                    }
                }
            }
            _ => {}
        })
    };

    let busy = model.state.is_busy() || matches!(model.state, LinkerState::Linked(_));

    html! {
        <button
            class={classes!("plaidlink-button", props.variant.class())}
            onclick={onclick}
            disabled={busy}
        >
            {if model.state.is_busy() {
                html! { <span class="loading-spinner"></span> }
            } else { html! {} }}
            <span class="plaidlink-label">{model.state.button_label(props.variant)}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::LinkToken;

    #[test]
    fn test_each_outcome_bumps_the_sequence_once() {
        let model = Rc::new(LinkerModel::default());
        let model = model.reduce(LinkerEvent::TokenFetched(Ok(LinkToken {
            link_token: "link-1".to_string(),
        })));
        assert_eq!(model.sequence, 0);

        let model = model.reduce(LinkerEvent::SessionOpened);
        let model = model.reduce(LinkerEvent::SessionExited);
        assert_eq!(model.sequence, 1);
        assert_eq!(model.reported, Some(LinkOutcome::Exited));

        // Ignored events keep the last report
        let model = model.reduce(LinkerEvent::Retry);
        assert_eq!(model.sequence, 1);

        let err = ServiceError::Provider("closed".to_string());
        let model = model.reduce(LinkerEvent::SessionFailed(err.clone()));
        assert_eq!(model.sequence, 2);
        assert_eq!(model.reported, Some(LinkOutcome::Failed(err)));
    }
}
