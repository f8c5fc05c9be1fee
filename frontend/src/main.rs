use std::rc::Rc;

use gloo::history::{BrowserHistory, History};
use shared::{AuthMode, DashboardConfig};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{AuthForm, Dashboard};
use services::config::load_config;
use services::{ApiClient, BrowserNavigator, Logger};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    SignIn,
    SignUp,
    Dashboard,
    NotFound,
}

impl Page {
    fn from_path(path: &str, root: &str) -> Self {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        let root = match root.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        if path == root {
            return Page::Dashboard;
        }
        match AuthMode::parse(path.trim_start_matches('/')) {
            Some(AuthMode::SignIn) => Page::SignIn,
            Some(AuthMode::SignUp) => Page::SignUp,
            None => Page::NotFound,
        }
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<DashboardConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let history = use_state(BrowserHistory::new);
    let path = use_state(|| history.location().path().to_string());

    // Re-render on navigation and on back/forward
    {
        let history = (*history).clone();
        let path = path.clone();
        use_effect_with((), move |_| {
            let listener = history.clone().listen(move || {
                path.set(history.location().path().to_string());
            });
            move || drop(listener)
        });
    }

    let api_client = ApiClient::with_config((*props.config).clone());
    let navigator = BrowserNavigator::new((*history).clone());
    let page = Page::from_path(&path, &props.config.root_route);

    let content = match page {
        Page::SignIn | Page::SignUp => {
            let mode = if page == Page::SignIn { AuthMode::SignIn } else { AuthMode::SignUp };
            html! {
                <main class="auth-layout">
                    <AuthForm mode={mode} api_client={api_client} navigator={navigator} />
                </main>
            }
        }
        Page::Dashboard => html! {
            <main class="root-layout">
                <Dashboard api_client={api_client} />
            </main>
        },
        Page::NotFound => html! {
            <main class="not-found">
                <h1>{"Page not found"}</h1>
                <a href={AuthMode::SignIn.route()}>{"Sign In"}</a>
            </main>
        },
    };

    html! {
        <ContextProvider<Rc<DashboardConfig>> context={props.config.clone()}>
            {content}
        </ContextProvider<Rc<DashboardConfig>>>
    }
}

fn main() {
    let config = load_config();
    Logger::init(&config);
    Logger::info_with_component("app", &format!("Starting dashboard against {}", config.api_base_url));

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
