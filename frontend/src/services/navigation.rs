use gloo::history::{BrowserHistory, History};
use shared::{Navigator, Route};

use crate::services::Logger;

/// Pushes routes onto the browser history; the app re-renders from the
/// history listener.
#[derive(Clone, PartialEq)]
pub struct BrowserNavigator {
    history: BrowserHistory,
}

impl BrowserNavigator {
    pub fn new(history: BrowserHistory) -> Self {
        Self { history }
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, route: &Route) {
        Logger::debug_with_component("navigation", &format!("navigating to {}", route));
        self.history.push(route.as_str());
    }
}
