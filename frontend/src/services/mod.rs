pub mod api;
pub mod config;
pub mod logging;
pub mod navigation;
pub mod plaid;

pub use api::ApiClient;
pub use logging::Logger;
pub use navigation::BrowserNavigator;
