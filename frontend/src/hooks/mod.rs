pub mod use_accounts;
pub mod use_animated_counter;
pub mod use_auth_flow;
pub mod use_form_control;

pub use use_accounts::use_accounts;
pub use use_animated_counter::use_animated_counter;
pub use use_auth_flow::use_auth_flow;
pub use use_form_control::{use_form_control, FormControl};
