pub mod account_linker;
pub mod animated_counter;
pub mod auth_form;
pub mod balance_summary;
pub mod dashboard;
pub mod doughnut_chart;
pub mod form_field;

pub use account_linker::AccountLinker;
pub use animated_counter::AnimatedCounter;
pub use auth_form::AuthForm;
pub use balance_summary::BalanceSummary;
pub use dashboard::Dashboard;
pub use doughnut_chart::DoughnutChart;
pub use form_field::FormField;
