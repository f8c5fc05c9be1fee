//! Platform-independent core of the Horizon dashboard: auth form schema,
//! the sign-in / sign-up / linking state machine, and the balance summary.

pub mod auth;
pub mod balance;
pub mod config;
pub mod counter;
pub mod error;
pub mod linking;
pub mod workflow;

pub use auth::{
    auth_form_schema, input_type_for, AuthFormSchema, AuthFormValues, AuthMode, AuthSubmission,
    Credentials, FieldError, FieldId, IdentityService, Profile, SessionUser, SignInResponse,
    SignUpRequest, ValidationErrors,
};
pub use balance::{format_amount, Account, AccountSummary, BalanceSlice};
pub use config::DashboardConfig;
pub use counter::CounterState;
pub use error::{ConfigError, ServiceError};
pub use linking::{
    ExchangeTokenRequest, LinkOutcome, LinkToken, LinkVariant, LinkedAccount,
    LinkerEvent, LinkerState, LinkingService, PublicToken,
};
pub use workflow::{AuthFailure, AuthFlow, AuthState, Navigator, Route, SubmitRejected};
