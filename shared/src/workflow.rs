//! # Auth workflow
//!
//! The sign-in / sign-up / bank-linking flow as an explicit state machine.
//! UI code drives it step by step (`begin_submit`, then one of the `finish_*`
//! calls once the collaborator answers); [`AuthFlow::submit`] runs a whole
//! submission against the collaborator traits in one go.

use std::fmt;
use std::mem;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::auth::{
    auth_form_schema, AuthFormValues, AuthMode, AuthSubmission, IdentityService, SessionUser,
    SignInResponse, ValidationErrors,
};
use crate::error::ServiceError;
use crate::linking::LinkOutcome;

/// A client-side route
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(String);

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn root() -> Self {
        Self("/".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Client-side navigation
pub trait Navigator {
    fn navigate(&self, route: &Route);
}

/// Failure shown inline in the auth form
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthFailure {
    #[error("{0}")]
    Service(ServiceError),

    #[error("Invalid email or password")]
    Rejected,

    #[error("Sign-up did not return an account, please try again")]
    NoSession,

    #[error("Bank linking was closed before it finished")]
    LinkExited,

    #[error("Bank linking failed: {0}")]
    LinkFailed(ServiceError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    /// Fields are editable; `failure` is the outcome of the last attempt
    Form {
        mode: AuthMode,
        failure: Option<AuthFailure>,
    },
    /// One identity-service call is in flight
    Submitting { mode: AuthMode },
    /// Sign-up succeeded, the account linker owns the UI
    Linking {
        user: SessionUser,
        failure: Option<AuthFailure>,
    },
    Redirected { route: Route },
}

impl AuthState {
    pub fn form(mode: AuthMode) -> Self {
        AuthState::Form { mode, failure: None }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Submitting { .. })
    }

    pub fn session_user(&self) -> Option<&SessionUser> {
        match self {
            AuthState::Linking { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&AuthFailure> {
        match self {
            AuthState::Form { failure, .. } | AuthState::Linking { failure, .. } => failure.as_ref(),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            AuthState::Form { .. } => "form",
            AuthState::Submitting { .. } => "submitting",
            AuthState::Linking { .. } => "linking",
            AuthState::Redirected { .. } => "redirected",
        }
    }
}

/// Why a submission did not start
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitRejected {
    #[error("form is invalid: {0}")]
    Invalid(ValidationErrors),

    #[error("a submission is already in flight")]
    InFlight,

    #[error("the form is not accepting input in the {0} state")]
    Closed(&'static str),
}

/// Auth page state plus the mode the page was opened in
#[derive(Debug, Clone, PartialEq)]
pub struct AuthFlow {
    mode: AuthMode,
    root: Route,
    state: AuthState,
}

impl AuthFlow {
    pub fn new(mode: AuthMode) -> Self {
        Self::with_root(mode, Route::root())
    }

    /// Flow that redirects to `root` instead of `/` once finished
    pub fn with_root(mode: AuthMode, root: Route) -> Self {
        Self {
            mode,
            root,
            state: AuthState::form(mode),
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn heading(&self) -> &'static str {
        match self.state {
            AuthState::Linking { .. } => "Link Account",
            _ => self.mode.title(),
        }
    }

    pub fn subheading(&self) -> &'static str {
        match self.state {
            AuthState::Linking { .. } => "Link your account to get started",
            _ => "Please enter your details",
        }
    }

    /// Validates `values` and moves `Form -> Submitting`. The returned
    /// submission must be sent to the identity service exactly once.
    pub fn begin_submit(&mut self, values: &AuthFormValues) -> Result<AuthSubmission, SubmitRejected> {
        let mode = match &self.state {
            AuthState::Form { mode, .. } => *mode,
            AuthState::Submitting { .. } => {
                debug!(mode = %self.mode, "submit ignored, request in flight");
                return Err(SubmitRejected::InFlight);
            }
            other => return Err(SubmitRejected::Closed(other.name())),
        };

        let submission = auth_form_schema(mode).validate(values).map_err(|errors| {
            debug!(mode = %mode, invalid = errors.len(), "auth form failed validation");
            SubmitRejected::Invalid(errors)
        })?;

        info!(mode = %mode, "submitting auth form");
        self.state = AuthState::Submitting { mode };
        Ok(submission)
    }

    /// Applies the sign-up answer. Only meaningful while submitting a sign-up.
    pub fn finish_sign_up(&mut self, result: Result<Option<SessionUser>, ServiceError>) {
        if self.state != (AuthState::Submitting { mode: AuthMode::SignUp }) {
            warn!(state = self.state.name(), "sign-up result ignored");
            return;
        }

        self.state = match result {
            Ok(Some(user)) => {
                info!(user_id = %user.id, "sign-up succeeded, starting bank linking");
                AuthState::Linking { user, failure: None }
            }
            Ok(None) => {
                warn!("sign-up returned no user");
                AuthState::Form {
                    mode: AuthMode::SignUp,
                    failure: Some(AuthFailure::NoSession),
                }
            }
            Err(e) => {
                warn!(error = %e, "sign-up failed");
                AuthState::Form {
                    mode: AuthMode::SignUp,
                    failure: Some(AuthFailure::Service(e)),
                }
            }
        };
    }

    /// Applies the sign-in answer and returns the route to navigate to, if any.
    pub fn finish_sign_in(&mut self, result: Result<Option<SignInResponse>, ServiceError>) -> Option<Route> {
        if self.state != (AuthState::Submitting { mode: AuthMode::SignIn }) {
            warn!(state = self.state.name(), "sign-in result ignored");
            return None;
        }

        match result {
            Ok(Some(response)) if response.is_truthy() => {
                info!(route = %self.root, "sign-in succeeded");
                self.state = AuthState::Redirected { route: self.root.clone() };
                Some(self.root.clone())
            }
            Ok(_) => {
                warn!("sign-in rejected");
                self.state = AuthState::Form {
                    mode: AuthMode::SignIn,
                    failure: Some(AuthFailure::Rejected),
                };
                None
            }
            Err(e) => {
                warn!(error = %e, "sign-in failed");
                self.state = AuthState::Form {
                    mode: AuthMode::SignIn,
                    failure: Some(AuthFailure::Service(e)),
                };
                None
            }
        }
    }

    /// Completion report from the account linker
    pub fn finish_linking(&mut self, outcome: LinkOutcome) -> Option<Route> {
        let user = match mem::replace(&mut self.state, AuthState::form(self.mode)) {
            AuthState::Linking { user, .. } => user,
            other => {
                warn!(state = other.name(), "linking outcome ignored");
                self.state = other;
                return None;
            }
        };

        match outcome {
            LinkOutcome::Linked(account) => {
                info!(user_id = %user.id, item_id = %account.item_id, "bank account linked");
                self.state = AuthState::Redirected { route: self.root.clone() };
                Some(self.root.clone())
            }
            LinkOutcome::Exited => {
                debug!(user_id = %user.id, "linking session exited");
                self.state = AuthState::Linking {
                    user,
                    failure: Some(AuthFailure::LinkExited),
                };
                None
            }
            LinkOutcome::Failed(e) => {
                warn!(user_id = %user.id, error = %e, "bank linking failed");
                self.state = AuthState::Linking {
                    user,
                    failure: Some(AuthFailure::LinkFailed(e)),
                };
                None
            }
        }
    }

    /// Switches the page mode, discarding any session user
    pub fn switch_mode(&mut self, mode: AuthMode) {
        if self.state.is_loading() {
            debug!(from = %self.mode, to = %mode, "mode switched while a request is in flight");
        }
        self.mode = mode;
        self.state = AuthState::form(mode);
    }

    /// Back to an empty form in the current mode, dropping any session user
    pub fn reset(&mut self) {
        self.state = AuthState::form(self.mode);
    }

    /// Dismisses the inline failure, keeping everything else
    pub fn clear_failure(&mut self) {
        match &mut self.state {
            AuthState::Form { failure, .. } | AuthState::Linking { failure, .. } => *failure = None,
            _ => {}
        }
    }

    /// Runs one full submission: validation, exactly one identity call, and
    /// the navigation a successful sign-in asks for.
    pub async fn submit<I, N>(
        &mut self,
        values: &AuthFormValues,
        identity: &I,
        navigator: &N,
    ) -> Result<&AuthState, SubmitRejected>
    where
        I: IdentityService + ?Sized,
        N: Navigator + ?Sized,
    {
        match self.begin_submit(values)? {
            AuthSubmission::SignUp(request) => {
                let result = identity.sign_up(&request).await;
                self.finish_sign_up(result);
            }
            AuthSubmission::SignIn(credentials) => {
                let result = identity.sign_in(&credentials).await;
                if let Some(route) = self.finish_sign_in(result) {
                    navigator.navigate(&route);
                }
            }
        }
        Ok(&self.state)
    }
}
