use std::rc::Rc;

use shared::{
    AuthFailure, AuthFlow, AuthFormValues, AuthMode, AuthState, AuthSubmission, IdentityService,
    LinkOutcome, Navigator, Route, ServiceError, SessionUser, SignInResponse, SubmitRejected,
    ValidationErrors,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::FormControl;
use crate::services::{ApiClient, BrowserNavigator, Logger};

const COMPONENT: &str = "auth-form";

pub enum AuthAction {
    Submit(AuthFormValues),
    SignUpFinished(Result<Option<SessionUser>, ServiceError>),
    SignInFinished(Result<Option<SignInResponse>, ServiceError>),
    LinkFinished(LinkOutcome),
    SwitchMode(AuthMode),
    DismissFailure,
}

/// The live `AuthFlow` plus the side effects its last step asked for.
/// Each effect carries a sequence number so it runs once.
#[derive(Clone, PartialEq)]
pub struct AuthModel {
    flow: AuthFlow,
    submission: Option<(u32, AuthSubmission)>,
    invalid: Option<(u32, ValidationErrors)>,
    redirect: Option<(u32, Route)>,
    sequence: u32,
}

impl AuthModel {
    pub fn new(mode: AuthMode, root: Route) -> Self {
        Self {
            flow: AuthFlow::with_root(mode, root),
            submission: None,
            invalid: None,
            redirect: None,
            sequence: 0,
        }
    }

    pub fn flow(&self) -> &AuthFlow {
        &self.flow
    }

    fn next_sequence(&mut self) -> u32 {
        self.sequence += 1;
        self.sequence
    }
}

impl Reducible for AuthModel {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AuthAction::Submit(values) => match next.flow.begin_submit(&values) {
                Ok(submission) => {
                    let sequence = next.next_sequence();
                    next.submission = Some((sequence, submission));
                }
                Err(SubmitRejected::Invalid(errors)) => {
                    let sequence = next.next_sequence();
                    next.invalid = Some((sequence, errors));
                }
                // Logged by the flow; the in-flight request stays the only one
                Err(_) => {}
            },
            AuthAction::SignUpFinished(result) => next.flow.finish_sign_up(result),
            AuthAction::SignInFinished(result) => {
                if let Some(route) = next.flow.finish_sign_in(result) {
                    let sequence = next.next_sequence();
                    next.redirect = Some((sequence, route));
                }
            }
            AuthAction::LinkFinished(outcome) => {
                if let Some(route) = next.flow.finish_linking(outcome) {
                    let sequence = next.next_sequence();
                    next.redirect = Some((sequence, route));
                }
            }
            AuthAction::SwitchMode(mode) => {
                if next.flow.mode() != mode {
                    next.flow.switch_mode(mode);
                    next.submission = None;
                }
            }
            AuthAction::DismissFailure => next.flow.clear_failure(),
        }
        Rc::new(next)
    }
}

pub struct AuthFlowActions {
    pub submit: Callback<()>,
    pub link_complete: Callback<LinkOutcome>,
    pub dismiss_failure: Callback<()>,
}

/// Auth page state machine wired to the API client and browser history
#[hook]
pub fn use_auth_flow(
    mode: AuthMode,
    control: &FormControl,
    api_client: &ApiClient,
    navigator: &BrowserNavigator,
) -> (UseReducerHandle<AuthModel>, AuthFlowActions) {
    let root = Route::new(api_client.config().root_route.clone());
    let model = use_reducer(move || AuthModel::new(mode, root));

    // Following the alternate-mode link reuses this component; any session
    // user from the previous mode is discarded with the old state.
    use_effect_with(mode, {
        let dispatcher = model.dispatcher();
        let control = control.clone();
        move |mode| {
            dispatcher.dispatch(AuthAction::SwitchMode(*mode));
            control.reset();
            || ()
        }
    });

    // Exactly one identity call per accepted submission
    {
        let dispatcher = model.dispatcher();
        let api_client = api_client.clone();
        let submission = model.submission.clone();
        use_effect_with(model.submission.as_ref().map(|(sequence, _)| *sequence), move |_| {
            if let Some((_, submission)) = submission {
                spawn_local(async move {
                    match submission {
                        AuthSubmission::SignUp(request) => {
                            let result = api_client.sign_up(&request).await;
                            dispatcher.dispatch(AuthAction::SignUpFinished(result));
                        }
                        AuthSubmission::SignIn(credentials) => {
                            let result = api_client.sign_in(&credentials).await;
                            dispatcher.dispatch(AuthAction::SignInFinished(result));
                        }
                    }
                });
            }
            || ()
        });
    }

    {
        let control = control.clone();
        let invalid = model.invalid.clone();
        use_effect_with(model.invalid.as_ref().map(|(sequence, _)| *sequence), move |_| {
            if let Some((_, errors)) = invalid {
                Logger::debug_with_component(COMPONENT, &format!("Validation failed: {}", errors));
                control.set_errors(errors);
            }
            || ()
        });
    }

    {
        let navigator = navigator.clone();
        let redirect = model.redirect.clone();
        use_effect_with(model.redirect.as_ref().map(|(sequence, _)| *sequence), move |_| {
            if let Some((_, route)) = redirect {
                Logger::info_with_component(COMPONENT, &format!("Redirecting to {}", route));
                navigator.navigate(&route);
            }
            || ()
        });
    }

    // Credentials leave the form once a submission gets past it
    {
        let control = control.clone();
        let past_form = matches!(
            model.flow.state(),
            AuthState::Linking { .. } | AuthState::Redirected { .. }
        );
        use_effect_with(past_form, move |past_form| {
            if *past_form {
                control.reset();
            }
            || ()
        });
    }

    {
        let failure: Option<AuthFailure> = model.flow.state().failure().cloned();
        use_effect_with(failure, |failure| {
            if let Some(failure) = failure {
                Logger::error_with_component(COMPONENT, &failure.to_string());
            }
            || ()
        });
    }

    let submit = {
        let dispatcher = model.dispatcher();
        let control = control.clone();
        Callback::from(move |_| dispatcher.dispatch(AuthAction::Submit(control.values())))
    };

    let link_complete = {
        let dispatcher = model.dispatcher();
        Callback::from(move |outcome: LinkOutcome| dispatcher.dispatch(AuthAction::LinkFinished(outcome)))
    };

    let dismiss_failure = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(AuthAction::DismissFailure))
    };

    (
        model,
        AuthFlowActions {
            submit,
            link_complete,
            dismiss_failure,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::FieldId;

    fn sign_up_values() -> AuthFormValues {
        let mut values = AuthFormValues::default();
        for (field, value) in [
            (FieldId::FirstName, "Grace"),
            (FieldId::LastName, "Hopper"),
            (FieldId::Address1, "1 Navy Yard"),
            (FieldId::City, "Arlington"),
            (FieldId::State, "VA"),
            (FieldId::PostalCode, "22202"),
            (FieldId::DateOfBirth, "1906-12-09"),
            (FieldId::Ssn, "0042"),
            (FieldId::Email, "grace@example.com"),
            (FieldId::Password, "compiler-1952"),
        ] {
            values.set(field, value);
        }
        values
    }

    fn user() -> SessionUser {
        SessionUser {
            id: "user_42".to_string(),
            email: None,
            first_name: None,
            last_name: None,
        }
    }

    fn fresh(mode: AuthMode) -> Rc<AuthModel> {
        Rc::new(AuthModel::new(mode, Route::root()))
    }

    #[test]
    fn test_late_sign_up_after_mode_switch_is_dropped() {
        let model = fresh(AuthMode::SignUp).reduce(AuthAction::Submit(sign_up_values()));
        assert!(model.flow().state().is_loading());
        assert!(model.submission.is_some());

        let model = model.reduce(AuthAction::SwitchMode(AuthMode::SignIn));
        let model = model.reduce(AuthAction::SignUpFinished(Ok(Some(user()))));

        assert_eq!(model.flow().mode(), AuthMode::SignIn);
        assert_eq!(model.flow().state(), &AuthState::form(AuthMode::SignIn));
        assert!(model.flow().state().session_user().is_none());
    }

    #[test]
    fn test_late_sign_in_failure_after_mode_switch_keeps_new_mode() {
        let mut values = AuthFormValues::default();
        values.set(FieldId::Email, "grace@example.com");
        values.set(FieldId::Password, "compiler-1952");

        let model = fresh(AuthMode::SignIn).reduce(AuthAction::Submit(values));
        let model = model.reduce(AuthAction::SwitchMode(AuthMode::SignUp));
        let model = model.reduce(AuthAction::SignInFinished(Err(ServiceError::Network(
            "offline".to_string(),
        ))));

        assert_eq!(model.flow().state(), &AuthState::form(AuthMode::SignUp));
        assert!(model.redirect.is_none());
    }

    #[test]
    fn test_invalid_submit_reports_errors_without_a_request() {
        let model = fresh(AuthMode::SignIn).reduce(AuthAction::Submit(AuthFormValues::default()));
        assert!(model.submission.is_none());
        let (_, errors) = model.invalid.as_ref().expect("validation errors");
        assert!(errors.first(FieldId::Email).is_some());
        assert!(!model.flow().state().is_loading());
    }

    #[test]
    fn test_second_submit_in_flight_keeps_one_request() {
        let model = fresh(AuthMode::SignUp).reduce(AuthAction::Submit(sign_up_values()));
        let first = model.submission.as_ref().map(|(sequence, _)| *sequence);
        let model = model.reduce(AuthAction::Submit(sign_up_values()));
        assert_eq!(model.submission.as_ref().map(|(sequence, _)| *sequence), first);
    }

    #[test]
    fn test_sign_in_redirect_is_reported_once() {
        let mut values = AuthFormValues::default();
        values.set(FieldId::Email, "grace@example.com");
        values.set(FieldId::Password, "compiler-1952");

        let model = fresh(AuthMode::SignIn).reduce(AuthAction::Submit(values));
        let model = model.reduce(AuthAction::SignInFinished(Ok(Some(SignInResponse(
            serde_json::json!({"$id": "session_1"}),
        )))));
        let redirect = model.redirect.clone();
        assert_eq!(redirect.as_ref().map(|(_, route)| route.clone()), Some(Route::root()));

        // A duplicate answer does not produce another navigation
        let model = model.reduce(AuthAction::SignInFinished(Ok(None)));
        assert_eq!(model.redirect, redirect);
    }
}
