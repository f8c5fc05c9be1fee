//! # Auth forms
//!
//! Field definitions, the per-mode validation schema and the typed payloads
//! handed to the identity service once a form validates.

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::ServiceError;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Which auth page is being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthMode {
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "sign-in",
            AuthMode::SignUp => "sign-up",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sign-in" => Some(AuthMode::SignIn),
            "sign-up" => Some(AuthMode::SignUp),
            _ => None,
        }
    }

    /// Page heading, also used as the submit button label
    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Sign Up",
        }
    }

    /// Route of the page rendering this mode
    pub fn route(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "/sign-in",
            AuthMode::SignUp => "/sign-up",
        }
    }

    pub fn alternate(&self) -> AuthMode {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    pub fn footer_prompt(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Don't have an account?",
            AuthMode::SignUp => "Already have an account?",
        }
    }

    pub fn footer_link_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign up",
            AuthMode::SignUp => "Sign in",
        }
    }

    /// Fields rendered for this mode, in display order
    pub fn fields(&self) -> &'static [FieldId] {
        match self {
            AuthMode::SignIn => &[FieldId::Email, FieldId::Password],
            AuthMode::SignUp => &FieldId::ALL,
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of one form slot. The wire name doubles as the input `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FirstName,
    LastName,
    Address1,
    City,
    State,
    PostalCode,
    DateOfBirth,
    Ssn,
    Email,
    Password,
}

impl FieldId {
    pub const ALL: [FieldId; 10] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Address1,
        FieldId::City,
        FieldId::State,
        FieldId::PostalCode,
        FieldId::DateOfBirth,
        FieldId::Ssn,
        FieldId::Email,
        FieldId::Password,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Address1 => "address1",
            FieldId::City => "city",
            FieldId::State => "state",
            FieldId::PostalCode => "postalCode",
            FieldId::DateOfBirth => "dateOfBirth",
            FieldId::Ssn => "ssn",
            FieldId::Email => "email",
            FieldId::Password => "password",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        FieldId::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name",
            FieldId::LastName => "Last Name",
            FieldId::Address1 => "Address",
            FieldId::City => "City",
            FieldId::State => "State",
            FieldId::PostalCode => "Postal Code",
            FieldId::DateOfBirth => "Date of Birth",
            FieldId::Ssn => "SSN",
            FieldId::Email => "Email",
            FieldId::Password => "Password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldId::FirstName => "Enter your first name",
            FieldId::LastName => "Enter your last name",
            FieldId::Address1 => "Enter your specific address",
            FieldId::City => "Enter your city",
            FieldId::State => "Example: NY",
            FieldId::PostalCode => "Example: 11101",
            FieldId::DateOfBirth => "YYYY-MM-DD",
            FieldId::Ssn => "1234",
            FieldId::Email => "Enter your email",
            FieldId::Password => "Enter your password",
        }
    }

    pub fn input_type(&self) -> &'static str {
        input_type_for(self.name())
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// HTML input type for a field name: masked only for the literal `password`.
pub fn input_type_for(name: &str) -> &'static str {
    if name == "password" {
        "password"
    } else {
        "text"
    }
}

/// Raw, unvalidated contents of every auth form slot. Wiped on drop, so
/// copies held by UI state do not leave the password or SSN behind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct AuthFormValues {
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub date_of_birth: String,
    pub ssn: String,
    pub email: String,
    pub password: String,
}

impl AuthFormValues {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Address1 => &self.address1,
            FieldId::City => &self.city,
            FieldId::State => &self.state,
            FieldId::PostalCode => &self.postal_code,
            FieldId::DateOfBirth => &self.date_of_birth,
            FieldId::Ssn => &self.ssn,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let slot = match field {
            FieldId::FirstName => &mut self.first_name,
            FieldId::LastName => &mut self.last_name,
            FieldId::Address1 => &mut self.address1,
            FieldId::City => &mut self.city,
            FieldId::State => &mut self.state,
            FieldId::PostalCode => &mut self.postal_code,
            FieldId::DateOfBirth => &mut self.date_of_birth,
            FieldId::Ssn => &mut self.ssn,
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
        };
        slot.zeroize();
        *slot = value.into();
    }
}

/// A single check applied to a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Required,
    MinLen(usize),
    MaxLen(usize),
    ExactLen(usize),
    Digits,
    Email,
    IsoDate,
}

impl FieldRule {
    pub fn check(&self, value: &str) -> Result<(), FieldError> {
        let len = value.chars().count();
        match *self {
            FieldRule::Required if value.is_empty() => Err(FieldError::Required),
            FieldRule::MinLen(min) if len < min => Err(FieldError::TooShort { min }),
            FieldRule::MaxLen(max) if len > max => Err(FieldError::TooLong { max }),
            FieldRule::ExactLen(exact) if len != exact => Err(FieldError::WrongLength { exact }),
            FieldRule::Digits if !value.chars().all(|c| c.is_ascii_digit()) => {
                Err(FieldError::NotDigits)
            }
            FieldRule::Email if !EMAIL_PATTERN.is_match(value) => Err(FieldError::InvalidEmail),
            FieldRule::IsoDate
                if value.len() != 10 || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() =>
            {
                Err(FieldError::InvalidDate)
            }
            _ => Ok(()),
        }
    }
}

/// Why a field value was rejected. The `Display` text is what the form shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,

    #[error("Must contain at least {min} character(s)")]
    TooShort { min: usize },

    #[error("Must contain at most {max} character(s)")]
    TooLong { max: usize },

    #[error("Must contain exactly {exact} character(s)")]
    WrongLength { exact: usize },

    #[error("Must contain only digits")]
    NotDigits,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Enter a valid date as YYYY-MM-DD")]
    InvalidDate,
}

/// Per-field validation failures, in rule order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldId, Vec<FieldError>>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn push(&mut self, field: FieldId, error: FieldError) {
        self.errors.entry(field).or_default().push(error);
    }

    pub fn get(&self, field: FieldId) -> &[FieldError] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The message shown under the field, if any
    pub fn first(&self, field: FieldId) -> Option<&FieldError> {
        self.get(field).first()
    }

    pub fn clear_field(&mut self, field: FieldId) {
        self.errors.remove(&field);
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.errors.keys().copied()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.errors.keys().map(FieldId::name).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

/// Field requirements for one auth mode
#[derive(Debug, Clone, PartialEq)]
pub struct AuthFormSchema {
    mode: AuthMode,
    rules: Vec<(FieldId, Vec<FieldRule>)>,
}

/// Selects the validation schema for `mode`. Sign-up requires the whole
/// profile; sign-in only the credentials.
pub fn auth_form_schema(mode: AuthMode) -> AuthFormSchema {
    use FieldRule::*;

    let mut rules = Vec::new();
    if mode == AuthMode::SignUp {
        rules.extend([
            (FieldId::FirstName, vec![Required, MinLen(3)]),
            (FieldId::LastName, vec![Required, MinLen(3)]),
            (FieldId::Address1, vec![Required, MaxLen(50)]),
            (FieldId::City, vec![Required, MaxLen(50)]),
            (FieldId::State, vec![Required, ExactLen(2)]),
            (FieldId::PostalCode, vec![Required, MinLen(3), MaxLen(6)]),
            (FieldId::DateOfBirth, vec![Required, IsoDate]),
            (FieldId::Ssn, vec![Required, ExactLen(4), Digits]),
        ]);
    }
    rules.push((FieldId::Email, vec![Required, Email]));
    rules.push((FieldId::Password, vec![Required, MinLen(8)]));

    AuthFormSchema { mode, rules }
}

impl AuthFormSchema {
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn requires(&self, field: FieldId) -> bool {
        self.rules.iter().any(|(id, _)| *id == field)
    }

    pub fn rules_for(&self, field: FieldId) -> &[FieldRule] {
        self.rules
            .iter()
            .find(|(id, _)| *id == field)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or(&[])
    }

    /// Checks every required field. A failed `Required` stops further checks
    /// for that field.
    pub fn check(&self, values: &AuthFormValues) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        for (field, rules) in &self.rules {
            let value = normalized(*field, values.get(*field));
            for rule in rules {
                if let Err(error) = rule.check(value) {
                    let stop = error == FieldError::Required;
                    errors.push(*field, error);
                    if stop {
                        break;
                    }
                }
            }
        }
        errors
    }

    /// Validates `values` and builds the payload for the identity service.
    pub fn validate(&self, values: &AuthFormValues) -> Result<AuthSubmission, ValidationErrors> {
        let errors = self.check(values);
        if !errors.is_empty() {
            return Err(errors);
        }

        let credentials = Credentials {
            email: values.email.trim().to_string(),
            password: values.password.clone(),
        };

        Ok(match self.mode {
            AuthMode::SignIn => AuthSubmission::SignIn(credentials),
            AuthMode::SignUp => AuthSubmission::SignUp(SignUpRequest {
                profile: Profile {
                    first_name: values.first_name.trim().to_string(),
                    last_name: values.last_name.trim().to_string(),
                    address1: values.address1.trim().to_string(),
                    city: values.city.trim().to_string(),
                    state: values.state.trim().to_string(),
                    postal_code: values.postal_code.trim().to_string(),
                    date_of_birth: values.date_of_birth.trim().to_string(),
                    ssn: values.ssn.trim().to_string(),
                },
                credentials,
            }),
        })
    }
}

// Passwords are checked verbatim, everything else trimmed
fn normalized(field: FieldId, value: &str) -> &str {
    if field == FieldId::Password {
        value
    } else {
        value.trim()
    }
}

/// Email and password. Wiped from memory on drop.
#[derive(Clone, PartialEq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Sign-up profile, forwarded once to the identity service
#[derive(Clone, PartialEq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub date_of_birth: String,
    pub ssn: String,
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("city", &self.city)
            .field("state", &self.state)
            .field("ssn", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Body of the sign-up call: profile and credentials in one flat object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpRequest {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(flatten)]
    pub credentials: Credentials,
}

/// A validated form, ready to send
#[derive(Debug, Clone, PartialEq)]
pub enum AuthSubmission {
    SignIn(Credentials),
    SignUp(SignUpRequest),
}

impl AuthSubmission {
    pub fn mode(&self) -> AuthMode {
        match self {
            AuthSubmission::SignIn(_) => AuthMode::SignIn,
            AuthSubmission::SignUp(_) => AuthMode::SignUp,
        }
    }
}

/// Identity-service user returned by a successful sign-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(alias = "$id", alias = "userId")]
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl SessionUser {
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            _ => self.email.clone().unwrap_or_else(|| self.id.clone()),
        }
    }
}

/// Opaque sign-in result. Only its truthiness matters to the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignInResponse(pub serde_json::Value);

impl SignInResponse {
    /// JavaScript-style truthiness of the response body
    pub fn is_truthy(&self) -> bool {
        match &self.0 {
            serde_json::Value::Null => false,
            serde_json::Value::Bool(flag) => *flag,
            serde_json::Value::Number(n) => n.as_f64().map_or(true, |v| v != 0.0 && !v.is_nan()),
            serde_json::Value::String(s) => !s.is_empty(),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
        }
    }
}

/// External identity provider. `Ok(None)` is a falsy result.
#[async_trait(?Send)]
pub trait IdentityService {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<Option<SessionUser>, ServiceError>;

    async fn sign_in(&self, credentials: &Credentials) -> Result<Option<SignInResponse>, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_sign_up_values() -> AuthFormValues {
        AuthFormValues {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            address1: "12 Analytical Way".to_string(),
            city: "Brooklyn".to_string(),
            state: "NY".to_string(),
            postal_code: "11101".to_string(),
            date_of_birth: "1990-12-10".to_string(),
            ssn: "1234".to_string(),
            email: "ada@example.com".to_string(),
            password: "engine-notes".to_string(),
        }
    }

    #[test]
    fn test_form_values_are_wiped_on_drop() {
        fn assert_zeroize_on_drop<T: ZeroizeOnDrop>() {}
        assert_zeroize_on_drop::<AuthFormValues>();

        let mut values = valid_sign_up_values();
        values.zeroize();
        assert_eq!(values, AuthFormValues::default());
    }

    #[test]
    fn test_input_type_only_masks_password() {
        assert_eq!(input_type_for("password"), "password");
        assert_eq!(input_type_for("Password"), "text");
        assert_eq!(input_type_for("ssn"), "text");
        assert_eq!(input_type_for("email"), "text");

        for field in FieldId::ALL {
            let expected = if field == FieldId::Password { "password" } else { "text" };
            assert_eq!(field.input_type(), expected, "field {}", field);
        }
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in FieldId::ALL {
            assert_eq!(FieldId::from_name(field.name()), Some(field));
        }
        assert_eq!(FieldId::from_name("address2"), None);
    }

    #[test]
    fn test_sign_in_schema_requires_only_credentials() {
        let schema = auth_form_schema(AuthMode::SignIn);
        assert!(schema.requires(FieldId::Email));
        assert!(schema.requires(FieldId::Password));
        for field in &FieldId::ALL[..8] {
            assert!(!schema.requires(*field), "sign-in should not require {}", field);
        }
    }

    #[test]
    fn test_sign_up_schema_requires_everything() {
        let schema = auth_form_schema(AuthMode::SignUp);
        for field in FieldId::ALL {
            assert!(schema.requires(field), "sign-up should require {}", field);
            assert_eq!(schema.rules_for(field).first(), Some(&FieldRule::Required));
        }
    }

    #[test]
    fn test_every_empty_required_field_reports_error() {
        for mode in [AuthMode::SignIn, AuthMode::SignUp] {
            let schema = auth_form_schema(mode);
            for field in mode.fields() {
                let mut values = valid_sign_up_values();
                values.set(*field, "");

                let errors = schema.validate(&values).unwrap_err();
                let first = errors.first(*field).expect("empty field must report an error");
                assert_eq!(first, &FieldError::Required);
                assert!(!first.to_string().is_empty());
                assert_eq!(errors.len(), 1, "{} in {} should be the only failure", field, mode);
            }
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut values = valid_sign_up_values();
        values.first_name = "   ".to_string();
        let errors = auth_form_schema(AuthMode::SignUp).check(&values);
        assert_eq!(errors.first(FieldId::FirstName), Some(&FieldError::Required));
    }

    #[test]
    fn test_sign_in_ignores_profile_fields() {
        let mut values = AuthFormValues::default();
        values.set(FieldId::Email, "ada@example.com");
        values.set(FieldId::Password, "engine-notes");
        let submission = auth_form_schema(AuthMode::SignIn).validate(&values).unwrap();
        match submission {
            AuthSubmission::SignIn(credentials) => {
                assert_eq!(credentials.email, "ada@example.com");
                assert_eq!(credentials.password, "engine-notes");
            }
            other => panic!("expected sign-in submission, got {:?}", other),
        }
    }

    #[test]
    fn test_rule_violations() {
        let schema = auth_form_schema(AuthMode::SignUp);
        let mut values = valid_sign_up_values();
        values.first_name = "Al".to_string();
        values.state = "New York".to_string();
        values.postal_code = "1110100".to_string();
        values.date_of_birth = "1990-13-40".to_string();
        values.ssn = "12a4".to_string();
        values.email = "not-an-email".to_string();
        values.password = "short".to_string();

        let errors = schema.check(&values);
        assert_eq!(errors.first(FieldId::FirstName), Some(&FieldError::TooShort { min: 3 }));
        assert_eq!(errors.first(FieldId::State), Some(&FieldError::WrongLength { exact: 2 }));
        assert_eq!(errors.first(FieldId::PostalCode), Some(&FieldError::TooLong { max: 6 }));
        assert_eq!(errors.first(FieldId::DateOfBirth), Some(&FieldError::InvalidDate));
        assert_eq!(errors.first(FieldId::Ssn), Some(&FieldError::NotDigits));
        assert_eq!(errors.first(FieldId::Email), Some(&FieldError::InvalidEmail));
        assert_eq!(errors.first(FieldId::Password), Some(&FieldError::TooShort { min: 8 }));
        assert!(errors.first(FieldId::LastName).is_none());
    }

    #[test]
    fn test_ssn_collects_every_failure_in_order() {
        let mut values = valid_sign_up_values();
        values.ssn = "12x".to_string();
        let errors = auth_form_schema(AuthMode::SignUp).check(&values);
        assert_eq!(
            errors.get(FieldId::Ssn),
            &[FieldError::WrongLength { exact: 4 }, FieldError::NotDigits]
        );
    }

    #[test]
    fn test_date_requires_zero_padding() {
        assert!(FieldRule::IsoDate.check("1990-01-05").is_ok());
        assert_eq!(FieldRule::IsoDate.check("1990-1-5"), Err(FieldError::InvalidDate));
        assert_eq!(FieldRule::IsoDate.check("1990-02-30"), Err(FieldError::InvalidDate));
    }

    #[test]
    fn test_sign_up_payload_is_trimmed_and_flat() {
        let mut values = valid_sign_up_values();
        values.city = "  Brooklyn ".to_string();
        values.password = " spaced password ".to_string();

        let submission = auth_form_schema(AuthMode::SignUp).validate(&values).unwrap();
        let AuthSubmission::SignUp(request) = submission else {
            panic!("expected sign-up submission");
        };
        assert_eq!(request.profile.city, "Brooklyn");
        assert_eq!(request.credentials.password, " spaced password ");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["postalCode"], "11101");
        assert_eq!(json["email"], "ada@example.com");
        assert!(json.get("profile").is_none());
    }

    #[test]
    fn test_debug_output_redacts_secrets() {
        let credentials = Credentials {
            email: "ada@example.com".to_string(),
            password: "engine-notes".to_string(),
        };
        let printed = format!("{:?}", credentials);
        assert!(printed.contains("ada@example.com"));
        assert!(!printed.contains("engine-notes"));
    }

    #[test]
    fn test_sign_in_response_truthiness() {
        use serde_json::json;
        assert!(!SignInResponse(json!(null)).is_truthy());
        assert!(!SignInResponse(json!(false)).is_truthy());
        assert!(!SignInResponse(json!(0)).is_truthy());
        assert!(!SignInResponse(json!("")).is_truthy());
        assert!(SignInResponse(json!({"$id": "session"})).is_truthy());
        assert!(SignInResponse(json!("token")).is_truthy());
        assert!(SignInResponse(json!([])).is_truthy());
    }

    #[test]
    fn test_session_user_accepts_provider_id_key() {
        let user: SessionUser =
            serde_json::from_str(r#"{"$id":"u_1","firstName":"Ada","lastName":"Lovelace"}"#).unwrap();
        assert_eq!(user.id, "u_1");
        assert_eq!(user.display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_mode_presentation() {
        assert_eq!(AuthMode::SignIn.title(), "Sign In");
        assert_eq!(AuthMode::SignUp.alternate().route(), "/sign-in");
        assert_eq!(AuthMode::SignIn.footer_prompt(), "Don't have an account?");
        assert_eq!(AuthMode::parse("sign-up"), Some(AuthMode::SignUp));
        assert_eq!(AuthMode::parse("register"), None);
        assert_eq!(AuthMode::SignIn.fields(), &[FieldId::Email, FieldId::Password]);
    }
}
