use std::rc::Rc;

use shared::{AuthFormValues, FieldId, ValidationErrors};
use yew::prelude::*;
use zeroize::Zeroize;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormModel {
    values: AuthFormValues,
    errors: ValidationErrors,
}

pub enum FormAction {
    SetValue(FieldId, String),
    SetErrors(ValidationErrors),
    Reset,
}

impl Reducible for FormModel {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::SetValue(field, value) => {
                next.values.set(field, value);
                next.errors.clear_field(field);
            }
            FormAction::SetErrors(errors) => next.errors = errors,
            FormAction::Reset => {
                next.values.zeroize();
                next.errors = ValidationErrors::default();
            }
        }
        Rc::new(next)
    }
}

/// Shared handle to the auth form's values and per-field errors
#[derive(Clone, PartialEq)]
pub struct FormControl {
    model: UseReducerHandle<FormModel>,
    disabled: bool,
}

impl FormControl {
    pub fn value(&self, field: FieldId) -> String {
        self.model.values.get(field).to_string()
    }

    pub fn first_error(&self, field: FieldId) -> Option<String> {
        self.model.errors.first(field).map(ToString::to_string)
    }

    /// Stores `value` and clears that field's errors
    pub fn set_value(&self, field: FieldId, value: String) {
        self.model.dispatch(FormAction::SetValue(field, value));
    }

    pub fn set_errors(&self, errors: ValidationErrors) {
        self.model.dispatch(FormAction::SetErrors(errors));
    }

    pub fn reset(&self) {
        self.model.dispatch(FormAction::Reset);
    }

    pub fn values(&self) -> AuthFormValues {
        self.model.values.clone()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn with_disabled(self, disabled: bool) -> Self {
        Self { disabled, ..self }
    }
}

#[hook]
pub fn use_form_control() -> FormControl {
    let model = use_reducer(FormModel::default);
    FormControl {
        model,
        disabled: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::FieldError;

    #[test]
    fn test_typing_clears_only_that_fields_errors() {
        let mut errors = ValidationErrors::default();
        errors.push(FieldId::Email, FieldError::InvalidEmail);
        errors.push(FieldId::Password, FieldError::Required);

        let model = Rc::new(FormModel::default()).reduce(FormAction::SetErrors(errors));
        let model = model.reduce(FormAction::SetValue(FieldId::Email, "ada@example.com".to_string()));

        assert_eq!(model.values.email, "ada@example.com");
        assert!(model.errors.first(FieldId::Email).is_none());
        assert_eq!(model.errors.first(FieldId::Password), Some(&FieldError::Required));
    }

    #[test]
    fn test_reset_clears_values_and_errors() {
        let model = Rc::new(FormModel::default())
            .reduce(FormAction::SetValue(FieldId::Password, "hunter22".to_string()));
        let model = model.reduce(FormAction::Reset);
        assert_eq!(*model, FormModel::default());
    }
}
