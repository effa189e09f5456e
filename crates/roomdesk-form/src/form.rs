//! Controlled form state.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::focus::{self, BoundControl, Control, KeyEvent, KeyOutcome};
use crate::rules::ValidatorConfig;
use crate::validator::{validate_field, validate_values};
use crate::value::{Errors, FieldValue, Values};

/// Values, field errors and a submit error for one form.
///
/// The engine keeps the values it was created with and can return to them
/// with [`reset`](Self::reset). Errors are only ever produced by
/// validation; any change to a value clears them.
///
/// # Example
///
/// ```
/// use roomdesk_form::{FormEngine, Rule, ValidatorConfig, Values};
///
/// let config = ValidatorConfig::new()
///     .rule("email", Rule::Required, "Email is required")
///     .rule("email", Rule::Email, "Email is not valid");
/// let initial = Values::new().with("email", "").with("password", "");
/// let mut form = FormEngine::new(initial, false, config);
///
/// assert!(!form.validate_current());
/// assert_eq!(form.error("email"), Some("Email is required"));
///
/// form.handle_change("email", "guest@hotel.com");
/// assert!(form.errors().is_empty());
/// assert!(form.validate_current());
/// ```
#[derive(Debug, Clone)]
pub struct FormEngine {
    initial: Values,
    values: Values,
    errors: Errors,
    submit_error: Option<String>,
    validate_on_change: bool,
    config: ValidatorConfig,
}

impl FormEngine {
    /// Create a form holding `initial`.
    ///
    /// With `validate_on_change`, every change re-checks the changed field.
    pub fn new(initial: Values, validate_on_change: bool, config: ValidatorConfig) -> Self {
        Self {
            values: initial.clone(),
            initial,
            errors: Errors::new(),
            submit_error: None,
            validate_on_change,
            config,
        }
    }

    /// Create a form from a typed record.
    pub fn from_record<T: Serialize>(
        record: &T,
        validate_on_change: bool,
        config: ValidatorConfig,
    ) -> Result<Self> {
        Ok(Self::new(
            Values::from_record(record)?,
            validate_on_change,
            config,
        ))
    }

    /// Record a new value for `field`.
    ///
    /// Clears every field error and the submit error. With
    /// validate-on-change, only `field` is re-checked.
    pub fn handle_change(&mut self, field: &str, value: impl Into<FieldValue>) {
        self.values.set(field, value);
        self.errors.clear();
        self.submit_error = None;

        if self.validate_on_change {
            if let Some(value) = self.values.get(field) {
                if let Some(message) = validate_field(field, value, &self.values, &self.config) {
                    self.errors.insert(field.to_string(), message);
                }
            }
        }
    }

    /// Validate `values` against the form's rules.
    ///
    /// The result replaces the current errors. Returns `true` if there are
    /// none.
    pub fn validate(&mut self, values: &Values) -> bool {
        self.errors = validate_values(values, &self.config);
        debug!(errors = self.errors.len(), "form validated");
        self.errors.is_empty()
    }

    /// Validate the form's own values.
    pub fn validate_current(&mut self) -> bool {
        self.errors = validate_values(&self.values, &self.config);
        self.errors.is_empty()
    }

    /// Return to the values the form was created with and clear all errors.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors.clear();
        self.submit_error = None;
    }

    /// Validate, then hand the values to `f`.
    ///
    /// An `Err` from `f` becomes the submit error. Returns `true` only if
    /// validation passed and `f` succeeded.
    pub fn submit<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&Values) -> std::result::Result<(), String>,
    {
        if !self.validate_current() {
            return false;
        }
        self.submit_error = None;
        match f(&self.values) {
            Ok(()) => true,
            Err(message) => {
                debug!(%message, "submit failed");
                self.submit_error = Some(message);
                false
            }
        }
    }

    /// Handle a key press; see [`focus::advance`].
    pub fn handle_key_advance(&self, event: &KeyEvent, controls: &[Control]) -> KeyOutcome {
        focus::advance(event, controls)
    }

    /// Current value and error for every data control in `controls`.
    pub fn bind<'a>(&'a self, controls: &'a [Control]) -> Vec<BoundControl<'a>> {
        focus::bind(controls, &self.values, &self.errors)
    }

    /// Show an error for the form as a whole, such as a rejected login.
    pub fn set_submit_error(&mut self, message: impl Into<String>) {
        self.submit_error = Some(message.into());
    }

    /// Remove the form-level error.
    pub fn clear_submit_error(&mut self) {
        self.submit_error = None;
    }

    /// The form-level error, if any.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Replace the field errors, e.g. with errors reported by a server.
    pub fn set_errors(&mut self, errors: Errors) {
        self.errors = errors;
    }

    /// Replace every value without touching the reset snapshot.
    pub fn set_values(&mut self, values: Values) {
        self.values = values;
    }

    /// Current values.
    pub fn values(&self) -> &Values {
        &self.values
    }

    /// Current value of `field`.
    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Current field errors.
    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    /// Error message for `field`, if it has one.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Returns `true` if any field has an error.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if any value differs from the initial snapshot.
    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }

    /// The current values as a typed record.
    pub fn record<T: DeserializeOwned>(&self) -> Result<T> {
        self.values.to_record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rule;

    fn login(validate_on_change: bool) -> FormEngine {
        let config = ValidatorConfig::new()
            .rule("email", Rule::Required, "Email is required")
            .rule("email", Rule::Email, "Email is not valid")
            .rule("password", Rule::Required, "Password is required");
        let initial = Values::new().with("email", "").with("password", "");
        FormEngine::new(initial, validate_on_change, config)
    }

    #[test]
    fn change_then_reset() {
        let mut form = login(false);
        form.handle_change("email", "a@b.c");
        assert_eq!(form.values().text("email"), Some("a@b.c"));
        assert!(form.is_dirty());

        form.reset();
        assert_eq!(form.values().text("email"), Some(""));
        assert_eq!(form.values().text("password"), Some(""));
        assert!(form.errors().is_empty());
        assert!(!form.is_dirty());
    }

    #[test]
    fn change_clears_errors_and_submit_error() {
        let mut form = login(false);
        assert!(!form.validate_current());
        form.set_submit_error("Wrong email or password");
        assert_eq!(form.errors().len(), 2);

        form.handle_change("password", "x");
        assert!(form.errors().is_empty());
        assert_eq!(form.submit_error(), None);
    }

    #[test]
    fn validate_on_change_checks_only_changed_field() {
        let mut form = login(true);
        form.handle_change("email", "guest");
        assert_eq!(form.error("email"), Some("Email is not valid"));
        assert_eq!(form.error("password"), None);

        form.handle_change("email", "guest@hotel.com");
        assert!(!form.has_errors());
    }

    #[test]
    fn validate_replaces_errors_wholesale() {
        let mut form = login(false);
        let mut stale = Errors::new();
        stale.insert("phone".into(), "old".into());
        form.set_errors(stale);

        let values = Values::new().with("email", "guest@hotel.com").with("password", "");
        assert!(!form.validate(&values));
        assert_eq!(form.error("phone"), None);
        assert_eq!(form.error("password"), Some("Password is required"));
    }

    #[test]
    fn submit_reports_failure_message() {
        let mut form = login(false);
        assert!(!form.submit(|_| panic!("not called for invalid values")));

        form.handle_change("email", "guest@hotel.com");
        form.handle_change("password", "Secret1");
        assert!(!form.submit(|_| Err("Wrong email or password".to_string())));
        assert_eq!(form.submit_error(), Some("Wrong email or password"));

        let mut seen = None;
        assert!(form.submit(|values| {
            seen = values.text("email").map(str::to_string);
            Ok(())
        }));
        assert_eq!(seen.as_deref(), Some("guest@hotel.com"));
    }

    #[test]
    fn reset_clears_submit_error() {
        let mut form = login(false);
        form.set_submit_error("Booking already exists");
        form.reset();
        assert_eq!(form.submit_error(), None);
    }
}
