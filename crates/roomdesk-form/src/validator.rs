//! Rule evaluation.
//!
//! Validation is pure: the same values and config always give the same
//! [`Errors`]. A failing field reports only its first failing rule.

use tracing::trace;

use crate::rules::ValidatorConfig;
use crate::value::{Errors, FieldValue, Values};

static NULL: FieldValue = FieldValue::Null;

/// Validate every configured field of `values`.
///
/// Fields missing from `values` are checked as [`FieldValue::Null`]. Fields
/// without rules are ignored.
pub fn validate_values(values: &Values, config: &ValidatorConfig) -> Errors {
    let mut errors = Errors::new();
    for (field, _) in config.entries() {
        let value = values.get(field).unwrap_or(&NULL);
        if let Some(message) = validate_field(field, value, values, config) {
            errors.insert(field.to_string(), message);
        }
    }
    trace!(failed = errors.len(), "validated form");
    errors
}

/// Validate one field, returning the message of its first failing rule.
///
/// `values` is the whole form, for rules that compare fields.
pub fn validate_field(
    field: &str,
    value: &FieldValue,
    values: &Values,
    config: &ValidatorConfig,
) -> Option<String> {
    let failed = config
        .rules_for(field)
        .iter()
        .find(|spec| !spec.rule.check(value, values))?;
    trace!(field, rule = ?failed.rule, "rule failed");
    Some(failed.message.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rule;

    fn login_config() -> ValidatorConfig {
        ValidatorConfig::new()
            .rule("email", Rule::Required, "Email is required")
            .rule("email", Rule::Email, "Email is not valid")
            .rule("password", Rule::Required, "Password is required")
            .rule("password", Rule::HasCapital, "Needs a capital letter")
            .rule("password", Rule::HasDigit, "Needs a digit")
            .rule("password", Rule::MinLength(8), "At least 8 characters")
    }

    #[test]
    fn first_failing_rule_wins() {
        let values = Values::new().with("email", "guest").with("password", "secret");
        let errors = validate_values(&values, &login_config());

        assert_eq!(errors["email"], "Email is not valid");
        assert_eq!(errors["password"], "Needs a capital letter");
    }

    #[test]
    fn valid_values_give_no_errors() {
        let values = Values::new()
            .with("email", "guest@hotel.com")
            .with("password", "Secret123");
        assert!(validate_values(&values, &login_config()).is_empty());
    }

    #[test]
    fn missing_fields_are_null() {
        let errors = validate_values(&Values::new(), &login_config());
        assert_eq!(errors["email"], "Email is required");
        assert_eq!(errors["password"], "Password is required");
    }

    #[test]
    fn unconfigured_fields_are_ignored() {
        let values = Values::new().with("nickname", "");
        assert!(validate_values(&values, &ValidatorConfig::new()).is_empty());
        assert_eq!(
            validate_field("nickname", &FieldValue::Null, &values, &login_config()),
            None
        );
    }

    #[test]
    fn same_input_same_output() {
        let values = Values::new().with("email", "").with("password", "abc");
        let config = login_config();
        assert_eq!(
            validate_values(&values, &config),
            validate_values(&values, &config)
        );
    }
}
