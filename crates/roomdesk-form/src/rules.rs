//! Declarative validation rules.
//!
//! A [`ValidatorConfig`] maps field names to an ordered list of
//! [`RuleSpec`]s, each a [`Rule`] plus the message shown when it fails.
//! Fields are checked in the order they were declared.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::value::{FieldValue, Values};

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"));

/// Predicate over a field value and the whole form.
pub type Predicate = Arc<dyn Fn(&FieldValue, &Values) -> bool + Send + Sync>;

/// A single check applied to one field.
#[derive(Clone)]
pub enum Rule {
    /// Non-empty text after trimming, a checked checkbox, or any number or date.
    Required,
    /// Looks like `name@host.tld`.
    Email,
    /// Text matches the expression.
    Pattern(Regex),
    /// At least `n` characters.
    MinLength(usize),
    /// At most `n` characters.
    MaxLength(usize),
    /// Numeric value at least `x`.
    Min(f64),
    /// Numeric value at most `x`.
    Max(f64),
    /// Contains an uppercase letter.
    HasCapital,
    /// Contains a digit.
    HasDigit,
    /// Caller-supplied check, with access to every value.
    Custom(Predicate),
}

impl Rule {
    /// Wrap a closure as a [`Rule::Custom`].
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&FieldValue, &Values) -> bool + Send + Sync + 'static,
    {
        Rule::Custom(Arc::new(f))
    }

    /// Returns `true` if `value` passes this rule.
    ///
    /// Only [`Rule::Required`] rejects an empty field; every other rule
    /// lets blank input through so optional fields can stay empty.
    pub fn check(&self, value: &FieldValue, values: &Values) -> bool {
        match self {
            Rule::Required => match value {
                FieldValue::Text(s) => !s.trim().is_empty(),
                FieldValue::Bool(b) => *b,
                FieldValue::Null => false,
                FieldValue::Number(_) | FieldValue::Timestamp(_) => true,
            },
            Rule::Custom(f) => f(value, values),
            _ if is_blank(value) => true,
            Rule::Email => EMAIL.is_match(&value.to_string()),
            Rule::Pattern(re) => re.is_match(&value.to_string()),
            Rule::MinLength(n) => value.char_len() >= *n,
            Rule::MaxLength(n) => value.char_len() <= *n,
            Rule::Min(x) => value.as_f64().is_some_and(|v| v >= *x),
            Rule::Max(x) => value.as_f64().is_some_and(|v| v <= *x),
            Rule::HasCapital => value.to_string().chars().any(char::is_uppercase),
            Rule::HasDigit => value.to_string().chars().any(|c| c.is_ascii_digit()),
        }
    }
}

fn is_blank(value: &FieldValue) -> bool {
    match value {
        FieldValue::Null => true,
        FieldValue::Text(s) => s.is_empty(),
        _ => false,
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => f.write_str("Required"),
            Rule::Email => f.write_str("Email"),
            Rule::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            Rule::MinLength(n) => f.debug_tuple("MinLength").field(n).finish(),
            Rule::MaxLength(n) => f.debug_tuple("MaxLength").field(n).finish(),
            Rule::Min(x) => f.debug_tuple("Min").field(x).finish(),
            Rule::Max(x) => f.debug_tuple("Max").field(x).finish(),
            Rule::HasCapital => f.write_str("HasCapital"),
            Rule::HasDigit => f.write_str("HasDigit"),
            Rule::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A rule and its failure message.
#[derive(Debug, Clone)]
pub struct RuleSpec {
    /// The check to run.
    pub rule: Rule,
    /// Message reported when the check fails.
    pub message: String,
}

impl RuleSpec {
    /// Pair `rule` with its failure message.
    pub fn new(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

/// Ordered field → rules mapping.
///
/// # Example
///
/// ```
/// use roomdesk_form::{Rule, ValidatorConfig};
///
/// let config = ValidatorConfig::new()
///     .rule("email", Rule::Required, "Email is required")
///     .rule("email", Rule::Email, "Email is not valid")
///     .rule("password", Rule::Required, "Password is required")
///     .rule("password", Rule::MinLength(8), "At least 8 characters");
///
/// assert_eq!(config.fields().collect::<Vec<_>>(), vec!["email", "password"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidatorConfig {
    fields: Vec<(String, Vec<RuleSpec>)>,
}

impl ValidatorConfig {
    /// A config with no rules; every form passes it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule to `field`. The first rule for a field fixes its
    /// position in the check order.
    pub fn rule(mut self, field: impl Into<String>, rule: Rule, message: impl Into<String>) -> Self {
        let field = field.into();
        let spec = RuleSpec::new(rule, message);
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, rules)) => rules.push(spec),
            None => self.fields.push((field, vec![spec])),
        }
        self
    }

    /// Append a [`Rule::Custom`] check to `field`.
    pub fn check<F>(self, field: impl Into<String>, f: F, message: impl Into<String>) -> Self
    where
        F: Fn(&FieldValue, &Values) -> bool + Send + Sync + 'static,
    {
        self.rule(field, Rule::custom(f), message)
    }

    /// Append a [`Rule::Pattern`] compiled from `pattern`.
    ///
    /// # Errors
    ///
    /// Fails if `pattern` is not a valid regular expression.
    pub fn pattern(
        self,
        field: impl Into<String>,
        pattern: &str,
        message: impl Into<String>,
    ) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(self.rule(field, Rule::Pattern(regex), message))
    }

    /// Rules for `field`, in order. Empty if the field is not configured.
    pub fn rules_for(&self, field: &str) -> &[RuleSpec] {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or(&[])
    }

    /// Configured field names, in check order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, &[RuleSpec])> {
        self.fields
            .iter()
            .map(|(name, rules)| (name.as_str(), rules.as_slice()))
    }

    /// Returns `true` if no field has rules.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
