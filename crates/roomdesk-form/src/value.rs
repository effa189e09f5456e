//! Form values and error maps.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Number as JsonNumber, Value as Json};

use crate::error::{FormError, Result};

/// The value held by one form control.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    /// Text input, select or textarea content.
    Text(String),
    /// Numeric input.
    Number(f64),
    /// Checkbox.
    Bool(bool),
    /// Date picker, in epoch milliseconds.
    Timestamp(i64),
    /// Nothing entered.
    #[default]
    Null,
}

impl FieldValue {
    /// Returns `true` for [`FieldValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// The text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric content. Text is parsed after trimming; timestamps give
    /// their milliseconds.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Timestamp(ms) => Some(*ms as f64),
            FieldValue::Text(s) => s.trim().parse().ok(),
            FieldValue::Bool(_) | FieldValue::Null => None,
        }
    }

    /// Length in characters of the text form of the value.
    pub fn char_len(&self) -> usize {
        match self {
            FieldValue::Text(s) => s.chars().count(),
            FieldValue::Null => 0,
            other => other.to_string().chars().count(),
        }
    }

    fn from_json(field: &str, value: Json) -> Result<Self> {
        Ok(match value {
            Json::Null => FieldValue::Null,
            Json::Bool(b) => FieldValue::Bool(b),
            Json::Number(n) => FieldValue::Number(exact_f64(field, &n)?),
            Json::String(s) => FieldValue::Text(s),
            Json::Array(_) | Json::Object(_) => {
                return Err(FormError::UnsupportedField(field.to_string()))
            }
        })
    }

    fn to_json(&self) -> Json {
        match self {
            FieldValue::Text(s) => Json::String(s.clone()),
            FieldValue::Number(n) => number_to_json(*n),
            FieldValue::Bool(b) => Json::Bool(*b),
            FieldValue::Timestamp(ms) => Json::Number((*ms).into()),
            FieldValue::Null => Json::Null,
        }
    }
}

// Largest magnitude below which every integer has an exact f64.
const MAX_EXACT_INT: u64 = 1 << 53;

// -2^63 and 2^63; the upper bound itself is outside i64.
const I64_MIN_F64: f64 = -9_223_372_036_854_775_808.0;
const I64_END_F64: f64 = 9_223_372_036_854_775_808.0;

fn exact_f64(field: &str, n: &JsonNumber) -> Result<f64> {
    let magnitude = match (n.as_u64(), n.as_i64()) {
        (Some(u), _) => Some(u),
        (None, Some(i)) => Some(i.unsigned_abs()),
        (None, None) => None,
    };
    match (magnitude, n.as_f64()) {
        (Some(m), _) if m > MAX_EXACT_INT => Err(FormError::Inexact(field.to_string())),
        (_, Some(f)) => Ok(f),
        (_, None) => Err(FormError::Inexact(field.to_string())),
    }
}

// Whole numbers go back as integers so integer record fields deserialize.
fn number_to_json(n: f64) -> Json {
    if n.fract() == 0.0 && (I64_MIN_F64..I64_END_F64).contains(&n) {
        Json::Number((n as i64).into())
    } else {
        JsonNumber::from_f64(n).map_or(Json::Null, Json::Number)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Timestamp(ms) => write!(f, "{}", ms),
            FieldValue::Null => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(f64::from(n))
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Number(f64::from(n))
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<V: Into<FieldValue>> From<Option<V>> for FieldValue {
    fn from(v: Option<V>) -> Self {
        v.map_or(FieldValue::Null, Into::into)
    }
}

/// Field name → value, ordered by field name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Values(BTreeMap<String, FieldValue>);

impl Values {
    /// An empty set of values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build values from a flat serde record.
    ///
    /// # Errors
    ///
    /// Fails if the record does not serialize to an object of scalars.
    pub fn from_record<T: Serialize>(record: &T) -> Result<Self> {
        match serde_json::to_value(record)? {
            Json::Object(map) => map
                .into_iter()
                .map(|(field, value)| FieldValue::from_json(&field, value).map(|v| (field, v)))
                .collect::<Result<BTreeMap<_, _>>>()
                .map(Values),
            other => Err(FormError::NotAnObject(json_kind(&other))),
        }
    }

    /// Convert the values back into a typed record.
    pub fn to_record<T: DeserializeOwned>(&self) -> Result<T> {
        let map: Map<String, Json> = self
            .0
            .iter()
            .map(|(field, value)| (field.clone(), value.to_json()))
            .collect();
        Ok(serde_json::from_value(Json::Object(map))?)
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    /// Set one field, replacing any previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(field.into(), value.into());
    }

    /// The value of `field`, if present.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }

    /// Text content of `field`, if it holds text.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    /// Returns `true` if `field` has an entry.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Values(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}

/// Field name → error message. A field with no entry has no error.
pub type Errors = BTreeMap<String, String>;
