//! Field access traits.
//!
//! [`Listable`] is what the sort, search and page stages need from a record:
//! a way to read a field by name. It is usually derived with
//! `#[derive(Listable)]` from `roomdesk-macros`, but is small enough to
//! write by hand.

use crate::value::{Timestamp, Value};

/// A record type the list pipeline can sort and search.
///
/// # Manual Implementation
///
/// ```
/// use roomdesk_list::{Listable, Value, Number};
///
/// struct Room {
///     number: String,
///     price: u32,
/// }
///
/// impl Listable for Room {
///     const FIELDS: &'static [&'static str] = &["number", "price"];
///
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "number" => Value::String(&self.number),
///             "price" => Value::Number(Number::from(self.price)),
///             _ => Value::None,
///         }
///     }
/// }
///
/// assert!(Room::has_field("price"));
/// assert!(!Room::has_field("rating"));
/// ```
pub trait Listable {
    /// Names of the fields [`field_value`](Self::field_value) understands.
    ///
    /// An empty list means "not declared": field names are then not checked
    /// when a sort is configured.
    const FIELDS: &'static [&'static str] = &[];

    /// Returns the value of a field, or [`Value::None`] if the record has no
    /// such field.
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Accessor function compatible with the free functions of this crate.
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.field_value(field)
    }

    /// Returns `true` if `field` may be used as a sort or search key.
    fn has_field(field: &str) -> bool
    where
        Self: Sized,
    {
        Self::FIELDS.is_empty() || Self::FIELDS.contains(&field)
    }
}

/// Maps an enum to a stable discriminant for `#[list(Enum)]` fields.
pub trait ListEnum {
    /// Stable discriminant of this variant.
    fn list_discriminant(&self) -> u32;
}

/// Converts a date-like type to a [`Timestamp`] for `#[list(Timestamp)]`
/// fields.
pub trait ListTimestamp {
    /// Converts this value to a timestamp.
    fn list_timestamp(&self) -> Timestamp;
}

impl ListTimestamp for i64 {
    fn list_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(*self)
    }
}

impl ListTimestamp for u64 {
    fn list_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(*self as i64)
    }
}
