//! Derive macros for roomdesk.
//!
//! - [`Listable`] - expose struct fields to sorting and search in
//!   `roomdesk-list`

mod listable;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `roomdesk_list::Listable` from `#[list(...)]` field annotations.
///
/// # Field Attributes
///
/// | Attribute | Field is read as |
/// |-----------|------------------|
/// | `String` | `Value::String`, borrowing the field |
/// | `Number` | `Value::Number`, via `Number::from` (integers and floats) |
/// | `Timestamp` | `Value::Timestamp`, via `ListTimestamp` |
/// | `Enum` | `Value::Enum`, via `ListEnum` |
/// | `Bool` | `Value::Bool` |
/// | `skip` | not exposed |
/// | `rename = "..."` | exposed under another name |
/// | `ty = "..."` | kind as a string, for the keywords `enum` and `bool` |
///
/// Fields without a kind are not exposed.
///
/// # Generated Code
///
/// 1. A name constant per exposed field (`Room::ROOM_NUMBER`)
/// 2. `Listable::FIELDS`, listing every exposed name
/// 3. `Listable::field_value`, returning `Value::None` for other names
///
/// # Example
///
/// ```ignore
/// use roomdesk_list::{ListConfig, ListView, Dir};
/// use roomdesk_macros::Listable;
///
/// #[derive(Listable)]
/// struct Room {
///     #[list(String, rename = "roomNumber")]
///     room_number: String,
///
///     #[list(Number)]
///     price: u32,
///
///     #[list(Bool)]
///     has_wifi: bool,
///
///     photo_url: String,
/// }
///
/// let config = ListConfig::default()
///     .search_field(Room::ROOM_NUMBER)
///     .sort(Room::PRICE, Dir::Asc);
/// let list = ListView::<Room>::new(config)?;
/// ```
#[proc_macro_derive(Listable, attributes(list))]
pub fn listable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    listable::listable_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
