//! roomdesk - Client-side state for hotel booking front ends.
//!
//! This crate bundles the roomdesk toolkit:
//!
//! - [`list`] (`roomdesk-list`): stable sort, debounced search and
//!   pagination over borrowed record collections, wired together by
//!   [`ListView`]
//! - [`form`] (`roomdesk-form`): controlled form state and declarative
//!   validation
//! - [`Listable`](macro@Listable): derive field accessors for list records
//!
//! and adds the small pieces of client state the booking screens share:
//!
//! - [`Navigator`] / [`MemoryHistory`]: navigation as an injected capability,
//!   including redirect-after-login
//! - [`KeyValueStore`] with [`MemoryStore`] and [`FileStore`], and the
//!   favorites list kept in it ([`toggle_favorite`])
//!
//! # Example
//!
//! ```rust
//! use roomdesk::prelude::*;
//!
//! #[derive(Listable)]
//! struct Room {
//!     #[list(String)]
//!     room_number: String,
//!     #[list(Number)]
//!     price: u32,
//! }
//!
//! let rooms: Vec<Room> = (1..=20)
//!     .map(|n| Room { room_number: format!("{}", 100 + n), price: 50 + n * 5 })
//!     .collect();
//!
//! let mut list = ListView::<Room>::new(ListConfig::default()).unwrap();
//! let page = list.view(&rooms);
//! assert_eq!(page.items.len(), 12);
//! assert_eq!(page.items[0].room_number, "120");
//!
//! list.request_sort(Room::PRICE).unwrap();
//! assert_eq!(list.view(&rooms).items[0].price, 55);
//! ```
//!
//! Deriving `Listable` through this crate still needs `roomdesk-list` as a
//! direct dependency; the generated code names it.

mod error;
pub mod favorites;
pub mod nav;
pub mod store;

pub use roomdesk_form as form;
pub use roomdesk_list as list;

pub use error::{Result, StoreError};
pub use favorites::{favorites, is_favorite, toggle_favorite, FAVORITES_KEY};
pub use nav::{Location, MemoryHistory, Navigator};
pub use store::{FileStore, KeyValueStore, MemoryStore};

pub use roomdesk_form::{
    FieldValue, FormEngine, FormError, Rule, ValidatorConfig, Values,
};
pub use roomdesk_list::{
    Dir, ListConfig, ListError, ListView, Listable, Page, Paginator, SortSpec,
};
pub use roomdesk_macros::Listable;

/// Everything a screen usually needs.
pub mod prelude {
    pub use crate::form::{
        Control, Errors, FieldValue, FormEngine, Key, KeyEvent, KeyOutcome, Rule,
        ValidatorConfig, Values,
    };
    pub use crate::list::{
        DebouncedFilter, Dir, ListConfig, ListView, Listable, MockClock, Page, Paginator,
        SortSpec, Value,
    };
    pub use crate::nav::{MemoryHistory, Navigator};
    pub use crate::store::{KeyValueStore, MemoryStore};
    pub use roomdesk_macros::Listable;
}
