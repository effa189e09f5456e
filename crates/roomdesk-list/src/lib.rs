//! roomdesk-list - Sorting, debounced search and pagination for record lists.
//!
//! Lists of rooms, bookings and reviews all go through the same derivation
//! before they are shown:
//!
//! ```text
//! records ──▶ stable sort ──▶ debounced search ──▶ paginate ──▶ page
//! ```
//!
//! Each stage borrows the collection and produces a fresh `Vec<&T>`; records
//! are never copied or mutated.
//!
//! - [`stable_sort`] orders by one field and direction, keeping ties in
//!   their original order
//! - [`DebouncedFilter`] filters case-insensitively on one field once typing
//!   has been quiet for a window
//! - [`Paginator`] slices pages and returns to page 1 when a collection
//!   shrinks below one page
//! - [`ListView`] wires the three together
//!
//! # Quick Start
//!
//! ```rust
//! use roomdesk_list::{stable_sort, Paginator, SortSpec, Value, Number};
//!
//! struct Room {
//!     number: String,
//!     price: u32,
//! }
//!
//! fn accessor<'a>(room: &'a Room, field: &str) -> Value<'a> {
//!     match field {
//!         "number" => Value::String(&room.number),
//!         "price" => Value::Number(Number::from(room.price)),
//!         _ => Value::None,
//!     }
//! }
//!
//! let rooms = vec![
//!     Room { number: "101".into(), price: 90 },
//!     Room { number: "102".into(), price: 60 },
//!     Room { number: "201".into(), price: 90 },
//! ];
//!
//! let sorted = stable_sort(&rooms, &SortSpec::desc("price"), accessor);
//! // equal prices keep their original order
//! assert_eq!(sorted[0].number, "101");
//! assert_eq!(sorted[1].number, "201");
//!
//! let mut pager = Paginator::new(2).unwrap();
//! assert_eq!(pager.page(&sorted).len(), 2);
//! ```
//!
//! # Field Access
//!
//! Fields are read through an accessor returning a [`Value`]: either a
//! closure `Fn(&T, &str) -> Value` or the [`Listable`] trait, which
//! `#[derive(Listable)]` in `roomdesk-macros` implements from field
//! annotations.
//!
//! | Type | Orders by |
//! |------|-----------|
//! | String | byte-wise lexicographic |
//! | Number | numeric value, mixed integer/float types allowed |
//! | Timestamp | epoch milliseconds |
//! | Enum | discriminant |
//! | Bool | `false` before `true` |
//! | None | before every other value |

mod clock;
mod config;
mod debounce;
mod error;
mod ordering;
mod paginate;
mod search;
mod traits;
mod value;
mod view;

pub use clock::{Clock, MockClock, SystemClock};
pub use config::ListConfig;
pub use debounce::{DebounceState, DebouncedFilter, DEFAULT_DEBOUNCE};
pub use error::{ListError, Result};
pub use ordering::{compare_values, sort_listable, stable_sort, Dir, SortSpec};
pub use paginate::{Paginator, DEFAULT_PAGE_SIZE};
pub use search::{matches_term, search, search_refs};
pub use traits::{ListEnum, ListTimestamp, Listable};
pub use value::{Number, Timestamp, Value};
pub use view::{ListView, Page};
