//! A rooms list driven from the command line.
//!
//! The `rooms` binary loads rooms from JSON, applies a search, a sort and a
//! page with [`roomdesk::ListView`], and prints the page.

pub mod cli;
pub mod room;

pub use cli::{run, Args, SortDir};
pub use room::{load_rooms, sample_rooms, Room, RoomKind};
