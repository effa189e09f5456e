//! `#[derive(Listable)]`: field accessors for sortable, searchable records.

mod attrs;
mod derive;

pub use derive::listable_derive_impl;
