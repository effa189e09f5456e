//! The room record and how rooms are loaded.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use roomdesk::list::ListEnum;
use roomdesk::Listable;
use serde::Deserialize;

const SAMPLE: &str = include_str!("../data/rooms.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    Standard,
    Comfort,
    Lux,
}

impl RoomKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RoomKind::Standard => "standard",
            RoomKind::Comfort => "comfort",
            RoomKind::Lux => "lux",
        }
    }
}

impl ListEnum for RoomKind {
    fn list_discriminant(&self) -> u32 {
        *self as u32
    }
}

#[derive(Debug, Clone, Deserialize, Listable)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    #[list(String)]
    pub room_number: String,
    #[serde(rename = "type")]
    #[list(Enum)]
    pub kind: RoomKind,
    #[list(Number)]
    pub price: u32,
    #[list(Number)]
    pub rate: f64,
    #[list(Number)]
    pub count_reviews: u32,
    #[list(Bool)]
    pub has_wifi: bool,
    #[list(Timestamp)]
    pub listed_at: i64,
}

/// Rooms shipped with the example.
pub fn sample_rooms() -> Result<Vec<Room>> {
    serde_json::from_str(SAMPLE).context("bundled room data is malformed")
}

/// Rooms from a JSON array file.
pub fn load_rooms(path: &Path) -> Result<Vec<Room>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read rooms from {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not a list of rooms", path.display()))
}
