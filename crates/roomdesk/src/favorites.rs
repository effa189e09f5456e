//! Favorite rooms, kept as a JSON list of room ids in a [`KeyValueStore`].

use tracing::debug;

use crate::error::{Result, StoreError};
use crate::store::KeyValueStore;

/// Storage key of the favorites list.
pub const FAVORITES_KEY: &str = "favorites-room";

/// Favorite room ids, oldest first. Missing or `null` means none.
pub fn favorites<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<String>> {
    let Some(text) = store.get(FAVORITES_KEY) else {
        return Ok(Vec::new());
    };
    let list: Option<Vec<String>> =
        serde_json::from_str(&text).map_err(|source| StoreError::Malformed {
            key: FAVORITES_KEY.to_string(),
            source,
        })?;
    Ok(list.unwrap_or_default())
}

/// Returns `true` if `room_id` is a favorite.
pub fn is_favorite<S: KeyValueStore + ?Sized>(store: &S, room_id: &str) -> Result<bool> {
    Ok(favorites(store)?.iter().any(|id| id == room_id))
}

/// Add `room_id` to the favorites, or remove it if already there.
///
/// Returns `true` if the room is a favorite afterwards.
pub fn toggle_favorite<S: KeyValueStore + ?Sized>(store: &mut S, room_id: &str) -> Result<bool> {
    let mut list = favorites(&*store)?;
    let added = if list.iter().any(|id| id == room_id) {
        list.retain(|id| id != room_id);
        false
    } else {
        list.push(room_id.to_string());
        true
    };
    store.set(FAVORITES_KEY, serde_json::to_string(&list)?)?;
    debug!(room_id, added, "toggled favorite");
    Ok(added)
}
