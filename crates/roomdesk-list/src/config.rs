//! List view configuration.
//!
//! [`ListConfig`] can be built in code or loaded from JSON/YAML. Every field
//! has a default matching the rooms page: 12 rooms per page out of
//! 6/12/18/24, searched and sorted by room number, highest first.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ListError, Result};
use crate::ordering::{Dir, SortSpec};

/// Configuration for a [`ListView`](crate::ListView).
///
/// # Example
///
/// ```
/// use roomdesk_list::{ListConfig, Dir};
///
/// let config = ListConfig::from_yaml_str("page_size: 6\nsort_dir: asc\n").unwrap();
/// assert_eq!(config.page_size, 6);
/// assert_eq!(config.sort_dir, Dir::Asc);
/// assert_eq!(config.debounce_ms, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Initial page size.
    pub page_size: usize,
    /// Page sizes offered to the user.
    pub page_size_options: Vec<usize>,
    /// Quiescence window for the search box, in milliseconds.
    pub debounce_ms: u64,
    /// Field the search box filters on.
    pub search_field: String,
    /// Initial sort field.
    pub sort_field: String,
    /// Initial sort direction.
    pub sort_dir: Dir,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: 12,
            page_size_options: vec![6, 12, 18, 24],
            debounce_ms: 500,
            search_field: "room_number".to_string(),
            sort_field: "room_number".to_string(),
            sort_dir: Dir::Desc,
        }
    }
}

impl ListConfig {
    /// Parse and check a JSON configuration.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: ListConfig = serde_json::from_str(text)?;
        config.checked()
    }

    /// Parse and check a YAML configuration.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: ListConfig = serde_yaml::from_str(text)?;
        config.checked()
    }

    /// Set the initial page size.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the search field.
    pub fn search_field(mut self, field: impl Into<String>) -> Self {
        self.search_field = field.into();
        self
    }

    /// Set the initial sort.
    pub fn sort(mut self, field: impl Into<String>, dir: Dir) -> Self {
        self.sort_field = field.into();
        self.sort_dir = dir;
        self
    }

    /// Set the debounce window.
    pub fn debounce(mut self, window: Duration) -> Self {
        self.debounce_ms = window.as_millis() as u64;
        self
    }

    /// The initial sort as a [`SortSpec`].
    pub fn sort_spec(&self) -> SortSpec {
        SortSpec::new(self.sort_field.clone(), self.sort_dir)
    }

    /// The debounce window.
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Reject page sizes of zero.
    pub fn checked(self) -> Result<Self> {
        if self.page_size == 0 {
            return Err(ListError::InvalidPageSize(0));
        }
        if self.page_size_options.contains(&0) {
            return Err(ListError::InvalidPageSize(0));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ListConfig::default();
        assert_eq!(config.page_size, 12);
        assert_eq!(config.page_size_options, vec![6, 12, 18, 24]);
        assert_eq!(config.debounce_window(), Duration::from_millis(500));
        assert_eq!(config.sort_spec(), SortSpec::desc("room_number"));
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = ListConfig::from_json_str(r#"{"search_field": "name"}"#).unwrap();
        assert_eq!(config.search_field, "name");
        assert_eq!(config.page_size, 12);
    }

    #[test]
    fn json_rejects_zero_page_size() {
        let err = ListConfig::from_json_str(r#"{"page_size": 0}"#).unwrap_err();
        assert!(matches!(err, ListError::InvalidPageSize(0)));
    }

    #[test]
    fn malformed_text_is_a_config_error() {
        assert!(matches!(
            ListConfig::from_json_str("{"),
            Err(ListError::ConfigJson(_))
        ));
        assert!(matches!(
            ListConfig::from_yaml_str("page_size: [1"),
            Err(ListError::ConfigYaml(_))
        ));
    }

    #[test]
    fn builder_setters() {
        let config = ListConfig::default()
            .page_size(6)
            .search_field("name")
            .sort("price", Dir::Asc)
            .debounce(Duration::from_millis(250));
        assert_eq!(config.page_size, 6);
        assert_eq!(config.search_field, "name");
        assert_eq!(config.sort_spec(), SortSpec::asc("price"));
        assert_eq!(config.debounce_ms, 250);
    }
}
