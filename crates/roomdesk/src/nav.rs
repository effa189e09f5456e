//! Navigation as an injected capability.
//!
//! Screens never touch a global history. They receive a [`Navigator`] and
//! call [`push`](Navigator::push) or [`go_back`](Navigator::go_back); a
//! protected screen that sends the user to login records where they came
//! from, and the login form sends them back with
//! [`redirect_target`](Navigator::redirect_target).

use tracing::debug;

/// One history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Route path, such as `/rooms`.
    pub path: String,
    /// The page that sent the user here, for redirect-after-login.
    pub from: Option<String>,
}

impl Location {
    /// A location with no referrer.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            from: None,
        }
    }

    /// A location remembering the page that sent the user here.
    pub fn with_from(path: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            from: Some(from.into()),
        }
    }
}

/// Capability to move between screens.
pub trait Navigator {
    /// Open `location` as a new history entry.
    fn navigate(&mut self, location: Location);

    /// Replace the current entry with `location`.
    fn replace_location(&mut self, location: Location);

    /// Go back one entry. Returns `false` at the start of history.
    fn go_back(&mut self) -> bool;

    /// The current entry.
    fn location(&self) -> &Location;

    /// Open `path` as a new history entry.
    fn push(&mut self, path: &str) {
        self.navigate(Location::new(path));
    }

    /// Replace the current entry with `path`.
    fn replace(&mut self, path: &str) {
        self.replace_location(Location::new(path));
    }

    /// Send the user to `path`, remembering the current page to return to.
    fn push_from_here(&mut self, path: &str) {
        let from = self.location().path.clone();
        self.navigate(Location::with_from(path, from));
    }

    /// Where to go after a successful login: the page that sent the user
    /// here, or the home page.
    fn redirect_target(&self) -> &str {
        self.location().from.as_deref().unwrap_or("/")
    }
}

/// In-process history stack.
///
/// Pushing after going back discards the forward entries.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Location>,
    index: usize,
}

impl MemoryHistory {
    /// A history starting at `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            entries: vec![Location::new(path)],
            index: 0,
        }
    }

    /// Number of entries up to and including the current one.
    pub fn depth(&self) -> usize {
        self.index + 1
    }

    /// Returns `true` if [`go_back`](Navigator::go_back) would move.
    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for MemoryHistory {
    fn navigate(&mut self, location: Location) {
        debug!(path = %location.path, from = ?location.from, "navigate");
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index += 1;
    }

    fn replace_location(&mut self, location: Location) {
        debug!(path = %location.path, "replace");
        self.entries[self.index] = location;
    }

    fn go_back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        debug!(path = %self.entries[self.index].path, "back");
        true
    }

    fn location(&self) -> &Location {
        &self.entries[self.index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_back() {
        let mut history = MemoryHistory::default();
        history.push("/rooms");
        history.push("/rooms/12");
        assert_eq!(history.location().path, "/rooms/12");
        assert_eq!(history.depth(), 3);

        assert!(history.go_back());
        assert_eq!(history.location().path, "/rooms");
        assert!(history.go_back());
        assert!(!history.go_back());
        assert_eq!(history.location().path, "/");
    }

    #[test]
    fn push_after_back_drops_forward_entries() {
        let mut history = MemoryHistory::default();
        history.push("/rooms");
        history.push("/rooms/12");
        history.go_back();
        history.push("/favorites");

        assert_eq!(history.depth(), 3);
        assert!(history.go_back());
        assert_eq!(history.location().path, "/rooms");
    }

    #[test]
    fn replace_keeps_depth() {
        let mut history = MemoryHistory::new("/login");
        history.replace("/");
        assert_eq!(history.depth(), 1);
        assert_eq!(history.location().path, "/");
    }

    #[test]
    fn login_redirects_to_origin() {
        let mut history = MemoryHistory::default();
        history.push("/booking/7");
        history.push_from_here("/login");
        assert_eq!(history.redirect_target(), "/booking/7");

        let target = history.redirect_target().to_string();
        history.replace(&target);
        assert_eq!(history.location().path, "/booking/7");
        assert_eq!(history.redirect_target(), "/");
    }
}
