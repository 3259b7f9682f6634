//! Login session state.
//!
//! A `Session` names the logged-in user and carries the statement sort
//! toggle - there is no ambient "current account" global. It holds no
//! account data of its own; the directory stays the single owner.

/// State of one logged-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Username of the authenticated account
    pub username: String,
    /// Whether the statement is displayed sorted by amount
    pub sorted: bool,
}

impl Session {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            sorted: false,
        }
    }

    /// Flip the statement ordering between chronological and sorted
    pub fn toggle_sort(&mut self) {
        self.sorted = !self.sorted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_toggle() {
        let mut session = Session::new("js");
        assert!(!session.sorted);

        session.toggle_sort();
        assert!(session.sorted);

        session.toggle_sort();
        assert!(!session.sorted);
    }
}
