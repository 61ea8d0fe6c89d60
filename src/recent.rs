//! Recently searched handles, kept in a client-held cookie.
//!
//! The list is stored under a single key as a percent-encoded JSON array,
//! most recent first. Reading or writing it never fails from the caller's
//! point of view: anything unreadable is treated as an empty list.

use tracing::debug;

use crate::handle;

/// Cookie name holding the encoded list.
pub const STORAGE_KEY: &str = "recent_searches";

/// Maximum number of handles remembered.
pub const MAX_RECENT_SEARCHES: usize = 5;

/// One year, in seconds.
const COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

/// Bounded most-recent-first list of searched handles.
///
/// Holds at most [`MAX_RECENT_SEARCHES`] entries with no two equal
/// ignoring ASCII case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentSearches {
    handles: Vec<String>,
}

impl RecentSearches {
    /// Move `handle` to the front, dropping any case-insensitive duplicate.
    pub fn record(&mut self, handle: &str) {
        self.handles.retain(|h| !h.eq_ignore_ascii_case(handle));
        self.handles.insert(0, handle.to_string());
        self.handles.truncate(MAX_RECENT_SEARCHES);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.handles.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Decode a stored cookie value.
    ///
    /// Missing or corrupt data yields an empty list. Entries that are not
    /// valid handles are dropped and the size and uniqueness limits are
    /// re-applied, so a hand-edited cookie cannot break the invariants.
    #[must_use]
    pub fn from_storage(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|r| !r.is_empty()) else {
            return Self::default();
        };

        let decoded = match urlencoding::decode(raw) {
            Ok(decoded) => decoded,
            Err(e) => {
                debug!("Ignoring undecodable recent searches: {e}");
                return Self::default();
            }
        };

        let stored: Vec<String> = match serde_json::from_str(&decoded) {
            Ok(stored) => stored,
            Err(e) => {
                debug!("Ignoring corrupt recent searches: {e}");
                return Self::default();
            }
        };

        // Oldest first so the newest copy of a duplicate ends up in front.
        let mut list = Self::default();
        for entry in stored.iter().rev() {
            if handle::is_valid(entry) {
                list.record(entry);
            }
        }
        list
    }

    /// Encode the list for storage, or `None` if encoding fails.
    #[must_use]
    pub fn to_storage(&self) -> Option<String> {
        match serde_json::to_string(&self.handles) {
            Ok(json) => Some(urlencoding::encode(&json).into_owned()),
            Err(e) => {
                debug!("Failed to encode recent searches: {e}");
                None
            }
        }
    }

    /// Full `Set-Cookie` header value persisting this list.
    #[must_use]
    pub fn set_cookie_header(&self, secure: bool) -> Option<String> {
        self.to_storage().map(|value| {
            let secure = if secure { "; Secure" } else { "" };
            format!(
                "{STORAGE_KEY}={value}; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; SameSite=Lax{secure}"
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handles(list: &RecentSearches) -> Vec<&str> {
        list.iter().collect()
    }

    #[test]
    fn test_record_moves_to_front() {
        let mut list = RecentSearches::default();
        list.record("alice");
        list.record("bob");
        list.record("alice");
        assert_eq!(handles(&list), vec!["alice", "bob"]);
    }

    #[test]
    fn test_record_dedups_ignoring_case() {
        let mut list = RecentSearches::default();
        list.record("Jack");
        list.record("bob");
        list.record("JACK");
        assert_eq!(handles(&list), vec!["JACK", "bob"]);
    }

    #[test]
    fn test_record_keeps_five_most_recent() {
        let mut list = RecentSearches::default();
        for name in ["a1", "a2", "a3", "a4", "a5", "a6"] {
            list.record(name);
        }
        assert_eq!(list.len(), MAX_RECENT_SEARCHES);
        assert_eq!(handles(&list), vec!["a6", "a5", "a4", "a3", "a2"]);
    }

    #[test]
    fn test_storage_round_trip() {
        let mut list = RecentSearches::default();
        list.record("alice");
        list.record("bob");

        let stored = list.to_storage().unwrap();
        assert!(!stored.contains('"'));
        assert_eq!(RecentSearches::from_storage(Some(&stored)), list);
    }

    #[test]
    fn test_missing_or_corrupt_storage_is_empty() {
        assert!(RecentSearches::from_storage(None).is_empty());
        assert!(RecentSearches::from_storage(Some("")).is_empty());
        assert!(RecentSearches::from_storage(Some("not-json")).is_empty());
        assert!(RecentSearches::from_storage(Some("%7B%22a%22%3A1%7D")).is_empty());
        assert!(RecentSearches::from_storage(Some("%FF%FE")).is_empty());
    }

    #[test]
    fn test_tampered_storage_is_sanitised() {
        let raw = r#"["one","ONE","bad handle!","two","three","four","five","six"]"#;
        let encoded = urlencoding::encode(raw);
        let list = RecentSearches::from_storage(Some(&encoded));
        assert_eq!(handles(&list), vec!["one", "two", "three", "four", "five"]);
    }

    #[test]
    fn test_set_cookie_header() {
        let mut list = RecentSearches::default();
        list.record("jack");

        let header = list.set_cookie_header(false).unwrap();
        assert!(header.starts_with("recent_searches=%5B%22jack%22%5D;"));
        assert!(header.contains("Path=/"));
        assert!(!header.contains("Secure"));
        assert!(list.set_cookie_header(true).unwrap().ends_with("; Secure"));
    }
}
