//! Document-level title and favicon.
//!
//! A single [`PageChrome`] is shared by every mounted page. Writers go through
//! a [`ChromeLease`]; only the most recently claimed lease may write.

use std::sync::{Arc, Mutex};

use tracing::debug;

#[derive(Debug, Default)]
struct ChromeState {
    title: Option<String>,
    favicon: Option<String>,
    owner: Option<u64>,
    next_lease: u64,
}

/// Current title and favicon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChromeSnapshot {
    /// Document title.
    pub title: Option<String>,
    /// Absolute favicon URL.
    pub favicon: Option<String>,
}

/// Shared title/favicon service.
#[derive(Debug, Clone, Default)]
pub struct PageChrome {
    state: Arc<Mutex<ChromeState>>,
}

impl PageChrome {
    /// Create an empty chrome.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim write access. Any previously issued lease stops owning the chrome.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn claim(&self) -> ChromeLease {
        let mut state = self.state.lock().unwrap();
        let id = state.next_lease;
        state.next_lease += 1;
        state.owner = Some(id);
        debug!(lease = id, "Chrome claimed");
        ChromeLease {
            id,
            state: Arc::clone(&self.state),
        }
    }

    /// Current values.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn snapshot(&self) -> ChromeSnapshot {
        let state = self.state.lock().unwrap();
        ChromeSnapshot {
            title: state.title.clone(),
            favicon: state.favicon.clone(),
        }
    }
}

/// Write access to [`PageChrome`], held by a mounted page.
///
/// Dropping the owning lease releases ownership; the applied values stay.
#[derive(Debug)]
pub struct ChromeLease {
    id: u64,
    state: Arc<Mutex<ChromeState>>,
}

impl ChromeLease {
    /// Whether this lease currently owns the chrome.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn is_owner(&self) -> bool {
        self.state.lock().unwrap().owner == Some(self.id)
    }

    /// Set the given fields. Fields passed as `None` keep their value.
    ///
    /// Returns `false` without writing when the lease no longer owns the chrome.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn apply(&self, title: Option<&str>, favicon: Option<&str>) -> bool {
        let mut state = self.state.lock().unwrap();
        if state.owner != Some(self.id) {
            debug!(lease = self.id, "Chrome write rejected, lease superseded");
            return false;
        }
        if let Some(title) = title {
            state.title = Some(title.to_owned());
        }
        if let Some(favicon) = favicon {
            state.favicon = Some(favicon.to_owned());
        }
        debug!(lease = self.id, ?title, ?favicon, "Chrome updated");
        true
    }
}

impl Drop for ChromeLease {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock()
            && state.owner == Some(self.id)
        {
            state.owner = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    static_assertions::assert_impl_all!(PageChrome: Send, Sync);
    static_assertions::assert_impl_all!(ChromeLease: Send, Sync);

    #[test]
    fn test_owner_writes() {
        let chrome = PageChrome::new();
        let lease = chrome.claim();
        assert!(lease.apply(Some("Tax Workshop"), Some("https://cms/fav.ico")));
        assert_eq!(
            chrome.snapshot(),
            ChromeSnapshot {
                title: Some("Tax Workshop".to_owned()),
                favicon: Some("https://cms/fav.ico".to_owned()),
            }
        );
    }

    #[test]
    fn test_newer_claim_supersedes() {
        let chrome = PageChrome::new();
        let first = chrome.claim();
        let second = chrome.claim();

        assert!(!first.is_owner());
        assert!(!first.apply(Some("stale"), None));
        assert!(second.apply(Some("fresh"), None));
        assert_eq!(chrome.snapshot().title.as_deref(), Some("fresh"));
    }

    #[test]
    fn test_last_owner_write_wins_and_none_keeps_value() {
        let chrome = PageChrome::new();
        let lease = chrome.claim();
        lease.apply(Some("one"), Some("a.ico"));
        lease.apply(Some("two"), None);
        let snapshot = chrome.snapshot();
        assert_eq!(snapshot.title.as_deref(), Some("two"));
        assert_eq!(snapshot.favicon.as_deref(), Some("a.ico"));
    }

    #[test]
    fn test_drop_releases_ownership_keeps_values() {
        let chrome = PageChrome::new();
        let lease = chrome.claim();
        lease.apply(Some("kept"), None);
        drop(lease);

        assert_eq!(chrome.snapshot().title.as_deref(), Some("kept"));
        let next = chrome.claim();
        assert!(next.is_owner());
    }

    #[test]
    fn test_dropping_superseded_lease_keeps_new_owner() {
        let chrome = PageChrome::new();
        let old = chrome.claim();
        let new = chrome.claim();
        drop(old);
        assert!(new.is_owner());
    }
}
