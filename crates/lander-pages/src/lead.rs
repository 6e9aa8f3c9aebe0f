//! Lead-capture trigger.
//!
//! Every CTA on the sales page calls [`LeadCapture::trigger`], which fetches
//! the web form definition and opens the overlay when one exists.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use lander_content::{ContentSource, WebFormPage};
use tracing::{info, warn};

/// Shared "form is loading" flag.
///
/// Cloning yields another view of the same flag.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    /// Whether a form fetch is in flight.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn raise(&self) -> LoadingGuard<'_> {
        self.0.store(true, Ordering::SeqCst);
        LoadingGuard(&self.0)
    }
}

/// Clears the loading flag on every exit path.
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Result of a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Form fetched, overlay open.
    Opened,
    /// No form published; overlay unchanged.
    Empty,
    /// Fetch failed; overlay unchanged.
    Failed,
}

/// Lead-capture state for one mounted sales page.
pub struct LeadCapture {
    source: Arc<dyn ContentSource>,
    loading: LoadingFlag,
    form: Option<WebFormPage>,
    open: bool,
}

impl LeadCapture {
    /// Create a closed lead-capture trigger.
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            loading: LoadingFlag::default(),
            form: None,
            open: false,
        }
    }

    /// Fetch the form definition and open the overlay if one exists.
    pub fn trigger(&mut self) -> TriggerOutcome {
        let _guard = self.loading.raise();
        match self.source.web_form_page() {
            Ok(Some(page)) => {
                info!("Opening lead-capture form {}", page.id);
                self.form = Some(page);
                self.open = true;
                TriggerOutcome::Opened
            }
            Ok(None) => {
                info!("No web form published");
                TriggerOutcome::Empty
            }
            Err(e) => {
                warn!("Failed to fetch web form: {e}");
                TriggerOutcome::Failed
            }
        }
    }

    /// Hide the overlay. The fetched form is kept.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Whether the overlay is visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether a form fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_set()
    }

    /// Handle on the loading flag.
    #[must_use]
    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }

    /// Last fetched form definition.
    #[must_use]
    pub fn form(&self) -> Option<&WebFormPage> {
        self.form.as_ref()
    }
}

impl std::fmt::Debug for LeadCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeadCapture")
            .field("loading", &self.loading)
            .field("form", &self.form)
            .field("open", &self.open)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use lander_content::{MockContent, Resource};
    use pretty_assertions::assert_eq;

    use super::*;

    const FORM: &str = r#"{"items": [{"id": 42, "web_form": {"form_title": "Apply"}}]}"#;

    /// Mock whose fetch hook records the loading flag it observes.
    fn observed(content: MockContent) -> (LeadCapture, Arc<Mutex<Vec<bool>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let flag_slot: Arc<Mutex<Option<LoadingFlag>>> = Arc::new(Mutex::new(None));

        let hook_seen = Arc::clone(&seen);
        let hook_flag = Arc::clone(&flag_slot);
        let content = content.with_hook(move |resource| {
            if resource == Resource::WebForm
                && let Some(flag) = hook_flag.lock().unwrap().as_ref()
            {
                hook_seen.lock().unwrap().push(flag.is_set());
            }
        });

        let lead = LeadCapture::new(Arc::new(content));
        *flag_slot.lock().unwrap() = Some(lead.loading_flag());
        (lead, seen)
    }

    #[test]
    fn test_success_opens_overlay() {
        let (mut lead, seen) = observed(MockContent::new().with_json(Resource::WebForm, FORM));

        assert!(!lead.is_loading());
        assert_eq!(lead.trigger(), TriggerOutcome::Opened);

        assert_eq!(*seen.lock().unwrap(), vec![true]);
        assert!(!lead.is_loading());
        assert!(lead.is_open());
        assert_eq!(lead.form().map(|f| f.id), Some(42));
    }

    #[test]
    fn test_failure_clears_loading_and_stays_closed() {
        let (mut lead, seen) = observed(MockContent::new().with_failure(Resource::WebForm));

        assert_eq!(lead.trigger(), TriggerOutcome::Failed);

        assert_eq!(*seen.lock().unwrap(), vec![true]);
        assert!(!lead.is_loading());
        assert!(!lead.is_open());
        assert!(lead.form().is_none());
    }

    #[test]
    fn test_malformed_later_form_is_ignored() {
        let mut lead = LeadCapture::new(Arc::new(MockContent::new().with_json(
            Resource::WebForm,
            r#"{"items": [{"id": 42, "web_form": {}}, {"web_form": "draft"}]}"#,
        )));
        assert_eq!(lead.trigger(), TriggerOutcome::Opened);
        assert_eq!(lead.form().map(|f| f.id), Some(42));
    }

    #[test]
    fn test_empty_result_stays_closed() {
        let mut lead = LeadCapture::new(Arc::new(MockContent::new()));
        assert_eq!(lead.trigger(), TriggerOutcome::Empty);
        assert!(!lead.is_open());
    }

    #[test]
    fn test_close_keeps_form() {
        let mut lead = LeadCapture::new(Arc::new(
            MockContent::new().with_json(Resource::WebForm, FORM),
        ));
        lead.trigger();
        lead.close();
        assert!(!lead.is_open());
        assert!(lead.form().is_some());
    }
}
