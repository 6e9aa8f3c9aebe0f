//! Terms and conditions page composer.

use std::sync::Arc;

use lander_content::{ContentSource, TermsDocument};
use lander_renderer::{loading_view, not_found_view, render_terms_page};
use tracing::{info, warn};

use crate::view::{PageOptions, PageView};

/// Terms page lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermsState {
    /// Not loaded yet.
    Loading,
    /// Document loaded.
    Ready(TermsDocument),
    /// Nothing published, or the fetch failed.
    NotFound,
}

/// Mounted terms page.
pub struct TermsPage {
    source: Arc<dyn ContentSource>,
    options: PageOptions,
    state: TermsState,
}

impl TermsPage {
    /// Create an unloaded page.
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>, options: PageOptions) -> Self {
        Self {
            source,
            options,
            state: TermsState::Loading,
        }
    }

    /// Fetch the document once and settle the state.
    pub fn load(&mut self) -> &TermsState {
        if self.state != TermsState::Loading {
            return &self.state;
        }
        self.state = match self.source.terms_page() {
            Ok(Some(doc)) => {
                info!("Loaded terms page {}", doc.slug);
                TermsState::Ready(doc)
            }
            Ok(None) => {
                info!("No terms page published");
                TermsState::NotFound
            }
            Err(e) => {
                warn!("Failed to fetch terms page: {e}");
                TermsState::NotFound
            }
        };
        &self.state
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &TermsState {
        &self.state
    }

    /// Compose the page for the current state.
    #[must_use]
    pub fn render(&self) -> PageView {
        let body = match &self.state {
            TermsState::Loading => loading_view(),
            TermsState::NotFound => not_found_view(),
            TermsState::Ready(doc) => render_terms_page(doc, self.options.rich_text),
        };
        PageView::bare(body)
    }
}

impl std::fmt::Debug for TermsPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermsPage")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
