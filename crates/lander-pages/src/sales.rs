//! Sales page composer.
//!
//! Mounting fetches the landing document, the features collection and the
//! workbook document concurrently, then settles into one of the terminal
//! [`SalesState`]s. Once content is available a deferred site-settings fetch
//! updates the shared [`PageChrome`].

use std::sync::Arc;

use lander_content::{ContentError, ContentSource, ReferencePage, Resource};
use lander_renderer::{
    RenderContext, loading_view, not_found_view, render_overlay, render_sales_body,
    render_sections,
};
use lander_sections::{SalesPageDocument, SectionKind};
use tracing::{debug, info, warn};

use crate::chrome::{ChromeLease, PageChrome};
use crate::deferred::{DeferredHandle, SettingsOutcome, schedule_settings};
use crate::faq::FaqAccordion;
use crate::lead::{LeadCapture, TriggerOutcome};
use crate::view::{PageOptions, PageView};

/// A fetch that did not produce content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    /// Resource that failed.
    pub resource: Resource,
    /// Error message.
    pub reason: String,
}

impl FetchFailure {
    fn from_error(resource: Resource, error: &ContentError) -> Self {
        Self {
            resource,
            reason: error.to_string(),
        }
    }
}

/// Content fetched on mount.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesContent {
    /// Landing document.
    pub document: SalesPageDocument,
    /// Features pages; empty when that fetch failed.
    pub features: Vec<ReferencePage>,
    /// Workbook document.
    pub workbook: Option<ReferencePage>,
}

/// Sales page lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SalesState {
    /// Not mounted yet.
    Loading,
    /// Every fetch succeeded.
    Ready(SalesContent),
    /// Landing document loaded, secondary fetches failed.
    PartialFailure {
        /// What did load.
        content: SalesContent,
        /// What did not.
        failures: Vec<FetchFailure>,
    },
    /// Landing document unavailable.
    Failed(FetchFailure),
}

impl SalesState {
    /// Landing content, if loaded.
    #[must_use]
    pub fn content(&self) -> Option<&SalesContent> {
        match self {
            Self::Ready(content) | Self::PartialFailure { content, .. } => Some(content),
            Self::Loading | Self::Failed(_) => None,
        }
    }
}

/// Mounted sales page.
pub struct SalesPage {
    source: Arc<dyn ContentSource>,
    options: PageOptions,
    chrome: PageChrome,
    lease: Arc<ChromeLease>,
    state: SalesState,
    faq: FaqAccordion,
    lead: LeadCapture,
    settings: Option<DeferredHandle>,
}

impl SalesPage {
    /// Create an unmounted page. Claims the chrome immediately.
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>, chrome: &PageChrome, options: PageOptions) -> Self {
        Self {
            lead: LeadCapture::new(Arc::clone(&source)),
            source,
            options,
            lease: Arc::new(chrome.claim()),
            chrome: chrome.clone(),
            state: SalesState::Loading,
            faq: FaqAccordion::default(),
            settings: None,
        }
    }

    /// Fetch content and settle the page state.
    ///
    /// Content is fetched once per page; later calls return the settled state.
    pub fn mount(&mut self) -> &SalesState {
        if !matches!(self.state, SalesState::Loading) {
            debug!("Sales page already mounted");
            return &self.state;
        }

        let source = &self.source;
        let (landing, (features, workbook)) = rayon::join(
            || source.landing_page(),
            || rayon::join(|| source.features_pages(), || source.workbook_page()),
        );

        self.state = settle(landing, features, workbook);
        match &self.state {
            SalesState::Ready(_) => info!("Sales page ready"),
            SalesState::PartialFailure { failures, .. } => {
                for failure in failures {
                    warn!("Sales page {} fetch failed: {}", failure.resource, failure.reason);
                }
            }
            SalesState::Failed(failure) => {
                warn!("Sales page unavailable: {}", failure.reason);
            }
            SalesState::Loading => {}
        }

        if self.state.content().is_some() {
            self.settings = Some(schedule_settings(
                Arc::clone(&self.source),
                Arc::clone(&self.lease),
                self.options.media.clone(),
                self.options.settings_delay,
            ));
        }

        &self.state
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &SalesState {
        &self.state
    }

    /// Toggle FAQ entry `index`. Indices past the last entry are ignored.
    pub fn toggle_faq(&mut self, index: usize) {
        let count = self
            .state
            .content()
            .and_then(|c| c.document.faq_section.as_ref())
            .map_or(0, |faq| faq.faqs.len());
        if index < count {
            self.faq.toggle(index);
        } else {
            debug!("Ignoring toggle of FAQ entry {index} of {count}");
        }
    }

    /// FAQ accordion state.
    #[must_use]
    pub fn faq(&self) -> &FaqAccordion {
        &self.faq
    }

    /// Run the lead-capture trigger, as any CTA button does.
    pub fn open_lead_capture(&mut self) -> TriggerOutcome {
        self.lead.trigger()
    }

    /// Lead-capture state.
    #[must_use]
    pub fn lead_capture(&self) -> &LeadCapture {
        &self.lead
    }

    /// Mutable lead-capture state.
    pub fn lead_capture_mut(&mut self) -> &mut LeadCapture {
        &mut self.lead
    }

    /// Block until the deferred settings fetch finishes.
    ///
    /// Returns `None` when no fetch was scheduled.
    pub fn wait_for_settings(&mut self) -> Option<SettingsOutcome> {
        self.settings.take().map(DeferredHandle::wait)
    }

    /// Kinds of the blocks that render, in order. Empty unless content loaded.
    #[must_use]
    pub fn presence(&self) -> Vec<SectionKind> {
        self.state
            .content()
            .map(|c| c.document.presence())
            .unwrap_or_default()
    }

    /// Compose the page for the current state.
    #[must_use]
    pub fn render(&self) -> PageView {
        let body = match &self.state {
            SalesState::Loading => loading_view(),
            SalesState::Failed(_) => not_found_view(),
            SalesState::Ready(content) | SalesState::PartialFailure { content, .. } => {
                let ctx = RenderContext {
                    media: &self.options.media,
                    cta_loading: self.lead.is_loading(),
                    open_faq: self.faq.open_index(),
                    rich_text: self.options.rich_text,
                };
                let blocks = render_sections(&content.document, &ctx);
                let overlay = self
                    .lead
                    .form()
                    .map(|form| render_overlay(form, self.lead.is_open()));
                render_sales_body(&blocks, overlay.as_deref())
            }
        };
        PageView::with_chrome(body, self.chrome.snapshot())
    }
}

impl std::fmt::Debug for SalesPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesPage")
            .field("state", &self.state)
            .field("faq", &self.faq)
            .field("lead", &self.lead)
            .finish_non_exhaustive()
    }
}

fn settle(
    landing: Result<Option<SalesPageDocument>, ContentError>,
    features: Result<Vec<ReferencePage>, ContentError>,
    workbook: Result<Option<ReferencePage>, ContentError>,
) -> SalesState {
    let document = match landing {
        Ok(Some(document)) => document,
        Ok(None) => {
            return SalesState::Failed(FetchFailure {
                resource: Resource::Landing,
                reason: "no landing page published".to_owned(),
            });
        }
        Err(e) => return SalesState::Failed(FetchFailure::from_error(Resource::Landing, &e)),
    };

    let mut failures = Vec::new();
    let features = features.unwrap_or_else(|e| {
        failures.push(FetchFailure::from_error(Resource::Features, &e));
        Vec::new()
    });
    let workbook = workbook.unwrap_or_else(|e| {
        failures.push(FetchFailure::from_error(Resource::Workbook, &e));
        None
    });

    let content = SalesContent {
        document,
        features,
        workbook,
    };
    if failures.is_empty() {
        SalesState::Ready(content)
    } else {
        SalesState::PartialFailure { content, failures }
    }
}
