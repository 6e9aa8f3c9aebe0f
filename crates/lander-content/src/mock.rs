//! Mock content source for testing.
//!
//! Provides [`MockContent`] for driving page composers without a network.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use lander_sections::SalesPageDocument;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ContentError;
use crate::source::{ContentSource, Resource};
use crate::types::{Listing, ReferencePage, SiteSettings, TermsDocument, WebFormPage};

/// Callback run when a resource is requested, before the response is produced.
pub type FetchHook = Arc<dyn Fn(Resource) + Send + Sync>;

/// Mock content source.
///
/// Serves canned JSON bodies per [`Resource`]. A resource with no body
/// configured answers with an empty listing.
///
/// # Example
///
/// ```ignore
/// use lander_content::{ContentSource, MockContent, Resource};
///
/// let content = MockContent::new()
///     .with_json(Resource::Terms, r#"{"items": [{"id": 1, "title": "T", "slug": "t"}]}"#)
///     .with_failure(Resource::SiteSettings);
///
/// assert!(content.terms_page().unwrap().is_some());
/// assert!(content.site_settings().is_err());
/// ```
#[derive(Default)]
pub struct MockContent {
    bodies: RwLock<HashMap<Resource, Value>>,
    failures: RwLock<Vec<Resource>>,
    hooks: RwLock<Vec<FetchHook>>,
    calls: RwLock<Vec<Resource>>,
    delay: RwLock<Option<Duration>>,
}

impl std::fmt::Debug for MockContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockContent")
            .field("bodies", &self.bodies)
            .field("failures", &self.failures)
            .field("calls", &self.calls)
            .finish_non_exhaustive()
    }
}

impl MockContent {
    /// Create a mock with no content configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve a JSON body for a resource.
    ///
    /// # Panics
    ///
    /// Panics if `json` is not valid JSON or the internal lock is poisoned.
    #[must_use]
    pub fn with_json(self, resource: Resource, json: &str) -> Self {
        let value = serde_json::from_str(json).expect("mock body must be valid JSON");
        self.with_value(resource, value)
    }

    /// Serve a JSON value for a resource.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_value(self, resource: Resource, value: Value) -> Self {
        self.bodies.write().unwrap().insert(resource, value);
        self
    }

    /// Make requests for a resource fail with a 503.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failure(self, resource: Resource) -> Self {
        self.failures.write().unwrap().push(resource);
        self
    }

    /// Run `hook` on every request.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_hook(self, hook: impl Fn(Resource) + Send + Sync + 'static) -> Self {
        self.hooks.write().unwrap().push(Arc::new(hook));
        self
    }

    /// Sleep for `delay` before answering each request.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_delay(self, delay: Duration) -> Self {
        *self.delay.write().unwrap() = Some(delay);
        self
    }

    /// Resources requested so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<Resource> {
        self.calls.read().unwrap().clone()
    }

    /// Number of requests made for `resource`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn call_count(&self, resource: Resource) -> usize {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter(|r| **r == resource)
            .count()
    }

    fn respond<T: DeserializeOwned>(
        &self,
        resource: Resource,
        fallback: fn() -> Value,
    ) -> Result<T, ContentError> {
        self.calls.write().unwrap().push(resource);

        let hooks: Vec<FetchHook> = self.hooks.read().unwrap().clone();
        for hook in hooks {
            hook(resource);
        }

        let delay = *self.delay.read().unwrap();
        if let Some(delay) = delay {
            std::thread::sleep(delay);
        }

        if self.failures.read().unwrap().contains(&resource) {
            return Err(ContentError::HttpResponse {
                status: 503,
                body: "mock failure".to_owned(),
            });
        }

        let body = self
            .bodies
            .read()
            .unwrap()
            .get(&resource)
            .cloned()
            .unwrap_or_else(fallback);
        Ok(serde_json::from_value(body)?)
    }

    fn first_item<T: DeserializeOwned>(&self, resource: Resource) -> Result<Option<T>, ContentError> {
        let listing: Listing = self.respond(resource, empty_listing)?;
        Ok(listing.into_first()?)
    }
}

fn empty_listing() -> Value {
    serde_json::json!({ "items": [] })
}

fn empty_object() -> Value {
    serde_json::json!({})
}

impl ContentSource for MockContent {
    fn landing_page(&self) -> Result<Option<SalesPageDocument>, ContentError> {
        self.first_item(Resource::Landing)
    }

    fn features_pages(&self) -> Result<Vec<ReferencePage>, ContentError> {
        let listing: Listing = self.respond(Resource::Features, empty_listing)?;
        Ok(listing.into_items()?)
    }

    fn workbook_page(&self) -> Result<Option<ReferencePage>, ContentError> {
        self.first_item(Resource::Workbook)
    }

    fn terms_page(&self) -> Result<Option<TermsDocument>, ContentError> {
        self.first_item(Resource::Terms)
    }

    fn web_form_page(&self) -> Result<Option<WebFormPage>, ContentError> {
        self.first_item(Resource::WebForm)
    }

    fn site_settings(&self) -> Result<SiteSettings, ContentError> {
        self.respond(Resource::SiteSettings, empty_object)
    }
}
