//! HTTP client for the content API.
//!
//! Sync client built on a shared `ureq` agent. Every request carries the
//! `X-Frontend-Url` header the CMS uses to pick the tenant.

use std::time::Duration;

use lander_config::{ApiConfig, Config};
use lander_sections::SalesPageDocument;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use ureq::Agent;

use crate::error::ContentError;
use crate::source::{ContentSource, Resource};
use crate::types::{Listing, ReferencePage, SiteSettings, TermsDocument, WebFormPage};

/// Header identifying the calling frontend.
const FRONTEND_HEADER: &str = "X-Frontend-Url";

/// Content API client.
pub struct ContentClient {
    agent: Agent,
    api: ApiConfig,
}

impl ContentClient {
    /// Create a client for the given API settings.
    ///
    /// `timeout` bounds each request; `None` waits indefinitely.
    #[must_use]
    pub fn new(api: ApiConfig, timeout: Option<Duration>) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .into();

        Self { agent, api }
    }

    /// Create a client from loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_resolved.clone(), config.fetch.timeout())
    }

    /// Resolved API settings.
    #[must_use]
    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    /// Absolute URL for a resource.
    #[must_use]
    pub fn url_for(&self, resource: Resource) -> String {
        let endpoints = &self.api.endpoints;
        let path = match resource {
            Resource::Landing => &endpoints.landing,
            Resource::Features => &endpoints.features,
            Resource::Workbook => &endpoints.workbook,
            Resource::Terms => &endpoints.terms,
            Resource::WebForm => &endpoints.web_form,
            Resource::SiteSettings => return self.api.site_settings_url.clone(),
        };
        format!("{}/{}", self.api.base_url, path.trim_start_matches('/'))
    }

    /// GET a resource and decode the JSON body.
    fn get_json<T: DeserializeOwned>(&self, resource: Resource) -> Result<T, ContentError> {
        let url = self.url_for(resource);
        info!("Fetching {} from {}", resource, url);

        let response = self
            .agent
            .get(&url)
            .header(FRONTEND_HEADER, &self.api.frontend_url)
            .header("Accept", "application/json")
            .call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(ContentError::HttpResponse {
                status,
                body: error_body,
            });
        }

        let body = body_reader.read_to_string()?;
        debug!("Fetched {} ({} bytes)", resource, body.len());
        Ok(serde_json::from_str(&body)?)
    }

    fn first_item<T: DeserializeOwned>(&self, resource: Resource) -> Result<Option<T>, ContentError> {
        let listing: Listing = self.get_json(resource)?;
        let first = listing.into_first()?;
        if first.is_none() {
            info!("No {} document published", resource);
        }
        Ok(first)
    }
}

impl ContentSource for ContentClient {
    fn landing_page(&self) -> Result<Option<SalesPageDocument>, ContentError> {
        self.first_item(Resource::Landing)
    }

    fn features_pages(&self) -> Result<Vec<ReferencePage>, ContentError> {
        let listing: Listing = self.get_json(Resource::Features)?;
        info!("Found {} features pages", listing.len());
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
        self.get_json(Resource::SiteSettings)
    }
}
