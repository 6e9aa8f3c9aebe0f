//! Content source abstraction.
//!
//! Page composers depend on [`ContentSource`] rather than on the HTTP client
//! so that they can be driven by [`MockContent`](crate::MockContent) in tests.

use lander_sections::SalesPageDocument;

use crate::error::ContentError;
use crate::types::{ReferencePage, SiteSettings, TermsDocument, WebFormPage};

/// A fetchable content resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Sales landing page document.
    Landing,
    /// Features page collection.
    Features,
    /// Workbook reference document.
    Workbook,
    /// Terms and conditions document.
    Terms,
    /// Lead-capture web form definition.
    WebForm,
    /// Site-wide title and favicon.
    SiteSettings,
}

impl Resource {
    /// Name used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Features => "features",
            Self::Workbook => "workbook",
            Self::Terms => "terms",
            Self::WebForm => "web_form",
            Self::SiteSettings => "site_settings",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read access to CMS content.
///
/// Single-document methods return `Ok(None)` when the collection is empty.
/// Implementations perform exactly one request per call and never retry.
pub trait ContentSource: Send + Sync {
    /// Fetch the sales landing page.
    fn landing_page(&self) -> Result<Option<SalesPageDocument>, ContentError>;

    /// Fetch every features page.
    fn features_pages(&self) -> Result<Vec<ReferencePage>, ContentError>;

    /// Fetch the workbook document.
    fn workbook_page(&self) -> Result<Option<ReferencePage>, ContentError>;

    /// Fetch the terms and conditions document.
    fn terms_page(&self) -> Result<Option<TermsDocument>, ContentError>;

    /// Fetch the lead-capture form definition.
    fn web_form_page(&self) -> Result<Option<WebFormPage>, ContentError>;

    /// Fetch site-wide settings.
    fn site_settings(&self) -> Result<SiteSettings, ContentError>;
}
