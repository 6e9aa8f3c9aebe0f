//! Content API response types.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// List response wrapper used by every collection endpoint.
///
/// Items stay undecoded until asked for, so entries that are never read
/// cannot fail the response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Listing {
    /// Collection items; missing means empty.
    pub items: Vec<Value>,
}

impl Listing {
    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Decode the first item, if any. The rest are not decoded.
    ///
    /// # Errors
    ///
    /// Returns an error if the first item does not match `T`.
    pub fn into_first<T: DeserializeOwned>(self) -> Result<Option<T>, serde_json::Error> {
        self.items
            .into_iter()
            .next()
            .map(serde_json::from_value)
            .transpose()
    }

    /// Decode every item.
    ///
    /// # Errors
    ///
    /// Returns an error if any item does not match `T`.
    pub fn into_items<T: DeserializeOwned>(self) -> Result<Vec<T>, serde_json::Error> {
        self.items.into_iter().map(serde_json::from_value).collect()
    }
}

/// Terms and conditions page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TermsDocument {
    /// CMS identifier.
    pub id: u64,
    /// Page title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Optional heading above the body.
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Body markup (rich text).
    #[serde(default)]
    pub description: String,
    /// Last update timestamp as sent by the CMS.
    #[serde(default)]
    pub last_updated: String,
}

/// Web form definition fetched by the lead-capture trigger.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WebFormPage {
    /// CMS identifier of the web form page.
    pub id: u64,
    /// Form definition, owned by the form component.
    #[serde(default)]
    pub web_form: Value,
}

/// Entry of the features or workbook collections.
///
/// The sales page only needs these loaded; their fields pass through.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReferencePage {
    /// CMS identifier.
    pub id: Option<u64>,
    /// Title.
    pub title: Option<String>,
    /// URL slug.
    pub slug: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Favicon reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Favicon {
    /// Icon URL, absolute or relative to the media host.
    pub url: Option<String>,
}

/// Site-wide presentation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Document title.
    pub site_title: Option<String>,
    /// Favicon.
    pub favicon: Option<Favicon>,
}

impl SiteSettings {
    /// Title if non-empty.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.site_title.as_deref().filter(|s| !s.is_empty())
    }

    /// Favicon URL if non-empty.
    #[must_use]
    pub fn favicon_url(&self) -> Option<&str> {
        self.favicon
            .as_ref()
            .and_then(|f| f.url.as_deref())
            .filter(|s| !s.is_empty())
    }
}
