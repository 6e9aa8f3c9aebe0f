//! Rendering options and rendered page output.

use std::time::Duration;

use lander_config::Config;
use lander_renderer::{DocumentHead, RichTextPolicy, render_document};
use lander_sections::MediaHost;

use crate::chrome::ChromeSnapshot;

/// Per-site options shared by all page composers.
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Host relative media URLs resolve against.
    pub media: MediaHost,
    /// Rich-text treatment.
    pub rich_text: RichTextPolicy,
    /// Wait before the site-settings fetch.
    pub settings_delay: Duration,
}

impl PageOptions {
    /// Options with trusted rich text and a 100 ms settings delay.
    #[must_use]
    pub fn new(media: MediaHost) -> Self {
        Self {
            media,
            rich_text: RichTextPolicy::Trusted,
            settings_delay: Duration::from_millis(100),
        }
    }

    /// Options from loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            media: MediaHost::new(config.api_resolved.media_host.clone()),
            rich_text: config.render.rich_text.into(),
            settings_delay: config.fetch.settings_delay(),
        }
    }
}

/// A composed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Document title, when known.
    pub title: Option<String>,
    /// Favicon URL, when known.
    pub favicon: Option<String>,
    /// Body markup.
    pub body: String,
}

impl PageView {
    /// View with no chrome.
    #[must_use]
    pub fn bare(body: String) -> Self {
        Self {
            title: None,
            favicon: None,
            body,
        }
    }

    pub(crate) fn with_chrome(body: String, chrome: ChromeSnapshot) -> Self {
        Self {
            title: chrome.title,
            favicon: chrome.favicon,
            body,
        }
    }

    /// Full HTML document.
    #[must_use]
    pub fn to_document(&self) -> String {
        let head = DocumentHead {
            title: self.title.as_deref(),
            favicon: self.favicon.as_deref(),
        };
        render_document(&head, &self.body)
    }
}
