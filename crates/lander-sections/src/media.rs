//! Media URL resolution.

/// Host that relative CMS media URLs are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaHost {
    host: String,
}

impl MediaHost {
    /// Create a media host. A trailing slash is ignored.
    pub fn new(host: impl Into<String>) -> Self {
        let host: String = host.into();
        Self {
            host: host.trim_end_matches('/').to_owned(),
        }
    }

    /// Host without trailing slash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.host
    }

    /// Make a CMS media URL absolute.
    ///
    /// Absolute, protocol-relative and `data:` URLs pass through unchanged.
    ///
    /// ```
    /// use lander_sections::MediaHost;
    ///
    /// let media = MediaHost::new("https://cms.example.com/");
    /// assert_eq!(media.resolve("/media/a.png"), "https://cms.example.com/media/a.png");
    /// assert_eq!(media.resolve("https://cdn.example.com/b.png"), "https://cdn.example.com/b.png");
    /// ```
    #[must_use]
    pub fn resolve(&self, url: &str) -> String {
        if url.is_empty()
            || url.starts_with("http://")
            || url.starts_with("https://")
            || url.starts_with("//")
            || url.starts_with("data:")
        {
            return url.to_owned();
        }
        if url.starts_with('/') {
            format!("{}{url}", self.host)
        } else {
            format!("{}/{url}", self.host)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_without_slash() {
        let media = MediaHost::new("https://cms.example.com");
        assert_eq!(
            media.resolve("media/images/hero.jpg"),
            "https://cms.example.com/media/images/hero.jpg"
        );
    }

    #[test]
    fn test_protocol_relative_passthrough() {
        let media = MediaHost::new("https://cms.example.com");
        assert_eq!(media.resolve("//cdn.example.com/x.png"), "//cdn.example.com/x.png");
    }

    #[test]
    fn test_empty_url_stays_empty() {
        let media = MediaHost::new("https://cms.example.com");
        assert_eq!(media.resolve(""), "");
    }

    #[test]
    fn test_host_trailing_slash_trimmed() {
        assert_eq!(MediaHost::new("http://localhost:8000/").as_str(), "http://localhost:8000");
    }
}
