//! HTML primitives shared by section and page rendering.

use std::borrow::Cow;
use std::fmt::Write;

use lander_config::RichTextMode;

/// Escape special HTML characters.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Treatment of CMS rich-text fields (terms body, FAQ answers, calendar embeds).
///
/// `Trusted` injects the markup verbatim and therefore relies on the CMS to
/// sanitize what it serves. Plain-text fields are escaped under either policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RichTextPolicy {
    /// Inject verbatim.
    #[default]
    Trusted,
    /// Escape like plain text.
    Escaped,
}

impl RichTextPolicy {
    /// Apply the policy to a rich-text value.
    pub fn apply<'a>(self, markup: &'a str) -> Cow<'a, str> {
        match self {
            Self::Trusted => Cow::Borrowed(markup),
            Self::Escaped => Cow::Owned(escape_html(markup)),
        }
    }
}

impl From<RichTextMode> for RichTextPolicy {
    fn from(mode: RichTextMode) -> Self {
        match mode {
            RichTextMode::Trusted => Self::Trusted,
            RichTextMode::Escaped => Self::Escaped,
        }
    }
}

/// Label shown on every CTA while the lead-capture form is loading.
pub const LOADING_LABEL: &str = "Loading...";

/// Append a lead-capture button.
///
/// While `loading` is set the button is disabled and shows [`LOADING_LABEL`]
/// instead of `label`.
pub(crate) fn cta_button(class: &str, label: &str, loading: bool, out: &mut String) {
    if loading {
        write!(
            out,
            r#"<button type="button" class="cta {class}" data-action="open-lead-capture" disabled>{LOADING_LABEL}</button>"#
        )
        .unwrap();
    } else {
        write!(
            out,
            r#"<button type="button" class="cta {class}" data-action="open-lead-capture">{}</button>"#,
            escape_html(label)
        )
        .unwrap();
    }
}

/// Append `<tag class="class">text</tag>` when `text` is non-empty.
pub(crate) fn text_element(tag: &str, class: &str, text: Option<&str>, out: &mut String) {
    if let Some(text) = text.filter(|t| !t.is_empty()) {
        write!(out, r#"<{tag} class="{class}">{}</{tag}>"#, escape_html(text)).unwrap();
    }
}
