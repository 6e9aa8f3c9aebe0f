//! HTML rendering for Lander pages.
//!
//! Rendering is a pure function of the fetched content plus a
//! [`RenderContext`]. Sections render only when present; plain text is
//! always escaped, rich text follows the [`RichTextPolicy`].
//!
//! # Example
//!
//! ```
//! use lander_renderer::{RenderContext, render_sections};
//! use lander_sections::{MediaHost, SalesPageDocument};
//!
//! let doc: SalesPageDocument =
//!     serde_json::from_str(r#"{"header_section": {"title": "Save Big"}}"#).unwrap();
//! let media = MediaHost::new("https://cms.example.com");
//! let blocks = render_sections(&doc, &RenderContext::new(&media));
//! assert_eq!(blocks.len(), 1);
//! ```

mod html;
mod page;
mod section;

pub use html::{LOADING_LABEL, RichTextPolicy, escape_html};
pub use page::{
    DEFAULT_TITLE, DocumentHead, NOT_FOUND_TEXT, loading_view, not_found_view, render_document,
    render_info_page, render_overlay, render_sales_body, render_terms_page,
};
pub use section::{RenderContext, RenderedBlock, render_section, render_sections};
