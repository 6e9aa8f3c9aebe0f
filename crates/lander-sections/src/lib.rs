//! Typed page sections for Lander.
//!
//! The CMS serves a sales page as one loosely shaped JSON document. This crate
//! turns it into a [`SalesPageDocument`] whose sections are strongly typed
//! structs, each with an explicit [`Presence`] rule, and exposes the document
//! as an ordered list of [`Section`] variants.
//!
//! Decoding is tolerant per section: a malformed section is dropped instead of
//! failing the whole document.
//!
//! # Example
//!
//! ```
//! use lander_sections::{SalesPageDocument, SectionKind};
//!
//! let doc: SalesPageDocument =
//!     serde_json::from_str(r#"{"header_section": {"title": "Save Big"}}"#).unwrap();
//! assert_eq!(doc.presence(), vec![SectionKind::Banner]);
//! ```

mod document;
mod lenient;
mod media;
mod section;
mod text;

pub use document::{
    Button, CalendarSection, CardItem, CardSection, FaqItem, FaqSection, FeaturedItem,
    FeaturedOnSection, FormReference, GalleryImage, GallerySection, HeaderSection, HeroSection,
    Image, PricingSection, ReusableSection, SalesPageDocument, SecondaryCtaSection,
    SimpleCtaSection, WebFormSection,
};
pub use media::MediaHost;
pub use section::{Presence, Section, SectionKind};
pub use text::{bullet_lines, strip_glyph};
