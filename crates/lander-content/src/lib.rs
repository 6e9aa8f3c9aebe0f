//! CMS content access for Lander.
//!
//! [`ContentClient`] talks to the content API over HTTP; [`ContentSource`] is
//! the seam page composers depend on. Enable the `mock` feature for
//! [`MockContent`].

mod client;
mod error;
#[cfg(feature = "mock")]
mod mock;
mod source;
mod types;

pub use client::ContentClient;
pub use error::ContentError;
#[cfg(feature = "mock")]
pub use mock::{FetchHook, MockContent};
pub use source::{ContentSource, Resource};
pub use types::{Favicon, Listing, ReferencePage, SiteSettings, TermsDocument, WebFormPage};
