//! Page composers for Lander.
//!
//! A composer owns one mounted page: it fetches content through a
//! [`ContentSource`](lander_content::ContentSource), tracks the page state and
//! composes a [`PageView`]. Three pages exist:
//!
//! - [`SalesPage`]: CMS-driven landing page with lead capture and FAQ
//! - [`TermsPage`]: terms and conditions document
//! - [`InfoPage`]: static information page
//!
//! Document title and favicon are shared through [`PageChrome`].

mod chrome;
mod deferred;
mod faq;
mod info;
mod lead;
mod sales;
mod terms;
mod view;

pub use chrome::{ChromeLease, ChromeSnapshot, PageChrome};
pub use deferred::{DeferredHandle, SettingsOutcome, schedule_settings};
pub use faq::FaqAccordion;
pub use info::InfoPage;
pub use lead::{LeadCapture, LoadingFlag, TriggerOutcome};
pub use sales::{FetchFailure, SalesContent, SalesPage, SalesState};
pub use terms::{TermsPage, TermsState};
pub use view::{PageOptions, PageView};
