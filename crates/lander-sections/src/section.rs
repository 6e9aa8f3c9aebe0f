//! Section variants and presence rules.
//!
//! A section is shown only when its [`Presence`] predicate holds. There is no
//! visibility flag in the CMS; non-empty content is the only signal.

use serde::Serialize;

use crate::document::{
    CalendarSection, CardSection, FaqSection, FeaturedOnSection, GallerySection, HeaderSection,
    HeroSection, PricingSection, ReusableSection, SalesPageDocument, SecondaryCtaSection,
    SimpleCtaSection, WebFormSection, has_text,
};

/// Whether a section has enough content to render.
pub trait Presence {
    /// True when at least one meaningful field is non-empty.
    fn is_present(&self) -> bool;
}

fn button_has_label(button: Option<&crate::Button>) -> bool {
    button.is_some_and(|b| b.label().is_some())
}

impl Presence for HeaderSection {
    fn is_present(&self) -> bool {
        has_text(self.title.as_ref()) || has_text(self.line_one.as_ref())
    }
}

impl Presence for HeroSection {
    fn is_present(&self) -> bool {
        has_text(self.heading.as_ref())
            || has_text(self.subheading.as_ref())
            || has_text(self.description.as_ref())
            || button_has_label(self.button.as_ref())
            || self.image.as_ref().is_some_and(|img| img.src().is_some())
    }
}

impl Presence for FeaturedOnSection {
    fn is_present(&self) -> bool {
        !self.items.is_empty()
    }
}

impl Presence for CardSection {
    fn is_present(&self) -> bool {
        !self.cards.is_empty()
    }
}

impl Presence for SecondaryCtaSection {
    fn is_present(&self) -> bool {
        has_text(self.heading.as_ref())
    }
}

impl Presence for GallerySection {
    fn is_present(&self) -> bool {
        self.visible_images().next().is_some()
    }
}

impl Presence for PricingSection {
    fn is_present(&self) -> bool {
        has_text(self.heading.as_ref())
    }
}

impl Presence for ReusableSection {
    fn is_present(&self) -> bool {
        has_text(self.heading.as_ref())
            || has_text(self.subheading.as_ref())
            || has_text(self.description.as_ref())
            || has_text(self.subdescription.as_ref())
            || button_has_label(self.button.as_ref())
            || self.image.as_ref().is_some_and(|img| img.src().is_some())
            || !self.cards.is_empty()
    }
}

impl Presence for SimpleCtaSection {
    fn is_present(&self) -> bool {
        has_text(self.heading.as_ref())
            || has_text(self.subtitle.as_ref())
            || has_text(self.description.as_ref())
            || button_has_label(self.button.as_ref())
    }
}

impl Presence for WebFormSection {
    fn is_present(&self) -> bool {
        self.form.is_some()
    }
}

impl Presence for CalendarSection {
    fn is_present(&self) -> bool {
        has_text(self.embed_code.as_ref())
    }
}

impl Presence for FaqSection {
    fn is_present(&self) -> bool {
        !self.faqs.is_empty()
    }
}

/// Section tag, used for presence vectors and markup ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Banner,
    Hero,
    FeaturedOn,
    LearnCards,
    SecondaryCta,
    Gallery,
    Pricing,
    Reusable,
    SimpleCta,
    WebForm,
    Calendar,
    Faq,
}

impl SectionKind {
    /// Stable identifier used in markup.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Banner => "banner",
            Self::Hero => "hero",
            Self::FeaturedOn => "featured-on",
            Self::LearnCards => "learn-cards",
            Self::SecondaryCta => "secondary-cta",
            Self::Gallery => "gallery",
            Self::Pricing => "pricing",
            Self::Reusable => "reusable",
            Self::SimpleCta => "simple-cta",
            Self::WebForm => "web-form",
            Self::Calendar => "calendar",
            Self::Faq => "faq",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed section of a sales page, tagged by kind.
#[derive(Debug, Clone, Copy)]
pub enum Section<'a> {
    Banner(&'a HeaderSection),
    Hero(&'a HeroSection),
    FeaturedOn(&'a FeaturedOnSection),
    LearnCards(&'a CardSection),
    SecondaryCta(&'a SecondaryCtaSection),
    Gallery(&'a GallerySection),
    Pricing(&'a PricingSection),
    Reusable(&'a ReusableSection),
    SimpleCta(&'a SimpleCtaSection),
    WebForm(&'a WebFormSection),
    Calendar(&'a CalendarSection),
    Faq(&'a FaqSection),
}

impl Section<'_> {
    /// Tag of this section.
    #[must_use]
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Banner(_) => SectionKind::Banner,
            Self::Hero(_) => SectionKind::Hero,
            Self::FeaturedOn(_) => SectionKind::FeaturedOn,
            Self::LearnCards(_) => SectionKind::LearnCards,
            Self::SecondaryCta(_) => SectionKind::SecondaryCta,
            Self::Gallery(_) => SectionKind::Gallery,
            Self::Pricing(_) => SectionKind::Pricing,
            Self::Reusable(_) => SectionKind::Reusable,
            Self::SimpleCta(_) => SectionKind::SimpleCta,
            Self::WebForm(_) => SectionKind::WebForm,
            Self::Calendar(_) => SectionKind::Calendar,
            Self::Faq(_) => SectionKind::Faq,
        }
    }
}

impl Presence for Section<'_> {
    fn is_present(&self) -> bool {
        match self {
            Self::Banner(s) => s.is_present(),
            Self::Hero(s) => s.is_present(),
            Self::FeaturedOn(s) => s.is_present(),
            Self::LearnCards(s) => s.is_present(),
            Self::SecondaryCta(s) => s.is_present(),
            Self::Gallery(s) => s.is_present(),
            Self::Pricing(s) => s.is_present(),
            Self::Reusable(s) => s.is_present(),
            Self::SimpleCta(s) => s.is_present(),
            Self::WebForm(s) => s.is_present(),
            Self::Calendar(s) => s.is_present(),
            Self::Faq(s) => s.is_present(),
        }
    }
}

impl SalesPageDocument {
    /// All sections the document carries, in page order, present or not.
    pub fn candidate_sections(&self) -> Vec<Section<'_>> {
        let mut sections = Vec::new();
        sections.extend(self.header_section.as_ref().map(Section::Banner));
        sections.extend(self.main_hero_section.as_ref().map(Section::Hero));
        sections.extend(self.featured_on_section.as_ref().map(Section::FeaturedOn));
        sections.extend(self.card_sections.as_ref().map(Section::LearnCards));
        sections.extend(self.secondary_cta_section.as_ref().map(Section::SecondaryCta));
        sections.extend(self.images_gallery_section.as_ref().map(Section::Gallery));
        sections.extend(self.primary_cta_section.as_ref().map(Section::Pricing));
        sections.extend(self.reusable_sections.iter().map(Section::Reusable));
        sections.extend(self.simple_cta_sections.iter().map(Section::SimpleCta));
        sections.extend(self.web_form_section.as_ref().map(Section::WebForm));
        sections.extend(self.calendar_section.as_ref().map(Section::Calendar));
        sections.extend(self.faq_section.as_ref().map(Section::Faq));
        sections
    }

    /// Sections that pass their presence check, in page order.
    pub fn sections(&self) -> Vec<Section<'_>> {
        self.candidate_sections()
            .into_iter()
            .filter(Presence::is_present)
            .collect()
    }

    /// Kinds of the sections that will render, in page order.
    pub fn presence(&self) -> Vec<SectionKind> {
        self.sections().iter().map(Section::kind).collect()
    }
}
