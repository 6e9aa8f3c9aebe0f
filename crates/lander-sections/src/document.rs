//! Sales page document as served by the CMS.
//!
//! Every section is optional and every field inside a section is optional.
//! Nothing here decides visibility; see [`crate::Presence`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lenient;

/// Returns true when the field holds a non-empty string.
pub(crate) fn has_text(value: Option<&String>) -> bool {
    value.is_some_and(|s| !s.is_empty())
}

/// Call-to-action button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Button {
    /// Button label.
    pub text: Option<String>,
    /// Target URL, if the CMS sets one. CTA buttons open the lead-capture
    /// overlay regardless.
    pub url: Option<String>,
}

impl Button {
    /// Label if non-empty.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.text.as_deref().filter(|s| !s.is_empty())
    }
}

/// Image reference, possibly relative to the media host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Image {
    /// Image URL.
    pub url: Option<String>,
}

impl Image {
    /// URL if non-empty.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        self.url.as_deref().filter(|s| !s.is_empty())
    }
}

/// Top banner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HeaderSection {
    /// Banner headline.
    pub title: Option<String>,
    /// Line shown under the banner.
    pub line_one: Option<String>,
    /// Banner button.
    #[serde(deserialize_with = "lenient::optional")]
    pub button: Option<Button>,
}

/// Main hero block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HeroSection {
    /// Main heading.
    pub heading: Option<String>,
    /// Subheading.
    pub subheading: Option<String>,
    /// Body text.
    pub description: Option<String>,
    /// Hero button.
    #[serde(deserialize_with = "lenient::optional")]
    pub button: Option<Button>,
    /// Hero image.
    #[serde(deserialize_with = "lenient::optional")]
    pub image: Option<Image>,
}

/// One logo in the "featured on" carousel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeaturedItem {
    /// Outlet name.
    pub name: Option<String>,
    /// Icon reference handed to the icon renderer.
    pub icon: Option<String>,
}

/// "Featured on" carousel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeaturedOnSection {
    /// Caption above the carousel.
    pub heading: Option<String>,
    /// Carousel entries.
    #[serde(deserialize_with = "lenient::sequence")]
    pub items: Vec<FeaturedItem>,
}

/// A card in a card grid.
///
/// Learn cards use `title`; reusable-section cards use `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CardItem {
    /// Card title.
    pub title: Option<String>,
    /// Alternate title field.
    pub name: Option<String>,
    /// Subtitle.
    pub subtitle: Option<String>,
    /// Body, possibly newline-delimited bullets.
    pub description: Option<String>,
}

impl CardItem {
    /// Title, falling back to `name`.
    #[must_use]
    pub fn heading(&self) -> Option<&str> {
        self.title
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.name.as_deref().filter(|s| !s.is_empty()))
    }

    /// Whether the card carries anything worth showing.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.heading().is_some() || has_text(self.description.as_ref())
    }
}

/// "What you'll learn" card grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CardSection {
    /// Grid heading.
    pub main_header: Option<String>,
    /// Text under the heading.
    pub footer_title: Option<String>,
    /// Cards in display order.
    #[serde(deserialize_with = "lenient::sequence")]
    pub cards: Vec<CardItem>,
}

/// Secondary call-to-action ("limited time offer").
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SecondaryCtaSection {
    /// Heading.
    pub heading: Option<String>,
    /// Large highlighted text.
    pub description: Option<String>,
    /// Announcement line.
    pub announcement: Option<String>,
    /// Button.
    #[serde(deserialize_with = "lenient::optional")]
    pub button: Option<Button>,
}

/// One image in the gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GalleryImage {
    /// Image.
    #[serde(deserialize_with = "lenient::optional")]
    pub image: Option<Image>,
    /// Caption, used as alt text.
    pub caption: Option<String>,
}

impl GalleryImage {
    /// Image URL if present.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        self.image.as_ref().and_then(Image::src)
    }
}

/// Image gallery ("meet your speakers").
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GallerySection {
    /// Heading.
    pub heading: Option<String>,
    /// Images in display order.
    #[serde(deserialize_with = "lenient::sequence")]
    pub images: Vec<GalleryImage>,
}

impl GallerySection {
    /// Images that actually have a URL.
    pub fn visible_images(&self) -> impl Iterator<Item = &GalleryImage> {
        self.images.iter().filter(|img| img.src().is_some())
    }
}

/// Pricing card (the CMS calls it the primary CTA).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PricingSection {
    /// Card header.
    pub heading: Option<String>,
    /// Price line.
    pub subtitle: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Highlighted note.
    pub subdescription: Option<String>,
    /// Button.
    #[serde(deserialize_with = "lenient::optional")]
    pub button: Option<Button>,
}

/// Generic content block repeated any number of times.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReusableSection {
    /// Heading.
    pub heading: Option<String>,
    /// Subheading pill.
    pub subheading: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Secondary description.
    pub subdescription: Option<String>,
    /// Button.
    #[serde(deserialize_with = "lenient::optional")]
    pub button: Option<Button>,
    /// Image.
    #[serde(deserialize_with = "lenient::optional")]
    pub image: Option<Image>,
    /// Cards.
    #[serde(deserialize_with = "lenient::sequence")]
    pub cards: Vec<CardItem>,
}

impl ReusableSection {
    /// Cards with a name or description.
    pub fn visible_cards(&self) -> impl Iterator<Item = &CardItem> {
        self.cards.iter().filter(|card| card.has_content())
    }
}

/// Plain call-to-action block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimpleCtaSection {
    /// Heading.
    pub heading: Option<String>,
    /// Subtitle.
    pub subtitle: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Button.
    #[serde(deserialize_with = "lenient::optional")]
    pub button: Option<Button>,
}

/// Form definition referenced by the page. The structure belongs to the
/// external form component; only the title is read here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FormReference {
    /// Title shown on the trigger button.
    pub form_title: Option<String>,
    /// Remaining fields, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Block that opens the lead-capture form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WebFormSection {
    /// Heading.
    pub heading: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Form reference; the block is shown only when set.
    #[serde(deserialize_with = "lenient::optional")]
    pub form: Option<FormReference>,
}

/// Embedded booking calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CalendarSection {
    /// Heading.
    pub heading: Option<String>,
    /// Third-party embed markup (rich text).
    pub embed_code: Option<String>,
}

/// One FAQ entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FaqItem {
    /// Question.
    pub question: Option<String>,
    /// Answer (rich text).
    pub answer: Option<String>,
}

/// FAQ accordion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FaqSection {
    /// Heading.
    pub heading: Option<String>,
    /// Entries in display order.
    #[serde(deserialize_with = "lenient::sequence")]
    pub faqs: Vec<FaqItem>,
}

/// Sales landing page document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SalesPageDocument {
    /// CMS identifier.
    #[serde(deserialize_with = "lenient::optional")]
    pub id: Option<u64>,
    /// Document title.
    #[serde(deserialize_with = "lenient::optional")]
    pub title: Option<String>,
    /// Top banner.
    #[serde(deserialize_with = "lenient::optional")]
    pub header_section: Option<HeaderSection>,
    /// Hero.
    #[serde(deserialize_with = "lenient::optional")]
    pub main_hero_section: Option<HeroSection>,
    /// Featured-on carousel.
    #[serde(deserialize_with = "lenient::optional")]
    pub featured_on_section: Option<FeaturedOnSection>,
    /// Learn cards.
    #[serde(deserialize_with = "lenient::optional")]
    pub card_sections: Option<CardSection>,
    /// Secondary CTA.
    #[serde(deserialize_with = "lenient::optional")]
    pub secondary_cta_section: Option<SecondaryCtaSection>,
    /// Gallery.
    #[serde(deserialize_with = "lenient::optional")]
    pub images_gallery_section: Option<GallerySection>,
    /// Pricing.
    #[serde(deserialize_with = "lenient::optional")]
    pub primary_cta_section: Option<PricingSection>,
    /// Reusable blocks in order.
    #[serde(deserialize_with = "lenient::sequence")]
    pub reusable_sections: Vec<ReusableSection>,
    /// Simple CTAs in order.
    #[serde(deserialize_with = "lenient::sequence")]
    pub simple_cta_sections: Vec<SimpleCtaSection>,
    /// Web form trigger.
    #[serde(deserialize_with = "lenient::optional")]
    pub web_form_section: Option<WebFormSection>,
    /// Calendar embed.
    #[serde(deserialize_with = "lenient::optional")]
    pub calendar_section: Option<CalendarSection>,
    /// FAQ.
    #[serde(deserialize_with = "lenient::optional")]
    pub faq_section: Option<FaqSection>,
}
