//! Section markup.
//!
//! Each section kind has one rendering function. [`render_section`] applies
//! the presence check first, so a section that is not present yields no block.

use std::fmt::Write;

use lander_sections::{
    CalendarSection, CardItem, CardSection, FaqSection, FeaturedOnSection, GallerySection,
    HeaderSection, HeroSection, MediaHost, Presence, PricingSection, ReusableSection,
    SalesPageDocument, SecondaryCtaSection, Section, SectionKind, SimpleCtaSection,
    WebFormSection, bullet_lines,
};

use crate::html::{RichTextPolicy, cta_button, escape_html, text_element};

/// Badge above the learn-card heading.
const LEARN_BADGE: &str = "WHAT YOU'LL DISCOVER";
/// Badge on the secondary CTA card.
const OFFER_BADGE: &str = "Limited Time Offer";
/// Web form button label when the form has no title.
const DEFAULT_FORM_LABEL: &str = "Apply Now";
/// Gallery alt text when an image has no caption.
const DEFAULT_CAPTION: &str = "Speaker";

/// Inputs that vary between renders of the same document.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Host used to resolve relative image URLs.
    pub media: &'a MediaHost,
    /// Lead-capture form is loading; CTAs render disabled.
    pub cta_loading: bool,
    /// Index of the expanded FAQ entry.
    pub open_faq: Option<usize>,
    /// Rich-text treatment.
    pub rich_text: RichTextPolicy,
}

impl<'a> RenderContext<'a> {
    /// Context with nothing loading, no FAQ open, trusted rich text.
    #[must_use]
    pub fn new(media: &'a MediaHost) -> Self {
        Self {
            media,
            cta_loading: false,
            open_faq: None,
            rich_text: RichTextPolicy::default(),
        }
    }
}

/// Markup of one rendered section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    /// Section kind.
    pub kind: SectionKind,
    /// HTML fragment.
    pub html: String,
}

/// Render a section, or `None` when its presence check fails.
pub fn render_section(section: &Section<'_>, ctx: &RenderContext<'_>) -> Option<RenderedBlock> {
    if !section.is_present() {
        return None;
    }

    let kind = section.kind();
    let mut html = String::with_capacity(512);
    write!(html, r#"<section class="section section-{kind}" data-section="{kind}">"#).unwrap();
    match section {
        Section::Banner(s) => banner(s, ctx, &mut html),
        Section::Hero(s) => hero(s, ctx, &mut html),
        Section::FeaturedOn(s) => featured_on(s, &mut html),
        Section::LearnCards(s) => learn_cards(s, &mut html),
        Section::SecondaryCta(s) => secondary_cta(s, ctx, &mut html),
        Section::Gallery(s) => gallery(s, ctx, &mut html),
        Section::Pricing(s) => pricing(s, ctx, &mut html),
        Section::Reusable(s) => reusable(s, ctx, &mut html),
        Section::SimpleCta(s) => simple_cta(s, ctx, &mut html),
        Section::WebForm(s) => web_form(s, ctx, &mut html),
        Section::Calendar(s) => calendar(s, ctx, &mut html),
        Section::Faq(s) => faq(s, ctx, &mut html),
    }
    html.push_str("</section>");

    Some(RenderedBlock { kind, html })
}

fn banner(s: &HeaderSection, ctx: &RenderContext<'_>, out: &mut String) {
    out.push_str(r#"<div class="banner-bar">"#);
    text_element("p", "banner-title", s.title.as_deref(), out);
    if let Some(label) = s.button.as_ref().and_then(|b| b.label()) {
        cta_button("banner-cta", label, ctx.cta_loading, out);
    }
    out.push_str("</div>");
    text_element("p", "banner-line", s.line_one.as_deref(), out);
}

fn hero(s: &HeroSection, ctx: &RenderContext<'_>, out: &mut String) {
    out.push_str(r#"<div class="hero-copy">"#);
    text_element("h1", "hero-heading", s.heading.as_deref(), out);
    text_element("p", "hero-subheading", s.subheading.as_deref(), out);
    text_element("p", "hero-description", s.description.as_deref(), out);
    if let Some(label) = s.button.as_ref().and_then(|b| b.label()) {
        cta_button("hero-cta", &format!("🎯 {label}"), ctx.cta_loading, out);
    }
    out.push_str("</div>");
    if let Some(src) = s.image.as_ref().and_then(|i| i.src()) {
        write!(
            out,
            r#"<div class="hero-media"><img src="{}" alt="Workshop Hero"></div>"#,
            escape_html(&ctx.media.resolve(src))
        )
        .unwrap();
    }
}

fn featured_on(s: &FeaturedOnSection, out: &mut String) {
    text_element("p", "featured-heading", s.heading.as_deref(), out);
    out.push_str(r#"<div class="marquee">"#);
    // The track is emitted twice so the scroll animation can loop seamlessly.
    for copy in 0..2 {
        let hidden = if copy == 0 { "" } else { r#" aria-hidden="true""# };
        write!(out, r#"<div class="marquee-track"{hidden}>"#).unwrap();
        for item in &s.items {
            out.push_str(r#"<div class="featured-item">"#);
            match item.icon.as_deref().filter(|i| !i.is_empty()) {
                Some(icon) => write!(
                    out,
                    r#"<span class="icon" data-icon="{}"></span>"#,
                    escape_html(icon)
                )
                .unwrap(),
                None => out.push_str(r#"<span class="icon icon-fallback">●</span>"#),
            }
            text_element("span", "featured-name", item.name.as_deref(), out);
            out.push_str("</div>");
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
}

fn learn_cards(s: &CardSection, out: &mut String) {
    if let Some(header) = s.main_header.as_deref().filter(|h| !h.is_empty()) {
        write!(
            out,
            r#"<div class="learn-header"><span class="badge">{LEARN_BADGE}</span><h2>{}</h2>"#,
            escape_html(header)
        )
        .unwrap();
        text_element("p", "learn-footer", s.footer_title.as_deref(), out);
        out.push_str("</div>");
    }
    out.push_str(r#"<div class="card-grid">"#);
    for (idx, card) in s.cards.iter().enumerate() {
        write!(
            out,
            r#"<div class="card learn-card"><span class="card-number">{}</span><div class="card-body">"#,
            idx + 1
        )
        .unwrap();
        text_element("h3", "card-title", card.heading(), out);
        text_element("h4", "card-subtitle", card.subtitle.as_deref(), out);
        text_element("p", "card-description", card.description.as_deref(), out);
        out.push_str("</div></div>");
    }
    out.push_str("</div>");
}

fn secondary_cta(s: &SecondaryCtaSection, ctx: &RenderContext<'_>, out: &mut String) {
    write!(out, r#"<div class="offer-card"><span class="badge">{OFFER_BADGE}</span>"#).unwrap();
    text_element("h2", "offer-heading", s.heading.as_deref(), out);
    text_element("div", "offer-highlight", s.description.as_deref(), out);
    text_element("p", "offer-announcement", s.announcement.as_deref(), out);
    if let Some(label) = s.button.as_ref().and_then(|b| b.label()) {
        cta_button("offer-cta", &format!("{label} →"), ctx.cta_loading, out);
    }
    out.push_str("</div>");
}

fn gallery(s: &GallerySection, ctx: &RenderContext<'_>, out: &mut String) {
    text_element("h2", "gallery-heading", s.heading.as_deref(), out);
    out.push_str(r#"<div class="gallery-grid">"#);
    for image in s.visible_images() {
        let Some(src) = image.src() else { continue };
        let alt = image
            .caption
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CAPTION);
        write!(
            out,
            r#"<figure class="gallery-item"><img src="{}" alt="{}"></figure>"#,
            escape_html(&ctx.media.resolve(src)),
            escape_html(alt)
        )
        .unwrap();
    }
    out.push_str("</div>");
}

fn pricing(s: &PricingSection, ctx: &RenderContext<'_>, out: &mut String) {
    out.push_str(r#"<div class="pricing-card">"#);
    text_element("p", "pricing-heading", s.heading.as_deref(), out);
    out.push_str(r#"<div class="pricing-body">"#);
    text_element("div", "pricing-price", s.subtitle.as_deref(), out);
    text_element("p", "pricing-description", s.description.as_deref(), out);
    text_element("p", "pricing-note", s.subdescription.as_deref(), out);
    if let Some(label) = s.button.as_ref().and_then(|b| b.label()) {
        cta_button("pricing-cta", label, ctx.cta_loading, out);
    }
    out.push_str("</div></div>");
}

fn reusable(s: &ReusableSection, ctx: &RenderContext<'_>, out: &mut String) {
    out.push_str(r#"<div class="reusable-header">"#);
    text_element("h2", "reusable-heading", s.heading.as_deref(), out);
    text_element("h3", "reusable-subheading", s.subheading.as_deref(), out);
    text_element("p", "reusable-description", s.description.as_deref(), out);
    text_element("p", "reusable-subdescription", s.subdescription.as_deref(), out);
    out.push_str("</div>");

    if let Some(src) = s.image.as_ref().and_then(|i| i.src()) {
        write!(
            out,
            r#"<img class="reusable-image" src="{}" alt="">"#,
            escape_html(&ctx.media.resolve(src))
        )
        .unwrap();
    }

    if s.visible_cards().next().is_some() {
        out.push_str(r#"<div class="card-grid">"#);
        for card in s.visible_cards() {
            bullet_card(card, out);
        }
        out.push_str("</div>");
    }

    if let Some(label) = s.button.as_ref().and_then(|b| b.label()) {
        cta_button("reusable-cta", &format!("{label} →"), ctx.cta_loading, out);
    }
}

/// Card whose description is a list of bullet lines.
fn bullet_card(card: &CardItem, out: &mut String) {
    out.push_str(r#"<div class="card reusable-card">"#);
    text_element("h4", "card-title", card.heading(), out);
    if let Some(description) = card.description.as_deref() {
        let lines = bullet_lines(description);
        if !lines.is_empty() {
            out.push_str(r#"<ul class="card-bullets">"#);
            for line in lines {
                write!(out, "<li>{}</li>", escape_html(line)).unwrap();
            }
            out.push_str("</ul>");
        }
    }
    out.push_str("</div>");
}

fn simple_cta(s: &SimpleCtaSection, ctx: &RenderContext<'_>, out: &mut String) {
    text_element("h2", "simple-heading", s.heading.as_deref(), out);
    text_element("p", "simple-subtitle", s.subtitle.as_deref(), out);
    text_element("p", "simple-description", s.description.as_deref(), out);
    if let Some(label) = s.button.as_ref().and_then(|b| b.label()) {
        cta_button("simple-cta", &format!("🎯 {label}"), ctx.cta_loading, out);
    }
}

fn web_form(s: &WebFormSection, ctx: &RenderContext<'_>, out: &mut String) {
    text_element("h2", "web-form-heading", s.heading.as_deref(), out);
    text_element("p", "web-form-description", s.description.as_deref(), out);
    let label = s
        .form
        .as_ref()
        .and_then(|f| f.form_title.as_deref())
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_FORM_LABEL);
    cta_button("web-form-cta", label, ctx.cta_loading, out);
}

fn calendar(s: &CalendarSection, ctx: &RenderContext<'_>, out: &mut String) {
    text_element("h2", "calendar-heading", s.heading.as_deref(), out);
    let embed = s.embed_code.as_deref().unwrap_or_default();
    write!(
        out,
        r#"<div class="calendar-embed">{}</div>"#,
        ctx.rich_text.apply(embed)
    )
    .unwrap();
}

fn faq(s: &FaqSection, ctx: &RenderContext<'_>, out: &mut String) {
    text_element("h2", "faq-heading", s.heading.as_deref(), out);
    out.push_str(r#"<div class="faq-list">"#);
    for (idx, item) in s.faqs.iter().enumerate() {
        let open = ctx.open_faq == Some(idx);
        let (class, expanded, chevron) = if open {
            ("faq-item open", "true", "▲")
        } else {
            ("faq-item", "false", "▼")
        };
        write!(
            out,
            r#"<div class="{class}" data-faq-index="{idx}"><button type="button" class="faq-question" data-action="toggle-faq" aria-expanded="{expanded}"><span>{}</span><span class="chevron">{chevron}</span></button>"#,
            escape_html(item.question.as_deref().unwrap_or_default())
        )
        .unwrap();
        if open {
            write!(
                out,
                r#"<div class="faq-answer">{}</div>"#,
                ctx.rich_text.apply(item.answer.as_deref().unwrap_or_default())
            )
            .unwrap();
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
}

/// Render every present section of a document in page order.
pub fn render_sections(doc: &SalesPageDocument, ctx: &RenderContext<'_>) -> Vec<RenderedBlock> {
    doc.candidate_sections()
        .iter()
        .filter_map(|section| render_section(section, ctx))
        .collect()
}

#[cfg(test)]
mod tests {
    use lander_sections::{
        Button, FaqItem, FeaturedItem, FormReference, GalleryImage, Image,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    fn media() -> MediaHost {
        MediaHost::new("https://cms.example.com")
    }

    fn render(section: &Section<'_>, ctx: &RenderContext<'_>) -> String {
        render_section(section, ctx).unwrap().html
    }

    #[test]
    fn test_absent_section_renders_nothing() {
        let media = media();
        let ctx = RenderContext::new(&media);
        let header = HeaderSection::default();
        assert_eq!(render_section(&Section::Banner(&header), &ctx), None);
    }

    #[test]
    fn test_banner_only_document() {
        let doc: SalesPageDocument =
            serde_json::from_str(r#"{"header_section": {"title": "Save Big"}}"#).unwrap();
        let media = media();
        let blocks = render_sections(&doc, &RenderContext::new(&media));

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, SectionKind::Banner);
        assert!(blocks[0].html.contains(r#"<p class="banner-title">Save Big</p>"#));
        assert!(!blocks[0].html.contains("<button"));
    }

    #[test]
    fn test_plain_text_is_escaped() {
        let hero = HeroSection {
            heading: Some("<script>alert(1)</script>".to_owned()),
            ..HeroSection::default()
        };
        let media = media();
        let html = render(&Section::Hero(&hero), &RenderContext::new(&media));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_hero_button_and_relative_image() {
        let hero = HeroSection {
            button: Some(Button {
                text: Some("Register".to_owned()),
                url: None,
            }),
            image: Some(Image {
                url: Some("/media/hero.png".to_owned()),
            }),
            ..HeroSection::default()
        };
        let media = media();
        let html = render(&Section::Hero(&hero), &RenderContext::new(&media));
        assert!(html.contains(">🎯 Register</button>"));
        assert!(html.contains(r#"src="https://cms.example.com/media/hero.png""#));
    }

    #[test]
    fn test_loading_disables_every_cta() {
        let pricing = PricingSection {
            heading: Some("VIP".to_owned()),
            button: Some(Button {
                text: Some("Buy".to_owned()),
                url: None,
            }),
            ..PricingSection::default()
        };
        let media = media();
        let ctx = RenderContext {
            cta_loading: true,
            ..RenderContext::new(&media)
        };
        let html = render(&Section::Pricing(&pricing), &ctx);
        assert!(html.contains("disabled>Loading...</button>"));
        assert!(!html.contains(">Buy<"));
    }

    #[test]
    fn test_featured_on_marquee_twice_with_fallback_icon() {
        let section = FeaturedOnSection {
            heading: Some("As seen on".to_owned()),
            items: vec![
                FeaturedItem {
                    name: Some("Daily".to_owned()),
                    icon: Some("lucide:newspaper".to_owned()),
                },
                FeaturedItem {
                    name: Some("Weekly".to_owned()),
                    icon: None,
                },
            ],
        };
        let media = media();
        let html = render(&Section::FeaturedOn(&section), &RenderContext::new(&media));
        assert_eq!(html.matches("marquee-track").count(), 2);
        assert_eq!(html.matches(">Daily<").count(), 2);
        assert_eq!(html.matches("icon-fallback").count(), 2);
        assert!(html.contains(r#"data-icon="lucide:newspaper""#));
    }

    #[test]
    fn test_learn_cards_numbered_with_badge() {
        let section = CardSection {
            main_header: Some("Inside".to_owned()),
            footer_title: None,
            cards: vec![
                CardItem {
                    title: Some("First".to_owned()),
                    description: Some("🔸 kept verbatim".to_owned()),
                    ..CardItem::default()
                },
                CardItem {
                    title: Some("Second".to_owned()),
                    ..CardItem::default()
                },
            ],
        };
        let media = media();
        let html = render(&Section::LearnCards(&section), &RenderContext::new(&media));
        assert!(html.contains(LEARN_BADGE));
        assert!(html.contains(r#"<span class="card-number">1</span>"#));
        assert!(html.contains(r#"<span class="card-number">2</span>"#));
        assert!(html.contains(r#"<p class="card-description">🔸 kept verbatim</p>"#));
    }

    #[test]
    fn test_reusable_cards_render_bullets_and_skip_empty() {
        let section = ReusableSection {
            heading: Some("Modules".to_owned()),
            cards: vec![
                CardItem {
                    name: Some("Module 1".to_owned()),
                    description: Some("🔸 A\n\n🔸 B\n  \nC".to_owned()),
                    ..CardItem::default()
                },
                CardItem::default(),
            ],
            ..ReusableSection::default()
        };
        let media = media();
        let html = render(&Section::Reusable(&section), &RenderContext::new(&media));
        assert!(html.contains(
            r#"<ul class="card-bullets"><li>A</li><li>B</li><li>C</li></ul>"#
        ));
        assert_eq!(html.matches("reusable-card").count(), 1);
    }

    #[test]
    fn test_gallery_default_caption() {
        let section = GallerySection {
            heading: None,
            images: vec![
                GalleryImage {
                    image: Some(Image {
                        url: Some("https://img.example.com/a.jpg".to_owned()),
                    }),
                    caption: None,
                },
                GalleryImage::default(),
            ],
        };
        let media = media();
        let html = render(&Section::Gallery(&section), &RenderContext::new(&media));
        assert_eq!(html.matches("<figure").count(), 1);
        assert!(html.contains(r#"alt="Speaker""#));
    }

    #[test]
    fn test_web_form_label_falls_back() {
        let mut section = WebFormSection {
            heading: Some("Apply".to_owned()),
            description: None,
            form: Some(FormReference::default()),
        };
        let media = media();
        let ctx = RenderContext::new(&media);
        assert!(render(&Section::WebForm(&section), &ctx).contains(">Apply Now</button>"));

        section.form = Some(FormReference {
            form_title: Some("Reserve a seat".to_owned()),
            ..FormReference::default()
        });
        assert!(render(&Section::WebForm(&section), &ctx).contains(">Reserve a seat</button>"));
    }

    #[test]
    fn test_faq_only_open_entry_shows_answer() {
        let section = FaqSection {
            heading: Some("FAQ".to_owned()),
            faqs: vec![
                FaqItem {
                    question: Some("Q1".to_owned()),
                    answer: Some("<p>A1</p>".to_owned()),
                },
                FaqItem {
                    question: Some("Q2".to_owned()),
                    answer: Some("<p>A2</p>".to_owned()),
                },
            ],
        };
        let media = media();
        let ctx = RenderContext {
            open_faq: Some(1),
            ..RenderContext::new(&media)
        };
        let html = render(&Section::Faq(&section), &ctx);
        assert!(!html.contains("A1"));
        assert!(html.contains(r#"<div class="faq-answer"><p>A2</p></div>"#));
        assert_eq!(html.matches(r#"aria-expanded="true""#).count(), 1);
    }

    #[test]
    fn test_calendar_embed_follows_policy() {
        let section = CalendarSection {
            heading: None,
            embed_code: Some("<iframe src=\"x\"></iframe>".to_owned()),
        };
        let media = media();
        let trusted = render(&Section::Calendar(&section), &RenderContext::new(&media));
        assert!(trusted.contains("<iframe src=\"x\"></iframe>"));

        let escaped = render(
            &Section::Calendar(&section),
            &RenderContext {
                rich_text: RichTextPolicy::Escaped,
                ..RenderContext::new(&media)
            },
        );
        assert!(escaped.contains("&lt;iframe"));
    }
}
