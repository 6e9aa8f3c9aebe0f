//! Whole-page markup: document shell, status views and the static pages.

use std::fmt::Write;

use lander_content::{TermsDocument, WebFormPage};

use crate::html::{LOADING_LABEL, RichTextPolicy, escape_html, text_element};
use crate::section::RenderedBlock;

/// Title used until site settings provide one.
pub const DEFAULT_TITLE: &str = "Lander";

/// Text of the generic failure view.
pub const NOT_FOUND_TEXT: &str = "Page not found";

/// Document-level metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentHead<'a> {
    /// `<title>` text; [`DEFAULT_TITLE`] when `None`.
    pub title: Option<&'a str>,
    /// Absolute favicon URL.
    pub favicon: Option<&'a str>,
}

/// Wrap a page body in a complete HTML document.
pub fn render_document(head: &DocumentHead<'_>, body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 256);
    out.push_str(r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8">"#);
    out.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
    write!(
        out,
        "<title>{}</title>",
        escape_html(head.title.unwrap_or(DEFAULT_TITLE))
    )
    .unwrap();
    if let Some(href) = head.favicon {
        write!(out, r#"<link rel="icon" href="{}">"#, escape_html(href)).unwrap();
    }
    out.push_str("</head><body>");
    out.push_str(body);
    out.push_str("</body></html>");
    out
}

/// Spinner shown while a page's content is in flight.
pub fn loading_view() -> String {
    format!(
        r#"<div class="page-loading" role="status"><div class="spinner"></div><div class="loading-label">{LOADING_LABEL}</div></div>"#
    )
}

/// Terminal view for missing or failed content.
pub fn not_found_view() -> String {
    format!(r#"<div class="page-not-found">{NOT_FOUND_TEXT}</div>"#)
}

/// Sales page body from its rendered blocks and optional form overlay.
pub fn render_sales_body(blocks: &[RenderedBlock], overlay: Option<&str>) -> String {
    let capacity = blocks.iter().map(|b| b.html.len()).sum::<usize>() + 64;
    let mut out = String::with_capacity(capacity);
    out.push_str(r#"<main class="sales-page">"#);
    for block in blocks {
        out.push_str(&block.html);
    }
    out.push_str("</main>");
    if let Some(overlay) = overlay {
        out.push_str(overlay);
    }
    out
}

/// Mount point for the external lead-capture form.
///
/// The form definition is embedded as JSON for the form component to pick up.
pub fn render_overlay(form: &WebFormPage, open: bool) -> String {
    let hidden = if open { "" } else { " hidden" };
    let payload = form.web_form.to_string().replace("</", r"<\/");
    format!(
        r#"<div class="lead-capture-overlay" data-webform-page-id="{}"{hidden}><script type="application/json" class="lead-capture-form">{payload}</script></div>"#,
        form.id
    )
}

fn hero_banner(eyebrow: &str, title: &str, out: &mut String) {
    write!(
        out,
        r#"<header class="page-hero"><p class="page-hero-eyebrow">{}</p><h1 class="page-hero-title">{}</h1></header>"#,
        escape_html(eyebrow),
        escape_html(title)
    )
    .unwrap();
}

/// Static information page body.
pub fn render_info_page() -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(r#"<main class="info-page">"#);
    hero_banner("DEMO WEBSITE", "Information Page", &mut out);
    out.push_str(r#"<article class="page-content">"#);
    out.push_str("<h2>Welcome to the Demo Website Information Page</h2>");
    out.push_str(
        "<p>This is the information page for the demo website. Here you can find details about our platform and services.</p>",
    );
    out.push_str(
        "<p>Our platform offers comprehensive solutions for your business needs including document management, e-signature capabilities, and much more.</p>",
    );
    out.push_str("</article></main>");
    out
}

/// Terms and conditions page body.
pub fn render_terms_page(doc: &TermsDocument, policy: RichTextPolicy) -> String {
    let mut out = String::with_capacity(doc.description.len() + 512);
    out.push_str(r#"<main class="terms-page">"#);
    hero_banner("UNDERSTANDING OUR", "Terms & Conditions", &mut out);
    out.push_str(r#"<article class="page-content">"#);
    text_element("h2", "terms-subtitle", doc.subtitle.as_deref(), &mut out);
    if !doc.last_updated.is_empty() {
        write!(
            out,
            r#"<p class="terms-updated">Last updated: {}</p>"#,
            escape_html(&doc.last_updated)
        )
        .unwrap();
    }
    write!(
        out,
        r#"<div class="terms-body">{}</div>"#,
        policy.apply(&doc.description)
    )
    .unwrap();
    out.push_str("</article></main>");
    out
}
