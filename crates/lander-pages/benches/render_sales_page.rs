//! Benchmarks for sales page composition.

use std::sync::Arc;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lander_content::{MockContent, Resource};
use lander_pages::{PageChrome, PageOptions, SalesPage};
use lander_sections::MediaHost;
use serde_json::{Value, json};

/// Landing document with `reusable` reusable sections of four cards each.
fn landing_document(reusable: usize) -> Value {
    let sections: Vec<Value> = (0..reusable)
        .map(|i| {
            json!({
                "heading": format!("Module {i}"),
                "description": "Everything you need to know.",
                "cards": (0..4).map(|c| json!({
                    "name": format!("Lesson {c}"),
                    "description": "🔸 Forms\n🔸 Deadlines\n\n🔸 Penalties",
                })).collect::<Vec<_>>(),
                "button": {"text": "Enroll"},
            })
        })
        .collect();

    json!({"items": [{
        "header_section": {"title": "Save Big", "line_one": "Today only", "button": {"text": "Join"}},
        "main_hero_section": {"heading": "Master 1099s", "image": {"url": "/media/hero.png"}},
        "featured_on_section": {"heading": "As seen on", "items": [{"name": "Daily"}, {"name": "Weekly", "icon": "news"}]},
        "reusable_sections": sections,
        "faq_section": {"heading": "FAQ", "faqs": [{"question": "Q", "answer": "<p>A</p>"}]},
    }]})
}

fn mounted_page(reusable: usize) -> SalesPage {
    let content = MockContent::new().with_value(Resource::Landing, landing_document(reusable));
    let options = PageOptions {
        settings_delay: Duration::from_secs(3600),
        ..PageOptions::new(MediaHost::new("https://cms.example.com"))
    };
    let mut page = SalesPage::new(Arc::new(content), &PageChrome::new(), options);
    page.mount();
    page
}

fn bench_render_by_sections(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_sales_page");

    for reusable in [1, 10, 50] {
        let page = mounted_page(reusable);
        let size = page.render().body.len();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::new("reusable_sections", reusable),
            &page,
            |b, page| b.iter(|| page.render()),
        );
    }

    group.finish();
}

fn bench_render_document(c: &mut Criterion) {
    let page = mounted_page(5);
    c.bench_function("render_sales_document", |b| {
        b.iter(|| page.render().to_document());
    });
}

criterion_group!(benches, bench_render_by_sections, bench_render_document);
criterion_main!(benches);
