//! Demo: event panel and carousel on one page
//!
//! Run with `RUST_LOG=debug` to see the wiring.

use tracing_subscriber::EnvFilter;
use wick_ui::{setup_carousel, CarouselConfig, HandlerRegistry};

const PAGE: &str = r#"
    <button id="target-btn">Target</button>
    <pre id="status">No events yet</pre>
    <div class="carousel-wrapper">
      <button class="arrow left">&lt;</button>
      <div class="carousel">
        <div class="item" data-id="1">Item 1</div>
        <div class="item" data-id="2">Item 2</div>
      </div>
      <button class="arrow right">&gt;</button>
    </div>
    <div id="modal" class="modal hidden">Modal</div>
"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut doc = wick_html::parse(PAGE);
    let mut registry = HandlerRegistry::new();

    registry.add_events_by_id(&mut doc, "target-btn", ["click", "mouseover"]);
    let btn = doc
        .get_element_by_id("target-btn")
        .ok_or_else(|| anyhow::anyhow!("#target-btn missing"))?;
    doc.click(btn);
    doc.click(btn);
    registry.remove_events_by_id(&mut doc, "target-btn", ["mouseover"]);

    let status = doc
        .get_element_by_id("status")
        .ok_or_else(|| anyhow::anyhow!("#status missing"))?;
    println!("{}", doc.text_content(status));

    let carousel = setup_carousel(&mut doc, ".carousel-wrapper", "#modal", &CarouselConfig::default())
        .ok_or_else(|| anyhow::anyhow!("carousel markup missing"))?;
    if let Some(item) = doc.query_selector(r#".item[data-id="2"]"#)? {
        doc.click(item);
    }
    println!("modal after item click: {:?}", carousel.modal_state(&doc));

    let body = doc.body();
    doc.click(body);
    println!("modal after outside click: {:?}", carousel.modal_state(&doc));

    carousel.teardown(&mut doc);
    println!("wick-ui v{}", wick_ui::VERSION);
    Ok(())
}
