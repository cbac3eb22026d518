use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn loading_view_smoke_renders_progress() {
    let mut harness = setup_view_harness(ViewKind::Loading);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Loading amazing experiences"), "missing tagline in {html}");
    assert!(html.contains("% Complete"), "missing percent label in {html}");
    assert!(html.contains("loading-screen__fill"), "missing progress fill in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn page_view_smoke_renders_all_sections() {
    let mut harness = setup_view_harness(ViewKind::Page);
    harness.rebuild();
    let html = harness.render();
    for expected in [
        "Crafting Digital",
        "About Me",
        "Skills & Expertise",
        "Featured Projects",
        "Send Message",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(html.contains("scroll-progress"), "missing scroll indicator in {html}");
    // Fixed clock pins the footer year.
    assert!(html.contains("© 2025"), "missing footer year in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn page_sections_start_hidden_for_reveal() {
    let mut harness = setup_view_harness(ViewKind::Page);
    harness.rebuild();
    let html = harness.render();
    // Scroll-revealed sections render with the base class until the feed
    // reports them inside the trigger band; the hero is not one of them.
    assert!(html.contains(r#"class="reveal about""#), "about not reveal-gated in {html}");
    assert!(!html.contains("reveal--visible"), "section revealed before any scroll in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn contact_section_smoke_renders_form_fields() {
    let mut harness = setup_view_harness(ViewKind::Contact);
    harness.rebuild();
    let html = harness.render();
    for expected in ["Name", "Email", "Message", "Send Message", "mailto:"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}
