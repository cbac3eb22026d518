use pulldown_cmark::{Options, Parser, html};

/// Render profile markdown to sanitized HTML for `dangerous_inner_html`.
///
/// Content ships with the binary, but it still goes through `ammonia`
/// before touching the DOM.
#[must_use]
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::empty());
    let mut rendered = String::new();
    html::push_html(&mut rendered, parser);
    ammonia::clean(&rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_and_emphasis_survive() {
        let html = render_markdown("Hello *there*\n\nSecond paragraph.");
        assert!(html.contains("<em>there</em>"));
        assert!(html.matches("<p>").count() >= 2);
    }

    #[test]
    fn scripts_are_stripped() {
        let html = render_markdown("Hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("Hi"));
    }
}
