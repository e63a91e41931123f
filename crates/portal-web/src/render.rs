//! HTML rendering for the article card grid.
//!
//! The grid is one `#articles` element. While loading it holds a fixed
//! number of skeleton cards; once articles arrive the whole element is
//! replaced in a single swap, so a partially filled grid is never shown.

use portal_core::defaults::{PAGE_HEADING, SKELETON_COUNT};
use portal_core::ViewRecord;

/// DOM id of the grid container.
pub const GRID_ID: &str = "articles";

/// Path the page shell loads the grid fragment from.
pub const FRAGMENT_PATH: &str = "/fragments/articles";

/// What the grid is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridState {
    Loading,
    Ready(Vec<ViewRecord>),
}

/// Render the `#articles` container for a grid state.
pub fn render_grid(state: &GridState) -> String {
    let inner = match state {
        GridState::Loading => (0..SKELETON_COUNT)
            .map(|_| r#"<div class="skeleton" aria-hidden="true"></div>"#.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        GridState::Ready(records) => records
            .iter()
            .map(render_card)
            .collect::<Vec<_>>()
            .join("\n"),
    };
    let busy = matches!(state, GridState::Loading);
    format!(
        r#"<div id="{id}" class="grid" aria-busy="{busy}">
{inner}
</div>"#,
        id = GRID_ID,
        busy = busy,
        inner = inner,
    )
}

/// Render one article card.
pub fn render_card(record: &ViewRecord) -> String {
    let image = if record.has_image() {
        format!(
            r#"<img src="{src}" alt="{alt}" class="image">"#,
            src = html_escape(&record.image_url),
            alt = html_escape(&record.title),
        )
    } else {
        String::new()
    };
    let tags = record
        .tags
        .iter()
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, html_escape(tag)))
        .collect::<Vec<_>>()
        .join("");

    format!(
        r#"<div class="card" data-article-id="{id}">
  {image}
  <h2 class="title">{title}</h2>
  <div class="author-section">
    <div class="avatar"></div>
    <span class="author">{author}</span>
  </div>
  <div class="tags">{tags}</div>
</div>"#,
        id = html_escape(&record.id),
        image = image,
        title = html_escape(&record.title),
        author = html_escape(&record.author_name),
        tags = tags,
    )
}

/// Render the full page shell around an already-rendered grid.
pub fn render_page(grid_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Article Portal</title>
<style>{css}</style>
</head>
<body>
<div class="container">
<h1>{heading}</h1>
{grid}
</div>
<script>{script}</script>
</body>
</html>"#,
        css = STYLESHEET,
        heading = html_escape(PAGE_HEADING),
        grid = grid_html,
        script = loader_script(),
    )
}

/// Script that swaps the skeleton grid for the rendered fragment. On
/// failure the grid is replaced with an empty one so loading ends.
fn loader_script() -> String {
    format!(
        r#"
(function () {{
  var replace = function (html) {{
    document.getElementById("{id}").outerHTML = html;
  }};
  fetch("{path}")
    .then(function (response) {{
      if (!response.ok) {{ throw new Error("HTTP " + response.status); }}
      return response.text();
    }})
    .then(replace)
    .catch(function (error) {{
      console.error("Error fetching articles:", error);
      replace('<div id="{id}" class="grid" aria-busy="false"></div>');
    }});
}})();
"#,
        id = GRID_ID,
        path = FRAGMENT_PATH,
    )
}

/// Escape text for HTML element content and quoted attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const STYLESHEET: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f5f5f5; }
.container { max-width: 1200px; margin: 0 auto; padding: 2rem 1rem; }
h1 { text-align: center; color: #222; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1.5rem; }
.card { background: #fff; border-radius: 8px; overflow: hidden; box-shadow: 0 2px 6px rgba(0,0,0,.1); padding-bottom: 1rem; }
.image { width: 100%; height: 180px; object-fit: cover; display: block; }
.title { font-size: 1.2rem; margin: 1rem 1rem .5rem; }
.author-section { display: flex; align-items: center; gap: .5rem; margin: 0 1rem; }
.avatar { width: 28px; height: 28px; border-radius: 50%; background: #ccc; }
.author { color: #555; font-size: .9rem; }
.tags { display: flex; flex-wrap: wrap; gap: .4rem; margin: .75rem 1rem 0; }
.tag { background: #e8eefc; color: #2a4db3; border-radius: 12px; padding: .15rem .6rem; font-size: .8rem; }
.skeleton { height: 300px; border-radius: 8px; background: linear-gradient(90deg, #e0e0e0 25%, #efefef 50%, #e0e0e0 75%); background-size: 200% 100%; animation: shimmer 1.5s infinite; }
@keyframes shimmer { 0% { background-position: 200% 0; } 100% { background-position: -200% 0; } }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str, image_url: &str, tags: &[&str]) -> ViewRecord {
        ViewRecord {
            id: id.to_string(),
            title: title.to_string(),
            author_name: "Alice".to_string(),
            image_url: image_url.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_loading_grid_has_six_skeletons() {
        let html = render_grid(&GridState::Loading);
        assert_eq!(html.matches(r#"class="skeleton""#).count(), SKELETON_COUNT);
        assert_eq!(SKELETON_COUNT, 6);
        assert!(html.contains(r#"aria-busy="true""#));
        assert!(!html.contains(r#"class="card""#));
    }

    #[test]
    fn test_ready_grid_renders_cards_in_order() {
        let html = render_grid(&GridState::Ready(vec![
            record("b", "Second", "", &[]),
            record("a", "First", "", &[]),
        ]));
        assert!(!html.contains("skeleton"));
        assert!(html.contains(r#"aria-busy="false""#));
        let b = html.find(r#"data-article-id="b""#).unwrap();
        let a = html.find(r#"data-article-id="a""#).unwrap();
        assert!(b < a);
    }

    #[test]
    fn test_empty_ready_grid() {
        let html = render_grid(&GridState::Ready(vec![]));
        assert!(!html.contains("card"));
        assert!(!html.contains("skeleton"));
        assert!(html.starts_with(r#"<div id="articles""#));
    }

    #[test]
    fn test_card_image_only_when_present() {
        let with_image = render_card(&record("a1", "Hello", "http://cms/img/a.jpg", &[]));
        assert!(with_image.contains(r#"<img src="http://cms/img/a.jpg" alt="Hello" class="image">"#));

        let without_image = render_card(&record("a1", "Hello", "", &[]));
        assert!(!without_image.contains("<img"));
    }

    #[test]
    fn test_card_shows_author_and_tags() {
        let html = render_card(&record("a1", "Hello", "", &["News", "Unknown Tag"]));
        assert!(html.contains(r#"<span class="author">Alice</span>"#));
        assert!(html.contains(r#"<span class="tag">News</span><span class="tag">Unknown Tag</span>"#));
        assert!(html.contains(r#"<div class="avatar"></div>"#));
    }

    #[test]
    fn test_card_escapes_text() {
        let html = render_card(&record(
            "a\"1",
            "<script>alert('x')</script>",
            "",
            &["R&D"],
        ));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("R&amp;D"));
        assert!(html.contains(r#"data-article-id="a&quot;1""#));
    }

    #[test]
    fn test_page_shell_wraps_grid_and_loader() {
        let page = render_page(&render_grid(&GridState::Loading));
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<h1>This is Simple Article Portal From Drupal Headless CMS</h1>"));
        assert!(page.contains(FRAGMENT_PATH));
        assert_eq!(page.matches(r#"class="skeleton""#).count(), 6);
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("<b>"), "&lt;b&gt;");
        assert_eq!(html_escape(r#""q""#), "&quot;q&quot;");
        assert_eq!(html_escape("it's"), "it&#39;s");
        assert_eq!(html_escape("plain"), "plain");
    }
}
