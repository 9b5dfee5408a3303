//! HTML to plain text conversion.

use scraper::{Html, Node};

/// Elements that start a new line in the plain-text rendering.
const BLOCK_ELEMENTS: &[&str] = &[
    "address",
    "article",
    "blockquote",
    "br",
    "dd",
    "div",
    "dl",
    "dt",
    "footer",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "li",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "td",
    "th",
    "tr",
    "ul",
];

/// Elements whose text content is never rendered.
const HIDDEN_ELEMENTS: &[&str] = &["head", "script", "style", "noscript", "template"];

/// Strip markup from an HTML document or fragment.
///
/// Entities are decoded by the parser. Whitespace inside text runs collapses to
/// single spaces, block elements start new lines, and blank lines are dropped.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut raw = String::with_capacity(html.len() / 2);

    for node in document.root_element().descendants() {
        match node.value() {
            Node::Element(element) if BLOCK_ELEMENTS.contains(&element.name()) => {
                raw.push('\n');
            }
            Node::Text(text) => {
                let hidden = node.ancestors().any(|ancestor| {
                    matches!(
                        ancestor.value(),
                        Node::Element(e) if HIDDEN_ELEMENTS.contains(&e.name())
                    )
                });
                if !hidden {
                    raw.extend(text.chars().map(|c| if c.is_whitespace() { ' ' } else { c }));
                }
            }
            _ => {}
        }
    }

    raw.split('\n')
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text_basic() {
        assert_eq!(html_to_text("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(html_to_text("plain"), "plain");
    }

    #[test]
    fn test_html_to_text_blocks() {
        let html = "<html><body><h1>Title</h1><p>First\n   line</p><div>a<br>b</div></body></html>";
        assert_eq!(html_to_text(html), "Title\nFirst line\na\nb");
    }

    #[test]
    fn test_html_to_text_skips_hidden() {
        let html = "<html><head><title>t</title><style>p { color: red; }</style></head>\
                    <body><script>alert(1)</script><p>Visible</p></body></html>";
        assert_eq!(html_to_text(html), "Visible");
    }

    #[test]
    fn test_html_to_text_entities() {
        assert_eq!(html_to_text("<p>Fish &amp; Chips &lt;3</p>"), "Fish & Chips <3");
    }
}
