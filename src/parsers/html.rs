use scraper::{ElementRef, Html, Node, Selector};

/// Tags whose subtrees never contribute visible text
const NON_CONTENT_TAGS: &[&str] = &["script", "style", "noscript", "iframe", "img", "video"];

/// Meta selectors for the page description, evaluated in order
const DESCRIPTION_SELECTORS: &[&str] = &[
    r#"meta[name="description"]"#,
    r#"meta[property="og:description"]"#,
];

/// Meta selectors for the page keywords
const KEYWORDS_SELECTORS: &[&str] = &[r#"meta[name="keywords"]"#];

/// Raw pieces extracted from one HTML document
///
/// Metadata fields are `None` when the source tag is absent; sentinel
/// substitution happens at record assembly, not here.
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// Text of the first `<title>` element
    pub title: Option<String>,
    /// First matching description meta content
    pub description: Option<String>,
    /// Keywords meta content
    pub keywords: Option<String>,
    /// Visible text of the first `<nav>` element
    pub navbar_text: Option<String>,
    /// Visible text of every `<div>`, blocks separated by a blank line
    pub div_content: String,
    /// Visible text of the whole document
    pub page_text: String,
    /// Raw anchor hrefs in document order, unresolved
    pub hrefs: Vec<String>,
}

/// Parses an HTML document into its structured parts
pub fn parse(html: &str) -> ParsedPage {
    let doc = Html::parse_document(html);

    let title = first_text(&doc, "title");
    let description = first_meta_content(&doc, DESCRIPTION_SELECTORS);
    let keywords = first_meta_content(&doc, KEYWORDS_SELECTORS);

    let nav_selector = Selector::parse("nav").unwrap();
    let navbar_text = doc
        .select(&nav_selector)
        .next()
        .map(|nav| visible_text(nav, "\n"));

    let div_selector = Selector::parse("div").unwrap();
    let div_content = doc
        .select(&div_selector)
        .map(|div| visible_text(div, "\n"))
        .collect::<Vec<_>>()
        .join("\n\n");

    let page_text = visible_text(doc.root_element(), "\n");

    let link_selector = Selector::parse("a[href]").unwrap();
    let hrefs = doc
        .select(&link_selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(|href| href.to_string())
        .collect::<Vec<String>>();

    ::log::debug!("HTML parser found {} anchors", hrefs.len());

    ParsedPage {
        title,
        description,
        keywords,
        navbar_text,
        div_content,
        page_text,
        hrefs,
    }
}

/// Collects the visible text of a subtree
///
/// Text nodes are trimmed, empty pieces dropped, and the rest joined with
/// `separator`. Subtrees rooted at non-content tags are skipped outright,
/// so the source tree is never mutated to exclude them.
pub fn visible_text(element: ElementRef<'_>, separator: &str) -> String {
    let mut pieces: Vec<&str> = Vec::new();
    collect_text(element, &mut pieces);
    pieces.join(separator)
}

/// Depth-first text collection that never enters excluded subtrees
fn collect_text<'a>(node: ElementRef<'a>, pieces: &mut Vec<&'a str>) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => {
                let piece = text.trim();
                if !piece.is_empty() {
                    pieces.push(piece);
                }
            }
            Node::Element(element) => {
                if NON_CONTENT_TAGS.contains(&element.name()) {
                    continue;
                }
                if let Some(child_ref) = ElementRef::wrap(child) {
                    collect_text(child_ref, pieces);
                }
            }
            _ => {}
        }
    }
}

/// Text of the first element matching `selector`, if any
fn first_text(doc: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();
    doc.select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Evaluates meta selectors in order, returning the first content value
fn first_meta_content(doc: &Html, selectors: &[&str]) -> Option<String> {
    for selector in selectors {
        let selector = Selector::parse(selector).unwrap();
        if let Some(content) = doc
            .select(&selector)
            .next()
            .and_then(|tag| tag.value().attr("content"))
        {
            return Some(content.to_string());
        }
    }
    None
}
