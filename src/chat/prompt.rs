use crate::results::{self, PageRecord};

/// Fixed system role sent with every completion call
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant with expertise in website content analysis.";

/// Character cap on the div content excerpt embedded in the context
const DIV_EXCERPT_CHARS: usize = 1000;

/// Number of deep links listed in the context
const CONTEXT_LINKS: usize = 5;

/// Renders the bounded context block for one record
///
/// The div excerpt is a hard character cut, not word-aware, and always
/// ends in "..."; the content snippet is the first text chunk whole.
pub fn build_context(record: &PageRecord) -> String {
    let snippet = record
        .text_chunks
        .first()
        .map(String::as_str)
        .unwrap_or(results::NO_CONTENT);

    let links = record
        .deep_links
        .iter()
        .take(CONTEXT_LINKS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Title: {}\n\
         Description: {}\n\
         Keywords: {}\n\
         Navigation Bar: {}\n\
         Main Div Content: {}...\n\
         Content Snippet: {}\n\
         Deep Links: {}\n",
        record.title,
        record.description,
        record.keywords,
        record.navbar_text,
        truncate_chars(&record.div_content, DIV_EXCERPT_CHARS),
        snippet,
        links,
    )
}

/// Wraps the context and the user's query into the final instruction prompt
pub fn build_prompt(record: &PageRecord, query: &str) -> String {
    format!(
        "The following is the context extracted from the website:\n\n{}\n\n\
         User Query: {}\n\n\
         Provide a precise, accurate, and helpful response based on the above information.",
        build_context(record),
        query,
    )
}

/// Hard truncation at a character count, counting chars rather than bytes
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
