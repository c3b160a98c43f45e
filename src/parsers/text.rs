/// Splits text into chunks of at most `chunk_size` whitespace-delimited
/// words, each chunk joined back together with single spaces.
///
/// Produces `ceil(word_count / chunk_size)` chunks; every chunk holds
/// exactly `chunk_size` words except possibly the last. Empty or
/// whitespace-only input produces no chunks, as does a zero chunk size.
pub fn chunk_text(text: &str, chunk_size: usize) -> Vec<String> {
    if chunk_size == 0 {
        return Vec::new();
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    words.chunks(chunk_size).map(|chunk| chunk.join(" ")).collect()
}
