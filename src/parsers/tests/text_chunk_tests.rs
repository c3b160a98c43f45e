use crate::parsers::text;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_count_is_ceiling_of_word_count() {
        let cases = [
            (1, 1),
            (5, 2),
            (10, 3),
            (999, 1000),
            (1000, 1000),
            (1001, 1000),
            (2500, 1000),
        ];

        for (word_count, chunk_size) in cases {
            let input = vec!["word"; word_count].join(" ");
            let chunks = text::chunk_text(&input, chunk_size);
            assert_eq!(
                chunks.len(),
                word_count.div_ceil(chunk_size),
                "{} words at chunk size {} produced {} chunks",
                word_count,
                chunk_size,
                chunks.len()
            );
        }
    }

    #[test]
    fn test_2500_words_split_1000_1000_500() {
        let input = vec!["word"; 2500].join(" ");
        let chunks = text::chunk_text(&input, 1000);

        assert_eq!(chunks.len(), 3);
        let lengths: Vec<usize> = chunks
            .iter()
            .map(|chunk| chunk.split_whitespace().count())
            .collect();
        assert_eq!(lengths, vec![1000, 1000, 500]);
    }

    #[test]
    fn test_every_chunk_but_the_last_is_full() {
        let input = vec!["w"; 23].join(" ");
        let chunks = text::chunk_text(&input, 5);

        assert_eq!(chunks.len(), 5);
        for chunk in &chunks[..4] {
            assert_eq!(chunk.split_whitespace().count(), 5);
        }
        assert_eq!(chunks[4].split_whitespace().count(), 3);
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        assert!(text::chunk_text("", 1000).is_empty());
        assert!(text::chunk_text("   \n\t  ", 1000).is_empty());
    }

    #[test]
    fn test_zero_chunk_size_yields_no_chunks() {
        assert!(text::chunk_text("some words here", 0).is_empty());
    }

    #[test]
    fn test_words_rejoined_with_single_spaces() {
        let chunks = text::chunk_text("alpha  beta\ngamma\tdelta", 2);
        assert_eq!(chunks, vec!["alpha beta", "gamma delta"]);
    }
}
