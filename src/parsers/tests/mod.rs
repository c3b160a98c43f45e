mod text_chunk_tests;
