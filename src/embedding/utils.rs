//! Tokenizer loading and text-shaping helpers.

use std::path::Path;

use tokenizers::{Tokenizer, TruncationParams};

use crate::embedding::error::EmbeddingError;

/// Loads a `tokenizer.json`, configured to truncate inputs at `max_seq_len` tokens.
pub(crate) fn load_tokenizer(
    path: &Path,
    max_seq_len: usize,
) -> Result<Tokenizer, EmbeddingError> {
    let mut tokenizer =
        Tokenizer::from_file(path).map_err(|e| EmbeddingError::TokenizationFailed {
            reason: format!("failed to load tokenizer from {}: {}", path.display(), e),
        })?;

    let truncation = TruncationParams {
        max_length: max_seq_len,
        ..Default::default()
    };
    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| EmbeddingError::TokenizationFailed {
            reason: format!("failed to configure truncation: {}", e),
        })?;

    Ok(tokenizer)
}

/// Truncates `text` to at most `max_chars` characters, on a char boundary.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
