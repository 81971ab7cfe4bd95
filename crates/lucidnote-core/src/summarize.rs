//! Text summarization contract.

use crate::storage::BoxFuture;
use thiserror::Error;

/// Default summary length in characters.
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// Summary length used on note cards.
pub const CARD_MAX_LENGTH: usize = 50;

pub const EMPTY_TEXT_MESSAGE: &str = "No text to summarize.";
pub const FAILURE_MESSAGE: &str = "Error generating summary. Please try again.";

/// Summarizer errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummarizeError {
    #[error("Summarizer backend error: {0}")]
    Backend(String),
    #[error("No summary received")]
    Empty,
}

/// Result type for summarizer operations.
pub type SummarizeResult<T> = Result<T, SummarizeError>;

/// A summarization backend.
#[cfg(not(target_arch = "wasm32"))]
pub trait Summarizer: Send + Sync {
    fn summarize(&self, text: &str, max_length: usize) -> BoxFuture<'_, SummarizeResult<String>>;
}

/// A summarization backend (WASM version without Send + Sync).
#[cfg(target_arch = "wasm32")]
pub trait Summarizer {
    fn summarize(&self, text: &str, max_length: usize) -> BoxFuture<'_, SummarizeResult<String>>;
}

/// Summarize `text`, substituting a readable message on failure.
pub async fn summarize_text<S: Summarizer + ?Sized>(
    summarizer: &S,
    text: &str,
    max_length: Option<usize>,
) -> String {
    if text.trim().is_empty() {
        return EMPTY_TEXT_MESSAGE.to_string();
    }
    let max_length = max_length.unwrap_or(DEFAULT_MAX_LENGTH);
    match summarizer.summarize(text, max_length).await {
        Ok(summary) if !summary.trim().is_empty() => summary,
        Ok(_) => {
            log::warn!("Summarizer returned an empty summary");
            FAILURE_MESSAGE.to_string()
        }
        Err(e) => {
            log::warn!("Summarization failed: {}", e);
            FAILURE_MESSAGE.to_string()
        }
    }
}

/// Offline summarizer that keeps the leading words of the text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadSummarizer;

impl LeadSummarizer {
    fn lead(text: &str, max_length: usize) -> String {
        let words = text.split_whitespace();
        let mut out = String::new();
        for word in words {
            let extra = if out.is_empty() { 0 } else { 1 };
            if out.chars().count() + extra + word.chars().count() > max_length {
                break;
            }
            if extra == 1 {
                out.push(' ');
            }
            out.push_str(word);
        }
        if out.is_empty() {
            // First word alone is too long.
            return text.split_whitespace().next().map_or_else(String::new, |w| {
                w.chars().take(max_length).collect()
            });
        }
        out
    }
}

impl Summarizer for LeadSummarizer {
    fn summarize(&self, text: &str, max_length: usize) -> BoxFuture<'_, SummarizeResult<String>> {
        let summary = Self::lead(text, max_length);
        Box::pin(async move {
            if summary.is_empty() {
                return Err(SummarizeError::Empty);
            }
            Ok(summary)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::block_on;

    struct Failing;

    impl Summarizer for Failing {
        fn summarize(&self, _: &str, _: usize) -> BoxFuture<'_, SummarizeResult<String>> {
            Box::pin(async { Err(SummarizeError::Backend("offline".to_string())) })
        }
    }

    struct Blank;

    impl Summarizer for Blank {
        fn summarize(&self, _: &str, _: usize) -> BoxFuture<'_, SummarizeResult<String>> {
            Box::pin(async { Ok("   ".to_string()) })
        }
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(block_on(summarize_text(&LeadSummarizer, "  \n ", None)), EMPTY_TEXT_MESSAGE);
        // Backend is never consulted for empty input.
        assert_eq!(block_on(summarize_text(&Failing, "", None)), EMPTY_TEXT_MESSAGE);
    }

    #[test]
    fn test_failure_fallbacks() {
        assert_eq!(block_on(summarize_text(&Failing, "some text", None)), FAILURE_MESSAGE);
        assert_eq!(block_on(summarize_text(&Blank, "some text", None)), FAILURE_MESSAGE);
    }

    #[test]
    fn test_lead_summary() {
        let text = "The quick brown fox jumps over the lazy dog";
        assert_eq!(block_on(summarize_text(&LeadSummarizer, text, Some(15))), "The quick brown");
        assert_eq!(block_on(summarize_text(&LeadSummarizer, text, None)), text);
        assert_eq!(LeadSummarizer::lead("abcdefgh", 3), "abc");
    }
}
