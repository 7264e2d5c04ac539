//! Text-feature extraction strategy for the scoring pipeline.
//!
//! The extractor is chosen once at initialization; scorers consume the
//! resulting [`TextFeatures`] and never branch on which implementation
//! produced them.

use std::fmt;

/// Error raised by a text-feature extractor. The standard implementations
/// never fail; the variant exists so a degraded extractor surfaces through
/// the engine's fallback path instead of a panic.
#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    #[error("text feature extraction unavailable: {0}")]
    Unavailable(String),
}

/// Token-level view of the combined proposal text shared by all scorers.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFeatures {
    /// Lowercased combined text, used for substring keyword matching.
    pub lowercase: String,
    /// Lowercased tokens, one per whitespace-delimited word.
    pub tokens: Vec<String>,
}

impl TextFeatures {
    /// Word count as every threshold in the pipeline understands it: one
    /// token per whitespace-delimited word, independent of extractor choice.
    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }
}

/// Strategy seam over tokenization so richer implementations can be swapped
/// in at initialization without the pipeline special-casing their absence.
pub trait FeatureExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Result<TextFeatures, FeatureError>;
}

/// Which extractor the service should construct at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorKind {
    Basic,
    PunctuationAware,
}

impl ExtractorKind {
    pub fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "basic" | "whitespace" => Self::Basic,
            _ => Self::PunctuationAware,
        }
    }

    pub fn build(self) -> Box<dyn FeatureExtractor> {
        match self {
            Self::Basic => Box::new(WhitespaceExtractor),
            Self::PunctuationAware => Box::new(PunctuationAwareExtractor),
        }
    }
}

impl fmt::Display for ExtractorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractorKind::Basic => write!(f, "basic"),
            ExtractorKind::PunctuationAware => write!(f, "punctuation-aware"),
        }
    }
}

/// Baseline tokenizer: lowercase, split on whitespace, nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceExtractor;

impl FeatureExtractor for WhitespaceExtractor {
    fn extract(&self, text: &str) -> Result<TextFeatures, FeatureError> {
        let lowercase = text.to_lowercase();
        let tokens = lowercase.split_whitespace().map(str::to_string).collect();
        Ok(TextFeatures { lowercase, tokens })
    }
}

/// Richer tokenizer: still one token per whitespace word so word counts stay
/// stable across extractors, but surrounding punctuation is trimmed so the
/// sentiment lexicon matches words at clause boundaries ("outstanding!",
/// "(failed)").
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationAwareExtractor;

impl FeatureExtractor for PunctuationAwareExtractor {
    fn extract(&self, text: &str) -> Result<TextFeatures, FeatureError> {
        let lowercase = text.to_lowercase();
        let tokens = lowercase
            .split_whitespace()
            .map(|word| {
                word.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                    .to_string()
            })
            .collect();
        Ok(TextFeatures { lowercase, tokens })
    }
}
