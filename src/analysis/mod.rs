//! Proposal intake, heuristic scoring, and narrative generation.
//!
//! The engine is a pipeline of independent scorers feeding a weighted
//! aggregator, with post-hoc generators for the summary, recommendations,
//! risks, strengths, and confidence. The HTTP layer is a pass-through
//! caller; validation happens at intake, never inside the engine.

pub(crate) mod catalog;
pub mod domain;
pub mod engine;
pub mod features;
pub(crate) mod narrative;
pub mod router;
pub(crate) mod scorers;
pub mod sentiment;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use catalog::KeywordCatalog;
pub use domain::{
    AnalysisResult, AnalysisView, DimensionScores, ProposalCategory, ProposalInput, Sentiment,
};
pub use engine::{AnalysisEngine, BatchAnalysis, ScoringFault, ScoringResources};
pub use features::{ExtractorKind, FeatureError, FeatureExtractor, TextFeatures};
pub use router::analysis_router;
pub use sentiment::SentimentLexicon;
pub use service::ProposalAnalysisService;
pub use validation::{IntakePolicy, ProposalDraft, ProposalValidator, ValidationError};
