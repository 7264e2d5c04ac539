use std::sync::Arc;

use crate::analysis::domain::{ProposalCategory, ProposalInput};
use crate::analysis::engine::{AnalysisEngine, ScoringResources};
use crate::analysis::features::{
    FeatureError, FeatureExtractor, PunctuationAwareExtractor, TextFeatures, WhitespaceExtractor,
};
use crate::analysis::router::analysis_router;
use crate::analysis::service::ProposalAnalysisService;
use crate::analysis::validation::ProposalDraft;

pub(super) fn proposal(
    title: &str,
    description: &str,
    amount: f64,
    category: Option<ProposalCategory>,
) -> ProposalInput {
    ProposalInput {
        title: title.to_string(),
        description: description.to_string(),
        amount,
        category,
    }
}

/// The education scenario: several category keyword matches, modest length,
/// amount in the reasonable range.
pub(super) fn education_proposal() -> ProposalInput {
    proposal(
        "Fund education initiative",
        "Support 500 students with scholarships and learning materials across local schools.",
        2.0,
        Some(ProposalCategory::Education),
    )
}

pub(super) fn plain_draft() -> ProposalDraft {
    ProposalDraft {
        title: "Neighborhood tool library".to_string(),
        description: "Stock a shared tool library so residents can borrow equipment for home \
                      repairs instead of purchasing rarely used tools."
            .to_string(),
        amount: 1.5,
        category: Some(ProposalCategory::Community),
    }
}

pub(super) fn standard_engine() -> AnalysisEngine {
    AnalysisEngine::standard()
}

pub(super) fn features_for(text: &str) -> TextFeatures {
    PunctuationAwareExtractor
        .extract(text)
        .expect("extraction never fails")
}

/// Extractor that always fails, driving the engine's fallback path.
pub(super) struct FailingExtractor;

impl FeatureExtractor for FailingExtractor {
    fn extract(&self, _text: &str) -> Result<TextFeatures, FeatureError> {
        Err(FeatureError::Unavailable("tokenizer offline".to_string()))
    }
}

/// Extractor that fails only for texts carrying a marker, so batch tests can
/// fault one item while the rest score normally.
pub(super) struct FaultInjectingExtractor {
    pub(super) marker: &'static str,
}

impl FeatureExtractor for FaultInjectingExtractor {
    fn extract(&self, text: &str) -> Result<TextFeatures, FeatureError> {
        if text.contains(self.marker) {
            return Err(FeatureError::Unavailable(format!(
                "refusing text containing '{}'",
                self.marker
            )));
        }
        WhitespaceExtractor.extract(text)
    }
}

pub(super) fn failing_engine() -> AnalysisEngine {
    AnalysisEngine::new(ScoringResources::standard(), Box::new(FailingExtractor))
}

pub(super) fn fault_injecting_engine(marker: &'static str) -> AnalysisEngine {
    AnalysisEngine::new(
        ScoringResources::standard(),
        Box::new(FaultInjectingExtractor { marker }),
    )
}

pub(super) fn build_router() -> axum::Router {
    analysis_router(Arc::new(ProposalAnalysisService::standard()))
}
