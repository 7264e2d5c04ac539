use std::time::{Duration, Instant};

use tracing::warn;

use super::catalog::KeywordCatalog;
use super::domain::{AnalysisResult, DimensionScores, ProposalInput, Sentiment};
use super::features::{ExtractorKind, FeatureError, FeatureExtractor};
use super::sentiment::{self, SentimentLexicon};
use super::{narrative, scorers};

/// Read-only scoring resources constructed once at process start and shared
/// by reference across concurrent invocations.
#[derive(Debug, Clone)]
pub struct ScoringResources {
    pub catalog: KeywordCatalog,
    pub lexicon: SentimentLexicon,
}

impl ScoringResources {
    pub fn standard() -> Self {
        Self {
            catalog: KeywordCatalog::standard(),
            lexicon: SentimentLexicon::standard(),
        }
    }
}

/// Internal fault raised inside the scoring pipeline. Never escapes the
/// engine's public entry points; it is mapped to the fixed fallback result.
#[derive(Debug, thiserror::Error)]
pub enum ScoringFault {
    #[error(transparent)]
    Feature(#[from] FeatureError),
}

/// Ordered batch outcome: one result per input, order preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchAnalysis {
    pub results: Vec<AnalysisResult>,
    pub total_processed: usize,
    pub processing_seconds: f64,
}

/// Stateless scoring engine. Holds only the injected resources and the
/// feature-extraction strategy; every invocation's intermediate state is
/// local to that call.
pub struct AnalysisEngine {
    resources: ScoringResources,
    extractor: Box<dyn FeatureExtractor>,
}

impl AnalysisEngine {
    pub fn new(resources: ScoringResources, extractor: Box<dyn FeatureExtractor>) -> Self {
        Self {
            resources,
            extractor,
        }
    }

    /// Standard resources with the richer extractor.
    pub fn standard() -> Self {
        Self::with_extractor(ExtractorKind::PunctuationAware)
    }

    pub fn with_extractor(kind: ExtractorKind) -> Self {
        Self::new(ScoringResources::standard(), kind.build())
    }

    /// Score a validated proposal. Internal faults are converted to the
    /// fixed fallback analysis; this method never fails from the caller's
    /// point of view.
    pub fn analyze(&self, input: &ProposalInput) -> AnalysisResult {
        let started = Instant::now();

        match self.run_pipeline(input, started) {
            Ok(result) => result,
            Err(fault) => {
                warn!(%fault, title = %input.title, "scoring pipeline failed, returning fallback analysis");
                fallback_analysis(started.elapsed())
            }
        }
    }

    /// Score an ordered batch. Items are independent: a per-item fault
    /// yields the fallback marker in place without aborting the rest.
    pub fn analyze_batch(&self, inputs: &[ProposalInput]) -> BatchAnalysis {
        let started = Instant::now();

        let results: Vec<AnalysisResult> = inputs.iter().map(|input| self.analyze(input)).collect();

        BatchAnalysis {
            total_processed: results.len(),
            results,
            processing_seconds: started.elapsed().as_secs_f64(),
        }
    }

    fn run_pipeline(
        &self,
        input: &ProposalInput,
        started: Instant,
    ) -> Result<AnalysisResult, ScoringFault> {
        let combined = input.combined_text();
        let features = self.extractor.extract(&combined)?;

        let sentiment = sentiment::classify(&features, &self.resources.lexicon);
        let dimensions = scorers::score_dimensions(input, &features, &self.resources.catalog);
        let overall = scorers::overall_score(&dimensions, sentiment);
        let confidence = scorers::confidence_score(&features, input.amount, &self.resources.catalog);

        let summary = narrative::summary(&input.title, &input.description, overall);
        let recommendations = narrative::recommendations(&dimensions);
        let risk_factors = narrative::risk_factors(&features, input.amount);
        let strengths = narrative::strengths(&features, overall);

        Ok(AnalysisResult {
            overall_score: overall,
            sentiment,
            dimensions,
            summary,
            recommendations,
            risk_factors,
            strengths,
            confidence,
            processing_seconds: started.elapsed().as_secs_f64(),
        })
    }
}

/// The fixed default analysis returned when scoring fails internally. Only
/// the elapsed time varies.
pub(crate) fn fallback_analysis(elapsed: Duration) -> AnalysisResult {
    AnalysisResult {
        overall_score: 5.0,
        sentiment: Sentiment::Neutral,
        dimensions: DimensionScores {
            impact: 5.0,
            feasibility: 5.0,
            clarity: 5.0,
            budget_appropriateness: 5.0,
        },
        summary: "Analysis temporarily unavailable. Manual review recommended.".to_string(),
        recommendations: vec![
            "Review proposal manually".to_string(),
            "Consider community feedback".to_string(),
        ],
        risk_factors: vec!["Analysis service unavailable".to_string()],
        strengths: vec!["Proposal submitted for review".to_string()],
        confidence: 0.3,
        processing_seconds: elapsed.as_secs_f64(),
    }
}

impl std::fmt::Debug for AnalysisEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisEngine")
            .field("resources", &self.resources)
            .finish_non_exhaustive()
    }
}
