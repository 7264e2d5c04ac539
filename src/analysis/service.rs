use super::domain::{AnalysisResult, ProposalCategory, ProposalInput};
use super::engine::{AnalysisEngine, BatchAnalysis};
use super::validation::{ProposalDraft, ProposalValidator, ValidationError};

/// Service composing the intake validator and the scoring engine behind the
/// HTTP router. Holds no per-request state.
pub struct ProposalAnalysisService {
    validator: ProposalValidator,
    engine: AnalysisEngine,
}

impl ProposalAnalysisService {
    pub fn new(engine: AnalysisEngine) -> Self {
        Self::with_validator(ProposalValidator::default(), engine)
    }

    pub fn with_validator(validator: ProposalValidator, engine: AnalysisEngine) -> Self {
        Self { validator, engine }
    }

    pub fn standard() -> Self {
        Self::new(AnalysisEngine::standard())
    }

    /// Validate and score a single draft.
    pub fn analyze_draft(&self, draft: ProposalDraft) -> Result<AnalysisResult, ValidationError> {
        let input = self.validator.proposal_from_draft(draft)?;
        Ok(self.engine.analyze(&input))
    }

    /// Validate and score an ordered batch of drafts.
    pub fn analyze_batch(&self, drafts: Vec<ProposalDraft>) -> Result<BatchAnalysis, ValidationError> {
        let inputs = self.validator.batch_from_drafts(drafts)?;
        Ok(self.engine.analyze_batch(&inputs))
    }

    /// Score an already-validated record.
    pub fn analyze(&self, input: &ProposalInput) -> AnalysisResult {
        self.engine.analyze(input)
    }

    /// Exercise the engine with a canned proposal for health reporting.
    pub fn self_test(&self) -> AnalysisResult {
        let probe = ProposalInput {
            title: "Test Proposal for Health Check".to_string(),
            description: "This is a test proposal to verify the analysis service is working \
                          correctly. It includes basic elements like objectives, timeline, and \
                          expected outcomes."
                .to_string(),
            amount: 1.0,
            category: Some(ProposalCategory::Other),
        };

        self.engine.analyze(&probe)
    }
}
