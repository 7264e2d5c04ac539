use serde::Deserialize;

use super::domain::{ProposalCategory, ProposalInput};

/// Raw proposal payload as submitted over the wire, before any trimming or
/// bounds checking.
#[derive(Debug, Clone, Deserialize)]
pub struct ProposalDraft {
    pub title: String,
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub category: Option<ProposalCategory>,
}

/// Validation errors raised by the intake guard before the engine runs.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("title must be {min}-{max} characters after trimming, found {found}")]
    TitleLength { min: usize, max: usize, found: usize },
    #[error("description must be {min}-{max} characters after trimming, found {found}")]
    DescriptionLength { min: usize, max: usize, found: usize },
    #[error("amount must be positive, found {0}")]
    NonPositiveAmount(f64),
    #[error("amount {found} exceeds the {max} unit ceiling")]
    AmountTooHigh { max: f64, found: f64 },
    #[error("batch accepts at most {max} proposals, found {found}")]
    BatchTooLarge { max: usize, found: usize },
}

const DEFAULT_TITLE_BOUNDS: (usize, usize) = (10, 100);
const DEFAULT_DESCRIPTION_BOUNDS: (usize, usize) = (50, 2000);
const DEFAULT_MAX_AMOUNT: f64 = 1000.0;
const DEFAULT_MAX_BATCH: usize = 10;

/// Length and range bounds backing intake validation.
#[derive(Debug, Clone)]
pub struct IntakePolicy {
    pub title_min: usize,
    pub title_max: usize,
    pub description_min: usize,
    pub description_max: usize,
    pub max_amount: f64,
    pub max_batch: usize,
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self {
            title_min: DEFAULT_TITLE_BOUNDS.0,
            title_max: DEFAULT_TITLE_BOUNDS.1,
            description_min: DEFAULT_DESCRIPTION_BOUNDS.0,
            description_max: DEFAULT_DESCRIPTION_BOUNDS.1,
            max_amount: DEFAULT_MAX_AMOUNT,
            max_batch: DEFAULT_MAX_BATCH,
        }
    }
}

/// Guard responsible for producing validated `ProposalInput` records. The
/// engine trusts its output and never re-checks the bounds.
#[derive(Debug, Clone, Default)]
pub struct ProposalValidator {
    policy: IntakePolicy,
}

impl ProposalValidator {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    /// Convert an inbound draft into a validated, trimmed proposal record.
    pub fn proposal_from_draft(&self, draft: ProposalDraft) -> Result<ProposalInput, ValidationError> {
        let title = draft.title.trim().to_string();
        let title_chars = title.chars().count();
        if title_chars < self.policy.title_min || title_chars > self.policy.title_max {
            return Err(ValidationError::TitleLength {
                min: self.policy.title_min,
                max: self.policy.title_max,
                found: title_chars,
            });
        }

        let description = draft.description.trim().to_string();
        let description_chars = description.chars().count();
        if description_chars < self.policy.description_min
            || description_chars > self.policy.description_max
        {
            return Err(ValidationError::DescriptionLength {
                min: self.policy.description_min,
                max: self.policy.description_max,
                found: description_chars,
            });
        }

        if !(draft.amount > 0.0) {
            return Err(ValidationError::NonPositiveAmount(draft.amount));
        }
        if draft.amount > self.policy.max_amount {
            return Err(ValidationError::AmountTooHigh {
                max: self.policy.max_amount,
                found: draft.amount,
            });
        }

        Ok(ProposalInput {
            title,
            description,
            amount: draft.amount,
            category: draft.category,
        })
    }

    /// Validate an ordered batch. Any invalid draft rejects the whole
    /// request before the engine sees it.
    pub fn batch_from_drafts(
        &self,
        drafts: Vec<ProposalDraft>,
    ) -> Result<Vec<ProposalInput>, ValidationError> {
        if drafts.len() > self.policy.max_batch {
            return Err(ValidationError::BatchTooLarge {
                max: self.policy.max_batch,
                found: drafts.len(),
            });
        }

        drafts
            .into_iter()
            .map(|draft| self.proposal_from_draft(draft))
            .collect()
    }
}
