//! Dimension scorers, weighted aggregation, and the confidence estimate.
//!
//! Every scorer is a pure function over the extracted features, the proposal
//! record, and the keyword catalog. The additive bonuses and their caps are
//! the authoritative contract; they are not tuned here.

use super::catalog::{any_present, count_present, KeywordCatalog};
use super::domain::{DimensionScores, ProposalInput, Sentiment};
use super::features::TextFeatures;

const BASE_SCORE: f64 = 5.0;

const IMPACT_WEIGHT: f64 = 0.35;
const FEASIBILITY_WEIGHT: f64 = 0.25;
const CLARITY_WEIGHT: f64 = 0.25;
const BUDGET_WEIGHT: f64 = 0.15;

const SENTIMENT_ADJUSTMENT: f64 = 0.5;

pub(crate) fn score_dimensions(
    input: &ProposalInput,
    features: &TextFeatures,
    catalog: &KeywordCatalog,
) -> DimensionScores {
    DimensionScores {
        impact: impact_score(input, features, catalog),
        feasibility: feasibility_score(input, features, catalog),
        clarity: clarity_score(features, catalog),
        budget_appropriateness: budget_score(input, catalog),
    }
}

/// Social impact potential: category keyword alignment plus general impact
/// and reach indicators.
fn impact_score(input: &ProposalInput, features: &TextFeatures, catalog: &KeywordCatalog) -> f64 {
    let text = &features.lowercase;
    let mut score = BASE_SCORE;

    if let Some(terms) = input
        .category
        .and_then(|category| catalog.terms_for_category(category))
    {
        let matches = count_present(text, terms);
        score += (matches as f64 * 0.5).min(2.0);
    }

    let impact_matches = count_present(text, catalog.impact_terms);
    score += (impact_matches as f64 * 0.3).min(2.0);

    let reach_matches = count_present(text, catalog.reach_terms);
    score += (reach_matches as f64 * 0.2).min(1.0);

    score.clamp(0.0, 10.0)
}

/// Feasibility: planning vocabulary raises the score, risk vocabulary and an
/// outsized request lower it.
fn feasibility_score(
    input: &ProposalInput,
    features: &TextFeatures,
    catalog: &KeywordCatalog,
) -> f64 {
    let text = &features.lowercase;
    let mut score = BASE_SCORE;

    let planning_matches = count_present(text, catalog.planning_terms);
    score += (planning_matches as f64 * 0.4).min(2.5);

    let risk_matches = count_present(text, catalog.risk_terms);
    score -= (risk_matches as f64 * 0.3).min(1.5);

    if input.amount > 10.0 {
        score -= 1.0;
    } else if input.amount < 0.1 {
        score += 0.5;
    }

    score.clamp(0.0, 10.0)
}

/// Clarity: length of the combined text plus structure and specificity
/// vocabulary.
fn clarity_score(features: &TextFeatures, catalog: &KeywordCatalog) -> f64 {
    let text = &features.lowercase;
    let mut score = BASE_SCORE;

    let word_count = features.word_count();
    if word_count > 200 {
        score += 1.0;
    } else if word_count < 100 {
        score -= 1.0;
    }

    let structure_matches = count_present(text, catalog.structure_terms);
    score += (structure_matches as f64 * 0.3).min(2.0);

    let specificity_matches = count_present(text, catalog.specificity_terms);
    score += (specificity_matches as f64 * 0.4).min(2.0);

    score.clamp(0.0, 10.0)
}

/// Budget appropriateness is driven by the requested amount and the
/// description alone; the title is excluded.
fn budget_score(input: &ProposalInput, catalog: &KeywordCatalog) -> f64 {
    let mut score = BASE_SCORE;

    if (0.1..=5.0).contains(&input.amount) {
        score += 2.0;
    } else if input.amount > 10.0 {
        score -= 2.0;
    } else if input.amount < 0.01 {
        score -= 1.0;
    }

    let description = input.description.to_lowercase();
    if any_present(&description, catalog.budget_terms) {
        score += 1.0;
    }

    if any_present(&description, catalog.scale_terms) {
        score += 0.5;
    }

    score.clamp(0.0, 10.0)
}

/// Weighted blend of the four dimensions with a flat sentiment adjustment.
pub(crate) fn overall_score(dimensions: &DimensionScores, sentiment: Sentiment) -> f64 {
    let mut score = dimensions.impact * IMPACT_WEIGHT
        + dimensions.feasibility * FEASIBILITY_WEIGHT
        + dimensions.clarity * CLARITY_WEIGHT
        + dimensions.budget_appropriateness * BUDGET_WEIGHT;

    match sentiment {
        Sentiment::Positive => score += SENTIMENT_ADJUSTMENT,
        Sentiment::Negative => score -= SENTIMENT_ADJUSTMENT,
        Sentiment::Neutral => {}
    }

    score.clamp(0.0, 10.0)
}

/// Confidence reflects input quality signals, never the score itself: text
/// length, amount plausibility, and structural vocabulary.
pub(crate) fn confidence_score(
    features: &TextFeatures,
    amount: f64,
    catalog: &KeywordCatalog,
) -> f64 {
    let mut confidence: f64 = 0.5;

    let word_count = features.word_count();
    if word_count > 200 {
        confidence += 0.2;
    } else if word_count < 100 {
        confidence -= 0.2;
    }

    if (0.1..=5.0).contains(&amount) {
        confidence += 0.2;
    } else if amount > 10.0 || amount < 0.01 {
        confidence -= 0.1;
    }

    let structure_matches = count_present(&features.lowercase, catalog.confidence_terms);
    confidence += (structure_matches as f64 * 0.05).min(0.1);

    confidence.clamp(0.0, 1.0)
}
