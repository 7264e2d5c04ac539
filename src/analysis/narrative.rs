//! Post-hoc narrative generation: summary, recommendations, risk factors,
//! and strengths derived from the computed scores and the raw text.

use super::domain::DimensionScores;
use super::features::TextFeatures;

/// Dimensions scoring below this floor earn an improvement recommendation.
const RECOMMENDATION_FLOOR: f64 = 6.0;

const SUMMARY_EXCERPT_CHARS: usize = 100;

pub(crate) fn summary(title: &str, description: &str, overall: f64) -> String {
    let quality = if overall >= 8.0 {
        "high-quality"
    } else if overall >= 6.0 {
        "well-structured"
    } else if overall >= 4.0 {
        "moderate"
    } else {
        "needs improvement"
    };

    let potential = if overall >= 7.0 {
        "strong"
    } else if overall >= 5.0 {
        "moderate"
    } else {
        "limited"
    };

    let excerpt: String = description.chars().take(SUMMARY_EXCERPT_CHARS).collect();

    format!(
        "This {quality} proposal titled '{title}' presents a {excerpt}... \
         The proposal shows {potential} potential for social impact."
    )
}

/// One improvement sentence per dimension below the floor, checked in fixed
/// order; exactly one positive fallback when every dimension clears it.
pub(crate) fn recommendations(dimensions: &DimensionScores) -> Vec<String> {
    let mut recommendations = Vec::new();

    if dimensions.impact < RECOMMENDATION_FLOOR {
        recommendations
            .push("Consider emphasizing the social impact and community benefits more clearly".to_string());
    }

    if dimensions.feasibility < RECOMMENDATION_FLOOR {
        recommendations.push("Provide more detailed implementation plans and timeline".to_string());
    }

    if dimensions.clarity < RECOMMENDATION_FLOOR {
        recommendations.push("Add more specific details and measurable outcomes".to_string());
    }

    if dimensions.budget_appropriateness < RECOMMENDATION_FLOOR {
        recommendations.push("Include detailed budget breakdown and cost justification".to_string());
    }

    if recommendations.is_empty() {
        recommendations.push("This is a well-structured proposal with good potential".to_string());
    }

    recommendations
}

/// Zero or more risk entries; an empty list is a valid outcome here.
pub(crate) fn risk_factors(features: &TextFeatures, amount: f64) -> Vec<String> {
    let text = &features.lowercase;
    let mut risks = Vec::new();

    if amount > 5.0 {
        risks.push("High funding amount may require additional oversight".to_string());
    }

    if text.contains("pilot") || text.contains("experimental") {
        risks.push("Experimental nature may carry implementation risks".to_string());
    }

    if text.contains("unproven") || text.contains("novel") {
        risks.push("Unproven approach may have uncertain outcomes".to_string());
    }

    if features.word_count() < 150 {
        risks.push("Limited detail may indicate insufficient planning".to_string());
    }

    risks
}

pub(crate) fn strengths(features: &TextFeatures, overall: f64) -> Vec<String> {
    let text = &features.lowercase;
    let mut strengths = Vec::new();

    if overall >= 8.0 {
        strengths.push("Comprehensive and well-thought-out proposal".to_string());
    }

    if text.contains("community") && text.contains("benefit") {
        strengths.push("Clear community focus and benefit".to_string());
    }

    if text.contains("timeline") || text.contains("schedule") {
        strengths.push("Includes implementation timeline".to_string());
    }

    if text.contains("measurable") || text.contains("outcome") {
        strengths.push("Defines measurable outcomes".to_string());
    }

    if strengths.is_empty() {
        strengths.push("Proposal shows potential for improvement".to_string());
    }

    strengths
}
