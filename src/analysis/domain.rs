use serde::{Deserialize, Serialize};

/// Funding categories a proposal may declare at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalCategory {
    Education,
    Healthcare,
    Environment,
    Community,
    Technology,
    Other,
}

impl ProposalCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ProposalCategory::Education => "education",
            ProposalCategory::Healthcare => "healthcare",
            ProposalCategory::Environment => "environment",
            ProposalCategory::Community => "community",
            ProposalCategory::Technology => "technology",
            ProposalCategory::Other => "other",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "education" => Some(Self::Education),
            "healthcare" => Some(Self::Healthcare),
            "environment" => Some(Self::Environment),
            "community" => Some(Self::Community),
            "technology" => Some(Self::Technology),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Polarity classification of the proposal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

/// Validated proposal record handed to the engine. Construction goes through
/// the intake validator; the engine itself never re-checks the bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ProposalInput {
    pub title: String,
    pub description: String,
    pub amount: f64,
    pub category: Option<ProposalCategory>,
}

impl ProposalInput {
    /// Title and description joined the way every scorer consumes them.
    pub fn combined_text(&self) -> String {
        format!("{}. {}", self.title, self.description)
    }
}

/// Independently computed quality dimensions, each in [0, 10].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub impact: f64,
    pub feasibility: f64,
    pub clarity: f64,
    pub budget_appropriateness: f64,
}

/// Full analysis produced by one engine invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub overall_score: f64,
    pub sentiment: Sentiment,
    pub dimensions: DimensionScores,
    pub summary: String,
    pub recommendations: Vec<String>,
    pub risk_factors: Vec<String>,
    pub strengths: Vec<String>,
    pub confidence: f64,
    pub processing_seconds: f64,
}

impl AnalysisResult {
    /// Serialization view with presentation rounding applied. Scores carry
    /// two decimals, processing time three; the engine keeps full precision.
    pub fn to_view(&self) -> AnalysisView {
        AnalysisView {
            score: round2(self.overall_score),
            sentiment: self.sentiment,
            impact_score: round2(self.dimensions.impact),
            feasibility_score: round2(self.dimensions.feasibility),
            clarity_score: round2(self.dimensions.clarity),
            budget_appropriateness: round2(self.dimensions.budget_appropriateness),
            summary: self.summary.clone(),
            recommendations: self.recommendations.clone(),
            risk_factors: self.risk_factors.clone(),
            strengths: self.strengths.clone(),
            confidence: round2(self.confidence),
            processing_time: round3(self.processing_seconds),
        }
    }
}

/// Wire shape of a single analysis, mirrored by API consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisView {
    pub score: f64,
    pub sentiment: Sentiment,
    pub impact_score: f64,
    pub feasibility_score: f64,
    pub clarity_score: f64,
    pub budget_appropriateness: f64,
    pub summary: String,
    pub recommendations: Vec<String>,
    pub risk_factors: Vec<String>,
    pub strengths: Vec<String>,
    pub confidence: f64,
    pub processing_time: f64,
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
