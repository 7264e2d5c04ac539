use super::domain::ProposalCategory;

/// Immutable keyword tables backing every dimension scorer. Built once at
/// startup and shared by reference across concurrent invocations; the tables
/// are data, not behavior, and may be swapped without touching the scorers.
#[derive(Debug, Clone)]
pub struct KeywordCatalog {
    pub category_terms: &'static [(ProposalCategory, &'static [&'static str])],
    pub impact_terms: &'static [&'static str],
    pub reach_terms: &'static [&'static str],
    pub planning_terms: &'static [&'static str],
    pub risk_terms: &'static [&'static str],
    pub structure_terms: &'static [&'static str],
    pub specificity_terms: &'static [&'static str],
    pub budget_terms: &'static [&'static str],
    pub scale_terms: &'static [&'static str],
    pub confidence_terms: &'static [&'static str],
}

impl KeywordCatalog {
    /// The standard production catalog.
    pub fn standard() -> Self {
        Self {
            category_terms: &[
                (
                    ProposalCategory::Education,
                    &["education", "learning", "students", "school", "knowledge", "skills"],
                ),
                (
                    ProposalCategory::Healthcare,
                    &["health", "medical", "wellness", "treatment", "care", "patients"],
                ),
                (
                    ProposalCategory::Environment,
                    &[
                        "environment",
                        "sustainability",
                        "green",
                        "climate",
                        "conservation",
                        "renewable",
                    ],
                ),
                (
                    ProposalCategory::Community,
                    &["community", "local", "residents", "neighborhood", "social", "together"],
                ),
                (
                    ProposalCategory::Technology,
                    &["technology", "digital", "innovation", "tech", "software", "hardware"],
                ),
            ],
            impact_terms: &[
                "benefit",
                "help",
                "support",
                "improve",
                "enhance",
                "create",
                "establish",
                "provide",
                "offer",
                "enable",
                "empower",
                "transform",
                "positive change",
            ],
            reach_terms: &["community", "local", "regional", "widespread", "many", "multiple"],
            planning_terms: &[
                "plan",
                "timeline",
                "schedule",
                "steps",
                "process",
                "methodology",
                "resources",
                "team",
                "partners",
                "budget",
                "cost",
                "funding",
            ],
            risk_terms: &[
                "uncertain",
                "risky",
                "challenging",
                "difficult",
                "complex",
                "unproven",
                "experimental",
                "pilot",
                "test",
                "trial",
            ],
            structure_terms: &[
                "objective",
                "goal",
                "purpose",
                "target",
                "outcome",
                "result",
                "method",
                "approach",
                "strategy",
                "implementation",
                "deliverable",
            ],
            specificity_terms: &[
                "specific",
                "detailed",
                "concrete",
                "measurable",
                "quantifiable",
                "timeline",
                "deadline",
                "milestone",
                "metric",
                "kpi",
            ],
            budget_terms: &["budget", "cost", "funding", "expense", "price", "financial"],
            scale_terms: &["large", "small", "comprehensive", "basic", "extensive", "limited"],
            confidence_terms: &["objective", "plan", "timeline", "budget", "outcome"],
        }
    }

    /// Keyword set for a recognized category; `Other` carries no table.
    pub fn terms_for_category(&self, category: ProposalCategory) -> Option<&'static [&'static str]> {
        self.category_terms
            .iter()
            .find(|(candidate, _)| *candidate == category)
            .map(|(_, terms)| *terms)
    }
}

/// Number of catalog terms present in `text_lower` (already lowercased).
/// Presence is a case-insensitive substring check and each term counts at
/// most once regardless of how often it repeats.
pub(crate) fn count_present(text_lower: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|term| text_lower.contains(*term)).count()
}

pub(crate) fn any_present(text_lower: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text_lower.contains(*term))
}
