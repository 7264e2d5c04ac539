//! Lexicon-driven sentiment classification.
//!
//! Two independent signals are produced from the same token stream: a plain
//! mean-valence polarity and a rule-based compound score with negation and
//! intensity handling. The classifier averages them and applies fixed
//! thresholds, so identical text and lexicon always yield the same label.

use super::domain::Sentiment;
use super::features::TextFeatures;

const POSITIVE_THRESHOLD: f64 = 0.1;
const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Sign-flip factor applied when a valenced word follows a negation.
const NEGATION_SCALAR: f64 = -0.74;

/// Curated valence table with negation and booster word lists. Supplied to
/// the engine at initialization as read-only data; swapping the table does
/// not change the classification algorithm.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    pub valences: &'static [(&'static str, f64)],
    pub negations: &'static [&'static str],
    pub boosters: &'static [(&'static str, f64)],
}

impl SentimentLexicon {
    pub fn standard() -> Self {
        Self {
            valences: &[
                ("achieve", 0.35),
                ("bad", -0.5),
                ("benefit", 0.45),
                ("best", 0.6),
                ("broken", -0.45),
                ("care", 0.3),
                ("crisis", -0.55),
                ("damage", -0.5),
                ("danger", -0.55),
                ("dangerous", -0.55),
                ("decline", -0.4),
                ("effective", 0.4),
                ("empower", 0.5),
                ("enhance", 0.4),
                ("enrich", 0.4),
                ("excellent", 0.65),
                ("fail", -0.6),
                ("failure", -0.6),
                ("fear", -0.45),
                ("flourish", 0.5),
                ("good", 0.45),
                ("great", 0.55),
                ("grow", 0.3),
                ("harm", -0.55),
                ("healthy", 0.4),
                ("help", 0.4),
                ("hope", 0.35),
                ("improve", 0.4),
                ("inspire", 0.45),
                ("lack", -0.35),
                ("loss", -0.4),
                ("neglect", -0.45),
                ("opportunity", 0.4),
                ("poor", -0.45),
                ("positive", 0.45),
                ("problem", -0.4),
                ("progress", 0.35),
                ("promising", 0.4),
                ("prosper", 0.45),
                ("quality", 0.3),
                ("risky", -0.4),
                ("safe", 0.35),
                ("shortage", -0.4),
                ("strengthen", 0.4),
                ("strong", 0.35),
                ("struggle", -0.4),
                ("succeed", 0.45),
                ("success", 0.5),
                ("successful", 0.5),
                ("support", 0.35),
                ("thrive", 0.5),
                ("threat", -0.5),
                ("valuable", 0.4),
                ("vibrant", 0.4),
                ("waste", -0.5),
                ("weak", -0.35),
                ("welcome", 0.35),
                ("win", 0.45),
                ("worse", -0.5),
                ("worst", -0.65),
            ],
            negations: &["not", "no", "never", "neither", "nobody", "none", "without", "cannot"],
            boosters: &[
                ("very", 0.15),
                ("extremely", 0.2),
                ("highly", 0.15),
                ("truly", 0.1),
                ("barely", -0.15),
                ("slightly", -0.15),
                ("somewhat", -0.1),
            ],
        }
    }

    fn valence(&self, token: &str) -> Option<f64> {
        self.valences
            .iter()
            .find(|(word, _)| *word == token)
            .map(|(_, valence)| *valence)
    }

    fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(&token)
    }

    fn booster(&self, token: &str) -> Option<f64> {
        self.boosters
            .iter()
            .find(|(word, _)| *word == token)
            .map(|(_, scalar)| *scalar)
    }
}

pub(crate) fn classify(features: &TextFeatures, lexicon: &SentimentLexicon) -> Sentiment {
    let polarity = lexicon_polarity(&features.tokens, lexicon);
    let compound = rule_compound(&features.tokens, lexicon);
    let combined = (polarity + compound) / 2.0;

    if combined > POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if combined < NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Mean valence of matched tokens, ignoring context. Zero when nothing in
/// the text appears in the lexicon.
pub(crate) fn lexicon_polarity(tokens: &[String], lexicon: &SentimentLexicon) -> f64 {
    let mut sum = 0.0;
    let mut matched = 0usize;

    for token in tokens {
        if let Some(valence) = lexicon.valence(token) {
            sum += valence;
            matched += 1;
        }
    }

    if matched == 0 {
        return 0.0;
    }

    (sum / matched as f64).clamp(-1.0, 1.0)
}

/// Rule-based compound signal: valences are boosted by a preceding intensity
/// word, flipped by a negation within the two preceding tokens, summed, and
/// squashed into [-1, 1] with `x / sqrt(x^2 + 15)`.
pub(crate) fn rule_compound(tokens: &[String], lexicon: &SentimentLexicon) -> f64 {
    let mut sum = 0.0;

    for (index, token) in tokens.iter().enumerate() {
        let Some(mut valence) = lexicon.valence(token) else {
            continue;
        };

        if index > 0 {
            if let Some(scalar) = lexicon.booster(&tokens[index - 1]) {
                if valence > 0.0 {
                    valence += scalar;
                } else {
                    valence -= scalar;
                }
            }
        }

        let negated = tokens[index.saturating_sub(2)..index]
            .iter()
            .any(|preceding| lexicon.is_negation(preceding));
        if negated {
            valence *= NEGATION_SCALAR;
        }

        sum += valence;
    }

    (sum / (sum * sum + 15.0).sqrt()).clamp(-1.0, 1.0)
}
