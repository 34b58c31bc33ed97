//! Column-hint resolution against a canonical vocabulary.

use serde::Serialize;
use tracing::{debug, warn};

use longdata_model::Vocabulary;

use crate::score::{fold_case, partial_ratio};

/// A vocabulary entry with its score against a hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCandidate {
    pub field: String,
    pub score: u8,
}

/// Maps free-text column hints onto the closest canonical field name.
///
/// Both the hint and the vocabulary entries are case-folded before scoring.
/// Ties go to the entry declared first. There is no minimum score: a
/// resolution always yields some vocabulary entry.
#[derive(Debug, Clone)]
pub struct FieldResolver {
    vocabulary: Vocabulary,
    folded: Vec<String>,
}

impl FieldResolver {
    pub fn new(vocabulary: Vocabulary) -> Self {
        let folded = vocabulary.iter().map(fold_case).collect();
        Self { vocabulary, folded }
    }

    /// Returns the best matching field for `hint`.
    pub fn resolve(&self, hint: &str) -> &str {
        self.resolve_scored(hint).0
    }

    /// Returns the best matching field together with its score.
    pub fn resolve_scored(&self, hint: &str) -> (&str, u8) {
        if hint.trim().is_empty() {
            warn!("empty field hint, falling back to first vocabulary entry");
        }
        let folded_hint = fold_case(hint);
        let mut best_index = 0usize;
        let mut best_score = 0u8;
        for (index, entry) in self.folded.iter().enumerate() {
            let score = partial_ratio(&folded_hint, entry);
            // Strictly greater keeps the earliest entry on ties.
            if score > best_score {
                best_index = index;
                best_score = score;
            }
        }
        let field = self.vocabulary.as_slice()[best_index].as_str();
        debug!(hint, field, score = best_score, "resolved field hint");
        (field, best_score)
    }

    /// Scores every vocabulary entry, best first; equal scores keep vocabulary order.
    pub fn candidates(&self, hint: &str) -> Vec<FieldCandidate> {
        let folded_hint = fold_case(hint);
        let mut candidates: Vec<FieldCandidate> = self
            .vocabulary
            .iter()
            .zip(&self.folded)
            .map(|(field, folded)| FieldCandidate {
                field: field.to_string(),
                score: partial_ratio(&folded_hint, folded),
            })
            .collect();
        candidates.sort_by(|a, b| b.score.cmp(&a.score));
        candidates
    }
}
