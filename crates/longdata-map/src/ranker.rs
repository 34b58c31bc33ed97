//! Record ranking by fuzzy similarity to a query.

use tracing::debug;

use longdata_model::{Record, ScoredRecord};

use crate::score::{fold_case, pad, partial_ratio};

/// Ranks records by how closely any of their identity fields matches a query.
#[derive(Debug, Clone)]
pub struct RecordRanker {
    identity_fields: Vec<String>,
}

impl RecordRanker {
    pub fn new<I, S>(identity_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            identity_fields: identity_fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Scores a single record: the best identity-field match, 0 when every
    /// identity field is missing.
    pub fn score(&self, record: &Record, query: &str) -> u8 {
        let needle = pad(&fold_case(query.trim()));
        self.score_prepared(record, &needle)
    }

    /// Scores and orders every record, best first.
    ///
    /// The sort is stable: records with equal scores keep their input order.
    /// No record is added or dropped.
    pub fn rank(&self, records: Vec<Record>, query: &str) -> Vec<ScoredRecord> {
        let needle = pad(&fold_case(query.trim()));
        let mut scored: Vec<ScoredRecord> = records
            .into_iter()
            .map(|record| {
                let score = self.score_prepared(&record, &needle);
                ScoredRecord::new(record, score)
            })
            .collect();
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        debug!(
            query,
            record_count = scored.len(),
            top_score = scored.first().map(|s| s.score),
            "ranked records"
        );
        scored
    }

    fn score_prepared(&self, record: &Record, needle: &str) -> u8 {
        self.identity_fields
            .iter()
            .filter_map(|field| record.get(field).as_text())
            .map(|value| partial_ratio(&pad(&fold_case(value.trim())), needle))
            .max()
            .unwrap_or(0)
    }
}
