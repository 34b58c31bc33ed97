//! Property tests for field resolution and record ranking.

use longdata_map::{FieldResolver, RecordRanker, partial_ratio};
use longdata_model::{Record, Vocabulary};
use proptest::prelude::*;

fn field_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z /()]{0,20}"
}

fn vocabulary() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(field_name(), 1..12)
}

proptest! {
    #[test]
    fn resolution_stays_inside_vocabulary(fields in vocabulary(), hint in ".{0,24}") {
        let resolver = FieldResolver::new(Vocabulary::new(fields.clone()).unwrap());
        let resolved = resolver.resolve(&hint);
        prop_assert!(fields.iter().any(|field| field == resolved));
    }

    #[test]
    fn resolution_is_deterministic(fields in vocabulary(), hint in ".{0,24}") {
        let resolver = FieldResolver::new(Vocabulary::new(fields).unwrap());
        let first = resolver.resolve(&hint).to_string();
        let second = resolver.resolve(&hint).to_string();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn exact_hint_scores_full(fields in vocabulary(), pick in any::<prop::sample::Index>()) {
        let target = pick.get(&fields).clone();
        let resolver = FieldResolver::new(Vocabulary::new(fields).unwrap());
        let (_, score) = resolver.resolve_scored(&target);
        prop_assert_eq!(score, 100);
    }

    #[test]
    fn partial_ratio_is_bounded(left in ".{0,16}", right in ".{0,16}") {
        let score = partial_ratio(&left, &right);
        prop_assert!(score <= 100);
    }

    #[test]
    fn ranking_is_stable_and_keeps_every_record(
        names in prop::collection::vec("[a-z]{0,8}", 0..30),
        query in "[a-z]{1,6}",
    ) {
        let records: Vec<Record> = names
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                Record::from_pairs([
                    ("Common name", name.clone()),
                    ("position", idx.to_string()),
                ])
            })
            .collect();
        let ranker = RecordRanker::new(["Common name"]);
        let ranked = ranker.rank(records, &query);

        prop_assert_eq!(ranked.len(), names.len());

        let mut positions: Vec<usize> = ranked
            .iter()
            .map(|s| s.record.get("position").to_string().parse().unwrap())
            .collect();
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                let a: usize = pair[0].record.get("position").to_string().parse().unwrap();
                let b: usize = pair[1].record.get("position").to_string().parse().unwrap();
                prop_assert!(a < b);
            }
        }
        positions.sort_unstable();
        prop_assert_eq!(positions, (0..names.len()).collect::<Vec<_>>());
    }
}
