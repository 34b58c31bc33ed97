//! Partial-ratio similarity scoring.
//!
//! The shorter string is slid across the longer one and compared against every
//! aligned window (including the partial windows hanging off either edge) with
//! the normalized Indel similarity. The best window wins.

use rapidfuzz::distance::indel;

/// Partial-ratio similarity of two strings, 0-100.
///
/// Case-sensitive and order-sensitive. Returns 0 when either side is empty.
pub fn partial_ratio(left: &str, right: &str) -> u8 {
    let left: Vec<char> = left.chars().collect();
    let right: Vec<char> = right.chars().collect();
    if left.is_empty() || right.is_empty() {
        return 0;
    }

    let best = match left.len().cmp(&right.len()) {
        std::cmp::Ordering::Less => best_alignment(&left, &right),
        std::cmp::Ordering::Greater => best_alignment(&right, &left),
        std::cmp::Ordering::Equal => {
            best_alignment(&left, &right).max(best_alignment(&right, &left))
        }
    };

    to_percent(best)
}

/// Lowercases text before scoring.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Surrounds text with single spaces so fragments of longer words score lower
/// than whole-word hits.
pub fn pad(text: &str) -> String {
    format!(" {text} ")
}

fn best_alignment(needle: &[char], haystack: &[char]) -> f64 {
    let needle_len = needle.len();
    let haystack_len = haystack.len();
    debug_assert!(needle_len <= haystack_len);

    let leading = (1..needle_len).map(|end| &haystack[..end]);
    let full = (0..=haystack_len - needle_len).map(|start| &haystack[start..start + needle_len]);
    let trailing = (haystack_len - needle_len + 1..haystack_len).map(|start| &haystack[start..]);

    let mut best = 0.0_f64;
    for window in leading.chain(full).chain(trailing) {
        let score = indel::normalized_similarity(needle.iter().copied(), window.iter().copied());
        if score > best {
            best = score;
            if best >= 1.0 {
                break;
            }
        }
    }
    best
}

/// Halves round to even, so 62.5 becomes 62.
fn to_percent(similarity: f64) -> u8 {
    (similarity.clamp(0.0, 1.0) * 100.0).round_ties_even() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_full() {
        assert_eq!(partial_ratio("Species", "Species"), 100);
    }

    #[test]
    fn fragment_inside_longer_string_scores_full() {
        assert_eq!(partial_ratio("mass", "Body mass (g)"), 100);
        assert_eq!(partial_ratio("Body mass (g)", "mass"), 100);
    }

    #[test]
    fn empty_side_scores_zero() {
        assert_eq!(partial_ratio("", "Genus"), 0);
        assert_eq!(partial_ratio("Genus", ""), 0);
    }

    #[test]
    fn case_matters_without_folding() {
        let raw = partial_ratio("body mass", "Body mass (g)");
        let folded = partial_ratio(&fold_case("body mass"), &fold_case("Body mass (g)"));
        assert!(raw < 100, "got {raw}");
        assert_eq!(folded, 100);
    }

    #[test]
    fn padding_penalizes_word_fragments() {
        let whole = partial_ratio(&pad("dog"), &pad("dog"));
        let fragment = partial_ratio(&pad("dog"), &pad("hotdogger"));
        assert_eq!(whole, 100);
        assert!(fragment < whole, "got {fragment}");
    }

    #[test]
    fn halves_round_to_even() {
        assert_eq!(to_percent(0.625), 62);
        assert_eq!(to_percent(0.635), 64);
        assert_eq!(to_percent(1.0), 100);
    }

    #[test]
    fn unrelated_strings_score_low() {
        assert!(partial_ratio("xyz", "Kingdom") < 50);
    }
}
