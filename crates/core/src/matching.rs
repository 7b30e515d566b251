//! Scoring of recognized transcripts against expected responses.
//!
//! Matching is intentionally naive: substring containment either way, or a
//! token-set overlap ratio above a fixed threshold. Both inputs are
//! normalized first (lowercase, whitespace tokens, punctuation stripped
//! from token edges) so that `"i'm fine thank you"` matches
//! `"I'm fine, thank you."`.

use std::collections::BTreeSet;

/// Overlap ratio (exclusive) above which a transcript counts as correct.
pub const SIMILARITY_THRESHOLD: f32 = 0.6;

/// Verdict for one transcript/expected pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchReport {
    pub is_correct: bool,
    pub similarity: f32,
}

fn clean_token(raw: &str) -> Option<&str> {
    let token = raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
    if token.is_empty() { None } else { Some(token) }
}

fn token_set(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter_map(clean_token)
        .map(str::to_owned)
        .collect()
}

fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .filter_map(clean_token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Token-set overlap ratio in `[0, 1]`.
///
/// `|a ∩ b| / max(|a|, |b|)` over normalized token sets. Symmetric. When
/// both sets are empty the ratio is defined as `0.0`: two empty utterances
/// carry no evidence of a match.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f32 {
    let set_a = token_set(a);
    let set_b = token_set(b);
    if set_a.is_empty() && set_b.is_empty() {
        return 0.0;
    }

    let shared = set_a.intersection(&set_b).count();
    shared as f32 / set_a.len().max(set_b.len()) as f32
}

/// Scores a transcript against the expected response.
///
/// Correct when the normalized texts contain one another, or when the
/// overlap ratio exceeds [`SIMILARITY_THRESHOLD`]. An empty transcript is
/// never correct.
#[must_use]
pub fn evaluate(transcript: &str, expected: &str) -> MatchReport {
    let score = similarity(transcript, expected);
    let transcript = normalize(transcript);
    let expected = normalize(expected);

    let contained = !transcript.is_empty()
        && !expected.is_empty()
        && (transcript.contains(&expected) || expected.contains(&transcript));

    MatchReport {
        is_correct: contained || score > SIMILARITY_THRESHOLD,
        similarity: score,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn similarity_is_symmetric() {
        let a = "good morning everyone";
        let b = "good evening";
        assert_eq!(similarity(a, b), similarity(b, a));
    }

    #[test]
    fn similarity_of_equal_nonempty_texts_is_one() {
        assert_eq!(similarity("good morning", "good morning"), 1.0);
    }

    #[test]
    fn similarity_of_disjoint_texts_is_zero() {
        assert_eq!(similarity("good morning", "buenos dias"), 0.0);
    }

    #[test]
    fn similarity_of_two_empty_texts_is_zero() {
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("  ", "\t"), 0.0);
    }

    #[test]
    fn similarity_ignores_case_duplicates_and_order() {
        assert_eq!(similarity("Morning good GOOD", "good morning"), 1.0);
    }

    #[test]
    fn punctuation_mismatch_still_matches() {
        let report = evaluate("i'm fine thank you", "I'm fine, thank you.");
        assert!(report.is_correct);
        assert_eq!(report.similarity, 1.0);
    }

    #[test]
    fn containment_matches_in_both_directions() {
        assert!(evaluate("well good morning to you", "Good morning!").is_correct);
        assert!(evaluate("good morning", "good morning everyone").is_correct);
    }

    #[test]
    fn threshold_is_strict() {
        // 3 shared tokens out of max 5 is exactly 0.6 and must not pass.
        let report = evaluate("a b c x y", "a b c p q");
        assert_eq!(report.similarity, 0.6);
        assert!(!report.is_correct);
    }

    #[test]
    fn weak_overlap_is_incorrect() {
        let report = evaluate("where is the station", "I'm fine, thank you.");
        assert!(!report.is_correct);
        assert!(report.similarity < SIMILARITY_THRESHOLD);
    }

    #[test]
    fn empty_transcript_is_never_correct() {
        let report = evaluate("", "Good morning!");
        assert!(!report.is_correct);
        assert_eq!(report.similarity, 0.0);
    }

    #[test]
    fn placeholders_match_literally() {
        // "[your name]" is never resolved; its bracket-stripped tokens still
        // count toward the overlap.
        let report = evaluate("my name is anna", "My name is [your name]");
        assert!(report.is_correct);
    }
}
