//! Health score derivation.
//!
//! Purely a function of the structured flags and additive count; the backend
//! has no say in the score and the score is never persisted.

use crate::types::StructuredResult;

/// Fixed penalty per scoring flag. Flags outside this table are displayed
/// but never scored.
const FLAG_PENALTIES: [(&str, u32); 4] = [
    ("palmOil", 10),
    ("addedSugar", 15),
    ("addedSalt", 10),
    ("msgLikeEnhancer", 15),
];

const ADDITIVE_PENALTY_PER_CODE: u32 = 2;
const ADDITIVE_PENALTY_CAP: u32 = 20;

/// Derive the 0–100 health score, or `None` when no structured data exists.
///
/// Deterministic and order-independent: the fixed table is iterated rather
/// than the flag map, and the additive penalty depends only on the count.
pub fn compute_health_score(structured: Option<&StructuredResult>) -> Option<u8> {
    let structured = structured?;

    let mut penalty: u32 = 0;
    for (flag, cost) in FLAG_PENALTIES {
        if structured.flags.get(flag).copied().unwrap_or(false) {
            penalty += cost;
        }
    }
    penalty += (ADDITIVE_PENALTY_PER_CODE * structured.additives.len() as u32)
        .min(ADDITIVE_PENALTY_CAP);

    Some(100u32.saturating_sub(penalty) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Additive;

    fn additives(n: usize) -> Vec<Additive> {
        (0..n)
            .map(|i| Additive { code: format!("{:03}", 600 + i), name: None })
            .collect()
    }

    fn with_flags(flags: &[(&str, bool)]) -> StructuredResult {
        StructuredResult {
            flags: flags.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn absent_structured_scores_absent() {
        assert_eq!(compute_health_score(None), None);
    }

    #[test]
    fn empty_structured_scores_100() {
        assert_eq!(compute_health_score(Some(&StructuredResult::default())), Some(100));
    }

    #[test]
    fn single_flag_penalty() {
        let s = with_flags(&[("addedSugar", true)]);
        assert_eq!(compute_health_score(Some(&s)), Some(85));
    }

    #[test]
    fn false_flags_do_not_score() {
        let s = with_flags(&[("palmOil", false), ("addedSalt", false)]);
        assert_eq!(compute_health_score(Some(&s)), Some(100));
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let s = with_flags(&[("artificialFlavour", true), ("organic", true)]);
        assert_eq!(compute_health_score(Some(&s)), Some(100));
    }

    #[test]
    fn all_flags_and_capped_additives_floor_at_30() {
        let mut s = with_flags(&[
            ("palmOil", true),
            ("addedSugar", true),
            ("addedSalt", true),
            ("msgLikeEnhancer", true),
        ]);
        s.additives = additives(10);
        // 100 - 10 - 15 - 10 - 15 - 20
        assert_eq!(compute_health_score(Some(&s)), Some(30));
    }

    #[test]
    fn additive_penalty_is_monotone_and_capped() {
        let mut last = 100;
        for n in 0..60 {
            let s = StructuredResult { additives: additives(n), ..Default::default() };
            let score = compute_health_score(Some(&s)).unwrap();
            assert!(score <= last, "score rose as additive count grew");
            last = score;
        }
        let zero = StructuredResult::default();
        assert_eq!(compute_health_score(Some(&zero)), Some(100));
        let ten = StructuredResult { additives: additives(10), ..Default::default() };
        assert_eq!(compute_health_score(Some(&ten)), Some(80));
        let fifty = StructuredResult { additives: additives(50), ..Default::default() };
        assert_eq!(compute_health_score(Some(&fifty)), Some(80));
    }

    #[test]
    fn score_is_order_independent() {
        let forward = StructuredResult {
            additives: additives(5),
            flags: [("palmOil", true), ("addedSugar", true)]
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
            ..Default::default()
        };
        let mut reversed_additives: Vec<Additive> = additives(5);
        reversed_additives.reverse();
        let backward = StructuredResult {
            additives: reversed_additives,
            flags: [("addedSugar", true), ("palmOil", true)]
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
            ..Default::default()
        };
        assert_eq!(
            compute_health_score(Some(&forward)),
            compute_health_score(Some(&backward))
        );
    }

    #[test]
    fn score_always_in_range() {
        for n in [0usize, 1, 3, 10, 25] {
            for mask in 0u8..16 {
                let names = ["palmOil", "addedSugar", "addedSalt", "msgLikeEnhancer"];
                let flags = names
                    .iter()
                    .enumerate()
                    .map(|(i, name)| (name.to_string(), mask & (1 << i) != 0))
                    .collect();
                let s = StructuredResult { additives: additives(n), flags, ..Default::default() };
                let score = compute_health_score(Some(&s)).unwrap();
                assert!(score <= 100);
            }
        }
    }
}
