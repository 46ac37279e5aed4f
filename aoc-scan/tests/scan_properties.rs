//! Property-based tests for the instruction scanner and region exclusion

use aoc_scan::{exclude_regions, scan};
use proptest::prelude::*;

/// Noise text guaranteed to contain no `mul(` occurrence and no digits, so
/// it can surround instructions without creating or breaking candidates.
fn noise() -> impl Strategy<Value = String> {
    "[a-ln-z#!@&\\^\\*\\[\\]<> ]{0,24}"
}

proptest! {
    /// *For any* text without the start token, the total is zero.
    #[test]
    fn prop_no_token_no_total(text in noise()) {
        prop_assert_eq!(scan(&text, "mul(").unwrap(), 0);
    }

    /// *For any* operand pair in 0..=999, a lone well-formed instruction
    /// contributes exactly its product.
    #[test]
    fn prop_single_instruction_product(a in 0u64..=999, b in 0u64..=999) {
        let text = format!("mul({},{})", a, b);
        prop_assert_eq!(scan(&text, "mul(").unwrap(), a * b);
    }

    /// *For any* sequence of well-formed instructions separated by noise,
    /// the total is the sum of the products.
    #[test]
    fn prop_sum_over_instructions(
        pairs in prop::collection::vec((0u64..=999, 0u64..=999), 0..8),
        separators in prop::collection::vec(noise(), 9),
    ) {
        let mut text = String::new();
        let mut expected = 0;
        for ((a, b), sep) in pairs.iter().zip(&separators) {
            text.push_str(sep);
            text.push_str(&format!("mul({},{})", a, b));
            expected += a * b;
        }
        text.push_str(separators.last().unwrap());
        prop_assert_eq!(scan(&text, "mul(").unwrap(), expected);
    }

    /// *For any* operand of 4 or more digits, the instruction is rejected.
    #[test]
    fn prop_oversized_operand_rejected(a in 1000u64..=99999, b in 0u64..=999) {
        let left = format!("mul({},{})", a, b);
        let right = format!("mul({},{})", b, a);
        prop_assert_eq!(scan(&left, "mul(").unwrap(), 0);
        prop_assert_eq!(scan(&right, "mul(").unwrap(), 0);
    }

    /// *For any* input, the exclusion result is no longer than the input and
    /// running the filter on its own output changes nothing.
    #[test]
    fn prop_exclusion_shrinks_and_is_idempotent(
        chunks in prop::collection::vec(
            prop_oneof![noise(), Just("don't()".to_string()), Just("do()".to_string())],
            0..12,
        ),
    ) {
        let text: String = chunks.concat();
        let once = exclude_regions(&text, "don't()", "do()").unwrap();
        prop_assert!(once.len() <= text.len());
        let twice = exclude_regions(&once, "don't()", "do()").unwrap();
        prop_assert_eq!(twice, once);
    }

    /// *For any* instruction placed inside a disabled region, filtering then
    /// scanning excludes it while instructions outside the region survive.
    #[test]
    fn prop_disabled_instructions_excluded(
        (a, b) in (0u64..=999, 0u64..=999),
        (c, d) in (0u64..=999, 0u64..=999),
    ) {
        let text = format!("mul({a},{b})don't()mul({c},{d})do()mul({a},{b})");
        let enabled = exclude_regions(&text, "don't()", "do()").unwrap();
        prop_assert_eq!(scan(&enabled, "mul(").unwrap(), 2 * a * b);
    }
}
