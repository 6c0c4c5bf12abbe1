//! Complexity notation classifier
//!
//! Resolution runs in three stages, first match wins:
//! 1. exact lookup of the trimmed notation in a fixed table
//! 2. substring heuristics, in a fixed priority order
//! 3. default to [`ComplexityQuality::Fair`]
//!
//! Every stage returns a tier, so classification never fails.

use crate::{Classification, ComplexityQuality, HeuristicRule, Resolution};

use ComplexityQuality::{Bad, Best, Fair, Good, Na, Worst};

/// Every notation in the exact table, in table order.
pub const KNOWN_NOTATIONS: &[&str] = &[
    "O(1)",
    "Θ(1)",
    "Ω(1)",
    "O(log n)",
    "O(log(n))",
    "Θ(log n)",
    "Θ(log(n))",
    "Ω(log n)",
    "Ω(log(n))",
    "O(n)",
    "Θ(n)",
    "Ω(n)",
    "O(n + k)",
    "Θ(n + k)",
    "Ω(n + k)",
    "O(k)",
    "O(nk)",
    "Θ(nk)",
    "Ω(nk)",
    "O(n log n)",
    "O(n log(n))",
    "Θ(n log n)",
    "Θ(n log(n))",
    "Ω(n log n)",
    "Ω(n log(n))",
    "O(n²)",
    "O(n^2)",
    "Θ(n²)",
    "Θ(n^2)",
    "Ω(n²)",
    "Ω(n^2)",
    "O(n³)",
    "O(n^3)",
    "Θ(n³)",
    "Θ(n^3)",
    "Θ((n log(n))^2)",
    "O(n(log(n))^2)",
    "O(2^n)",
    "O(2ⁿ)",
    "Θ(2^n)",
    "O(b ^ d)",
    "Θ(b ^ d)",
    "O(n!)",
    "Θ(n!)",
    "O(V + E)",
    "Θ(V + E)",
    "O(v + e)",
    "Θ(v + e)",
    "O(v * e)",
    "Θ(v * e)",
    "O((v + e) log v)",
    "Θ((v + e) log v)",
    "N/A",
];

/// Look up an already-trimmed notation in the fixed table.
///
/// Returns `None` only when the notation is absent from the table.
pub fn exact_quality(notation: &str) -> Option<ComplexityQuality> {
    let quality = match notation {
        // Constant
        "O(1)" | "Θ(1)" | "Ω(1)" => Best,

        // Logarithmic
        "O(log n)" | "O(log(n))" | "Θ(log n)" | "Θ(log(n))" | "Ω(log n)" | "Ω(log(n))" => Good,

        // Linear
        "O(n)" | "Θ(n)" | "Ω(n)" | "O(n + k)" | "Θ(n + k)" | "Ω(n + k)" | "O(k)" | "O(nk)"
        | "Θ(nk)" | "Ω(nk)" => Fair,

        // Linearithmic
        "O(n log n)" | "O(n log(n))" | "Θ(n log n)" | "Θ(n log(n))" | "Ω(n log n)"
        | "Ω(n log(n))" => Fair,

        // Quadratic
        "O(n²)" | "O(n^2)" | "Θ(n²)" | "Θ(n^2)" | "Ω(n²)" | "Ω(n^2)" => Bad,

        // Cubic
        "O(n³)" | "O(n^3)" | "Θ(n³)" | "Θ(n^3)" => Bad,

        // Shell sort
        "Θ((n log(n))^2)" | "O(n(log(n))^2)" => Bad,

        // Exponential
        "O(2^n)" | "O(2ⁿ)" | "Θ(2^n)" | "O(b ^ d)" | "Θ(b ^ d)" => Worst,

        // Factorial
        "O(n!)" | "Θ(n!)" => Worst,

        // Graph
        "O(V + E)" | "Θ(V + E)" | "O(v + e)" | "Θ(v + e)" => Fair,
        "O(v * e)" | "Θ(v * e)" => Bad,
        "O((v + e) log v)" | "Θ((v + e) log v)" => Fair,

        "N/A" => Na,

        _ => return None,
    };
    Some(quality)
}

/// Apply the substring heuristics to an already-trimmed notation.
///
/// Order matters: "n^2 log n" must hit the quadratic rule before the
/// generic "log" rule gets a chance.
pub fn heuristic_quality(notation: &str) -> Option<(ComplexityQuality, HeuristicRule)> {
    let has = |needle: &str| notation.contains(needle);

    let matched = if has("n!") {
        (Worst, HeuristicRule::Factorial)
    } else if has("2^n") || has("2ⁿ") {
        (Worst, HeuristicRule::Exponential)
    } else if has("n^3") || has("n³") {
        (Bad, HeuristicRule::Cubic)
    } else if has("n^2") || has("n²") {
        (Bad, HeuristicRule::Quadratic)
    } else if has("n log") || has("n*log") {
        (Fair, HeuristicRule::Linearithmic)
    } else if has("log") {
        (Good, HeuristicRule::Logarithmic)
    } else if notation == "N/A" || notation == "-" {
        (Na, HeuristicRule::NotApplicable)
    } else if has("(1)") {
        (Best, HeuristicRule::Constant)
    } else if has("(n)") || has("n + ") {
        (Fair, HeuristicRule::Linear)
    } else {
        return None;
    };
    Some(matched)
}

/// Classify a notation and record which stage resolved it
pub fn classify_traced(notation: &str) -> Classification {
    let normalized = notation.trim();

    let (quality, resolution) = if let Some(quality) = exact_quality(normalized) {
        (quality, Resolution::Exact)
    } else if let Some((quality, rule)) = heuristic_quality(normalized) {
        (quality, Resolution::Heuristic(rule))
    } else {
        (Fair, Resolution::Default)
    };

    Classification {
        notation: normalized.to_string(),
        quality,
        resolution,
    }
}

/// Get the quality tier for a complexity notation
pub fn classify(notation: &str) -> ComplexityQuality {
    let normalized = notation.trim();
    exact_quality(normalized)
        .or_else(|| heuristic_quality(normalized).map(|(quality, _)| quality))
        .unwrap_or(Fair)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_is_best() {
        assert_eq!(classify("O(1)"), Best);
        assert_eq!(classify("Ω(1)"), Best);
    }

    #[test]
    fn test_theta_log_is_good() {
        assert_eq!(classify("Θ(log n)"), Good);
    }

    #[test]
    fn test_superscript_quadratic_is_exact() {
        let c = classify_traced("O(n²)");
        assert_eq!(c.quality, Bad);
        assert_eq!(c.resolution, Resolution::Exact);
    }

    #[test]
    fn test_not_applicable() {
        assert_eq!(classify("N/A"), Na);
        assert_eq!(classify_traced("N/A").resolution, Resolution::Exact);
        let dash = classify_traced("-");
        assert_eq!(dash.quality, Na);
        assert_eq!(dash.resolution, Resolution::Heuristic(HeuristicRule::NotApplicable));
    }

    #[test]
    fn test_exponential_is_worst() {
        assert_eq!(classify("O(2^n)"), Worst);
        assert_eq!(classify("Ω(2ⁿ)"), Worst);
        assert_eq!(classify("O(k!)"), Fair);
        assert_eq!(classify("Ω(n!)"), Worst);
    }

    #[test]
    fn test_whitespace_is_trimmed_before_lookup() {
        let c = classify_traced("  O(n)  ");
        assert_eq!(c.quality, Fair);
        assert_eq!(c.resolution, Resolution::Exact);
        assert_eq!(c.notation, "O(n)");
    }

    #[test]
    fn test_quadratic_checked_before_log() {
        let c = classify_traced("O(n^2 log n)");
        assert_eq!(c.quality, Bad);
        assert_eq!(c.resolution, Resolution::Heuristic(HeuristicRule::Quadratic));
    }

    #[test]
    fn test_cubic_checked_before_quadratic() {
        let c = classify_traced("O(n^3 + n^2)");
        assert_eq!(c.quality, Bad);
        assert_eq!(c.resolution, Resolution::Heuristic(HeuristicRule::Cubic));
    }

    #[test]
    fn test_linearithmic_checked_before_log() {
        assert_eq!(
            classify_traced("Ω(n log k)").resolution,
            Resolution::Heuristic(HeuristicRule::Linearithmic)
        );
        assert_eq!(classify("O(n*log(k))"), Fair);
        assert_eq!(classify("O(log log n)"), Good);
    }

    #[test]
    fn test_constant_and_linear_fallbacks() {
        assert_eq!(
            classify_traced("Ω(1) amortized").resolution,
            Resolution::Heuristic(HeuristicRule::Constant)
        );
        assert_eq!(classify("O(n) amortized"), Fair);
        assert_eq!(
            classify_traced("O(n + m)").resolution,
            Resolution::Heuristic(HeuristicRule::Linear)
        );
    }

    #[test]
    fn test_unknown_defaults_to_fair() {
        let c = classify_traced("some nonsense");
        assert_eq!(c.quality, Fair);
        assert_eq!(c.resolution, Resolution::Default);
        assert_eq!(classify(""), Fair);
        assert_eq!(classify("   "), Fair);
    }

    #[test]
    fn test_every_known_notation_resolves_exactly() {
        for notation in KNOWN_NOTATIONS {
            let expected = exact_quality(notation)
                .unwrap_or_else(|| panic!("{} missing from table", notation));
            let c = classify_traced(notation);
            assert_eq!(c.resolution, Resolution::Exact, "{}", notation);
            assert_eq!(c.quality, expected, "{}", notation);
        }
    }

    #[test]
    fn test_table_wins_over_heuristics() {
        // Heuristics alone would call these linearithmic / logarithmic
        assert_eq!(classify("O(n(log(n))^2)"), Bad);
        assert_eq!(classify("Θ((v + e) log v)"), Fair);
        assert_eq!(heuristic_quality("Θ((n log(n))^2)").map(|(q, _)| q), Some(Fair));
        assert_eq!(classify("Θ((n log(n))^2)"), Bad);
        // Heuristics would fall through to default
        assert_eq!(heuristic_quality("O(b ^ d)"), None);
        assert_eq!(classify("O(b ^ d)"), Worst);
    }

    #[test]
    fn test_classify_agrees_with_traced() {
        for notation in ["O(n^2 log n)", "weird", "O(V log V)", "-", "  Θ(nk) "] {
            assert_eq!(classify(notation), classify_traced(notation).quality);
        }
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy that builds notation-like strings out of common fragments.
    fn notation_like() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop::sample::select(vec![
                "O(", "Θ(", "Ω(", ")", "n", "log", " ", "^2", "²", "³", "2^n", "!", "+", "k",
                "V", "E", "*", "N/A", "-", "1",
            ]),
            0..12,
        )
        .prop_map(|parts| parts.join(""))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn classify_is_total_on_arbitrary_input(ref input in ".{0,200}") {
            let quality = classify(input);
            prop_assert!(ComplexityQuality::ALL.contains(&quality));
        }

        #[test]
        fn classify_is_deterministic(ref input in notation_like()) {
            prop_assert_eq!(classify(input), classify(input));
            prop_assert_eq!(classify_traced(input), classify_traced(input));
        }

        #[test]
        fn surrounding_whitespace_is_ignored(ref input in notation_like(), pad in "[ \t\n]{0,4}") {
            let padded = format!("{}{}{}", pad, input, pad);
            prop_assert_eq!(classify(&padded), classify(input.trim()));
        }
    }
}
