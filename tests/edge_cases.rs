//! Edge case tests: degenerate notations must still classify.

use algoref::quality::{classify_traced, KNOWN_NOTATIONS};
use algoref::{classify, style_for, ComplexityQuality, HeuristicRule, Resolution};

#[test]
fn empty_and_whitespace_default_to_fair() {
    for input in ["", " ", "\t\n", "   \r\n  "] {
        let c = classify_traced(input);
        assert_eq!(c.quality, ComplexityQuality::Fair, "{:?}", input);
        assert_eq!(c.resolution, Resolution::Default);
        assert!(c.notation.is_empty());
    }
}

#[test]
fn dash_is_not_applicable() {
    assert_eq!(classify(" - "), ComplexityQuality::Na);
}

#[test]
fn lowercase_na_is_not_special() {
    // Only the exact "N/A" spelling maps to na
    assert_eq!(classify("n/a"), ComplexityQuality::Fair);
}

#[test]
fn factorial_beats_everything_else() {
    let c = classify_traced("O(n! + n^2 log n)");
    assert_eq!(c.quality, ComplexityQuality::Worst);
    assert_eq!(c.resolution, Resolution::Heuristic(HeuristicRule::Factorial));
}

#[test]
fn ascii_and_superscript_forms_agree() {
    assert_eq!(classify("Ω(n³)"), classify("Ω(n^3)"));
    assert_eq!(classify("O(m * n²)"), ComplexityQuality::Bad);
    assert_eq!(classify("Ω(2ⁿ)"), classify("Ω(2^n)"));
}

#[test]
fn known_table_size() {
    assert_eq!(KNOWN_NOTATIONS.len(), 53);
}

#[test]
fn notation_with_inner_whitespace_is_not_trimmed() {
    // Only leading/trailing whitespace is removed; "O( 1 )" misses the table
    let c = classify_traced("O( 1 )");
    assert_ne!(c.resolution, Resolution::Exact);
    assert_eq!(c.quality, ComplexityQuality::Fair);
}

#[test]
fn non_ascii_garbage_does_not_panic() {
    for input in ["∞", "🚀🚀", "O(\u{0})", "Θ", "Ω(((((("] {
        let quality = classify(input);
        assert!(!style_for(quality).label.is_empty());
    }
}
