//! Asymptotic notations and the common growth classes

use super::types::{AsymptoticNotation, TimeComplexity};
use crate::ComplexityQuality;

static ASYMPTOTIC_NOTATIONS: &[AsymptoticNotation] = &[
    AsymptoticNotation {
        name: "Big O",
        notation: "f(n) = O(g(n))",
        description: "Upper bound: f grows no faster than g.",
        note: "Usually quoted for the worst case.",
        simplified: "f(n) ≤ c·g(n) for large n",
    },
    AsymptoticNotation {
        name: "Big Omega",
        notation: "f(n) = Ω(g(n))",
        description: "Lower bound: f grows at least as fast as g.",
        note: "Usually quoted for the best case.",
        simplified: "f(n) ≥ c·g(n) for large n",
    },
    AsymptoticNotation {
        name: "Big Theta",
        notation: "f(n) = Θ(g(n))",
        description: "Tight bound: f grows exactly as fast as g.",
        note: "Usually quoted for the average case.",
        simplified: "c₁·g(n) ≤ f(n) ≤ c₂·g(n) for large n",
    },
    AsymptoticNotation {
        name: "Little o",
        notation: "f(n) = o(g(n))",
        description: "Strict upper bound: f grows strictly slower than g.",
        note: "The ratio f/g tends to zero.",
        simplified: "f(n) < c·g(n) for every c > 0",
    },
    AsymptoticNotation {
        name: "Little omega",
        notation: "f(n) = ω(g(n))",
        description: "Strict lower bound: f grows strictly faster than g.",
        note: "The ratio f/g tends to infinity.",
        simplified: "f(n) > c·g(n) for every c > 0",
    },
];

static TIME_COMPLEXITIES: &[TimeComplexity] = &[
    TimeComplexity {
        name: "Constant",
        notation: "O(1)",
        description: "Runtime does not depend on input size.",
        level: ComplexityQuality::Best,
    },
    TimeComplexity {
        name: "Logarithmic",
        notation: "O(log n)",
        description: "Each step discards a constant fraction of the input.",
        level: ComplexityQuality::Good,
    },
    TimeComplexity {
        name: "Linear",
        notation: "O(n)",
        description: "Touches every element a constant number of times.",
        level: ComplexityQuality::Fair,
    },
    TimeComplexity {
        name: "Linearithmic",
        notation: "O(n log n)",
        description: "Typical of efficient comparison sorts.",
        level: ComplexityQuality::Fair,
    },
    TimeComplexity {
        name: "Quadratic",
        notation: "O(n^2)",
        description: "Compares every element with every other element.",
        level: ComplexityQuality::Bad,
    },
    TimeComplexity {
        name: "Cubic",
        notation: "O(n^3)",
        description: "Three nested passes over the input.",
        level: ComplexityQuality::Bad,
    },
    TimeComplexity {
        name: "Exponential",
        notation: "O(2^n)",
        description: "Doubles with every additional input element.",
        level: ComplexityQuality::Worst,
    },
    TimeComplexity {
        name: "Factorial",
        notation: "O(n!)",
        description: "Enumerates every permutation of the input.",
        level: ComplexityQuality::Worst,
    },
];

pub fn asymptotic_notations() -> &'static [AsymptoticNotation] {
    ASYMPTOTIC_NOTATIONS
}

pub fn time_complexities() -> &'static [TimeComplexity] {
    TIME_COMPLEXITIES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify;

    #[test]
    fn test_levels_agree_with_classifier() {
        for tc in time_complexities() {
            assert_eq!(classify(tc.notation), tc.level, "{}", tc.name);
        }
    }

    #[test]
    fn test_growth_classes_are_ordered() {
        let ranks: Vec<u8> = time_complexities()
            .iter()
            .filter_map(|tc| tc.level.rank())
            .collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    }
}
