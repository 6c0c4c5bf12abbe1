//! Algoref: programming reference catalog
//!
//! This library provides a typed catalog of algorithm complexities, data
//! structure properties, language built-ins and curated links, plus a
//! classifier that grades Big-O notation strings into quality tiers for
//! colored display.

pub mod catalog;
pub mod config;
pub mod quality;
pub mod reporter;

pub use quality::{classify, classify_traced, complexity_class, style_for};

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Quality tier of a complexity notation, from most to least efficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityQuality {
    Best,
    Good,
    Fair,
    Bad,
    Worst,
    /// Not applicable (e.g. "N/A" or "-")
    Na,
}

impl ComplexityQuality {
    pub const ALL: [ComplexityQuality; 6] = [
        ComplexityQuality::Best,
        ComplexityQuality::Good,
        ComplexityQuality::Fair,
        ComplexityQuality::Bad,
        ComplexityQuality::Worst,
        ComplexityQuality::Na,
    ];

    /// Position in the efficiency order (0 = best). `Na` has no rank.
    pub fn rank(self) -> Option<u8> {
        match self {
            ComplexityQuality::Best => Some(0),
            ComplexityQuality::Good => Some(1),
            ComplexityQuality::Fair => Some(2),
            ComplexityQuality::Bad => Some(3),
            ComplexityQuality::Worst => Some(4),
            ComplexityQuality::Na => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComplexityQuality::Best => "best",
            ComplexityQuality::Good => "good",
            ComplexityQuality::Fair => "fair",
            ComplexityQuality::Bad => "bad",
            ComplexityQuality::Worst => "worst",
            ComplexityQuality::Na => "na",
        }
    }
}

impl std::fmt::Display for ComplexityQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a tier name is not one of the six known tiers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown complexity quality '{0}' (expected best, good, fair, bad, worst or na)")]
pub struct ParseQualityError(pub String);

impl FromStr for ComplexityQuality {
    type Err = ParseQualityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComplexityQuality::ALL
            .into_iter()
            .find(|q| q.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseQualityError(s.to_string()))
    }
}

/// Display styling derived from a quality tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityStyle {
    /// Background + foreground classes for a colored chip
    pub display_class: &'static str,
    /// Foreground-only emphasis classes
    pub text_class: &'static str,
    /// Human-readable label ("Best" .. "N/A")
    pub label: &'static str,
}

/// Substring rule that matched during heuristic fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicRule {
    Factorial,
    Exponential,
    Cubic,
    Quadratic,
    Linearithmic,
    Logarithmic,
    NotApplicable,
    Constant,
    Linear,
}

impl std::fmt::Display for HeuristicRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeuristicRule::Factorial => write!(f, "factorial"),
            HeuristicRule::Exponential => write!(f, "exponential"),
            HeuristicRule::Cubic => write!(f, "cubic"),
            HeuristicRule::Quadratic => write!(f, "quadratic"),
            HeuristicRule::Linearithmic => write!(f, "linearithmic"),
            HeuristicRule::Logarithmic => write!(f, "logarithmic"),
            HeuristicRule::NotApplicable => write!(f, "not-applicable"),
            HeuristicRule::Constant => write!(f, "constant"),
            HeuristicRule::Linear => write!(f, "linear"),
        }
    }
}

/// Which resolution stage produced a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "rule")]
pub enum Resolution {
    /// Found in the fixed notation table
    Exact,
    /// Matched a substring heuristic
    Heuristic(HeuristicRule),
    /// Nothing matched; fell back to fair
    Default,
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Exact => write!(f, "exact"),
            Resolution::Heuristic(rule) => write!(f, "heuristic ({})", rule),
            Resolution::Default => write!(f, "default"),
        }
    }
}

/// A notation together with its tier and how the tier was resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub notation: String,
    pub quality: ComplexityQuality,
    pub resolution: Resolution,
}

impl Classification {
    pub fn style(&self) -> QualityStyle {
        style_for(self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_from_str() {
        assert_eq!("worst".parse::<ComplexityQuality>(), Ok(ComplexityQuality::Worst));
        assert_eq!(" NA ".parse::<ComplexityQuality>(), Ok(ComplexityQuality::Na));
        assert!("terrible".parse::<ComplexityQuality>().is_err());
    }

    #[test]
    fn test_rank_orders_tiers() {
        let ranks: Vec<u8> = ComplexityQuality::ALL
            .iter()
            .filter_map(|q| q.rank())
            .collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
        assert_eq!(ComplexityQuality::Na.rank(), None);
    }

    #[test]
    fn test_resolution_serializes_tagged() {
        let json = serde_json::to_string(&Resolution::Heuristic(HeuristicRule::Quadratic)).unwrap();
        assert_eq!(json, r#"{"kind":"heuristic","rule":"quadratic"}"#);
        let json = serde_json::to_string(&Resolution::Exact).unwrap();
        assert_eq!(json, r#"{"kind":"exact"}"#);
    }
}
