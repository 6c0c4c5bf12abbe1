//! Catalog audit: how every notation in the catalog gets classified
//!
//! Hand-authored notations drift (unicode vs ASCII exponents, spacing), so the
//! audit reports which ones missed the exact table and which time-complexity
//! entries disagree with the classifier.

use super::{time_complexities, NotationRef, Section};
use crate::{classify_traced, Classification, ComplexityQuality, Resolution};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub section: Section,
    pub record: &'static str,
    pub field: &'static str,
    pub classification: Classification,
}

/// A time-complexity entry whose declared level differs from the classifier
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelMismatch {
    pub name: &'static str,
    pub notation: &'static str,
    pub declared: ComplexityQuality,
    pub classified: ComplexityQuality,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub entries: Vec<AuditEntry>,
    /// Number of notations resolved by the exact table
    pub exact: usize,
    /// Number resolved by a substring heuristic
    pub heuristic: usize,
    /// Number that fell through to the default tier
    pub default: usize,
    pub mismatches: Vec<LevelMismatch>,
}

impl AuditReport {
    /// Entries that fell through to the default tier
    pub fn unresolved(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries
            .iter()
            .filter(|e| e.classification.resolution == Resolution::Default)
    }

    /// Entries resolved by a substring heuristic
    pub fn heuristic_entries(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.classification.resolution, Resolution::Heuristic(_)))
    }

    /// True when nothing defaulted and no declared level disagrees
    pub fn is_clean(&self) -> bool {
        self.default == 0 && self.mismatches.is_empty()
    }
}

/// Classify every given notation and check declared time-complexity levels
pub fn audit(notations: &[NotationRef]) -> AuditReport {
    let mut report = AuditReport::default();

    for notation in notations {
        let classification = classify_traced(notation.notation);
        match classification.resolution {
            Resolution::Exact => report.exact += 1,
            Resolution::Heuristic(_) => report.heuristic += 1,
            Resolution::Default => {
                report.default += 1;
                tracing::warn!(
                    section = %notation.section,
                    record = notation.record,
                    field = notation.field,
                    notation = notation.notation,
                    "notation fell through to the default tier"
                );
            }
        }
        report.entries.push(AuditEntry {
            section: notation.section,
            record: notation.record,
            field: notation.field,
            classification,
        });
    }

    for tc in time_complexities() {
        let classified = crate::classify(tc.notation);
        if classified != tc.level {
            report.mismatches.push(LevelMismatch {
                name: tc.name,
                notation: tc.notation,
                declared: tc.level,
                classified,
            });
        }
    }

    tracing::debug!(
        total = report.entries.len(),
        exact = report.exact,
        heuristic = report.heuristic,
        default = report.default,
        mismatches = report.mismatches.len(),
        "catalog audit finished"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::notations;

    #[test]
    fn test_shipped_catalog_is_clean() {
        let report = audit(&notations());
        assert!(report.is_clean(), "unresolved: {:?}", report.unresolved().collect::<Vec<_>>());
        assert_eq!(report.default, 0);
        assert_eq!(report.exact + report.heuristic, report.entries.len());
    }

    #[test]
    fn test_shipped_catalog_resolves_exactly() {
        let report = audit(&notations());
        assert_eq!(report.heuristic_entries().count(), 0);
        assert_eq!(report.exact, report.entries.len());
    }

    #[test]
    fn test_counts_each_resolution() {
        let refs = [
            NotationRef {
                section: Section::SortingAlgorithms,
                record: "Exact",
                field: "time.best",
                notation: "O(1)",
            },
            NotationRef {
                section: Section::SortingAlgorithms,
                record: "Heuristic",
                field: "time.average",
                notation: "O(n^2 log n)",
            },
            NotationRef {
                section: Section::SortingAlgorithms,
                record: "Default",
                field: "time.worst",
                notation: "O(√n)",
            },
        ];
        let report = audit(&refs);
        assert_eq!((report.exact, report.heuristic, report.default), (1, 1, 1));
        assert!(!report.is_clean());
        let unresolved: Vec<_> = report.unresolved().map(|e| e.record).collect();
        assert_eq!(unresolved, vec!["Default"]);
    }

    #[test]
    fn test_empty_input_is_clean() {
        let report = audit(&[]);
        assert!(report.entries.is_empty());
        assert!(report.is_clean());
    }
}
