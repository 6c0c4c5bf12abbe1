//! JSON reporter for machine-readable output

use crate::catalog::{self, AuditReport, NotationRef, Section};
use crate::{style_for, Classification, QualityStyle};
use serde::Serialize;
use serde_json::{json, Value};

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

/// A classification together with the style the presentation layer should use
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StyledClassification<'a> {
    #[serde(flatten)]
    classification: &'a Classification,
    style: QualityStyle,
}

/// A catalog notation with its tier and style
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StyledNotation {
    #[serde(flatten)]
    reference: NotationRef,
    quality: crate::ComplexityQuality,
    style: QualityStyle,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report classification results as a JSON array
    pub fn report_classifications(&self, results: &[Classification]) -> String {
        let styled: Vec<StyledClassification> = results
            .iter()
            .map(|c| StyledClassification {
                classification: c,
                style: style_for(c.quality),
            })
            .collect();
        self.encode(&styled, "[]")
    }

    /// Report catalog sections plus every styled notation they contain
    pub fn report_sections(&self, sections: &[Section]) -> String {
        let mut data = serde_json::Map::new();
        for section in sections {
            data.insert(section.id().to_string(), section_value(*section));
        }

        let notations: Vec<StyledNotation> = catalog::notations()
            .into_iter()
            .filter(|r| sections.contains(&r.section))
            .map(|reference| {
                let quality = crate::classify(reference.notation);
                StyledNotation {
                    reference,
                    quality,
                    style: style_for(quality),
                }
            })
            .collect();

        let output = json!({
            "sections": data,
            "notations": notations,
        });
        self.encode(&output, "{}")
    }

    /// Report an audit as JSON
    pub fn report_audit(&self, report: &AuditReport) -> String {
        self.encode(report, "{}")
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T, fallback: &str) -> String {
        let result = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        result.unwrap_or_else(|_| fallback.to_string())
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw catalog data for one section
fn section_value(section: Section) -> Value {
    let value = match section {
        Section::AsymptoticNotations => serde_json::to_value(catalog::asymptotic_notations()),
        Section::TimeComplexities => serde_json::to_value(catalog::time_complexities()),
        Section::DataStructures => serde_json::to_value(catalog::data_structures()),
        Section::SortingAlgorithms => serde_json::to_value(catalog::sorting_algorithms()),
        Section::SearchAlgorithms => Ok(json!({
            "algorithms": catalog::search_algorithms(),
            "legend": catalog::search_algorithm_legend(),
        })),
        Section::Concepts => serde_json::to_value(catalog::concepts()),
        Section::RestApi => Ok(json!({
            "constraints": catalog::rest_constraints(),
            "methods": catalog::rest_methods(),
        })),
        Section::Graphql => serde_json::to_value(catalog::graphql_concepts()),
        Section::Sql => serde_json::to_value(catalog::sql_statements()),
        Section::PythonZen => serde_json::to_value(catalog::python_zen()),
        Section::PythonMagicMethods => serde_json::to_value(catalog::python_magic_methods()),
        Section::PythonNotes => serde_json::to_value(catalog::python_useful_notes()),
        Section::PythonModules => {
            let modules: serde_json::Map<String, Value> = catalog::python_modules()
                .iter()
                .map(|(group, methods)| {
                    let methods = serde_json::to_value(methods).unwrap_or(Value::Null);
                    (group.to_string(), methods)
                })
                .collect();
            Ok(Value::Object(modules))
        }
        Section::Resources => serde_json::to_value(catalog::resources()),
    };
    value.unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify_traced;
    use crate::catalog::audit;

    #[test]
    fn test_classification_json_includes_style() {
        let json = JsonReporter::new().report_classifications(&[classify_traced("O(2^n)")]);
        let value: Value = serde_json::from_str(&json).unwrap();
        let first = &value[0];
        assert_eq!(first["notation"], "O(2^n)");
        assert_eq!(first["quality"], "worst");
        assert_eq!(first["resolution"]["kind"], "exact");
        assert_eq!(first["style"]["label"], "Worst");
        assert_eq!(first["style"]["displayClass"], "bg-complexity-bad text-gray-900");
    }

    #[test]
    fn test_sections_json() {
        let json = JsonReporter::new()
            .pretty()
            .report_sections(&[Section::SortingAlgorithms, Section::Resources]);
        let value: Value = serde_json::from_str(&json).unwrap();

        let sorting = value["sections"]["sorting-algorithms"].as_array().unwrap();
        assert_eq!(sorting[0]["name"], "Quicksort");
        assert_eq!(sorting[0]["space"]["worst"], "O(log(n))");
        assert!(value["sections"]["resources"].is_array());
        assert!(value["sections"].get("sql").is_none());

        let notations = value["notations"].as_array().unwrap();
        assert!(!notations.is_empty());
        assert!(notations.iter().all(|n| n["section"] == "sorting-algorithms"));
        let quick_worst = notations
            .iter()
            .find(|n| n["record"] == "Quicksort" && n["field"] == "time.worst")
            .unwrap();
        assert_eq!(quick_worst["quality"], "bad");
        assert_eq!(quick_worst["style"]["label"], "Bad");
    }

    #[test]
    fn test_python_modules_keep_group_keys() {
        let json = JsonReporter::new().report_sections(&[Section::PythonModules]);
        let value: Value = serde_json::from_str(&json).unwrap();
        let modules = value["sections"]["python-modules"].as_object().unwrap();
        assert!(modules.contains_key("itertools"));
        assert_eq!(modules["functools"][0]["group"], "functools");
    }

    #[test]
    fn test_audit_json() {
        let report = audit(&catalog::notations());
        let json = JsonReporter::new().report_audit(&report);
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["default"], 0);
        assert!(value["mismatches"].as_array().unwrap().is_empty());
    }
}
