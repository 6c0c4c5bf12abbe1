//! Catalog module - static reference tables
//!
//! Every record is `'static` data compiled into the binary; nothing here is
//! mutated after start.

pub mod algorithms;
pub mod api_notes;
pub mod audit;
pub mod big_o;
pub mod concepts;
pub mod data_structures;
pub mod python;
pub mod resources;
pub mod sql_notes;
pub mod types;

pub use algorithms::{search_algorithm_legend, search_algorithms, sorting_algorithms};
pub use api_notes::{graphql_concepts, rest_constraints, rest_methods};
pub use audit::{audit, AuditEntry, AuditReport, LevelMismatch};
pub use big_o::{asymptotic_notations, time_complexities};
pub use concepts::concepts;
pub use data_structures::{data_structure_groups, data_structures};
pub use python::{
    all_python_methods, python_magic_methods, python_module_groups, python_modules,
    python_useful_notes, python_zen,
};
pub use resources::resources;
pub use sql_notes::sql_statements;
pub use types::*;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A catalog table that can be rendered on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    AsymptoticNotations,
    TimeComplexities,
    DataStructures,
    SortingAlgorithms,
    SearchAlgorithms,
    Concepts,
    RestApi,
    Graphql,
    Sql,
    PythonZen,
    PythonMagicMethods,
    PythonNotes,
    PythonModules,
    Resources,
}

impl Section {
    pub const ALL: [Section; 14] = [
        Section::AsymptoticNotations,
        Section::TimeComplexities,
        Section::DataStructures,
        Section::SortingAlgorithms,
        Section::SearchAlgorithms,
        Section::Concepts,
        Section::RestApi,
        Section::Graphql,
        Section::Sql,
        Section::PythonZen,
        Section::PythonMagicMethods,
        Section::PythonNotes,
        Section::PythonModules,
        Section::Resources,
    ];

    /// Kebab-case identifier used on the command line and in config
    pub fn id(self) -> &'static str {
        match self {
            Section::AsymptoticNotations => "asymptotic-notations",
            Section::TimeComplexities => "time-complexities",
            Section::DataStructures => "data-structures",
            Section::SortingAlgorithms => "sorting-algorithms",
            Section::SearchAlgorithms => "search-algorithms",
            Section::Concepts => "concepts",
            Section::RestApi => "rest-api",
            Section::Graphql => "graphql",
            Section::Sql => "sql",
            Section::PythonZen => "python-zen",
            Section::PythonMagicMethods => "python-magic-methods",
            Section::PythonNotes => "python-notes",
            Section::PythonModules => "python-modules",
            Section::Resources => "resources",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::AsymptoticNotations => "Asymptotic Notations",
            Section::TimeComplexities => "Time Complexities",
            Section::DataStructures => "Data Structures",
            Section::SortingAlgorithms => "Sorting Algorithms",
            Section::SearchAlgorithms => "Search Algorithms",
            Section::Concepts => "Concepts",
            Section::RestApi => "REST API",
            Section::Graphql => "GraphQL",
            Section::Sql => "SQL",
            Section::PythonZen => "The Zen of Python",
            Section::PythonMagicMethods => "Python Magic Methods",
            Section::PythonNotes => "Python Notes",
            Section::PythonModules => "Python Modules",
            Section::Resources => "Resources",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section '{0}' (try one of: {list})", list = section_list())]
pub struct ParseSectionError(pub String);

fn section_list() -> String {
    Section::ALL
        .iter()
        .map(|s| s.id())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Section::ALL
            .into_iter()
            .find(|section| section.id() == wanted)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

/// A complexity notation as it appears in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotationRef {
    pub section: Section,
    /// Name of the record holding the notation
    pub record: &'static str,
    /// Field within the record, e.g. "time.average.search"
    pub field: &'static str,
    pub notation: &'static str,
}

/// Every complexity notation in the catalog, in section order
pub fn notations() -> Vec<NotationRef> {
    let mut out = Vec::new();

    for tc in time_complexities() {
        out.push(NotationRef {
            section: Section::TimeComplexities,
            record: tc.name,
            field: "notation",
            notation: tc.notation,
        });
    }

    for ds in data_structures() {
        let (avg, worst) = (ds.time.average, ds.time.worst);
        let fields = [
            ("time.average.access", avg.access),
            ("time.average.search", avg.search),
            ("time.average.insertion", avg.insertion),
            ("time.average.deletion", avg.deletion),
            ("time.worst.access", worst.access),
            ("time.worst.search", worst.search),
            ("time.worst.insertion", worst.insertion),
            ("time.worst.deletion", worst.deletion),
            ("space.worst", ds.space.worst),
        ];
        for (field, notation) in fields {
            out.push(NotationRef {
                section: Section::DataStructures,
                record: ds.name,
                field,
                notation,
            });
        }
    }

    for algo in sorting_algorithms() {
        let fields = [
            ("time.best", algo.time.best),
            ("time.average", algo.time.average),
            ("time.worst", algo.time.worst),
            ("space.worst", algo.space.worst),
        ];
        for (field, notation) in fields {
            out.push(NotationRef {
                section: Section::SortingAlgorithms,
                record: algo.name,
                field,
                notation,
            });
        }
    }

    let search = search_algorithms();
    for algo in search.array.iter().chain(search.graph) {
        for (field, notation) in [("average", algo.average), ("worst", algo.worst)] {
            out.push(NotationRef {
                section: Section::SearchAlgorithms,
                record: algo.name,
                field,
                notation,
            });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_round_trips_through_id() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn test_section_parse_is_lenient_on_case_and_underscores() {
        assert_eq!("Sorting_Algorithms".parse::<Section>(), Ok(Section::SortingAlgorithms));
        let err = "recipes".parse::<Section>().unwrap_err();
        assert!(err.to_string().contains("data-structures"));
    }

    #[test]
    fn test_notations_cover_every_data_structure_field() {
        let refs = notations();
        let per_structure = refs
            .iter()
            .filter(|r| r.section == Section::DataStructures && r.record == "Hash Table")
            .count();
        // 4 average + 4 worst + space
        assert_eq!(per_structure, 9);
        assert!(refs
            .iter()
            .any(|r| r.record == "Shell Sort" && r.notation == "Θ((n log(n))^2)"));
        assert!(refs.iter().any(|r| r.field == "time.worst.deletion"));
    }
}
