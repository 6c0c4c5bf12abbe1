//! Catalog record types

use crate::ComplexityQuality;
use serde::Serialize;

/// Per-operation complexities of a data structure
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ComplexityOperations {
    pub access: &'static str,
    pub search: &'static str,
    pub insertion: &'static str,
    pub deletion: &'static str,
}

impl ComplexityOperations {
    /// (operation name, notation) pairs in display order
    pub fn entries(&self) -> [(&'static str, &'static str); 4] {
        [
            ("access", self.access),
            ("search", self.search),
            ("insertion", self.insertion),
            ("deletion", self.deletion),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataStructureGroup {
    List,
    Tree,
    Other,
}

impl DataStructureGroup {
    pub const ALL: [DataStructureGroup; 3] = [
        DataStructureGroup::List,
        DataStructureGroup::Tree,
        DataStructureGroup::Other,
    ];
}

impl std::fmt::Display for DataStructureGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataStructureGroup::List => write!(f, "List"),
            DataStructureGroup::Tree => write!(f, "Tree"),
            DataStructureGroup::Other => write!(f, "Other"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DataStructureTime {
    pub average: ComplexityOperations,
    pub worst: ComplexityOperations,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpaceComplexity {
    pub worst: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DataStructure {
    pub name: &'static str,
    /// Short visual hint of the layout, e.g. "[ ]"
    pub shape: &'static str,
    pub group: DataStructureGroup,
    pub description: &'static str,
    pub time: DataStructureTime,
    pub space: SpaceComplexity,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SortingTime {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SortingAlgorithm {
    pub name: &'static str,
    pub description: &'static str,
    pub time: SortingTime,
    pub space: SpaceComplexity,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SearchAlgorithm {
    pub name: &'static str,
    pub description: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SearchAlgorithms {
    pub array: &'static [SearchAlgorithm],
    pub graph: &'static [SearchAlgorithm],
}

/// Symbol used in graph complexities (V, E, b, d)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LegendEntry {
    pub symbol: &'static str,
    pub meaning: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AsymptoticNotation {
    pub name: &'static str,
    pub notation: &'static str,
    pub description: &'static str,
    pub note: &'static str,
    pub simplified: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimeComplexity {
    pub name: &'static str,
    pub notation: &'static str,
    pub description: &'static str,
    pub level: ComplexityQuality,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Concept {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConceptGroups {
    pub oop: &'static [Concept],
    pub solid: &'static [Concept],
    pub design: &'static [Concept],
    pub paradigms: &'static [Concept],
    pub principles: &'static [Concept],
}

impl ConceptGroups {
    /// (group title, concepts) pairs in display order
    pub fn groups(&self) -> [(&'static str, &'static [Concept]); 5] {
        [
            ("Object-Oriented Programming", self.oop),
            ("SOLID", self.solid),
            ("Design Patterns", self.design),
            ("Paradigms", self.paradigms),
            ("Principles", self.principles),
        ]
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PythonMethod {
    pub method: &'static str,
    pub group: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PythonDunder {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SqlStatement {
    pub statement: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RestConstraint {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RestMethod {
    pub method: &'static str,
    pub crud: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GraphQlOperation {
    pub operation: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Resource {
    pub name: &'static str,
    pub url: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}
