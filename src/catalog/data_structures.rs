//! Common data structures and their operation complexities

use super::types::{
    ComplexityOperations, DataStructure, DataStructureGroup, DataStructureTime, SpaceComplexity,
};

const fn ops(
    access: &'static str,
    search: &'static str,
    insertion: &'static str,
    deletion: &'static str,
) -> ComplexityOperations {
    ComplexityOperations {
        access,
        search,
        insertion,
        deletion,
    }
}

const fn space(worst: &'static str) -> SpaceComplexity {
    SpaceComplexity { worst }
}

static DATA_STRUCTURES: &[DataStructure] = &[
    DataStructure {
        name: "Array",
        shape: "[ ]",
        group: DataStructureGroup::List,
        description: "Contiguous block of elements addressed by index.",
        time: DataStructureTime {
            average: ops("Θ(1)", "Θ(n)", "Θ(n)", "Θ(n)"),
            worst: ops("O(1)", "O(n)", "O(n)", "O(n)"),
        },
        space: space("O(n)"),
    },
    DataStructure {
        name: "Stack",
        shape: "[ ]",
        group: DataStructureGroup::List,
        description: "Last-in, first-out collection; push and pop at the top.",
        time: DataStructureTime {
            average: ops("Θ(n)", "Θ(n)", "Θ(1)", "Θ(1)"),
            worst: ops("O(n)", "O(n)", "O(1)", "O(1)"),
        },
        space: space("O(n)"),
    },
    DataStructure {
        name: "Queue",
        shape: "[ ]",
        group: DataStructureGroup::List,
        description: "First-in, first-out collection; enqueue at the back, dequeue at the front.",
        time: DataStructureTime {
            average: ops("Θ(n)", "Θ(n)", "Θ(1)", "Θ(1)"),
            worst: ops("O(n)", "O(n)", "O(1)", "O(1)"),
        },
        space: space("O(n)"),
    },
    DataStructure {
        name: "Singly-Linked List",
        shape: "→",
        group: DataStructureGroup::List,
        description: "Nodes holding a value and a pointer to the next node.",
        time: DataStructureTime {
            average: ops("Θ(n)", "Θ(n)", "Θ(1)", "Θ(1)"),
            worst: ops("O(n)", "O(n)", "O(1)", "O(1)"),
        },
        space: space("O(n)"),
    },
    DataStructure {
        name: "Doubly-Linked List",
        shape: "⇄",
        group: DataStructureGroup::List,
        description: "Nodes linked to both their previous and next neighbours.",
        time: DataStructureTime {
            average: ops("Θ(n)", "Θ(n)", "Θ(1)", "Θ(1)"),
            worst: ops("O(n)", "O(n)", "O(1)", "O(1)"),
        },
        space: space("O(n)"),
    },
    DataStructure {
        name: "Skip List",
        shape: "≡",
        group: DataStructureGroup::List,
        description: "Layered linked lists that skip ahead for logarithmic expected search.",
        time: DataStructureTime {
            average: ops("Θ(log(n))", "Θ(log(n))", "Θ(log(n))", "Θ(log(n))"),
            worst: ops("O(n)", "O(n)", "O(n)", "O(n)"),
        },
        space: space("O(n log(n))"),
    },
    DataStructure {
        name: "Hash Table",
        shape: "{ }",
        group: DataStructureGroup::Other,
        description: "Key-value store indexed by the hash of the key.",
        time: DataStructureTime {
            average: ops("N/A", "Θ(1)", "Θ(1)", "Θ(1)"),
            worst: ops("N/A", "O(n)", "O(n)", "O(n)"),
        },
        space: space("O(n)"),
    },
    DataStructure {
        name: "Binary Search Tree",
        shape: "⋀",
        group: DataStructureGroup::Tree,
        description: "Binary tree where left descendants are smaller and right descendants larger.",
        time: DataStructureTime {
            average: ops("Θ(log(n))", "Θ(log(n))", "Θ(log(n))", "Θ(log(n))"),
            worst: ops("O(n)", "O(n)", "O(n)", "O(n)"),
        },
        space: space("O(n)"),
    },
    DataStructure {
        name: "Cartesian Tree",
        shape: "⋀",
        group: DataStructureGroup::Tree,
        description: "Heap-ordered binary tree whose in-order traversal yields the original sequence.",
        time: DataStructureTime {
            average: ops("N/A", "Θ(log(n))", "Θ(log(n))", "Θ(log(n))"),
            worst: ops("N/A", "O(n)", "O(n)", "O(n)"),
        },
        space: space("O(n)"),
    },
    DataStructure {
        name: "B-Tree",
        shape: "⋀",
        group: DataStructureGroup::Tree,
        description: "Self-balancing tree with many keys per node, suited to block storage.",
        time: DataStructureTime {
            average: ops("Θ(log(n))", "Θ(log(n))", "Θ(log(n))", "Θ(log(n))"),
            worst: ops("O(log(n))", "O(log(n))", "O(log(n))", "O(log(n))"),
        },
        space: space("O(n)"),
    },
    DataStructure {
        name: "Red-Black Tree",
        shape: "⋀",
        group: DataStructureGroup::Tree,
        description: "Self-balancing binary search tree using node colors to bound height.",
        time: DataStructureTime {
            average: ops("Θ(log(n))", "Θ(log(n))", "Θ(log(n))", "Θ(log(n))"),
            worst: ops("O(log(n))", "O(log(n))", "O(log(n))", "O(log(n))"),
        },
        space: space("O(n)"),
    },
    DataStructure {
        name: "Splay Tree",
        shape: "⋀",
        group: DataStructureGroup::Tree,
        description: "Binary search tree that moves recently accessed nodes to the root.",
        time: DataStructureTime {
            average: ops("N/A", "Θ(log(n))", "Θ(log(n))", "Θ(log(n))"),
            worst: ops("N/A", "O(log(n))", "O(log(n))", "O(log(n))"),
        },
        space: space("O(n)"),
    },
    DataStructure {
        name: "AVL Tree",
        shape: "⋀",
        group: DataStructureGroup::Tree,
        description: "Binary search tree keeping subtree heights within one of each other.",
        time: DataStructureTime {
            average: ops("Θ(log(n))", "Θ(log(n))", "Θ(log(n))", "Θ(log(n))"),
            worst: ops("O(log(n))", "O(log(n))", "O(log(n))", "O(log(n))"),
        },
        space: space("O(n)"),
    },
    DataStructure {
        name: "KD Tree",
        shape: "⋀",
        group: DataStructureGroup::Tree,
        description: "Space-partitioning tree for points in k-dimensional space.",
        time: DataStructureTime {
            average: ops("Θ(log(n))", "Θ(log(n))", "Θ(log(n))", "Θ(log(n))"),
            worst: ops("O(n)", "O(n)", "O(n)", "O(n)"),
        },
        space: space("O(n)"),
    },
];

pub fn data_structures() -> &'static [DataStructure] {
    DATA_STRUCTURES
}

/// Groups that have at least one data structure, in display order
pub fn data_structure_groups() -> Vec<DataStructureGroup> {
    DataStructureGroup::ALL
        .into_iter()
        .filter(|g| DATA_STRUCTURES.iter().any(|ds| ds.group == *g))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_in_display_order() {
        assert_eq!(
            data_structure_groups(),
            vec![
                DataStructureGroup::List,
                DataStructureGroup::Tree,
                DataStructureGroup::Other
            ]
        );
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = data_structures().iter().map(|d| d.name).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());
    }
}
