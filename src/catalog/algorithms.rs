//! Sorting and searching algorithms

use super::types::{
    LegendEntry, SearchAlgorithm, SearchAlgorithms, SortingAlgorithm, SortingTime,
    SpaceComplexity,
};

const fn sort(
    name: &'static str,
    description: &'static str,
    best: &'static str,
    average: &'static str,
    worst: &'static str,
    space_worst: &'static str,
) -> SortingAlgorithm {
    SortingAlgorithm {
        name,
        description,
        time: SortingTime {
            best,
            average,
            worst,
        },
        space: SpaceComplexity { worst: space_worst },
    }
}

static SORTING_ALGORITHMS: &[SortingAlgorithm] = &[
    sort(
        "Quicksort",
        "Partitions around a pivot and recursively sorts both halves.",
        "Ω(n log(n))",
        "Θ(n log(n))",
        "O(n^2)",
        "O(log(n))",
    ),
    sort(
        "Mergesort",
        "Splits the input in half, sorts each half and merges the results.",
        "Ω(n log(n))",
        "Θ(n log(n))",
        "O(n log(n))",
        "O(n)",
    ),
    sort(
        "Timsort",
        "Hybrid of merge and insertion sort that exploits existing runs.",
        "Ω(n)",
        "Θ(n log(n))",
        "O(n log(n))",
        "O(n)",
    ),
    sort(
        "Heapsort",
        "Builds a max-heap and repeatedly extracts the largest element.",
        "Ω(n log(n))",
        "Θ(n log(n))",
        "O(n log(n))",
        "O(1)",
    ),
    sort(
        "Bubble Sort",
        "Repeatedly swaps adjacent elements that are out of order.",
        "Ω(n)",
        "Θ(n^2)",
        "O(n^2)",
        "O(1)",
    ),
    sort(
        "Insertion Sort",
        "Inserts each element into its place within the sorted prefix.",
        "Ω(n)",
        "Θ(n^2)",
        "O(n^2)",
        "O(1)",
    ),
    sort(
        "Selection Sort",
        "Selects the minimum of the unsorted suffix and appends it to the prefix.",
        "Ω(n^2)",
        "Θ(n^2)",
        "O(n^2)",
        "O(1)",
    ),
    sort(
        "Tree Sort",
        "Inserts every element into a binary search tree and reads it in order.",
        "Ω(n log(n))",
        "Θ(n log(n))",
        "O(n^2)",
        "O(n)",
    ),
    sort(
        "Shell Sort",
        "Insertion sort over shrinking gaps so elements move long distances early.",
        "Ω(n log(n))",
        "Θ((n log(n))^2)",
        "O(n(log(n))^2)",
        "O(1)",
    ),
    sort(
        "Bucket Sort",
        "Scatters elements into buckets, sorts each bucket and concatenates them.",
        "Ω(n + k)",
        "Θ(n + k)",
        "O(n^2)",
        "O(n)",
    ),
    sort(
        "Radix Sort",
        "Sorts integers digit by digit using a stable inner sort.",
        "Ω(nk)",
        "Θ(nk)",
        "O(nk)",
        "O(n + k)",
    ),
    sort(
        "Counting Sort",
        "Counts occurrences of each key and computes output positions.",
        "Ω(n + k)",
        "Θ(n + k)",
        "O(n + k)",
        "O(k)",
    ),
    sort(
        "Cubesort",
        "Parallel sort built on a self-balancing multi-dimensional array.",
        "Ω(n)",
        "Θ(n log(n))",
        "O(n log(n))",
        "O(n)",
    ),
];

static ARRAY_SEARCH: &[SearchAlgorithm] = &[
    SearchAlgorithm {
        name: "Linear Search",
        description: "Checks each element in turn until the target is found.",
        average: "Θ(n)",
        worst: "O(n)",
    },
    SearchAlgorithm {
        name: "Binary Search",
        description: "Halves a sorted range on every comparison.",
        average: "Θ(log(n))",
        worst: "O(log(n))",
    },
];

static GRAPH_SEARCH: &[SearchAlgorithm] = &[
    SearchAlgorithm {
        name: "Breadth First Search (BFS)",
        description: "Visits vertices level by level from the source using a queue.",
        average: "Θ(V + E)",
        worst: "O(V + E)",
    },
    SearchAlgorithm {
        name: "Depth First Search (DFS)",
        description: "Follows each branch as deep as possible before backtracking.",
        average: "Θ(V + E)",
        worst: "O(V + E)",
    },
    SearchAlgorithm {
        name: "Dijkstra (binary heap)",
        description: "Shortest paths from one source with non-negative edge weights.",
        average: "Θ((v + e) log v)",
        worst: "O((v + e) log v)",
    },
    SearchAlgorithm {
        name: "Bellman-Ford",
        description: "Shortest paths from one source; tolerates negative edge weights.",
        average: "Θ(v * e)",
        worst: "O(v * e)",
    },
    SearchAlgorithm {
        name: "A*",
        description: "Best-first search guided by a heuristic estimate of remaining cost.",
        average: "Θ(b ^ d)",
        worst: "O(b ^ d)",
    },
    SearchAlgorithm {
        name: "Floyd-Warshall",
        description: "All-pairs shortest paths over n vertices by dynamic programming.",
        average: "Θ(n^3)",
        worst: "O(n^3)",
    },
];

static SEARCH_LEGEND: &[LegendEntry] = &[
    LegendEntry {
        symbol: "V",
        meaning: "number of vertices",
    },
    LegendEntry {
        symbol: "E",
        meaning: "number of edges",
    },
    LegendEntry {
        symbol: "b",
        meaning: "branching factor",
    },
    LegendEntry {
        symbol: "d",
        meaning: "depth of the shallowest solution",
    },
];

pub fn sorting_algorithms() -> &'static [SortingAlgorithm] {
    SORTING_ALGORITHMS
}

pub fn search_algorithms() -> SearchAlgorithms {
    SearchAlgorithms {
        array: ARRAY_SEARCH,
        graph: GRAPH_SEARCH,
    }
}

pub fn search_algorithm_legend() -> &'static [LegendEntry] {
    SEARCH_LEGEND
}
