//! Curated reference links

use super::types::Resource;

const fn link(name: &'static str, url: &'static str) -> Resource {
    Resource {
        name,
        url,
        description: None,
    }
}

static RESOURCES: &[Resource] = &[
    link("Cracking the Coding Interview", "https://www.crackingthecodinginterview.com/"),
    link("Big-O Cheat-Sheet", "https://www.bigocheatsheet.com/"),
    link("Python: PEP-8", "https://peps.python.org/pep-0008"),
    link("Python: PEP-20", "https://peps.python.org/pep-0020"),
    link("Python: PEP-484", "https://peps.python.org/pep-0484/"),
    link("Python: Heap", "https://docs.python.org/3/library/heapq.html#module-heapq"),
    link("Python: Binary Search & Insertion", "https://docs.python.org/3/library/bisect.html#module-bisect"),
    link("Python: Specialized Container Data-Types", "https://docs.python.org/3/library/collections.html#module-collections"),
    link("Python: Queue FIFO & Stack LIFO", "https://docs.python.org/3/library/queue.html#module-queue"),
    link("Python: Deque (Queue + Stack)", "https://docs.python.org/3/library/collections.html#collections.deque"),
    link("Python: Built-in", "https://docs.python.org/3/library/functions.html"),
    link("Python: Functools", "https://docs.python.org/3/library/functools.html"),
    link("Python: Collections", "https://docs.python.org/3/library/collections.html"),
    link("Python: Itertools", "https://docs.python.org/3/library/itertools.html"),
    link("Python: Random", "https://docs.python.org/3/library/random.html"),
    link("Python: Math", "https://docs.python.org/3/library/math.html"),
];

pub fn resources() -> &'static [Resource] {
    RESOURCES
}
