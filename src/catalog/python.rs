//! Python notes: the Zen of Python, magic methods and handy standard-library calls

use super::types::{PythonDunder, PythonMethod};

const fn method(
    method: &'static str,
    group: &'static str,
    description: &'static str,
) -> PythonMethod {
    PythonMethod {
        method,
        group,
        description,
    }
}

const fn dunder(name: &'static str, description: &'static str) -> PythonDunder {
    PythonDunder { name, description }
}

static ZEN: &[&str] = &[
    "Beautiful is better than ugly.",
    "Explicit is better than implicit.",
    "Simple is better than complex.",
    "Complex is better than complicated.",
    "Flat is better than nested.",
    "Sparse is better than dense.",
    "Readability counts.",
    "Special cases aren't special enough to break the rules.",
    "Although practicality beats purity.",
    "Errors should never pass silently.",
    "Unless explicitly silenced.",
    "In the face of ambiguity, refuse the temptation to guess.",
    "There should be one-- and preferably only one --obvious way to do it.",
    "Although that way may not be obvious at first unless you're Dutch.",
    "Now is better than never.",
    "Although never is often better than *right* now.",
    "If the implementation is hard to explain, it's a bad idea.",
    "If the implementation is easy to explain, it may be a good idea.",
    "Namespaces are one honking great idea -- let's do more of those!",
];

static MAGIC_METHODS: &[PythonDunder] = &[
    dunder("__init__", "Initializes a newly created instance."),
    dunder("__repr__", "Unambiguous string representation, ideally valid Python."),
    dunder("__str__", "Readable string representation used by str() and print()."),
    dunder("__len__", "Returns the length of the container for len()."),
    dunder("__getitem__", "Implements indexing and slicing with self[key]."),
    dunder("__setitem__", "Implements item assignment with self[key] = value."),
    dunder("__iter__", "Returns an iterator over the container."),
    dunder("__contains__", "Implements membership tests with the in operator."),
    dunder("__eq__", "Implements equality comparison with ==."),
    dunder("__lt__", "Implements ordering with <; enables sorting."),
    dunder("__hash__", "Returns the hash used by dict keys and set members."),
    dunder("__call__", "Makes instances callable like functions."),
    dunder("__enter__", "Enters the runtime context of a with statement."),
    dunder("__exit__", "Exits the runtime context of a with statement."),
];

static USEFUL_NOTES: &[&str] = &[
    "Use a list as a stack: append() and pop() are amortized O(1).",
    "Use collections.deque for queues: popleft() is O(1) while list.pop(0) is O(n).",
    "Membership tests are O(1) on average for set and dict, O(n) for list.",
    "heapq turns a list into a binary min-heap; push and pop are O(log n).",
    "bisect keeps a sorted list sorted; finding the position is O(log n), inserting is O(n).",
    "sorted() and list.sort() use Timsort and are stable.",
];

const FUNCTOOLS: &[PythonMethod] = &[
    method("functools.partial(function, *args, **keywords)", "functools", "Returns a new partial object which when called will behave like func called with the positional arguments args and keyword arguments keywords."),
    method("functools.wraps(function)", "functools", "Decorator used to update the metadata (such as __name__, __doc__) of the wrapper function to look more like the wrapped function."),
    method("functools.reduce(function, iterable)", "functools", "Applies function of two arguments cumulatively to the items of iterable, from left to right, so as to reduce the iterable to a single value."),
    method("functools.lru_cache(maxsize=None, typed=False)", "functools", "Decorator to wrap a function with a memoizing callable that saves up to the maxsize most recent calls. It can save time when an expensive or I/O bound function is periodically called with the same arguments."),
];

const ITERABLES: &[PythonMethod] = &[
    method("zip(*iterables, strict=False)", "iterables", "Returns an iterator that aggregates elements from each of the iterables. It continues until the shortest iterable is exhausted, and if strict is True, raises a ValueError if the iterables are of unequal length."),
    method("any(iterable)", "iterables", "Returns True if at least one element in the iterable is True. Otherwise, returns False."),
    method("all(iterable)", "iterables", "Returns True if all elements in the iterable are True, or if the iterable is empty. Otherwise, returns False."),
    method("enumerate(iterable, start=0)", "iterables", "Returns an iterator that yields tuples containing an index and the value of each item in the iterable. The index starts at the specified start value (default is 0)."),
    method("map(function, iterable, *iterables)", "iterables", "Returns an iterator that applies the specified function to each item in the iterable(s) and yields the result. If multiple iterables are passed, the function is called with corresponding items from each iterable."),
];

const ITERTOOLS: &[PythonMethod] = &[
    method("itertools.product(*iterables, repeat=1)", "itertools", "Returns the Cartesian product of the input iterables, yielding tuples containing elements from each iterable."),
    method("itertools.permutations(iterable, r=None)", "itertools", "Returns all possible r-length tuples of elements from the iterable."),
    method("itertools.combinations(iterable, r)", "itertools", "Returns all possible r-length combinations of elements from the iterable."),
    method("itertools.combinations_with_replacement(iterable, r)", "itertools", "Returns all possible r-length combinations of elements from the iterable, allowing individual elements to be repeated."),
    method("itertools.accumulate(iterable, func=operator.add)", "itertools", "Returns an iterator that produces accumulated sums (or other binary functions) of the elements."),
    method("itertools.groupby(iterable, key=None)", "itertools", "Returns an iterator that generates tuples of a key and an iterator of grouped items from the input iterable. The key function defaults to None for a simple grouping based on the identity of the items."),
];

const COLLECTIONS: &[PythonMethod] = &[
    method("collections.Counter", "collections", "A dict subclass for counting hashable objects. It is a collection where elements are stored as dictionary keys and their counts are stored as dictionary values."),
    method("collections.OrderedDict", "collections", "A dict subclass that maintains the order of insertion of its keys."),
    method("collections.ChainMap", "collections", "A class for quickly combining several mappings into one single mapping."),
    method("collections.defaultdict", "collections", "A subclass of the built-in dict class that returns a default value when a non-existent key is accessed."),
    method("collections.namedtuple", "collections", "A factory function for creating tuple subclasses with named fields, which increases code readability and maintainability."),
];

const RANDOM: &[PythonMethod] = &[
    method("random.random()", "random", "Returns a random floating point number in the range (0.0, 1.0)."),
    method("random.randint(a, b)", "random", "Returns a random integer between a and b (inclusive)."),
    method("random.choice(seq)", "random", "Returns a random element from the non-empty sequence."),
    method("random.shuffle(seq)", "random", "Randomly shuffles the elements of the sequence in place."),
    method("random.sample(seq, k)", "random", "Returns a list of k unique elements chosen randomly from the population sequence or set."),
    method("random.randrange(start, stop, step)", "random", "Returns a randomly selected element from the range(start, stop, step)."),
];

const NUMERIC: &[PythonMethod] = &[
    method("abs(x)", "numeric", "Returns the absolute value of x."),
    method("min(iterable)", "numeric", "Returns the smallest item in the iterable."),
    method("max(iterable)", "numeric", "Returns the largest item in the iterable."),
    method("pow(x, y)", "numeric", "Returns x raised to the power of y."),
    method("divmod(x, y)", "numeric", "Returns the quotient and remainder of the division of x by y."),
    method("math.ceil(x)", "numeric", "Returns the smallest integer greater than or equal to x."),
    method("math.floor(x)", "numeric", "Returns the largest integer less than or equal to x."),
    method("math.sqrt(x)", "numeric", "Returns the square root of x."),
    method("math.sin(x)", "numeric", "Returns the sine of x (in radians)."),
    method("math.cos(x)", "numeric", "Returns the cosine of x (in radians)."),
    method("math.tan(x)", "numeric", "Returns the tangent of x (in radians)."),
    method("statistics.mean(iterable)", "numeric", "Returns the arithmetic mean of the iterable."),
    method("statistics.median(iterable)", "numeric", "Returns the median (middle value) of the iterable."),
];
static PYTHON_MODULES: &[(&str, &[PythonMethod])] = &[
    ("functools", FUNCTOOLS),
    ("iterables", ITERABLES),
    ("itertools", ITERTOOLS),
    ("collections", COLLECTIONS),
    ("random", RANDOM),
    ("numeric", NUMERIC),
];

pub fn python_zen() -> &'static [&'static str] {
    ZEN
}

pub fn python_magic_methods() -> &'static [PythonDunder] {
    MAGIC_METHODS
}

pub fn python_useful_notes() -> &'static [&'static str] {
    USEFUL_NOTES
}

/// Methods grouped by module, in display order
pub fn python_modules() -> &'static [(&'static str, &'static [PythonMethod])] {
    PYTHON_MODULES
}

/// Every method across all modules, flattened in module order
pub fn all_python_methods() -> Vec<PythonMethod> {
    PYTHON_MODULES
        .iter()
        .flat_map(|(_, methods)| methods.iter().copied())
        .collect()
}

pub fn python_module_groups() -> Vec<&'static str> {
    PYTHON_MODULES.iter().map(|(group, _)| *group).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_preserves_order() {
        let all = all_python_methods();
        let total: usize = python_modules().iter().map(|(_, m)| m.len()).sum();
        assert_eq!(all.len(), total);
        assert_eq!(all[0].method, "functools.partial(function, *args, **keywords)");
        assert_eq!(all.last().map(|m| m.method), Some("statistics.median(iterable)"));
    }

    #[test]
    fn test_method_group_matches_module_key() {
        for (group, methods) in python_modules() {
            assert!(methods.iter().all(|m| m.group == *group), "{}", group);
        }
    }

    #[test]
    fn test_module_groups() {
        assert_eq!(
            python_module_groups(),
            vec!["functools", "iterables", "itertools", "collections", "random", "numeric"]
        );
    }

    #[test]
    fn test_zen_has_nineteen_aphorisms() {
        assert_eq!(python_zen().len(), 19);
    }
}
