// Static metadata for every registered algorithm

use super::{Complexity, Descriptor};

/// Language tag handed to the code pane with each algorithm's source
const SOURCE_LANGUAGE: &str = "rust";

pub const BUBBLE_SORT: Descriptor = Descriptor {
    id: "bubble-sort",
    title: "Bubble Sort",
    description: "A simple sorting algorithm that repeatedly steps through the list, \
        compares adjacent elements, and swaps them if they are in the wrong order.",
    complexity: Complexity {
        time: "O(n^2)",
        space: "O(1)",
    },
    source: include_str!("../sorts/bubble.rs"),
    language: SOURCE_LANGUAGE,
};

pub const INSERTION_SORT: Descriptor = Descriptor {
    id: "insertion-sort",
    title: "Insertion Sort",
    description: "Builds the final sorted array one item at a time. It iterates through \
        the input array and removes one element per iteration, finds the location it \
        belongs within the sorted list, and inserts it there. It repeats until no input \
        elements remain.",
    complexity: Complexity {
        time: "O(n^2)",
        space: "O(1)",
    },
    source: include_str!("../sorts/insertion.rs"),
    language: SOURCE_LANGUAGE,
};

pub const SELECTION_SORT: Descriptor = Descriptor {
    id: "selection-sort",
    title: "Selection Sort",
    description: "Divides the list into a sorted prefix and an unsorted suffix. Each pass \
        selects the smallest element of the unsorted suffix and swaps it to the end of \
        the sorted prefix.",
    complexity: Complexity {
        time: "O(n^2)",
        space: "O(1)",
    },
    source: include_str!("../sorts/selection.rs"),
    language: SOURCE_LANGUAGE,
};

pub const MERGE_SORT: Descriptor = Descriptor {
    id: "merge-sort",
    title: "Merge Sort",
    description: "A divide-and-conquer algorithm that recursively divides the list into \
        smaller sublists until each sublist has one element, then merges the sublists in \
        a manner that results in a sorted list.",
    complexity: Complexity {
        time: "O(n log n)",
        space: "O(n)",
    },
    source: include_str!("../sorts/merge.rs"),
    language: SOURCE_LANGUAGE,
};

pub const QUICK_SORT: Descriptor = Descriptor {
    id: "quick-sort",
    title: "Quick Sort",
    description: "A divide-and-conquer algorithm that picks an element as a pivot and \
        partitions the given array around the picked pivot.",
    // Average case; the worst case is O(n^2) time and O(n) space
    complexity: Complexity {
        time: "O(n log n)",
        space: "O(log n)",
    },
    source: include_str!("../sorts/quick.rs"),
    language: SOURCE_LANGUAGE,
};

pub const HEAP_SORT: Descriptor = Descriptor {
    id: "heap-sort",
    title: "Heap Sort",
    description: "Arranges the list into a max-heap, then repeatedly swaps the largest \
        element at the root to the end of the list and restores the heap on the \
        remaining elements.",
    complexity: Complexity {
        time: "O(n log n)",
        space: "O(1)",
    },
    source: include_str!("../sorts/heap.rs"),
    language: SOURCE_LANGUAGE,
};

pub const SHELL_SORT: Descriptor = Descriptor {
    id: "shell-sort",
    title: "Shell Sort",
    description: "A generalization of insertion sort that first sorts elements far apart \
        from each other, then progressively shrinks the gap between compared elements \
        until it performs a final plain insertion sort.",
    complexity: Complexity {
        time: "O(n^2)",
        space: "O(1)",
    },
    source: include_str!("../sorts/shell.rs"),
    language: SOURCE_LANGUAGE,
};

pub const COUNTING_SORT: Descriptor = Descriptor {
    id: "counting-sort",
    title: "Counting Sort",
    description: "A non-comparison sort that counts the occurrences of each distinct \
        value, then writes the values back in ascending order according to their counts.",
    complexity: Complexity {
        time: "O(n + k)",
        space: "O(k)",
    },
    source: include_str!("../sorts/counting.rs"),
    language: SOURCE_LANGUAGE,
};
