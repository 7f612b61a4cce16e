use stratagem_protocol::algo::Strategy;

/// The menu offered to the user, keyed by strategy. Leaf data: the one
/// place the strategy -> algorithm grouping lives.
///
/// "Merge Sort" is offered but has no remote endpoint yet; selecting it
/// exercises the generic fallback schema and the unimplemented-algorithm
/// error path.
pub fn algorithms_for(strategy: Strategy) -> &'static [&'static str] {
    match strategy {
        Strategy::BruteForce => &[
            "Selection Sort",
            "Bubble Sort",
            "Sequential Search",
            "Travelling Salesman Problem",
            "Knapsack Problem",
        ],
        Strategy::DecreaseConquer => &[
            "Insertion Sort",
            "Binary Search",
            "Russian Multiplication Method",
            "Josephus Problem",
        ],
        Strategy::DivideConquer => &[
            "Quick Sort",
            "Strassen's Matrix Multiplication",
            "Merge Sort",
        ],
        Strategy::Greedy => &["Dijkstra's Algorithm", "Huffman Coding"],
    }
}

pub fn contains(name: &str) -> bool {
    use strum::IntoEnumIterator;
    Strategy::iter().any(|s| algorithms_for(s).contains(&name))
}

/// Strategy a catalog entry is listed under, if any.
pub fn strategy_of(name: &str) -> Option<Strategy> {
    use strum::IntoEnumIterator;
    Strategy::iter().find(|s| algorithms_for(*s).contains(&name))
}
