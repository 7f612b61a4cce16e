use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Top-level grouping of algorithms. The wire form (kebab-case) doubles as
/// the first path segment of every simulation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum Strategy {
    #[strum(serialize = "brute-force")]
    #[serde(rename = "brute-force")]
    BruteForce,
    #[strum(serialize = "decrease-conquer")]
    #[serde(rename = "decrease-conquer")]
    DecreaseConquer,
    #[strum(serialize = "divide-conquer")]
    #[serde(rename = "divide-conquer")]
    DivideConquer,
    #[strum(serialize = "greedy")]
    #[serde(rename = "greedy")]
    Greedy,
}

impl Strategy {
    pub fn title(&self) -> &'static str {
        match self {
            Strategy::BruteForce => "Brute Force",
            Strategy::DecreaseConquer => "Decrease and Conquer",
            Strategy::DivideConquer => "Divide and Conquer",
            Strategy::Greedy => "Greedy",
        }
    }
}

/// The closed set of algorithms the simulation service implements.
/// The strum string form is the user-facing name used throughout the
/// catalog, CLI and schema lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum Algorithm {
    #[strum(serialize = "Bubble Sort")]
    BubbleSort,
    #[strum(serialize = "Selection Sort")]
    SelectionSort,
    #[strum(serialize = "Sequential Search")]
    SequentialSearch,
    #[strum(serialize = "Travelling Salesman Problem")]
    TravellingSalesman,
    #[strum(serialize = "Knapsack Problem")]
    Knapsack,
    #[strum(serialize = "Insertion Sort")]
    InsertionSort,
    #[strum(serialize = "Binary Search")]
    BinarySearch,
    #[strum(serialize = "Russian Multiplication Method")]
    RussianMultiplication,
    #[strum(serialize = "Josephus Problem")]
    Josephus,
    #[strum(serialize = "Quick Sort")]
    QuickSort,
    #[strum(serialize = "Strassen's Matrix Multiplication")]
    StrassenMultiplication,
    #[strum(serialize = "Dijkstra's Algorithm")]
    Dijkstra,
    #[strum(serialize = "Huffman Coding")]
    HuffmanCoding,
}

impl Algorithm {
    pub fn strategy(&self) -> Strategy {
        match self {
            Algorithm::BubbleSort
            | Algorithm::SelectionSort
            | Algorithm::SequentialSearch
            | Algorithm::TravellingSalesman
            | Algorithm::Knapsack => Strategy::BruteForce,
            Algorithm::InsertionSort
            | Algorithm::BinarySearch
            | Algorithm::RussianMultiplication
            | Algorithm::Josephus => Strategy::DecreaseConquer,
            Algorithm::QuickSort | Algorithm::StrassenMultiplication => Strategy::DivideConquer,
            Algorithm::Dijkstra | Algorithm::HuffmanCoding => Strategy::Greedy,
        }
    }

    /// Path of the POST endpoint, relative to the API base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "/brute-force/bubble-sort",
            Algorithm::SelectionSort => "/brute-force/selection-sort",
            Algorithm::SequentialSearch => "/brute-force/linear-search",
            Algorithm::TravellingSalesman => "/brute-force/tsp",
            Algorithm::Knapsack => "/brute-force/knapsack",
            Algorithm::InsertionSort => "/decrease-conquer/insertion-sort",
            Algorithm::BinarySearch => "/decrease-conquer/binary-search",
            Algorithm::RussianMultiplication => "/decrease-conquer/russian-multiply",
            Algorithm::Josephus => "/decrease-conquer/josephus",
            Algorithm::QuickSort => "/divide-conquer/quick-sort",
            Algorithm::StrassenMultiplication => "/divide-conquer/strassen-multiplication",
            Algorithm::Dijkstra => "/greedy/dijkstra",
            Algorithm::HuffmanCoding => "/greedy/huffman-coding",
        }
    }

    /// Short identifier used by the service's metadata endpoints
    /// (`/algorithms/{slug}/info`): the last segment of the endpoint path.
    pub fn slug(&self) -> &'static str {
        self.endpoint()
            .rsplit('/')
            .next()
            .expect("endpoint paths always have segments")
    }

    /// Lookup by user-facing name. Names outside the closed set (e.g. the
    /// catalog's "Merge Sort" placeholder) return None and take the
    /// fallback paths downstream.
    pub fn parse(name: &str) -> Option<Algorithm> {
        name.parse().ok()
    }
}
