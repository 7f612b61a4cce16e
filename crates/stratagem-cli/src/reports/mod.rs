mod grid;
mod playback;
mod tables;

use serde_json::Value;
use stratagem_protocol::algo::Algorithm;

/// Renderer selection, keyed once by algorithm name. Payload shapes are
/// owned by the service; each renderer picks the fields it knows and the
/// shared metadata block catches the rest.
pub fn render(name: &str, data: &Value, play: bool, step_ms: u64) {
    match Algorithm::parse(name) {
        Some(
            Algorithm::BubbleSort
            | Algorithm::SelectionSort
            | Algorithm::InsertionSort
            | Algorithm::QuickSort,
        ) => tables::sort(name, data, play, step_ms),
        Some(Algorithm::SequentialSearch | Algorithm::BinarySearch) => tables::search(name, data),
        Some(Algorithm::TravellingSalesman) => tables::tsp(name, data),
        Some(Algorithm::Knapsack) => tables::knapsack(name, data),
        Some(Algorithm::Josephus) => tables::josephus(name, data),
        Some(Algorithm::RussianMultiplication) => tables::russian(name, data),
        Some(Algorithm::StrassenMultiplication) => tables::strassen(name, data),
        Some(Algorithm::Dijkstra) => tables::dijkstra(name, data),
        Some(Algorithm::HuffmanCoding) => tables::huffman(name, data),
        None => tables::raw(name, data),
    }
    tables::metadata(data);
}
