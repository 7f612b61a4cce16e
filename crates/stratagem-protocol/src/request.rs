use serde::{Deserialize, Serialize};

/// Request bodies for the simulation service, one per endpoint family.
/// Field names and nesting match the service's schemas exactly; the
/// structs exist so the transformer output serializes to the precise
/// JSON the service validates against.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortRequest {
    pub array: Vec<f64>,
    pub ascending: bool,
}

/// Sequential search accepts arbitrary element types; the service compares
/// them as-is, so both array and target travel as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub array: Vec<String>,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinarySearchRequest {
    pub array: Vec<f64>,
    pub target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TspRequest {
    pub distance_matrix: Vec<Vec<f64>>,
    pub start_city: i64,
}

/// Items travel as `[name, weight, value]` triples.
pub type KnapsackItem = (String, f64, f64);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnapsackRequest {
    pub items: Vec<KnapsackItem>,
    pub capacity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JosephusRequest {
    pub length: i64,
    pub interval: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RussianMultiplyRequest {
    pub multiplier: i64,
    pub multiplicand: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixMultiplyRequest {
    pub matrix_a: Vec<Vec<f64>>,
    pub matrix_b: Vec<Vec<f64>>,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub vertices: Vec<String>,
    pub edges: Vec<(String, String, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DijkstraRequest {
    pub graph_data: GraphData,
    pub start_vertex: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HuffmanRequest {
    pub message: String,
}

/// The transformer's output: exactly one of the bespoke bodies above.
/// Untagged so serialization yields the bare object the service expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequestPayload {
    Sort(SortRequest),
    Search(SearchRequest),
    BinarySearch(BinarySearchRequest),
    Tsp(TspRequest),
    Knapsack(KnapsackRequest),
    Josephus(JosephusRequest),
    RussianMultiply(RussianMultiplyRequest),
    MatrixMultiply(MatrixMultiplyRequest),
    Dijkstra(DijkstraRequest),
    Huffman(HuffmanRequest),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn knapsack_items_serialize_as_triples() {
        let req = KnapsackRequest {
            items: vec![("Gold".to_string(), 10.0, 60.0)],
            capacity: 50,
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v, json!({"items": [["Gold", 10.0, 60.0]], "capacity": 50}));
    }

    #[test]
    fn payload_serializes_bare() {
        let payload = RequestPayload::Josephus(JosephusRequest {
            length: 7,
            interval: 3,
        });
        let v = serde_json::to_value(&payload).unwrap();
        assert_eq!(v, json!({"length": 7, "interval": 3}));
    }

    #[test]
    fn graph_data_edges_are_triples() {
        let req = DijkstraRequest {
            graph_data: GraphData {
                vertices: vec!["A".into(), "B".into()],
                edges: vec![("A".into(), "B".into(), 4.0)],
            },
            start_vertex: "A".into(),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(
            v,
            json!({
                "graph_data": {"vertices": ["A", "B"], "edges": [["A", "B", 4.0]]},
                "start_vertex": "A"
            })
        );
    }
}
