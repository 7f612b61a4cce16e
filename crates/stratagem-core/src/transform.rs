use crate::error::{CoreError, CoreResult};
use crate::schema::{FieldValue, FieldValues};
use stratagem_protocol::algo::Algorithm;
use stratagem_protocol::request::{
    BinarySearchRequest, DijkstraRequest, GraphData, HuffmanRequest, JosephusRequest,
    KnapsackItem, KnapsackRequest, MatrixMultiplyRequest, RequestPayload, RussianMultiplyRequest,
    SearchRequest, SortRequest, TspRequest,
};
use tracing::debug;

const INVALID_FORMAT: &str = "Invalid input format. Please check your data.";

/// Build the exact request body for `name` from raw field values.
///
/// Parsing is lossy, not strict: unparsable numeric tokens are dropped,
/// missing numbers become 0. The only structural failure is a value whose
/// shape contradicts its field (a boolean stored under a text-shaped
/// field), which a schema-built store can never produce.
pub fn transform(name: &str, values: &FieldValues) -> CoreResult<RequestPayload> {
    let Some(algo) = Algorithm::parse(name) else {
        return Err(CoreError::Validation(format!(
            "Algorithm '{name}' is not implemented"
        )));
    };

    let payload = match algo {
        Algorithm::BubbleSort
        | Algorithm::SelectionSort
        | Algorithm::InsertionSort
        | Algorithm::QuickSort => RequestPayload::Sort(SortRequest {
            array: number_list(text(values, "array")?),
            ascending: toggle(values, "ascending")?,
        }),
        Algorithm::SequentialSearch => RequestPayload::Search(SearchRequest {
            array: string_list(text(values, "array")?),
            target: text(values, "target")?.trim().to_string(),
        }),
        Algorithm::BinarySearch => RequestPayload::BinarySearch(BinarySearchRequest {
            array: number_list(text(values, "array")?),
            target: float_or_zero(text(values, "target")?),
        }),
        Algorithm::TravellingSalesman => RequestPayload::Tsp(TspRequest {
            distance_matrix: matrix(text(values, "distance_matrix")?),
            start_city: int_or_zero(text(values, "start_city")?),
        }),
        Algorithm::Knapsack => RequestPayload::Knapsack(KnapsackRequest {
            items: item_list(text(values, "items")?),
            capacity: int_or_zero(text(values, "capacity")?),
        }),
        Algorithm::Josephus => RequestPayload::Josephus(JosephusRequest {
            length: int_or_zero(text(values, "length")?),
            interval: int_or_zero(text(values, "interval")?),
        }),
        Algorithm::RussianMultiplication => {
            RequestPayload::RussianMultiply(RussianMultiplyRequest {
                multiplier: int_or_zero(text(values, "multiplier")?),
                multiplicand: int_or_zero(text(values, "multiplicand")?),
            })
        }
        Algorithm::StrassenMultiplication => RequestPayload::MatrixMultiply(MatrixMultiplyRequest {
            matrix_a: matrix(text(values, "matrix_a")?),
            matrix_b: matrix(text(values, "matrix_b")?),
            method: "strassen".to_string(),
        }),
        Algorithm::Dijkstra => RequestPayload::Dijkstra(DijkstraRequest {
            graph_data: GraphData {
                vertices: string_list(text(values, "vertices")?),
                edges: edge_list(text(values, "edges")?),
            },
            start_vertex: text(values, "start_vertex")?.trim().to_string(),
        }),
        Algorithm::HuffmanCoding => RequestPayload::Huffman(HuffmanRequest {
            message: text(values, "message")?.to_string(),
        }),
    };

    Ok(payload)
}

// --- Field access ---

fn text<'a>(values: &'a FieldValues, name: &str) -> CoreResult<&'a str> {
    match values.get(name) {
        None => Ok(""),
        Some(FieldValue::Text(s)) => Ok(s),
        Some(FieldValue::Toggle(_)) => Err(CoreError::Validation(INVALID_FORMAT.to_string())),
    }
}

/// Toggle rule: only the literal string "false" (any case) or a stored
/// false boolean yields false. Everything else, including a missing
/// field, is true.
fn toggle(values: &FieldValues, name: &str) -> CoreResult<bool> {
    match values.get(name) {
        None => Ok(true),
        Some(FieldValue::Toggle(b)) => Ok(*b),
        Some(FieldValue::Text(s)) => Ok(!s.trim().eq_ignore_ascii_case("false")),
    }
}

// --- Parsing rules ---

/// Comma-separated floats; unparsable tokens are dropped, not rejected.
/// Non-finite values count as unparsable: they have no JSON number form.
fn number_list(raw: &str) -> Vec<f64> {
    raw.split(',')
        .filter_map(|token| {
            let token = token.trim();
            match token.parse::<f64>() {
                Ok(n) if n.is_finite() => Some(n),
                _ => {
                    if !token.is_empty() {
                        debug!("dropping unparsable numeric token '{}'", token);
                    }
                    None
                }
            }
        })
        .collect()
}

/// Comma-separated strings, trimmed, no coercion.
fn string_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

/// Semicolon-separated rows, each parsed with the numeric array rule.
fn matrix(raw: &str) -> Vec<Vec<f64>> {
    raw.split(';').map(number_list).collect()
}

/// `name:weight:value` triples, comma-separated. Weight and value fall
/// back to 0 when unparsable.
fn item_list(raw: &str) -> Vec<KnapsackItem> {
    raw.split(',')
        .map(|item| {
            let mut parts = item.split(':');
            let name = parts.next().unwrap_or("").trim().to_string();
            let weight = float_or_zero(parts.next().unwrap_or("0"));
            let value = float_or_zero(parts.next().unwrap_or("0"));
            (name, weight, value)
        })
        .collect()
}

/// `from,to,weight` triples, semicolon-separated.
fn edge_list(raw: &str) -> Vec<(String, String, f64)> {
    raw.split(';')
        .map(|edge| {
            let mut parts = edge.split(',');
            let from = parts.next().unwrap_or("").trim().to_string();
            let to = parts.next().unwrap_or("").trim().to_string();
            let weight = float_or_zero(parts.next().unwrap_or("0"));
            (from, to, weight)
        })
        .collect()
}

fn float_or_zero(raw: &str) -> f64 {
    raw.trim()
        .parse()
        .ok()
        .filter(|f: &f64| f.is_finite())
        .unwrap_or(0.0)
}

/// Integer fields accept fractional text and truncate, like the form
/// layer always has; anything unparsable becomes 0.
fn int_or_zero(raw: &str) -> i64 {
    float_or_zero(raw) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_list_drops_bad_tokens() {
        assert_eq!(number_list("1,x,3"), vec![1.0, 3.0]);
        assert_eq!(number_list(""), Vec::<f64>::new());
        assert_eq!(number_list("a,b,c"), Vec::<f64>::new());
    }

    #[test]
    fn matrix_applies_row_rule() {
        assert_eq!(matrix("0,10;10,0"), vec![vec![0.0, 10.0], vec![10.0, 0.0]]);
    }

    #[test]
    fn int_truncates_fractional_text() {
        assert_eq!(int_or_zero("3.7"), 3);
        assert_eq!(int_or_zero("oops"), 0);
        assert_eq!(int_or_zero(" 42 "), 42);
    }

    #[test]
    fn item_list_defaults_missing_parts() {
        assert_eq!(
            item_list("Gold:10:60,Broken"),
            vec![
                ("Gold".to_string(), 10.0, 60.0),
                ("Broken".to_string(), 0.0, 0.0)
            ]
        );
    }
}
