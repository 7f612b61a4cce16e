use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stratagem_protocol::algo::Algorithm;
use strum_macros::Display;

/// Parsing discipline applied to one input field. Matrix and composite
/// item syntax ride on `Array` fields; which rule applies is decided per
/// algorithm by the transformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum FieldKind {
    #[strum(serialize = "text")]
    Text,
    #[strum(serialize = "number")]
    Number,
    #[strum(serialize = "array")]
    Array,
    #[strum(serialize = "toggle")]
    Toggle,
}

/// One input field of an algorithm's configuration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: Option<&'static str>,
}

const fn field(
    name: &'static str,
    label: &'static str,
    kind: FieldKind,
    placeholder: Option<&'static str>,
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind,
        placeholder,
    }
}

/// Ordered input schema for an algorithm name. Pure static lookup, total:
/// names outside the closed set get the generic free-text field.
pub fn resolve(name: &str) -> Vec<FieldSpec> {
    use FieldKind::*;
    let Some(algo) = Algorithm::parse(name) else {
        return vec![field(
            "input",
            "Input Data",
            Text,
            Some("Enter your input data"),
        )];
    };

    match algo {
        Algorithm::BubbleSort
        | Algorithm::SelectionSort
        | Algorithm::InsertionSort
        | Algorithm::QuickSort => vec![
            field(
                "array",
                "Array to Sort",
                Array,
                Some("e.g., 64,34,25,12,22,11,90"),
            ),
            field("ascending", "Sort Order", Toggle, None),
        ],
        Algorithm::SequentialSearch => vec![
            field("array", "Array to Search", Array, Some("e.g., 1,3,5,7,9,11")),
            field("target", "Target Value", Text, Some("e.g., 7")),
        ],
        Algorithm::BinarySearch => vec![
            field("array", "Sorted Array", Array, Some("e.g., 1,3,5,7,9,11")),
            field("target", "Target Value", Number, Some("e.g., 7")),
        ],
        Algorithm::TravellingSalesman => vec![
            field(
                "distance_matrix",
                "Distance Matrix (semicolon separated rows)",
                Array,
                Some("e.g., 0,10,15,20;10,0,35,25;15,35,0,30;20,25,30,0"),
            ),
            field("start_city", "Starting City Index", Number, Some("e.g., 0")),
        ],
        Algorithm::Knapsack => vec![
            field(
                "items",
                "Items (name:weight:value)",
                Array,
                Some("e.g., Item1:10:60,Item2:20:100,Item3:30:120"),
            ),
            field("capacity", "Knapsack Capacity", Number, Some("e.g., 50")),
        ],
        Algorithm::Josephus => vec![
            field("length", "Number of People", Number, Some("e.g., 8")),
            field("interval", "Elimination Interval", Number, Some("e.g., 3")),
        ],
        Algorithm::RussianMultiplication => vec![
            field("multiplier", "First Number", Number, Some("e.g., 17")),
            field("multiplicand", "Second Number", Number, Some("e.g., 19")),
        ],
        Algorithm::StrassenMultiplication => vec![
            field(
                "matrix_a",
                "Matrix A (semicolon separated rows)",
                Array,
                Some("e.g., 1,2;3,4"),
            ),
            field(
                "matrix_b",
                "Matrix B (semicolon separated rows)",
                Array,
                Some("e.g., 5,6;7,8"),
            ),
        ],
        Algorithm::Dijkstra => vec![
            field("vertices", "Vertices", Array, Some("e.g., A,B,C,D")),
            field(
                "edges",
                "Edges (from,to,weight per entry)",
                Array,
                Some("e.g., A,B,4;A,C,1;B,D,5"),
            ),
            field("start_vertex", "Start Vertex", Text, Some("e.g., A")),
        ],
        Algorithm::HuffmanCoding => vec![field(
            "message",
            "Message to Encode",
            Text,
            Some("e.g., hello world"),
        )],
    }
}

/// A raw value as entered by the user: free text for text/number/array
/// fields, a boolean for toggles.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Toggle(bool),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Toggle(b)
    }
}

/// Field name -> raw value store for the currently selected algorithm.
/// Keys are fixed at construction to exactly the schema's field names;
/// a schema change means building a fresh store, never mutating keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValues {
    entries: BTreeMap<String, FieldValue>,
}

impl FieldValues {
    /// Empty store keyed by the given schema: text-like fields start
    /// blank, toggles start true (the service's documented default).
    pub fn for_schema(fields: &[FieldSpec]) -> Self {
        let entries = fields
            .iter()
            .map(|f| {
                let initial = match f.kind {
                    FieldKind::Toggle => FieldValue::Toggle(true),
                    _ => FieldValue::Text(String::new()),
                };
                (f.name.to_string(), initial)
            })
            .collect();
        Self { entries }
    }

    pub fn for_algorithm(name: &str) -> Self {
        Self::for_schema(&resolve(name))
    }

    /// Update one field. Returns false (and changes nothing) for a key
    /// the schema never declared.
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> bool {
        match self.entries.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
