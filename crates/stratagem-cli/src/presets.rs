/// Curated example inputs, shown by `describe` and applied by
/// `run --example`. Values are raw field text, exactly as a user would
/// type them.
pub struct Preset {
    pub label: &'static str,
    pub values: &'static [(&'static str, &'static str)],
}

const fn preset(
    label: &'static str,
    values: &'static [(&'static str, &'static str)],
) -> Preset {
    Preset { label, values }
}

pub fn for_algorithm(name: &str) -> &'static [Preset] {
    match name {
        "Bubble Sort" | "Selection Sort" | "Insertion Sort" | "Quick Sort" => &const { [
            preset(
                "Small Array",
                &[("array", "64,34,25,12,22,11,90"), ("ascending", "true")],
            ),
            preset(
                "Reverse Sorted",
                &[("array", "90,64,34,25,22,12,11"), ("ascending", "true")],
            ),
            preset(
                "Nearly Sorted",
                &[("array", "11,12,22,25,90,34,64"), ("ascending", "true")],
            ),
            preset(
                "Descending",
                &[("array", "64,34,25,12,22,11,90"), ("ascending", "false")],
            ),
        ] },
        "Sequential Search" => &const { [
            preset("Find 7", &[("array", "1,3,5,7,9,11,13"), ("target", "7")]),
            preset("Find Missing", &[("array", "2,4,6,8,10,12"), ("target", "5")]),
            preset(
                "Names Search",
                &[
                    ("array", "Apple,Banana,Cherry,Date,Elderberry"),
                    ("target", "Cherry"),
                ],
            ),
        ] },
        "Binary Search" => &const { [
            preset("Find 7", &[("array", "1,3,5,7,9,11,13"), ("target", "7")]),
            preset(
                "Find 50",
                &[("array", "10,20,30,40,50,60,70,80,90"), ("target", "50")],
            ),
            preset(
                "Not Found",
                &[("array", "2,4,6,8,10,12,14"), ("target", "5")],
            ),
        ] },
        "Josephus Problem" => &const { [
            preset("Classic (7,3)", &[("length", "7"), ("interval", "3")]),
            preset("Small Group", &[("length", "5"), ("interval", "2")]),
            preset("Large Group", &[("length", "15"), ("interval", "4")]),
        ] },
        "Russian Multiplication Method" => &const { [
            preset("Small Numbers", &[("multiplier", "17"), ("multiplicand", "19")]),
            preset("Large Numbers", &[("multiplier", "47"), ("multiplicand", "63")]),
            preset("Powers of 2", &[("multiplier", "32"), ("multiplicand", "16")]),
        ] },
        "Travelling Salesman Problem" => &const { [
            preset(
                "4 Cities",
                &[
                    ("distance_matrix", "0,10,15,20;10,0,35,25;15,35,0,30;20,25,30,0"),
                    ("start_city", "0"),
                ],
            ),
            preset(
                "Simple Triangle",
                &[("distance_matrix", "0,5,10;5,0,8;10,8,0"), ("start_city", "0")],
            ),
        ] },
        "Knapsack Problem" => &const { [
            preset(
                "Classic Items",
                &[
                    ("items", "Gold:10:60,Silver:20:100,Bronze:30:120"),
                    ("capacity", "50"),
                ],
            ),
            preset(
                "Electronics",
                &[
                    ("items", "Phone:5:300,Laptop:15:500,Tablet:8:400,Watch:2:200"),
                    ("capacity", "20"),
                ],
            ),
            preset(
                "Groceries",
                &[
                    ("items", "Bread:2:3,Milk:3:4,Cheese:1:5,Meat:4:8,Fish:2:6"),
                    ("capacity", "8"),
                ],
            ),
        ] },
        "Strassen's Matrix Multiplication" => &const { [
            preset("2x2 Pair", &[("matrix_a", "1,2;3,4"), ("matrix_b", "5,6;7,8")]),
            preset(
                "Identity x Counting",
                &[
                    ("matrix_a", "1,0,0,0;0,1,0,0;0,0,1,0;0,0,0,1"),
                    ("matrix_b", "1,2,3,4;5,6,7,8;9,10,11,12;13,14,15,16"),
                ],
            ),
        ] },
        "Dijkstra's Algorithm" => &const { [
            preset(
                "Classic Graph",
                &[
                    ("vertices", "A,B,C,D,E"),
                    ("edges", "A,B,4;A,C,1;C,B,2;B,D,5;C,D,8;D,E,3"),
                    ("start_vertex", "A"),
                ],
            ),
            preset(
                "Two Routes",
                &[
                    ("vertices", "A,B,C"),
                    ("edges", "A,B,10;A,C,3;C,B,4"),
                    ("start_vertex", "A"),
                ],
            ),
        ] },
        "Huffman Coding" => &const { [
            preset("Hello World", &[("message", "hello world")]),
            preset("Mississippi", &[("message", "mississippi")]),
            preset("Abracadabra", &[("message", "abracadabra")]),
        ] },
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratagem_core::schema::FieldValues;
    use stratagem_core::transform::transform;
    use stratagem_protocol::algo::Algorithm;
    use strum::IntoEnumIterator;

    #[test]
    fn every_implemented_algorithm_has_presets() {
        for algo in Algorithm::iter() {
            assert!(
                !for_algorithm(&algo.to_string()).is_empty(),
                "{} has no example inputs",
                algo
            );
        }
    }

    // Every preset's keys must belong to the schema and the filled form
    // must transform cleanly.
    #[test]
    fn presets_fit_their_schemas() {
        for algo in Algorithm::iter() {
            let name = algo.to_string();
            for p in for_algorithm(&name) {
                let mut values = FieldValues::for_algorithm(&name);
                for (k, v) in p.values {
                    assert!(
                        values.set(k, *v),
                        "preset '{}' of {} sets undeclared field '{}'",
                        p.label,
                        name,
                        k
                    );
                }
                transform(&name, &values).unwrap();
            }
        }
    }

    #[test]
    fn placeholder_entries_have_no_presets() {
        assert!(for_algorithm("Merge Sort").is_empty());
        assert!(for_algorithm("nonsense").is_empty());
    }
}
