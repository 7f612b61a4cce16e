use stratagem_core::algo::Algorithm;
use stratagem_core::schema::{resolve, FieldKind, FieldValues};
use strum::IntoEnumIterator;

#[test]
fn resolve_is_idempotent() {
    for algo in Algorithm::iter() {
        let name = algo.to_string();
        assert_eq!(resolve(&name), resolve(&name), "schema drift for {}", name);
    }
}

#[test]
fn every_algorithm_has_a_bespoke_schema() {
    for algo in Algorithm::iter() {
        let fields = resolve(&algo.to_string());
        assert!(!fields.is_empty());
        // The generic fallback is a single free-text "input" field; no
        // implemented algorithm should land on it.
        assert!(
            fields.len() > 1 || fields[0].name != "input",
            "{} resolved to the fallback schema",
            algo
        );
    }
}

#[test]
fn field_names_are_unique_within_a_schema() {
    for algo in Algorithm::iter() {
        let fields = resolve(&algo.to_string());
        let mut names: Vec<&str> = fields.iter().map(|f| f.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), fields.len(), "duplicate field in {}", algo);
    }
}

#[test]
fn catalog_placeholder_gets_fallback() {
    let fields = resolve("Merge Sort");
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name, "input");
    assert_eq!(fields[0].kind, FieldKind::Text);
    assert_eq!(fields[0].placeholder, Some("Enter your input data"));
}

#[test]
fn values_reset_completely_on_algorithm_change() {
    let mut values = FieldValues::for_algorithm("Binary Search");
    values.set("array", "1,2,3");
    values.set("target", "2");

    // Selecting a different algorithm means a fresh store: no stale keys,
    // no carried-over values.
    let values = FieldValues::for_algorithm("Josephus Problem");
    let names: Vec<&str> = values.names().collect();
    assert_eq!(names, vec!["interval", "length"]);
    assert_eq!(values.get("array"), None);
}

#[test]
fn toggle_fields_initialize_true_everywhere() {
    for algo in Algorithm::iter() {
        let name = algo.to_string();
        let values = FieldValues::for_algorithm(&name);
        for spec in resolve(&name) {
            if spec.kind == FieldKind::Toggle {
                assert_eq!(
                    values.get(spec.name),
                    Some(&stratagem_core::schema::FieldValue::Toggle(true)),
                    "{}.{} should default true",
                    name,
                    spec.name
                );
            }
        }
    }
}
