use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde_json::Value;

use super::{grid, playback};

fn arr<'a>(data: &'a Value, key: &str) -> &'a [Value] {
    data.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn header(name: &str, data: &Value) {
    println!("\n=== {} :: Results ===", name);
    if let Some(ms) = data.get("execution_time").and_then(Value::as_f64) {
        println!("Execution time: {:.2} ms", ms);
    }
}

pub fn sort(name: &str, data: &Value, play: bool, step_ms: u64) {
    header(name, data);

    let result = arr(data, "result");
    println!("\nSorted array:");
    grid::print_cells(result);

    let steps = arr(data, "steps");
    if steps.is_empty() {
        return;
    }
    if play {
        println!("\nPlayback, {} steps:", steps.len());
        playback::play(steps, step_ms, |i, step| {
            println!("Step {}/{}:", i + 1, steps.len());
            if let Some(frame) = step.as_array() {
                grid::print_cells(frame);
            }
        });
    } else {
        println!("\n{} steps recorded (pass --play to animate).", steps.len());
    }
}

pub fn search(name: &str, data: &Value) {
    header(name, data);

    let found = data.get("found").and_then(Value::as_bool).unwrap_or(false);
    if found {
        let index = data.get("index").and_then(Value::as_i64).unwrap_or(-1);
        println!("\n✅ Found at index {}", index);
    } else {
        println!("\n❌ Not found");
    }
    if let Some(comparisons) = data.get("comparisons").and_then(Value::as_i64) {
        println!("Comparisons: {}", comparisons);
    }
}

pub fn tsp(name: &str, data: &Value) {
    header(name, data);

    if let Some(distance) = data.get("min_distance") {
        println!("\nOptimal tour distance: {}", grid::display(distance));
    }
    let path = arr(data, "optimal_path");
    if !path.is_empty() {
        println!("Tour: {}", grid::join(path, " -> "));
    }
    if let Some(n) = data.get("total_permutations").and_then(Value::as_i64) {
        let cities = data.get("cities_count").and_then(Value::as_i64).unwrap_or(0);
        println!("Evaluated {} permutations over {} cities", n, cities);
    }
}

pub fn knapsack(name: &str, data: &Value) {
    header(name, data);

    let value = data.get("best_value").map(grid::display).unwrap_or_default();
    let weight = data.get("total_weight").map(grid::display).unwrap_or_default();
    println!("\nBest value: {} (total weight {})", value, weight);

    let items = arr(data, "best_items");
    if !items.is_empty() {
        let mut table = new_table();
        table.add_row(vec![Cell::new("Selected Items").add_attribute(Attribute::Bold)]);
        for item in items {
            table.add_row(vec![Cell::new(grid::display(item)).fg(Color::Green)]);
        }
        println!("{}", table);
    }
    if let Some(count) = data.get("items_count").and_then(Value::as_i64) {
        println!("{} items considered", count);
    }
}

pub fn josephus(name: &str, data: &Value) {
    header(name, data);

    if let Some(survivor) = data.get("survivor").and_then(Value::as_i64) {
        println!("\n🏆 Survivor: person #{}", survivor);
    }
    let order = arr(data, "elimination_order");
    if !order.is_empty() {
        println!("Elimination order: {}", grid::join(order, " -> "));
    }
    if let Some(count) = data.get("people_count").and_then(Value::as_i64) {
        println!("{} people in the circle", count);
    }
}

pub fn russian(name: &str, data: &Value) {
    header(name, data);

    if let Some(product) = data.get("product") {
        println!("\nProduct: {}", grid::display(product));
    }

    let halving = arr(data, "halving_sequence");
    let doubling = arr(data, "doubling_sequence");
    if !halving.is_empty() || !doubling.is_empty() {
        let mut table = new_table();
        table.add_row(vec![
            Cell::new("Halving").add_attribute(Attribute::Bold),
            Cell::new("Doubling").add_attribute(Attribute::Bold),
        ]);
        for i in 0..halving.len().max(doubling.len()) {
            let h = halving.get(i).map(grid::display).unwrap_or_default();
            let d = doubling.get(i).map(grid::display).unwrap_or_default();
            table.add_row(vec![
                Cell::new(h).set_alignment(CellAlignment::Right),
                Cell::new(d).set_alignment(CellAlignment::Right),
            ]);
        }
        println!("{}", table);
    }
}

pub fn strassen(name: &str, data: &Value) {
    header(name, data);

    let matrix = arr(data, "result_matrix");
    if !matrix.is_empty() {
        println!("\nResult matrix:");
        grid::print_matrix(matrix);
    }
    if let Some(size) = data.get("matrix_size").and_then(Value::as_i64) {
        println!("{0}x{0} matrices", size);
    }
    if let Some(ops) = data.get("operations_count").and_then(Value::as_i64) {
        println!("{} recorded operations", ops);
    }
}

pub fn dijkstra(name: &str, data: &Value) {
    header(name, data);

    if let Some(start) = data.get("start_vertex").and_then(Value::as_str) {
        println!("\nShortest paths from '{}':", start);
    }

    let distances = data.get("distances").and_then(Value::as_object);
    let paths = data.get("paths").and_then(Value::as_object);
    if let Some(distances) = distances {
        let mut table = new_table();
        table.add_row(vec![
            Cell::new("Vertex").add_attribute(Attribute::Bold),
            Cell::new("Distance"),
            Cell::new("Path"),
        ]);
        for (vertex, distance) in distances {
            let path = paths
                .and_then(|p| p.get(vertex))
                .and_then(Value::as_array)
                .map(|p| grid::join(p, " -> "))
                .unwrap_or_default();
            table.add_row(vec![
                Cell::new(vertex).fg(Color::Cyan),
                Cell::new(grid::display(distance)).set_alignment(CellAlignment::Right),
                Cell::new(path),
            ]);
        }
        println!("{}", table);
    }
}

pub fn huffman(name: &str, data: &Value) {
    header(name, data);

    if let Some(codes) = data.get("codes").and_then(Value::as_object) {
        let mut table = new_table();
        table.add_row(vec![
            Cell::new("Symbol").add_attribute(Attribute::Bold),
            Cell::new("Code"),
        ]);
        for (symbol, code) in codes {
            table.add_row(vec![
                Cell::new(symbol).set_alignment(CellAlignment::Center),
                Cell::new(grid::display(code)),
            ]);
        }
        println!("{}", table);
    }

    if let Some(encoded) = data.get("encoded_message").and_then(Value::as_str) {
        let shown: String = encoded.chars().take(120).collect();
        let suffix = if encoded.len() > 120 { "…" } else { "" };
        println!("Encoded: {}{}", shown, suffix);
    }
    if let (Some(original), Some(compressed)) = (
        data.get("original_length").and_then(Value::as_i64),
        data.get("encoded_length").and_then(Value::as_i64),
    ) {
        println!("{} bits -> {} bits", original, compressed);
    }
    if let Some(ratio) = data.get("compression_ratio").and_then(Value::as_f64) {
        println!("Compression ratio: {:.1}%", ratio);
    }
}

/// Fallback for payloads no bespoke renderer claims.
pub fn raw(name: &str, data: &Value) {
    header(name, data);
    println!(
        "{}",
        serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string())
    );
}

/// Trailing free-form metadata block, shared by every renderer.
pub fn metadata(data: &Value) {
    if let Some(meta) = data.get("metadata").and_then(Value::as_object) {
        println!("\nAdditional info:");
        for (key, value) in meta {
            println!("  {}: {}", key.replace('_', " "), grid::display(value));
        }
    }
}
