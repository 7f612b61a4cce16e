use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use serde_json::Value;

/// Compact display form for an untyped payload value: strings lose their
/// quotes, whole numbers drop the trailing ".0".
pub fn display(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 && f.abs() < 1e15 {
                    return format!("{}", f as i64);
                }
            }
            n.to_string()
        }
        other => other.to_string(),
    }
}

pub fn join(values: &[Value], sep: &str) -> String {
    values.iter().map(display).collect::<Vec<_>>().join(sep)
}

/// Array cells, wrapped at a fixed visual row width.
pub fn print_cells(values: &[Value]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let cols = 16;
    for chunk in values.chunks(cols) {
        let cells: Vec<Cell> = chunk
            .iter()
            .map(|v| Cell::new(display(v)).set_alignment(CellAlignment::Center))
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_matrix(rows: &[Value]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in rows {
        let cells: Vec<Cell> = row
            .as_array()
            .map(|r| {
                r.iter()
                    .map(|v| Cell::new(display(v)).set_alignment(CellAlignment::Right))
                    .collect()
            })
            .unwrap_or_default();
        table.add_row(cells);
    }
    println!("{}", table);
}
