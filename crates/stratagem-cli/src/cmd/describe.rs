use clap::Args;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use stratagem_core::schema::resolve;
use stratagem_protocol::algo::Algorithm;
use tracing::warn;

use crate::presets;

#[derive(Args, Debug, Clone)]
pub struct DescribeArgs {
    /// Algorithm name as listed by `list`
    pub algorithm: String,
}

pub fn run(args: DescribeArgs) {
    let name = &args.algorithm;

    match Algorithm::parse(name) {
        Some(algo) => println!(
            "\n{} - {} (POST {})",
            name,
            algo.strategy().title(),
            algo.endpoint()
        ),
        None => {
            println!("\n{}", name);
            warn!("⚠️  '{}' has no remote endpoint; showing the generic fallback schema.", name);
        }
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec![
        Cell::new("Field").add_attribute(Attribute::Bold),
        Cell::new("Kind"),
        Cell::new("Label"),
        Cell::new("Example"),
    ]);
    for spec in resolve(name) {
        table.add_row(vec![
            Cell::new(spec.name).fg(Color::Cyan),
            Cell::new(spec.kind.to_string()),
            Cell::new(spec.label),
            Cell::new(spec.placeholder.unwrap_or("")),
        ]);
    }
    println!("{}", table);

    let examples = presets::for_algorithm(name);
    if !examples.is_empty() {
        let mut table = Table::new();
        table
            .load_preset(ASCII_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table.add_row(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Example"),
            Cell::new("Fields"),
        ]);
        for (i, p) in examples.iter().enumerate() {
            let fields = p
                .values
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join("  ");
            table.add_row(vec![
                Cell::new(i),
                Cell::new(p.label).fg(Color::Green),
                Cell::new(fields),
            ]);
        }
        println!("{}", table);
        println!("\nRun one with `stratagem run \"{}\" --example <#>`.", name);
    }
}
