use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use stratagem_core::catalog;
use stratagem_protocol::algo::{Algorithm, Strategy};
use strum::IntoEnumIterator;

pub fn run() {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Strategy").add_attribute(Attribute::Bold),
        Cell::new("Algorithm").add_attribute(Attribute::Bold),
        Cell::new("Endpoint"),
    ]);

    for strategy in Strategy::iter() {
        for name in catalog::algorithms_for(strategy) {
            let endpoint = match Algorithm::parse(name) {
                Some(algo) => Cell::new(algo.endpoint()),
                None => Cell::new("(not implemented)").fg(Color::DarkGrey),
            };
            table.add_row(vec![
                Cell::new(strategy.title()),
                Cell::new(*name).fg(Color::Cyan),
                endpoint,
            ]);
        }
    }

    println!("{}", table);
    println!("\nUse `stratagem describe <algorithm>` to see its input fields.");
}
