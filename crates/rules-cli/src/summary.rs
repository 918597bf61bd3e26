use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rules_cli::pipeline::GenerateOutcome;

pub fn print_summary(outcome: &GenerateOutcome) {
    let document = &outcome.document;
    println!("Season: {}", document.season);
    println!("Snapshot: {}", document.source_snapshot);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Section"),
        header_cell("Title"),
        header_cell("Items"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total_items = 0usize;
    for section in &document.sections {
        total_items += section.items.len();
        table.add_row(vec![
            Cell::new(section.id.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&section.title),
            Cell::new(section.items.len()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new("All sections")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_items).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    if outcome.written {
        println!("Wrote {}", outcome.output.display());
    } else {
        println!("Dry run, nothing written");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
