//! Terminal rendering of load statistics and reports. The core produces the
//! structures; every formatting decision lives here.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use senti_model::{LabelVocabulary, LoadStatistics, Report};

pub fn print_load_summary(stats: &LoadStatistics, vocabulary: &LabelVocabulary) {
    println!(
        "Rows: {} read, {} accepted, {} dropped",
        stats.total_raw, stats.accepted, stats.dropped
    );
    if stats.class_distribution.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Label"),
        header_cell("Code"),
        header_cell("Accepted"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (code, count) in &stats.class_distribution {
        table.add_row(vec![
            label_cell(vocabulary.name_for(*code)),
            Cell::new(code),
            Cell::new(count),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(stats.accepted).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_report(report: &Report) {
    println!("Messages: {}", report.total_messages);
    if !report.distribution.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Label"), header_cell("Messages")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for (name, count) in &report.distribution {
            table.add_row(vec![Cell::new(name), Cell::new(count)]);
        }
        println!("{table}");
    }
    println!("Reputation index: {:.3}", report.reputation_index);
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(name: Option<&str>) -> Cell {
    match name {
        Some(name) => Cell::new(name),
        None => dim_cell("?"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
