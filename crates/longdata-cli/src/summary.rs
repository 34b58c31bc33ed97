//! Terminal tables for the listing commands.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use longdata_core::{Destination, ToolRegistry};
use longdata_map::FieldCandidate;
use longdata_model::Vocabulary;

/// One row per tool, grouped by destination.
pub fn tools_table(registry: &ToolRegistry) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Destination"),
        header_cell("Tool"),
        header_cell("Routing"),
    ]);
    apply_table_style(&mut table);
    for destination in Destination::ALL {
        for tool in registry.for_destination(destination) {
            table.add_row(vec![
                Cell::new(destination.name()).fg(Color::Blue),
                Cell::new(tool.name()).add_attribute(Attribute::Bold),
                Cell::new(destination.description()),
            ]);
        }
    }
    table
}

pub fn fields_table(vocabulary: &Vocabulary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Field")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, field) in vocabulary.iter().enumerate() {
        table.add_row(vec![Cell::new(index + 1), Cell::new(field)]);
    }
    table
}

/// Candidates in the given order; the first row is marked as the resolution.
pub fn candidates_table(candidates: &[FieldCandidate]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Score"),
        header_cell("Chosen"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for (index, candidate) in candidates.iter().enumerate() {
        let chosen = if index == 0 {
            Cell::new("*").fg(Color::Green)
        } else {
            Cell::new("")
        };
        table.add_row(vec![
            Cell::new(&candidate.field),
            score_cell(candidate.score),
            chosen,
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn score_cell(score: u8) -> Cell {
    let cell = Cell::new(score);
    match score {
        100 => cell.fg(Color::Green),
        60..=99 => cell.fg(Color::Yellow),
        _ => cell.fg(Color::DarkGrey),
    }
}
