use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cage_core::classify;
use cage_model::{PartitionSet, PartitionTable};

/// Grid of `repeat-free/total` partition counts, one row per sum.
pub fn build_summary_table(partitions: &PartitionTable) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Sum")];
    let counts: Vec<i32> = (0..partitions.columns())
        .map(|j| partitions.count_at(j))
        .collect();
    for count in &counts {
        header.push(header_cell(&format!("{count} parts")));
    }
    header.push(header_cell("Total"));
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..=counts.len() + 1 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    for row in partitions.iter_rows() {
        let mut cells = vec![
            Cell::new(row.sum)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
        ];
        let mut row_total = 0usize;
        for (_, cell) in row.iter() {
            row_total += cell.len();
            cells.push(count_cell(cell));
        }
        cells.push(total_cell(row_total));
        table.add_row(cells);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn count_cell(cell: &PartitionSet) -> Cell {
    if cell.is_empty() {
        return dim_cell("-");
    }
    let unique = classify(cell).unique.len();
    let text = format!("{unique}/{}", cell.len());
    if unique > 0 {
        Cell::new(text).fg(Color::Green)
    } else {
        Cell::new(text).fg(Color::Yellow)
    }
}

fn total_cell(total: usize) -> Cell {
    if total == 0 {
        dim_cell(total)
    } else {
        Cell::new(total).add_attribute(Attribute::Bold)
    }
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
