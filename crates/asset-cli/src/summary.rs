use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use asset_cli::config::DisplaySettings;
use asset_cli::report::{AssetRow, SetRow, SetTotals, TagReport, completeness_label, format_cost};

pub fn print_sets(rows: &[SetRow], totals: &SetTotals, display: &DisplaySettings) {
    if rows.is_empty() {
        println!("No desktop sets found.");
        return;
    }
    let mut header = vec![
        header_cell("Set"),
        header_cell("FY"),
        header_cell("Monitor"),
        header_cell("Keyboard"),
        header_cell("Mouse"),
        header_cell("CPU"),
        header_cell("Complete"),
        header_cell("Location"),
    ];
    if display.show_costs {
        header.push(header_cell("Cost"));
    }
    let mut table = Table::new();
    table.set_header(header);
    apply_summary_table_style(&mut table, display.table_width);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 6, CellAlignment::Right);
    align_column(&mut table, 8, CellAlignment::Right);

    for row in rows {
        let mut cells = vec![
            set_name_cell(row),
            Cell::new(&row.financial_year),
        ];
        cells.extend(row.slot_tags.iter().map(|tag| optional_cell(tag.as_deref())));
        cells.push(completeness_cell(row.completeness));
        cells.push(location_cell(row.location.as_deref()));
        if display.show_costs {
            cells.push(Cell::new(format_cost(row.total_cost)));
        }
        table.add_row(cells);
    }

    let mut footer = vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(format!("{} sets", totals.sets)).add_attribute(Attribute::Bold),
        Cell::new(format!("{} complete", totals.complete)).fg(Color::Green),
        Cell::new(format!("{} incomplete", totals.incomplete())).fg(Color::Yellow),
        Cell::new(format!("{} assets", totals.grouped_assets)),
        dim_cell("-"),
        Cell::new(format!("{} ungrouped", totals.ungrouped_assets)).fg(Color::DarkGrey),
    ];
    if display.show_costs {
        footer.push(Cell::new(format_cost(totals.total_cost)).add_attribute(Attribute::Bold));
    }
    table.add_row(footer);
    println!("{table}");
}

pub fn print_assets(title: &str, rows: &[AssetRow], display: &DisplaySettings) {
    println!("{title}: {}", rows.len());
    if rows.is_empty() {
        return;
    }
    let mut header = vec![
        header_cell("Asset Tag"),
        header_cell("Class"),
        header_cell("Description"),
        header_cell("Location"),
    ];
    if display.show_costs {
        header.push(header_cell("Cost"));
    }
    let mut table = Table::new();
    table.set_header(header);
    apply_table_style(&mut table, display.table_width);
    align_column(&mut table, 4, CellAlignment::Right);
    for row in rows {
        let mut cells = vec![
            Cell::new(&row.tag).fg(Color::Blue),
            optional_cell(row.class.as_deref()),
            optional_cell(row.description.as_deref()),
            optional_cell(row.location.as_deref()),
        ];
        if display.show_costs {
            cells.push(optional_cell(row.original_cost.as_deref()));
        }
        table.add_row(cells);
    }
    println!("{table}");
}

pub fn print_tag_reports(reports: &[TagReport], display: &DisplaySettings) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tag"),
        header_cell("Peripheral"),
        header_cell("Type"),
        header_cell("FY"),
        header_cell("Set"),
        header_cell("Set Identifier"),
        header_cell("Desktop Set"),
    ]);
    apply_table_style(&mut table, display.table_width);
    align_column(&mut table, 1, CellAlignment::Center);
    for report in reports {
        let peripheral = if report.is_peripheral {
            Cell::new("✓").fg(Color::Green)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![
            Cell::new(&report.tag),
            peripheral,
            Cell::new(report.type_name),
            optional_cell(report.financial_year.as_deref()),
            optional_cell(report.set_id.as_deref()),
            optional_cell(report.set_identifier.as_deref()),
            optional_cell(report.display_name.as_deref()),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table, width: u16) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(width);
}

fn apply_summary_table_style(table: &mut Table, width: u16) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(width);
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

fn set_name_cell(row: &SetRow) -> Cell {
    let label = if row.duplicates > 0 {
        format!("{} (+{} dup)", row.display_name, row.duplicates)
    } else {
        row.display_name.clone()
    };
    Cell::new(label)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn completeness_cell(completeness: u8) -> Cell {
    let color = match completeness {
        100 => Color::Green,
        50..=99 => Color::Yellow,
        _ => Color::Red,
    };
    Cell::new(completeness_label(completeness)).fg(color)
}

fn location_cell(location: Option<&str>) -> Cell {
    match location {
        Some(value) if value == asset_model::MIXED_LOCATIONS => Cell::new(value).fg(Color::Yellow),
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
