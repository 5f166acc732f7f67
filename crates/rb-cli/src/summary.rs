//! Human-readable and JSON rendering of a replayed snapshot.

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rb_core::{Snapshot, view};
use rb_model::{DisplayField, Filter};

/// Render the selected report and its entity tables.
pub fn render_summary(state: &Snapshot) -> String {
    let mut out = String::new();
    match view::edited_report(state) {
        Some(report) => {
            out.push_str(&format!("Report: {} ({})\n", report.name, report.id));
            if !report.root_model_name.is_empty() {
                out.push_str(&format!("Root model: {}\n", report.root_model_name));
            }
            if !report.description.is_empty() {
                out.push_str(&format!("Description: {}\n", report.description));
            }
            out.push_str(&format!("Distinct: {}\n", if report.distinct { "yes" } else { "no" }));
            if let Some(last) = view::last_generated_report(state)
                && let Some(file) = last.report_file
            {
                let created = last.report_file_creation.unwrap_or_default();
                out.push_str(&format!("Last export: {file} at {created}\n"));
            }
        }
        None => out.push_str("Report: none selected\n"),
    }
    if let Some(saved) = state.last_saved() {
        out.push_str(&format!("Saved: {}\n", saved.to_rfc3339()));
    }
    out.push_str(&format!(
        "Display fields: {}  Filters: {}  Reports listed: {}\n",
        view::display_fields_count(state),
        view::filters_count(state),
        state.reports().len()
    ));

    let display_fields = view::display_fields(state);
    if !display_fields.is_empty() {
        out.push_str(&display_field_table(&display_fields).to_string());
        out.push('\n');
    }
    let filters = view::filters(state);
    if !filters.is_empty() {
        out.push_str(&filter_table(&filters).to_string());
        out.push('\n');
    }
    out
}

pub fn print_summary(state: &Snapshot) {
    print!("{}", render_summary(state));
}

/// The edited report as pretty JSON, or `null` when nothing is selected.
pub fn render_json(state: &Snapshot) -> Result<String> {
    serde_json::to_string_pretty(&view::edited_report(state)).context("encode edited report")
}

fn display_field_table(fields: &[DisplayField]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Name"),
        header_cell("Path"),
        header_cell("Type"),
        header_cell("Width"),
        header_cell("Sort"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for field in fields {
        let sort = match field.sort {
            Some(order) if field.sort_reverse => Cell::new(format!("{order} desc")),
            Some(order) => Cell::new(order),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(field.position),
            Cell::new(&field.name),
            path_cell(&field.path, &field.field),
            dim_cell(&field.field_type),
            Cell::new(field.width),
            sort,
        ]);
    }
    table
}

fn filter_table(filters: &[Filter]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Field"),
        header_cell("Type"),
        header_cell("Value"),
        header_cell("Exclude"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for filter in filters {
        let value = if filter.filter_type.uses_second_value() {
            format!("{} .. {}", filter.filter_value, filter.filter_value2)
        } else {
            filter.filter_value.clone()
        };
        table.add_row(vec![
            Cell::new(filter.position),
            path_cell(&filter.path, &filter.field),
            Cell::new(filter.filter_type),
            Cell::new(value),
            if filter.exclude {
                Cell::new("yes").fg(Color::Yellow)
            } else {
                dim_cell("no")
            },
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
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

fn path_cell(path: &str, field: &str) -> Cell {
    Cell::new(format!("{path}{field}"))
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
