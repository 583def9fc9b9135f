//! Projection rendering
//!
//! Columns are generated from the projection's configured entity names:
//! `Year, Age, <name>..., <name> Income..., Net Worth, Passive Income,
//! Annual Spending`. The table format leads with the independence summary;
//! CSV and JSON emit data only, for piping into other tools.

use clap::ValueEnum;
use fipath_core::{PlanConfig, Projection, ProjectionRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Csv,
    Json,
}

/// Render the projection in the requested format.
///
/// `until_age` truncates the displayed rows only; the projection was already
/// simulated to the full horizon and the summary still reflects all of it.
pub fn render(
    plan: &PlanConfig,
    projection: &Projection,
    format: Format,
    until_age: Option<u8>,
) -> String {
    let rows: Vec<&ProjectionRow> = match until_age {
        Some(age) => projection.rows_through_age(age).collect(),
        None => projection.rows.iter().collect(),
    };

    match format {
        Format::Table => {
            let mut out = summary(plan, projection);
            out.push('\n');
            out.push_str(&render_table(&projection.columns, &rows));
            out
        }
        Format::Csv => render_csv(&projection.columns, &rows),
        Format::Json => render_json(&projection.columns, &rows),
    }
}

/// The independence dashboard: FI number, freedom date, current safe income
fn summary(plan: &PlanConfig, projection: &Projection) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Net FI number:       {}\n",
        money(plan.settings.fi_number())
    ));

    match (projection.fi_row(), projection.rows.first()) {
        (Some(fi), Some(first)) => {
            let years_left = fi.year - first.year;
            out.push_str(&format!(
                "Freedom date:        {} (age {}, in {} years)\n",
                fi.year, fi.age, years_left
            ));
        }
        _ => {
            out.push_str("Freedom date:        not reached by age 85\n");
        }
    }

    if let Some(first) = projection.rows.first() {
        out.push_str(&format!(
            "Safe monthly income: {}\n",
            money(first.passive_income / 12.0)
        ));
    }

    out
}

fn header(columns: &[String]) -> Vec<String> {
    let mut cells = vec!["Year".to_string(), "Age".to_string()];
    cells.extend(columns.iter().cloned());
    cells.extend(columns.iter().map(|name| format!("{name} Income")));
    cells.extend([
        "Net Worth".to_string(),
        "Passive Income".to_string(),
        "Annual Spending".to_string(),
    ]);
    cells
}

fn row_cells(row: &ProjectionRow, format_cell: impl Fn(f64) -> String) -> Vec<String> {
    let mut cells = vec![row.year.to_string(), row.age.to_string()];
    cells.extend(row.balances.iter().map(|v| format_cell(*v)));
    cells.extend(row.incomes.iter().map(|v| format_cell(*v)));
    cells.push(format_cell(row.net_worth));
    cells.push(format_cell(row.passive_income));
    cells.push(format_cell(row.annual_spending));
    cells
}

fn render_table(columns: &[String], rows: &[&ProjectionRow]) -> String {
    let header = header(columns);
    let body: Vec<Vec<String>> = rows.iter().map(|row| row_cells(row, money)).collect();

    // Column widths from the widest cell, header included
    let mut widths: Vec<usize> = header.iter().map(String::len).collect();
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    write_padded_row(&mut out, &header, &widths);
    for cells in &body {
        write_padded_row(&mut out, cells, &widths);
    }
    out
}

fn write_padded_row(out: &mut String, cells: &[String], widths: &[usize]) {
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&format!("{cell:>width$}"));
    }
    out.push('\n');
}

fn render_csv(columns: &[String], rows: &[&ProjectionRow]) -> String {
    let mut out = String::new();
    out.push_str(
        &header(columns)
            .iter()
            .map(|cell| csv_escape(cell))
            .collect::<Vec<_>>()
            .join(","),
    );
    out.push('\n');

    for row in rows {
        out.push_str(&row_cells(row, |v| format!("{v:.2}")).join(","));
        out.push('\n');
    }
    out
}

fn render_json(columns: &[String], rows: &[&ProjectionRow]) -> String {
    let truncated = Projection {
        columns: columns.to_vec(),
        rows: rows.iter().map(|row| (*row).clone()).collect(),
    };
    let mut out = serde_json::to_string_pretty(&truncated)
        .expect("projection serialization cannot fail");
    out.push('\n');
    out
}

/// Quote a CSV cell when it contains a delimiter, quote, or newline
fn csv_escape(cell: &str) -> String {
    if cell.contains([',', '"', '\n']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Whole-dollar formatting with thousands separators, sign leading
fn money(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = value.abs().round() as u64;
    let digits = rounded.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
