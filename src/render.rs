//! Tabular text rendering of result rows.
//!
//! Reads are printed as plain-text tables: header row, dash separator,
//! columns padded to the widest cell. NULL cells render empty.

use crate::store::{Department, EmployeeListing, RoleListing};

/// Render a generic table with padded columns.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            if len > widths[i] {
                widths[i] = len;
            }
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(headers.iter().map(|h| (*h).to_string()), &widths));
    out.push('\n');
    out.push_str(&format_row(widths.iter().map(|w| "-".repeat(*w)), &widths));
    for row in rows {
        out.push('\n');
        out.push_str(&format_row(row.iter().cloned(), &widths));
    }
    out
}

fn format_row(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    padded.join("  ").trim_end().to_string()
}

pub fn departments_table(rows: &[Department]) -> String {
    let cells: Vec<Vec<String>> =
        rows.iter().map(|d| vec![d.id.to_string(), d.name.clone()]).collect();
    table(&["id", "name"], &cells)
}

pub fn roles_table(rows: &[RoleListing]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.title.clone(),
                opt_text(r.department.as_deref()),
                salary_text(Some(r.salary)),
            ]
        })
        .collect();
    table(&["id", "title", "department", "salary"], &cells)
}

pub fn employees_table(rows: &[EmployeeListing]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.first_name.clone(),
                e.last_name.clone(),
                opt_text(e.title.as_deref()),
                opt_text(e.department.as_deref()),
                salary_text(e.salary),
                opt_text(e.manager.as_deref()),
            ]
        })
        .collect();
    table(
        &["id", "first_name", "last_name", "title", "department", "salary", "manager"],
        &cells,
    )
}

fn opt_text(value: Option<&str>) -> String {
    value.unwrap_or("").to_string()
}

fn salary_text(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
