use std::sync::OnceLock;

use colored::Colorize;
use eol_data::{CycleStatus, DateOrBool};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::OutputFormat;

/// Global output format setting
static FORMAT: OnceLock<OutputFormat> = OnceLock::new();

pub fn set_format(format: OutputFormat) {
    let _ = FORMAT.set(format);
}

pub fn format() -> OutputFormat {
    FORMAT.get().copied().unwrap_or_default()
}

/// Print rows as a table, JSON, or tab-separated lines depending on output mode
pub fn print_table<T, R, F>(items: &[T], to_row: F)
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    match format() {
        OutputFormat::Json => print_json(&items),
        OutputFormat::Compact => {
            for item in items {
                println!("{}", compact_line(&to_row(item)));
            }
        }
        OutputFormat::Table => {
            let rows: Vec<R> = items.iter().map(to_row).collect();
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{table}");
        }
    }
}

/// Print plain names, one per line, or a JSON array
pub fn print_names(names: &[String]) {
    match format() {
        OutputFormat::Json => print_json(&names),
        OutputFormat::Table | OutputFormat::Compact => {
            for name in names {
                println!("{name}");
            }
        }
    }
}

/// Print a single item or JSON depending on output mode
pub fn print_item<T: Serialize>(item: &T, display: impl FnOnce(&T)) {
    match format() {
        OutputFormat::Json => print_json(item),
        OutputFormat::Table | OutputFormat::Compact => display(item),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn compact_line<R: Tabled>(row: &R) -> String {
    row.fields()
        .iter()
        .map(|field| field.as_ref())
        .collect::<Vec<_>>()
        .join("\t")
}

/// Format a cycle status with color
pub fn status_colored(status: CycleStatus) -> String {
    let label = status.label();
    match status {
        CycleStatus::Supported => label.green().to_string(),
        CycleStatus::SecurityOnly => label.yellow().to_string(),
        CycleStatus::EndOfLife => label.red().to_string(),
    }
}

/// Format a date-or-flag milestone, or "-" when it is simply not set
pub fn milestone(value: &DateOrBool) -> String {
    match value {
        DateOrBool::Bool(false) => "-".to_string(),
        other => other.to_string(),
    }
}
