// Result table rendering and CSV export
use crate::model::{ExportError, ResultEntry};
use comfy_table::{ContentArrangement, Table};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column order of the result table; the export file honors this
/// byte-for-byte.
pub const RESULT_COLUMNS: [&str; 4] = ["Model", "MLP", "Description", "Status"];

fn result_record(entry: &ResultEntry) -> [&str; 4] {
    [
        entry.display_model.as_str(),
        entry.mlp.as_deref().unwrap_or(""),
        entry.description.as_deref().unwrap_or(""),
        entry.status.as_str(),
    ]
}

pub fn render_table(entries: &[ResultEntry]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(RESULT_COLUMNS);
    for entry in entries {
        table.add_row(result_record(entry));
    }
    table
}

pub fn write_csv<W: Write>(entries: &[ResultEntry], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(RESULT_COLUMNS)?;
    for entry in entries {
        csv_writer.write_record(result_record(entry))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn export_csv(entries: &[ResultEntry], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_csv(entries, file)
}
