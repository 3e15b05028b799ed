//! XLSX writer for entry tables.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::error::Result;
use crate::types::{Cell, Column, Table};

/// Worksheet name used when a table has no title.
pub const DEFAULT_SHEET_NAME: &str = "bookquest";

/// Approximate column widths, in characters.
fn column_width(column: Column) -> f64 {
    match column {
        Column::AppId | Column::Kamikaze | Column::Link => 12.0,
        Column::Player | Column::Curator => 18.0,
        Column::Sweater => 24.0,
        Column::Comment => 60.0,
    }
}

fn column_index(index: usize) -> std::result::Result<u16, XlsxError> {
    u16::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}

fn row_index(index: usize) -> std::result::Result<u32, XlsxError> {
    u32::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}

fn write_table(worksheet: &mut Worksheet, table: &Table) -> std::result::Result<(), XlsxError> {
    let header = Format::new().set_bold();
    let wrapped = Format::new().set_text_wrap();

    for (i, column) in table.columns().iter().enumerate() {
        let col = column_index(i)?;
        worksheet.write_string_with_format(0, col, column.label(), &header)?;
        worksheet.set_column_width(col, column_width(*column))?;
    }

    for (r, record) in table.rows().iter().enumerate() {
        let row = row_index(r + 1)?;
        for (i, column) in table.columns().iter().enumerate() {
            let col = column_index(i)?;
            match column.cell(record) {
                Cell::Formula(formula) => {
                    worksheet.write_formula(row, col, formula)?;
                }
                Cell::Text(text) if *column == Column::Comment => {
                    worksheet.write_string_with_format(row, col, text, &wrapped)?;
                }
                Cell::Text(text) => {
                    worksheet.write_string(row, col, text)?;
                }
            }
        }
    }

    Ok(())
}

/// Generate an XLSX workbook from a table.
///
/// The workbook has a single worksheet named after the table title, a bold
/// header row with the column labels and one row per record.
///
/// # Returns
/// The workbook file contents
pub fn generate_xlsx(table: &Table) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let name = if table.title().is_empty() {
        DEFAULT_SHEET_NAME
    } else {
        table.title()
    };
    worksheet.set_name(name)?;
    write_table(worksheet, table)?;

    Ok(workbook.save_to_buffer()?)
}

/// Write content to a temp file, sync it and rename it over the target.
fn write_and_replace(temp_file: &Path, path: &Path, content: &[u8]) -> io::Result<()> {
    {
        let mut file = File::create(temp_file)?;
        file.write_all(content)?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(temp_file, path)
}

/// Save a table as an XLSX file.
///
/// Uses atomic write pattern: writes to a hidden temp file next to the
/// target, syncs to disk, then renames. Missing parent directories are
/// created. The temp file is removed when any step fails.
///
/// # Returns
/// Path to the saved file
pub fn save_xlsx(table: &Table, path: &Path) -> Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("output path has no file name: {}", path.display()),
        )
    })?;

    let output_dir = path.parent().unwrap_or(Path::new(""));
    if !output_dir.as_os_str().is_empty() {
        fs::create_dir_all(output_dir)?;
    }

    let temp_file = output_dir.join(format!(".{}.tmp", file_name.to_string_lossy()));
    let content = generate_xlsx(table)?;

    if let Err(e) = write_and_replace(&temp_file, path, &content) {
        if let Err(cleanup) = fs::remove_file(&temp_file) {
            tracing::debug!(path = %temp_file.display(), error = %cleanup, "Temp file not removed");
        }
        return Err(e.into());
    }

    tracing::debug!(path = %path.display(), rows = table.len(), "Saved spreadsheet");
    Ok(path.to_path_buf())
}
