use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet};
use tracing::info;

use crate::error::Result;
use crate::model::{StatRow, SubTable};

/// Excel caps sheet names at 31 characters.
const MAX_SHEET_NAME: usize = 31;

/// Writes a ranked list as a two column sheet: entity name and metric.
pub fn write_ranked_list(path: &Path, title: &str, rows: &[StatRow]) -> Result<()> {
    let mut workbook_writer = Workbook::new();
    let worksheet = workbook_writer.add_worksheet();
    worksheet.set_name(sheet_name(title))?;

    worksheet.write_string(0, 0, title)?;
    for (row_idx, row) in rows.iter().enumerate() {
        let excel_row = (row_idx + 1) as u32;
        worksheet.write_string(excel_row, 0, &row.name)?;
        worksheet.write_number(excel_row, 1, row.value)?;
    }

    workbook_writer.save(path)?;
    info!(path = %path.display(), rows = rows.len(), "ranked list exported");
    Ok(())
}

/// Writes a sub-table with its title on the first row and headers on the second.
pub fn write_sub_table(path: &Path, sheet: &str, table: &SubTable) -> Result<()> {
    let mut workbook_writer = Workbook::new();
    let worksheet = workbook_writer.add_worksheet();
    worksheet.set_name(sheet_name(sheet))?;

    worksheet.write_string(0, 0, &table.title)?;
    write_row(worksheet, 1, &table.headers)?;
    for (row_idx, row) in table.rows.iter().enumerate() {
        write_row(worksheet, (row_idx + 2) as u32, row)?;
    }

    workbook_writer.save(path)?;
    info!(path = %path.display(), rows = table.rows.len(), "sub-table exported");
    Ok(())
}

fn write_row(worksheet: &mut Worksheet, row: u32, cells: &[String]) -> Result<()> {
    for (col_idx, cell) in cells.iter().enumerate() {
        worksheet.write_string(row, col_idx as u16, cell)?;
    }
    Ok(())
}

/// Strips characters Excel rejects in sheet names and truncates.
fn sheet_name(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(MAX_SHEET_NAME)
        .collect();
    let cleaned = cleaned.trim_matches('\'').trim();
    if cleaned.is_empty() {
        "Sheet1".to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::sheet_name;

    #[test]
    fn sheet_names_are_sanitised() {
        assert_eq!(sheet_name("a/b:c"), "abc");
        assert_eq!(sheet_name("[]"), "Sheet1");
        assert_eq!(sheet_name(&"x".repeat(40)).len(), 31);
    }
}
