use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook as open_xlsx};
use tracing::{debug, info, instrument};

use crate::error::{Result, StatsError};
use crate::model::Cell;
use crate::workbook::{Sheet, Workbook};

/// Reads every worksheet of an `.xlsx` file into memory, in workbook order.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn open_workbook(path: &Path) -> Result<Workbook> {
    if !path.exists() {
        return Err(StatsError::MissingInput(path.to_path_buf()));
    }

    let mut workbook: Xlsx<_> = open_xlsx(path)?;
    let sheet_names: Vec<String> = workbook.sheet_names().to_owned();

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for name in sheet_names {
        let rows = match workbook.worksheet_range(&name) {
            Some(range) => range_to_rows(&range?),
            None => Vec::new(),
        };
        debug!(sheet = %name, rows = rows.len(), "sheet loaded");
        sheets.push(Sheet::new(name, rows));
    }

    info!(sheet_count = sheets.len(), "workbook loaded");
    Ok(Workbook::from_sheets(sheets))
}

/// Converts a calamine range into an absolute grid. Calamine ranges start at
/// the first used cell, so leading rows and columns are padded back in.
fn range_to_rows(range: &calamine::Range<DataType>) -> Vec<Vec<Cell>> {
    let (row_offset, col_offset) = match range.start() {
        Some((row, col)) => (row as usize, col as usize),
        None => return Vec::new(),
    };

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); row_offset];
    for row in range.rows() {
        let mut cells = vec![Cell::Empty; col_offset];
        cells.extend(row.iter().map(convert_cell));
        rows.push(cells);
    }
    rows
}

/// Date cells keep their serial number as text; no sheet we read is keyed on dates.
fn convert_cell(cell: &DataType) -> Cell {
    match cell {
        DataType::String(value) => Cell::Text(value.clone()),
        DataType::Float(value) => Cell::Number(*value),
        DataType::Int(value) => Cell::Number(*value as f64),
        DataType::Bool(value) => Cell::Bool(*value),
        DataType::Empty => Cell::Empty,
        other => Cell::Text(other.to_string()),
    }
}
