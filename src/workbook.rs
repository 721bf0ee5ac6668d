//! In-memory workbook read once at startup.
//!
//! Sheets are kept in workbook order and never change after load, so every
//! query can walk them through shared references.

use crate::model::Cell;

/// A named grid of cells. Row `n` of the grid is row `n` of the worksheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sheet {
    name: String,
    rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw, headerless view of the grid.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Index of the header row: the first row holding any value.
    pub fn header_index(&self) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.iter().any(|cell| !cell.is_empty()))
    }

    /// Header row as text, or an empty list for a blank sheet.
    pub fn header_row(&self) -> Vec<String> {
        self.header_index()
            .map(|idx| self.rows[idx].iter().map(Cell::to_text).collect())
            .unwrap_or_default()
    }

    /// Rows following the header row.
    pub fn data_rows(&self) -> &[Vec<Cell>] {
        match self.header_index() {
            Some(idx) => &self.rows[idx + 1..],
            None => &[],
        }
    }

    /// Position of the column whose header equals `header` exactly.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.header_row().iter().position(|text| text == header)
    }
}

/// Ordered collection of sheets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn from_sheets(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(Sheet::name)
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }
}
