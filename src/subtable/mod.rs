//! Per-entity tables embedded inside free-form worksheets.
//!
//! Entity sheets stack several blocks vertically. Each block starts with a
//! title row such as `S13 - 高茲 Outdoor HeavyArmor 大決戰`, followed by a header
//! row and data rows, and ends where the title of the next block begins.

pub mod scan;

use tracing::{debug, info};

use crate::config::Settings;
use crate::model::{CategoryMarker, Cell, SubTable};
use crate::workbook::{Sheet, Workbook};

use scan::{BlockBounds, BlockMarkers, locate_block};

/// Finds the block for `marker` in the first sheet whose name contains
/// `entity` and rebuilds it as a [`SubTable`].
///
/// Returns the sheet name alongside the table, or `None` when no sheet name
/// references the entity or no candidate sheet carries the block.
pub fn entity_table(
    workbook: &Workbook,
    settings: &Settings,
    entity: &str,
    marker: &CategoryMarker,
) -> Option<(String, SubTable)> {
    let candidates = candidate_sheets(workbook, entity);
    if candidates.is_empty() {
        info!(%entity, "no sheet references the entity");
        return None;
    }

    let start = marker.required_tokens(settings);
    let boundary = marker.boundary_tokens(settings);
    let markers = BlockMarkers {
        start: &start,
        boundary: &boundary,
    };

    for sheet in candidates {
        let Some(bounds) = locate_block(sheet.rows().iter().map(|row| row_text(row)), &markers)
        else {
            debug!(sheet = sheet.name(), %marker, "block not present");
            continue;
        };
        info!(
            sheet = sheet.name(),
            %marker,
            start_row = bounds.start + 1,
            end_row = bounds.end.map(|end| end + 1),
            "block located"
        );
        return Some((sheet.name().to_string(), build_table(sheet, bounds)));
    }

    info!(%entity, %marker, "no candidate sheet carries the block");
    None
}

fn candidate_sheets<'a>(workbook: &'a Workbook, entity: &str) -> Vec<&'a Sheet> {
    workbook
        .sheets()
        .iter()
        .filter(|sheet| {
            let hit = sheet.name().contains(entity);
            if hit {
                info!(sheet = sheet.name(), %entity, "entity sheet matched");
            } else {
                debug!(sheet = sheet.name(), %entity, "sheet skipped");
            }
            hit
        })
        .collect()
}

/// Non-empty cells of a row joined by single spaces.
fn row_text(row: &[Cell]) -> String {
    row.iter()
        .filter(|cell| !cell.is_empty())
        .map(Cell::to_text)
        .collect::<Vec<_>>()
        .join(" ")
}

fn build_table(sheet: &Sheet, bounds: BlockBounds) -> SubTable {
    let slice = &sheet.rows()[bounds.range(sheet.rows().len())];
    let mut grid = trim_empty(slice).into_iter();

    let title = grid
        .next()
        .and_then(|row| row.into_iter().find(|cell| !cell.trim().is_empty()))
        .map(|cell| cell.trim().to_string())
        .unwrap_or_default();
    let headers = grid
        .next()
        .map(|row| row.iter().map(|cell| cell.trim().to_string()).collect())
        .unwrap_or_default();
    let rows = grid.collect();

    SubTable {
        title,
        headers,
        rows,
    }
}

/// Drops columns empty across the whole slice, then rows empty across the
/// remaining columns, and renders what is left as text.
fn trim_empty(slice: &[Vec<Cell>]) -> Vec<Vec<String>> {
    let width = slice.iter().map(Vec::len).max().unwrap_or(0);
    let columns: Vec<usize> = (0..width)
        .filter(|&col| {
            slice
                .iter()
                .any(|row| row.get(col).is_some_and(|cell| !cell.is_empty()))
        })
        .collect();

    slice
        .iter()
        .filter(|row| {
            columns
                .iter()
                .any(|&col| row.get(col).is_some_and(|cell| !cell.is_empty()))
        })
        .map(|row| {
            columns
                .iter()
                .map(|&col| row.get(col).map(Cell::to_text).unwrap_or_default())
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_text_skips_empty_cells() {
        let row = vec![Cell::Empty, "S7".into(), Cell::Text(String::new()), Cell::Number(3.0)];
        assert_eq!(row_text(&row), "S7 3");
    }

    #[test]
    fn empty_columns_go_before_empty_rows() {
        let slice = vec![
            vec![Cell::Empty, "title".into(), Cell::Empty],
            vec![Cell::Empty, Cell::Empty, Cell::Empty],
            vec![Cell::Empty, "a".into(), Cell::Number(1.0)],
        ];
        assert_eq!(
            trim_empty(&slice),
            vec![
                vec!["title".to_string(), String::new()],
                vec!["a".to_string(), "1".to_string()],
            ]
        );
    }

    #[test]
    fn ragged_rows_are_padded() {
        let slice = vec![vec!["t".into()], vec!["h1".into(), "h2".into()]];
        assert_eq!(
            trim_empty(&slice),
            vec![
                vec!["t".to_string(), String::new()],
                vec!["h1".to_string(), "h2".to_string()],
            ]
        );
    }
}
