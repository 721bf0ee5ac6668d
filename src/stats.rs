//! Ranked (entity, metric) lists read from a resolved column.

use tracing::{debug, warn};

use crate::config::Settings;
use crate::model::{Cell, ResolvedName, StatRow};
use crate::workbook::{Sheet, Workbook};

/// Reads the ranked list for `column`.
///
/// Sheets are scanned in order until one has a header equal to the column
/// name. Rows missing either the entity name or a numeric metric are dropped;
/// the rest are sorted by metric, highest first. A placeholder name, or a
/// column present in no sheet, yields an empty list.
pub fn ranked_list(workbook: &Workbook, settings: &Settings, column: &ResolvedName) -> Vec<StatRow> {
    let ResolvedName::Found(header) = column else {
        debug!(column = %column, "unresolved column, no data");
        return Vec::new();
    };

    for sheet in workbook.sheets() {
        let Some(metric_idx) = sheet.column_index(header) else {
            continue;
        };
        let Some(name_idx) = sheet.column_index(&settings.entity_column) else {
            warn!(
                sheet = sheet.name(),
                entity_column = %settings.entity_column,
                "sheet holds '{header}' but no entity column, skipping"
            );
            continue;
        };

        let rows = collect_rows(sheet, name_idx, metric_idx);
        debug!(sheet = sheet.name(), rows = rows.len(), "ranked list extracted");
        return rows;
    }

    debug!(%header, "no sheet contains the resolved column");
    Vec::new()
}

fn collect_rows(sheet: &Sheet, name_idx: usize, metric_idx: usize) -> Vec<StatRow> {
    let mut rows: Vec<StatRow> = sheet
        .data_rows()
        .iter()
        .filter_map(|row| {
            let name = row.get(name_idx).filter(|cell| !cell.is_empty())?;
            let value = row.get(metric_idx).and_then(Cell::as_number)?;
            Some(StatRow {
                name: name.to_text(),
                value,
            })
        })
        .collect();

    rows.sort_by(|lhs, rhs| rhs.value.total_cmp(&lhs.value));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> Sheet {
        Sheet::new(
            "usage",
            vec![
                vec!["stdNm".into(), "S3 總力戰".into()],
                vec!["Hoshino".into(), Cell::Number(12.0)],
                vec!["Shiroko".into(), Cell::Number(40.0)],
                vec!["Serika".into(), Cell::Empty],
                vec![Cell::Empty, Cell::Number(99.0)],
                vec!["Ayane".into(), "7".into()],
                vec!["Nonomi".into(), "n/a".into()],
            ],
        )
    }

    #[test]
    fn rows_are_sorted_and_filtered() {
        let book = Workbook::from_sheets(vec![sheet()]);
        let rows = ranked_list(&book, &Settings::default(), &ResolvedName::Found("S3 總力戰".into()));
        let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, ["Shiroko", "Hoshino", "Ayane"]);
        assert_eq!(rows[2].value, 7.0);
    }

    #[test]
    fn placeholder_yields_nothing() {
        let book = Workbook::from_sheets(vec![sheet()]);
        let rows = ranked_list(
            &book,
            &Settings::default(),
            &ResolvedName::Placeholder("S3 總力戰".into()),
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn sheet_without_entity_column_is_skipped() {
        let orphan = Sheet::new("orphan", vec![vec!["S3 總力戰".into()], vec![Cell::Number(5.0)]]);
        let book = Workbook::from_sheets(vec![orphan, sheet()]);
        let rows = ranked_list(&book, &Settings::default(), &ResolvedName::Found("S3 總力戰".into()));
        assert_eq!(rows.len(), 3);
    }
}
