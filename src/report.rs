//! Text shown to users by the command surface.

use std::fmt::Write as _;

use serde::Serialize;

use crate::error::{Result, StatsError};
use crate::model::{CategoryMarker, ResolvedName, StatRow, SubTable};

/// Rank brackets published in the usage workbook, as (low, high, label).
const RANK_BRACKETS: [(u32, u32, &str); 4] = [
    (1, 1000, "排名 1~1000 內"),
    (1001, 5000, "排名 1001~5000 內"),
    (5001, 10000, "排名 5001~10000 內"),
    (10001, 20000, "排名 10001~20000 內"),
];

/// Label of the bracket `rank` falls in.
pub fn rank_bracket(rank: u32) -> Result<&'static str> {
    RANK_BRACKETS
        .iter()
        .find(|(low, high, _)| (*low..=*high).contains(&rank))
        .map(|(_, _, label)| *label)
        .ok_or(StatsError::InvalidRank(rank))
}

/// Formats the first `top` entries of a ranked list under a heading.
///
/// An empty list produces the "no data" message naming the column, so an
/// unresolved name and a resolved-but-empty column read differently.
pub fn ranked_listing(name: &ResolvedName, bracket: &str, rows: &[StatRow], top: usize) -> String {
    if rows.is_empty() {
        return format!("⚠ 無法取得 `{name}` {bracket} 的數據\n");
    }

    let mut out = format!("📊 {name} {bracket} 角色使用率\n");
    for (position, row) in rows.iter().take(top).enumerate() {
        let _ = writeln!(out, "{:>2}. {}  使用次數: {}", position + 1, row.name, row.value);
    }
    out
}

/// Machine-readable form of a ranked list query.
#[derive(Debug, Serialize)]
pub struct RankedReport<'a> {
    pub marker: &'a CategoryMarker,
    pub column: &'a ResolvedName,
    pub bracket: &'a str,
    pub rows: &'a [StatRow],
}

/// Machine-readable form of an entity table query. `sheet` and `table` are
/// both `null` when nothing was found.
#[derive(Debug, Serialize)]
pub struct TableReport<'a> {
    pub entity: &'a str,
    pub marker: &'a CategoryMarker,
    pub sheet: Option<&'a str>,
    pub table: Option<&'a SubTable>,
}

/// Pretty-printed JSON for any report.
pub fn to_json<T: Serialize>(report: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
