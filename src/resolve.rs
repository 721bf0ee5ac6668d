//! Maps a [`CategoryMarker`] to the literal header text of its column.

use tracing::{debug, warn};

use crate::config::Settings;
use crate::matcher::matches;
use crate::model::{ArmorType, CategoryMarker, RaidKind, ResolvedName};
use crate::workbook::Workbook;

/// Resolves the raid column for `season`.
///
/// Sheets are scanned in workbook order and columns in sheet order; the first
/// matching header wins. When nothing matches, a placeholder carrying the
/// season and the unknown-name flag is returned and a warning is logged.
pub fn resolve_raid_name(workbook: &Workbook, settings: &Settings, season: u32) -> ResolvedName {
    let marker = CategoryMarker::raid(season);
    let required = marker.required_tokens(settings);

    let found = workbook
        .sheets()
        .iter()
        .flat_map(|sheet| sheet.header_row())
        .find(|header| matches(header, &required));

    match found {
        Some(header) => {
            debug!(%marker, %header, "raid column resolved");
            ResolvedName::Found(header)
        }
        None => {
            warn!(%marker, "no raid column found for season {season}");
            ResolvedName::Placeholder(marker.placeholder(settings))
        }
    }
}

/// Resolves the elite raid column for `season` and `armor`.
///
/// All matching headers across the workbook are collected. More than one
/// candidate is tolerated: the first is returned and every candidate is
/// logged as a warning.
pub fn resolve_eraid_name(
    workbook: &Workbook,
    settings: &Settings,
    season: u32,
    armor: ArmorType,
) -> ResolvedName {
    let marker = CategoryMarker::elite_raid(season, armor);
    let candidates = eraid_candidates(workbook, settings, &marker);

    match candidates.as_slice() {
        [] => {
            warn!(%marker, "no elite raid column found for season {season} {armor}");
            ResolvedName::Placeholder(marker.placeholder(settings))
        }
        [only] => {
            debug!(%marker, header = %only, "elite raid column resolved");
            ResolvedName::Found(only.clone())
        }
        [first, ..] => {
            warn!(
                %marker,
                ?candidates,
                "S{season} {armor} matched {} columns, using the first",
                candidates.len()
            );
            ResolvedName::Found(first.clone())
        }
    }
}

/// Dispatches on the marker kind.
pub fn resolve_name(workbook: &Workbook, settings: &Settings, marker: &CategoryMarker) -> ResolvedName {
    match marker.kind {
        RaidKind::Raid => resolve_raid_name(workbook, settings, marker.season),
        RaidKind::EliteRaid(armor) => resolve_eraid_name(workbook, settings, marker.season, armor),
    }
}

fn eraid_candidates(workbook: &Workbook, settings: &Settings, marker: &CategoryMarker) -> Vec<String> {
    let required = marker.required_tokens(settings);
    workbook
        .sheets()
        .iter()
        .flat_map(|sheet| sheet.header_row())
        .filter(|header| matches(header, &required))
        .collect()
}
