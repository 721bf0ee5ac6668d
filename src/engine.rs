use std::path::Path;

use tracing::instrument;

use crate::config::Settings;
use crate::error::Result;
use crate::io::excel_read;
use crate::model::{ArmorType, CategoryMarker, ResolvedName, StatRow, SubTable};
use crate::workbook::Workbook;
use crate::{resolve, stats, subtable};

/// Query surface over a workbook loaded once and never modified.
///
/// Every query walks the sheets again; nothing is cached between calls, and
/// all methods take `&self`, so one engine can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct StatsEngine {
    workbook: Workbook,
    settings: Settings,
}

impl StatsEngine {
    pub fn new(workbook: Workbook, settings: Settings) -> Self {
        Self { workbook, settings }
    }

    /// Loads the workbook at `path`.
    pub fn open(path: &Path, settings: Settings) -> Result<Self> {
        let workbook = excel_read::open_workbook(path)?;
        Ok(Self::new(workbook, settings))
    }

    pub fn workbook(&self) -> &Workbook {
        &self.workbook
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn resolve_raid_name(&self, season: u32) -> ResolvedName {
        resolve::resolve_raid_name(&self.workbook, &self.settings, season)
    }

    pub fn resolve_eraid_name(&self, season: u32, armor: ArmorType) -> ResolvedName {
        resolve::resolve_eraid_name(&self.workbook, &self.settings, season, armor)
    }

    pub fn resolve_name(&self, marker: &CategoryMarker) -> ResolvedName {
        resolve::resolve_name(&self.workbook, &self.settings, marker)
    }

    /// Ranked list for `marker`, highest metric first.
    #[instrument(level = "info", skip(self, marker), fields(marker = %marker))]
    pub fn stats(&self, marker: &CategoryMarker) -> Vec<StatRow> {
        let column = self.resolve_name(marker);
        stats::ranked_list(&self.workbook, &self.settings, &column)
    }

    pub fn raid_stats(&self, season: u32) -> Vec<StatRow> {
        self.stats(&CategoryMarker::raid(season))
    }

    /// Elite raid ranked list. `armor` is validated before any sheet is read.
    pub fn eraid_stats(&self, season: u32, armor: &str) -> Result<Vec<StatRow>> {
        let armor: ArmorType = armor.parse()?;
        Ok(self.stats(&CategoryMarker::elite_raid(season, armor)))
    }

    /// Block for `marker` in the first sheet named after `entity`, with the
    /// sheet name. `None` when either the sheet or the block is missing.
    #[instrument(level = "info", skip(self, marker), fields(marker = %marker))]
    pub fn entity_table(&self, entity: &str, marker: &CategoryMarker) -> Option<(String, SubTable)> {
        subtable::entity_table(&self.workbook, &self.settings, entity, marker)
    }
}
