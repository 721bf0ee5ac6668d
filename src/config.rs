use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Literal markers and column names used to locate data inside the workbook.
///
/// The defaults match the published usage workbook. Any field can be
/// overridden from a JSON file; missing fields keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Header of the column holding entity (character) names.
    pub entity_column: String,
    /// Text that marks a raid column or block.
    pub raid_marker: String,
    /// Text that marks an elite raid column or block.
    pub elite_raid_marker: String,
    /// Prefix placed before a season number, e.g. `S` in `S13`.
    pub season_prefix: String,
    /// Flag appended to placeholder names when nothing matched.
    pub unknown_marker: String,
    /// Number of entries shown by ranked listings.
    pub top: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            entity_column: "stdNm".to_string(),
            raid_marker: "總力戰".to_string(),
            elite_raid_marker: "大決戰".to_string(),
            season_prefix: "S".to_string(),
            unknown_marker: "(未知名稱)".to_string(),
            top: 10,
        }
    }
}

impl Settings {
    /// Loads settings from a JSON document on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Season token as it appears in headers, e.g. `S13`.
    pub fn season_token(&self, season: u32) -> String {
        format!("{}{season}", self.season_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;

    #[test]
    fn partial_json_keeps_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "entityColumn": "name", "top": 5 }"#).expect("settings parsed");
        assert_eq!(settings.entity_column, "name");
        assert_eq!(settings.top, 5);
        assert_eq!(settings.raid_marker, "總力戰");
        assert_eq!(settings.season_token(13), "S13");
    }
}
