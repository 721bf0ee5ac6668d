use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::Settings;
use crate::error::StatsError;

/// A single worksheet cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    /// No value.
    #[default]
    Empty,
    /// Text value.
    Text(String),
    /// Numeric value. Excel stores integers as floats as well.
    Number(f64),
    /// Boolean value.
    Bool(bool),
}

impl Cell {
    /// Returns `true` when the cell holds nothing (or an empty string).
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(value) => value.is_empty(),
            _ => false,
        }
    }

    /// Text rendition of the cell. Empty cells become an empty string.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(value) => value.clone(),
            Cell::Number(value) => value.to_string(),
            Cell::Bool(value) => value.to_string(),
        }
    }

    /// Numeric value of the cell, parsing text that holds a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) if value.is_finite() => Some(*value),
            Cell::Text(value) => value.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

/// Armor categories partitioning elite raid data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArmorType {
    LightArmor,
    ElasticArmor,
    HeavyArmor,
    Unarmed,
}

impl ArmorType {
    /// Every armor type, in display order.
    pub const ALL: [ArmorType; 4] = [
        ArmorType::LightArmor,
        ArmorType::ElasticArmor,
        ArmorType::HeavyArmor,
        ArmorType::Unarmed,
    ];

    /// Literal token used in headers and block titles.
    pub fn token(self) -> &'static str {
        match self {
            ArmorType::LightArmor => "LightArmor",
            ArmorType::ElasticArmor => "ElasticArmor",
            ArmorType::HeavyArmor => "HeavyArmor",
            ArmorType::Unarmed => "Unarmed",
        }
    }
}

impl fmt::Display for ArmorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ArmorType {
    type Err = StatsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ArmorType::ALL
            .into_iter()
            .find(|armor| armor.token() == value)
            .ok_or_else(|| StatsError::InvalidArmorType {
                value: value.to_string(),
                expected: ArmorType::ALL.map(ArmorType::token).join(", "),
            })
    }
}

/// Event kind a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RaidKind {
    Raid,
    EliteRaid(ArmorType),
}

/// The (season, kind) key used to locate columns and blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CategoryMarker {
    pub season: u32,
    pub kind: RaidKind,
}

impl CategoryMarker {
    pub fn raid(season: u32) -> Self {
        Self {
            season,
            kind: RaidKind::Raid,
        }
    }

    pub fn elite_raid(season: u32, armor: ArmorType) -> Self {
        Self {
            season,
            kind: RaidKind::EliteRaid(armor),
        }
    }

    /// Literal substrings that must all appear in a header or block title
    /// belonging to this marker.
    pub fn required_tokens(&self, settings: &Settings) -> Vec<String> {
        let season = settings.season_token(self.season);
        match self.kind {
            RaidKind::Raid => vec![season, settings.raid_marker.clone()],
            RaidKind::EliteRaid(armor) => vec![
                season,
                settings.elite_raid_marker.clone(),
                armor.token().to_string(),
            ],
        }
    }

    /// Substrings identifying the title of the next block of the same kind.
    pub fn boundary_tokens(&self, settings: &Settings) -> Vec<String> {
        vec![settings.season_prefix.clone(), self.kind_marker(settings).to_string()]
    }

    /// Name reported when no column matches this marker.
    pub fn placeholder(&self, settings: &Settings) -> String {
        let season = settings.season_token(self.season);
        match self.kind {
            RaidKind::Raid => format!(
                "{season} {} {}",
                settings.raid_marker, settings.unknown_marker
            ),
            RaidKind::EliteRaid(armor) => format!(
                "{season} {armor} {} {}",
                settings.elite_raid_marker, settings.unknown_marker
            ),
        }
    }

    fn kind_marker<'a>(&self, settings: &'a Settings) -> &'a str {
        match self.kind {
            RaidKind::Raid => &settings.raid_marker,
            RaidKind::EliteRaid(_) => &settings.elite_raid_marker,
        }
    }
}

impl fmt::Display for CategoryMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RaidKind::Raid => write!(f, "S{} raid", self.season),
            RaidKind::EliteRaid(armor) => write!(f, "S{} {armor} elite raid", self.season),
        }
    }
}

/// Outcome of resolving a [`CategoryMarker`] to a header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "name", rename_all = "snake_case")]
pub enum ResolvedName {
    /// Literal header text of the matching column.
    Found(String),
    /// Synthesized name; no header matched.
    Placeholder(String),
}

impl ResolvedName {
    pub fn as_str(&self) -> &str {
        match self {
            ResolvedName::Found(name) | ResolvedName::Placeholder(name) => name,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ResolvedName::Placeholder(_))
    }
}

impl fmt::Display for ResolvedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a ranked list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatRow {
    pub name: String,
    pub value: f64,
}

/// A table reconstructed from a block embedded inside a worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
