//! Usage statistics for raid and elite raid seasons, read from a loosely
//! structured spreadsheet.
//!
//! The workbook is loaded once through [`io::excel_read`] into an immutable
//! [`workbook::Workbook`]. Column headers are located with the substring
//! heuristics in [`resolve`], ranked lists come from [`stats`], and per-entity
//! tables embedded in free-form sheets are cut out by [`subtable`].
//! [`engine::StatsEngine`] ties these together for the command line front end.

pub mod config;
pub mod engine;
pub mod error;
pub mod io;
pub mod matcher;
pub mod model;
pub mod render;
pub mod report;
pub mod resolve;
pub mod stats;
pub mod subtable;
pub mod workbook;

#[cfg(test)]
mod test_log;

pub use engine::StatsEngine;
pub use error::{Result, StatsError};
