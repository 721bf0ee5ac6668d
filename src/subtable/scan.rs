//! Row scanner locating a titled block inside a headerless grid.
//!
//! The scan is a two state machine. While `Searching`, a row whose text
//! carries every start token opens the block. While `InBlock`, the first later
//! row carrying every boundary token closes it. A block that never closes runs
//! to the last row.

use crate::matcher::matches;

/// Row range of a located block. `end` is exclusive; `None` means the block
/// extends to the end of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockBounds {
    pub start: usize,
    pub end: Option<usize>,
}

impl BlockBounds {
    /// Clamps the bounds to a grid of `len` rows.
    pub fn range(&self, len: usize) -> std::ops::Range<usize> {
        let end = self.end.unwrap_or(len).min(len);
        self.start.min(end)..end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Searching,
    InBlock { start: usize },
}

/// Result of feeding one row to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue(ScanState),
    Closed(BlockBounds),
}

/// Start and boundary predicates for one scan.
#[derive(Debug, Clone)]
pub struct BlockMarkers<'a, S> {
    pub start: &'a [S],
    pub boundary: &'a [S],
}

impl<S: AsRef<str>> BlockMarkers<'_, S> {
    pub fn opens(&self, text: &str) -> bool {
        matches(text, self.start)
    }

    pub fn closes(&self, text: &str) -> bool {
        matches(text, self.boundary)
    }
}

impl ScanState {
    /// Feeds row `index` with joined cell text `text`.
    pub fn advance<S: AsRef<str>>(self, index: usize, text: &str, markers: &BlockMarkers<'_, S>) -> Step {
        match self {
            ScanState::Searching if markers.opens(text) => {
                Step::Continue(ScanState::InBlock { start: index })
            }
            ScanState::Searching => Step::Continue(ScanState::Searching),
            ScanState::InBlock { start } if index > start && markers.closes(text) => {
                Step::Closed(BlockBounds {
                    start,
                    end: Some(index),
                })
            }
            state @ ScanState::InBlock { .. } => Step::Continue(state),
        }
    }

    /// Bounds implied by the state once the rows run out.
    pub fn finish(self) -> Option<BlockBounds> {
        match self {
            ScanState::Searching => None,
            ScanState::InBlock { start } => Some(BlockBounds { start, end: None }),
        }
    }
}

/// Runs the scanner over row texts in order.
pub fn locate_block<I, T, S>(rows: I, markers: &BlockMarkers<'_, S>) -> Option<BlockBounds>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
    S: AsRef<str>,
{
    let mut state = ScanState::Searching;
    for (index, text) in rows.into_iter().enumerate() {
        match state.advance(index, text.as_ref(), markers) {
            Step::Continue(next) => state = next,
            Step::Closed(bounds) => return Some(bounds),
        }
    }
    state.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: [&str; 3] = ["S7", "HeavyArmor", "大決戰"];
    const BOUNDARY: [&str; 2] = ["S", "大決戰"];

    fn markers() -> BlockMarkers<'static, &'static str> {
        BlockMarkers {
            start: &START,
            boundary: &BOUNDARY,
        }
    }

    #[test]
    fn searching_ignores_boundary_rows() {
        let step = ScanState::Searching.advance(0, "S6 LightArmor 大決戰", &markers());
        assert_eq!(step, Step::Continue(ScanState::Searching));
    }

    #[test]
    fn start_row_opens_block_without_closing_it() {
        let step = ScanState::Searching.advance(3, "S7 HeavyArmor 大決戰", &markers());
        assert_eq!(step, Step::Continue(ScanState::InBlock { start: 3 }));
    }

    #[test]
    fn boundary_row_closes_block() {
        let state = ScanState::InBlock { start: 3 };
        assert_eq!(
            state.advance(4, "排名 借用", &markers()),
            Step::Continue(state)
        );
        assert_eq!(
            state.advance(9, "S8 Unarmed 大決戰", &markers()),
            Step::Closed(BlockBounds {
                start: 3,
                end: Some(9)
            })
        );
    }

    #[test]
    fn repeated_start_row_closes_block() {
        let rows = ["", "S7 HeavyArmor 大決戰", "a", "S7 HeavyArmor 大決戰", "b"];
        assert_eq!(
            locate_block(rows, &markers()),
            Some(BlockBounds {
                start: 1,
                end: Some(3)
            })
        );
    }

    #[test]
    fn open_block_runs_to_last_row() {
        let rows = ["x", "S7 HeavyArmor 大決戰", "a", "b"];
        let bounds = locate_block(rows, &markers()).unwrap();
        assert_eq!(bounds, BlockBounds { start: 1, end: None });
        assert_eq!(bounds.range(rows.len()), 1..4);
    }

    #[test]
    fn no_start_row_means_no_block() {
        let rows = ["S6 HeavyArmor 大決戰", "S8 HeavyArmor 大決戰"];
        assert_eq!(locate_block(rows, &markers()), None);
    }
}
