//! Turning reconstructed tables into something presentable.

use crate::model::SubTable;

/// Renders a titled table. Implementations decide the output format.
pub trait TableRenderer {
    type Output;

    fn render(&self, title: &str, headers: &[String], rows: &[Vec<String>]) -> Self::Output;

    fn render_table(&self, table: &SubTable) -> Self::Output {
        self.render(&table.title, &table.headers, &table.rows)
    }
}

/// Box-drawn monospace text table.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl TableRenderer for PlainTextRenderer {
    type Output = String;

    fn render(&self, title: &str, headers: &[String], rows: &[Vec<String>]) -> String {
        let columns = rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(headers.len()))
            .max()
            .unwrap_or(0);

        let mut widths = vec![0usize; columns];
        for row in std::iter::once(headers).chain(rows.iter().map(Vec::as_slice)) {
            for (col, cell) in row.iter().enumerate() {
                widths[col] = widths[col].max(display_width(cell));
            }
        }

        let mut out = String::new();
        out.push_str(title);
        out.push('\n');
        if columns == 0 {
            return out;
        }

        out.push_str(&rule(&widths, '┌', '┬', '┐'));
        out.push_str(&line(&widths, headers));
        out.push_str(&rule(&widths, '├', '┼', '┤'));
        for row in rows {
            out.push_str(&line(&widths, row));
        }
        out.push_str(&rule(&widths, '└', '┴', '┘'));
        out
    }
}

fn rule(widths: &[usize], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}\n", segments.join(&mid.to_string()))
}

fn line(widths: &[usize], cells: &[String]) -> String {
    let mut out = String::from("│");
    for (col, width) in widths.iter().enumerate() {
        let cell = cells.get(col).map(String::as_str).unwrap_or("");
        let pad = width - display_width(cell);
        out.push(' ');
        out.push_str(cell);
        out.push_str(&" ".repeat(pad + 1));
        out.push('│');
    }
    out.push('\n');
    out
}

/// Terminal column width, counting East Asian wide characters as two.
///
/// The table in [`is_wide`] covers CJK (including the supplementary ideograph
/// planes), Hangul, kana, fullwidth forms and the common emoji blocks. It does
/// not model combining marks, zero-width joiners or emoji variation sequences,
/// so text using those may still misalign.
fn display_width(text: &str) -> usize {
    text.chars().map(|c| if is_wide(c) { 2 } else { 1 }).sum()
}

fn is_wide(c: char) -> bool {
    matches!(c as u32,
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x1F300..=0x1F64F
        | 0x1F900..=0x1F9FF
        | 0x20000..=0x2FFFD
        | 0x30000..=0x3FFFD)
}
