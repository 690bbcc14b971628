//! Stacked-bar chart for amino acid counts.
//!
//! One column per amino acid. The first sequence's count fills the bottom
//! of the column and the second sequence's count is stacked on top.
//! Narrow areas switch to one-letter columns; whatever still does not fit
//! is counted in a "+N" marker.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::compare::FrequencyComparison;
use crate::ui::glyphs::Glyphs;

/// Color of the first sequence's segments.
pub const FIRST_COLOR: Color = Color::LightBlue;
/// Color of the second sequence's segments.
pub const SECOND_COLOR: Color = Color::LightRed;

/// Cells reserved for the "+N" marker when columns are hidden.
const MORE_MARKER_WIDTH: usize = 3;

/// How chart columns are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnStyle {
    /// Three-letter labels with a totals row
    Wide,
    /// One-letter labels, no totals row
    Compact,
}

impl ColumnStyle {
    /// Column width in cells, gap included.
    fn width(self) -> u16 {
        match self {
            ColumnStyle::Wide => 4,
            ColumnStyle::Compact => 2,
        }
    }

    /// Rows under the bars.
    fn footer_height(self) -> u16 {
        match self {
            ColumnStyle::Wide => 2,
            ColumnStyle::Compact => 1,
        }
    }

    /// Cells needed to draw `columns` columns (no gap after the last one).
    fn needed(self, columns: usize) -> usize {
        (columns * self.width() as usize).saturating_sub(1)
    }
}

/// Picks the widest style that shows all `columns` in `width` cells.
///
/// Falls back to compact columns and returns how many fit before the "+N"
/// marker when even those do not fit.
pub fn fit_columns(columns: usize, width: u16) -> (ColumnStyle, usize) {
    for style in [ColumnStyle::Wide, ColumnStyle::Compact] {
        if style.needed(columns) <= width as usize {
            return (style, columns);
        }
    }
    let room = (width as usize).saturating_sub(MORE_MARKER_WIDTH);
    let visible = room / ColumnStyle::Compact.width() as usize;
    (ColumnStyle::Compact, visible.min(columns))
}

/// Scales a stacked pair of counts to `extent` cells.
///
/// `max` is the tallest stacked value in the chart. Returns the lower and
/// upper segment lengths; their sum never exceeds `extent`.
pub fn stack_heights(first: usize, second: usize, max: usize, extent: usize) -> (usize, usize) {
    if max == 0 || extent == 0 {
        return (0, 0);
    }
    let scale = |n: usize| (n * extent + max / 2) / max;
    let total = scale(first + second).min(extent);
    let lower = scale(first).min(total);
    (lower, total - lower)
}

/// Widget drawing a [`FrequencyComparison`] as vertical stacked bars.
pub struct StackedBarChart<'a> {
    comparison: &'a FrequencyComparison,
    glyphs: Glyphs,
}

impl<'a> StackedBarChart<'a> {
    pub fn new(comparison: &'a FrequencyComparison, glyphs: Glyphs) -> Self {
        Self { comparison, glyphs }
    }
}

impl Widget for StackedBarChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let total_columns = self.comparison.labels.len();
        let (style, visible) = fit_columns(total_columns, area.width);
        if area.height <= style.footer_height() || area.width == 0 {
            return;
        }

        let column_width = style.width();
        let bar_width = column_width - 1;
        let bar_rows = area.height - style.footer_height();
        let max = self.comparison.max_stacked();
        let label_y = area.y + bar_rows;

        for (i, (aa, first, second)) in self.comparison.rows().take(visible).enumerate() {
            let x = area.x + i as u16 * column_width;
            let (lower, upper) = stack_heights(first, second, max, bar_rows as usize);

            for row in 0..(lower + upper) as u16 {
                let y = label_y - 1 - row;
                let (symbol, color) = if (row as usize) < lower {
                    (self.glyphs.bar_first, FIRST_COLOR)
                } else {
                    (self.glyphs.bar_second, SECOND_COLOR)
                };
                for dx in 0..bar_width {
                    if let Some(cell) = buf.cell_mut((x + dx, y)) {
                        cell.set_symbol(symbol).set_style(Style::default().fg(color));
                    }
                }
            }

            match style {
                ColumnStyle::Wide => {
                    buf.set_stringn(x, label_y, aa.three_letter(), 3, Style::default());
                    buf.set_stringn(
                        x,
                        label_y + 1,
                        (first + second).to_string(),
                        3,
                        Style::default().fg(Color::DarkGray),
                    );
                }
                ColumnStyle::Compact => {
                    buf.set_stringn(x, label_y, aa.one_letter().to_string(), 1, Style::default());
                }
            }
        }

        let hidden = total_columns - visible;
        if hidden > 0 {
            let x = area.x + visible as u16 * column_width;
            buf.set_stringn(
                x,
                label_y,
                format!("+{}", hidden),
                area.right().saturating_sub(x) as usize,
                Style::default().fg(Color::Yellow),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amino_acid::AminoAcid::{self, *};
    use crate::ui::glyphs;

    fn comparison() -> FrequencyComparison {
        FrequencyComparison {
            labels: vec![Ala, Gly],
            first: vec![2, 0],
            second: vec![2, 1],
        }
    }

    #[test]
    fn test_stack_heights() {
        assert_eq!(stack_heights(3, 2, 5, 10), (6, 4));
        assert_eq!(stack_heights(2, 2, 4, 4), (2, 2));
        assert_eq!(stack_heights(0, 1, 4, 4), (0, 1));
        assert_eq!(stack_heights(1, 1, 0, 10), (0, 0));
        assert_eq!(stack_heights(1, 1, 2, 0), (0, 0));
        let (a, b) = stack_heights(7, 9, 16, 5);
        assert!(a + b <= 5);
    }

    #[test]
    fn test_render_stacked_columns() {
        let cmp = comparison();
        let area = Rect::new(0, 0, 8, 6);
        let mut buf = Buffer::empty(area);
        StackedBarChart::new(&cmp, glyphs::ascii()).render(area, &mut buf);

        // 4 bar rows, max stack 4: Ala = 2 first + 2 second, Gly = 1 second
        let column = |x: u16| -> String {
            (0..4).map(|y| buf[(x, y)].symbol().to_string()).collect()
        };
        assert_eq!(column(0), "==##");
        assert_eq!(column(4), "   =");

        let labels: String = (0..8).map(|x| buf[(x, 4)].symbol().to_string()).collect();
        assert_eq!(labels, "Ala Gly ");
        assert_eq!(buf[(0, 5)].symbol(), "4");
        assert_eq!(buf[(4, 5)].symbol(), "1");
    }

    #[test]
    fn test_render_too_small_is_noop() {
        let cmp = comparison();
        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::empty(area);
        StackedBarChart::new(&cmp, glyphs::ascii()).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn test_fit_columns() {
        assert_eq!(fit_columns(2, 8), (ColumnStyle::Wide, 2));
        assert_eq!(fit_columns(2, 7), (ColumnStyle::Wide, 2));
        assert_eq!(fit_columns(2, 6), (ColumnStyle::Compact, 2));
        assert_eq!(fit_columns(22, 78), (ColumnStyle::Compact, 22));
        assert_eq!(fit_columns(22, 88), (ColumnStyle::Wide, 22));
        assert_eq!(fit_columns(22, 40), (ColumnStyle::Compact, 18));
        assert_eq!(fit_columns(0, 0), (ColumnStyle::Wide, 0));
    }

    fn every_code() -> FrequencyComparison {
        FrequencyComparison {
            labels: AminoAcid::ALL.to_vec(),
            first: vec![1; AminoAcid::ALL.len()],
            second: vec![1; AminoAcid::ALL.len()],
        }
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn test_every_code_shown_on_narrow_area() {
        let cmp = every_code();
        let area = Rect::new(0, 0, 78, 6);
        let mut buf = Buffer::empty(area);
        StackedBarChart::new(&cmp, glyphs::ascii()).render(area, &mut buf);

        // compact layout: 5 bar rows, one-letter labels on the last row
        let labels = row(&buf, 5);
        for (i, aa) in AminoAcid::ALL.iter().enumerate() {
            let label = buf[(i as u16 * 2, 5)].symbol();
            assert_eq!(label, aa.one_letter().to_string(), "column {}", i);
        }
        assert!(labels.starts_with("A R N D"));
        assert!(labels.contains("V * X"));
        assert!(!labels.contains('+'));
        // Unknown (x = 42): 3 rows of the first sequence, 2 of the second
        assert_eq!(buf[(42, 4)].symbol(), "#");
        assert_eq!(buf[(42, 0)].symbol(), "=");
    }

    #[test]
    fn test_hidden_columns_are_counted() {
        let cmp = every_code();
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        StackedBarChart::new(&cmp, glyphs::ascii()).render(area, &mut buf);

        // (20 - 3) / 2 = 8 columns, 14 hidden
        let labels = row(&buf, 3);
        assert_eq!(labels, "A R N D C Q E G +14 ");
    }
}
