//! BarChart Widget
//!
//! Draws one vertical bar per array element, scaled to the value domain,
//! using eighth-block glyphs for sub-cell height. Bars that are part of the
//! current highlight are painted in their marker color. When there are more
//! elements than columns, each column shows the tallest of its run of
//! elements.

use std::ops::Range;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use sorter_core::Highlight;

use crate::theme::{bar_color, marker_color};

/// Partial-cell glyphs, indexed by eighths filled
const EIGHTHS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Vertical bar chart of an array snapshot
pub struct BarChart<'a> {
    values: &'a [u32],
    highlight: Option<&'a Highlight>,
    min_value: u32,
    max_value: u32,
}

impl<'a> BarChart<'a> {
    pub fn new(values: &'a [u32]) -> Self {
        Self {
            values,
            highlight: None,
            min_value: 0,
            max_value: values.iter().copied().max().unwrap_or(0),
        }
    }

    /// Value domain used for scaling and coloring
    pub fn domain(mut self, min_value: u32, max_value: u32) -> Self {
        self.min_value = min_value;
        self.max_value = max_value.max(min_value);
        self
    }

    pub fn highlight(mut self, highlight: &'a Highlight) -> Self {
        self.highlight = Some(highlight);
        self
    }

    /// Width in cells of each bar and of the gap after it
    fn bar_layout(&self, width: u16) -> (u16, u16) {
        let n = self.values.len() as u16;
        if n == 0 {
            return (0, 0);
        }
        let slot = (width / n).max(1);
        if slot >= 3 {
            (slot - 1, 1)
        } else {
            (slot, 0)
        }
    }

    /// Split `width` columns among the values
    ///
    /// With at least one column per value every value gets its own bar.
    /// Otherwise each column stands for a contiguous run of indices, so no
    /// index falls off the right edge.
    fn slots(&self, width: u16) -> Vec<Slot> {
        let n = self.values.len();
        let columns = usize::from(width);
        if n == 0 || columns == 0 {
            return Vec::new();
        }

        if n <= columns {
            let (bar_width, gap) = self.bar_layout(width);
            let step = bar_width + gap;
            (0..n)
                .map(|i| Slot {
                    offset: i as u16 * step,
                    width: bar_width,
                    indices: i..i + 1,
                })
                .collect()
        } else {
            (0..columns)
                .map(|c| Slot {
                    offset: c as u16,
                    width: 1,
                    indices: c * n / columns..(c + 1) * n / columns,
                })
                .collect()
        }
    }

    /// Bar height in eighths of a cell
    fn eighths(&self, value: u32, height: u16) -> u32 {
        let total = u32::from(height) * 8;
        let span = self.max_value - self.min_value;
        if span == 0 {
            return total;
        }
        // Bars always rise from the bottom of the area; the minimum keeps one sliver
        let offset = value.clamp(self.min_value, self.max_value) - self.min_value;
        let scaled = (u64::from(offset) * u64::from(total) / u64::from(span)) as u32;
        scaled.max(1)
    }
}

/// Columns covering one or more consecutive indices
struct Slot {
    offset: u16,
    width: u16,
    indices: Range<usize>,
}

impl Widget for BarChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.values.is_empty() {
            return;
        }

        for slot in self.slots(area.width) {
            let Some(value) = self.values[slot.indices.clone()].iter().copied().max() else {
                continue;
            };

            // A shared column shows a marker if any of its indices has one
            let color = self
                .highlight
                .and_then(|h| slot.indices.clone().find_map(|i| h.get(i)))
                .map(marker_color)
                .unwrap_or_else(|| bar_color(value, self.min_value, self.max_value));
            let style = Style::default().fg(color);

            let x0 = area.x + slot.offset;
            let mut remaining = self.eighths(value, area.height);
            for row in 0..area.height {
                if remaining == 0 {
                    break;
                }
                let y = area.bottom() - 1 - row;
                let glyph = EIGHTHS[remaining.min(8) as usize];
                for x in x0..(x0 + slot.width).min(area.right()) {
                    buf.set_string(x, y, glyph, style);
                }
                remaining = remaining.saturating_sub(8);
            }
        }
    }
}
