#![forbid(unsafe_code)]

//! Token layout: greedy left-to-right, top-to-bottom wrapping of a token
//! stream into positioned fixed-width cells.
//!
//! Tokens render in a fixed-pitch font, so a token's rendered width is its
//! display width in character cells times the cell width. The engine walks
//! the stream once: each token is placed at the cursor, preceded by a fixed
//! inter-token gap unless it starts a line; when gap plus token would cross
//! the right bound the cursor wraps to the next line. A token wider than
//! the whole line is still placed (never split or hyphenated) and simply
//! overflows.
//!
//! # Example
//! ```
//! use gloss_layout::{LayoutConfig, layout};
//!
//! let cfg = LayoutConfig {
//!     cell_width: 6,
//!     cell_height: 8,
//!     gap_cells: 2,
//!     x_min: 20,
//!     x_max: 80,
//!     y_start: 40,
//!     line_pitch: 30,
//! };
//! let positions = layout(["Ann", "met", "Bob", "."], &cfg);
//! assert_eq!((positions[0].x, positions[0].line), (20, 1));
//! assert_eq!((positions[1].x, positions[1].line), (50, 1));
//! assert_eq!((positions[2].x, positions[2].line), (20, 2));
//! ```

use gloss_core::geometry::CanvasBounds;
use unicode_width::UnicodeWidthStr;

/// Fixed metrics and bounds for one layout pass.
///
/// All lengths are pixels except `gap_cells`, which is expressed in
/// character-cell widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Width of one character cell.
    pub cell_width: i32,
    /// Height of one character cell.
    pub cell_height: i32,
    /// Inter-token gap, in character cells.
    pub gap_cells: i32,
    /// Left bound; every line starts here.
    pub x_min: i32,
    /// Right bound; no token starts past it.
    pub x_max: i32,
    /// Baseline y of the first line.
    pub y_start: i32,
    /// Vertical distance between consecutive lines.
    pub line_pitch: i32,
}

/// Passage canvas extent.
pub const PASSAGE_CANVAS: CanvasBounds = CanvasBounds::new(1500, 500);

/// Question/answer canvas extent.
pub const QA_CANVAS: CanvasBounds = CanvasBounds::new(1000, 250);

impl LayoutConfig {
    /// Metrics for the passage canvas (6x8 fixed-pitch cells).
    #[must_use]
    pub const fn passage() -> Self {
        Self {
            cell_width: 6,
            cell_height: 8,
            gap_cells: 2,
            x_min: 20,
            x_max: 1480,
            y_start: 40,
            line_pitch: 30,
        }
    }

    /// Metrics for the question area of the question/answer canvas.
    #[must_use]
    pub const fn question() -> Self {
        Self {
            x_max: 980,
            y_start: 26,
            ..Self::passage()
        }
    }

    /// Metrics for the answer area of the question/answer canvas.
    #[must_use]
    pub const fn answer() -> Self {
        Self {
            y_start: 125,
            ..Self::question()
        }
    }

    /// Inter-token gap in pixels.
    #[inline]
    #[must_use]
    pub const fn gap_px(&self) -> i32 {
        self.gap_cells * self.cell_width
    }

    /// Rendered width of a token in pixels.
    #[inline]
    #[must_use]
    pub fn token_width(&self, text: &str) -> i32 {
        display_cells(text) * self.cell_width
    }
}

/// Display width of a token in character cells.
///
/// Unicode display width, so CJK and fullwidth characters count as two
/// cells; for the ASCII-heavy corpus this equals the character count.
#[inline]
#[must_use]
pub fn display_cells(text: &str) -> i32 {
    text.width() as i32
}

/// Resolved position of one laid-out token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPos {
    /// Left edge of the token's cell.
    pub x: i32,
    /// Top edge of the token's cell.
    pub y: i32,
    /// 1-based rendered line number.
    pub line: u32,
}

/// Lay out a token stream.
///
/// Deterministic and O(n): identical inputs produce identical positions.
/// The returned vector is index-aligned with the input stream, giving each
/// token a dense zero-based index in its numbering space.
#[must_use]
pub fn layout<'a, I>(texts: I, cfg: &LayoutConfig) -> Vec<TokenPos>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut positions = Vec::new();
    let mut x = cfg.x_min;
    let mut y = cfg.y_start;
    let mut line = 1u32;
    let mut first_on_line = true;

    for text in texts {
        let width = cfg.token_width(text);
        if !first_on_line {
            if x + cfg.gap_px() + width > cfg.x_max {
                x = cfg.x_min;
                y += cfg.line_pitch;
                line += 1;
            } else {
                x += cfg.gap_px();
            }
        }
        positions.push(TokenPos { x, y, line });
        x += width;
        first_on_line = false;
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn narrow() -> LayoutConfig {
        LayoutConfig {
            cell_width: 6,
            cell_height: 8,
            gap_cells: 2,
            x_min: 20,
            x_max: 80,
            y_start: 40,
            line_pitch: 30,
        }
    }

    #[test]
    fn exact_pixel_arithmetic() {
        // "Ann met Bob ." in a 20..80 bound with 6px cells and a 2-cell gap.
        let positions = layout(["Ann", "met", "Bob", "."], &narrow());
        assert_eq!(positions[0], TokenPos { x: 20, y: 40, line: 1 });
        // 20 + 18 (Ann) + 12 (gap) = 50; 50 + 18 fits exactly in 80.
        assert_eq!(positions[1], TokenPos { x: 50, y: 40, line: 1 });
        // Bob would start at 80 and end at 98: wraps.
        assert_eq!(positions[2], TokenPos { x: 20, y: 70, line: 2 });
        assert_eq!(positions[3], TokenPos { x: 50, y: 70, line: 2 });
    }

    #[test]
    fn no_leading_gap_after_wrap() {
        let cfg = narrow();
        let positions = layout(["aaaaaaaa", "bbbbbbbb"], &cfg);
        assert_eq!(positions[0].x, cfg.x_min);
        assert_eq!(positions[1].x, cfg.x_min);
        assert_eq!(positions[1].line, 2);
    }

    #[test]
    fn oversized_token_is_placed_whole() {
        let cfg = narrow();
        // 20 cells * 6px = 120px, wider than the 60px line.
        let positions = layout(["x", "aaaaaaaaaaaaaaaaaaaa", "y"], &cfg);
        assert_eq!(positions[1].x, cfg.x_min);
        assert_eq!(positions[1].line, 2);
        // The stream continues on the next line after the overflow.
        assert_eq!(positions[2].line, 3);
    }

    #[test]
    fn empty_stream_yields_no_positions() {
        assert!(layout(std::iter::empty::<&str>(), &narrow()).is_empty());
    }

    #[test]
    fn presets_share_cell_metrics() {
        let p = LayoutConfig::passage();
        let q = LayoutConfig::question();
        let a = LayoutConfig::answer();
        assert_eq!((p.cell_width, p.cell_height), (6, 8));
        assert_eq!(q.x_max, 980);
        assert_eq!(q.y_start, 26);
        assert_eq!(a.y_start, 125);
        assert_eq!(a.x_max, q.x_max);
    }

    #[test]
    fn wide_chars_count_two_cells() {
        assert_eq!(display_cells("日本"), 4);
        assert_eq!(LayoutConfig::passage().token_width("日本"), 24);
    }

    proptest! {
        // Positions are deterministic for a fixed stream and config.
        #[test]
        fn layout_is_deterministic(words in prop::collection::vec("[a-z]{1,12}", 0..60)) {
            let cfg = narrow();
            let texts: Vec<&str> = words.iter().map(String::as_str).collect();
            let a = layout(texts.iter().copied(), &cfg);
            let b = layout(texts.iter().copied(), &cfg);
            prop_assert_eq!(a, b);
        }

        // No token's right edge exceeds x_max unless the token alone is
        // wider than the line.
        #[test]
        fn wrap_respects_right_bound(words in prop::collection::vec("[a-z]{1,20}", 1..80)) {
            let cfg = narrow();
            let texts: Vec<&str> = words.iter().map(String::as_str).collect();
            let positions = layout(texts.iter().copied(), &cfg);
            for (text, pos) in texts.iter().zip(&positions) {
                let width = cfg.token_width(text);
                if width <= cfg.x_max - cfg.x_min {
                    prop_assert!(pos.x + width <= cfg.x_max);
                }
            }
        }

        // Lines advance monotonically and x resets at every line start.
        #[test]
        fn lines_are_monotonic(words in prop::collection::vec("[a-z]{1,12}", 1..80)) {
            let cfg = narrow();
            let texts: Vec<&str> = words.iter().map(String::as_str).collect();
            let positions = layout(texts.iter().copied(), &cfg);
            for pair in positions.windows(2) {
                prop_assert!(pair[1].line >= pair[0].line);
                if pair[1].line > pair[0].line {
                    prop_assert_eq!(pair[1].x, cfg.x_min);
                    prop_assert_eq!(
                        pair[1].y - pair[0].y,
                        cfg.line_pitch * (pair[1].line - pair[0].line) as i32
                    );
                }
            }
        }
    }
}
