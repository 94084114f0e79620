#![forbid(unsafe_code)]

//! Rationale span highlighting.
//!
//! The corpus gives each answer a rationale: a raw character span into the
//! passage's untokenized story text. This module maps that span onto the
//! contiguous token range covering it (via each token's raw offset) and
//! synthesizes translucent rectangles over the rendered lines the range
//! occupies: one rectangle when the range fits a single line, two boundary
//! rectangles for adjacent lines, plus one full-width interior rectangle
//! when the range spans more than two lines.

use gloss_core::model::RationaleSpan;
use gloss_layout::{LayoutConfig, display_cells};
use gloss_style::{RATIONALE_ALPHA, RATIONALE_FILL};
use smallvec::SmallVec;

use gloss_core::geometry::PixelRect;

use crate::{HighlightRect, TokenCell};

/// Characters stripped from both ends of the raw span before token lookup.
const TRIM_CHARS: &[char] = &[' ', '\t', '\n', ',', '.', ':'];

/// Extension past the text bounds when a rectangle reaches a canvas edge.
const EDGE_PAD: i32 = 10;

/// Highlight rectangles for one rationale; at most three.
pub type HighlightRects = SmallVec<[HighlightRect; 3]>;

/// Build the highlight rectangles for a rationale span.
///
/// Returns `None` when the span cannot be anchored to a token: an empty
/// span after trimming, or a span start that precedes every token's raw
/// offset. Both are data anomalies; the overlay is skipped for that
/// question rather than failing the view.
#[must_use]
pub fn build_rationale_highlights(
    story: &str,
    span: RationaleSpan,
    tokens: &[TokenCell<'_>],
    cfg: &LayoutConfig,
) -> Option<HighlightRects> {
    let (start, end) = trim_span(story, span)?;
    let first = locate_first_token(tokens, start)?;
    let last = locate_last_token(tokens, first, start, end);

    let f = &tokens[first];
    let l = &tokens[last];
    let pad_above = cfg.line_pitch / 3;
    let pad_below = cfg.line_pitch / 2;

    let mut rects = HighlightRects::new();

    // First (or only) line.
    let x1 = if f.pos.x == cfg.x_min {
        cfg.x_min - EDGE_PAD
    } else {
        f.pos.x - cfg.gap_px()
    };
    let x2 = if l.pos.line != f.pos.line || wraps_after(tokens, last) {
        cfg.x_max + EDGE_PAD
    } else {
        l.pos.x + (display_cells(l.text) + 2) * cfg.cell_width
    };
    rects.push(highlight(PixelRect::from_corners(
        x1,
        f.pos.y - pad_above,
        x2,
        f.pos.y + cfg.cell_height + pad_below,
    )));

    // Last line, when the range spans more than one.
    if l.pos.line != f.pos.line {
        let x2 = if wraps_after(tokens, last) {
            cfg.x_max + EDGE_PAD
        } else {
            l.pos.x + (display_cells(l.text) + 1) * cfg.cell_width
        };
        rects.push(highlight(PixelRect::from_corners(
            cfg.x_min - EDGE_PAD,
            l.pos.y - pad_above,
            x2,
            l.pos.y + cfg.cell_height + pad_below,
        )));
    }

    // Interior lines are always full-width; one rectangle covers them all.
    if l.pos.line - f.pos.line > 1 {
        rects.push(highlight(PixelRect::from_corners(
            cfg.x_min - EDGE_PAD,
            f.pos.y + cfg.cell_height + pad_below + 1,
            cfg.x_max + EDGE_PAD,
            l.pos.y - pad_above,
        )));
    }

    Some(rects)
}

fn highlight(rect: PixelRect) -> HighlightRect {
    HighlightRect {
        rect,
        fill: RATIONALE_FILL,
        alpha: RATIONALE_ALPHA,
    }
}

/// Whether the token after `index` starts a new line (or nothing follows
/// on the same line).
fn wraps_after(tokens: &[TokenCell<'_>], index: usize) -> bool {
    match tokens.get(index + 1) {
        Some(next) => next.pos.line != tokens[index].pos.line,
        None => false,
    }
}

/// Strip leading/trailing trim characters, returning the adjusted
/// character-offset span. `None` when nothing remains.
fn trim_span(story: &str, span: RationaleSpan) -> Option<(usize, usize)> {
    let chars: Vec<char> = story.chars().collect();
    let mut start = span.start.min(chars.len());
    let mut end = span.end.min(chars.len());
    while start < end && TRIM_CHARS.contains(&chars[start]) {
        start += 1;
    }
    while end > start && TRIM_CHARS.contains(&chars[end - 1]) {
        end -= 1;
    }
    if start >= end {
        tracing::debug!(start = span.start, end = span.end, "rationale span empty after trim");
        return None;
    }
    Some((start, end))
}

/// The first token of the span: the last token whose raw offset is at or
/// before `start`. `None` (anomaly) when `start` precedes every token.
fn locate_first_token(tokens: &[TokenCell<'_>], start: usize) -> Option<usize> {
    let k = tokens.iter().position(|t| t.raw_offset >= start);
    match k {
        Some(k) if tokens[k].raw_offset == start => Some(k),
        Some(k) if k > 0 => Some(k - 1),
        _ => {
            tracing::warn!(start, "no token covers rationale span start, skipping overlay");
            None
        }
    }
}

/// The last token of the span, scanning forward from `first`.
fn locate_last_token(tokens: &[TokenCell<'_>], first: usize, start: usize, end: usize) -> usize {
    let span_len = (end - start) as i32;
    if span_len <= display_cells(tokens[first].text) {
        return first;
    }
    let past = tokens[first..]
        .iter()
        .position(|t| t.raw_offset >= end)
        .map_or(tokens.len(), |offset| first + offset);
    past.saturating_sub(1).max(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloss_layout::layout;

    /// Tokenize on spaces, tracking raw character offsets, then lay out.
    fn place<'a>(story: &'a str, cfg: &LayoutConfig) -> Vec<TokenCell<'a>> {
        let mut texts = Vec::new();
        let mut offsets = Vec::new();
        let mut offset = 0usize;
        for word in story.split(' ') {
            if !word.is_empty() {
                texts.push(word);
                offsets.push(offset);
            }
            offset += word.chars().count() + 1;
        }
        layout(texts.iter().copied(), cfg)
            .into_iter()
            .zip(texts.iter().zip(&offsets))
            .map(|(pos, (&text, &raw_offset))| TokenCell {
                text,
                raw_offset,
                pos,
            })
            .collect()
    }

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
    fn single_line_span_yields_one_rect() {
        let cfg = LayoutConfig::passage();
        let story = "Ann met Bob today .";
        let tokens = place(story, &cfg);
        // "met Bob" = chars 4..11.
        let rects =
            build_rationale_highlights(story, RationaleSpan::new(4, 11), &tokens, &cfg).unwrap();
        assert_eq!(rects.len(), 1);
        let r = rects[0].rect;
        // "met" starts at x=50; left-padded by one gap.
        assert_eq!(r.left(), 50 - 12);
        // "Bob" at x=80, 3 cells wide, right-padded by 2 cells.
        assert_eq!(r.right(), 80 + (3 + 2) * 6);
        assert_eq!(r.top(), 40 - 10);
        assert_eq!(r.bottom(), 40 + 8 + 15);
        assert!((rects[0].alpha - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn exact_token_span_is_single_token() {
        let cfg = LayoutConfig::passage();
        let story = "Ann met Bob today .";
        let tokens = place(story, &cfg);
        // "met" = chars 4..7: offset matches token 1 exactly.
        let rects =
            build_rationale_highlights(story, RationaleSpan::new(4, 7), &tokens, &cfg).unwrap();
        assert_eq!(rects.len(), 1);
        // Left edge padded from "met" itself, not from a later token.
        assert_eq!(rects[0].rect.left(), 50 - 12);
        assert_eq!(rects[0].rect.right(), 50 + (3 + 2) * 6);
    }

    #[test]
    fn two_line_span_yields_two_rects() {
        let cfg = narrow();
        // Three 2-char tokens fit per 80px line.
        let story = "ab cd ef gh ij";
        let tokens = place(story, &cfg);
        assert_eq!(tokens[2].pos.line, 1);
        assert_eq!(tokens[3].pos.line, 2);
        // "ef gh" = chars 6..11: crosses the line boundary.
        let rects =
            build_rationale_highlights(story, RationaleSpan::new(6, 11), &tokens, &cfg).unwrap();
        assert_eq!(rects.len(), 2);
        // First rect extends to the right edge, last starts at the left.
        assert_eq!(rects[0].rect.right(), cfg.x_max + 10);
        assert_eq!(rects[1].rect.left(), cfg.x_min - 10);
        // "gh" does not end its line: right-padded by one cell.
        assert_eq!(
            rects[1].rect.right(),
            tokens[3].pos.x + (2 + 1) * cfg.cell_width
        );
    }

    #[test]
    fn multi_line_span_adds_interior_rect() {
        let cfg = narrow();
        let story = "ab cd ef gh ij kl mn";
        let tokens = place(story, &cfg);
        let last = tokens.last().unwrap();
        assert!(last.pos.line >= 3, "need at least three lines");
        let rects = build_rationale_highlights(
            story,
            RationaleSpan::new(0, story.chars().count()),
            &tokens,
            &cfg,
        )
        .unwrap();
        assert_eq!(rects.len(), 3);
        // Interior rect is full width and sits between the boundary rects.
        let interior = rects[2].rect;
        assert_eq!(interior.left(), cfg.x_min - 10);
        assert_eq!(interior.right(), cfg.x_max + 10);
        assert_eq!(interior.top(), rects[0].rect.bottom() + 1);
        assert_eq!(interior.bottom(), rects[1].rect.top());
    }

    #[test]
    fn span_at_line_start_extends_to_left_edge() {
        let cfg = narrow();
        let story = "alpha beta";
        let tokens = place(story, &cfg);
        let rects =
            build_rationale_highlights(story, RationaleSpan::new(0, 5), &tokens, &cfg).unwrap();
        assert_eq!(rects[0].rect.left(), cfg.x_min - 10);
    }

    #[test]
    fn trimming_adjusts_span_ends() {
        let cfg = LayoutConfig::passage();
        let story = "Ann met Bob today .";
        let tokens = place(story, &cfg);
        // " met Bob " trims to "met Bob".
        let trimmed =
            build_rationale_highlights(story, RationaleSpan::new(3, 12), &tokens, &cfg).unwrap();
        let exact =
            build_rationale_highlights(story, RationaleSpan::new(4, 11), &tokens, &cfg).unwrap();
        assert_eq!(trimmed, exact);
    }

    #[test]
    fn span_before_all_tokens_is_anomaly() {
        let cfg = LayoutConfig::passage();
        // Tokens whose offsets all exceed the span start.
        let story = "xx Ann met";
        let mut tokens = place(story, &cfg);
        tokens.remove(0); // drop the token at offset 0
        assert!(
            build_rationale_highlights(story, RationaleSpan::new(0, 2), &tokens, &cfg).is_none()
        );
    }

    #[test]
    fn all_trim_characters_yield_none() {
        let cfg = LayoutConfig::passage();
        let story = "Ann met , . : Bob";
        let tokens = place(story, &cfg);
        assert!(
            build_rationale_highlights(story, RationaleSpan::new(8, 14), &tokens, &cfg).is_none()
        );
    }

    #[test]
    fn span_past_last_token_covers_to_stream_end() {
        let cfg = LayoutConfig::passage();
        let story = "Ann met Bob";
        let tokens = place(story, &cfg);
        // End offset beyond every token offset: last token wins.
        let rects =
            build_rationale_highlights(story, RationaleSpan::new(0, 11), &tokens, &cfg).unwrap();
        assert_eq!(rects.len(), 1);
        assert_eq!(
            rects[0].rect.right(),
            tokens[2].pos.x + (3 + 2) * cfg.cell_width
        );
    }
}
