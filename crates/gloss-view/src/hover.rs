#![forbid(unsafe_code)]

//! Hover popup content and placement.
//!
//! Hovering a token shows its annotations: POS tag, lemma (unless it is the
//! `"~"` placeholder for "same as surface form"), named-entity type (unless
//! absent), the governor edge, and a locator line. Placement is clamped so
//! the popup never crosses the canvas edges. Hover state lives entirely in
//! pointer enter/leave; nothing here touches the scene tables.

use gloss_core::geometry::{CanvasBounds, PixelPos};
use gloss_layout::{LayoutConfig, display_cells};
use gloss_style::COLLAPSED_TAG;

use crate::scene::SceneToken;

/// Popup offset right of the pointer.
const POPUP_DX: i32 = 5;

/// Popup offset below the pointer.
const POPUP_DY: i32 = 12;

/// Vertical spacing added per popup text line.
const LINE_GAP: i32 = 15;

/// A positioned hover popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverPopup {
    pub lines: Vec<String>,
    /// Top-left corner, already clamped to the canvas.
    pub origin: PixelPos,
}

/// Build and place the popup for the token at `index` in its stream.
///
/// `None` when the index is outside the stream (a stale hover event after a
/// navigation).
#[must_use]
pub fn hover_popup(
    tokens: &[SceneToken],
    index: usize,
    canvas: CanvasBounds,
    cfg: &LayoutConfig,
) -> Option<HoverPopup> {
    let token = tokens.get(index)?;
    let lines = hover_lines(tokens, index);
    let pointer = PixelPos::new(token.pos.x, token.pos.y);
    Some(HoverPopup {
        origin: place_popup(pointer, &lines, canvas, cfg),
        lines,
    })
}

/// The popup's text lines for the token at `index`.
///
/// A collapsed named-entity sentinel is resolved by backtracking to the
/// nearest earlier token carrying the real tag.
#[must_use]
pub fn hover_lines(tokens: &[SceneToken], index: usize) -> Vec<String> {
    let Some(token) = tokens.get(index) else {
        return Vec::new();
    };
    let mut lines = vec![format!("POS: {}", token.pos_tag)];
    if token.lemma != "~" {
        lines.push(format!("lemma: {}", token.lemma));
    }
    if token.ne_tag != "-" {
        let ne = if token.ne_tag == COLLAPSED_TAG {
            tokens[..index]
                .iter()
                .rev()
                .map(|t| t.ne_tag.as_str())
                .find(|&t| t != COLLAPSED_TAG)
        } else {
            Some(token.ne_tag.as_str())
        };
        if let Some(ne) = ne {
            lines.push(format!("NE: {ne}"));
        }
    }
    if let Some((relation, governor)) = &token.dep {
        if let Some(gov) = tokens.get(*governor) {
            lines.push(format!("DEP: {relation}({})", gov.text));
        }
    }
    lines.push(format!(
        "S{}/W{}/X{}/Y{}/L{}",
        token.sentence + 1,
        token.index_in_sentence + 1,
        token.pos.x,
        token.pos.y,
        token.pos.line
    ));
    lines
}

/// Clamp the popup's top-left corner inside the canvas: shift left when it
/// would cross the right edge, flip above the pointer when it would cross
/// the bottom.
#[must_use]
pub fn place_popup(
    pointer: PixelPos,
    lines: &[String],
    canvas: CanvasBounds,
    cfg: &LayoutConfig,
) -> PixelPos {
    let width_cells = lines.iter().map(|l| display_cells(l)).max().unwrap_or(0);
    let height_lines = lines.len() as i32;
    let max_x = canvas.width - 1;
    let max_y = canvas.height - 1;

    let mut x = pointer.x + POPUP_DX;
    let mut y = pointer.y + POPUP_DY;
    if x + width_cells * cfg.cell_width > max_x {
        x = max_x - width_cells * cfg.cell_width;
    }
    if y + height_lines * (cfg.cell_height + LINE_GAP) > max_y {
        y -= height_lines * (cfg.cell_height + LINE_GAP);
    }
    PixelPos::new(x, y)
}
