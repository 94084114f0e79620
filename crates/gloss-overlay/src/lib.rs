#![forbid(unsafe_code)]

//! Overlay geometry builders.
//!
//! Each builder consumes the token position table produced by
//! `gloss-layout` and emits plain geometry descriptors for the renderer:
//!
//! - [`deps`] - curved dependency arcs between dependents and governors
//! - [`coref`] - coreference arcs from mentions to their representative
//! - [`rationale`] - translucent multi-line highlight rectangles for an
//!   answer's rationale span
//! - [`scores`] - ranked sentence-relevance badges
//!
//! Builders are pure functions of their inputs; bad data (a cluster with no
//! representative mention, a span that precedes every token) is skipped and
//! logged, never fatal.

pub mod coref;
pub mod deps;
pub mod rationale;
pub mod scores;

use gloss_core::geometry::{PixelPos, PixelRect};
use gloss_layout::TokenPos;
use gloss_style::Rgb;

pub use coref::build_coref_arcs;
pub use deps::{DepArcs, build_dependency_arcs};
pub use rationale::{HighlightRects, build_rationale_highlights};
pub use scores::{RankBadge, rank_scores};

/// The per-token view the overlay builders need: surface text, raw source
/// offset, and resolved layout position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCell<'a> {
    pub text: &'a str,
    pub raw_offset: usize,
    pub pos: TokenPos,
}

/// Vertical drop from a target token's top edge to where an arc lands.
pub const ARC_LAND_DROP: i32 = 4;

/// A curved link between two tokens, rendered as a quadratic path.
///
/// The control point differs per overlay: dependency arcs bulge downward
/// below both endpoints, coreference arcs snap to quadrant constants so
/// many simultaneous arcs stay visually separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcPath {
    /// Start of the arc (at the source token).
    pub from: PixelPos,
    /// Quadratic control point.
    pub control: PixelPos,
    /// End of the arc (below the target token); rendered with an arrowhead.
    pub to: PixelPos,
    /// Stroke color.
    pub color: Rgb,
}

/// A translucent highlight rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightRect {
    pub rect: PixelRect,
    pub fill: Rgb,
    /// Opacity in `0.0..=1.0`; always below 1 so underlying text stays
    /// legible.
    pub alpha: f32,
}

/// Bordered-cell descriptor for a sentence's ROOT token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootCell {
    /// Global index of the root token within its stream.
    pub token: usize,
    /// Border rectangle around the token's cell.
    pub rect: PixelRect,
}

pub(crate) fn arc_landing(target: TokenPos, cell_height: i32) -> PixelPos {
    PixelPos::new(target.x, target.y + cell_height + ARC_LAND_DROP)
}
