#![forbid(unsafe_code)]

//! Dependency arc geometry.
//!
//! For each edge of a sentence's dependency table whose relation belongs to
//! an enabled DEP tag group, emit a curved arc from the dependent token to
//! its governor. The arc starts below the dependent's cell, bulges further
//! downward (control point below both endpoints), and lands just below the
//! governor's top edge. The consistent downward bulge is what visually
//! distinguishes dependency arcs from coreference arcs.

use gloss_core::geometry::{PixelPos, PixelRect};
use gloss_core::model::DepTable;
use gloss_layout::{LayoutConfig, display_cells};
use gloss_style::{DEP_ARC_COLOR, GroupSet, TagScheme, resolve_color};

use crate::{ArcPath, RootCell, TokenCell, arc_landing};

/// Vertical drop from the dependent's cell to the arc's start point.
const ARC_START_DROP: i32 = 6;

/// Downward offset of the control point below the lower endpoint.
const ARC_BULGE: i32 = 28;

/// Dependency arcs for one sentence, plus its ROOT token if any.
#[derive(Debug, Clone, PartialEq)]
pub struct DepArcs {
    pub arcs: Vec<ArcPath>,
    /// The ROOT-marked token renders as a bordered cell instead of an arc.
    pub root: Option<RootCell>,
}

/// Build arcs for one sentence's dependency table.
///
/// `tokens` is that sentence's laid-out token slice; edge indices are
/// sentence-local. Edges referring to tokens outside the slice are skipped.
#[must_use]
pub fn build_dependency_arcs(
    deps: &DepTable,
    tokens: &[TokenCell<'_>],
    enabled: GroupSet,
    cfg: &LayoutConfig,
) -> DepArcs {
    let mut arcs = Vec::new();
    for edge in &deps.edges {
        if resolve_color(&edge.relation, TagScheme::Dep, enabled).is_none() {
            continue;
        }
        let (Some(dependent), Some(governor)) =
            (tokens.get(edge.dependent), tokens.get(edge.governor))
        else {
            tracing::warn!(
                relation = %edge.relation,
                governor = edge.governor,
                dependent = edge.dependent,
                "dependency edge outside token table, skipping"
            );
            continue;
        };
        let from = PixelPos::new(
            dependent.pos.x,
            dependent.pos.y + cfg.cell_height + ARC_START_DROP,
        );
        let control = PixelPos::new(
            (from.x + governor.pos.x) / 2,
            from.y.max(governor.pos.y) + ARC_BULGE,
        );
        arcs.push(ArcPath {
            from,
            control,
            to: arc_landing(governor.pos, cfg.cell_height),
            color: DEP_ARC_COLOR,
        });
    }

    let root = deps.root.and_then(|index| {
        let token = tokens.get(index)?;
        Some(RootCell {
            token: index,
            rect: root_border(token, cfg),
        })
    });

    DepArcs { arcs, root }
}

/// Border rectangle drawn around the ROOT token's cell.
fn root_border(token: &TokenCell<'_>, cfg: &LayoutConfig) -> PixelRect {
    let width = display_cells(token.text) * cfg.cell_width;
    PixelRect::from_corners(
        token.pos.x - 3,
        token.pos.y - 2,
        token.pos.x + width + 4,
        token.pos.y + cfg.cell_height + 7,
    )
}
