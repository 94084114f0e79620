#![forbid(unsafe_code)]

//! Coreference arc geometry.
//!
//! Every mention of a cluster links to the cluster's representative
//! mention. Unlike dependency arcs, the control point does not follow the
//! endpoints: the raw midpoint is snapped to quadrant constants (quarter /
//! three-quarter marks of the canvas) so that many simultaneous arcs fan
//! out instead of piling up near the canvas center.

use gloss_core::geometry::{CanvasBounds, PixelPos};
use gloss_core::model::CorefCluster;
use gloss_layout::{LayoutConfig, TokenPos};
use gloss_style::PaletteCycle;

use crate::{ArcPath, arc_landing};

/// Build arcs for all clusters of a passage.
///
/// `sentence_starts` maps a sentence index to the global index of its first
/// token; `positions` is the passage-wide position table. A cluster with no
/// representative mention is a data error: it is skipped (and logged), the
/// remaining clusters still draw. The palette cycle advances once per arc
/// drawn, not once per cluster.
#[must_use]
pub fn build_coref_arcs(
    clusters: &[CorefCluster],
    sentence_starts: &[usize],
    positions: &[TokenPos],
    canvas: CanvasBounds,
    cfg: &LayoutConfig,
    palette: &mut PaletteCycle,
) -> Vec<ArcPath> {
    let locate = |sentence: usize, token_start: usize| -> Option<TokenPos> {
        let global = sentence_starts.get(sentence)? + token_start;
        positions.get(global).copied()
    };

    let mut arcs = Vec::new();
    for (index, cluster) in clusters.iter().enumerate() {
        let Some(rep) = cluster.representative() else {
            tracing::warn!(cluster = index, "cluster has no representative mention, skipping");
            continue;
        };
        let Some(rep_pos) = locate(rep.sentence, rep.token_start) else {
            tracing::warn!(cluster = index, "representative mention outside token table, skipping");
            continue;
        };

        for mention in cluster.mentions.iter().filter(|m| !m.representative) {
            let Some(from) = locate(mention.sentence, mention.token_start) else {
                tracing::warn!(cluster = index, "mention outside token table, skipping");
                continue;
            };
            let from = PixelPos::new(from.x, from.y);
            let mid = from.midpoint(PixelPos::new(rep_pos.x, rep_pos.y));
            arcs.push(ArcPath {
                from,
                control: snap_to_quadrant(mid, canvas),
                to: arc_landing(rep_pos, cfg.cell_height),
                color: palette.advance(),
            });
        }
    }
    arcs
}

/// Snap a midpoint to the center of its canvas quadrant.
fn snap_to_quadrant(mid: PixelPos, canvas: CanvasBounds) -> PixelPos {
    let x = if mid.x < canvas.h_center() {
        canvas.h_center() / 2
    } else {
        canvas.h_center() * 3 / 2
    };
    let y = if mid.y < canvas.v_center() {
        canvas.v_center() / 2
    } else {
        canvas.v_center() * 3 / 2
    };
    PixelPos::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloss_core::model::Mention;
    use gloss_layout::PASSAGE_CANVAS;
    use gloss_style::COREF_PALETTE;

    fn mention(sentence: usize, token_start: usize, representative: bool) -> Mention {
        Mention {
            sentence,
            token_start,
            representative,
        }
    }

    fn positions(coords: &[(i32, i32)]) -> Vec<TokenPos> {
        coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| TokenPos {
                x,
                y,
                line: 1 + i as u32,
            })
            .collect()
    }

    #[test]
    fn arcs_point_at_representative() {
        let cfg = LayoutConfig::passage();
        let clusters = vec![CorefCluster {
            mentions: vec![mention(0, 0, true), mention(0, 1, false), mention(1, 0, false)],
        }];
        let pos = positions(&[(20, 40), (120, 40), (20, 70)]);
        let mut palette = PaletteCycle::new();
        let arcs = build_coref_arcs(
            &clusters,
            &[0, 2],
            &pos,
            PASSAGE_CANVAS,
            &cfg,
            &mut palette,
        );

        assert_eq!(arcs.len(), 2);
        // Both arcs land below the representative at (20, 40).
        for arc in &arcs {
            assert_eq!(arc.to, PixelPos::new(20, 52));
        }
        assert_eq!(arcs[0].from, PixelPos::new(120, 40));
        assert_eq!(arcs[1].from, PixelPos::new(20, 70));
    }

    #[test]
    fn midpoints_snap_to_quadrants() {
        // Passage canvas is 1500x500: centers 750/250, bands 375/1125 and
        // 125/375.
        let c = PASSAGE_CANVAS;
        assert_eq!(
            snap_to_quadrant(PixelPos::new(100, 60), c),
            PixelPos::new(375, 125)
        );
        assert_eq!(
            snap_to_quadrant(PixelPos::new(1400, 60), c),
            PixelPos::new(1125, 125)
        );
        assert_eq!(
            snap_to_quadrant(PixelPos::new(100, 400), c),
            PixelPos::new(375, 375)
        );
        assert_eq!(
            snap_to_quadrant(PixelPos::new(800, 260), c),
            PixelPos::new(1125, 375)
        );
    }

    #[test]
    fn palette_advances_per_arc_across_clusters() {
        let cfg = LayoutConfig::passage();
        let clusters = vec![
            CorefCluster {
                mentions: vec![mention(0, 0, true), mention(0, 1, false)],
            },
            CorefCluster {
                mentions: vec![mention(0, 2, true), mention(0, 3, false)],
            },
        ];
        let pos = positions(&[(20, 40), (120, 40), (220, 40), (320, 40)]);
        let mut palette = PaletteCycle::new();
        let arcs = build_coref_arcs(
            &clusters,
            &[0],
            &pos,
            PASSAGE_CANVAS,
            &cfg,
            &mut palette,
        );
        assert_eq!(arcs.len(), 2);
        assert_eq!(arcs[0].color, COREF_PALETTE[1]);
        assert_eq!(arcs[1].color, COREF_PALETTE[2]);
    }

    #[test]
    fn cluster_without_representative_is_skipped() {
        let cfg = LayoutConfig::passage();
        let clusters = vec![
            CorefCluster {
                mentions: vec![mention(0, 0, false), mention(0, 1, false)],
            },
            CorefCluster {
                mentions: vec![mention(0, 0, true), mention(0, 1, false)],
            },
        ];
        let pos = positions(&[(20, 40), (120, 40)]);
        let mut palette = PaletteCycle::new();
        let arcs = build_coref_arcs(
            &clusters,
            &[0],
            &pos,
            PASSAGE_CANVAS,
            &cfg,
            &mut palette,
        );
        // Only the well-formed cluster draws.
        assert_eq!(arcs.len(), 1);
    }
}
