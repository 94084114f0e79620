#![forbid(unsafe_code)]

//! Sentence-relevance ranking badges.
//!
//! Scores are computed externally per (passage, question, sentence); this
//! module only ranks them and anchors a badge at each sentence's first
//! token. The sort is stable: equal scores keep their original relative
//! order.

use std::cmp::Ordering;

use gloss_core::geometry::{PixelPos, PixelRect};
use gloss_layout::TokenPos;
use gloss_style::{RANK_TEXT, RANK_TOP_BG, RANK_TOP_TEXT, Rgb};

/// Horizontal offset of a badge left of its sentence's first token.
const BADGE_DX: i32 = -10;

/// Vertical offset of a badge above its sentence's first token.
const BADGE_DY: i32 = -12;

/// One ranked sentence badge.
#[derive(Debug, Clone, PartialEq)]
pub struct RankBadge {
    /// Sentence index within the passage.
    pub sentence: usize,
    /// Externally computed relevance score.
    pub score: f32,
    /// Dense rank starting at 1 (1 = most relevant).
    pub rank: u32,
    /// Top-left anchor of the badge text.
    pub anchor: PixelPos,
    /// Rendered badge text, e.g. `#1  0.937`.
    pub label: String,
    /// Badge text color; the rank-1 badge is emphasized.
    pub text_color: Rgb,
    /// Backing rectangle behind the rank-1 badge, `None` otherwise.
    pub backing: Option<PixelRect>,
}

/// Rank a score list and anchor each entry at its sentence's first token.
///
/// An empty score list (no entries for this passage/question pair) yields
/// an empty ranking; that is the normal "no scores" case, not an error.
/// Entries pointing at unknown sentences are dropped.
#[must_use]
pub fn rank_scores(
    scores: &[(usize, f32)],
    sentence_starts: &[usize],
    positions: &[TokenPos],
) -> Vec<RankBadge> {
    let mut ordered: Vec<(usize, f32)> = scores.to_vec();
    // sort_by is stable, so ties keep their original relative order.
    ordered.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut badges = Vec::with_capacity(ordered.len());
    let mut rank = 1u32;
    for (sentence, score) in ordered {
        let Some(pos) = sentence_starts
            .get(sentence)
            .and_then(|&start| positions.get(start))
        else {
            tracing::warn!(sentence, "score entry for unknown sentence, dropping");
            continue;
        };
        let anchor = PixelPos::new(pos.x + BADGE_DX, pos.y + BADGE_DY);
        let emphasized = rank == 1;
        badges.push(RankBadge {
            sentence,
            score,
            rank,
            anchor,
            label: format!("#{rank}  {score:.3}"),
            text_color: if emphasized { RANK_TOP_TEXT } else { RANK_TEXT },
            backing: emphasized.then(|| {
                PixelRect::from_corners(pos.x - 10, pos.y - 12, pos.x + 30, pos.y - 1)
            }),
        });
        rank += 1;
    }
    badges
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn first_token_positions(n: usize) -> (Vec<usize>, Vec<TokenPos>) {
        let starts: Vec<usize> = (0..n).collect();
        let positions = (0..n)
            .map(|i| TokenPos {
                x: 20 + 100 * i as i32,
                y: 40,
                line: 1,
            })
            .collect();
        (starts, positions)
    }

    #[test]
    fn ties_preserve_original_order() {
        let (starts, positions) = first_token_positions(3);
        let badges = rank_scores(&[(0, 0.5), (1, 0.9), (2, 0.9)], &starts, &positions);
        let order: Vec<(u32, usize)> = badges.iter().map(|b| (b.rank, b.sentence)).collect();
        assert_eq!(order, vec![(1, 1), (2, 2), (3, 0)]);
    }

    #[test]
    fn only_top_rank_is_emphasized() {
        let (starts, positions) = first_token_positions(2);
        let badges = rank_scores(&[(0, 0.1), (1, 0.8)], &starts, &positions);
        assert_eq!(badges[0].text_color, RANK_TOP_TEXT);
        assert!(badges[0].backing.is_some());
        assert_eq!(badges[1].text_color, RANK_TEXT);
        assert!(badges[1].backing.is_none());
    }

    #[test]
    fn badge_anchor_and_label() {
        let (starts, positions) = first_token_positions(1);
        let badges = rank_scores(&[(0, 0.9375)], &starts, &positions);
        assert_eq!(badges[0].anchor, PixelPos::new(10, 28));
        assert_eq!(badges[0].label, "#1  0.938");
        assert_eq!(
            badges[0].backing,
            Some(PixelRect::from_corners(10, 28, 50, 39))
        );
    }

    #[test]
    fn empty_scores_yield_empty_ranking() {
        let (starts, positions) = first_token_positions(3);
        assert!(rank_scores(&[], &starts, &positions).is_empty());
    }

    #[test]
    fn unknown_sentence_is_dropped() {
        let (starts, positions) = first_token_positions(1);
        let badges = rank_scores(&[(5, 0.9), (0, 0.1)], &starts, &positions);
        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].sentence, 0);
        assert_eq!(badges[0].rank, 1);
    }

    proptest! {
        // Ranked scores are non-increasing and ranks are dense from 1.
        #[test]
        fn ranking_is_sorted_and_dense(
            raw in prop::collection::vec(0.0f32..1.0, 0..20)
        ) {
            let scores: Vec<(usize, f32)> =
                raw.iter().copied().enumerate().collect();
            let (starts, positions) = first_token_positions(scores.len());
            let badges = rank_scores(&scores, &starts, &positions);
            prop_assert_eq!(badges.len(), scores.len());
            for (i, badge) in badges.iter().enumerate() {
                prop_assert_eq!(badge.rank, i as u32 + 1);
            }
            for pair in badges.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
        }
    }
}
