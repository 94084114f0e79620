#![forbid(unsafe_code)]

//! Substring search over the three token collections of the current view.
//!
//! Matches are ordered passage tokens first (ascending index), then question
//! tokens, then answer tokens. A query with no matches reports "not found"
//! and leaves any previous match list and cursor untouched; repeating the
//! active query advances the cursor instead of re-scanning. The index is
//! rebuilt (and any active search dropped) on every navigation event.

use gloss_core::geometry::PixelRect;
use gloss_layout::{LayoutConfig, TokenPos, display_cells};
use gloss_style::Rgb;

/// Outline color of the match-highlight rectangle.
pub const MATCH_OUTLINE: Rgb = Rgb::from_u24(0x0000FF);

/// Which token collection a match came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenOrigin {
    Passage,
    Question,
    Answer,
}

/// One search hit: a token identified by origin and index within that
/// origin's numbering space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    pub origin: TokenOrigin,
    pub index: usize,
}

#[derive(Debug)]
struct ActiveSearch {
    query: String,
    /// Never empty; a no-match query does not become active.
    matches: Vec<SearchMatch>,
    cursor: usize,
}

/// The search/navigation index for one view.
#[derive(Debug, Default)]
pub struct SearchIndex {
    passage: Vec<String>,
    question: Vec<String>,
    answer: Vec<String>,
    active: Option<ActiveSearch>,
}

impl SearchIndex {
    /// Build the index from the three token-text collections, each indexed
    /// by token position in its stream.
    #[must_use]
    pub fn new(passage: Vec<String>, question: Vec<String>, answer: Vec<String>) -> Self {
        Self {
            passage,
            question,
            answer,
            active: None,
        }
    }

    /// Run a query, or advance the cursor when the query repeats the active
    /// one. Returns the match under the cursor, or `None` for "not found"
    /// (in which case any previous search state is left as it was). An
    /// empty query is ignored.
    pub fn search(&mut self, query: &str) -> Option<SearchMatch> {
        if query.is_empty() {
            return None;
        }
        if let Some(active) = &mut self.active {
            if active.query == query {
                active.cursor = (active.cursor + 1) % active.matches.len();
                return Some(active.matches[active.cursor]);
            }
        }

        let needle = query.to_lowercase();
        let mut matches = Vec::new();
        let collections = [
            (TokenOrigin::Passage, &self.passage),
            (TokenOrigin::Question, &self.question),
            (TokenOrigin::Answer, &self.answer),
        ];
        for (origin, texts) in collections {
            for (index, text) in texts.iter().enumerate() {
                if text.to_lowercase().contains(&needle) {
                    matches.push(SearchMatch { origin, index });
                }
            }
        }
        if matches.is_empty() {
            return None;
        }
        self.active = Some(ActiveSearch {
            query: query.to_string(),
            matches,
            cursor: 0,
        });
        self.current()
    }

    /// Cyclically advance the cursor. No-op when no search is active.
    pub fn next(&mut self) -> Option<SearchMatch> {
        let active = self.active.as_mut()?;
        active.cursor = (active.cursor + 1) % active.matches.len();
        Some(active.matches[active.cursor])
    }

    /// Cyclically retreat the cursor. No-op when no search is active.
    pub fn prev(&mut self) -> Option<SearchMatch> {
        let active = self.active.as_mut()?;
        active.cursor = (active.cursor + active.matches.len() - 1) % active.matches.len();
        Some(active.matches[active.cursor])
    }

    /// The match under the cursor, if a search is active.
    #[must_use]
    pub fn current(&self) -> Option<SearchMatch> {
        self.active.as_ref().map(|a| a.matches[a.cursor])
    }

    /// Number of matches of the active search.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.active.as_ref().map_or(0, |a| a.matches.len())
    }

    /// Drop any active search; called on every navigation event.
    pub fn invalidate(&mut self) {
        self.active = None;
    }
}

/// The thick outline drawn around the matched token's cell.
#[must_use]
pub fn match_outline(pos: TokenPos, text: &str, cfg: &LayoutConfig) -> PixelRect {
    PixelRect::from_corners(
        pos.x - 6,
        pos.y - 4,
        pos.x + display_cells(text) * cfg.cell_width + 7,
        pos.y + 18,
    )
}
