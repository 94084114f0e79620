#![forbid(unsafe_code)]

//! View assembly: immutable view state, the synchronous recompute pass that
//! turns a passage and its current question into a renderable [`Scene`],
//! substring search over the laid-out token collections, and hover popups.
//!
//! Everything in this crate is derived data. A navigation event (passage or
//! question change, scheme or overlay toggle) replaces the [`ViewState`]
//! value, rebuilds the scene wholesale, and invalidates the search index;
//! nothing is patched incrementally.

pub mod hover;
pub mod scene;
pub mod search;
pub mod state;

pub use hover::{HoverPopup, hover_lines, hover_popup, place_popup};
pub use scene::{Scene, SceneToken, StreamScene, build_scene};
pub use search::{MATCH_OUTLINE, SearchIndex, SearchMatch, TokenOrigin, match_outline};
pub use state::ViewState;
