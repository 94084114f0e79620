#![forbid(unsafe_code)]

//! Tag schemes, highlight groups, and colors.
//!
//! Token coloring is driven by one of three tag schemes (part-of-speech,
//! named-entity, dependency relation). Each scheme owns a fixed, ordered set
//! of [`TagGroup`]s: a named set of raw tags sharing one display color. The
//! resolver walks the groups in declared priority order and the first
//! enabled group containing the tag wins.
//!
//! # Example
//! ```
//! use gloss_style::{GroupSet, TagScheme, resolve_color};
//!
//! let enabled = GroupSet::NOUN | GroupSet::VERB;
//! let color = resolve_color("NNS", TagScheme::Pos, enabled);
//! assert!(color.is_some());
//! // Disabled groups never match.
//! assert!(resolve_color("JJ", TagScheme::Pos, enabled).is_none());
//! ```

pub mod color;
pub mod palette;
pub mod tags;

pub use color::Rgb;
pub use palette::{
    COREF_PALETTE, DEFAULT_TOKEN_BG, DEP_ARC_COLOR, PaletteCycle, RANK_TEXT, RANK_TOP_BG,
    RANK_TOP_TEXT, RATIONALE_ALPHA, RATIONALE_FILL,
};
pub use tags::{
    COLLAPSED_TAG, GroupSet, TAG_GROUPS, TagGroup, TagScheme, effective_tags, groups_for,
    resolve_color,
};
