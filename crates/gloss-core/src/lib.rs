#![forbid(unsafe_code)]

//! Core types for the annotated-text viewer.
//!
//! This crate holds the pieces everything else builds on:
//! - [`geometry`] - pixel-space points and rectangles
//! - [`model`] - the annotated corpus data model (tokens, sentences,
//!   passages, dependency tables, coreference clusters)
//!
//! Both layers are pure data: no I/O, no rendering, deterministic given the
//! same inputs.

pub mod geometry;
pub mod model;

pub use geometry::{CanvasBounds, PixelPos, PixelRect};
pub use model::{
    CorefCluster, DepEdge, DepTable, Mention, Passage, RationaleSpan, Sentence, TaggedStream,
    Token,
};
