#![forbid(unsafe_code)]

//! Ingest layer for the preprocessed annotation corpus and the external
//! sentence-score table.
//!
//! The NLP pipeline emits a JSON corpus of tagged passages and a
//! line-oriented score file (`P.Q.S score`, one sentence-score per line).
//! This crate deserializes both into the `gloss-core` model, normalizing
//! 1-based dependency indices to 0-based and splitting out ROOT edges.
//!
//! Both inputs are required precomputed assets: malformed content is a
//! fatal parse error here. A *missing* score entry for a valid
//! passage/question pair, by contrast, is normal and yields an empty slice
//! at lookup time.

pub mod ingest;
pub mod raw;
pub mod scores;

pub use ingest::{CorpusError, parse_corpus};
pub use scores::{ScoreTable, ScoreTableError};
