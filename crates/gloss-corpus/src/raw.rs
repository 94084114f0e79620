#![forbid(unsafe_code)]

//! Serde shapes mirroring the preprocessed JSON corpus.
//!
//! These structs match the file layout exactly; `ingest` converts them into
//! the `gloss-core` model. Token tuples are
//! `(text, pos, lemma, ne, string_map)`; dependency triples are
//! `(relation, governor, dependent)` with 1-based token indices.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level corpus file: `{ "data": [passage, ...] }`.
#[derive(Debug, Deserialize)]
pub struct RawCorpus {
    pub data: Vec<RawPassage>,
}

/// One passage as stored in the corpus file.
#[derive(Debug, Deserialize)]
pub struct RawPassage {
    /// Raw untokenized story text.
    pub story: String,
    /// Source story number.
    pub story_num: u32,
    /// Tagged sentences.
    pub seg_tagged: Vec<Vec<RawToken>>,
    /// Per-sentence dependency triples.
    pub seg_dep: Vec<Vec<RawDep>>,
    /// Tagged questions.
    pub q_tagged: Vec<Vec<RawToken>>,
    /// Per-question dependency triples.
    pub q_dep: Vec<Vec<RawDep>>,
    /// Tagged answers.
    pub a_tagged: Vec<Vec<RawToken>>,
    /// Per-answer dependency triples (absent in older corpus versions).
    #[serde(default)]
    pub a_dep: Vec<Vec<RawDep>>,
    /// Rationale character spans `[start, end)`, one per question.
    pub rationale: Vec<(usize, usize)>,
    /// Coreference chains keyed by chain id. A `BTreeMap` keeps cluster
    /// iteration deterministic regardless of JSON object order.
    #[serde(default)]
    pub corefs: BTreeMap<String, Vec<RawMention>>,
}

/// `(text, pos, lemma, ne, string_map)`.
#[derive(Debug, Deserialize)]
pub struct RawToken(
    pub String,
    pub String,
    pub String,
    pub String,
    pub RawOffset,
);

/// A token's raw character offset; stored as either a string or a number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawOffset {
    Num(usize),
    Text(String),
}

/// `(relation, governor, dependent)`, 1-based; `ROOT` edges carry the root
/// token as dependent.
#[derive(Debug, Deserialize)]
pub struct RawDep(pub String, pub usize, pub usize);

/// One mention of a coreference chain.
#[derive(Debug, Deserialize)]
pub struct RawMention {
    #[serde(rename = "sentNum")]
    pub sent_num: usize,
    #[serde(rename = "startIndex")]
    pub start_index: usize,
    #[serde(rename = "repmention")]
    pub representative: bool,
}
