#![forbid(unsafe_code)]

//! The annotated corpus data model.
//!
//! Everything here is produced by an external NLP pipeline and arrives
//! already deserialized (see `gloss-corpus` for the ingest layer). The model
//! is immutable once loaded; per-view structures (positions, overlays,
//! search indexes) are derived from it and rebuilt wholesale on every
//! navigation event.
//!
//! Dependency edges are stored 0-based with the `ROOT` edge split out as the
//! sentence's root token index; the ingest layer performs that
//! normalization.

/// A single annotated token.
///
/// `raw_offset` (the "string map") is the character offset of the token's
/// first character in the untokenized source text; the rationale
/// highlighter uses it to map character spans back onto token ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface form.
    pub text: String,
    /// Part-of-speech tag.
    pub pos_tag: String,
    /// Named-entity tag (`"-"` when none).
    pub ne_tag: String,
    /// Lemma (`"~"` when identical to the surface form).
    pub lemma: String,
    /// Character offset into the raw source text.
    pub raw_offset: usize,
    /// Index of the owning sentence within its stream (0 for questions and
    /// answers, which are single-sentence).
    pub sentence: usize,
    /// Index of this token within its sentence.
    pub index_in_sentence: usize,
}

/// A dependency edge between two tokens of one sentence (0-based,
/// sentence-local indices).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepEdge {
    /// Relation type, upper-cased (e.g. `NSUBJ`, `DOBJ`).
    pub relation: String,
    /// Token index of the governor.
    pub governor: usize,
    /// Token index of the dependent.
    pub dependent: usize,
}

/// The dependency parse of one sentence.
///
/// At most one token is marked as the parse root; the root has no incoming
/// edge in `edges`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DepTable {
    pub edges: Vec<DepEdge>,
    pub root: Option<usize>,
}

impl DepTable {
    /// Table with no edges and no root.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            edges: Vec::new(),
            root: None,
        }
    }

    /// The edge whose dependent is token `index`, if any.
    #[must_use]
    pub fn edge_for_dependent(&self, index: usize) -> Option<&DepEdge> {
        self.edges.iter().find(|e| e.dependent == index)
    }
}

/// One sentence of a passage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub tokens: Vec<Token>,
    pub deps: DepTable,
}

/// A question or answer: a single tagged token stream with its own
/// dependency table and its own token numbering space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedStream {
    pub tokens: Vec<Token>,
    pub deps: DepTable,
}

/// A single mention inside a coreference cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mention {
    /// Sentence index within the passage.
    pub sentence: usize,
    /// First token of the mention within that sentence.
    pub token_start: usize,
    /// Whether this is the cluster's canonical mention.
    pub representative: bool,
}

/// A set of mentions referring to the same entity.
///
/// Exactly one mention per cluster should be representative; a cluster
/// without one is a data error and is skipped by the arc builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorefCluster {
    pub mentions: Vec<Mention>,
}

impl CorefCluster {
    /// The representative mention, or `None` when the data is missing one.
    ///
    /// If several mentions are (erroneously) marked, the last wins.
    #[must_use]
    pub fn representative(&self) -> Option<&Mention> {
        self.mentions.iter().rev().find(|m| m.representative)
    }
}

/// A rationale character span `[start, end)` into a passage's raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RationaleSpan {
    pub start: usize,
    pub end: usize,
}

impl RationaleSpan {
    /// Create a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span length in characters.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no characters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// One news story with its questions, answers, and annotations.
///
/// `rationales[i]` justifies `answers[i]` for `questions[i]`; the three
/// vectors are index-aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    /// Raw untokenized story text.
    pub story: String,
    /// Source story number (display only).
    pub story_num: u32,
    pub sentences: Vec<Sentence>,
    pub questions: Vec<TaggedStream>,
    pub answers: Vec<TaggedStream>,
    pub rationales: Vec<RationaleSpan>,
    pub corefs: Vec<CorefCluster>,
}

impl Passage {
    /// Number of question/answer pairs.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Total token count across all sentences.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(|s| s.tokens.len()).sum()
    }

    /// Global (passage-wide) index of each sentence's first token.
    ///
    /// Token indices form a dense zero-based sequence over the flattened
    /// sentence stream; this table converts `(sentence, token_in_sentence)`
    /// coordinates into that space.
    #[must_use]
    pub fn sentence_starts(&self) -> Vec<usize> {
        let mut starts = Vec::with_capacity(self.sentences.len());
        let mut next = 0;
        for sentence in &self.sentences {
            starts.push(next);
            next += sentence.tokens.len();
        }
        starts
    }
}
