#![forbid(unsafe_code)]

//! Corpus normalization: raw JSON shapes into the `gloss-core` model.

use std::fmt;

use gloss_core::model::{
    CorefCluster, DepEdge, DepTable, Mention, Passage, RationaleSpan, Sentence, TaggedStream,
    Token,
};

use crate::raw::{RawCorpus, RawDep, RawMention, RawOffset, RawPassage, RawToken};

/// Fatal corpus ingest errors.
#[derive(Debug)]
pub enum CorpusError {
    /// The corpus file is not valid JSON of the expected shape.
    Json(serde_json::Error),
    /// A token's string-map offset is not a number.
    BadOffset { token: String, value: String },
    /// A dependency triple uses a 0 index where a 1-based index is required.
    BadEdgeIndex { relation: String },
    /// Two index-aligned sections of a passage disagree in length.
    SectionMismatch {
        passage: usize,
        section: &'static str,
    },
}

impl From<serde_json::Error> for CorpusError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "corpus JSON error: {err}"),
            Self::BadOffset { token, value } => {
                write!(f, "token {token:?} has non-numeric offset {value:?}")
            }
            Self::BadEdgeIndex { relation } => {
                write!(f, "dependency edge {relation:?} has a zero token index")
            }
            Self::SectionMismatch { passage, section } => {
                write!(f, "passage {passage}: {section} sections differ in length")
            }
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

/// Parse the full preprocessed corpus file.
pub fn parse_corpus(json: &str) -> Result<Vec<Passage>, CorpusError> {
    let raw: RawCorpus = serde_json::from_str(json)?;
    raw.data
        .into_iter()
        .enumerate()
        .map(|(index, passage)| convert_passage(index, passage))
        .collect()
}

fn convert_passage(index: usize, raw: RawPassage) -> Result<Passage, CorpusError> {
    if raw.seg_tagged.len() != raw.seg_dep.len() {
        return Err(CorpusError::SectionMismatch {
            passage: index,
            section: "sentence",
        });
    }
    if raw.q_tagged.len() != raw.q_dep.len()
        || raw.q_tagged.len() != raw.a_tagged.len()
        || raw.q_tagged.len() != raw.rationale.len()
    {
        return Err(CorpusError::SectionMismatch {
            passage: index,
            section: "question",
        });
    }

    let sentences = raw
        .seg_tagged
        .into_iter()
        .zip(raw.seg_dep)
        .enumerate()
        .map(|(sent, (tokens, deps))| {
            Ok(Sentence {
                tokens: convert_tokens(tokens, sent)?,
                deps: normalize_deps(deps)?,
            })
        })
        .collect::<Result<Vec<_>, CorpusError>>()?;

    let questions = convert_streams(raw.q_tagged, raw.q_dep)?;
    // Older corpus versions omit answer parses; pad with empty tables.
    let mut a_dep = raw.a_dep;
    a_dep.resize_with(raw.a_tagged.len(), Vec::new);
    let answers = convert_streams(raw.a_tagged, a_dep)?;

    Ok(Passage {
        story: raw.story,
        story_num: raw.story_num,
        sentences,
        questions,
        answers,
        rationales: raw
            .rationale
            .into_iter()
            .map(|(start, end)| RationaleSpan::new(start, end))
            .collect(),
        corefs: raw.corefs.into_values().map(convert_cluster).collect(),
    })
}

fn convert_streams(
    tagged: Vec<Vec<RawToken>>,
    deps: Vec<Vec<RawDep>>,
) -> Result<Vec<TaggedStream>, CorpusError> {
    tagged
        .into_iter()
        .zip(deps)
        .map(|(tokens, deps)| {
            Ok(TaggedStream {
                tokens: convert_tokens(tokens, 0)?,
                deps: normalize_deps(deps)?,
            })
        })
        .collect()
}

fn convert_tokens(raw: Vec<RawToken>, sentence: usize) -> Result<Vec<Token>, CorpusError> {
    raw.into_iter()
        .enumerate()
        .map(|(index, RawToken(text, pos_tag, lemma, ne_tag, offset))| {
            let raw_offset = match offset {
                RawOffset::Num(n) => n,
                RawOffset::Text(s) => s.trim().parse().map_err(|_| CorpusError::BadOffset {
                    token: text.clone(),
                    value: s,
                })?,
            };
            Ok(Token {
                text,
                pos_tag,
                ne_tag,
                lemma,
                raw_offset,
                sentence,
                index_in_sentence: index,
            })
        })
        .collect()
}

/// Normalize 1-based dependency triples: upper-case the relation, shift
/// indices to 0-based, and split the ROOT edge out as the root token.
fn normalize_deps(raw: Vec<RawDep>) -> Result<DepTable, CorpusError> {
    let mut table = DepTable::empty();
    for RawDep(relation, governor, dependent) in raw {
        let relation = relation.to_uppercase();
        if dependent == 0 {
            return Err(CorpusError::BadEdgeIndex { relation });
        }
        if relation == "ROOT" {
            table.root = Some(dependent - 1);
            continue;
        }
        if governor == 0 {
            return Err(CorpusError::BadEdgeIndex { relation });
        }
        table.edges.push(DepEdge {
            relation,
            governor: governor - 1,
            dependent: dependent - 1,
        });
    }
    Ok(table)
}

fn convert_cluster(mentions: Vec<RawMention>) -> CorefCluster {
    CorefCluster {
        mentions: mentions
            .into_iter()
            .map(|m| Mention {
                sentence: m.sent_num,
                token_start: m.start_index,
                representative: m.representative,
            })
            .collect(),
    }
}
