#![forbid(unsafe_code)]

//! The externally generated sentence-score table.
//!
//! Line-oriented format, one sentence-score per line:
//!
//! ```text
//! P.Q.S score
//! ```
//!
//! where `P.Q.S` are passage, question, and sentence indices and `score` is
//! a float (higher is better). The file is a required precomputed asset:
//! any malformed line is fatal. Missing entries for a valid
//! (passage, question) pair are normal and yield an empty slice.

use std::fmt;

use rustc_hash::FxHashMap;

/// Fatal score-file parse errors. The line number is 1-based.
#[derive(Debug, PartialEq)]
pub enum ScoreTableError {
    /// Fewer than two whitespace-separated columns.
    MissingColumn { line: usize },
    /// The `P.Q.S` key is not three dot-separated integers.
    BadKey { line: usize, key: String },
    /// The score column is not a float.
    BadScore { line: usize, value: String },
}

impl fmt::Display for ScoreTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn { line } => {
                write!(f, "score file line {line}: expected `P.Q.S score`")
            }
            Self::BadKey { line, key } => {
                write!(f, "score file line {line}: bad key {key:?}")
            }
            Self::BadScore { line, value } => {
                write!(f, "score file line {line}: bad score {value:?}")
            }
        }
    }
}

impl std::error::Error for ScoreTableError {}

/// Per-sentence relevance scores keyed by (passage, question).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    map: FxHashMap<(usize, usize), Vec<(usize, f32)>>,
}

impl ScoreTable {
    /// Parse the full score file. Scores within a pair keep file order,
    /// which the ranker relies on for tie-breaking.
    pub fn parse(text: &str) -> Result<Self, ScoreTableError> {
        let mut map: FxHashMap<(usize, usize), Vec<(usize, f32)>> = FxHashMap::default();
        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            let mut columns = line.split_whitespace();
            let (Some(key), Some(value)) = (columns.next(), columns.next()) else {
                return Err(ScoreTableError::MissingColumn { line: line_no });
            };

            let mut parts = key.split('.').map(str::parse::<usize>);
            let (Some(Ok(passage)), Some(Ok(question)), Some(Ok(sentence)), None) =
                (parts.next(), parts.next(), parts.next(), parts.next())
            else {
                return Err(ScoreTableError::BadKey {
                    line: line_no,
                    key: key.to_string(),
                });
            };

            let score: f32 = value.parse().map_err(|_| ScoreTableError::BadScore {
                line: line_no,
                value: value.to_string(),
            })?;

            map.entry((passage, question))
                .or_default()
                .push((sentence, score));
        }
        Ok(Self { map })
    }

    /// Scores for one (passage, question) pair; empty when none exist.
    #[must_use]
    pub fn get(&self, passage: usize, question: usize) -> &[(usize, f32)] {
        self.map
            .get(&(passage, question))
            .map_or(&[], Vec::as_slice)
    }

    /// Number of (passage, question) pairs with at least one score.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.map.len()
    }
}
