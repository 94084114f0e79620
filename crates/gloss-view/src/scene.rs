#![forbid(unsafe_code)]

//! The synchronous recompute pass.
//!
//! A navigation event discards the previous scene and rebuilds everything
//! from the model: token layout for the passage and for the current
//! question/answer pair, per-token fill colors under the active tag scheme,
//! the enabled overlay geometries, and the sentence-rank badges. The result
//! is a plain data [`Scene`] the renderer can draw without touching the
//! model again.

use gloss_core::model::{DepTable, Passage, TaggedStream, Token};
use gloss_layout::{LayoutConfig, PASSAGE_CANVAS, TokenPos, layout};
use gloss_overlay::{
    ArcPath, HighlightRects, RankBadge, RootCell, TokenCell, build_coref_arcs,
    build_dependency_arcs, build_rationale_highlights, rank_scores,
};
use gloss_style::{GroupSet, PaletteCycle, Rgb, TagScheme, effective_tags, resolve_color};

use crate::search::SearchIndex;
use crate::state::ViewState;

/// One laid-out, color-resolved token ready for rendering and hovering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneToken {
    pub text: String,
    /// Raw part-of-speech tag.
    pub pos_tag: String,
    /// Raw named-entity tag; may still be the collapsed sentinel, which the
    /// hover builder resolves by backtracking.
    pub ne_tag: String,
    pub lemma: String,
    /// Sentence index within the stream (always 0 for questions/answers).
    pub sentence: usize,
    pub index_in_sentence: usize,
    pub pos: TokenPos,
    /// Resolved cell fill, `None` for the default background.
    pub fill: Option<Rgb>,
    /// Governor edge: relation type and the governor's stream-global token
    /// index. `None` for roots and for streams without a parse.
    pub dep: Option<(String, usize)>,
}

/// One rendered token stream with its dependency decorations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreamScene {
    pub tokens: Vec<SceneToken>,
    pub arcs: Vec<ArcPath>,
    /// ROOT tokens, one per parsed sentence; rendered as bordered cells
    /// whether or not the arc overlay is on.
    pub roots: Vec<RootCell>,
}

/// Everything drawn for one (passage, question) view.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub passage_index: usize,
    pub question_index: usize,
    /// Source story number, shown in the header.
    pub story_num: u32,
    pub passage: StreamScene,
    pub question: StreamScene,
    pub answer: StreamScene,
    pub coref_arcs: Vec<ArcPath>,
    pub rationale: Option<HighlightRects>,
    pub badges: Vec<RankBadge>,
}

impl Scene {
    /// Fresh search index over the three token collections of this scene.
    #[must_use]
    pub fn search_index(&self) -> SearchIndex {
        let texts =
            |s: &StreamScene| s.tokens.iter().map(|t| t.text.clone()).collect::<Vec<_>>();
        SearchIndex::new(texts(&self.passage), texts(&self.question), texts(&self.answer))
    }
}

/// Rebuild the scene for the view state's current passage and question.
///
/// `scores` is the already-looked-up score list for this (passage, question)
/// pair; an empty slice simply yields no badges. Returns `None` when the
/// state points outside the corpus.
#[must_use]
pub fn build_scene(
    passages: &[Passage],
    scores: &[(usize, f32)],
    state: &ViewState,
) -> Option<Scene> {
    let passage = passages.get(state.passage)?;
    let question = passage.questions.get(state.question)?;
    let answer = passage.answers.get(state.question)?;
    let span = passage.rationales.get(state.question).copied()?;
    tracing::debug!(
        passage = state.passage,
        question = state.question,
        "recomputing scene"
    );

    let cfg = LayoutConfig::passage();
    let starts = passage.sentence_starts();
    let flat: Vec<&Token> = passage.sentences.iter().flat_map(|s| s.tokens.iter()).collect();
    let positions = layout(flat.iter().map(|t| t.text.as_str()), &cfg);
    let cells: Vec<TokenCell<'_>> = flat
        .iter()
        .zip(&positions)
        .map(|(t, &pos)| TokenCell {
            text: &t.text,
            raw_offset: t.raw_offset,
            pos,
        })
        .collect();

    let mut passage_scene = StreamScene::default();
    for (s, sentence) in passage.sentences.iter().enumerate() {
        let base = starts[s];
        let slice = &cells[base..base + sentence.tokens.len()];
        passage_scene.tokens.extend(scene_tokens(
            &sentence.tokens,
            Some(&sentence.deps),
            &positions[base..base + sentence.tokens.len()],
            base,
            state.scheme,
            state.enabled,
        ));
        let built = build_dependency_arcs(&sentence.deps, slice, state.enabled, &cfg);
        if state.show_deps {
            passage_scene.arcs.extend(built.arcs);
        }
        if let Some(mut root) = built.root {
            root.token += base;
            passage_scene.roots.push(root);
        }
    }

    let coref_arcs = if state.show_corefs {
        let mut palette = PaletteCycle::new();
        build_coref_arcs(
            &passage.corefs,
            &starts,
            &positions,
            PASSAGE_CANVAS,
            &cfg,
            &mut palette,
        )
    } else {
        Vec::new()
    };

    let rationale = if state.show_rationale {
        build_rationale_highlights(&passage.story, span, &cells, &cfg)
    } else {
        None
    };

    Some(Scene {
        passage_index: state.passage,
        question_index: state.question,
        story_num: passage.story_num,
        passage: passage_scene,
        question: stream_scene(question, &LayoutConfig::question(), state, true),
        answer: stream_scene(answer, &LayoutConfig::answer(), state, false),
        coref_arcs,
        rationale,
        badges: rank_scores(scores, &starts, &positions),
    })
}

/// Build the scene for a single-sentence question or answer stream.
///
/// Answers ignore their dependency table: they are shown as plain tagged
/// text, with neither dependency coloring nor arcs nor a root cell.
fn stream_scene(
    stream: &TaggedStream,
    cfg: &LayoutConfig,
    state: &ViewState,
    use_deps: bool,
) -> StreamScene {
    let positions = layout(stream.tokens.iter().map(|t| t.text.as_str()), cfg);
    let deps = use_deps.then_some(&stream.deps);
    let mut scene = StreamScene {
        tokens: scene_tokens(&stream.tokens, deps, &positions, 0, state.scheme, state.enabled),
        arcs: Vec::new(),
        roots: Vec::new(),
    };
    if let Some(deps) = deps {
        let cells: Vec<TokenCell<'_>> = stream
            .tokens
            .iter()
            .zip(&positions)
            .map(|(t, &pos)| TokenCell {
                text: &t.text,
                raw_offset: t.raw_offset,
                pos,
            })
            .collect();
        let built = build_dependency_arcs(deps, &cells, state.enabled, cfg);
        if state.show_deps {
            scene.arcs = built.arcs;
        }
        scene.roots.extend(built.root);
    }
    scene
}

/// Resolve one sentence's tokens into scene tokens.
///
/// Collapsed-sentinel expansion is applied to the tag dimension driving the
/// fill; the stored raw tags keep the sentinel so hover can show the
/// original annotation.
fn scene_tokens(
    tokens: &[Token],
    deps: Option<&DepTable>,
    positions: &[TokenPos],
    base: usize,
    scheme: TagScheme,
    enabled: GroupSet,
) -> Vec<SceneToken> {
    let fills: Vec<Option<Rgb>> = match scheme {
        TagScheme::Pos => effective_tags(tokens.iter().map(|t| t.pos_tag.as_str()))
            .iter()
            .map(|tag| resolve_color(tag, scheme, enabled))
            .collect(),
        TagScheme::Ne => effective_tags(tokens.iter().map(|t| t.ne_tag.as_str()))
            .iter()
            .map(|tag| resolve_color(tag, scheme, enabled))
            .collect(),
        TagScheme::Dep => (0..tokens.len())
            .map(|j| {
                deps.and_then(|d| d.edge_for_dependent(j))
                    .and_then(|e| resolve_color(&e.relation, scheme, enabled))
            })
            .collect(),
    };

    tokens
        .iter()
        .zip(positions)
        .zip(fills)
        .enumerate()
        .map(|(j, ((token, &pos), fill))| SceneToken {
            text: token.text.clone(),
            pos_tag: token.pos_tag.clone(),
            ne_tag: token.ne_tag.clone(),
            lemma: token.lemma.clone(),
            sentence: token.sentence,
            index_in_sentence: token.index_in_sentence,
            pos,
            fill,
            dep: deps
                .and_then(|d| d.edge_for_dependent(j))
                .map(|e| (e.relation.clone(), base + e.governor)),
        })
        .collect()
}
