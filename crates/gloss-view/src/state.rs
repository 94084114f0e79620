#![forbid(unsafe_code)]

//! Immutable view state.
//!
//! Every navigation event produces a fresh [`ViewState`] value; the previous
//! one is discarded along with all derived tables. Methods therefore take
//! `self` by value and return the successor state instead of mutating in
//! place.

use gloss_style::{GroupSet, TagScheme};

/// Everything the recompute pass needs to know about what the user is
/// looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// Current passage, 0-based.
    pub passage: usize,
    /// Current question within the passage, 0-based.
    pub question: usize,
    /// Tag scheme driving token colors.
    pub scheme: TagScheme,
    /// Enabled highlight groups across all schemes.
    pub enabled: GroupSet,
    pub show_rationale: bool,
    pub show_corefs: bool,
    pub show_deps: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::startup()
    }
}

impl ViewState {
    /// The state shown on startup: first passage and question, dependency
    /// coloring with the principal dependency groups enabled, rationale
    /// highlighting on, both arc overlays off.
    #[must_use]
    pub fn startup() -> Self {
        Self {
            passage: 0,
            question: 0,
            scheme: TagScheme::Dep,
            enabled: GroupSet::startup_defaults(),
            show_rationale: true,
            show_corefs: false,
            show_deps: false,
        }
    }

    /// Advance to the next passage, wrapping, and reset to its first
    /// question.
    #[must_use]
    pub fn next_passage(self, passage_count: usize) -> Self {
        if passage_count == 0 {
            return self;
        }
        Self {
            passage: (self.passage + 1) % passage_count,
            question: 0,
            ..self
        }
    }

    /// Step back to the previous passage, wrapping, and reset to its first
    /// question.
    #[must_use]
    pub fn prev_passage(self, passage_count: usize) -> Self {
        if passage_count == 0 {
            return self;
        }
        Self {
            passage: (self.passage + passage_count - 1) % passage_count,
            question: 0,
            ..self
        }
    }

    /// Advance to the next question of the current passage, wrapping.
    #[must_use]
    pub fn next_question(self, question_count: usize) -> Self {
        if question_count == 0 {
            return self;
        }
        Self {
            question: (self.question + 1) % question_count,
            ..self
        }
    }

    /// Step back to the previous question of the current passage, wrapping.
    #[must_use]
    pub fn prev_question(self, question_count: usize) -> Self {
        if question_count == 0 {
            return self;
        }
        Self {
            question: (self.question + question_count - 1) % question_count,
            ..self
        }
    }

    /// Jump straight to a passage by 1-based number. Out-of-range numbers
    /// (including 0) are ignored, as is typing garbage into the entry box.
    #[must_use]
    pub fn goto_passage(self, number: usize, passage_count: usize) -> Option<Self> {
        if number == 0 || number > passage_count {
            return None;
        }
        Some(Self {
            passage: number - 1,
            question: 0,
            ..self
        })
    }

    /// Switch the coloring scheme.
    #[must_use]
    pub fn with_scheme(self, scheme: TagScheme) -> Self {
        Self { scheme, ..self }
    }

    /// Flip one highlight group's enabled bit.
    #[must_use]
    pub fn toggle_group(self, flag: GroupSet) -> Self {
        Self {
            enabled: self.enabled ^ flag,
            ..self
        }
    }

    #[must_use]
    pub fn toggle_rationale(self) -> Self {
        Self {
            show_rationale: !self.show_rationale,
            ..self
        }
    }

    /// Flip the coreference overlay. The two arc overlays are mutually
    /// exclusive: turning one on turns the other off.
    #[must_use]
    pub fn toggle_corefs(self) -> Self {
        let show_corefs = !self.show_corefs;
        Self {
            show_corefs,
            show_deps: self.show_deps && !show_corefs,
            ..self
        }
    }

    /// Flip the dependency overlay; see [`Self::toggle_corefs`].
    #[must_use]
    pub fn toggle_deps(self) -> Self {
        let show_deps = !self.show_deps;
        Self {
            show_deps,
            show_corefs: self.show_corefs && !show_deps,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passage_navigation_wraps_and_resets_question() {
        let state = ViewState {
            passage: 2,
            question: 5,
            ..ViewState::startup()
        };
        let next = state.next_passage(3);
        assert_eq!((next.passage, next.question), (0, 0));
        let prev = ViewState::startup().prev_passage(3);
        assert_eq!((prev.passage, prev.question), (2, 0));
    }

    #[test]
    fn question_navigation_wraps_within_passage() {
        let state = ViewState {
            question: 3,
            ..ViewState::startup()
        };
        assert_eq!(state.next_question(4).question, 0);
        assert_eq!(ViewState::startup().prev_question(4).question, 3);
        // A passage change is not implied.
        assert_eq!(state.next_question(4).passage, state.passage);
    }

    #[test]
    fn empty_collections_leave_state_unchanged() {
        let state = ViewState::startup();
        assert_eq!(state.next_passage(0), state);
        assert_eq!(state.prev_question(0), state);
    }

    #[test]
    fn goto_passage_is_one_based_and_range_checked() {
        let state = ViewState {
            passage: 4,
            question: 2,
            ..ViewState::startup()
        };
        let jumped = state.goto_passage(3, 10).unwrap();
        assert_eq!((jumped.passage, jumped.question), (2, 0));
        assert!(state.goto_passage(0, 10).is_none());
        assert!(state.goto_passage(11, 10).is_none());
    }

    #[test]
    fn arc_overlays_are_mutually_exclusive() {
        let state = ViewState::startup().toggle_deps();
        assert!(state.show_deps);
        assert!(!state.show_corefs);

        let state = state.toggle_corefs();
        assert!(state.show_corefs);
        assert!(!state.show_deps);

        let state = state.toggle_deps();
        assert!(state.show_deps);
        assert!(!state.show_corefs);

        // Turning an overlay off does not turn the other on.
        let state = state.toggle_deps();
        assert!(!state.show_deps);
        assert!(!state.show_corefs);
    }

    #[test]
    fn group_toggle_flips_only_its_bit() {
        let state = ViewState::startup();
        let toggled = state.toggle_group(GroupSet::NOUN);
        assert!(toggled.enabled.contains(GroupSet::NOUN));
        assert_eq!(toggled.toggle_group(GroupSet::NOUN).enabled, state.enabled);
    }

    #[test]
    fn startup_defaults() {
        let state = ViewState::startup();
        assert_eq!(state.scheme, TagScheme::Dep);
        assert!(state.show_rationale);
        assert!(!state.show_corefs);
        assert!(!state.show_deps);
        assert!(state.enabled.contains(GroupSet::SUBJECT));
        assert!(!state.enabled.contains(GroupSet::NOUN));
    }
}
