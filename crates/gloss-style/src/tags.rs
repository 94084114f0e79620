#![forbid(unsafe_code)]

//! Tag schemes and highlight groups.
//!
//! The preprocessor emits Penn Treebank part-of-speech tags, CoreNLP
//! named-entity types, and Universal Dependencies relation labels. Display
//! groups many raw tags onto one color; [`TAG_GROUPS`] is the closed,
//! ordered table of those groupings and [`resolve_color`] implements the
//! first-match-in-priority-order lookup.

use bitflags::bitflags;

use crate::color::Rgb;

/// Which tag dimension drives token coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagScheme {
    /// Part-of-speech tags.
    Pos,
    /// Named-entity types.
    Ne,
    /// Dependency relation of the token's governor edge.
    Dep,
}

bitflags! {
    /// A set of highlight groups, one bit per group across all schemes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GroupSet: u32 {
        // Part-of-speech groups.
        const NOUN        = 1 << 0;
        const VERB        = 1 << 1;
        const ADJECTIVE   = 1 << 2;
        const PRONOUN     = 1 << 3;
        const ADVERB      = 1 << 4;
        const PREPOSITION = 1 << 5;
        // Named-entity groups.
        const PERSON       = 1 << 6;
        const ORGANIZATION = 1 << 7;
        const LOCATION     = 1 << 8;
        const TIME         = 1 << 9;
        const QUANTITY     = 1 << 10;
        const ATTRIBUTE    = 1 << 11;
        // Dependency-relation groups.
        const SUBJECT      = 1 << 12;
        const OBJECT       = 1 << 13;
        const APPOSITION   = 1 << 14;
        const ADJ_MODIFIER = 1 << 15;
        const COMPOUND     = 1 << 16;
        const MODIFIER     = 1 << 17;
        const CASE_MARK    = 1 << 18;
        const CONJUNCTION  = 1 << 19;
        const OTHER_DEP    = 1 << 20;
    }
}

impl GroupSet {
    /// The groups enabled on startup: the six principal dependency groups.
    #[must_use]
    pub fn startup_defaults() -> Self {
        TAG_GROUPS
            .iter()
            .filter(|g| g.default_enabled)
            .fold(Self::empty(), |acc, g| acc | g.flag)
    }
}

/// A named, toggleable highlight group within a scheme.
#[derive(Debug, Clone, Copy)]
pub struct TagGroup {
    /// Identity bit within [`GroupSet`].
    pub flag: GroupSet,
    /// The scheme this group belongs to.
    pub scheme: TagScheme,
    /// Short label shown on the group's checkbox.
    pub label: &'static str,
    /// Display color for member tokens.
    pub color: Rgb,
    /// Raw tags this group matches.
    pub members: &'static [&'static str],
    /// Whether the group starts enabled.
    pub default_enabled: bool,
}

/// All highlight groups, in match priority order.
///
/// Order matters: the resolver takes the first enabled group whose member
/// set contains the tag.
pub static TAG_GROUPS: &[TagGroup] = &[
    TagGroup {
        flag: GroupSet::NOUN,
        scheme: TagScheme::Pos,
        label: "NN*",
        color: Rgb::from_u24(0x00FF7F),
        members: &["NN", "NNP", "NNPS", "NNS"],
        default_enabled: false,
    },
    TagGroup {
        flag: GroupSet::VERB,
        scheme: TagScheme::Pos,
        label: "VB*",
        color: Rgb::from_u24(0xAB82FF),
        members: &["MD", "VB", "VBD", "VBG", "VBN", "VBP", "VBZ"],
        default_enabled: false,
    },
    TagGroup {
        flag: GroupSet::ADJECTIVE,
        scheme: TagScheme::Pos,
        label: "JJ*",
        color: Rgb::from_u24(0x63B8FF),
        members: &["JJ", "JJR", "JJS"],
        default_enabled: false,
    },
    TagGroup {
        flag: GroupSet::PRONOUN,
        scheme: TagScheme::Pos,
        label: "PRP*",
        color: Rgb::from_u24(0xFF6A6A),
        members: &["PRP", "PRP$"],
        default_enabled: false,
    },
    TagGroup {
        flag: GroupSet::ADVERB,
        scheme: TagScheme::Pos,
        label: "RB*",
        color: Rgb::from_u24(0xA2CD5A),
        members: &["RB", "RBR", "RBS"],
        default_enabled: false,
    },
    TagGroup {
        flag: GroupSet::PREPOSITION,
        scheme: TagScheme::Pos,
        label: "IN",
        color: Rgb::from_u24(0xFFD700),
        members: &["IN", "TO"],
        default_enabled: false,
    },
    TagGroup {
        flag: GroupSet::PERSON,
        scheme: TagScheme::Ne,
        label: "PER",
        color: Rgb::from_u24(0xB9D3EE),
        members: &["PERSON"],
        default_enabled: false,
    },
    TagGroup {
        flag: GroupSet::ORGANIZATION,
        scheme: TagScheme::Ne,
        label: "ORG",
        color: Rgb::from_u24(0xC67171),
        members: &["ORGANIZATION"],
        default_enabled: false,
    },
    TagGroup {
        flag: GroupSet::LOCATION,
        scheme: TagScheme::Ne,
        label: "LOC",
        color: Rgb::from_u24(0xB1B16B),
        members: &["CITY", "COUNTRY", "STATE_OR_PROVINCE", "LOCATION"],
        default_enabled: false,
    },
    TagGroup {
        flag: GroupSet::TIME,
        scheme: TagScheme::Ne,
        label: "TME",
        color: Rgb::from_u24(0xB4EEB4),
        members: &["DATE", "DURATION", "TIME"],
        default_enabled: false,
    },
    TagGroup {
        flag: GroupSet::QUANTITY,
        scheme: TagScheme::Ne,
        label: "QTY",
        color: Rgb::from_u24(0xCDA0ED),
        members: &["MONEY", "NUMBER", "ORDINAL", "PERCENT"],
        default_enabled: false,
    },
    TagGroup {
        flag: GroupSet::ATTRIBUTE,
        scheme: TagScheme::Ne,
        label: "ATR",
        color: Rgb::from_u24(0xEED5B7),
        members: &[
            "TITLE",
            "NATIONALITY",
            "RELIGION",
            "CAUSE_OF_DEATH",
            "CRIMINAL_CHARGE",
            "URL",
        ],
        default_enabled: false,
    },
    TagGroup {
        flag: GroupSet::SUBJECT,
        scheme: TagScheme::Dep,
        label: "SBJ",
        color: Rgb::from_u24(0xC1FF88),
        members: &["NSUBJ", "NSUBJPASS"],
        default_enabled: true,
    },
    TagGroup {
        flag: GroupSet::OBJECT,
        scheme: TagScheme::Dep,
        label: "OBJ",
        color: Rgb::from_u24(0x79A0F1),
        members: &["DOBJ"],
        default_enabled: true,
    },
    TagGroup {
        flag: GroupSet::APPOSITION,
        scheme: TagScheme::Dep,
        label: "APS",
        color: Rgb::from_u24(0xE3CF57),
        members: &["APPOS"],
        default_enabled: true,
    },
    TagGroup {
        flag: GroupSet::ADJ_MODIFIER,
        scheme: TagScheme::Dep,
        label: "AMD",
        color: Rgb::from_u24(0xFF9912),
        members: &["AMOD"],
        default_enabled: true,
    },
    TagGroup {
        flag: GroupSet::COMPOUND,
        scheme: TagScheme::Dep,
        label: "CPD",
        color: Rgb::from_u24(0x00FFFF),
        members: &["COMPOUND"],
        default_enabled: true,
    },
    TagGroup {
        flag: GroupSet::MODIFIER,
        scheme: TagScheme::Dep,
        label: "MOD",
        color: Rgb::from_u24(0xFF69B4),
        members: &["NMOD:POSS", "NEG", "NMOD:TMOD", "NUMMOD"],
        default_enabled: true,
    },
    TagGroup {
        flag: GroupSet::CASE_MARK,
        scheme: TagScheme::Dep,
        label: "C-M",
        color: Rgb::from_u24(0x8FCC80),
        members: &["CASE", "MARK"],
        default_enabled: false,
    },
    TagGroup {
        flag: GroupSet::CONJUNCTION,
        scheme: TagScheme::Dep,
        label: "CNJ",
        color: Rgb::from_u24(0xD8BFD8),
        members: &["CONJ"],
        default_enabled: false,
    },
    TagGroup {
        flag: GroupSet::OTHER_DEP,
        scheme: TagScheme::Dep,
        label: "*",
        color: Rgb::from_u24(0xBFD8D8),
        members: &[
            "DET",
            "DET:PREDET",
            "CC",
            "CC:PRECONJ",
            "AUX",
            "AUXPASS",
            "COP",
            "PARATAXIS",
            "MWE",
            "EXPL",
            "DISCOURSE",
        ],
        default_enabled: false,
    },
];

/// Placeholder tag marking a token whose tag was collapsed into the
/// preceding multi-word span by the preprocessor.
pub const COLLAPSED_TAG: &str = "<";

/// The groups of one scheme, in priority order.
pub fn groups_for(scheme: TagScheme) -> impl Iterator<Item = &'static TagGroup> {
    TAG_GROUPS.iter().filter(move |g| g.scheme == scheme)
}

/// Resolve a tag to its display color under the given scheme.
///
/// For the POS and NE schemes `tag` is the token's own tag (with the
/// collapsed sentinel already expanded, see [`effective_tags`]); for the DEP
/// scheme it is the relation type of the token's governor edge. Matching
/// uses the first whitespace-delimited component of the tag, since NE tags
/// can carry a trailing qualifier.
///
/// Returns `None` when no enabled group matches; callers fall back to the
/// default (background) color, so every tag resolves to exactly one color.
#[must_use]
pub fn resolve_color(tag: &str, scheme: TagScheme, enabled: GroupSet) -> Option<Rgb> {
    let key = tag.split_whitespace().next().unwrap_or(tag);
    groups_for(scheme)
        .filter(|g| enabled.contains(g.flag))
        .find(|g| g.members.contains(&key))
        .map(|g| g.color)
}

/// Expand collapsed-tag sentinels across one token stream.
///
/// Each `"<"` is replaced by the tag of the nearest preceding token in the
/// same stream. Propagation never crosses stream boundaries; callers pass
/// one sentence (or one question/answer) at a time. A sentinel in leading
/// position has nothing to inherit and is kept as-is (it then resolves to
/// the default color).
#[must_use]
pub fn effective_tags<'a, I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in raw {
        if tag == COLLAPSED_TAG {
            if let Some(prev) = out.last() {
                let repeated = prev.clone();
                out.push(repeated);
                continue;
            }
        }
        out.push(tag.to_string());
    }
    out
}
