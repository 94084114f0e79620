#![forbid(unsafe_code)]

//! Fixed colors for the overlay layers.

use crate::color::Rgb;

/// Background color for tokens no enabled group matches.
pub const DEFAULT_TOKEN_BG: Rgb = Rgb::from_u24(0xFFFFFF);

/// Stroke color for dependency arcs (crimson).
pub const DEP_ARC_COLOR: Rgb = Rgb::from_u24(0xDC143C);

/// Fill color for rationale highlight rectangles (orange).
pub const RATIONALE_FILL: Rgb = Rgb::from_u24(0xFFA500);

/// Opacity of rationale highlights; translucent so text stays legible.
pub const RATIONALE_ALPHA: f32 = 0.3;

/// Text color for sentence-rank badges.
pub const RANK_TEXT: Rgb = Rgb::from_u24(0x000000);

/// Text color for the top-ranked sentence's badge.
pub const RANK_TOP_TEXT: Rgb = Rgb::from_u24(0xFF0000);

/// Backing color behind the top-ranked sentence's badge.
pub const RANK_TOP_BG: Rgb = Rgb::from_u24(0xFFFF00);

/// Cyclic palette for coreference arcs. Dark hues read well against the
/// white token cells; varying the color per arc keeps adjacent arcs apart.
pub const COREF_PALETTE: [Rgb; 7] = [
    Rgb::from_u24(0x8B475D),
    Rgb::from_u24(0xCD6600),
    Rgb::from_u24(0x551A8B),
    Rgb::from_u24(0x0000CD),
    Rgb::from_u24(0x006400),
    Rgb::from_u24(0x8B814C),
    Rgb::from_u24(0x8B5A00),
];

/// Cursor into a fixed cyclic palette.
///
/// The cycle advances once per arc drawn (not once per cluster) to maximize
/// contrast between arcs that end up adjacent on screen.
#[derive(Debug, Clone, Default)]
pub struct PaletteCycle {
    index: usize,
}

impl PaletteCycle {
    /// Start a fresh cycle.
    #[must_use]
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Advance the cycle and return the color at the new position.
    pub fn advance(&mut self) -> Rgb {
        self.index = (self.index + 1) % COREF_PALETTE.len();
        COREF_PALETTE[self.index]
    }
}
