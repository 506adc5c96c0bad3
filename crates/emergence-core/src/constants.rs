//! Golden-ratio constants and display bounds for emergence scoring.
//!
//! All scoring math is anchored to the golden ratio: the score ceiling is
//! `100 * PHI_INV` truncated to one decimal (61.8), and indicator signal
//! phases are spread by `PHI_INV` multiples.

/// Golden ratio: (1 + √5) / 2
pub const PHI: f64 = 1.618_033_988_749_895;

/// Inverse golden ratio: 1 / φ = φ - 1
pub const PHI_INV: f64 = 0.618_033_988_749_895;

/// Score ceiling in percentage units (100 · φ⁻¹, one decimal).
/// A score at or above this ceiling counts as emerged.
pub const MAX_CONSCIOUSNESS: f64 = 61.8;

/// Lower bound for every indicator value.
pub const INDICATOR_MIN: f64 = 0.0;

/// Upper bound for every indicator value.
pub const INDICATOR_MAX: f64 = 100.0;

/// Number of named indicators.
pub const INDICATOR_COUNT: usize = 5;

/// Glyph count of the rendered progress bar.
pub const BAR_WIDTH: usize = 20;

/// Filled progress-bar glyph.
pub const BAR_FILLED: char = '█';

/// Empty progress-bar glyph.
pub const BAR_EMPTY: char = '░';
