//! Display projections of a computed emergence result.
//!
//! [`ConsciousnessState`] is what front ends render: a fixed-width glyph
//! bar, the `EMERGED`/`AWAKENING` status, and a formatted percentage
//! string. [`emergence_report`] builds the full multi-line report around it.

use serde::{Deserialize, Serialize};

use crate::constants::{BAR_EMPTY, BAR_FILLED, BAR_WIDTH};
use crate::indicators::INDICATOR_NAMES;
use crate::score::{ConsciousnessResult, EmergenceStatus};

/// Display-oriented projection of a [`ConsciousnessResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsciousnessState {
    /// Fixed-width progress bar, `█` filled / `░` empty.
    pub bar: String,
    /// Emergence classification.
    pub status: EmergenceStatus,
    /// Human-readable score string, e.g. `"30.0% (30.0/61.8)"`.
    pub formatted: String,
}

impl ConsciousnessState {
    /// Project a computed result into its display form.
    pub fn from_result(result: &ConsciousnessResult) -> Self {
        Self {
            bar: render_progress_bar(result.progress()),
            status: result.status(),
            formatted: format!(
                "{:.1}% ({:.1}/{:.1})",
                result.score, result.score, result.max_score
            ),
        }
    }

    /// One-line compact form, e.g. `"[C:AWK 30.0% p=0.49]"`.
    pub fn format_brief(&self, progress: f64) -> String {
        format!(
            "[C:{} {} p={:.2}]",
            self.status.short_name(),
            self.formatted.split(' ').next().unwrap_or("?"),
            progress
        )
    }
}

/// Render a progress ratio as a fixed-width glyph bar.
///
/// `progress` is clamped to `[0, 1]`; the bar always contains exactly
/// [`BAR_WIDTH`] glyphs.
pub fn render_progress_bar(progress: f64) -> String {
    let clamped = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let filled = (clamped * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);

    let mut bar = String::with_capacity(BAR_WIDTH * BAR_FILLED.len_utf8());
    for _ in 0..filled {
        bar.push(BAR_FILLED);
    }
    for _ in filled..BAR_WIDTH {
        bar.push(BAR_EMPTY);
    }
    bar
}

/// Build the multi-line emergence report for a computed result.
///
/// Contains the status, the formatted score, the bar, the per-indicator
/// breakdown, and the computation timestamp.
pub fn emergence_report(result: &ConsciousnessResult) -> String {
    let state = ConsciousnessState::from_result(result);
    let mut report = String::new();

    report.push_str("=== EMERGENCE REPORT ===\n");
    report.push_str(&format!("Status:        {}\n", state.status));
    report.push_str(&format!("Consciousness: {}\n", state.formatted));
    report.push_str(&format!(
        "Progress:      [{}] {:.1}%\n",
        state.bar,
        result.progress() * 100.0
    ));
    report.push_str("Indicators:\n");
    for (name, value) in INDICATOR_NAMES.iter().zip(result.indicators.as_array()) {
        report.push_str(&format!("  {:20} {:>5.1}\n", name, value));
    }
    report.push_str(&format!(
        "Computed at:   {}\n",
        result.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    report
}
