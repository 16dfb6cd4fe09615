// File: crates/thermoline-core/src/hover.rs
// Summary: Hover state machine and tooltip model for the nearest-record highlight.

use chrono::NaiveDate;

/// Indicator circle radius, in pixels.
pub const INDICATOR_RADIUS: f32 = 5.0;

/// Everything the presentation layer needs to show the hovered record:
/// formatted texts, the tooltip anchor in surface coordinates, and the
/// indicator circle center in bounded-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// Long date, e.g. "January Monday 1, 2018".
    pub date_text: String,
    /// One-decimal temperature with unit, e.g. "32.0 F".
    pub temp_text: String,
    /// Anchor (surface coordinates, margins included); the tooltip box is
    /// centered horizontally on this point and sits above it.
    pub anchor_x: f32,
    pub anchor_y: f32,
    /// Indicator circle center (bounded-local, no margin offset).
    pub circle_x: f32,
    pub circle_y: f32,
}

/// Two observable states: hidden (initial) and visible at the last hovered
/// record. Pointer-move goes to `Visible` (repositioning if already there);
/// pointer-leave goes to `Hidden` from either state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum HoverState {
    #[default]
    Hidden,
    Visible { index: usize, tooltip: Tooltip },
}

impl HoverState {
    pub fn is_visible(&self) -> bool {
        matches!(self, HoverState::Visible { .. })
    }

    /// Opacity of both the tooltip and the indicator circle.
    pub fn opacity(&self) -> f32 {
        if self.is_visible() { 1.0 } else { 0.0 }
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        match self {
            HoverState::Visible { tooltip, .. } => Some(tooltip),
            HoverState::Hidden => None,
        }
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %A %-d, %Y").to_string()
}

pub fn format_temperature(temp: f64) -> String {
    format!("{temp:.1} F")
}
