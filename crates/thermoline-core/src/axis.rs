// File: crates/thermoline-core/src/axis.rs
// Summary: Tick layout and labels for the bottom time axis and left value axis.

use crate::scale::{days_to_date, LinearScale, TimeScale};

/// Default tick densities for the plot grid.
pub const X_TICKS: usize = 10;
pub const Y_TICKS: usize = 6;

/// One axis tick: pixel offset along the axis plus its label text.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub px: f32,
    pub label: String,
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Evenly spaced ticks over the time domain, labeled as short dates
/// ("Jan 5"). Tick positions round to whole days for labeling but keep
/// their exact pixel offsets so ticks stay evenly spaced.
pub fn time_ticks(scale: &TimeScale, count: usize) -> Vec<Tick> {
    let (min_days, max_days) = scale.domain();
    linspace(min_days, max_days, count)
        .into_iter()
        .map(|d| Tick {
            px: scale.to_px_days(d),
            label: days_to_date(d).format("%b %-d").to_string(),
        })
        .collect()
}

/// Evenly spaced ticks over the value domain, labeled to one decimal.
pub fn value_ticks(scale: &LinearScale, count: usize) -> Vec<Tick> {
    let (vmin, vmax) = scale.domain();
    linspace(vmin, vmax, count)
        .into_iter()
        .map(|v| Tick { px: scale.to_px(v), label: format!("{v:.1}") })
        .collect()
}
