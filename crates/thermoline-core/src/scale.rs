// File: crates/thermoline-core/src/scale.rs
// Summary: Time (X) and value (Y) scale transforms with pixel inversion.

use chrono::{Duration, NaiveDate};

/// Days since the Unix epoch, fractional. Dates travel through this so a
/// pixel inversion can land between two calendar days.
pub type DayNumber = f64;

pub fn date_to_days(date: NaiveDate) -> DayNumber {
    date.signed_duration_since(NaiveDate::default()).num_days() as f64
}

/// Round a (possibly fractional) day number back to the nearest calendar date.
pub fn days_to_date(days: DayNumber) -> NaiveDate {
    NaiveDate::default() + Duration::days(days.round() as i64)
}

/// Horizontal time scale: date domain mapped onto `[0, range_px]`.
///
/// `from_px` is the linear inverse and extrapolates past the domain when the
/// pixel lies outside the range, matching pointer positions at the edges of
/// the listening area.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    min_days: DayNumber,
    max_days: DayNumber,
    range_px: f64,
}

impl TimeScale {
    pub fn new(min: NaiveDate, max: NaiveDate, range_px: f64) -> Self {
        let min_days = date_to_days(min);
        let mut max_days = date_to_days(max);
        if (max_days - min_days).abs() < 1e-9 {
            max_days = min_days + 1.0;
        }
        Self { min_days, max_days, range_px }
    }

    #[inline]
    pub fn to_px(&self, date: NaiveDate) -> f32 {
        self.to_px_days(date_to_days(date))
    }

    #[inline]
    pub fn to_px_days(&self, days: DayNumber) -> f32 {
        let span = (self.max_days - self.min_days).max(1e-9);
        (((days - self.min_days) / span) * self.range_px) as f32
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> DayNumber {
        let span = self.max_days - self.min_days;
        self.min_days + (px / self.range_px.max(1e-9)) * span
    }

    pub fn domain(&self) -> (DayNumber, DayNumber) {
        (self.min_days, self.max_days)
    }

    pub fn range_px(&self) -> f64 {
        self.range_px
    }
}

/// Vertical value scale mapping `[vmin, vmax]` to `[range_px, 0]` pixels
/// (inverted: larger value, smaller y).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    vmin: f64,
    vmax: f64,
    range_px: f64,
}

impl LinearScale {
    pub fn new(vmin: f64, vmax: f64, range_px: f64) -> Self {
        let mut s = Self { vmin, vmax, range_px };
        if (s.vmax - s.vmin).abs() < 1e-12 {
            s.vmax = s.vmin + 1.0;
        }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        (self.range_px - ((v - self.vmin) / span) * self.range_px) as f32
    }

    #[inline]
    pub fn from_px(&self, py: f64) -> f64 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.vmin + ((self.range_px - py) / self.range_px.max(1e-9)) * span
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.vmin, self.vmax)
    }

    pub fn range_px(&self) -> f64 {
        self.range_px
    }
}
