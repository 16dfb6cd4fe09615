// File: crates/thermoline-core/src/data.rs
// Summary: Dataset model: JSON records, extent scan, nearest-record search.

use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::scale::{date_to_days, DayNumber};

/// One dataset record: a calendar date and that day's maximum temperature
/// (degrees Fahrenheit). Deserialized from `{"date": "YYYY-MM-DD",
/// "temperatureMax": 32.0}`; unknown fields are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub date: NaiveDate,
    #[serde(rename = "temperatureMax")]
    pub temperature_max: f64,
}

/// Min/max date and temperature over a dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
    pub min_temp: f64,
    pub max_temp: f64,
}

/// An ordered sequence of records. Order is preserved for line continuity
/// but never assumed sorted; the nearest-record search scans linearly.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    points: Vec<DataPoint>,
}

impl Dataset {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    /// Parse a JSON array of records from in-memory bytes.
    ///
    /// Records are decoded one by one so a malformed record reports its
    /// index instead of poisoning the whole document message.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, GraphError> {
        let raw: Vec<serde_json::Value> = serde_json::from_slice(bytes)?;
        let mut points = Vec::with_capacity(raw.len());
        for (index, value) in raw.into_iter().enumerate() {
            let point: DataPoint = serde_json::from_value(value)
                .map_err(|e| GraphError::MalformedRecord { index, reason: e.to_string() })?;
            if !point.temperature_max.is_finite() {
                return Err(GraphError::MalformedRecord {
                    index,
                    reason: "temperatureMax is not finite".to_string(),
                });
            }
            points.push(point);
        }
        if points.is_empty() {
            warn!("dataset parsed but contains no records");
        }
        debug!("parsed {} dataset records", points.len());
        Ok(Self { points })
    }

    pub fn from_json_str(s: &str) -> Result<Self, GraphError> {
        Self::from_json_slice(s.as_bytes())
    }

    /// Read and parse a JSON dataset from disk.
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self, GraphError> {
        let path = path.as_ref();
        debug!("loading dataset from {}", path.display());
        let bytes = std::fs::read(path)?;
        Self::from_json_slice(&bytes)
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Min/max date and temperature across all records.
    pub fn extent(&self) -> Result<Extent, GraphError> {
        let first = self.points.first().ok_or(GraphError::EmptyDataset)?;
        let mut ext = Extent {
            min_date: first.date,
            max_date: first.date,
            min_temp: first.temperature_max,
            max_temp: first.temperature_max,
        };
        for p in &self.points[1..] {
            ext.min_date = ext.min_date.min(p.date);
            ext.max_date = ext.max_date.max(p.date);
            ext.min_temp = ext.min_temp.min(p.temperature_max);
            ext.max_temp = ext.max_temp.max(p.temperature_max);
        }
        Ok(ext)
    }

    /// Index of the record whose date is closest in time to `hovered`.
    /// Equidistant records resolve to the earlier index (left-to-right scan,
    /// strictly-smaller replacement).
    pub fn nearest_index(&self, hovered: DayNumber) -> Option<usize> {
        let mut best_index = None;
        let mut best_distance = f64::INFINITY;
        for (i, p) in self.points.iter().enumerate() {
            let distance = (date_to_days(p.date) - hovered).abs();
            if distance < best_distance {
                best_distance = distance;
                best_index = Some(i);
            }
        }
        best_index
    }
}
