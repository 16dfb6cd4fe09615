// File: crates/thermoline-core/tests/extent.rs
// Purpose: Validate extent scan over ordered and unsorted datasets.

use chrono::NaiveDate;
use thermoline_core::{DataPoint, Dataset};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 1, d).unwrap()
}

#[test]
fn extent_spans_all_records() {
    let dataset = Dataset::new(vec![
        DataPoint { date: day(2), temperature_max: 35.5 },
        DataPoint { date: day(1), temperature_max: 32.0 },
        DataPoint { date: day(5), temperature_max: 50.0 },
        DataPoint { date: day(3), temperature_max: 30.1 },
    ]);

    let ext = dataset.extent().expect("non-empty");
    assert_eq!(ext.min_date, day(1));
    assert_eq!(ext.max_date, day(5));
    assert_eq!(ext.min_temp, 30.1);
    assert_eq!(ext.max_temp, 50.0);
}

#[test]
fn single_record_extent_collapses_to_that_record() {
    let dataset = Dataset::new(vec![DataPoint { date: day(4), temperature_max: 41.8 }]);
    let ext = dataset.extent().expect("non-empty");
    assert_eq!(ext.min_date, ext.max_date);
    assert_eq!(ext.min_temp, ext.max_temp);
}
