// File: crates/thermoline-examples/src/bin/linegraph.rs
// Summary: Minimal example that renders a temperature line graph from inline data.

use chrono::NaiveDate;
use thermoline_core::{DataPoint, Dataset, Dimensions, Graph, RenderOptions};

fn main() {
    let day = |d: u32| NaiveDate::from_ymd_opt(2018, 1, d).expect("valid day");
    let points = vec![
        DataPoint { date: day(1), temperature_max: 32.0 },
        DataPoint { date: day(2), temperature_max: 35.5 },
        DataPoint { date: day(3), temperature_max: 30.1 },
        DataPoint { date: day(4), temperature_max: 41.8 },
        DataPoint { date: day(5), temperature_max: 50.0 },
        DataPoint { date: day(6), temperature_max: 44.2 },
    ];

    let graph = Graph::new(Dataset::new(points), Dimensions::from_viewport(1000.0))
        .expect("non-empty dataset");

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/out/example_linegraph.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    graph.render_to_png(&opts, &out).expect("render to png");
    println!("Wrote {}", out.display());
}
