// File: crates/thermoline-core/tests/snapshot.rs
// Purpose: Golden snapshots for the base frame and a hovered frame.

use chrono::NaiveDate;
use thermoline_core::{DataPoint, Dataset, Dimensions, Graph, RenderOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    let update = bless_mode();
    if update {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn january_graph() -> Graph {
    let day = |d: u32| NaiveDate::from_ymd_opt(2018, 1, d).unwrap();
    let dataset = Dataset::new(vec![
        DataPoint { date: day(1), temperature_max: 32.0 },
        DataPoint { date: day(2), temperature_max: 35.5 },
        DataPoint { date: day(3), temperature_max: 30.1 },
        DataPoint { date: day(4), temperature_max: 41.8 },
        DataPoint { date: day(5), temperature_max: 50.0 },
        DataPoint { date: day(6), temperature_max: 44.2 },
    ]);
    Graph::new(dataset, Dimensions::from_viewport(1000.0)).expect("graph")
}

#[test]
fn golden_base_frame() {
    let graph = january_graph();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // deterministic
    let bytes = graph.render_to_png_bytes(&opts).expect("render bytes");
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/base.png");
    write_or_compare(&path, &bytes);
}

#[test]
fn golden_hovered_frame() {
    let mut graph = january_graph();
    graph.on_pointer_move(graph.dimensions().bounded_width * 0.5, 100.0);
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // indicator circle only; tooltip box needs text
    let bytes = graph.render_to_png_bytes(&opts).expect("render bytes");
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/hovered.png");
    write_or_compare(&path, &bytes);
}
