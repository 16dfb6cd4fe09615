// File: crates/demo/src/main.rs
// Summary: Demo loads a daily-max-temperature JSON dataset and renders the
// line graph plus a hovered frame to PNGs.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use thermoline_core::{Dataset, Dimensions, Graph, RenderOptions};

fn main() -> Result<()> {
    // Dataset path and viewport width from CLI, with sample fallbacks
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "crates/demo/data/daily_max.json".to_string());
    let viewport: f64 = match std::env::args().nth(2) {
        Some(s) => s
            .parse()
            .with_context(|| format!("viewport width '{s}' is not numeric"))?,
        None => 1000.0,
    };

    let (path, used_alt) = resolve_path(&raw)?;
    println!("Using dataset: {}", path.display());
    if used_alt {
        println!("  (resolved relative to the demo crate)");
    }

    let dataset = Dataset::from_json_file(&path)
        .with_context(|| format!("failed to load dataset '{}'", path.display()))?;
    println!("Loaded {} records", dataset.len());

    let ext = dataset.extent().context("dataset is empty")?;
    println!(
        "Date range: {} to {}; temperature range: [{:.1}, {:.1}] F",
        ext.min_date, ext.max_date, ext.min_temp, ext.max_temp
    );

    let dims = Dimensions::from_viewport(viewport);
    println!(
        "Surface {}x{} (plot {}x{})",
        dims.width, dims.height, dims.bounded_width, dims.bounded_height
    );

    let mut graph = Graph::new(dataset, dims).context("building graph")?;
    let mut opts = RenderOptions::default();
    if let Some(name) = std::env::args().nth(3) {
        opts.theme = thermoline_core::theme::find(&name);
        println!("Theme: {}", opts.theme.name);
    }

    let out_base = out_name_with(&path, "base");
    graph.render_to_png(&opts, &out_base)?;
    println!("Wrote {}", out_base.display());

    // Hovered frame: pointer at the middle of the plot area
    graph.on_pointer_move(dims.bounded_width * 0.5, dims.bounded_height * 0.5);
    if let Some(tooltip) = graph.hover().tooltip() {
        println!("Hover: {} / {}", tooltip.date_text, tooltip.temp_text);
    }
    let out_hover = out_name_with(&path, "hover");
    graph.render_to_png(&opts, &out_hover)?;
    println!("Wrote {}", out_hover.display());

    Ok(())
}

/// Resolve the dataset path, also trying it relative to this crate's
/// directory so the demo runs from the workspace root or from `crates/demo`.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    let alt = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/daily_max.json");
    if alt.exists() {
        return Ok((alt, true));
    }
    anyhow::bail!("dataset not found: {}", p.display());
}

/// Produce output file name like target/out/graph_<stem>_<suffix>.png
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("graph");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("graph_{stem}_{suffix}.png"));
    out
}
