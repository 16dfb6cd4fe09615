// File: crates/thermoline-core/src/graph.rs
// Summary: Graph component: scales from dataset extent, hover transitions, and
// headless rendering to PNG/RGBA via Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axis;
use crate::data::Dataset;
use crate::error::GraphError;
use crate::hover::{self, HoverState, Tooltip, INDICATOR_RADIUS};
use crate::layout::Dimensions;
use crate::scale::{LinearScale, TimeScale};
use crate::text::TextShaper;
use crate::theme::Theme;

pub struct RenderOptions {
    pub draw_labels: bool,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { draw_labels: true, theme: Theme::dark() }
    }
}

/// The line graph: dataset, layout, scales computed once from the dataset
/// extent, and the hover state the pointer handlers mutate. Scales and data
/// are immutable after construction.
pub struct Graph {
    dataset: Dataset,
    dims: Dimensions,
    x_scale: TimeScale,
    y_scale: LinearScale,
    hover: HoverState,
}

impl Graph {
    /// Build a graph over `dataset`, refusing empty datasets up front rather
    /// than producing a degenerate domain.
    pub fn new(dataset: Dataset, dims: Dimensions) -> Result<Self, GraphError> {
        let ext = dataset.extent()?;
        let x_scale = TimeScale::new(ext.min_date, ext.max_date, dims.bounded_width);
        let y_scale = LinearScale::new(ext.min_temp, ext.max_temp, dims.bounded_height);
        Ok(Self { dataset, dims, x_scale, y_scale, hover: HoverState::Hidden })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dims
    }

    pub fn x_scale(&self) -> &TimeScale {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y_scale
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    /// Pointer moved inside the bounded plot area. `x_px`/`y_px` are
    /// bounded-local coordinates; only x participates in the lookup. The x
    /// coordinate inverts through the time scale (extrapolating at the
    /// edges) and the nearest record by time-distance becomes the visible
    /// hover target.
    pub fn on_pointer_move(&mut self, x_px: f64, _y_px: f64) -> &HoverState {
        let hovered = self.x_scale.from_px(x_px);
        if let Some(index) = self.dataset.nearest_index(hovered) {
            let p = self.dataset.points()[index];
            let cx = self.x_scale.to_px(p.date);
            let cy = self.y_scale.to_px(p.temperature_max);
            let tooltip = Tooltip {
                date_text: hover::format_date(p.date),
                temp_text: hover::format_temperature(p.temperature_max),
                anchor_x: cx + self.dims.margin.left as f32,
                anchor_y: cy + self.dims.margin.top as f32,
                circle_x: cx,
                circle_y: cy,
            };
            self.hover = HoverState::Visible { index, tooltip };
        }
        &self.hover
    }

    /// Pointer left the plot area; hides the tooltip and indicator circle.
    pub fn on_pointer_leave(&mut self) {
        self.hover = HoverState::Hidden;
    }

    /// Render the graph to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Render to PNG-encoded bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster_surface()?;
        self.draw(surface.canvas(), opts);
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a raw RGBA8 buffer. Returns (pixels, width, height, row bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.raster_surface()?;
        self.draw(surface.canvas(), opts);
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("read RGBA pixels failed");
        }
        Ok((pixels, w, h, row_bytes))
    }

    fn raster_surface(&self) -> Result<skia::Surface> {
        let w = self.dims.width.round() as i32;
        let h = self.dims.height.round() as i32;
        skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(opts.theme.background);

        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };

        // Bounded group: everything plot-local draws relative to the margins.
        canvas.save();
        canvas.translate((self.dims.margin.left as f32, self.dims.margin.top as f32));
        draw_axes(canvas, shaper.as_ref(), &opts.theme, &self.dims, &self.x_scale, &self.y_scale);
        draw_line_path(canvas, &opts.theme, &self.dataset, &self.x_scale, &self.y_scale);
        if let Some(tooltip) = self.hover.tooltip() {
            draw_indicator(canvas, &opts.theme, tooltip);
        }
        canvas.restore();

        // Tooltip box anchors in surface coordinates (margins included).
        if let (Some(sh), Some(tooltip)) = (shaper.as_ref(), self.hover.tooltip()) {
            draw_tooltip(canvas, sh, &opts.theme, tooltip);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_axes(
    canvas: &skia::Canvas,
    shaper: Option<&TextShaper>,
    theme: &Theme,
    dims: &Dimensions,
    x_scale: &TimeScale,
    y_scale: &LinearScale,
) {
    let bw = dims.bounded_width as f32;
    let bh = dims.bounded_height as f32;

    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // Bottom time axis and left value axis
    canvas.draw_line((0.0, bh), (bw, bh), &axis_paint);
    canvas.draw_line((0.0, 0.0), (0.0, bh), &axis_paint);

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    for tick in axis::time_ticks(x_scale, axis::X_TICKS) {
        canvas.draw_line((tick.px, bh), (tick.px, bh + 6.0), &tick_paint);
        if let Some(sh) = shaper {
            sh.draw_centered(canvas, &tick.label, tick.px, bh + 24.0, 12.0, theme.axis_label, false);
        }
    }
    for tick in axis::value_ticks(y_scale, axis::Y_TICKS) {
        canvas.draw_line((-6.0, tick.px), (0.0, tick.px), &tick_paint);
        if let Some(sh) = shaper {
            sh.draw_right(canvas, &tick.label, -10.0, tick.px + 4.0, 12.0, theme.axis_label, true);
        }
    }
}

fn draw_line_path(
    canvas: &skia::Canvas,
    theme: &Theme,
    dataset: &Dataset,
    x_scale: &TimeScale,
    y_scale: &LinearScale,
) {
    let points = dataset.points();
    if points.len() < 2 {
        return;
    }

    let mut builder = skia::PathBuilder::new();
    let first = points[0];
    builder.move_to((x_scale.to_px(first.date), y_scale.to_px(first.temperature_max)));
    for p in &points[1..] {
        builder.line_to((x_scale.to_px(p.date), y_scale.to_px(p.temperature_max)));
    }
    let path = builder.detach();

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(theme.line_stroke);

    canvas.draw_path(&path, &stroke);
}

fn draw_indicator(canvas: &skia::Canvas, theme: &Theme, tooltip: &Tooltip) {
    let center = (tooltip.circle_x, tooltip.circle_y);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.background);
    canvas.draw_circle(center, INDICATOR_RADIUS, &fill);

    let mut ring = skia::Paint::default();
    ring.set_anti_alias(true);
    ring.set_style(skia::paint::Style::Stroke);
    ring.set_stroke_width(2.0);
    ring.set_color(theme.indicator);
    canvas.draw_circle(center, INDICATOR_RADIUS, &ring);
}

fn draw_tooltip(canvas: &skia::Canvas, shaper: &TextShaper, theme: &Theme, tooltip: &Tooltip) {
    let size = 13.0f32;
    let pad = 8.0f32;
    let line_h = size + 5.0;

    let w_date = shaper.measure_width(&tooltip.date_text, size, false);
    let w_temp = shaper.measure_width(&tooltip.temp_text, size, true);
    let box_w = w_date.max(w_temp) + pad * 2.0;
    let box_h = line_h * 2.0 + pad * 2.0;

    // Centered horizontally on the anchor, box bottom above the indicator
    let left = tooltip.anchor_x - box_w * 0.5;
    let top = tooltip.anchor_y - box_h - INDICATOR_RADIUS - 4.0;

    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_color(theme.tooltip_bg);
    canvas.draw_round_rect(skia::Rect::from_xywh(left, top, box_w, box_h), 4.0, 4.0, &bg);

    shaper.draw_centered(canvas, &tooltip.date_text, tooltip.anchor_x, top + pad + size * 0.8, size, theme.tooltip_text, false);
    shaper.draw_centered(canvas, &tooltip.temp_text, tooltip.anchor_x, top + pad + line_h + size * 0.8, size, theme.tooltip_text, true);
}
