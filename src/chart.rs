//! Chart renderer: maps the timing series into pixel space and draws axes,
//! ticks, curves, and a legend in an eframe window.

use anyhow::{ensure, Result};
use eframe::egui;
use egui::{Align2, Color32, Pos2, Stroke, Vec2};

pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 600.0;
pub const PADDING: f32 = 50.0;
pub const POINT_RADIUS: f32 = 5.0;
pub const NUM_Y_TICKS: u64 = 5;

const ORIGINAL_COLOR: Color32 = Color32::from_rgb(80, 140, 255);
const MODIFIED_COLOR: Color32 = Color32::from_rgb(255, 80, 80);
const AXIS_COLOR: Color32 = Color32::GRAY;
const LABEL_COLOR: Color32 = Color32::from_rgb(220, 220, 220);
const BACKGROUND_COLOR: Color32 = Color32::from_rgb(20, 22, 26);

/// The n sequence and both timing series, handed to the renderer read-only.
#[derive(Debug, Clone)]
pub struct ChartData {
    pub n_values: Vec<u32>,
    pub original_ns: Vec<u64>,
    pub modified_ns: Vec<u64>,
}

impl ChartData {
    /// Reject inputs the pixel mapping cannot handle: mismatched series,
    /// fewer than 2 points (the index mapping divides by `count - 1`), or an
    /// all-zero value range (the value mapping divides by the max).
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.original_ns.len() == self.n_values.len()
                && self.modified_ns.len() == self.n_values.len(),
            "timing series lengths ({}, {}) do not match n sequence length {}",
            self.original_ns.len(),
            self.modified_ns.len(),
            self.n_values.len()
        );
        ensure!(
            self.n_values.len() >= 2,
            "chart needs at least 2 data points, got {}",
            self.n_values.len()
        );
        ensure!(
            self.max_time() > 0,
            "chart needs a non-zero maximum time; all measurements were 0 ns"
        );
        Ok(())
    }

    /// True maximum over every element of both series. Timing data is not
    /// guaranteed monotonic, so the last element is not a safe stand-in.
    pub fn max_time(&self) -> u64 {
        self.original_ns
            .iter()
            .chain(self.modified_ns.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }
}

/// Linear data-to-pixel mapping inside a padded canvas.
#[derive(Debug, Clone, Copy)]
pub struct ChartLayout {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
}

impl ChartLayout {
    pub fn new(width: f32, height: f32, padding: f32) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Pixel x for data index `i` of `count` points: index 0 lands on the
    /// left padding edge, index `count - 1` on the right. Requires
    /// `count >= 2` (enforced by [`ChartData::validate`]).
    pub fn x_for_index(&self, i: usize, count: usize) -> f32 {
        self.padding + (i as f32) * (self.width - 2.0 * self.padding) / ((count - 1) as f32)
    }

    /// Pixel y for value `v` in `[0, max_time]`: 0 lands on the bottom
    /// padding edge, `max_time` on the top. Requires `max_time > 0`
    /// (enforced by [`ChartData::validate`]).
    pub fn y_for_value(&self, v: u64, max_time: u64) -> f32 {
        self.height
            - self.padding
            - (v as f32) * (self.height - 2.0 * self.padding) / (max_time as f32)
    }
}

/// One-shot chart window. Closing it ends the process.
pub struct ChartApp {
    data: ChartData,
    max_time: u64,
}

impl ChartApp {
    /// Callers must run [`ChartData::validate`] first.
    pub fn new(data: ChartData) -> Self {
        let max_time = data.max_time();
        Self { data, max_time }
    }

    fn draw_axes(&self, painter: &egui::Painter, origin: Pos2, layout: &ChartLayout) {
        let stroke = Stroke::new(1.0, AXIS_COLOR);
        let x0 = origin.x + layout.padding;
        let y0 = origin.y + layout.height - layout.padding;

        // X axis, then Y axis.
        painter.line_segment(
            [
                Pos2::new(x0, y0),
                Pos2::new(origin.x + layout.width - layout.padding, y0),
            ],
            stroke,
        );
        painter.line_segment([Pos2::new(x0, y0), Pos2::new(x0, origin.y + layout.padding)], stroke);
    }

    fn draw_x_ticks(&self, painter: &egui::Painter, origin: Pos2, layout: &ChartLayout) {
        let count = self.data.n_values.len();
        let y0 = origin.y + layout.height - layout.padding;
        let font = egui::FontId::proportional(12.0);

        for (i, n) in self.data.n_values.iter().enumerate() {
            let x = origin.x + layout.x_for_index(i, count);
            painter.line_segment(
                [Pos2::new(x, y0), Pos2::new(x, y0 + 5.0)],
                Stroke::new(1.0, AXIS_COLOR),
            );
            painter.text(
                Pos2::new(x, y0 + 8.0),
                Align2::CENTER_TOP,
                n.to_string(),
                font.clone(),
                LABEL_COLOR,
            );
        }
    }

    fn draw_y_ticks(&self, painter: &egui::Painter, origin: Pos2, layout: &ChartLayout) {
        let x0 = origin.x + layout.padding;
        let font = egui::FontId::proportional(12.0);

        for i in 0..=NUM_Y_TICKS {
            let value = self.max_time * i / NUM_Y_TICKS;
            let y = origin.y + layout.y_for_value(value, self.max_time);
            painter.line_segment(
                [Pos2::new(x0 - 5.0, y), Pos2::new(x0, y)],
                Stroke::new(1.0, AXIS_COLOR),
            );
            painter.text(
                Pos2::new(x0 - 8.0, y),
                Align2::RIGHT_CENTER,
                value.to_string(),
                font.clone(),
                LABEL_COLOR,
            );
        }
    }

    fn draw_axis_labels(&self, painter: &egui::Painter, origin: Pos2, layout: &ChartLayout) {
        let font = egui::FontId::proportional(14.0);

        painter.text(
            Pos2::new(origin.x + layout.width / 2.0, origin.y + layout.height - 10.0),
            Align2::CENTER_BOTTOM,
            "n (Input Size)",
            font.clone(),
            LABEL_COLOR,
        );

        // Vertical Y-axis label, rotated 90° counter-clockwise.
        let galley = painter.layout_no_wrap("Time (ns)".to_owned(), font, LABEL_COLOR);
        let pos = Pos2::new(
            origin.x + 8.0,
            origin.y + (layout.height + galley.size().x) / 2.0,
        );
        painter.add(
            egui::epaint::TextShape::new(pos, galley, LABEL_COLOR)
                .with_angle(-std::f32::consts::FRAC_PI_2),
        );
    }

    fn draw_curve(
        &self,
        painter: &egui::Painter,
        origin: Pos2,
        layout: &ChartLayout,
        series: &[u64],
        color: Color32,
    ) {
        let count = series.len();
        let stroke = Stroke::new(2.0, color);

        let mut previous: Option<Pos2> = None;
        for (i, &v) in series.iter().enumerate() {
            let point = Pos2::new(
                origin.x + layout.x_for_index(i, count),
                origin.y + layout.y_for_value(v, self.max_time),
            );
            painter.circle_filled(point, POINT_RADIUS, color);
            if let Some(prev) = previous {
                painter.line_segment([prev, point], stroke);
            }
            previous = Some(point);
        }
    }

    fn draw_legend(&self, painter: &egui::Painter, origin: Pos2, layout: &ChartLayout) {
        let font = egui::FontId::proportional(13.0);
        let entries = [
            ("Original Function", ORIGINAL_COLOR),
            ("Modified Function", MODIFIED_COLOR),
        ];

        for (row, (label, color)) in entries.iter().enumerate() {
            let y = origin.y + layout.padding + 20.0 * (row as f32 + 1.0);
            let swatch = Pos2::new(origin.x + layout.width - 170.0, y);
            painter.circle_filled(swatch, 5.0, *color);
            painter.text(
                swatch + Vec2::new(12.0, 0.0),
                Align2::LEFT_CENTER,
                *label,
                font.clone(),
                *color,
            );
        }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND_COLOR))
            .show(ctx, |ui| {
                let rect = ui.available_rect_before_wrap();
                let painter = ui.painter_at(rect);
                let layout = ChartLayout::new(rect.width(), rect.height(), PADDING);
                let origin = rect.min;

                self.draw_axes(&painter, origin, &layout);
                self.draw_x_ticks(&painter, origin, &layout);
                self.draw_y_ticks(&painter, origin, &layout);
                self.draw_axis_labels(&painter, origin, &layout);
                self.draw_curve(&painter, origin, &layout, &self.data.original_ns, ORIGINAL_COLOR);
                self.draw_curve(&painter, origin, &layout, &self.data.modified_ns, MODIFIED_COLOR);
                self.draw_legend(&painter, origin, &layout);
            });
    }
}

/// Validate the data and open the chart window; blocks until it is closed.
pub fn show_chart(data: ChartData) -> Result<()> {
    data.validate()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([CANVAS_WIDTH, CANVAS_HEIGHT])
            .with_title("Execution Time Plot"),
        ..Default::default()
    };

    eframe::run_native(
        "Execution Time Plot",
        options,
        Box::new(move |_cc| Ok(Box::new(ChartApp::new(data)))),
    )
    .map_err(|e| anyhow::anyhow!("chart window failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::{ChartData, ChartLayout, CANVAS_HEIGHT, CANVAS_WIDTH, PADDING};

    fn two_point_data() -> ChartData {
        ChartData {
            n_values: vec![1, 2],
            original_ns: vec![10, 40],
            modified_ns: vec![20, 80],
        }
    }

    #[test]
    fn x_mapping_endpoints() {
        let layout = ChartLayout::new(CANVAS_WIDTH, CANVAS_HEIGHT, PADDING);
        assert_eq!(layout.x_for_index(0, 2), PADDING);
        assert_eq!(layout.x_for_index(1, 2), CANVAS_WIDTH - PADDING);
    }

    #[test]
    fn y_mapping_endpoints() {
        let layout = ChartLayout::new(CANVAS_WIDTH, CANVAS_HEIGHT, PADDING);
        assert_eq!(layout.y_for_value(0, 100), CANVAS_HEIGHT - PADDING);
        assert_eq!(layout.y_for_value(100, 100), PADDING);
    }

    #[test]
    fn x_mapping_is_evenly_spaced() {
        let layout = ChartLayout::new(CANVAS_WIDTH, CANVAS_HEIGHT, PADDING);
        let step = layout.x_for_index(1, 9) - layout.x_for_index(0, 9);
        for i in 1..9 {
            let gap = layout.x_for_index(i, 9) - layout.x_for_index(i - 1, 9);
            assert!((gap - step).abs() < 1e-3);
        }
    }

    #[test]
    fn valid_data_passes() {
        assert!(two_point_data().validate().is_ok());
    }

    #[test]
    fn rejects_single_point() {
        let data = ChartData {
            n_values: vec![1],
            original_ns: vec![10],
            modified_ns: vec![20],
        };
        assert!(data.validate().is_err());
    }

    #[test]
    fn rejects_zero_max_time() {
        let data = ChartData {
            n_values: vec![1, 2],
            original_ns: vec![0, 0],
            modified_ns: vec![0, 0],
        };
        assert!(data.validate().is_err());
    }

    #[test]
    fn rejects_mismatched_series() {
        let data = ChartData {
            n_values: vec![1, 2, 4],
            original_ns: vec![10, 40],
            modified_ns: vec![20, 80, 300],
        };
        assert!(data.validate().is_err());
    }

    #[test]
    fn max_time_scans_whole_series() {
        // A noisy spike in the middle must win over the last element.
        let data = ChartData {
            n_values: vec![1, 2, 4],
            original_ns: vec![10, 900, 40],
            modified_ns: vec![20, 30, 80],
        };
        assert_eq!(data.max_time(), 900);
    }
}
