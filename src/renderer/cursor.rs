//! Custom cursor rendering: grey dot and side label
//!
//! The label is centered on the pointer and nudged horizontally so it never
//! leaves the viewport, matching the original page behavior.

use femtovg::{Align, Baseline, Canvas, Color, FontId, Paint, Path, renderer::OpenGl};

use crate::config::{fonts as font_config, layout};
use crate::theme::Theme;

pub struct CursorRenderer<'a> {
    canvas: &'a mut Canvas<OpenGl>,
    fonts: &'a [FontId],
    theme: &'a Theme,
    width: f32,
    scale: f32,
}

impl<'a> CursorRenderer<'a> {
    pub fn new(
        canvas: &'a mut Canvas<OpenGl>,
        fonts: &'a [FontId],
        theme: &'a Theme,
        width: f32,
        scale: f32,
    ) -> Self {
        Self {
            canvas,
            fonts,
            theme,
            width,
            scale,
        }
    }

    pub fn draw_dot(&mut self, x: f32, y: f32) {
        let mut path = Path::new();
        path.circle(x, y, layout::CURSOR_DOT_RADIUS * self.scale);
        let paint = Paint::color(Color::rgbf(
            self.theme.cursor_dot.0,
            self.theme.cursor_dot.1,
            self.theme.cursor_dot.2,
        ));
        self.canvas.fill_path(&path, &paint);
    }

    pub fn draw_label(&mut self, x: f32, y: f32, label: &str) {
        let mut paint = Paint::color(Color::rgbf(
            self.theme.cursor_label.0,
            self.theme.cursor_label.1,
            self.theme.cursor_label.2,
        ));
        paint.set_font(self.fonts);
        paint.set_font_size(font_config::CURSOR_LABEL * self.scale);
        paint.set_text_align(Align::Center);
        paint.set_text_baseline(Baseline::Middle);

        let half_width = self
            .canvas
            .measure_text(0.0, 0.0, label, &paint)
            .map(|metrics| metrics.width() / 2.0)
            .unwrap_or(0.0);

        // Push left when overflowing the right edge, right when overflowing
        // the left edge, so the label stays fully on screen.
        let pad = layout::LABEL_EDGE_PADDING * self.scale;
        let overflow_right = (x + half_width - self.width + pad).max(0.0);
        let overflow_left = (half_width - x + pad).max(0.0);
        let shift = overflow_right - overflow_left;

        let _ = self.canvas.fill_text(x - shift, y, label, &paint);
    }
}
