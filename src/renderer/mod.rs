//! GPU-accelerated rendering with femtovg

mod cursor;
mod fonts;
mod title;

use femtovg::{Canvas, Color, FontId, renderer::OpenGl};

use crate::app::UiState;
use crate::breakpoint::Breakpoint;
use crate::scene::Scene;
use crate::theme::Theme;

use cursor::CursorRenderer;
use title::TitleRenderer;

pub struct Renderer {
    canvas: Canvas<OpenGl>,
    fonts: Vec<FontId>,
    theme: Theme,
    width: f32,
    height: f32,
    scale: f32,
}

impl Renderer {
    pub fn new(renderer: OpenGl, width: f32, height: f32, scale: f32) -> Self {
        let mut canvas = Canvas::new(renderer).expect("Failed to create canvas");

        // Load fonts with fallbacks
        let fonts = fonts::load_fonts(&mut canvas);

        let theme = Theme::dark();

        Self {
            canvas,
            fonts,
            theme,
            width,
            height,
            scale,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32, scale: f32) {
        self.width = width;
        self.height = height;
        self.scale = scale;
    }

    pub fn render(&mut self, scene: &mut Scene, state: &UiState, bp: Breakpoint) {
        let (width, height) = (self.width, self.height);

        // DPI=1.0 with layout sizes in physical pixels, so femtovg rasterizes
        // glyphs at full resolution
        self.canvas.set_size(width as u32, height as u32, 1.0);
        self.canvas.clear_rect(
            0,
            0,
            width as u32,
            height as u32,
            Color::rgbf(self.theme.bg.0, self.theme.bg.1, self.theme.bg.2),
        );

        // Draw the page: title stack, ghost overlays, logo, links, buttons
        {
            let mut title = TitleRenderer::new(
                &mut self.canvas,
                &self.fonts,
                &self.theme,
                self.width,
                self.height,
                self.scale,
            );
            title.draw(scene, bp);
        }

        // Draw the custom cursor on top of everything
        if bp.is_desktop() {
            let mut cursor = CursorRenderer::new(
                &mut self.canvas,
                &self.fonts,
                &self.theme,
                self.width,
                self.scale,
            );
            if let Some(label) = state.cursor_label {
                cursor.draw_label(state.cursor_x, state.cursor_y, label);
            } else if state.show_cursor_dot {
                cursor.draw_dot(state.cursor_x, state.cursor_y);
            }
        }

        self.canvas.flush();
    }
}
