//! Hero title, logo, nav link and language button rendering
//!
//! Float-wrapped nodes are drawn glyph by glyph with their animated vertical
//! offsets; ghost overlays repeat the stack at their fading opacity. Link
//! bounds are recorded back into the scene for hover hit-testing.

use femtovg::{Align, Baseline, Canvas, Color, FontId, Paint, renderer::OpenGl};

use crate::breakpoint::Breakpoint;
use crate::config::{content, fonts as font_config, layout};
use crate::scene::{NodeId, NodeKind, Rect, Scene};
use crate::theme::Theme;

pub struct TitleRenderer<'a> {
    canvas: &'a mut Canvas<OpenGl>,
    fonts: &'a [FontId],
    theme: &'a Theme,
    width: f32,
    height: f32,
    scale: f32,
}

impl<'a> TitleRenderer<'a> {
    pub fn new(
        canvas: &'a mut Canvas<OpenGl>,
        fonts: &'a [FontId],
        theme: &'a Theme,
        width: f32,
        height: f32,
        scale: f32,
    ) -> Self {
        Self {
            canvas,
            fonts,
            theme,
            width,
            height,
            scale,
        }
    }

    pub fn draw(&mut self, scene: &mut Scene, bp: Breakpoint) {
        self.draw_stack_and_ghosts(scene, bp);
        self.draw_logo(scene);
        self.draw_nav_links(scene);
        self.draw_language_buttons(scene, bp);
    }

    fn headline_font_size(&self, bp: Breakpoint) -> f32 {
        let size = match bp {
            Breakpoint::Desktop => font_config::HEADLINE_DESKTOP,
            Breakpoint::Tablet => font_config::HEADLINE_TABLET,
            Breakpoint::Mobile => font_config::HEADLINE_MOBILE,
        };
        size * self.scale
    }

    fn paint(&self, color: (f32, f32, f32), font_size: f32) -> Paint {
        let mut paint = Paint::color(Color::rgbf(color.0, color.1, color.2));
        paint.set_font(self.fonts);
        paint.set_font_size(font_size);
        paint.set_text_align(Align::Left);
        paint.set_text_baseline(Baseline::Alphabetic);
        paint
    }

    // =========================================================================
    // Title stack
    // =========================================================================

    fn draw_stack_and_ghosts(&mut self, scene: &mut Scene, bp: Breakpoint) {
        let title = match scene.title() {
            Some(title) => title,
            None => return,
        };

        for child in scene.children(title).to_vec() {
            let node = match scene.get(child) {
                Some(node) => node,
                None => continue,
            };
            match node.kind {
                NodeKind::Stack => self.draw_stack(scene, child, bp, 1.0),
                NodeKind::Ghost => {
                    let opacity = node.opacity;
                    if let Some(&snapshot) = scene.children(child).first() {
                        self.draw_stack(scene, snapshot, bp, opacity);
                    }
                }
                _ => {}
            }
        }
    }

    fn draw_stack(&mut self, scene: &Scene, stack: NodeId, bp: Breakpoint, opacity: f32) {
        self.canvas.set_global_alpha(opacity);

        let headline_y = self.height * layout::HEADLINE_CENTER_FRAC;
        let lines = scene.children(stack).to_vec();
        if let Some(&headline) = lines.first() {
            let paint = self.paint(self.theme.title, self.headline_font_size(bp));
            self.draw_text_centered(scene, headline, headline_y, &paint);
        }
        if let Some(&subline) = lines.get(1) {
            let paint = self.paint(self.theme.subline, font_config::SUBLINE * self.scale);
            let subline_y = headline_y + layout::SUBLINE_GAP * self.scale;
            self.draw_text_centered(scene, subline, subline_y, &paint);
        }

        self.canvas.set_global_alpha(1.0);
    }

    /// Draw a possibly float-wrapped line centered on the viewport.
    fn draw_text_centered(&mut self, scene: &Scene, node: NodeId, baseline_y: f32, paint: &Paint) {
        let total = self.line_width(scene, node, paint);
        let x = (self.width - total) / 2.0;
        self.draw_text_at(scene, node, x, baseline_y, paint);
    }

    /// Draw a line anchored at x. Wrapped nodes advance glyph by glyph with
    /// their animated offsets; plain nodes draw in one call.
    fn draw_text_at(&mut self, scene: &Scene, node: NodeId, x: f32, baseline_y: f32, paint: &Paint) {
        let children = scene.children(node).to_vec();
        if children.is_empty() {
            let text = scene.text(node).unwrap_or("").to_string();
            let _ = self.canvas.fill_text(x, baseline_y, &text, paint);
            return;
        }

        let mut pen_x = x;
        for child in children {
            let (text, offset_y) = match scene.get(child) {
                Some(node) => (node.text.clone(), node.offset_y),
                None => continue,
            };
            let _ = self.canvas.fill_text(pen_x, baseline_y + offset_y, &text, paint);
            pen_x += self.measure(&text, paint);
        }
    }

    fn line_width(&self, scene: &Scene, node: NodeId, paint: &Paint) -> f32 {
        let children = scene.children(node);
        if children.is_empty() {
            return self.measure(scene.text(node).unwrap_or(""), paint);
        }
        children
            .iter()
            .filter_map(|&child| scene.get(child))
            .map(|child| self.measure(&child.text, paint))
            .sum()
    }

    fn measure(&self, text: &str, paint: &Paint) -> f32 {
        self.canvas
            .measure_text(0.0, 0.0, text, paint)
            .map(|metrics| metrics.width())
            .unwrap_or(0.0)
    }

    // =========================================================================
    // Logo and links
    // =========================================================================

    fn draw_logo(&mut self, scene: &mut Scene) {
        let logo = match scene.logo() {
            Some(logo) => logo,
            None => return,
        };
        if !scene.get(logo).map(|node| node.visible).unwrap_or(false) {
            return;
        }
        let font_size = font_config::LOGO * self.scale;
        let paint = self.paint(self.theme.link, font_size);
        let x = layout::LOGO_X * self.scale;
        let y = layout::LOGO_Y * self.scale;
        self.draw_text_at(scene, logo, x, y, &paint);
        let width = self.line_width(scene, logo, &paint);
        scene.set_bounds(
            logo,
            Rect {
                x,
                y: y - font_size,
                width,
                height: font_size * 1.4,
            },
        );
    }

    fn draw_nav_links(&mut self, scene: &mut Scene) {
        let links: Vec<NodeId> = scene
            .children(scene.root())
            .iter()
            .copied()
            .filter(|&id| {
                scene
                    .get(id)
                    .map(|node| node.kind == NodeKind::NavLink && node.visible)
                    .unwrap_or(false)
            })
            .collect();

        let font_size = font_config::NAV_LINK * self.scale;
        let paint = self.paint(self.theme.link, font_size);
        let y = layout::NAV_Y * self.scale;
        let mut right_edge = self.width - layout::NAV_PADDING * self.scale;

        for &link in links.iter().rev() {
            let width = self.line_width(scene, link, &paint);
            let x = right_edge - width;
            self.draw_text_at(scene, link, x, y, &paint);
            scene.set_bounds(
                link,
                Rect {
                    x,
                    y: y - font_size,
                    width,
                    height: font_size * 1.4,
                },
            );
            right_edge = x - layout::NAV_SPACING * self.scale;
        }
    }

    fn draw_language_buttons(&mut self, scene: &mut Scene, _bp: Breakpoint) {
        let buttons = match scene.language_buttons() {
            Some(buttons) => buttons,
            None => return,
        };
        if !scene.get(buttons).map(|node| node.visible).unwrap_or(false) {
            return;
        }

        let font_size = font_config::LANGUAGE_BUTTON * self.scale;
        let mut paint = self.paint(self.theme.button, font_size);
        paint.set_text_align(Align::Center);
        let y = self.height - layout::LANGUAGE_BUTTONS_BOTTOM * self.scale;
        let gap = layout::LANGUAGE_BUTTON_GAP * self.scale;
        let center = self.width / 2.0;

        let labels: Vec<&str> = content::LANGUAGE_BUTTONS.iter().map(|(label, _)| *label).collect();
        if let [first, second] = labels[..] {
            let _ = self.canvas.fill_text(center - gap / 2.0, y, first, &paint);
            let _ = self.canvas.fill_text(center + gap / 2.0, y, second, &paint);
        }
    }
}
