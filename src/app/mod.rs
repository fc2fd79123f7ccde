//! Application state and coordination

mod mouse;
mod side;
mod state;

use std::time::Instant;

use crate::breakpoint::{Breakpoint, BreakpointWatcher};
use crate::crossfade::Crossfade;
use crate::float::FloatAnimator;
use crate::persistence;
use crate::renderer::Renderer;
use crate::scene::Scene;

pub use state::{AppResult, UiState};
use side::SideSwitcher;

pub struct App {
    renderer: Renderer,
    scene: Scene,
    animator: FloatAnimator,
    crossfade: Crossfade,
    switcher: SideSwitcher,
    breakpoints: BreakpointWatcher,
    width: f32,
    height: f32,
    scale: f32,
    state: UiState,
}

impl App {
    pub fn new(
        gl_renderer: femtovg::renderer::OpenGl,
        width: f32,
        height: f32,
        scale: f32,
    ) -> Self {
        let renderer = Renderer::new(gl_renderer, width, height, scale);
        let scene = Scene::index_page();
        let animator = FloatAnimator::new();
        // Breakpoints are defined over logical pixels
        let breakpoints = BreakpointWatcher::new(width / scale);
        let bp = breakpoints.current();

        let saved = persistence::load_cursor_position();
        let switcher = SideSwitcher::seeded(bp, saved.map(|(x, _)| x), width);
        let state = UiState::new(saved);

        let mut app = Self {
            renderer,
            scene,
            animator,
            crossfade: Crossfade::new(),
            switcher,
            breakpoints,
            width,
            height,
            scale,
            state,
        };

        // Always-on floats: the title lines in the seeded language, and the
        // permanent logo.
        side::restyle_for_breakpoint(&mut app.scene, &mut app.animator, app.switcher.side(), bp);

        app.apply_mode(bp, Instant::now());
        app.seed_cursor_visuals(saved, bp);
        app
    }

    // =========================================================================
    // Core lifecycle
    // =========================================================================

    pub fn tick(&mut self) -> AppResult {
        let now = Instant::now();
        let mut redraw = false;

        if let Some(side) = self.switcher.poll_auto(now) {
            let bp = self.breakpoints.current();
            self.crossfade
                .run(&mut self.scene, &mut self.animator, now, |scene, animator| {
                    side::present_side(scene, animator, side, bp);
                });
            redraw = true;
        }

        if self.crossfade.tick(&mut self.scene, now) {
            redraw = true;
        }
        if self.animator.tick(&mut self.scene, now) {
            redraw = true;
        }
        if self.scene.take_commit() {
            redraw = true;
        }

        if redraw {
            AppResult::Redraw
        } else {
            AppResult::Ok
        }
    }

    pub fn resize(&mut self, width: f32, height: f32, scale: f32) -> AppResult {
        self.width = width;
        self.height = height;
        self.scale = scale;
        self.renderer.resize(width, height, scale);

        if let Some(bp) = self.breakpoints.update(width / scale) {
            side::restyle_for_breakpoint(&mut self.scene, &mut self.animator, self.switcher.side(), bp);
            self.apply_mode(bp, Instant::now());
        }
        AppResult::Redraw
    }

    pub fn render(&mut self) {
        self.renderer
            .render(&mut self.scene, &self.state, self.breakpoints.current());
    }

    // =========================================================================
    // Mode switching
    // =========================================================================

    /// Apply everything keyed off the breakpoint: which switching mode runs,
    /// which language affordances are visible, whether cursor visuals show.
    fn apply_mode(&mut self, bp: Breakpoint, now: Instant) {
        let desktop = bp.is_desktop();
        if desktop {
            self.switcher.disarm_auto();
        } else {
            self.switcher.arm_auto(now);
            self.state.cursor_label = None;
        }

        let buttons = self.scene.language_buttons();
        if let Some(buttons) = buttons {
            self.scene.set_visible(buttons, !desktop);
        }
        let link = self.scene.invisible_link();
        if let Some(link) = link {
            self.scene.set_visible(link, desktop);
        }
    }

    fn seed_cursor_visuals(&mut self, saved: Option<(f32, f32)>, bp: Breakpoint) {
        if !bp.is_desktop() {
            return;
        }
        if self.scene.title().is_some() {
            let x = saved.map(|(x, _)| x).unwrap_or(self.width / 2.0 + 1.0);
            self.state.cursor_label = Some(side::TitleSide::from_pointer_x(x, self.width).label());
        } else {
            // Pages without a hero title keep the plain grey dot
            self.state.show_cursor_dot = true;
        }
    }
}
