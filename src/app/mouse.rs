//! Pointer event handling

use std::time::Instant;

use crate::float::FloatProfile;
use crate::persistence;

use super::side::{self, TitleSide};
use super::state::AppResult;
use super::App;

impl App {
    /// Process a pointer move: cursor visuals and side switching on desktop,
    /// hover floats on every device class.
    pub fn handle_mouse_move(&mut self, x: f32, y: f32) -> AppResult {
        let now = Instant::now();
        let bp = self.breakpoints.current();
        let mut redraw = false;

        if bp.is_desktop() {
            self.state.cursor_x = x;
            self.state.cursor_y = y;
            if self.scene.title().is_some() {
                self.state.cursor_label = Some(TitleSide::from_pointer_x(x, self.width).label());
            }

            if let Err(err) = persistence::save_cursor_position(x, y) {
                if !self.state.persist_warned {
                    eprintln!("[undercurrents] cursor position save failed: {}", err);
                    self.state.persist_warned = true;
                }
            }

            if let Some(side) = self.switcher.on_pointer_move(x, self.width, self.scale, now) {
                self.crossfade
                    .run(&mut self.scene, &mut self.animator, now, |scene, animator| {
                        side::present_side(scene, animator, side, bp);
                    });
            }
            redraw = true;
        }

        let hovered = self.scene.hoverable_at(x, y);
        if hovered != self.state.hovered_link {
            if let Some(prev) = self.state.hovered_link {
                let permanent = self
                    .scene
                    .get(prev)
                    .map(|node| node.permanent_float)
                    .unwrap_or(false);
                if !permanent {
                    self.animator.revert(&mut self.scene, prev);
                }
            }
            if let Some(next) = hovered {
                // No-op for elements already floating (the permanent logo)
                self.animator.apply(&mut self.scene, next, FloatProfile::link(bp));
            }
            self.state.hovered_link = hovered;
            redraw = true;
        }

        if redraw {
            AppResult::Redraw
        } else {
            AppResult::Ok
        }
    }
}
