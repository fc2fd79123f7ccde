//! Application state types

use crate::scene::NodeId;

/// Result type for application actions that may trigger UI updates
#[must_use = "Handle the AppResult to ensure the UI updates correctly"]
pub enum AppResult {
    /// No action needed
    Ok,
    /// UI needs to be redrawn
    Redraw,
}

impl AppResult {
    pub fn needs_redraw(&self) -> bool {
        matches!(self, AppResult::Redraw)
    }
}

/// Transient UI state: custom cursor visuals and hover tracking
pub struct UiState {
    pub cursor_x: f32,
    pub cursor_y: f32,
    /// "←IT"/"EN→" label replacing the dot on the index page (desktop)
    pub cursor_label: Option<&'static str>,
    /// Grey dot fallback for pages without a hero title
    pub show_cursor_dot: bool,
    pub hovered_link: Option<NodeId>,
    /// Cursor persistence failures are logged once, not per pointer move
    pub persist_warned: bool,
}

impl UiState {
    pub fn new(saved: Option<(f32, f32)>) -> Self {
        let (cursor_x, cursor_y) = saved.unwrap_or((0.0, 0.0));
        Self {
            cursor_x,
            cursor_y,
            cursor_label: None,
            show_cursor_dot: false,
            hovered_link: None,
            persist_warned: false,
        }
    }
}
