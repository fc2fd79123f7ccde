//! Theme colors for the landing page

pub struct Theme {
    /// Background color (RGB 0.0-1.0)
    pub bg: (f32, f32, f32),
    /// Hero title color
    pub title: (f32, f32, f32),
    /// Subline/date color
    pub subline: (f32, f32, f32),
    /// Logo and nav link color
    pub link: (f32, f32, f32),
    /// Language button color
    pub button: (f32, f32, f32),
    /// Custom cursor dot color
    pub cursor_dot: (f32, f32, f32),
    /// Cursor label color
    pub cursor_label: (f32, f32, f32),
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: (0.03, 0.05, 0.08),           // Deep lagoon blue-black
            title: (0.94, 0.94, 0.94),        // Near-white
            subline: (0.72, 0.76, 0.80),      // Cool grey
            link: (0.85, 0.87, 0.90),         // Pale grey-blue
            button: (0.94, 0.94, 0.94),       // Near-white
            cursor_dot: (0.55, 0.55, 0.55),   // Original grey dot
            cursor_label: (0.94, 0.94, 0.94), // #f0f0f0
        }
    }
}
