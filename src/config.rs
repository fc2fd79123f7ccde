//! Centralized configuration constants for Undercurrents
//!
//! All magic numbers and tunable parameters should be defined here.

#![allow(dead_code)]

/// Viewport breakpoints (in logical pixels)
pub mod breakpoints {
    /// Widths up to and including this are mobile
    pub const MOBILE_MAX_WIDTH: f32 = 865.0;
    /// Widths from this one up are desktop; everything between is tablet
    pub const DESKTOP_MIN_WIDTH: f32 = 1200.0;
}

/// Timing constants (in milliseconds)
pub mod timing {
    /// Crossfade ghost fade duration
    pub const CROSSFADE_MS: u64 = 700;
    /// Grace period after the fade before the ghost is force-removed
    pub const CROSSFADE_GRACE_MS: u64 = 200;
    /// Minimum interval between accepted side switches (desktop)
    pub const SWITCH_MIN_INTERVAL_MS: u64 = 450;
    /// Auto-toggle interval between languages (tablet/mobile)
    pub const AUTO_SWITCH_INTERVAL_MS: u64 = 5000;
}

/// Pointer-driven switching behavior
pub mod pointer {
    /// Band around the viewport midpoint where pointer x triggers no switch
    pub const DEAD_ZONE_PX: f32 = 36.0;
}

/// Float animation constants
pub mod float {
    /// Angular speed of the slow secondary wobble (radians per ms)
    pub const WOBBLE_SPEED: f32 = 0.0005;
    /// Amplitude/noise scale applied on tablet viewports
    pub const TABLET_MOTION_SCALE: f32 = 0.8;
    /// Amplitude/noise scale applied on mobile viewports
    pub const MOBILE_MOTION_SCALE: f32 = 0.6;
}

/// Layout constants (in logical pixels, will be scaled by DPI)
pub mod layout {
    /// Logo baseline from the top-left corner
    pub const LOGO_X: f32 = 32.0;
    pub const LOGO_Y: f32 = 40.0;
    /// Baseline of the nav link row, from the top
    pub const NAV_Y: f32 = 40.0;
    /// Right-edge padding of the nav link row
    pub const NAV_PADDING: f32 = 32.0;
    /// Gap between nav links
    pub const NAV_SPACING: f32 = 28.0;
    /// Vertical center of the headline, as a fraction of viewport height
    pub const HEADLINE_CENTER_FRAC: f32 = 0.45;
    /// Gap between headline baseline and subline baseline
    pub const SUBLINE_GAP: f32 = 56.0;
    /// Baseline of the language buttons from the bottom edge
    pub const LANGUAGE_BUTTONS_BOTTOM: f32 = 64.0;
    /// Gap between the two language buttons
    pub const LANGUAGE_BUTTON_GAP: f32 = 48.0;
    /// Radius of the custom cursor dot
    pub const CURSOR_DOT_RADIUS: f32 = 6.0;
    /// Minimum distance kept between the cursor label and the viewport edge
    pub const LABEL_EDGE_PADDING: f32 = 2.0;
}

/// Font sizes (in logical pixels)
pub mod fonts {
    pub const HEADLINE_DESKTOP: f32 = 96.0;
    pub const HEADLINE_TABLET: f32 = 72.0;
    pub const HEADLINE_MOBILE: f32 = 48.0;
    pub const SUBLINE: f32 = 22.0;
    pub const LOGO: f32 = 26.0;
    pub const NAV_LINK: f32 = 18.0;
    pub const LANGUAGE_BUTTON: f32 = 20.0;
    pub const CURSOR_LABEL: f32 = 15.0;
}

/// Bilingual hero content and link targets
pub mod content {
    pub const RIGHT_HEADLINE: &str = "Undercurrents";
    pub const RIGHT_SUBLINE: &str = "January 9 – 19, 2026 • Venice, IT";
    pub const LEFT_HEADLINE: &str = "Sottocorrente";
    pub const LEFT_SUBLINE: &str = "9 – 19 Gennaio 2026 • Venezia, IT";

    pub const RIGHT_HREF: &str = "about.html";
    pub const LEFT_HREF: &str = "about-it.html";

    pub const LOGO_TEXT: &str = "Undercurrents";
    /// Nav links shown in the top-right corner: (label, target)
    pub const NAV_LINKS: [(&str, &str); 2] = [("About", "about.html"), ("Program", "program.html")];
    /// Language buttons shown on tablet/mobile: (label, target)
    pub const LANGUAGE_BUTTONS: [(&str, &str); 2] = [("EN", "about.html"), ("IT", "about-it.html")];

    /// Cursor label shown when the pointer is on the Italian side
    pub const LABEL_LEFT: &str = "←IT";
    /// Cursor label shown when the pointer is on the English side
    pub const LABEL_RIGHT: &str = "EN→";
}
