//! Viewport breakpoint classification

use crate::config::breakpoints;
use crate::config::float;

/// Viewport class derived from the current width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn is_desktop(self) -> bool {
        matches!(self, Breakpoint::Desktop)
    }

    /// Scale applied to float amplitudes and noise on smaller viewports.
    /// Speeds are left untouched so motion stays in phase across resizes.
    pub fn motion_scale(self) -> f32 {
        match self {
            Breakpoint::Mobile => float::MOBILE_MOTION_SCALE,
            Breakpoint::Tablet => float::TABLET_MOTION_SCALE,
            Breakpoint::Desktop => 1.0,
        }
    }
}

/// Map a viewport width to its breakpoint. Every width maps to exactly one
/// class: mobile ≤ 865, tablet 866–1199, desktop ≥ 1200.
pub fn classify(width: f32) -> Breakpoint {
    if width <= breakpoints::MOBILE_MAX_WIDTH {
        Breakpoint::Mobile
    } else if width < breakpoints::DESKTOP_MIN_WIDTH {
        Breakpoint::Tablet
    } else {
        Breakpoint::Desktop
    }
}

/// Tracks the current breakpoint across resize events and reports only
/// actual class changes, not every resize.
#[derive(Debug)]
pub struct BreakpointWatcher {
    current: Breakpoint,
}

impl BreakpointWatcher {
    pub fn new(width: f32) -> Self {
        Self {
            current: classify(width),
        }
    }

    pub fn current(&self) -> Breakpoint {
        self.current
    }

    /// Process a resize. Returns the new breakpoint when the width crossed a
    /// threshold, None when the class is unchanged.
    pub fn update(&mut self, width: f32) -> Option<Breakpoint> {
        let next = classify(width);
        if next == self.current {
            None
        } else {
            self.current = next;
            Some(next)
        }
    }
}
