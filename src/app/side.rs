//! Language side switching state machine
//!
//! Desktop: the active side follows the pointer's half of the viewport, with a
//! dead-zone around the midpoint and a minimum interval between accepted
//! switches. Tablet/mobile: a fixed-interval timer alternates sides forever.
//! Both paths funnel through `present_side`, which re-renders the title lines
//! through the float animator and retargets the invisible link.

use std::time::{Duration, Instant};

use crate::breakpoint::Breakpoint;
use crate::config::{content, pointer, timing};
use crate::float::{FloatAnimator, FloatProfile};
use crate::scene::Scene;

/// Which language variant the hero title shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSide {
    /// Italian
    Left,
    /// English
    Right,
}

impl TitleSide {
    pub fn headline(self) -> &'static str {
        match self {
            TitleSide::Left => content::LEFT_HEADLINE,
            TitleSide::Right => content::RIGHT_HEADLINE,
        }
    }

    pub fn subline(self) -> &'static str {
        match self {
            TitleSide::Left => content::LEFT_SUBLINE,
            TitleSide::Right => content::RIGHT_SUBLINE,
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            TitleSide::Left => content::LEFT_HREF,
            TitleSide::Right => content::RIGHT_HREF,
        }
    }

    /// Cursor label pointing at the side the pointer is on
    pub fn label(self) -> &'static str {
        match self {
            TitleSide::Left => content::LABEL_LEFT,
            TitleSide::Right => content::LABEL_RIGHT,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            TitleSide::Left => TitleSide::Right,
            TitleSide::Right => TitleSide::Left,
        }
    }

    /// Side the pointer is on, midpoint exactly counting as Right.
    pub fn from_pointer_x(x: f32, viewport_width: f32) -> Self {
        if x < viewport_width / 2.0 {
            TitleSide::Left
        } else {
            TitleSide::Right
        }
    }
}

/// Side-switching state: current side, debounce clock and auto-toggle timer.
pub struct SideSwitcher {
    side: TitleSide,
    last_switch: Option<Instant>,
    next_auto_toggle: Option<Instant>,
}

impl SideSwitcher {
    pub fn new(initial: TitleSide) -> Self {
        Self {
            side: initial,
            last_switch: None,
            next_auto_toggle: None,
        }
    }

    /// Initial side on load: desktop derives it from the persisted pointer x
    /// (defaulting to just right of center), tablet/mobile always start on
    /// English.
    pub fn seeded(bp: Breakpoint, saved_x: Option<f32>, viewport_width: f32) -> Self {
        let side = if bp.is_desktop() {
            let x = saved_x.unwrap_or(viewport_width / 2.0 + 1.0);
            TitleSide::from_pointer_x(x, viewport_width)
        } else {
            TitleSide::Right
        };
        Self::new(side)
    }

    pub fn side(&self) -> TitleSide {
        self.side
    }

    /// Pointer-driven switch decision (desktop). Coordinates arrive in
    /// physical pixels; the dead-zone is defined in logical pixels, so it is
    /// widened by the DPI scale. Returns the accepted new side, or None when
    /// the pointer is in the dead-zone, already on the active side, or inside
    /// the debounce interval.
    pub fn on_pointer_move(
        &mut self,
        x: f32,
        viewport_width: f32,
        scale: f32,
        now: Instant,
    ) -> Option<TitleSide> {
        let center = viewport_width / 2.0;
        if (x - center).abs() < pointer::DEAD_ZONE_PX * scale {
            return None;
        }
        let want = TitleSide::from_pointer_x(x, viewport_width);
        if want == self.side {
            return None;
        }
        if let Some(last) = self.last_switch {
            if now.duration_since(last) < Duration::from_millis(timing::SWITCH_MIN_INTERVAL_MS) {
                return None;
            }
        }
        self.side = want;
        self.last_switch = Some(now);
        Some(want)
    }

    /// Arm the tablet/mobile auto-toggle timer. Pointer switching and the
    /// timer are mutually exclusive, keyed by the current breakpoint.
    pub fn arm_auto(&mut self, now: Instant) {
        self.next_auto_toggle =
            Some(now + Duration::from_millis(timing::AUTO_SWITCH_INTERVAL_MS));
    }

    pub fn disarm_auto(&mut self) {
        self.next_auto_toggle = None;
    }

    /// Fire the auto-toggle when due, unconditionally alternating sides.
    pub fn poll_auto(&mut self, now: Instant) -> Option<TitleSide> {
        let due = self.next_auto_toggle?;
        if now < due {
            return None;
        }
        self.side = self.side.toggled();
        self.next_auto_toggle = Some(due + Duration::from_millis(timing::AUTO_SWITCH_INTERVAL_MS));
        Some(self.side)
    }
}

/// Re-render both title lines in the given language and retarget the
/// invisible link. Missing elements degrade to no-ops.
pub fn present_side(scene: &mut Scene, animator: &mut FloatAnimator, side: TitleSide, bp: Breakpoint) {
    let headline = scene.headline();
    let subline = scene.subline();
    animator.set_line(scene, headline, side.headline(), FloatProfile::headline(bp));
    animator.set_line(scene, subline, side.subline(), FloatProfile::subline(bp));
    if let Some(link) = scene.invisible_link() {
        scene.set_href(link, side.href());
    }
}

/// Re-style the current content for a new breakpoint: both title lines and
/// the logo are reverted and re-wrapped with the breakpoint's motion
/// profiles. A style adjustment, not a content change, so no crossfade.
pub fn restyle_for_breakpoint(
    scene: &mut Scene,
    animator: &mut FloatAnimator,
    side: TitleSide,
    bp: Breakpoint,
) {
    present_side(scene, animator, side, bp);
    if let Some(logo) = scene.logo() {
        animator.revert(scene, logo);
        animator.apply(scene, logo, FloatProfile::logo(bp));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossfade::Crossfade;

    #[test]
    fn test_dead_zone_never_switches() {
        let width = 1920.0;
        let mut switcher = SideSwitcher::new(TitleSide::Right);
        let now = Instant::now();

        // Anywhere within 36px of the midpoint (960) is inert, on both sides
        for x in [925.0, 940.0, 959.0, 960.0, 961.0, 980.0, 995.0] {
            assert_eq!(switcher.on_pointer_move(x, width, 1.0, now), None, "x {}", x);
            assert_eq!(switcher.side(), TitleSide::Right);
        }

        // Same band with the opposite prior state
        let mut switcher = SideSwitcher::new(TitleSide::Left);
        for x in [925.0, 960.0, 995.0] {
            assert_eq!(switcher.on_pointer_move(x, width, 1.0, now), None);
            assert_eq!(switcher.side(), TitleSide::Left);
        }

        // Just outside the band the switch goes through
        let mut switcher = SideSwitcher::new(TitleSide::Right);
        assert_eq!(switcher.on_pointer_move(924.0, width, 1.0, now), Some(TitleSide::Left));
    }

    #[test]
    fn test_dead_zone_scales_with_dpi() {
        // 1920 logical px wide at scale 2.0: physical width 3840, center 1920,
        // dead-zone 72 physical px either side.
        let width = 3840.0;
        let scale = 2.0;
        let now = Instant::now();

        // 35 logical px left of center: inert despite being 70 physical px out
        let mut switcher = SideSwitcher::new(TitleSide::Right);
        assert_eq!(switcher.on_pointer_move(1850.0, width, scale, now), None);
        assert_eq!(switcher.side(), TitleSide::Right);

        // 40 logical px out clears the band
        assert_eq!(
            switcher.on_pointer_move(1840.0, width, scale, now),
            Some(TitleSide::Left)
        );
    }

    #[test]
    fn test_debounce_collapses_rapid_switches() {
        let width = 1920.0;
        let mut switcher = SideSwitcher::new(TitleSide::Right);
        let t0 = Instant::now();

        assert_eq!(switcher.on_pointer_move(100.0, width, 1.0, t0), Some(TitleSide::Left));
        // A qualifying opposite request 300ms later is swallowed
        let t1 = t0 + Duration::from_millis(300);
        assert_eq!(switcher.on_pointer_move(1800.0, width, 1.0, t1), None);
        assert_eq!(switcher.side(), TitleSide::Left);
        // After the interval it goes through
        let t2 = t0 + Duration::from_millis(450);
        assert_eq!(switcher.on_pointer_move(1800.0, width, 1.0, t2), Some(TitleSide::Right));
    }

    #[test]
    fn test_same_side_is_never_a_switch() {
        let width = 1920.0;
        let mut switcher = SideSwitcher::new(TitleSide::Right);
        let now = Instant::now();
        assert_eq!(switcher.on_pointer_move(1800.0, width, 1.0, now), None);
        assert_eq!(switcher.side(), TitleSide::Right);
    }

    #[test]
    fn test_desktop_pointer_scenario_flips_title() {
        // Desktop 1920 wide, pointer sweeps 1000 -> 100
        let width = 1920.0;
        let mut scene = Scene::index_page();
        let mut animator = FloatAnimator::with_seed(42);
        let mut crossfade = Crossfade::new();
        let mut switcher = SideSwitcher::seeded(Breakpoint::Desktop, None, width);
        assert_eq!(switcher.side(), TitleSide::Right);
        let t0 = Instant::now();

        // x=1000: right of center, already Right
        assert_eq!(switcher.on_pointer_move(1000.0, width, 1.0, t0), None);

        // x=100: 860px left of the midpoint, well past the dead-zone
        let side = switcher.on_pointer_move(100.0, width, 1.0, t0).unwrap();
        assert_eq!(side, TitleSide::Left);
        crossfade.run(&mut scene, &mut animator, t0, |scene, animator| {
            present_side(scene, animator, side, Breakpoint::Desktop);
        });

        let headline = scene.headline().unwrap();
        assert_eq!(scene.visible_text(headline), "Sottocorrente");
        let link = scene.invisible_link().unwrap();
        assert_eq!(scene.get(link).unwrap().href.as_deref(), Some("about-it.html"));
    }

    #[test]
    fn test_mobile_auto_toggle_twice_in_ten_seconds() {
        let mut switcher = SideSwitcher::seeded(Breakpoint::Mobile, Some(100.0), 800.0);
        // Saved cursor never affects tablet/mobile: always starts Right
        assert_eq!(switcher.side(), TitleSide::Right);
        let t0 = Instant::now();
        switcher.arm_auto(t0);

        assert_eq!(switcher.poll_auto(t0 + Duration::from_millis(4999)), None);
        assert_eq!(
            switcher.poll_auto(t0 + Duration::from_millis(5000)),
            Some(TitleSide::Left)
        );
        assert_eq!(switcher.poll_auto(t0 + Duration::from_millis(7000)), None);
        assert_eq!(
            switcher.poll_auto(t0 + Duration::from_millis(10000)),
            Some(TitleSide::Right)
        );
        assert_eq!(switcher.poll_auto(t0 + Duration::from_millis(10001)), None);
    }

    #[test]
    fn test_disarmed_timer_never_fires() {
        let mut switcher = SideSwitcher::new(TitleSide::Right);
        let t0 = Instant::now();
        switcher.arm_auto(t0);
        switcher.disarm_auto();
        assert_eq!(switcher.poll_auto(t0 + Duration::from_secs(60)), None);
    }

    #[test]
    fn test_seeding_from_persisted_cursor() {
        assert_eq!(
            SideSwitcher::seeded(Breakpoint::Desktop, Some(100.0), 1920.0).side(),
            TitleSide::Left
        );
        assert_eq!(
            SideSwitcher::seeded(Breakpoint::Desktop, Some(1800.0), 1920.0).side(),
            TitleSide::Right
        );
        // No saved position: default lands just right of center
        assert_eq!(
            SideSwitcher::seeded(Breakpoint::Desktop, None, 1920.0).side(),
            TitleSide::Right
        );
    }

    #[test]
    fn test_breakpoint_restyle_rewraps_in_place() {
        let mut scene = Scene::index_page();
        let mut animator = FloatAnimator::with_seed(8);
        restyle_for_breakpoint(&mut scene, &mut animator, TitleSide::Right, Breakpoint::Desktop);
        let headline = scene.headline().unwrap();
        let before = animator.unit_count();
        // Desktop headline amplitudes start at the unscaled base of 6
        assert!(animator.units_for(headline).iter().all(|u| u.amplitude() >= 6.0));

        restyle_for_breakpoint(&mut scene, &mut animator, TitleSide::Right, Breakpoint::Mobile);

        // Same text and unit count, shrunk amplitudes, and no ghost overlay:
        // a restyle swaps profiles in place without a crossfade
        assert_eq!(scene.visible_text(headline), "Undercurrents");
        assert_eq!(animator.unit_count(), before);
        assert!(animator.units_for(headline).iter().all(|u| u.amplitude() < 6.0));
        assert!(scene.ghosts().is_empty());
    }

    #[test]
    fn test_present_side_without_title_is_a_noop() {
        let mut scene = Scene::new();
        let mut animator = FloatAnimator::with_seed(1);
        present_side(&mut scene, &mut animator, TitleSide::Left, Breakpoint::Desktop);
        assert_eq!(animator.unit_count(), 0);
    }
}
