//! Snapshot-and-fade content transitions
//!
//! A swap hides behind a ghost: the current stack is cloned into an overlay at
//! full opacity, the scene state is committed so the overlay reaches the
//! screen first, then the live content is mutated underneath and the ghost
//! fades out over the configured duration. Removal is guaranteed twice over:
//! when the fade reaches zero, and by a hard deadline shortly after the fade
//! should have ended.

use std::time::Instant;

use crate::config::timing;
use crate::float::FloatAnimator;
use crate::scene::{NodeId, NodeKind, Scene};

struct Overlay {
    ghost: NodeId,
    started: Instant,
}

pub struct Crossfade {
    overlays: Vec<Overlay>,
}

impl Crossfade {
    pub fn new() -> Self {
        Self { overlays: Vec::new() }
    }

    pub fn is_active(&self) -> bool {
        !self.overlays.is_empty()
    }

    /// Run a content swap behind a fading snapshot. `apply` mutates the live
    /// content; it always runs, and runs before any fading starts. Without a
    /// title/stack wrapper the swap degrades to an instant, untransitioned
    /// `apply`.
    pub fn run<F>(&mut self, scene: &mut Scene, animator: &mut FloatAnimator, now: Instant, apply: F)
    where
        F: FnOnce(&mut Scene, &mut FloatAnimator),
    {
        let (title, stack) = match (scene.title(), scene.stack()) {
            (Some(title), Some(stack)) => (title, stack),
            _ => {
                apply(scene, animator);
                return;
            }
        };

        let snapshot = match scene.clone_subtree(stack) {
            Some(snapshot) => snapshot,
            None => {
                apply(scene, animator);
                return;
            }
        };
        let ghost = scene.create(NodeKind::Ghost);
        scene.append_child(ghost, snapshot);
        scene.append_child(title, ghost);
        scene.set_opacity(ghost, 1.0);

        // The overlay must be on screen before the swap shows through.
        scene.commit();
        apply(scene, animator);

        self.overlays.push(Overlay { ghost, started: now });
    }

    /// Advance all in-flight fades. Returns true while any overlay is live so
    /// the host keeps redrawing.
    pub fn tick(&mut self, scene: &mut Scene, now: Instant) -> bool {
        if self.overlays.is_empty() {
            return false;
        }
        let duration = timing::CROSSFADE_MS as f32;
        let deadline = timing::CROSSFADE_MS + timing::CROSSFADE_GRACE_MS;

        self.overlays.retain(|overlay| {
            let age = now.duration_since(overlay.started);
            // Hard fallback: the ghost leaves the tree even if the fade
            // completion below never fires.
            if age.as_millis() as u64 >= deadline {
                scene.remove(overlay.ghost);
                return false;
            }
            let opacity = 1.0 - age.as_secs_f32() * 1000.0 / duration;
            if opacity <= 0.0 {
                scene.remove(overlay.ghost);
                return false;
            }
            scene.set_opacity(overlay.ghost, opacity);
            true
        });
        true
    }
}

impl Default for Crossfade {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::Breakpoint;
    use crate::float::FloatProfile;
    use std::time::Duration;

    #[test]
    fn test_overlay_covers_swap_before_fading() {
        let mut scene = Scene::index_page();
        let mut animator = FloatAnimator::with_seed(1);
        let mut crossfade = Crossfade::new();
        let headline = scene.headline().unwrap();
        let t0 = Instant::now();

        crossfade.run(&mut scene, &mut animator, t0, |scene, animator| {
            // The snapshot is already in the tree when the swap runs
            assert_eq!(scene.ghosts().len(), 1);
            animator.set_line(scene, Some(headline), "Sottocorrente", FloatProfile::headline(Breakpoint::Desktop));
        });

        // Ghost still fully opaque, swap already applied underneath
        let ghost = scene.ghosts()[0];
        assert_eq!(scene.get(ghost).unwrap().opacity, 1.0);
        assert_eq!(scene.visible_text(headline), "Sottocorrente");
        assert!(scene.take_commit());

        // The snapshot kept the old content
        let snapshot = scene.children(ghost)[0];
        let old_headline = scene.children(snapshot)[0];
        assert_eq!(scene.visible_text(old_headline), "Undercurrents");
    }

    #[test]
    fn test_opacity_decreases_and_ghost_is_removed() {
        let mut scene = Scene::index_page();
        let mut animator = FloatAnimator::with_seed(1);
        let mut crossfade = Crossfade::new();
        let t0 = Instant::now();

        crossfade.run(&mut scene, &mut animator, t0, |_, _| {});
        let ghost = scene.ghosts()[0];

        assert!(crossfade.tick(&mut scene, t0 + Duration::from_millis(350)));
        let halfway = scene.get(ghost).unwrap().opacity;
        assert!(halfway < 1.0 && halfway > 0.0);

        crossfade.tick(&mut scene, t0 + Duration::from_millis(700));
        assert!(scene.ghosts().is_empty());
        assert!(!crossfade.is_active());
    }

    #[test]
    fn test_fallback_deadline_removes_stalled_ghost() {
        let mut scene = Scene::index_page();
        let mut animator = FloatAnimator::with_seed(1);
        let mut crossfade = Crossfade::new();
        let t0 = Instant::now();

        crossfade.run(&mut scene, &mut animator, t0, |_, _| {});
        // No intermediate ticks at all: the first tick lands past the
        // duration + grace deadline and must still clean up.
        crossfade.tick(&mut scene, t0 + Duration::from_millis(950));
        assert!(scene.ghosts().is_empty());
    }

    #[test]
    fn test_missing_stack_degrades_to_instant_swap() {
        let mut scene = Scene::new();
        let mut animator = FloatAnimator::with_seed(1);
        let mut crossfade = Crossfade::new();
        let mut applied = false;

        crossfade.run(&mut scene, &mut animator, Instant::now(), |_, _| {
            applied = true;
        });
        assert!(applied);
        assert!(scene.ghosts().is_empty());
        assert!(!crossfade.is_active());
    }

    #[test]
    fn test_overlapping_fades_clean_up_independently() {
        let mut scene = Scene::index_page();
        let mut animator = FloatAnimator::with_seed(1);
        let mut crossfade = Crossfade::new();
        let t0 = Instant::now();

        crossfade.run(&mut scene, &mut animator, t0, |_, _| {});
        crossfade.run(&mut scene, &mut animator, t0 + Duration::from_millis(500), |_, _| {});
        assert_eq!(scene.ghosts().len(), 2);

        crossfade.tick(&mut scene, t0 + Duration::from_millis(750));
        assert_eq!(scene.ghosts().len(), 1);
        crossfade.tick(&mut scene, t0 + Duration::from_millis(1250));
        assert!(scene.ghosts().is_empty());
    }
}
