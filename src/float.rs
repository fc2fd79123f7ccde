//! Per-glyph floating text animation
//!
//! Text is wrapped into one animated unit per non-space character; spaces pass
//! through as plain nodes so word spacing survives the wrap. Every unit gets a
//! randomized amplitude, speed and phase from the owning animator's RNG, and
//! all units share a single clock whose epoch is fixed at the first frame
//! observed, so pausing the host does not desynchronize phases.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::breakpoint::Breakpoint;
use crate::config::float as float_config;
use crate::scene::{NodeId, Scene};

/// Parameters for one float application. All fields are ≥ 0; the per-unit
/// amplitude and speed are base + uniform_random(0, variance).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatProfile {
    pub amp_base: f32,
    pub amp_var: f32,
    pub speed_base: f32,
    pub speed_var: f32,
    pub noise: f32,
}

impl FloatProfile {
    pub fn headline(bp: Breakpoint) -> Self {
        Self {
            amp_base: 6.0,
            amp_var: 3.0,
            speed_base: 0.0018,
            speed_var: 0.0007,
            noise: 0.4,
        }
        .scaled(bp.motion_scale())
    }

    pub fn subline(bp: Breakpoint) -> Self {
        Self {
            amp_base: 1.0,
            amp_var: 0.4,
            speed_base: 0.0018,
            speed_var: 0.0007,
            noise: 0.08,
        }
        .scaled(bp.motion_scale())
    }

    pub fn logo(bp: Breakpoint) -> Self {
        Self {
            amp_base: 1.0,
            amp_var: 0.5,
            speed_base: 0.0018,
            speed_var: 0.0007,
            noise: 0.03,
        }
        .scaled(bp.motion_scale())
    }

    /// Hoverable links share the subline motion.
    pub fn link(bp: Breakpoint) -> Self {
        Self::subline(bp)
    }

    /// Scale amplitudes and noise, keeping speeds so motion stays in phase.
    fn scaled(mut self, scale: f32) -> Self {
        self.amp_base *= scale;
        self.amp_var *= scale;
        self.noise *= scale;
        self
    }
}

/// One animated glyph, owned by the element it was created for.
#[derive(Debug, Clone, Copy)]
pub struct AnimatedUnit {
    owner: NodeId,
    glyph: NodeId,
    amplitude: f32,
    speed: f32,
    phase: f32,
    noise: f32,
}

impl AnimatedUnit {
    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }
}

/// Animation context owned by the app: the registry of live units, the shared
/// clock and the RNG feeding per-unit parameters.
pub struct FloatAnimator {
    units: Vec<AnimatedUnit>,
    epoch: Option<Instant>,
    rng: StdRng,
}

impl FloatAnimator {
    pub fn new() -> Self {
        Self {
            units: Vec::new(),
            epoch: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic RNG for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            units: Vec::new(),
            epoch: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn units_for(&self, el: NodeId) -> Vec<AnimatedUnit> {
        self.units.iter().filter(|u| u.owner == el).copied().collect()
    }

    /// Wrap an element's text into animated glyphs. Returns the number of
    /// units created; 0 when the element is missing or already wrapped.
    pub fn apply(&mut self, scene: &mut Scene, el: NodeId, profile: FloatProfile) -> usize {
        let original = match scene.begin_float(el) {
            Some(original) => original,
            None => return 0,
        };

        let mut created = 0;
        for ch in original.chars() {
            if ch == ' ' {
                scene.append_space(el);
                continue;
            }
            let glyph = scene.append_glyph(el, ch);
            self.units.push(AnimatedUnit {
                owner: el,
                glyph,
                amplitude: jitter(&mut self.rng, profile.amp_base, profile.amp_var),
                speed: jitter(&mut self.rng, profile.speed_base, profile.speed_var),
                phase: self.rng.gen_range(0.0..std::f32::consts::TAU),
                noise: profile.noise,
            });
            created += 1;
        }
        created
    }

    /// Restore the element's original text and drop its units from the
    /// registry. No-op if the element is not currently wrapped.
    pub fn revert(&mut self, scene: &mut Scene, el: NodeId) {
        if !scene.float_applied(el) {
            return;
        }
        self.units.retain(|u| u.owner != el);
        scene.end_float(el);
    }

    /// Replace an element's text and re-wrap it: units out, revert, set text,
    /// apply. The single entry point for content swaps.
    pub fn set_line(&mut self, scene: &mut Scene, el: Option<NodeId>, text: &str, profile: FloatProfile) {
        let el = match el {
            Some(el) => el,
            None => return,
        };
        self.revert(scene, el);
        scene.set_text(el, text);
        self.apply(scene, el, profile);
    }

    /// Per-frame update. The epoch is pinned to the first frame that observes
    /// a non-empty registry and never moves afterwards.
    pub fn tick(&mut self, scene: &mut Scene, now: Instant) -> bool {
        if self.units.is_empty() {
            return false;
        }
        let epoch = *self.epoch.get_or_insert(now);
        let t = now.duration_since(epoch).as_secs_f32() * 1000.0;
        for unit in &self.units {
            let base_y = (t * unit.speed + unit.phase).sin() * unit.amplitude;
            let wobble = (t * float_config::WOBBLE_SPEED + unit.phase).sin() * unit.noise;
            scene.set_offset_y(unit.glyph, base_y + wobble);
        }
        true
    }
}

impl Default for FloatAnimator {
    fn default() -> Self {
        Self::new()
    }
}

fn jitter(rng: &mut StdRng, base: f32, var: f32) -> f32 {
    if var > 0.0 {
        base + rng.gen_range(0.0..var)
    } else {
        base
    }
}
