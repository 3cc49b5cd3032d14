//! Feedback cue state: facing, tilt, idle speed and landing/jump triggers.
//!
//! Everything here is derived from the controller's events and its read-only
//! input vector. Nothing reads or writes movement state.

use bevy::prelude::*;
use rand::Rng;

use crate::movement::GroundedChanged;
use crate::movement::math::{inverse_lerp, lerp, move_towards};

/// Tunables for the feedback layer.
#[derive(Resource, Debug, Clone)]
pub struct FeedbackSettings {
    /// Mirrors enabling/disabling the feedback component: links are attached or detached to match.
    pub enabled: bool,
    /// Upper bound of the idle animation speed multiplier.
    pub max_idle_speed: f32,
    /// Lean angle at full horizontal input, in degrees.
    pub max_tilt: f32,
    /// Radians per second.
    pub tilt_speed: f32,
    /// Impact speed that maps to a full-size landing effect.
    pub max_impact_speed: f32,
    pub move_particle_rate: f32,
    pub footsteps: Vec<String>,
    pub rng_seed: u64,
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            max_idle_speed: 2.0,
            max_tilt: 5.0,
            tilt_speed: 20.0,
            max_impact_speed: 40.0,
            move_particle_rate: 2.0,
            footsteps: vec![
                "audio/footstep_1.ogg".to_string(),
                "audio/footstep_2.ogg".to_string(),
                "audio/footstep_3.ogg".to_string(),
            ],
            rng_seed: 0x5eed,
        }
    }
}

/// Per-actor cue state, updated every rendered frame and on movement events.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct FeedbackCues {
    pub grounded: bool,
    pub flip_x: bool,
    pub idle_speed: f32,
    pub move_particle_scale: f32,
    pub move_particles_playing: bool,
    /// Current lean in radians.
    pub tilt: f32,
    pub landing_scale: f32,
    /// Index into `FeedbackSettings::footsteps` chosen on the last landing.
    pub footstep: Option<usize>,
    pub jump_triggered: bool,
    pub grounded_triggered: bool,
    /// Launch effects play for ground jumps only, not coyote jumps.
    pub launch_effects: bool,
}

impl Default for FeedbackCues {
    fn default() -> Self {
        Self {
            grounded: false,
            flip_x: false,
            idle_speed: 1.0,
            move_particle_scale: 0.0,
            move_particles_playing: true,
            tilt: 0.0,
            landing_scale: 0.0,
            footstep: None,
            jump_triggered: false,
            grounded_triggered: false,
            launch_effects: false,
        }
    }
}

impl FeedbackCues {
    /// Per-frame update from the current input vector.
    pub fn update(&mut self, settings: &FeedbackSettings, input: Vec2, dt: f32) {
        if input.x != 0.0 {
            self.flip_x = input.x < 0.0;
        }

        let strength = input.x.abs();
        self.idle_speed = lerp(1.0, settings.max_idle_speed, strength);
        self.move_particle_scale =
            move_towards(self.move_particle_scale, strength, settings.move_particle_rate * dt);

        let target = if self.grounded {
            (settings.max_tilt * input.x).to_radians()
        } else {
            0.0
        };
        self.tilt = move_towards(self.tilt, target, settings.tilt_speed * dt);
    }

    pub fn on_grounded_changed(
        &mut self,
        settings: &FeedbackSettings,
        change: &GroundedChanged,
        rng: &mut impl Rng,
    ) {
        self.grounded = change.grounded;

        if change.grounded {
            self.grounded_triggered = true;
            self.footstep = pick_footstep(settings.footsteps.len(), rng);
            self.move_particles_playing = true;
            self.landing_scale = inverse_lerp(0.0, settings.max_impact_speed, change.impact_speed);
        } else {
            self.move_particles_playing = false;
        }
    }

    pub fn on_jumped(&mut self) {
        self.jump_triggered = true;
        self.grounded_triggered = false;
        self.launch_effects = self.grounded;
    }

    /// Clear one-shot triggers once they have been consumed.
    pub fn clear_triggers(&mut self) {
        self.jump_triggered = false;
        self.grounded_triggered = false;
        self.launch_effects = false;
    }
}

/// Pick a random clip index. An empty list means no sound, not an error.
pub fn pick_footstep(clip_count: usize, rng: &mut impl Rng) -> Option<usize> {
    if clip_count == 0 {
        return None;
    }
    Some(rng.random_range(0..clip_count))
}
