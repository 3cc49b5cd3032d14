//! Movement domain: tunable stats and the probe layer mask.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Every tunable number the movement pipeline reads.
///
/// Loaded once from `assets/data/movement_stats.ron` and read fresh each fixed
/// step, so replacing the resource between steps takes effect immediately.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementStats {
    /// Layer bits the player collider lives on. Probes hit every other layer.
    pub player_layer: u32,

    /// Snap axis input to -1/0/1 so gamepads and keyboards behave the same.
    pub snap_input: bool,
    pub vertical_dead_zone_threshold: f32,
    pub horizontal_dead_zone_threshold: f32,

    pub max_speed: f32,
    pub acceleration: f32,
    pub ground_deceleration: f32,
    /// Only applies once horizontal input stops mid-air.
    pub air_deceleration: f32,
    /// Constant downward velocity while grounded.
    pub grounding_force: f32,
    /// Distance of the ground and ceiling probes.
    pub grounder_distance: f32,

    pub jump_power: f32,
    pub max_fall_speed: f32,
    /// In-air gravity.
    pub fall_acceleration: f32,
    /// Gravity multiplier while ascending after an early jump release.
    pub jump_end_early_gravity_modifier: f32,
    pub coyote_time: f32,
    pub jump_buffer: f32,
}

impl Default for MovementStats {
    fn default() -> Self {
        Self {
            player_layer: GameLayer::Player.to_bits(),
            snap_input: true,
            vertical_dead_zone_threshold: 0.3,
            horizontal_dead_zone_threshold: 0.1,
            max_speed: 14.0,
            acceleration: 120.0,
            ground_deceleration: 60.0,
            air_deceleration: 30.0,
            grounding_force: -1.5,
            grounder_distance: 0.05,
            jump_power: 36.0,
            max_fall_speed: 40.0,
            fall_acceleration: 110.0,
            jump_end_early_gravity_modifier: 3.0,
            coyote_time: 0.15,
            jump_buffer: 0.2,
        }
    }
}

impl MovementStats {
    /// Height of a full-held jump: h = v² / (2g).
    pub fn jump_apex_height(&self) -> f32 {
        if self.fall_acceleration <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_power * self.jump_power / (2.0 * self.fall_acceleration)
    }

    /// Seconds from takeoff to apex of a full-held jump.
    pub fn time_to_apex(&self) -> f32 {
        if self.fall_acceleration <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_power / self.fall_acceleration
    }

    /// Layer bits the probes test against: everything but the player's own layer.
    pub fn probe_mask(&self) -> u32 {
        !self.player_layer
    }

    /// One-line summary for startup logging.
    pub fn summary(&self) -> String {
        format!(
            "max_speed={}, jump_power={}, apex={:.2}, coyote={}s, buffer={}s, snap_input={}",
            self.max_speed,
            self.jump_power,
            self.jump_apex_height(),
            self.coyote_time,
            self.jump_buffer,
            self.snap_input
        )
    }
}

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors, platforms and ceilings
    Ground,
    /// Player character
    Player,
}
