//! Movement domain: per-frame input sampling.

use bevy::prelude::*;

use super::MovementStats;

/// Raw device state for one rendered frame, before any snapping.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
}

/// Input as the movement pipeline sees it. Replaced wholesale every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub movement: Vec2,
    /// Only true on the frame the jump control went down.
    pub jump_down: bool,
    pub jump_held: bool,
}

/// Turns raw device state into a `FrameInput`, applying dead-zone snapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSampler;

impl InputSampler {
    pub fn sample(&self, raw: RawInput, stats: &MovementStats) -> FrameInput {
        let mut movement = raw.axis.clamp(Vec2::NEG_ONE, Vec2::ONE);

        if stats.snap_input {
            movement.x = snap_axis(movement.x, stats.horizontal_dead_zone_threshold);
            movement.y = snap_axis(movement.y, stats.vertical_dead_zone_threshold);
        }

        FrameInput {
            movement,
            jump_down: raw.jump_just_pressed,
            jump_held: raw.jump_held,
        }
    }
}

/// Zero values inside the dead zone, otherwise keep only the sign.
fn snap_axis(value: f32, dead_zone: f32) -> f32 {
    if value.abs() < dead_zone {
        0.0
    } else {
        value.signum()
    }
}
