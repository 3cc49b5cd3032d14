//! Movement domain: persistent physical state and its read-only snapshot.

use bevy::prelude::*;

use super::MovementStats;

/// Timestamp meaning "never happened"; every window measured from it is closed.
pub const NEVER: f32 = f32::MIN;

/// Mutable state owned by one `MovementCore`, carried across fixed steps.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementState {
    pub velocity: Vec2,
    pub grounded: bool,
    /// Clock every timing window is measured against.
    pub time: f32,
    pub time_left_grounded: f32,
    pub jump_to_consume: bool,
    pub time_jump_was_pressed: f32,
    pub buffered_jump_usable: bool,
    pub coyote_usable: bool,
    pub ended_jump_early: bool,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            grounded: false,
            time: 0.0,
            time_left_grounded: NEVER,
            jump_to_consume: false,
            time_jump_was_pressed: NEVER,
            buffered_jump_usable: false,
            coyote_usable: false,
            ended_jump_early: false,
        }
    }
}

impl MovementState {
    /// A jump press is still inside its buffer window and landing has re-armed it.
    pub fn has_buffered_jump(&self, stats: &MovementStats) -> bool {
        self.buffered_jump_usable && self.time < self.time_jump_was_pressed + stats.jump_buffer
    }

    /// Airborne, coyote still armed, and inside the grace window since liftoff.
    pub fn can_use_coyote(&self, stats: &MovementStats) -> bool {
        self.coyote_usable && !self.grounded && self.time < self.time_left_grounded + stats.coyote_time
    }

    pub fn snapshot(&self, movement_input: Vec2) -> MovementSnapshot {
        MovementSnapshot {
            movement_input,
            velocity: self.velocity,
            grounded: self.grounded,
            ended_jump_early: self.ended_jump_early,
        }
    }
}

/// What observers may read about a controller without touching its state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementSnapshot {
    pub movement_input: Vec2,
    pub velocity: Vec2,
    pub grounded: bool,
    pub ended_jump_early: bool,
}
