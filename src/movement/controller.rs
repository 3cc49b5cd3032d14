//! Movement domain: the fixed-step pipeline turning input into velocity.
//!
//! Each step runs collision probe, jump, horizontal, gravity, then commits the
//! resolved velocity to the body. The core never talks to the engine directly;
//! probes and the body come in through `CollisionProbe` and `ActorBody`.

use bevy::prelude::*;

use super::events::{EventChannel, GroundedChanged, Jumped, SubscriptionId};
use super::input::FrameInput;
use super::math::move_towards;
use super::probe::{CollisionProbe, probe_ground_and_ceiling};
use super::state::{MovementSnapshot, MovementState, NEVER};
use super::MovementStats;

/// The physics body whose velocity the pipeline reads and commits.
pub trait ActorBody {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
}

/// Events emitted during one fixed step. At most one of each per step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepOutcome {
    pub grounded_changed: Option<GroundedChanged>,
    pub jumped: bool,
}

#[derive(Component, Debug, Default)]
pub struct MovementCore {
    state: MovementState,
    frame_input: FrameInput,
    grounded_changed: EventChannel<GroundedChanged>,
    jumped: EventChannel<Jumped>,
}

impl MovementCore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MovementState {
        &self.state
    }

    /// Latest sampled movement axes, for observers that mirror intent.
    pub fn movement_input(&self) -> Vec2 {
        self.frame_input.movement
    }

    pub fn snapshot(&self) -> MovementSnapshot {
        self.state.snapshot(self.frame_input.movement)
    }

    pub fn subscribe_grounded_changed(
        &mut self,
        listener: impl FnMut(&GroundedChanged) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.grounded_changed.subscribe(listener)
    }

    pub fn unsubscribe_grounded_changed(&mut self, id: SubscriptionId) -> bool {
        self.grounded_changed.unsubscribe(id)
    }

    pub fn subscribe_jumped(
        &mut self,
        listener: impl FnMut(&Jumped) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.jumped.subscribe(listener)
    }

    pub fn unsubscribe_jumped(&mut self, id: SubscriptionId) -> bool {
        self.jumped.unsubscribe(id)
    }

    /// Advance the clock by one rendered frame.
    pub fn advance_clock(&mut self, dt: f32) {
        self.state.time += dt;
    }

    /// Store this frame's input and latch a fresh jump press for buffering.
    pub fn receive_input(&mut self, input: FrameInput) {
        self.frame_input = input;

        if input.jump_down {
            self.state.jump_to_consume = true;
            self.state.time_jump_was_pressed = self.state.time;
        }
    }

    /// Run one fixed step and commit the resolved velocity to `body`.
    pub fn step<P: CollisionProbe, B: ActorBody>(
        &mut self,
        stats: &MovementStats,
        dt: f32,
        probe: &mut P,
        body: &mut B,
    ) -> StepOutcome {
        let mut outcome = StepOutcome::default();

        self.check_collisions(stats, probe, &mut outcome);
        self.handle_jump(stats, body.velocity().y, &mut outcome);
        self.handle_direction(stats, dt);
        self.handle_gravity(stats, dt);

        body.set_velocity(self.state.velocity);
        outcome
    }

    fn check_collisions<P: CollisionProbe>(
        &mut self,
        stats: &MovementStats,
        probe: &mut P,
        outcome: &mut StepOutcome,
    ) {
        let hits = probe_ground_and_ceiling(probe, stats.grounder_distance, stats.probe_mask());
        let state = &mut self.state;

        if hits.ceiling {
            state.velocity.y = state.velocity.y.min(0.0);
        }

        if !state.grounded && hits.ground {
            state.grounded = true;
            state.coyote_usable = true;
            state.buffered_jump_usable = true;
            state.ended_jump_early = false;

            let event = GroundedChanged {
                grounded: true,
                impact_speed: state.velocity.y.abs(),
            };
            debug!("Landed: impact_speed={}", event.impact_speed);
            self.grounded_changed.emit(&event);
            outcome.grounded_changed = Some(event);
        } else if state.grounded && !hits.ground {
            state.grounded = false;
            state.time_left_grounded = state.time;

            let event = GroundedChanged {
                grounded: false,
                impact_speed: 0.0,
            };
            debug!("Left ground at t={}", state.time);
            self.grounded_changed.emit(&event);
            outcome.grounded_changed = Some(event);
        }
    }

    fn handle_jump(&mut self, stats: &MovementStats, body_velocity_y: f32, outcome: &mut StepOutcome) {
        let state = &mut self.state;

        if !state.ended_jump_early
            && !state.grounded
            && !self.frame_input.jump_held
            && body_velocity_y > 0.0
        {
            state.ended_jump_early = true;
        }

        if !state.jump_to_consume && !state.has_buffered_jump(stats) {
            return;
        }

        if state.grounded || state.can_use_coyote(stats) {
            self.execute_jump(stats);
            outcome.jumped = true;
        } else if self.state.jump_to_consume {
            debug!("Jump request dropped: airborne outside coyote window");
        }

        self.state.jump_to_consume = false;
    }

    fn execute_jump(&mut self, stats: &MovementStats) {
        let state = &mut self.state;
        state.ended_jump_early = false;
        state.time_jump_was_pressed = NEVER;
        state.buffered_jump_usable = false;
        state.coyote_usable = false;
        state.velocity.y = stats.jump_power;

        debug!("Jump executed: grounded={}", state.grounded);
        self.jumped.emit(&Jumped);
    }

    fn handle_direction(&mut self, stats: &MovementStats, dt: f32) {
        let input_x = self.frame_input.movement.x;
        let velocity = &mut self.state.velocity;

        if input_x == 0.0 {
            let deceleration = if self.state.grounded {
                stats.ground_deceleration
            } else {
                stats.air_deceleration
            };
            velocity.x = move_towards(velocity.x, 0.0, deceleration * dt);
        } else {
            velocity.x = move_towards(velocity.x, input_x * stats.max_speed, stats.acceleration * dt);
        }
    }

    fn handle_gravity(&mut self, stats: &MovementStats, dt: f32) {
        let state = &mut self.state;

        if state.grounded && state.velocity.y <= 0.0 {
            state.velocity.y = stats.grounding_force;
            return;
        }

        let mut gravity = stats.fall_acceleration;
        if state.ended_jump_early && state.velocity.y > 0.0 {
            gravity *= stats.jump_end_early_gravity_modifier;
        }

        state.velocity.y = move_towards(state.velocity.y, -stats.max_fall_speed, gravity * dt);
    }
}
