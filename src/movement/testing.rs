//! Movement domain: scripted probe and body doubles for driving the pipeline in tests.

use std::cell::RefCell;

use bevy::prelude::*;

use super::controller::StepOutcome;
use super::input::FrameInput;
use super::{ActorBody, CollisionProbe, MovementCore, MovementStats, ProbeDirection};

/// Probe whose hits are set by the test. Records the query mode seen by each cast.
pub(crate) struct ScriptedProbe {
    pub ground: bool,
    pub ceiling: bool,
    pub start_in_colliders: bool,
    pub casts: RefCell<Vec<(ProbeDirection, bool)>>,
}

impl Default for ScriptedProbe {
    fn default() -> Self {
        Self {
            ground: false,
            ceiling: false,
            start_in_colliders: true,
            casts: RefCell::new(Vec::new()),
        }
    }
}

impl CollisionProbe for ScriptedProbe {
    fn queries_start_in_colliders(&self) -> bool {
        self.start_in_colliders
    }

    fn set_queries_start_in_colliders(&mut self, enabled: bool) {
        self.start_in_colliders = enabled;
    }

    fn cast(&self, direction: ProbeDirection, _distance: f32, _layer_mask: u32) -> bool {
        self.casts.borrow_mut().push((direction, self.start_in_colliders));
        match direction {
            ProbeDirection::Down => self.ground,
            ProbeDirection::Up => self.ceiling,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingBody {
    pub velocity: Vec2,
    pub commits: usize,
}

impl ActorBody for RecordingBody {
    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
        self.commits += 1;
    }
}

pub(crate) const DT: f32 = 0.02;

/// A controller plus its doubles, advanced one frame + one fixed step at a time.
pub(crate) struct Harness {
    pub core: MovementCore,
    pub stats: MovementStats,
    pub probe: ScriptedProbe,
    pub body: RecordingBody,
}

impl Harness {
    pub(crate) fn new() -> Self {
        Self {
            core: MovementCore::new(),
            stats: MovementStats::default(),
            probe: ScriptedProbe::default(),
            body: RecordingBody::default(),
        }
    }

    /// A harness that has already landed on the ground.
    pub(crate) fn grounded() -> Self {
        let mut harness = Self::new();
        harness.probe.ground = true;
        harness.step();
        harness
    }

    pub(crate) fn step(&mut self) -> StepOutcome {
        self.core.step(&self.stats, DT, &mut self.probe, &mut self.body)
    }

    /// Advance the clock one frame, feed `input`, then run one fixed step.
    pub(crate) fn tick(&mut self, input: FrameInput) -> StepOutcome {
        self.core.advance_clock(DT);
        self.core.receive_input(input);
        self.step()
    }

    pub(crate) fn press_jump(&mut self) {
        self.core.receive_input(jump_press());
    }
}

pub(crate) fn jump_press() -> FrameInput {
    FrameInput {
        movement: Vec2::ZERO,
        jump_down: true,
        jump_held: true,
    }
}

pub(crate) fn held(movement: Vec2, jump_held: bool) -> FrameInput {
    FrameInput {
        movement,
        jump_down: false,
        jump_held,
    }
}
