//! Movement domain: fixed-step pipeline driver.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::systems::collisions::AvianProbe;
use crate::movement::{
    ActorBody, ActorCapsule, GroundedChangedEvent, JumpedEvent, MovementCore, MovementStats, Player,
};

impl ActorBody for LinearVelocity {
    fn velocity(&self) -> Vec2 {
        self.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.0 = velocity;
    }
}

pub(crate) fn step_controllers(
    time: Res<Time>,
    stats: Option<Res<MovementStats>>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &Transform,
            &ActorCapsule,
            &mut MovementCore,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
    mut grounded_events: MessageWriter<GroundedChangedEvent>,
    mut jumped_events: MessageWriter<JumpedEvent>,
) -> Result {
    let Some(stats) = stats else {
        return Err("MovementStats resource is missing; movement cannot step".into());
    };

    let dt = time.delta_secs();

    for (entity, transform, capsule, mut core, mut velocity) in &mut query {
        let mut probe = AvianProbe::new(
            &spatial_query,
            entity,
            transform.translation.truncate(),
            capsule,
        );

        let outcome = core.step(&stats, dt, &mut probe, &mut *velocity);

        if let Some(change) = outcome.grounded_changed {
            grounded_events.write(GroundedChangedEvent {
                entity,
                grounded: change.grounded,
                impact_speed: change.impact_speed,
            });
        }
        if outcome.jumped {
            jumped_events.write(JumpedEvent { entity });
        }
    }

    Ok(())
}
