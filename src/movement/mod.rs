//! Movement domain: plugin wiring and public exports.

mod bootstrap;
mod components;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod input;
pub mod math;
mod probe;
mod resources;
mod state;
mod systems;

#[cfg(test)]
pub(crate) mod testing;

pub use components::{ActorCapsule, Ground, Player, PlayerVisual};
pub use controller::{ActorBody, MovementCore};
pub use events::{GroundedChanged, GroundedChangedEvent, JumpedEvent, SubscriptionId};
pub use input::{InputSampler, RawInput};
pub use probe::{CollisionProbe, ProbeDirection};
pub use resources::{GameLayer, MovementStats};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{read_input, step_controllers};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<GroundedChangedEvent>()
            .add_message::<JumpedEvent>()
            .add_systems(Startup, spawn_player)
            .add_systems(Update, read_input)
            .add_systems(FixedUpdate, step_controllers);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room);
    }
}
