//! Core domain: camera and simulation clock setup.

use bevy::prelude::*;

/// Rate of the fixed simulation step the movement pipeline runs on.
#[derive(Resource, Debug, Clone)]
pub struct SimulationConfig {
    pub fixed_hz: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { fixed_hz: 50.0 }
    }
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<SimulationConfig>()
            .cloned()
            .unwrap_or_default();

        info!("Fixed simulation step at {} Hz", config.fixed_hz);

        app.insert_resource(Time::<Fixed>::from_hz(config.fixed_hz))
            .insert_resource(config)
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Transform::from_scale(Vec3::splat(0.05))));
}
