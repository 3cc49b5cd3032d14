//! Movement domain: player bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ActorCapsule, GameLayer, MovementCore, MovementStats, Player, PlayerVisual};

/// Spawn the player capsule. Gravity and friction are handled by the movement pipeline.
pub(crate) fn spawn_player(mut commands: Commands, stats: Res<MovementStats>) {
    let capsule = ActorCapsule::default();

    info!(
        "Spawning player: capsule r={} h={}, apex height={:.2}, time to apex={:.2}s",
        capsule.radius,
        capsule.height(),
        stats.jump_apex_height(),
        stats.time_to_apex()
    );

    commands
        .spawn((
            // Identity & Movement
            (Player, MovementCore::new(), capsule),
            Transform::from_xyz(0.0, 2.0, 0.0),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                capsule.collider(),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Default]),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                PlayerVisual,
                Sprite {
                    color: Color::srgb(0.9, 0.9, 0.9),
                    custom_size: Some(Vec2::new(capsule.radius * 2.0, capsule.height())),
                    ..default()
                },
                Transform::default(),
            ));
        });
}
