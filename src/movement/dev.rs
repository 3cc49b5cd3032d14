//! Movement domain: debug-only test room for manual play.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground};

/// Floor, two ledges for coyote jumps, and a low ceiling to bonk against.
pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let ceiling_color = Color::srgb(0.3, 0.3, 0.4);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    let blocks = [
        // Floor
        (Vec2::new(0.0, -8.0), Vec2::new(60.0, 2.0), ground_color),
        // Left ledge
        (Vec2::new(-16.0, -2.0), Vec2::new(12.0, 1.0), platform_color),
        // Right ledge, higher
        (Vec2::new(16.0, 3.0), Vec2::new(12.0, 1.0), platform_color),
        // Low ceiling over the centre
        (Vec2::new(0.0, 6.0), Vec2::new(10.0, 1.0), ceiling_color),
    ];

    for (position, size, color) in blocks {
        commands.spawn((
            Ground,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }
}
