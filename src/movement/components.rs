//! Movement domain: marker and shape components.

use avian2d::prelude::*;
use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

/// Marker for floor, platform and ceiling colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Visual child of an actor; tilted and flipped without touching the body.
#[derive(Component, Debug)]
pub struct PlayerVisual;

/// Capsule dimensions shared by the actor's collider and its probes.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ActorCapsule {
    pub radius: f32,
    /// Length of the straight segment between the two caps.
    pub length: f32,
}

impl Default for ActorCapsule {
    fn default() -> Self {
        Self {
            radius: 0.5,
            length: 0.9,
        }
    }
}

impl ActorCapsule {
    pub fn height(&self) -> f32 {
        self.length + 2.0 * self.radius
    }

    /// Zero-size or malformed capsules never hit anything.
    pub fn is_degenerate(&self) -> bool {
        !self.radius.is_finite() || !self.length.is_finite() || self.radius <= 0.0 || self.length < 0.0
    }

    pub fn collider(&self) -> Collider {
        Collider::capsule(self.radius, self.length)
    }
}
