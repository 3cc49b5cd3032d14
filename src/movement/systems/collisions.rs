//! Movement domain: avian2d shape-cast probe for ground and ceiling detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ActorCapsule, CollisionProbe, ProbeDirection};

/// Sweeps an actor's capsule through the avian spatial query pipeline.
///
/// "Queries start in colliders" maps onto `ShapeCastConfig::ignore_origin_penetration`:
/// with start-inside queries disabled, colliders overlapping the cast origin are ignored.
pub(crate) struct AvianProbe<'q, 'w, 's> {
    spatial_query: &'q SpatialQuery<'w, 's>,
    entity: Entity,
    origin: Vec2,
    shape: Option<Collider>,
    ignore_origin_penetration: bool,
}

impl<'q, 'w, 's> AvianProbe<'q, 'w, 's> {
    pub(crate) fn new(
        spatial_query: &'q SpatialQuery<'w, 's>,
        entity: Entity,
        origin: Vec2,
        capsule: &ActorCapsule,
    ) -> Self {
        let shape = if capsule.is_degenerate() {
            debug!("Actor {entity} has a degenerate capsule; probes will report no hits");
            None
        } else {
            Some(capsule.collider())
        };

        Self {
            spatial_query,
            entity,
            origin,
            shape,
            ignore_origin_penetration: false,
        }
    }
}

impl CollisionProbe for AvianProbe<'_, '_, '_> {
    fn queries_start_in_colliders(&self) -> bool {
        !self.ignore_origin_penetration
    }

    fn set_queries_start_in_colliders(&mut self, enabled: bool) {
        self.ignore_origin_penetration = !enabled;
    }

    fn cast(&self, direction: ProbeDirection, distance: f32, layer_mask: u32) -> bool {
        let Some(shape) = &self.shape else {
            return false;
        };

        let direction = match direction {
            ProbeDirection::Down => Dir2::NEG_Y,
            ProbeDirection::Up => Dir2::Y,
        };

        let config = ShapeCastConfig {
            ignore_origin_penetration: self.ignore_origin_penetration,
            ..ShapeCastConfig::from_max_distance(distance)
        };
        let filter =
            SpatialQueryFilter::from_mask(LayerMask(layer_mask)).with_excluded_entities([self.entity]);

        self.spatial_query
            .cast_shape(shape, self.origin, 0.0, direction, &config, &filter)
            .is_some()
    }
}
