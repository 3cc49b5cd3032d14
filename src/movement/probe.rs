//! Movement domain: collision probe seam and the scoped query-mode override.

use std::ops::Deref;

/// Vertical direction of a probe cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeDirection {
    Down,
    Up,
}

/// Shape sweep against the world, as the fixed step needs it.
pub trait CollisionProbe {
    /// Whether casts starting inside a collider report that collider.
    fn queries_start_in_colliders(&self) -> bool;

    fn set_queries_start_in_colliders(&mut self, enabled: bool);

    /// Sweep the actor's shape `distance` units in `direction`, hitting only `layer_mask`.
    fn cast(&self, direction: ProbeDirection, distance: f32, layer_mask: u32) -> bool;
}

/// Disables start-inside queries for its lifetime and restores the prior mode on drop.
pub struct QueryModeOverride<'a, P: CollisionProbe> {
    probe: &'a mut P,
    original: bool,
}

impl<'a, P: CollisionProbe> QueryModeOverride<'a, P> {
    pub fn new(probe: &'a mut P) -> Self {
        let original = probe.queries_start_in_colliders();
        probe.set_queries_start_in_colliders(false);
        Self { probe, original }
    }
}

impl<P: CollisionProbe> Deref for QueryModeOverride<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        &*self.probe
    }
}

impl<P: CollisionProbe> Drop for QueryModeOverride<'_, P> {
    fn drop(&mut self) {
        self.probe.set_queries_start_in_colliders(self.original);
    }
}

/// Ground and ceiling hits from one probe pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeHits {
    pub ground: bool,
    pub ceiling: bool,
}

/// Cast down then up with start-inside queries disabled for exactly those two casts.
pub fn probe_ground_and_ceiling<P: CollisionProbe>(
    probe: &mut P,
    distance: f32,
    layer_mask: u32,
) -> ProbeHits {
    let guard = QueryModeOverride::new(probe);
    ProbeHits {
        ground: guard.cast(ProbeDirection::Down, distance, layer_mask),
        ceiling: guard.cast(ProbeDirection::Up, distance, layer_mask),
    }
}
