//! Movement domain: grounded/jump notifications.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Ground contact changed. `impact_speed` is the vertical speed on landing, 0 on liftoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundedChanged {
    pub grounded: bool,
    pub impact_speed: f32,
}

/// A jump was executed (ground, coyote or buffered).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jumped;

/// Handle returned by `EventChannel::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn FnMut(&T) + Send + Sync>;

/// Callback list for one event type.
pub struct EventChannel<T> {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
}

impl<T> Default for EventChannel<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }
}

impl<T> std::fmt::Debug for EventChannel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventChannel")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<T> EventChannel<T> {
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn emit(&mut self, event: &T) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Message fired when an actor lands or leaves the ground
#[derive(Debug, Clone, Copy)]
pub struct GroundedChangedEvent {
    pub entity: Entity,
    pub grounded: bool,
    pub impact_speed: f32,
}

impl Message for GroundedChangedEvent {}

/// Message fired when an actor executes a jump
#[derive(Debug, Clone, Copy)]
pub struct JumpedEvent {
    pub entity: Entity,
}

impl Message for JumpedEvent {}
