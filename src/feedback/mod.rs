//! Feedback domain: observer layer driven by movement events.
//!
//! Subscribes to a controller's grounded/jump channels and mirrors its input
//! vector into cue state. Visual application is limited to flipping and
//! tilting the actor's sprite child.

mod cues;


pub use cues::{FeedbackCues, FeedbackSettings};

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::{Arc, Mutex};

use crate::movement::{GroundedChanged, MovementCore, Player, PlayerVisual, SubscriptionId};

/// One notification received from a controller, in emission order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedbackSignal {
    Grounded(GroundedChanged),
    Jumped,
}

/// Live subscription of a feedback layer to one controller.
#[derive(Component, Debug)]
pub struct FeedbackLink {
    inbox: Arc<Mutex<Vec<FeedbackSignal>>>,
    grounded_subscription: SubscriptionId,
    jumped_subscription: SubscriptionId,
}

impl FeedbackLink {
    pub fn attach(core: &mut MovementCore) -> Self {
        let inbox = Arc::new(Mutex::new(Vec::new()));

        let grounded_inbox = Arc::clone(&inbox);
        let grounded_subscription = core.subscribe_grounded_changed(move |change| {
            if let Ok(mut queue) = grounded_inbox.lock() {
                queue.push(FeedbackSignal::Grounded(*change));
            }
        });

        let jumped_inbox = Arc::clone(&inbox);
        let jumped_subscription = core.subscribe_jumped(move |_| {
            if let Ok(mut queue) = jumped_inbox.lock() {
                queue.push(FeedbackSignal::Jumped);
            }
        });

        Self {
            inbox,
            grounded_subscription,
            jumped_subscription,
        }
    }

    pub fn detach(&self, core: &mut MovementCore) {
        core.unsubscribe_grounded_changed(self.grounded_subscription);
        core.unsubscribe_jumped(self.jumped_subscription);
    }

    /// Take every signal received since the last drain.
    pub fn drain(&self) -> Vec<FeedbackSignal> {
        self.inbox
            .lock()
            .map(|mut queue| std::mem::take(&mut *queue))
            .unwrap_or_default()
    }
}

#[derive(Resource)]
struct FeedbackRuntime {
    rng: ChaCha8Rng,
    warned_empty_footsteps: bool,
}

pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        let settings = app
            .world()
            .get_resource::<FeedbackSettings>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(FeedbackRuntime {
            rng: ChaCha8Rng::seed_from_u64(settings.rng_seed),
            warned_empty_footsteps: false,
        })
        .insert_resource(settings)
        .add_systems(
            Update,
            (sync_feedback_links, update_feedback, apply_visuals).chain(),
        );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, toggle_feedback_on_key);
    }
}

/// Attach or detach links so they match `FeedbackSettings::enabled`.
fn sync_feedback_links(
    mut commands: Commands,
    settings: Res<FeedbackSettings>,
    mut query: Query<(Entity, &mut MovementCore, Option<&FeedbackLink>), With<Player>>,
) {
    for (entity, mut core, link) in &mut query {
        match (settings.enabled, link) {
            (true, None) => {
                let link = FeedbackLink::attach(&mut core);
                let cues = FeedbackCues {
                    grounded: core.state().grounded,
                    ..default()
                };
                commands.entity(entity).insert((link, cues));
                debug!("Feedback attached to {entity}");
            }
            (false, Some(link)) => {
                link.detach(&mut core);
                commands.entity(entity).remove::<(FeedbackLink, FeedbackCues)>();
                debug!("Feedback detached from {entity}");
            }
            _ => {}
        }
    }
}

fn update_feedback(
    time: Res<Time>,
    settings: Res<FeedbackSettings>,
    mut runtime: ResMut<FeedbackRuntime>,
    mut query: Query<(&MovementCore, &FeedbackLink, &mut FeedbackCues)>,
) {
    let dt = time.delta_secs();
    let runtime = &mut *runtime;

    for (core, link, mut cues) in &mut query {
        cues.clear_triggers();

        for signal in link.drain() {
            match signal {
                FeedbackSignal::Grounded(change) => {
                    cues.on_grounded_changed(&settings, &change, &mut runtime.rng);
                    if !change.grounded {
                        continue;
                    }

                    match cues.footstep {
                        Some(index) => debug!(
                            "Landing: footstep={}, scale={:.2}",
                            settings.footsteps[index], cues.landing_scale
                        ),
                        None if !runtime.warned_empty_footsteps => {
                            warn!("No footstep clips configured; landing sounds skipped");
                            runtime.warned_empty_footsteps = true;
                        }
                        None => {}
                    }
                }
                FeedbackSignal::Jumped => cues.on_jumped(),
            }
        }

        cues.update(&settings, core.movement_input(), dt);
    }
}

fn apply_visuals(
    cues: Query<&FeedbackCues>,
    mut visuals: Query<(&ChildOf, &mut Sprite, &mut Transform), With<PlayerVisual>>,
) {
    for (child_of, mut sprite, mut transform) in &mut visuals {
        let Ok(cues) = cues.get(child_of.parent()) else {
            continue;
        };
        sprite.flip_x = cues.flip_x;
        transform.rotation = Quat::from_rotation_z(cues.tilt);
    }
}

#[cfg(feature = "dev-tools")]
fn toggle_feedback_on_key(keyboard: Res<ButtonInput<KeyCode>>, mut settings: ResMut<FeedbackSettings>) {
    if keyboard.just_pressed(KeyCode::F6) {
        settings.enabled = !settings.enabled;
        info!("Feedback enabled: {}", settings.enabled);
    }
}
