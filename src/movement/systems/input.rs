//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{InputSampler, MovementCore, MovementStats, Player, RawInput};

pub(crate) fn read_input(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    stats: Option<Res<MovementStats>>,
    mut query: Query<&mut MovementCore, With<Player>>,
) -> Result {
    let Some(stats) = stats else {
        return Err("MovementStats resource is missing; movement cannot sample input".into());
    };

    let raw = gather_raw_input(&keyboard, gamepads.iter().next());
    let frame_input = InputSampler.sample(raw, &stats);
    let dt = time.delta_secs();

    for mut core in &mut query {
        core.advance_clock(dt);
        core.receive_input(frame_input);
    }

    Ok(())
}

/// Merge keyboard and the first gamepad. Non-zero keyboard axes win.
pub(crate) fn gather_raw_input(keyboard: &ButtonInput<KeyCode>, gamepad: Option<&Gamepad>) -> RawInput {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    let mut jump_just_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyC);
    let mut jump_held = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyC);

    if let Some(gamepad) = gamepad {
        if x == 0.0 {
            x = gamepad.get(GamepadAxis::LeftStickX).unwrap_or(0.0);
        }
        if y == 0.0 {
            y = gamepad.get(GamepadAxis::LeftStickY).unwrap_or(0.0);
        }
        jump_just_pressed |= gamepad.just_pressed(GamepadButton::South);
        jump_held |= gamepad.pressed(GamepadButton::South);
    }

    RawInput {
        axis: Vec2::new(x, y),
        jump_just_pressed,
        jump_held,
    }
}
