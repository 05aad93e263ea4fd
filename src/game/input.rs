use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use super::components::PlayerControlled;
use crate::config::tuning::Tuning;

/// 2D move direction. Fires every frame while held and completes on release.
#[derive(InputAction)]
#[action_output(Vec2)]
pub struct Move;

/// Radial dead zone for the move action. Keyboard diagonals come out at unit length.
pub fn move_dead_zone(tuning: &Tuning) -> DeadZone {
    DeadZone {
        lower_threshold: tuning.stick_deadzone_min,
        upper_threshold: tuning.stick_deadzone_max,
        ..Default::default()
    }
}

/// Give every controlled player its move action and bindings.
pub fn inject_bindings(
    trigger: On<Insert, PlayerControlled>,
    tuning: Res<Tuning>,
    mut commands: Commands,
) {
    commands.entity(trigger.entity).insert(actions!(PlayerControlled[
        (
            Action::<Move>::new(),
            move_dead_zone(&tuning),
            Bindings::spawn((
                Cardinal::wasd_keys(),
                Cardinal::arrows(),
                Axial::left_stick(),
            )),
        ),
    ]));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, EnhancedInputPlugin))
            .add_input_context::<PlayerControlled>()
            .insert_resource(Tuning::default())
            .insert_resource(ButtonInput::<KeyCode>::default())
            .add_observer(inject_bindings);
        app.finish();
        app
    }

    fn move_action(app: &mut App) -> (Vec2, ActionEvents) {
        let mut query = app
            .world_mut()
            .query::<(&Action<Move>, &ActionEvents)>();
        let (action, events) = query.single(app.world()).unwrap();
        (**action, *events)
    }

    fn press(app: &mut App, key: KeyCode) {
        app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
    }

    fn release(app: &mut App, key: KeyCode) {
        app.world_mut().resource_mut::<ButtonInput<KeyCode>>().release(key);
    }

    #[test]
    fn dead_zone_follows_tuning() {
        let dz = move_dead_zone(&Tuning {
            stick_deadzone_min: 0.3,
            stick_deadzone_max: 0.8,
            ..Default::default()
        });
        assert_eq!(dz.lower_threshold, 0.3);
        assert_eq!(dz.upper_threshold, 0.8);
        assert!(matches!(dz.kind, DeadZoneKind::Radial));
    }

    #[test]
    fn key_press_starts_and_release_completes() {
        let mut app = input_app();
        app.world_mut().spawn(PlayerControlled);
        app.update();

        press(&mut app, KeyCode::KeyD);
        app.update();
        let (value, events) = move_action(&mut app);
        assert_eq!(value, Vec2::X);
        assert!(events.contains(ActionEvents::START | ActionEvents::FIRE));

        // Held: keeps firing, no new start.
        app.update();
        let (value, events) = move_action(&mut app);
        assert_eq!(value, Vec2::X);
        assert_eq!(events, ActionEvents::FIRE);

        release(&mut app, KeyCode::KeyD);
        app.update();
        let (value, events) = move_action(&mut app);
        assert_eq!(value, Vec2::ZERO);
        assert_eq!(events, ActionEvents::COMPLETE);
    }

    #[test]
    fn keyboard_diagonal_is_unit_length() {
        let mut app = input_app();
        app.world_mut().spawn(PlayerControlled);
        app.update();

        press(&mut app, KeyCode::KeyW);
        press(&mut app, KeyCode::ArrowRight);
        app.update();

        let (value, _) = move_action(&mut app);
        assert!((value.length() - 1.0).abs() < 1e-5);
        assert!(value.x > 0.0 && value.y > 0.0);
    }
}
