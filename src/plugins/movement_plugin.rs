use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use crate::game::{components::PlayerControlled, input, locomotion, movement, physics};

// ── SystemSets (strict FixedUpdate ordering) ────────────────────────

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FixedMoveSet {
    ApplyInput,
    Integrate,
}

/// Needs `EnhancedInputPlugin` to be added first.
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_input_context::<PlayerControlled>()
            .add_observer(input::inject_bindings)
            .add_observer(movement::handle_move_start)
            .add_observer(movement::handle_move_fire)
            .add_observer(movement::handle_move_complete);

        app.configure_sets(
            FixedUpdate,
            (FixedMoveSet::ApplyInput, FixedMoveSet::Integrate).chain(),
        );

        // Velocity is set from the stored input at the start of every tick
        app.add_systems(
            FixedUpdate,
            movement::apply_move_velocity.in_set(FixedMoveSet::ApplyInput),
        );
        app.add_systems(
            FixedUpdate,
            physics::integrate_bodies.in_set(FixedMoveSet::Integrate),
        );

        // References must be resolved before the first move callback fires
        app.add_systems(
            PreUpdate,
            movement::resolve_movement_refs.before(EnhancedInputSystems::Update),
        );
        app.add_systems(Update, locomotion::update_locomotion);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    use crate::config::tuning::Tuning;
    use crate::game::{
        animator::{Animator, IS_WALKING, LAST_INPUT_X},
        components::*,
        locomotion::{Facing, Locomotion},
    };

    #[test]
    fn key_press_moves_player_on_fixed_tick() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, EnhancedInputPlugin))
            // Fixed ticks are run by hand below.
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO))
            .insert_resource(Tuning {
                dt: 0.1,
                ..Default::default()
            })
            .insert_resource(ButtonInput::<KeyCode>::default())
            .add_plugins(MovementPlugin);
        app.finish();

        let player = app
            .world_mut()
            .spawn((
                PlayerControlled,
                PlayerMovement::new(4.0),
                Velocity::default(),
                Transform::default(),
                children![(Animator::player_locomotion(), Locomotion::default())],
            ))
            .id();
        let animator = app.world().get::<Children>(player).unwrap()[0];
        app.update();

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::ArrowLeft);
        app.update();
        app.world_mut().run_schedule(FixedUpdate);

        assert_eq!(app.world().get::<Velocity>(player), Some(&Velocity(Vec2::new(-4.0, 0.0))));
        let tf = app.world().get::<Transform>(player).unwrap();
        assert!((tf.translation.x + 0.4).abs() < 1e-6);
        assert_eq!(
            app.world().get::<Locomotion>(animator),
            Some(&Locomotion {
                walking: true,
                facing: Facing::Left
            })
        );

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(KeyCode::ArrowLeft);
        app.update();
        app.world_mut().run_schedule(FixedUpdate);

        assert_eq!(app.world().get::<Velocity>(player), Some(&Velocity(Vec2::ZERO)));
        let params = app.world().get::<Animator>(animator).unwrap();
        assert_eq!(params.get_bool(IS_WALKING), Ok(false));
        assert_eq!(params.get_float(LAST_INPUT_X), Ok(-1.0));
        assert_eq!(
            app.world().get::<Locomotion>(animator),
            Some(&Locomotion {
                walking: false,
                facing: Facing::Left
            })
        );
    }
}
