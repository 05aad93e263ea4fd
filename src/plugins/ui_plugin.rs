use bevy::prelude::*;

use crate::game::{
    animator::{Animator, INPUT_X, INPUT_Y, LAST_INPUT_X, LAST_INPUT_Y},
    components::*,
    locomotion::Locomotion,
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_ui);
        app.add_systems(Update, update_movement_display);
    }
}

#[derive(Component)]
struct MovementText;

fn setup_ui(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(6.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                MovementText,
                Text::new("vel: ---"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));

            parent.spawn((
                Text::new("WASD / arrows / left stick to move, F5 to reload tuning"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.2)),
            ));
        });
}

fn update_movement_display(
    player_q: Query<(&Velocity, &PlayerMovement), With<PlayerControlled>>,
    animator_q: Query<(&Animator, &Locomotion)>,
    mut text_query: Query<&mut Text, With<MovementText>>,
) {
    let Some((vel, movement)) = player_q.iter().next() else {
        return;
    };
    let params = movement.animator.and_then(|e| animator_q.get(e).ok());

    let line = match params {
        Some((animator, locomotion)) => {
            let f = |name: &str| animator.get_float(name).unwrap_or(0.0);
            format!(
                "vel: ({:.2}, {:.2})\n{} facing {:?}  input: ({:.2}, {:.2})  last: ({:.2}, {:.2})",
                vel.0.x,
                vel.0.y,
                if locomotion.walking { "walking" } else { "idle" },
                locomotion.facing,
                f(INPUT_X),
                f(INPUT_Y),
                f(LAST_INPUT_X),
                f(LAST_INPUT_Y),
            )
        }
        None => format!("vel: ({:.2}, {:.2})\nno animator", vel.0.x, vel.0.y),
    };

    for mut text in &mut text_query {
        **text = line.clone();
    }
}
