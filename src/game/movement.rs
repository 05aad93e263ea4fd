use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use super::animator::{
    Animator, ParamError, INPUT_X, INPUT_Y, IS_WALKING, LAST_INPUT_X, LAST_INPUT_Y,
};
use super::components::*;
use super::input::Move;
use super::intent::MoveInput;

/// Fill in unassigned body/animator references once, when `PlayerMovement` is added.
pub fn resolve_movement_refs(
    mut added: Query<(Entity, &mut PlayerMovement, Option<&Name>), Added<PlayerMovement>>,
    bodies: Query<(), With<Velocity>>,
    animators: Query<(), With<Animator>>,
    children: Query<&Children>,
) {
    for (entity, mut movement, name) in &mut added {
        let label = name.map_or_else(|| entity.to_string(), |n| n.as_str().to_owned());

        if movement.body.is_none() {
            if bodies.contains(entity) {
                movement.body = Some(entity);
            } else {
                warn!("Velocity not assigned and not found on '{label}'. Assign one when spawning.");
            }
        }

        if movement.animator.is_none() {
            movement.animator = if animators.contains(entity) {
                Some(entity)
            } else {
                children
                    .iter_descendants(entity)
                    .find(|child| animators.contains(*child))
            };
            if movement.animator.is_none() {
                warn!("Animator not assigned and not found on '{label}'. Assign one when spawning.");
            }
        }
    }
}

/// Write a move callback into the animator parameters.
///
/// `previous` is the input stored before this callback; on the cancel edge it
/// becomes the last-input direction. Every write is attempted and every
/// failure is returned.
pub fn write_move_params(
    animator: &mut Animator,
    previous: Vec2,
    value: Vec2,
    canceled: bool,
) -> Vec<ParamError> {
    let mut writes = vec![animator.set_bool(IS_WALKING, true)];

    if canceled {
        writes.push(animator.set_bool(IS_WALKING, false));
        writes.push(animator.set_float(LAST_INPUT_X, previous.x));
        writes.push(animator.set_float(LAST_INPUT_Y, previous.y));
    }

    writes.push(animator.set_float(INPUT_X, value.x));
    writes.push(animator.set_float(INPUT_Y, value.y));
    writes.into_iter().filter_map(Result::err).collect()
}

fn apply_move_callback(
    player: Entity,
    value: Vec2,
    canceled: bool,
    players: &mut Query<(&PlayerMovement, &mut MoveInput)>,
    animators: &mut Query<&mut Animator>,
) {
    let Ok((movement, mut input)) = players.get_mut(player) else {
        return;
    };

    if let Some(animator_entity) = movement.animator {
        if let Ok(mut animator) = animators.get_mut(animator_entity) {
            for e in write_move_params(&mut animator, input.0, value, canceled) {
                warn!("[PlayerMovement] {player}: {e}");
            }
        }
    }

    input.0 = value;
}

pub fn handle_move_start(
    trigger: On<Start<Move>>,
    mut players: Query<(&PlayerMovement, &mut MoveInput)>,
    mut animators: Query<&mut Animator>,
) {
    debug!("[Move] {} started ({:.2}, {:.2})", trigger.context, trigger.value.x, trigger.value.y);
    apply_move_callback(trigger.context, trigger.value, false, &mut players, &mut animators);
}

pub fn handle_move_fire(
    trigger: On<Fire<Move>>,
    mut players: Query<(&PlayerMovement, &mut MoveInput)>,
    mut animators: Query<&mut Animator>,
) {
    apply_move_callback(trigger.context, trigger.value, false, &mut players, &mut animators);
}

/// Cancel edge: the action went back to rest.
pub fn handle_move_complete(
    trigger: On<Complete<Move>>,
    mut players: Query<(&PlayerMovement, &mut MoveInput)>,
    mut animators: Query<&mut Animator>,
) {
    debug!("[Move] {} completed", trigger.context);
    apply_move_callback(trigger.context, trigger.value, true, &mut players, &mut animators);
}

/// Set each player's body velocity to input × speed.
pub fn apply_move_velocity(
    players: Query<(&PlayerMovement, &MoveInput)>,
    mut bodies: Query<&mut Velocity>,
) {
    for (movement, input) in &players {
        let Some(body) = movement.body else {
            continue;
        };
        if let Ok(mut vel) = bodies.get_mut(body) {
            vel.0 = input.0 * movement.move_speed;
        }
    }
}
