use bevy::prelude::*;

use super::intent::MoveInput;

// ── Marker components ───────────────────────────────────────────────

#[derive(Component)]
pub struct PlayerControlled;

/// Marker for the child that points in the player's facing direction.
#[derive(Component)]
pub struct FacingIndicator;

// ── Body runtime state ──────────────────────────────────────────────

/// Linear velocity of a body, in world units per second.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Velocity(pub Vec2);

// ── Player movement ─────────────────────────────────────────────────

/// Drives a body's velocity and an animator's parameters from move input.
///
/// `body` and `animator` may be assigned at spawn time. Any left as `None`
/// are looked up once when the component is added: the body on the entity
/// itself, the animator on the entity or its descendants.
#[derive(Component, Debug, Clone)]
#[require(MoveInput)]
pub struct PlayerMovement {
    pub move_speed: f32,
    pub body: Option<Entity>,
    pub animator: Option<Entity>,
}

impl PlayerMovement {
    pub fn new(move_speed: f32) -> Self {
        Self {
            move_speed,
            body: None,
            animator: None,
        }
    }
}

impl Default for PlayerMovement {
    fn default() -> Self {
        Self::new(5.0)
    }
}
