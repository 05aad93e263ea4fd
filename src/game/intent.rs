use bevy::prelude::*;

/// Last direction read from the move action: written in Update, consumed in FixedUpdate.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveInput(pub Vec2);
