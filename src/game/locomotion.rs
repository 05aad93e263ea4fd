use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, PI};

use super::animator::{Animator, INPUT_X, INPUT_Y, IS_WALKING, LAST_INPUT_X, LAST_INPUT_Y};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    /// Dominant axis of `v`; ties go to horizontal. `None` for a zero vector.
    pub fn from_vector(v: Vec2) -> Option<Self> {
        if v == Vec2::ZERO {
            return None;
        }
        Some(if v.x.abs() >= v.y.abs() {
            if v.x > 0.0 { Facing::Right } else { Facing::Left }
        } else if v.y > 0.0 {
            Facing::Up
        } else {
            Facing::Down
        })
    }

    /// Rotation around Z that points +X in this direction.
    pub fn angle(self) -> f32 {
        match self {
            Facing::Right => 0.0,
            Facing::Up => FRAC_PI_2,
            Facing::Left => PI,
            Facing::Down => -FRAC_PI_2,
        }
    }
}

/// Walk/idle state and facing, read back from an `Animator`'s parameters.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Locomotion {
    pub walking: bool,
    pub facing: Facing,
}

impl Locomotion {
    /// Recompute from animator parameters. Facing follows the live input while
    /// walking and the last input while idle; a zero vector keeps the old facing.
    pub fn refresh(&mut self, animator: &Animator) {
        let walking = animator.get_bool(IS_WALKING).unwrap_or(false);
        let (x, y) = if walking { (INPUT_X, INPUT_Y) } else { (LAST_INPUT_X, LAST_INPUT_Y) };
        let dir = Vec2::new(
            animator.get_float(x).unwrap_or(0.0),
            animator.get_float(y).unwrap_or(0.0),
        );
        self.walking = walking;
        if let Some(facing) = Facing::from_vector(dir) {
            self.facing = facing;
        }
    }
}

pub fn update_locomotion(mut query: Query<(&Animator, &mut Locomotion), Changed<Animator>>) {
    for (animator, mut locomotion) in &mut query {
        let before = *locomotion;
        locomotion.refresh(animator);
        if *locomotion != before {
            debug!(
                "[Locomotion] walking={} facing={:?}",
                locomotion.walking, locomotion.facing
            );
        }
    }
}
