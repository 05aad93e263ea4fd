use bevy::prelude::*;

use super::components::*;
use crate::config::tuning::Tuning;

/// Integrate velocity → position for every body.
pub fn integrate_bodies(tuning: Res<Tuning>, mut query: Query<(&mut Transform, &Velocity)>) {
    let dt = tuning.dt;
    for (mut transform, vel) in &mut query {
        transform.translation.x += vel.0.x * dt;
        transform.translation.y += vel.0.y * dt;
    }
}
