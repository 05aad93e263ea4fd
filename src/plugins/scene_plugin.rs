use bevy::camera::ScalingMode;
use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use crate::config::tuning::Tuning;
use crate::game::{
    animator::Animator,
    components::*,
    input::{self, Move},
    locomotion::{self, Locomotion},
};

const IDLE_COLOR: Color = Color::srgb(0.2, 0.6, 1.0);
const WALK_COLOR: Color = Color::srgb(0.3, 0.9, 0.5);

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene);
        add_runtime_systems(app);
    }
}

fn add_runtime_systems(app: &mut App) {
    app.add_systems(
        Update,
        (
            sync_player_visuals.after(locomotion::update_locomotion),
            tuning_reload_input,
            apply_tuning.run_if(resource_changed::<Tuning>),
        )
            .chain(),
    );
}

/// Material handle of the player body, recoloured on walk/idle.
#[derive(Component)]
struct BodyMaterial(Handle<ColorMaterial>);

fn setup_scene(
    mut commands: Commands,
    tuning: Res<Tuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let ppu = tuning.pixels_per_unit.max(1.0);

    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::WindowSize,
            // 1 world unit = ppu pixels
            scale: 1.0 / ppu,
            ..OrthographicProjection::default_2d()
        }),
    ));

    let body_mesh = meshes.add(Circle::new(tuning.player_radius));
    let body_material = materials.add(IDLE_COLOR);

    let indicator_len = tuning.indicator_len_px / ppu;
    let indicator_thick = tuning.indicator_thickness_px / ppu;
    let indicator_mesh = meshes.add(Rectangle::new(indicator_len, indicator_thick));

    // The animator sits on the indicator child so the descendant lookup is used.
    commands
        .spawn((
            Name::new("Player"),
            PlayerControlled,
            PlayerMovement::new(tuning.move_speed),
            Velocity::default(),
            Mesh2d(body_mesh),
            MeshMaterial2d(body_material.clone()),
            BodyMaterial(body_material),
            Transform::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                FacingIndicator,
                Animator::player_locomotion(),
                Locomotion::default(),
                Mesh2d(indicator_mesh),
                MeshMaterial2d(materials.add(Color::srgb(0.9, 0.9, 1.0))),
                Transform::default(),
            ));
        });

    info!("Player spawned (move_speed={:.2})", tuning.move_speed);
}

/// Point the indicator along the facing direction and tint the body by walk state.
fn sync_player_visuals(
    tuning: Res<Tuning>,
    mut indicators: Query<
        (&Locomotion, &ChildOf, &mut Transform),
        (With<FacingIndicator>, Changed<Locomotion>),
    >,
    bodies: Query<&BodyMaterial>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let ppu = tuning.pixels_per_unit.max(1.0);
    let offset = tuning.player_radius + tuning.indicator_len_px / ppu * 0.5;

    for (locomotion, child_of, mut tf) in &mut indicators {
        let angle = locomotion.facing.angle();
        tf.translation = Vec3::new(angle.cos() * offset, angle.sin() * offset, 0.5);
        tf.rotation = Quat::from_rotation_z(angle);

        let Ok(body) = bodies.get(child_of.parent()) else {
            continue;
        };
        if let Some(mut material) = materials.get_mut(&body.0) {
            material.color = if locomotion.walking { WALK_COLOR } else { IDLE_COLOR };
        }
    }
}

/// Reload tuning with F5.
fn tuning_reload_input(keyboard: Res<ButtonInput<KeyCode>>, mut tuning: ResMut<Tuning>) {
    if keyboard.just_pressed(KeyCode::F5) {
        tuning.reload();
    }
}

/// Push changed tuning into players, move dead zones and the fixed timestep.
fn apply_tuning(
    tuning: Res<Tuning>,
    mut players: Query<&mut PlayerMovement, With<PlayerControlled>>,
    mut dead_zones: Query<&mut DeadZone, With<Action<Move>>>,
    fixed: Option<ResMut<Time<Fixed>>>,
) {
    for mut movement in &mut players {
        movement.move_speed = tuning.move_speed;
    }
    for mut dead_zone in &mut dead_zones {
        *dead_zone = input::move_dead_zone(&tuning);
    }
    if let Some(mut fixed) = fixed {
        fixed.set_timestep_seconds(tuning.dt as f64);
    }
}
