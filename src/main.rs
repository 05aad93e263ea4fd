mod config;
mod game;
mod plugins;

use bevy::prelude::*;
use bevy_enhanced_input::EnhancedInputPlugin;

use config::tuning::Tuning;
use plugins::{movement_plugin::MovementPlugin, scene_plugin::ScenePlugin, ui_plugin::UiPlugin};

fn main() {
    let tuning = Tuning::load_or_default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Top Down Mover".into(),
                resolution: (960u32, 640u32).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(Time::<Fixed>::from_seconds(tuning.dt as f64))
        .insert_resource(tuning)
        .add_plugins(EnhancedInputPlugin)
        .add_plugins(MovementPlugin)
        .add_plugins(ScenePlugin)
        .add_plugins(UiPlugin)
        .run();
}
