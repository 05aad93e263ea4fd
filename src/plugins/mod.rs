pub mod movement_plugin;
pub mod scene_plugin;
pub mod ui_plugin;
