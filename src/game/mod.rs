pub mod animator;
pub mod components;
pub mod input;
pub mod intent;
pub mod locomotion;
pub mod movement;
pub mod physics;
