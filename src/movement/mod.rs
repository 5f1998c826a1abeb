//! Movement domain: tight platformer locomotion driven by forces.

use bevy::app::{RunFixedMainLoop, RunFixedMainLoopSystems};
use bevy::prelude::*;

mod components;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod resources;
mod spawn;
mod systems;


pub use components::*;
pub use controller::*;
#[cfg(feature = "dev-tools")]
pub use dev::MovementDebugPlugin;
pub use resources::*;
pub use spawn::{spawn_player, spawn_test_room};

/// Radius of the circle probed at the foot anchor.
pub const GROUND_PROBE_RADIUS: f32 = 0.2;

/// Axis magnitudes below this count as no input.
pub const INPUT_DEAD_ZONE: f32 = 0.01;

/// Fixed-step locomotion. Host systems that mutate player velocity can order
/// themselves against this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocomotionSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            // Sampled every frame ahead of the fixed loop, so this frame's
            // input reaches this frame's physics ticks
            .add_systems(
                RunFixedMainLoop,
                systems::read_input.in_set(RunFixedMainLoopSystems::BeforeFixedMainLoop),
            )
            .add_systems(
                FixedUpdate,
                systems::drive_locomotion.in_set(LocomotionSet),
            );
    }
}
