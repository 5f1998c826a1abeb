//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Which velocity component the drive force compares the target speed
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DriveReference {
    /// Target horizontal speed minus *vertical* velocity. This is the
    /// tuned-for behaviour shipped with the default values.
    #[default]
    VerticalVelocity,
    /// Target horizontal speed minus horizontal velocity.
    HorizontalVelocity,
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub speed: f32,
    #[serde(alias = "jumping_power")]
    pub jump_power: f32,
    pub acceleration: f32,
    #[serde(alias = "decceleration")]
    pub deceleration: f32,
    /// Exponent applied to the raw force; below 1.0 flattens large corrections.
    pub velocity_power: f32,
    /// Cap on the per-step friction impulse while idle on the ground.
    pub friction_amount: f32,
    pub drive_reference: DriveReference,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 20.0,
            jump_power: 2.0,
            acceleration: 13.0,
            deceleration: 16.0,
            velocity_power: 0.96,
            friction_amount: 2.5,
            drive_reference: DriveReference::VerticalVelocity,
        }
    }
}

impl MovementTuning {
    /// Rate used for a given target speed: accelerating while a target is
    /// set, decelerating while idle.
    pub fn rate_for(&self, target_speed: f32) -> f32 {
        if target_speed.abs() > super::INPUT_DEAD_ZONE {
            self.acceleration
        } else {
            self.deceleration
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    /// Latched on press, cleared by the fixed step that consumes it.
    pub jump_requested: bool,
}

impl MovementInput {
    pub fn request_jump(&mut self) {
        self.jump_requested = true;
    }

    /// Returns whether a jump was pending and clears the latch.
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_requested)
    }
}
