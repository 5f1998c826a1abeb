//! Movement domain: engine-independent force resolution for a platformer body.
//!
//! [`MovementController`] turns the latest input into forces on a body it
//! does not own. The host hands it a [`CharacterBody`] and a [`GroundProbe`]
//! at construction and calls [`MovementController::step`] once per fixed
//! physics tick, after the input methods for that frame have run.

use bevy::prelude::*;

use crate::movement::{
    DriveReference, GROUND_PROBE_RADIUS, INPUT_DEAD_ZONE, MotionState, MovementTuning,
};

/// How a force is handed to the physics engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceMode {
    /// Integrated over the physics step; depends on mass and timestep.
    Force,
    /// Changes velocity immediately.
    Impulse,
}

/// Transform and rigid-body access for the controlled character.
pub trait CharacterBody {
    fn position(&self) -> Vec2;

    fn local_scale(&self) -> Vec2;

    fn set_local_scale(&mut self, scale: Vec2);

    fn velocity(&self) -> Vec2;

    fn add_force(&mut self, force: Vec2, mode: ForceMode);

    /// World-space point the ground probe is centred on.
    fn feet_point(&self) -> Vec2;
}

/// World query deciding whether a circle touches walkable geometry.
pub trait GroundProbe {
    fn overlaps_walkable(&self, center: Vec2, radius: f32) -> bool;
}

impl<B: CharacterBody + ?Sized> CharacterBody for &mut B {
    fn position(&self) -> Vec2 {
        (**self).position()
    }

    fn local_scale(&self) -> Vec2 {
        (**self).local_scale()
    }

    fn set_local_scale(&mut self, scale: Vec2) {
        (**self).set_local_scale(scale);
    }

    fn velocity(&self) -> Vec2 {
        (**self).velocity()
    }

    fn add_force(&mut self, force: Vec2, mode: ForceMode) {
        (**self).add_force(force, mode);
    }

    fn feet_point(&self) -> Vec2 {
        (**self).feet_point()
    }
}

impl<F> GroundProbe for F
where
    F: Fn(Vec2, f32) -> bool,
{
    fn overlaps_walkable(&self, center: Vec2, radius: f32) -> bool {
        self(center, radius)
    }
}

/// Sign that maps exactly zero to zero, unlike [`f32::signum`].
fn sign(value: f32) -> f32 {
    if value == 0.0 { 0.0 } else { value.signum() }
}

/// Continuous horizontal force for one step.
///
/// Runs regardless of ground contact. The speed difference is measured
/// against the component selected by [`MovementTuning::drive_reference`].
pub fn drive_force(tuning: &MovementTuning, horizontal_input: f32, velocity: Vec2) -> f32 {
    let target_speed = horizontal_input * tuning.speed;
    let current = match tuning.drive_reference {
        DriveReference::VerticalVelocity => velocity.y,
        DriveReference::HorizontalVelocity => velocity.x,
    };
    let speed_difference = target_speed - current;

    let rate = tuning.rate_for(target_speed);
    let direction = sign(speed_difference);
    let force = speed_difference.abs() * rate;

    force.powf(tuning.velocity_power) * direction
}

/// Friction impulse magnitude along the leftward axis.
///
/// Zero unless grounded and the input is inside the dead zone. Never exceeds
/// the current horizontal speed, so one application cannot reverse motion.
pub fn friction_amount(
    tuning: &MovementTuning,
    horizontal_input: f32,
    velocity: Vec2,
    grounded: bool,
) -> f32 {
    if !grounded || horizontal_input.abs() >= INPUT_DEAD_ZONE {
        return 0.0;
    }

    velocity.x.abs().min(tuning.friction_amount.abs()) * sign(velocity.x)
}

/// Upward impulse for a grounded jump.
///
/// Falling speed is cancelled on top of the base power; existing upward
/// speed is left as is.
pub fn jump_impulse(tuning: &MovementTuning, vertical_velocity: f32) -> f32 {
    if vertical_velocity < 0.0 {
        tuning.jump_power - vertical_velocity
    } else {
        tuning.jump_power
    }
}

pub struct MovementController<B, P> {
    body: B,
    probe: P,
    tuning: MovementTuning,
    state: MotionState,
}

impl<B: CharacterBody, P: GroundProbe> MovementController<B, P> {
    pub fn new(body: B, probe: P, tuning: MovementTuning) -> Self {
        Self::resume(body, probe, tuning, MotionState::default())
    }

    /// Rebuild a controller around state carried over from an earlier step.
    pub fn resume(body: B, probe: P, tuning: MovementTuning, state: MotionState) -> Self {
        Self {
            body,
            probe,
            tuning,
            state,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.body.position()
    }

    pub fn is_grounded(&self) -> bool {
        self.probe
            .overlaps_walkable(self.body.feet_point(), GROUND_PROBE_RADIUS)
    }

    pub fn is_facing_right(&self) -> bool {
        self.state.facing.is_right()
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn into_parts(self) -> (B, P, MotionState) {
        (self.body, self.probe, self.state)
    }

    pub fn perform_move(&mut self, delta: Vec2) {
        self.state.horizontal_input = delta.x;

        if self.state.facing.should_flip(delta.x) {
            self.flip();
        }
    }

    /// Jumps if grounded right now. Airborne requests are dropped.
    pub fn perform_jump(&mut self) {
        if !self.is_grounded() {
            debug!("Jump dropped: airborne");
            return;
        }

        let impulse = jump_impulse(&self.tuning, self.body.velocity().y);
        debug!("Jump: impulse={}", impulse);
        self.apply_force(Vec2::Y, impulse, ForceMode::Impulse);
    }

    /// One fixed physics tick: drive force first, then friction.
    pub fn step(&mut self) {
        let input = self.state.horizontal_input;

        let drive = drive_force(&self.tuning, input, self.body.velocity());
        self.apply_force(Vec2::X, drive, ForceMode::Force);

        let friction = friction_amount(
            &self.tuning,
            input,
            self.body.velocity(),
            self.is_grounded(),
        );
        self.apply_force(Vec2::NEG_X, friction, ForceMode::Impulse);
    }

    pub fn apply_force(&mut self, direction: Vec2, magnitude: f32, mode: ForceMode) {
        if magnitude == 0.0 {
            return;
        }

        self.body.add_force(direction * magnitude, mode);
    }

    fn flip(&mut self) {
        self.state.facing = self.state.facing.flipped();

        let mut scale = self.body.local_scale();
        scale.x *= -1.0;
        self.body.set_local_scale(scale);

        debug!("Flipped: facing={:?}", self.state.facing);
    }
}
