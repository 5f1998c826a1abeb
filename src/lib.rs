//! Force-driven 2D platformer locomotion for bevy and avian2d.
//!
//! The engine-independent controller lives in [`movement::MovementController`];
//! [`movement::MovementPlugin`] runs it once per fixed tick for every
//! [`movement::Player`].

pub mod content;
pub mod movement;
