//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Surfaces the ground probe treats as standable (floors, platforms)
    Walkable,
    /// Vertical surfaces that block movement but never ground the player
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Per-character locomotion state that survives between fixed steps.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionState {
    /// Last horizontal axis received. Not clamped or renormalized.
    pub horizontal_input: f32,
    pub facing: Facing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn is_right(self) -> bool {
        self == Facing::Right
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    /// True when `axis` points strictly away from this facing.
    pub fn should_flip(self, axis: f32) -> bool {
        match self {
            Facing::Right => axis < 0.0,
            Facing::Left => axis > 0.0,
        }
    }
}

/// Offset from the body origin to the point the ground probe is centred on.
#[derive(Component, Debug, Clone, Copy)]
pub struct FootAnchor(pub Vec2);

/// Points at the child entity that carries the sprite, so flips mirror the
/// visual without scaling the collider.
#[derive(Component, Debug, Clone, Copy)]
pub struct CharacterVisual(pub Entity);

/// Marker for the sprite child of a character
#[derive(Component, Debug)]
pub struct VisualRoot;

/// Marker for walkable colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
