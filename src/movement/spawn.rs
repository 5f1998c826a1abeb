//! Movement domain: player spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    CharacterVisual, FootAnchor, GameLayer, Ground, MotionState, Player, VisualRoot, Wall,
};

const PLAYER_SIZE: Vec2 = Vec2::new(0.5, 1.0);

/// Spawn a controllable player at `position` and return its entity.
///
/// The sprite lives on a child so facing flips never touch the collider.
pub fn spawn_player(commands: &mut Commands, position: Vec2) -> Entity {
    let visual = commands
        .spawn((
            VisualRoot,
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::default(),
        ))
        .id();

    let player = commands
        .spawn((
            // Identity & Movement
            (
                Player,
                MotionState::default(),
                FootAnchor(Vec2::new(0.0, -PLAYER_SIZE.y * 0.5)),
                CharacterVisual(visual),
            ),
            Transform::from_xyz(position.x, position.y, 0.0),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                // Unit mass, so an impulse of n changes velocity by n
                Mass(1.0),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Walkable, GameLayer::Wall]),
            ),
        ))
        .id();

    commands.entity(player).add_child(visual);
    info!("Spawned player at {}", position);

    player
}

fn spawn_block(
    commands: &mut Commands,
    marker: impl Bundle,
    layer: GameLayer,
    color: Color,
    size: Vec2,
    at: Vec2,
) {
    commands.spawn((
        marker,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(at.x, at.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(layer, [GameLayer::Player]),
    ));
}

/// Floor, two walls and a few platforms to move around in.
pub fn spawn_test_room(commands: &mut Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Ground
    spawn_block(
        commands,
        Ground,
        GameLayer::Walkable,
        ground_color,
        Vec2::new(32.0, 1.0),
        Vec2::new(0.0, -4.0),
    );

    // Side walls
    for x in [-16.5, 16.5] {
        spawn_block(
            commands,
            Wall,
            GameLayer::Wall,
            wall_color,
            Vec2::new(1.0, 20.0),
            Vec2::new(x, 5.5),
        );
    }

    // Platforms, left to right and rising
    for (size, at) in [
        (Vec2::new(6.0, 0.5), Vec2::new(-9.0, -1.5)),
        (Vec2::new(6.0, 0.5), Vec2::new(9.0, 0.5)),
        (Vec2::new(4.0, 0.5), Vec2::new(0.0, 2.5)),
    ] {
        spawn_block(commands, Ground, GameLayer::Walkable, platform_color, size, at);
    }
}
