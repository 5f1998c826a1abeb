use avian2d::prelude::*;
use bevy::prelude::*;

use platformer_locomotion::{content, movement};

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Locomotion Sandbox".to_string(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Time::<Fixed>::from_hz(50.0))
    .add_plugins((movement::MovementPlugin, content::ContentPlugin::default()))
    .add_systems(Startup, setup);

    #[cfg(feature = "dev-tools")]
    app.add_plugins(movement::MovementDebugPlugin);

    app.run();
}

fn setup(mut commands: Commands) {
    // World units are metres; zoom in so the room fills the window
    commands.spawn((Camera2d, Transform::from_scale(Vec3::splat(0.03))));

    movement::spawn_test_room(&mut commands);
    movement::spawn_player(&mut commands, Vec2::new(0.0, 0.0));
}
