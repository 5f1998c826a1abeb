//! Movement domain: debug-only visualisation of the ground probe.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::systems::WalkableProbe;
use crate::movement::{FootAnchor, GROUND_PROBE_RADIUS, GroundProbe, Player};

/// Draws each player's ground probe, green while grounded and red while airborne.
pub struct MovementDebugPlugin;

impl Plugin for MovementDebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_ground_probe);
    }
}

fn draw_ground_probe(
    mut gizmos: Gizmos,
    spatial_query: SpatialQuery,
    players: Query<(&Transform, &FootAnchor), With<Player>>,
) {
    let probe = WalkableProbe::new(&spatial_query);

    for (transform, anchor) in &players {
        let center = transform.translation.truncate() + anchor.0;
        let color = if probe.overlaps_walkable(center, GROUND_PROBE_RADIUS) {
            Color::srgb(0.2, 0.9, 0.3)
        } else {
            Color::srgb(0.9, 0.2, 0.2)
        };

        gizmos.circle_2d(center, GROUND_PROBE_RADIUS, color);
    }
}
