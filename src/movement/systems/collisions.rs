//! Movement domain: ground probing against the avian spatial query.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundProbe};

/// Circle overlap probe that only sees colliders on [`GameLayer::Walkable`].
pub(crate) struct WalkableProbe<'q, 'w, 's> {
    spatial_query: &'q SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'q, 'w, 's> WalkableProbe<'q, 'w, 's> {
    pub(crate) fn new(spatial_query: &'q SpatialQuery<'w, 's>) -> Self {
        Self {
            spatial_query,
            // Players, walls and sensors never count as ground
            filter: SpatialQueryFilter::from_mask(GameLayer::Walkable),
        }
    }
}

impl GroundProbe for WalkableProbe<'_, '_, '_> {
    fn overlaps_walkable(&self, center: Vec2, radius: f32) -> bool {
        let shape = Collider::circle(radius);
        !self
            .spatial_query
            .shape_intersections(&shape, center, 0.0, &self.filter)
            .is_empty()
    }
}
