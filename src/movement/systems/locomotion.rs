//! Movement domain: fixed-step locomotion driving avian rigid bodies.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::collisions::WalkableProbe;
use crate::movement::{
    CharacterBody, CharacterVisual, FootAnchor, ForceMode, MotionState, MovementController,
    MovementInput, MovementTuning, Player, VisualRoot,
};

/// Snapshot of a player body for one fixed step.
///
/// Velocity is read once when the snapshot is taken and forces are queued
/// until the controller is done, so everything applied during a step lands
/// together before avian integrates it.
pub(crate) struct AvianBody<'a> {
    position: Vec2,
    velocity: Vec2,
    feet_point: Vec2,
    visual: Option<Mut<'a, Transform>>,
    pending: Vec<(Vec2, ForceMode)>,
}

impl CharacterBody for AvianBody<'_> {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn local_scale(&self) -> Vec2 {
        self.visual
            .as_ref()
            .map(|transform| transform.scale.truncate())
            .unwrap_or(Vec2::ONE)
    }

    fn set_local_scale(&mut self, scale: Vec2) {
        if let Some(transform) = self.visual.as_mut() {
            transform.scale.x = scale.x;
            transform.scale.y = scale.y;
        }
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn add_force(&mut self, force: Vec2, mode: ForceMode) {
        self.pending.push((force, mode));
    }

    fn feet_point(&self) -> Vec2 {
        self.feet_point
    }
}

pub(crate) fn drive_locomotion(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut input: ResMut<MovementInput>,
    mut players: Query<
        (
            &mut MotionState,
            &Transform,
            &FootAnchor,
            Option<&CharacterVisual>,
            Forces,
        ),
        With<Player>,
    >,
    mut visuals: Query<&mut Transform, (With<VisualRoot>, Without<Player>)>,
) {
    // Input for this frame is applied before the step, and a jump press is
    // consumed by exactly one fixed tick
    let jump = input.take_jump();
    let axis = input.axis;

    for (mut state, transform, anchor, visual, mut forces) in &mut players {
        let position = transform.translation.truncate();
        let visual = match visual {
            Some(visual) => visuals.get_mut(visual.0).ok(),
            None => None,
        };
        let body = AvianBody {
            position,
            velocity: forces.linear_velocity(),
            feet_point: position + anchor.0,
            visual,
            pending: Vec::new(),
        };

        let mut controller = MovementController::resume(
            body,
            WalkableProbe::new(&spatial_query),
            *tuning,
            *state,
        );

        controller.perform_move(axis);
        if jump {
            controller.perform_jump();
        }
        controller.step();

        let (body, _, next_state) = controller.into_parts();
        if *state != next_state {
            *state = next_state;
        }

        for (force, mode) in body.pending {
            match mode {
                ForceMode::Force => forces.apply_force(force),
                ForceMode::Impulse => forces.apply_linear_impulse(force),
            }
        }
    }
}
