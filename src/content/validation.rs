//! Sanity checks for loaded tuning values.
//!
//! Nothing here rejects or clamps a value; callers log the warnings and use
//! the tuning as loaded.

use crate::movement::MovementTuning;

/// A tuning field holding a value outside its conventional range.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningWarning {
    pub field: &'static str,
    pub value: f32,
    pub reason: &'static str,
}

impl std::fmt::Display for TuningWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tuning field '{}' = {} {}", self.field, self.value, self.reason)
    }
}

pub fn validate_tuning(tuning: &MovementTuning) -> Vec<TuningWarning> {
    let fields = [
        ("speed", tuning.speed),
        ("jump_power", tuning.jump_power),
        ("acceleration", tuning.acceleration),
        ("deceleration", tuning.deceleration),
        ("velocity_power", tuning.velocity_power),
        ("friction_amount", tuning.friction_amount),
    ];

    fields
        .into_iter()
        .filter_map(|(field, value)| {
            let reason = if !value.is_finite() {
                "is not finite"
            } else if value < 0.0 {
                "is negative"
            } else {
                return None;
            };
            Some(TuningWarning {
                field,
                value,
                reason,
            })
        })
        .collect()
}
