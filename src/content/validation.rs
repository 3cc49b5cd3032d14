//! Range checks for movement stats.

use crate::movement::MovementStats;

/// A stats field outside its allowed range.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsValidationError {
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for StatsValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MovementStats field '{}' is {} but must be {}",
            self.field, self.value, self.expected
        )
    }
}

impl std::error::Error for StatsValidationError {}

/// Push an error unless `$value` is finite and within `$min..=$max`.
macro_rules! check_range {
    ($errors:expr, $stats:expr, $field:ident, $min:expr, $max:expr, $expected:expr) => {
        let value = $stats.$field;
        if !value.is_finite() || value < $min || value > $max {
            $errors.push(StatsValidationError {
                field: stringify!($field),
                value,
                expected: $expected,
            });
        }
    };
}

/// Validate every numeric field. Returns an empty list if the stats are usable.
pub fn validate_stats(stats: &MovementStats) -> Vec<StatsValidationError> {
    let mut errors = Vec::new();

    // Input
    check_range!(errors, stats, vertical_dead_zone_threshold, 0.01, 0.99, "within [0.01, 0.99]");
    check_range!(errors, stats, horizontal_dead_zone_threshold, 0.01, 0.99, "within [0.01, 0.99]");

    // Movement
    check_range!(errors, stats, max_speed, 0.0, f32::MAX, "non-negative");
    check_range!(errors, stats, acceleration, 0.0, f32::MAX, "non-negative");
    check_range!(errors, stats, ground_deceleration, 0.0, f32::MAX, "non-negative");
    check_range!(errors, stats, air_deceleration, 0.0, f32::MAX, "non-negative");
    check_range!(errors, stats, grounding_force, -10.0, 0.0, "within [-10, 0]");
    check_range!(errors, stats, grounder_distance, 0.0, 0.5, "within [0, 0.5]");

    // Jump
    check_range!(errors, stats, jump_power, 0.0, f32::MAX, "non-negative");
    check_range!(errors, stats, max_fall_speed, 0.0, f32::MAX, "non-negative");
    check_range!(errors, stats, fall_acceleration, 0.0, f32::MAX, "non-negative");
    check_range!(errors, stats, jump_end_early_gravity_modifier, 0.0, f32::MAX, "non-negative");
    check_range!(errors, stats, coyote_time, 0.0, f32::MAX, "non-negative");
    check_range!(errors, stats, jump_buffer, 0.0, f32::MAX, "non-negative");

    errors
}
