//! Content domain: tests for stats parsing and validation.

use std::path::Path;

use super::loader::parse_stats;
use super::validation::validate_stats;
use super::{StatsError, load_movement_stats};
use crate::movement::MovementStats;

#[test]
fn test_default_stats_are_valid() {
    assert!(validate_stats(&MovementStats::default()).is_empty());
}

#[test]
fn test_parse_full_stats_file() {
    let stats = parse_stats(include_str!("../../assets/data/movement_stats.ron"), "movement_stats.ron")
        .expect("shipped stats file should parse");

    assert_eq!(stats, MovementStats::default());
    assert!(validate_stats(&stats).is_empty());
}

#[test]
fn test_parse_partial_stats_uses_defaults() {
    let stats = parse_stats("(jump_power: 20.0, coyote_time: 0.1)", "partial.ron").unwrap();

    assert_eq!(stats.jump_power, 20.0);
    assert_eq!(stats.coyote_time, 0.1);
    assert_eq!(stats.max_speed, MovementStats::default().max_speed);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_stats("(jump_power: \"high\")", "broken.ron").unwrap_err();

    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_validation_reports_each_bad_field() {
    let stats = MovementStats {
        horizontal_dead_zone_threshold: 1.5,
        grounding_force: 2.0,
        coyote_time: -0.1,
        ..Default::default()
    };

    let errors = validate_stats(&stats);
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();

    assert_eq!(errors.len(), 3);
    assert!(fields.contains(&"horizontal_dead_zone_threshold"));
    assert!(fields.contains(&"grounding_force"));
    assert!(fields.contains(&"coyote_time"));
}

#[test]
fn test_validation_rejects_non_finite() {
    let stats = MovementStats {
        jump_power: f32::NAN,
        max_fall_speed: f32::INFINITY,
        ..Default::default()
    };

    assert_eq!(validate_stats(&stats).len(), 2);
}

#[test]
fn test_missing_file_fails_with_load_error() {
    let errors = load_movement_stats(Path::new("does/not/exist.ron")).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], StatsError::Load(_)));
    assert!(errors[0].to_string().contains("IO error"));
}
