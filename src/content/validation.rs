//! Validation for stage layouts before they reach the scene.

use std::collections::HashSet;

use super::data::*;

/// A validation error with context about which stage failed.
#[derive(Debug, Clone, PartialEq)]
pub struct StageValidationError {
    pub stage: Option<usize>,
    pub message: String,
}

impl std::fmt::Display for StageValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.stage {
            Some(index) => write!(f, "Stage {}: {}", index, self.message),
            None => write!(f, "Stages: {}", self.message),
        }
    }
}

macro_rules! stage_error {
    ($errors:expr, $stage:expr, $($arg:tt)*) => {
        $errors.push(StageValidationError {
            stage: $stage,
            message: format!($($arg)*),
        })
    };
}

/// Validate a full stage set against the expected stage count.
/// Returns a list of validation errors, empty if the set is usable.
pub fn validate_stages(stages: &[StageDef], expected_count: usize) -> Vec<StageValidationError> {
    let mut errors = Vec::new();

    if stages.len() != expected_count {
        stage_error!(
            errors,
            None,
            "expected {} stages, found {}",
            expected_count,
            stages.len()
        );
    }

    let mut seen = HashSet::new();
    for stage in stages {
        if stage.index >= expected_count {
            stage_error!(
                errors,
                Some(stage.index),
                "index out of range 0..{}",
                expected_count
            );
        }
        if !seen.insert(stage.index) {
            stage_error!(errors, Some(stage.index), "duplicate stage index");
        }
        errors.extend(validate_stage(stage));
    }

    errors
}

/// Validate the grid and dimensions of a single stage.
pub fn validate_stage(stage: &StageDef) -> Vec<StageValidationError> {
    let mut errors = Vec::new();
    let id = Some(stage.index);

    if stage.tile_size <= 0.0 {
        stage_error!(errors, id, "tile_size must be positive, got {}", stage.tile_size);
    }
    if stage.scale <= 0.0 {
        stage_error!(errors, id, "scale must be positive, got {}", stage.scale);
    }

    if stage.rows.is_empty() {
        stage_error!(errors, id, "has no rows");
        return errors;
    }

    let width = stage.columns();
    if width == 0 {
        stage_error!(errors, id, "has an empty first row");
    }

    let mut player_starts = 0;
    for (row, line) in stage.rows.iter().enumerate() {
        let len = line.chars().count();
        if len != width {
            stage_error!(errors, id, "row {} has {} columns, expected {}", row, len, width);
        }
        for (col, c) in line.chars().enumerate() {
            match Cell::from_char(c) {
                Some(Cell::PlayerStart) => player_starts += 1,
                Some(_) => {}
                None => stage_error!(
                    errors,
                    id,
                    "unknown cell '{}' at row {}, column {}",
                    c,
                    row,
                    col
                ),
            }
        }
    }

    match player_starts {
        0 => stage_error!(errors, id, "missing player start 'P'"),
        1 => {}
        n => stage_error!(errors, id, "{} player starts, expected exactly one", n),
    }

    errors
}
