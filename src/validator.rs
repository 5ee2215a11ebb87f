//! Post-emission geometric checks on the keyframe stream (spec §4.7).
//!
//! Validates against the **un-shifted** subject AABB — deliberately
//! asymmetric with the constraint clamper, which uses the `Δy`-shifted AABB
//! (spec §9 open question 2, kept as specified and documented in
//! `DESIGN.md`).

use crate::command::CameraCommand;
use crate::config::InterpreterConfig;
use crate::scene::SceneAnalysis;

/// A hard violation: some keyframe's position lies inside the subject AABB.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub keyframe_index: usize,
    pub kind: ViolationKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// `PATH_VIOLATION_BOUNDING_BOX` (spec §4.7).
    PathViolationBoundingBox,
}

/// A soft warning that does not invalidate the stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub keyframe_index: usize,
    pub kind: WarningKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WarningKind {
    /// `|Δposition| / duration` exceeded the configured ceiling.
    VelocityExceeded(f64),
}

/// Outcome of validating a finished keyframe stream. The stream itself is
/// never mutated based on this report (spec §7: "the stream is not mutated
/// on failure").
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
    pub warnings: Vec<Warning>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Validate `commands` against `scene`'s un-shifted subject AABB, and
/// optionally against `config.max_velocity`.
pub fn validate(
    commands: &[CameraCommand],
    scene: &SceneAnalysis,
    config: &InterpreterConfig,
) -> ValidationReport {
    let bounds = scene.spatial.bounds;
    let mut report = ValidationReport::default();

    for (i, cmd) in commands.iter().enumerate() {
        if bounds.contains_point(cmd.position) {
            report.violations.push(Violation { keyframe_index: i, kind: ViolationKind::PathViolationBoundingBox });
        }
    }

    if let Some(max_velocity) = config.max_velocity {
        for (i, pair) in commands.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.duration > 1e-6 {
                let velocity = (next.position - prev.position).norm() / next.duration;
                if velocity > max_velocity {
                    report.warnings.push(Warning {
                        keyframe_index: i + 1,
                        kind: WarningKind::VelocityExceeded(velocity),
                    });
                }
            }
        }
    }

    report
}
