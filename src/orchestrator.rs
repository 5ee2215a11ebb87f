//! Plan orchestrator (spec §4.6): the crate's single public entry point.
//!
//! Normalizes step durations to the requested total, inserts target-blend
//! (and settle) commands between steps whose effective target differs from
//! the live camera target, threads `(position, target, orientation)` through
//! every step generator, then hands the finished stream to the validator.

use crate::command::{CameraCommand, CameraState};
use crate::config::InterpreterConfig;
use crate::easing::Easing;
use crate::error::InterpretError;
use crate::plan::{MotionKind, MotionPlan, MotionStep};
use crate::scene::{EnvironmentalAnalysis, SceneAnalysis};
use crate::steps::{self, StepContext, StepOutcome};
use crate::target::resolve_target;
use crate::validator::{self, ValidationReport};

/// Duration of the position-held, target-pivoting blend command (spec
/// §4.6).
const BLEND_DURATION: f64 = 0.15;
/// Duration of the hold that follows a blend, before the step's own motion
/// begins (spec §4.6).
const SETTLE_DURATION: f64 = 0.05;

/// The full result of a single `interpret()` call (spec §4, §4.7).
#[derive(Debug, Clone)]
pub struct InterpretOutcome {
    pub commands: Vec<CameraCommand>,
    pub validation: ValidationReport,
}

/// Compile `plan` into a keyframe stream (spec §4.6). Fatal, per-call
/// failures (spec §7) return `Err` before any step runs; per-step failures
/// are logged and skipped.
pub fn interpret(
    plan: &MotionPlan,
    scene: &SceneAnalysis,
    env: &EnvironmentalAnalysis,
    config: &InterpreterConfig,
    initial_state: CameraState,
) -> Result<InterpretOutcome, InterpretError> {
    config.validate()?;

    if plan.steps.is_empty() {
        return Err(InterpretError::EmptyPlan);
    }
    if !plan.all_static() && plan.metadata.requested_duration.is_none() {
        return Err(InterpretError::MissingDuration);
    }

    let total = plan.metadata.requested_duration.unwrap_or(0.0);
    let step_durations = normalize_durations(plan, total);

    let ctx = StepContext { scene, env, config };
    let mut state = initial_state;
    let mut commands = Vec::new();

    for (step, step_duration) in plan.steps.iter().zip(step_durations) {
        let remaining = insert_blend_if_needed(&ctx, &mut state, &mut commands, step, step_duration);

        match steps::generate_step(&ctx, state, remaining, step) {
            StepOutcome::Commands(mut cmds, next_state) => {
                commands.append(&mut cmds);
                state = next_state;
            }
            StepOutcome::Skipped => {
                // Per-step failures are already logged at the call site;
                // the orchestrator just continues with state unchanged
                // (spec §7 "non-fatal").
            }
        }

        if commands.len() > config.max_keyframes {
            return Err(InterpretError::InvalidConfig(format!(
                "plan produced {} keyframes, exceeding max_keyframes {}",
                commands.len(),
                config.max_keyframes
            )));
        }
    }

    let validation = validator::validate(&commands, scene, config);
    Ok(InterpretOutcome { commands, validation })
}

/// Duration normalization (spec §4.6): scale `ideal[i] = total * ratio[i]`
/// so the durations sum to `total` within tolerance, unless every ratio
/// evaluates to zero.
fn normalize_durations(plan: &MotionPlan, total: f64) -> Vec<f64> {
    let ideal: Vec<f64> = plan.steps.iter().map(|s| total * s.duration_ratio.max(0.0)).collect();
    let sum: f64 = ideal.iter().sum();

    if sum <= 0.0 {
        return vec![0.0; plan.steps.len()];
    }
    if (sum - total).abs() > 1e-4 {
        let scale = total / sum;
        return ideal.iter().map(|v| v * scale).collect();
    }
    ideal
}

/// The step's effective target per spec §4.6: the explicit `target`
/// parameter if present, `object_center` for an orbit without one,
/// otherwise the live current target.
fn effective_target(
    ctx: &StepContext,
    step: &MotionStep,
    current_target: crate::geometry::Vec3,
) -> Option<crate::geometry::Vec3> {
    if let Some(name) = step.string_param("target") {
        return resolve_target(name, ctx.scene, ctx.env, current_target);
    }
    if step.kind == MotionKind::Orbit {
        return resolve_target("object_center", ctx.scene, ctx.env, current_target);
    }
    Some(current_target)
}

/// True for a `tilt`/`pan` whose motion is entirely an explicit target
/// re-aim: the blend itself performs the motion, so it gets the step's full
/// allocation and no settle follows (spec §4.6 point 2).
fn is_absolute_target_pivot(step: &MotionStep) -> bool {
    matches!(step.kind, MotionKind::Tilt | MotionKind::Pan) && step.string_param("target").is_some()
}

/// Insert a blend (and usually a settle) command if `step`'s effective
/// target differs from the live target, updating `state`/`commands` in
/// place. Returns the duration the step generator itself should receive.
fn insert_blend_if_needed(
    ctx: &StepContext,
    state: &mut CameraState,
    commands: &mut Vec<CameraCommand>,
    step: &MotionStep,
    step_duration: f64,
) -> f64 {
    let Some(target) = effective_target(ctx, step, state.target) else {
        return step_duration;
    };

    if (target - state.target).norm() <= crate::geometry::NORMALIZE_EPS {
        return step_duration;
    }

    let blend_easing = steps::resolve_easing(step, ctx.config);

    if is_absolute_target_pivot(step) {
        let pivot = CameraCommand {
            position: state.position,
            target,
            orientation: None,
            duration: step_duration,
            easing: blend_easing,
        };
        commands.push(pivot);
        *state = state.advance(&pivot);
        return 0.0;
    }

    let blend = CameraCommand {
        position: state.position,
        target,
        orientation: None,
        duration: BLEND_DURATION,
        easing: blend_easing,
    };
    let settle = CameraCommand {
        position: state.position,
        target,
        orientation: None,
        duration: SETTLE_DURATION,
        easing: Easing::Linear,
    };
    commands.push(blend);
    commands.push(settle);
    *state = state.advance(&settle);

    (step_duration - BLEND_DURATION - SETTLE_DURATION).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Aabb, Vec3};
    use crate::plan::{MotionStep, PlanMetadata};
    use crate::scene::{SceneAnalysis, SpatialAnalysis};
    use std::collections::HashMap;

    fn flat_scene() -> SceneAnalysis {
        SceneAnalysis {
            spatial: SpatialAnalysis {
                bounds: Aabb::new(Vec3::new(-0.01, -0.01, -0.01), Vec3::new(0.01, 0.01, 0.01)),
            },
            features: Vec::new(),
        }
    }

    fn step(kind: MotionKind, ratio: f64, params: &[(&str, serde_json::Value)]) -> MotionStep {
        let mut parameters = HashMap::new();
        for (k, v) in params {
            parameters.insert((*k).to_string(), v.clone());
        }
        MotionStep { kind, duration_ratio: ratio, parameters }
    }

    #[test]
    fn static_plan_holds_single_command() {
        let plan = MotionPlan {
            metadata: PlanMetadata { requested_duration: Some(2.0) },
            steps: vec![step(MotionKind::Static, 1.0, &[])],
        };
        let scene = flat_scene();
        let env = EnvironmentalAnalysis::default();
        let config = InterpreterConfig::default();
        let state = CameraState::new(Vec3::new(0.0, 1.0, 5.0), Vec3::zeros());

        let outcome = interpret(&plan, &scene, &env, &config, state).unwrap();
        assert_eq!(outcome.commands.len(), 1);
        assert_eq!(outcome.commands[0].duration, 2.0);
        assert_eq!(outcome.commands[0].easing, Easing::Linear);
    }

    #[test]
    fn empty_plan_is_fatal() {
        let plan = MotionPlan { metadata: PlanMetadata::default(), steps: Vec::new() };
        let scene = flat_scene();
        let env = EnvironmentalAnalysis::default();
        let config = InterpreterConfig::default();
        let state = CameraState::new(Vec3::new(0.0, 1.0, 5.0), Vec3::zeros());

        assert!(matches!(interpret(&plan, &scene, &env, &config, state), Err(InterpretError::EmptyPlan)));
    }

    #[test]
    fn non_static_without_duration_is_fatal() {
        let plan = MotionPlan {
            metadata: PlanMetadata::default(),
            steps: vec![step(
                MotionKind::Dolly,
                1.0,
                &[("direction", "in".into()), ("distance_override", 1.0.into())],
            )],
        };
        let scene = flat_scene();
        let env = EnvironmentalAnalysis::default();
        let config = InterpreterConfig::default();
        let state = CameraState::new(Vec3::new(0.0, 1.0, 5.0), Vec3::zeros());

        assert!(matches!(
            interpret(&plan, &scene, &env, &config, state),
            Err(InterpretError::MissingDuration)
        ));
    }

    #[test]
    fn duration_normalization_sums_to_total() {
        let plan = MotionPlan {
            metadata: PlanMetadata { requested_duration: Some(1.0) },
            steps: vec![step(MotionKind::Static, 0.3, &[]), step(MotionKind::Static, 0.9, &[])],
        };
        let scene = flat_scene();
        let env = EnvironmentalAnalysis::default();
        let config = InterpreterConfig::default();
        let state = CameraState::new(Vec3::new(0.0, 1.0, 5.0), Vec3::zeros());

        let outcome = interpret(&plan, &scene, &env, &config, state).unwrap();
        let sum: f64 = outcome.commands.iter().map(|c| c.duration).sum();
        assert!((sum - 1.0).abs() <= 1e-3);
    }

    #[test]
    fn target_change_inserts_blend_and_settle() {
        let plan = MotionPlan {
            metadata: PlanMetadata { requested_duration: Some(1.0) },
            steps: vec![
                step(MotionKind::Static, 0.5, &[]),
                step(MotionKind::Static, 0.5, &[("target", "object_center".into())]),
            ],
        };
        let scene = SceneAnalysis {
            spatial: SpatialAnalysis {
                bounds: Aabb::new(Vec3::new(0.9, -0.1, -0.1), Vec3::new(1.1, 0.1, 0.1)),
            },
            features: Vec::new(),
        };
        let env = EnvironmentalAnalysis::default();
        let config = InterpreterConfig::default();
        let state = CameraState::new(Vec3::new(0.0, 1.0, 5.0), Vec3::zeros());

        let outcome = interpret(&plan, &scene, &env, &config, state).unwrap();
        assert_eq!(outcome.commands.len(), 4);
        assert!((outcome.commands[1].duration - BLEND_DURATION).abs() < 1e-9);
        assert!((outcome.commands[2].duration - SETTLE_DURATION).abs() < 1e-9);
        assert!((outcome.commands[1].target - Vec3::new(1.0, 0.0, 0.0)).norm() < 1e-9);
        let sum: f64 = outcome.commands.iter().map(|c| c.duration).sum();
        assert!((sum - 1.0).abs() <= 1e-3);
    }
}
