//! `tilt` (spec §4.5): "If `target` is explicitly set, resolve it and use
//! that as the final target... Otherwise, rotate the target around the
//! camera by `angle` about the computed camera-local right. `up` is negative
//! rotation (camera pitches upward); `down` positive."

use crate::command::CameraState;
use crate::plan::MotionStep;
use crate::target::resolve_target;

use super::common::{camera_right, hold, is_zero_magnitude, resolve_easing, rotate_about, StepContext, StepOutcome};

pub fn generate(
    ctx: &StepContext,
    state: CameraState,
    duration: f64,
    step: &MotionStep,
) -> StepOutcome {
    let easing = resolve_easing(step, ctx.config);

    // An absolute target bypasses local rotation entirely; the orchestrator's
    // target-blend handles the re-aim and allocates this step its full
    // duration for the blend (spec §4.5, §4.6 point 2). When the resolved
    // target already matched the live target, no blend ran and `duration`
    // still needs to be consumed here, or the step's whole allocation
    // silently vanishes (spec §8 invariant 1).
    if let Some(name) = step.string_param("target") {
        let Some(resolved) = resolve_target(name, ctx.scene, ctx.env, state.target) else {
            log::error!("tilt: could not resolve target '{}'", name);
            return StepOutcome::Skipped;
        };
        let next = CameraState { position: state.position, target: resolved, orientation: None };
        if duration <= crate::geometry::NORMALIZE_EPS {
            return StepOutcome::Commands(Vec::new(), next);
        }
        let (commands, next) = hold(next, duration, easing);
        return StepOutcome::Commands(commands, next);
    }

    let Some(angle_deg) = step.f64_param("angle") else {
        log::error!("tilt: missing angle");
        return StepOutcome::Skipped;
    };
    if is_zero_magnitude(angle_deg) {
        let (commands, next) = hold(state, duration, easing);
        return StepOutcome::Commands(commands, next);
    }

    let sign = match step.string_param("direction") {
        Some("up") => -1.0,
        Some("down") => 1.0,
        _ => {
            log::error!("tilt: missing or invalid direction");
            return StepOutcome::Skipped;
        }
    };

    let forward = state.forward();
    let right = camera_right(forward);
    let new_target = rotate_about(state.position, state.target, right, sign * angle_deg.to_radians());

    let (commands, next) =
        super::common::anchor_and_end(state, state.position, new_target, None, duration, easing);
    StepOutcome::Commands(commands, next)
}
