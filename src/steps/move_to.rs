//! `move_to` (spec §4.5).

use crate::command::CameraState;
use crate::geometry::Vec3;
use crate::plan::MotionStep;
use crate::target::resolve_target;

use super::common::{anchor_and_end, clamp_candidate, resolve_easing, StepContext, StepOutcome};

/// Fixed offset applied when framing the destination (spec §4.5: "emit one
/// near-zero-duration command at `destination + (0, 0.5, 1.5)`").
fn framing_offset() -> Vec3 {
    Vec3::new(0.0, 0.5, 1.5)
}
const INSTANT_DURATION: f64 = 1e-3;

pub fn generate(
    ctx: &StepContext,
    state: CameraState,
    duration: f64,
    step: &MotionStep,
) -> StepOutcome {
    let destination_name = step.string_param("destination_target").unwrap_or("current_target");
    let Some(destination) = resolve_target(destination_name, ctx.scene, ctx.env, state.target) else {
        log::error!("move_to: could not resolve destination '{}'", destination_name);
        return StepOutcome::Skipped;
    };

    let easing = resolve_easing(step, ctx.config);
    let candidate = destination + framing_offset();
    let clamped = clamp_candidate(ctx, state.position, candidate, Some(destination));

    if step.string_param("speed") == Some("instant") {
        let cmd = crate::command::CameraCommand {
            position: clamped,
            target: destination,
            orientation: None,
            duration: INSTANT_DURATION,
            easing,
        };
        let next = CameraState { position: clamped, target: destination, orientation: None };
        return StepOutcome::Commands(vec![cmd], next);
    }

    let (commands, next) = anchor_and_end(state, clamped, destination, None, duration, easing);
    StepOutcome::Commands(commands, next)
}
