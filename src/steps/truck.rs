//! `truck` (spec §4.5): analogous to dolly but along the camera-local right
//! vector. The target translates by the same post-clamp vector as the
//! position, preserving the framing direction.

use crate::command::CameraState;

use super::common::{anchor_and_end, camera_right, clamp_candidate, hold, is_zero_magnitude, resolve_easing, StepContext, StepOutcome};
use crate::plan::MotionStep;

pub fn generate(
    ctx: &StepContext,
    state: CameraState,
    duration: f64,
    step: &MotionStep,
) -> StepOutcome {
    let forward = state.forward();
    let right = camera_right(forward);
    let easing = resolve_easing(step, ctx.config);

    let Some(delta) = super::dolly::resolve_signed_distance(
        ctx,
        step,
        &state,
        right,
        crate::plan::MotionKind::Truck,
        &["right"],
        &["left"],
    ) else {
        log::error!("truck: missing direction/distance parameters");
        return StepOutcome::Skipped;
    };

    if is_zero_magnitude(delta) {
        let (commands, next) = hold(state, duration, easing);
        return StepOutcome::Commands(commands, next);
    }

    let candidate = state.position + right * delta;
    let clamped = clamp_candidate(ctx, state.position, candidate, Some(state.target));
    let actual_delta = clamped - state.position;
    let new_target = state.target + actual_delta;

    let (commands, next) = anchor_and_end(state, clamped, new_target, None, duration, easing);
    StepOutcome::Commands(commands, next)
}
