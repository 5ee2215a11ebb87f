//! `pedestal` (spec §4.5): vertical translation. Target translates by the
//! same post-clamp delta as the position.

use crate::command::CameraState;
use crate::geometry::Vec3;

use super::common::{anchor_and_end, clamp_candidate, hold, is_zero_magnitude, resolve_easing, StepContext, StepOutcome};
use crate::plan::MotionStep;

pub fn generate(
    ctx: &StepContext,
    state: CameraState,
    duration: f64,
    step: &MotionStep,
) -> StepOutcome {
    let easing = resolve_easing(step, ctx.config);
    let up = Vec3::new(0.0, 1.0, 0.0);

    let Some(delta) = super::dolly::resolve_signed_distance(
        ctx,
        step,
        &state,
        up,
        crate::plan::MotionKind::Pedestal,
        &["up"],
        &["down"],
    ) else {
        log::error!("pedestal: missing direction/distance parameters");
        return StepOutcome::Skipped;
    };

    if is_zero_magnitude(delta) {
        let (commands, next) = hold(state, duration, easing);
        return StepOutcome::Commands(commands, next);
    }

    let candidate = state.position + up * delta;
    let clamped = clamp_candidate(ctx, state.position, candidate, Some(state.target));
    let actual_delta = clamped - state.position;
    let new_target = state.target + actual_delta;

    let (commands, next) = anchor_and_end(state, clamped, new_target, None, duration, easing);
    StepOutcome::Commands(commands, next)
}
