//! `fly_by` (spec §4.5, §9 open question 4).
//!
//! Chosen geometry (documented in `DESIGN.md`): the camera offsets to one
//! side of the subject at `pass_distance` along the camera-local right
//! vector computed at the current position, holding height. This is an
//! optional extension; its absence from a plan never causes an error.

use crate::descriptor::{self, Descriptor};
use crate::command::CameraState;
use crate::plan::MotionStep;
use crate::target::resolve_target;

use super::common::{anchor_and_end, camera_right, clamp_candidate, hold, is_zero_magnitude, resolve_easing, StepContext, StepOutcome};

pub fn generate(
    ctx: &StepContext,
    state: CameraState,
    duration: f64,
    step: &MotionStep,
) -> StepOutcome {
    let subject_name = step.string_param("target").unwrap_or("object_center");
    let Some(subject) = resolve_target(subject_name, ctx.scene, ctx.env, state.target) else {
        log::error!("fly_by: could not resolve target '{}'", subject_name);
        return StepOutcome::Skipped;
    };

    let easing = resolve_easing(step, ctx.config);
    let diagonal = ctx.scene.spatial.bounds.diagonal();
    let dimensions = ctx.scene.spatial.bounds.dimensions();
    let current_distance = (state.position - subject).norm();

    let pass_distance = if let Some(v) = step.f64_param("pass_distance_override") {
        v
    } else if let Some(descriptor) =
        step.string_param("pass_distance_descriptor").and_then(Descriptor::parse)
    {
        descriptor::distance_value(descriptor, crate::plan::MotionKind::FlyBy, dimensions, diagonal, current_distance)
    } else {
        log::error!("fly_by: missing pass_distance_override or pass_distance_descriptor");
        return StepOutcome::Skipped;
    };

    let sign = match step.string_param("direction") {
        Some("left") => -1.0,
        _ => 1.0,
    };

    if is_zero_magnitude(pass_distance) {
        let (commands, next) = hold(state, duration, easing);
        return StepOutcome::Commands(commands, next);
    }

    let forward = state.forward();
    let right = camera_right(forward);
    let candidate = state.position + right * (sign * pass_distance);
    let clamped = clamp_candidate(ctx, state.position, candidate, Some(subject));

    let (commands, next) = anchor_and_end(state, clamped, subject, None, duration, easing);
    StepOutcome::Commands(commands, next)
}
