//! `dolly` (spec §4.5): move along the view direction. Direction priority:
//! goal-distance, `destination_target` projection, explicit `direction`.
//! Magnitude priority matches whichever source supplied the direction.

use crate::command::CameraState;
use crate::descriptor::{self, Descriptor};
use crate::plan::MotionStep;
use crate::target::resolve_target;

use super::common::{anchor_and_end, clamp_candidate, hold, is_zero_magnitude, resolve_easing, StepContext, StepOutcome};

/// Shared by `dolly`, `truck`, `pedestal`: resolve the signed scalar
/// magnitude of the translation along `axis`, per spec §4.5's priority list.
pub fn resolve_signed_distance(
    ctx: &StepContext,
    step: &MotionStep,
    state: &CameraState,
    axis: crate::geometry::Vec3,
    kind: crate::plan::MotionKind,
    forward_tokens: &[&str],
    backward_tokens: &[&str],
) -> Option<f64> {
    let diagonal = ctx.scene.spatial.bounds.diagonal();
    let dimensions = ctx.scene.spatial.bounds.dimensions();
    let current_distance = (state.position - state.target).norm();

    if let Some(descriptor) = step.string_param("target_distance_descriptor").and_then(Descriptor::parse) {
        let goal = descriptor::goal_distance(descriptor, diagonal);
        return Some(current_distance - goal);
    }

    if let Some(name) = step.string_param("destination_target") {
        let destination = resolve_target(name, ctx.scene, ctx.env, state.target)?;
        return Some((destination - state.position).dot(&axis));
    }

    let magnitude = if let Some(v) = step.f64_param("distance_override") {
        v
    } else if let Some(descriptor) = step.string_param("distance_descriptor").and_then(Descriptor::parse) {
        descriptor::distance_value(descriptor, kind, dimensions, diagonal, current_distance)
    } else {
        return None;
    };

    match step.string_param("direction") {
        Some(d) if forward_tokens.contains(&d) => Some(magnitude),
        Some(d) if backward_tokens.contains(&d) => Some(-magnitude),
        _ => None,
    }
}

pub fn generate(
    ctx: &StepContext,
    state: CameraState,
    duration: f64,
    step: &MotionStep,
) -> StepOutcome {
    let forward = state.forward();
    let easing = resolve_easing(step, ctx.config);

    let Some(delta) = resolve_signed_distance(
        ctx,
        step,
        &state,
        forward,
        crate::plan::MotionKind::Dolly,
        &["in", "forward"],
        &["out", "backward"],
    ) else {
        log::error!("dolly: missing direction/distance parameters");
        return StepOutcome::Skipped;
    };

    if is_zero_magnitude(delta) {
        let (commands, next) = hold(state, duration, easing);
        return StepOutcome::Commands(commands, next);
    }

    let candidate = state.position + forward * delta;
    let clamped = clamp_candidate(ctx, state.position, candidate, Some(state.target));
    let (commands, next) = anchor_and_end(state, clamped, state.target, None, duration, easing);
    StepOutcome::Commands(commands, next)
}
