//! `fly_away` (spec §4.5, §9 open question 4).
//!
//! Chosen geometry (documented in `DESIGN.md`): translate along
//! `current_position − resolved_target`, with an optional upward bias of a
//! fixed fraction (0.25) of the subject's vertical dimension when the
//! resolved target sits below the current camera height.

use crate::descriptor::{self, Descriptor};
use crate::command::CameraState;
use crate::geometry::{normalize_or, Vec3};
use crate::plan::MotionStep;
use crate::target::resolve_target;

use super::common::{anchor_and_end, clamp_candidate, hold, is_zero_magnitude, resolve_easing, StepContext, StepOutcome};

/// Fraction of the subject's vertical dimension added as upward bias (spec
/// §4.5's "optional upward bias" — fixed rather than descriptor-driven,
/// since the spec leaves the exact path geometry to the implementer).
const UPWARD_BIAS_FRACTION: f64 = 0.25;

pub fn generate(
    ctx: &StepContext,
    state: CameraState,
    duration: f64,
    step: &MotionStep,
) -> StepOutcome {
    let target_name = step.string_param("target").unwrap_or("current_target");
    let Some(resolved_target) = resolve_target(target_name, ctx.scene, ctx.env, state.target) else {
        log::error!("fly_away: could not resolve target '{}'", target_name);
        return StepOutcome::Skipped;
    };

    let easing = resolve_easing(step, ctx.config);
    let diagonal = ctx.scene.spatial.bounds.diagonal();
    let dimensions = ctx.scene.spatial.bounds.dimensions();
    let current_distance = (state.position - resolved_target).norm();

    let magnitude = if let Some(v) = step.f64_param("distance_override") {
        v
    } else if let Some(descriptor) =
        step.string_param("distance_descriptor").and_then(Descriptor::parse)
    {
        descriptor::distance_value(descriptor, crate::plan::MotionKind::FlyAway, dimensions, diagonal, current_distance)
    } else {
        log::error!("fly_away: missing distance_override or distance_descriptor");
        return StepOutcome::Skipped;
    };

    if is_zero_magnitude(magnitude) {
        let (commands, next) = hold(state, duration, easing);
        return StepOutcome::Commands(commands, next);
    }

    let away_dir = normalize_or(state.position - resolved_target, state.forward() * -1.0);
    let mut candidate = state.position + away_dir * magnitude;

    if resolved_target.y < state.position.y {
        candidate += Vec3::new(0.0, dimensions.y * UPWARD_BIAS_FRACTION, 0.0);
    }

    let clamped = clamp_candidate(ctx, state.position, candidate, Some(resolved_target));
    let (commands, next) = anchor_and_end(state, clamped, state.target, None, duration, easing);
    StepOutcome::Commands(commands, next)
}
