//! `zoom` (spec §4.5).

use crate::command::CameraState;
use crate::descriptor::{self, Descriptor};
use crate::plan::MotionStep;
use crate::target::resolve_target;

use super::common::{anchor_and_end, clamp_candidate, hold, is_zero_magnitude, resolve_easing, StepContext, StepOutcome};

pub fn generate(
    ctx: &StepContext,
    state: CameraState,
    duration: f64,
    step: &MotionStep,
) -> StepOutcome {
    let target_name = step.string_param("target").unwrap_or("current_target");
    let Some(zoom_target) = resolve_target(target_name, ctx.scene, ctx.env, state.target) else {
        log::error!("zoom: could not resolve target '{}'", target_name);
        return StepOutcome::Skipped;
    };

    let current_distance = (state.position - zoom_target).norm();
    let constraints = ctx.env.constraints();

    let direction_in = step.string_param("direction").map(|d| d == "in");

    let raw_factor = if let Some(f) = step.f64_param("factor_override") {
        f
    } else if let Some(descriptor) = step.string_param("factor_descriptor").and_then(Descriptor::parse) {
        let Some(direction_in) = direction_in else {
            log::error!("zoom: factor_descriptor requires a direction");
            return StepOutcome::Skipped;
        };
        descriptor::zoom_factor(descriptor, direction_in)
    } else if let Some(descriptor) =
        step.string_param("target_distance_descriptor").and_then(Descriptor::parse)
    {
        let diagonal = ctx.scene.spatial.bounds.diagonal();
        let goal = descriptor::goal_distance(descriptor, diagonal);
        if current_distance > crate::geometry::NORMALIZE_EPS {
            goal / current_distance
        } else {
            1.0
        }
    } else {
        log::error!("zoom: missing factor_override, factor_descriptor, or target_distance_descriptor");
        return StepOutcome::Skipped;
    };

    let direction_in = direction_in.unwrap_or(raw_factor < 1.0);
    let factor = descriptor::adjust_factor_for_constraints(
        raw_factor,
        current_distance,
        constraints.min_distance,
        constraints.max_distance,
        direction_in,
    );

    let candidate = zoom_target + (state.position - zoom_target) * factor;

    if is_zero_magnitude((candidate - state.position).norm()) {
        let easing = resolve_easing(step, ctx.config);
        let (commands, next) = hold(state, duration, easing);
        return StepOutcome::Commands(commands, next);
    }

    let clamped = clamp_candidate(ctx, state.position, candidate, Some(zoom_target));
    let easing = resolve_easing(step, ctx.config);
    let (commands, next) = anchor_and_end(state, clamped, zoom_target, None, duration, easing);
    StepOutcome::Commands(commands, next)
}
