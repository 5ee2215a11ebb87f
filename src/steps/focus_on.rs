//! `focus_on` (spec §4.5): position unchanged, target shifted. `adjust_framing`
//! is accepted but not implemented — an open extension point per the spec.

use crate::command::CameraState;
use crate::plan::MotionStep;
use crate::target::resolve_target;

use super::common::{anchor_and_end, resolve_easing, StepContext, StepOutcome};

pub fn generate(
    ctx: &StepContext,
    state: CameraState,
    duration: f64,
    step: &MotionStep,
) -> StepOutcome {
    let target_name = match step.string_param("target") {
        Some(name) => name,
        None => {
            log::error!("focus_on: missing target");
            return StepOutcome::Skipped;
        }
    };
    let Some(resolved) = resolve_target(target_name, ctx.scene, ctx.env, state.target) else {
        log::error!("focus_on: could not resolve target '{}'", target_name);
        return StepOutcome::Skipped;
    };

    if step.parameters.contains_key("adjust_framing") {
        log::warn!("focus_on: adjust_framing is accepted but not implemented");
    }

    let easing = resolve_easing(step, ctx.config);
    let (commands, next) = anchor_and_end(state, state.position, resolved, None, duration, easing);
    StepOutcome::Commands(commands, next)
}
