//! `static` (spec §4.5: "Hold position/target for `step_duration` with linear
//! easing").

use crate::command::CameraState;
use crate::easing::Easing;
use crate::plan::MotionStep;

use super::common::{hold, StepContext, StepOutcome};

pub fn generate(
    _ctx: &StepContext,
    state: CameraState,
    duration: f64,
    _step: &MotionStep,
) -> StepOutcome {
    let (commands, next) = hold(state, duration, Easing::Linear);
    StepOutcome::Commands(commands, next)
}
