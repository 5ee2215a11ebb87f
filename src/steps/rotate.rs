//! `rotate` (spec §4.5): `axis` ∈ {`yaw`, `pitch`, `roll`}. Yaw/pitch rotate
//! the target around the camera; roll carries explicit orientation
//! quaternions since it has no look-at equivalent.

use crate::command::CameraState;
use crate::geometry::axis_angle;
use crate::plan::MotionStep;

use super::common::{anchor_and_end, camera_right, camera_up, is_zero_magnitude, resolve_easing, rotate_about, StepContext, StepOutcome};

pub fn generate(
    ctx: &StepContext,
    state: CameraState,
    duration: f64,
    step: &MotionStep,
) -> StepOutcome {
    let easing = resolve_easing(step, ctx.config);

    let Some(angle_deg) = step.f64_param("angle") else {
        log::error!("rotate: missing angle");
        return StepOutcome::Skipped;
    };

    match step.string_param("axis") {
        Some("yaw") => {
            if is_zero_magnitude(angle_deg) {
                let (commands, next) = super::common::hold(state, duration, easing);
                return StepOutcome::Commands(commands, next);
            }
            let forward = state.forward();
            let up = camera_up(forward, camera_right(forward));
            let new_target = rotate_about(state.position, state.target, up, angle_deg.to_radians());
            let (commands, next) =
                anchor_and_end(state, state.position, new_target, None, duration, easing);
            StepOutcome::Commands(commands, next)
        }
        Some("pitch") => {
            if is_zero_magnitude(angle_deg) {
                let (commands, next) = super::common::hold(state, duration, easing);
                return StepOutcome::Commands(commands, next);
            }
            let forward = state.forward();
            let right = camera_right(forward);
            let new_target =
                rotate_about(state.position, state.target, right, angle_deg.to_radians());
            let (commands, next) =
                anchor_and_end(state, state.position, new_target, None, duration, easing);
            StepOutcome::Commands(commands, next)
        }
        Some("roll") => {
            if is_zero_magnitude(angle_deg) {
                let (commands, next) = super::common::hold(state, duration, easing);
                return StepOutcome::Commands(commands, next);
            }
            let forward = state.forward();
            let start_orientation = state
                .orientation
                .unwrap_or_else(|| crate::geometry::look_at(forward, crate::geometry::Vec3::new(0.0, 1.0, 0.0)));
            let delta = axis_angle(forward, angle_deg.to_radians());
            let end_orientation = delta * start_orientation;

            let anchor = crate::command::CameraCommand {
                position: state.position,
                target: state.target,
                orientation: Some(start_orientation),
                duration: 0.0,
                easing,
            };
            let end = crate::command::CameraCommand {
                position: state.position,
                target: state.target,
                orientation: Some(end_orientation),
                duration,
                easing,
            };
            let next = CameraState {
                position: state.position,
                target: state.target,
                orientation: Some(end_orientation),
            };
            StepOutcome::Commands(vec![anchor, end], next)
        }
        _ => {
            log::error!("rotate: missing or invalid axis");
            StepOutcome::Skipped
        }
    }
}
