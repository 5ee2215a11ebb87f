//! `orbit` (spec §4.5).
//!
//! Orbit direction sign convention (spec §9 open question 1): `counter-clockwise`
//! is a *positive* rotation angle about the chosen axis (the ordinary
//! right-hand-rule convention); `clockwise` is negative. `left` is an alias
//! for `clockwise`, `right` for `counter-clockwise`, per spec §4.5's literal
//! wording. This is documented and tested literally in `DESIGN.md` and
//! `tests/scenarios.rs` (scenario S4).

use crate::command::CameraState;
use crate::easing::Easing;
use crate::geometry::{axis_angle, rotate, Vec3};
use crate::plan::MotionStep;
use crate::target::resolve_target;

use super::common::{camera_up, clamp_candidate, hold, is_zero_magnitude, resolve_easing, world_up, StepContext, StepOutcome};

fn resolve_axis(name: Option<&str>, state: CameraState) -> Vec3 {
    match name {
        Some("x") => Vec3::new(1.0, 0.0, 0.0),
        Some("z") => Vec3::new(0.0, 0.0, 1.0),
        Some("camera_up") => {
            let forward = state.forward();
            camera_up(forward, super::common::camera_right(forward))
        }
        _ => world_up(),
    }
}

fn resolve_sign(direction: Option<&str>) -> Option<f64> {
    match direction {
        Some("counter-clockwise") | Some("right") => Some(1.0),
        Some("clockwise") | Some("left") => Some(-1.0),
        _ => None,
    }
}

pub fn generate(
    ctx: &StepContext,
    state: CameraState,
    duration: f64,
    step: &MotionStep,
) -> StepOutcome {
    let center_name = step.string_param("target").unwrap_or("object_center");
    let Some(center) = resolve_target(center_name, ctx.scene, ctx.env, state.target) else {
        log::error!("orbit: could not resolve center '{}'", center_name);
        return StepOutcome::Skipped;
    };

    let Some(angle_deg) = step.f64_param("angle") else {
        log::error!("orbit: missing angle");
        return StepOutcome::Skipped;
    };

    let easing = resolve_easing(step, ctx.config);

    if is_zero_magnitude(angle_deg) {
        let (commands, next) = hold(state, duration, easing);
        return StepOutcome::Commands(commands, next);
    }

    let Some(sign) = resolve_sign(step.string_param("direction")) else {
        log::error!("orbit: missing or invalid direction");
        return StepOutcome::Skipped;
    };

    let axis = resolve_axis(step.string_param("axis"), state);
    let radius_factor = step.f64_param("radius_factor").filter(|f| *f > 0.0).unwrap_or(1.0);

    let total_angle_rad = sign * angle_deg.to_radians();
    let n = (angle_deg.abs() / 2.0).ceil().max(2.0) as usize;
    let per_step_angle = total_angle_rad / (n as f64 - 1.0);
    let per_step_duration = duration / (n as f64 - 1.0);

    let base_radius_vec = (state.position - center) * radius_factor;

    let anchor = crate::command::CameraCommand {
        position: state.position,
        target: center,
        orientation: None,
        duration: 0.0,
        easing,
    };

    let mut commands = vec![anchor];
    let mut previous = state.position;

    for i in 1..n {
        let angle_i = per_step_angle * i as f64;
        let q = axis_angle(axis, angle_i);
        let candidate = center + rotate(q, base_radius_vec);
        let clamped = clamp_candidate(ctx, previous, candidate, Some(center));
        commands.push(crate::command::CameraCommand {
            position: clamped,
            target: center,
            orientation: None,
            duration: per_step_duration,
            easing: Easing::Linear,
        });
        previous = clamped;
    }

    let next_state = CameraState { position: previous, target: center, orientation: None };
    StepOutcome::Commands(commands, next_state)
}
