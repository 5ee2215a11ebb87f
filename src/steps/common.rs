//! Shared helpers for step generators (spec §4.5 "Common rules").

use crate::command::{CameraCommand, CameraState};
use crate::config::InterpreterConfig;
use crate::easing::Easing;
use crate::geometry::{normalize_or, rotate, Aabb, Vec3};
use crate::plan::MotionStep;
use crate::scene::{EnvironmentalAnalysis, SceneAnalysis};

/// Threshold below which a computed motion magnitude is treated as zero
/// (spec §4.5: "effectively zero (< 1e-6)").
pub const MAGNITUDE_EPS: f64 = 1e-6;

/// Read-only context shared by every step generator for the duration of one
/// `interpret()` call.
pub struct StepContext<'a> {
    pub scene: &'a SceneAnalysis,
    pub env: &'a EnvironmentalAnalysis,
    pub config: &'a InterpreterConfig,
}

impl<'a> StepContext<'a> {
    /// The subject AABB translated upward by the user's vertical offset
    /// (spec §4.4: "`B` is the subject AABB translated upward by `Δy`").
    pub fn shifted_bounds(&self) -> Aabb {
        self.scene.spatial.bounds.translated(Vec3::new(0.0, self.env.vertical_offset(), 0.0))
    }
}

/// What a step generator produced.
pub enum StepOutcome {
    /// Commands to append, plus the camera state they leave the orchestrator
    /// in. `Commands(vec![], state)` is valid — it means the step contributed
    /// no motion of its own (e.g. an absolute-target tilt/pan whose motion
    /// the inter-step blend already performed).
    Commands(Vec<CameraCommand>, CameraState),
    /// The step could not be validly parameterized; the orchestrator logs
    /// and continues with state unchanged (spec §4.5, §7 "non-fatal").
    Skipped,
}

pub fn world_up() -> Vec3 {
    Vec3::new(0.0, 1.0, 0.0)
}

/// Camera-local right vector, falling back to world-X when the view is
/// (near-)vertical (spec §4.6 boundary behavior).
pub fn camera_right(forward: Vec3) -> Vec3 {
    normalize_or(forward.cross(&world_up()), Vec3::new(1.0, 0.0, 0.0))
}

/// Camera-local up vector, derived from `right` and `forward` so it stays
/// orthogonal even when `forward` is nearly vertical.
pub fn camera_up(forward: Vec3, right: Vec3) -> Vec3 {
    normalize_or(right.cross(&forward), Vec3::new(0.0, 1.0, 0.0))
}

/// Resolve the easing a step should emit (spec §4.5 "Common rules": "`speed`
/// influences easing when the parameter's easing is the default or
/// `linear`"). `speed` only overrides an easing that was going to come out
/// as the configured default or `linear` anyway; an explicit non-default,
/// non-linear `easing` parameter always wins.
pub fn resolve_easing(step: &MotionStep, config: &InterpreterConfig) -> Easing {
    let stated = match step.string_param("easing") {
        Some(name) => serde_json::from_value::<Easing>(serde_json::Value::String(name.into()))
            .map(|e| e.resolve(config.default_easing))
            .unwrap_or(config.default_easing),
        None => config.default_easing,
    };

    if stated == config.default_easing || stated == Easing::Linear {
        if let Some(speed) = step.string_param("speed") {
            if let Some(e) = Easing::from_speed(speed) {
                return e;
            }
        }
    }

    stated
}

/// Build the standard anchor (duration 0, incoming state) + end-state
/// (`duration`, outgoing state) pair most generators emit (spec §4.5).
pub fn anchor_and_end(
    incoming: CameraState,
    end_position: Vec3,
    end_target: Vec3,
    end_orientation: Option<crate::geometry::Quat>,
    duration: f64,
    easing: Easing,
) -> (Vec<CameraCommand>, CameraState) {
    let anchor = CameraCommand {
        position: incoming.position,
        target: incoming.target,
        orientation: incoming.orientation,
        duration: 0.0,
        easing,
    };
    let end = CameraCommand {
        position: end_position,
        target: end_target,
        orientation: end_orientation,
        duration,
        easing,
    };
    let next_state = incoming.advance(&end);
    (vec![anchor, end], next_state)
}

/// A single hold command for a zero-magnitude step (spec §4.5, §8 "boundary
/// behavior": "Zero-magnitude steps emit a single hold, not an anchor+end
/// pair").
pub fn hold(state: CameraState, duration: f64, easing: Easing) -> (Vec<CameraCommand>, CameraState) {
    let cmd = CameraCommand::hold(state.position, state.target, state.orientation, duration, easing);
    (vec![cmd], state)
}

pub fn is_zero_magnitude(value: f64) -> bool {
    value.abs() < MAGNITUDE_EPS
}

/// Rotate `point` about `pivot` by `angle_rad` around `axis`.
pub fn rotate_about(pivot: Vec3, point: Vec3, axis: Vec3, angle_rad: f64) -> Vec3 {
    let q = crate::geometry::axis_angle(axis, angle_rad);
    pivot + rotate(q, point - pivot)
}

/// Apply the full constraint-clamper pipeline to a candidate position (spec
/// §4.4: envelope clamp, then raycast AABB clamp).
pub fn clamp_candidate(
    ctx: &StepContext,
    previous: Vec3,
    candidate: Vec3,
    reference: Option<Vec3>,
) -> Vec3 {
    let constraints = ctx.env.constraints();
    let enveloped = crate::constraints::envelope_clamp(candidate, reference, constraints);
    crate::constraints::raycast_clamp(previous, enveloped, ctx.shifted_bounds())
}
