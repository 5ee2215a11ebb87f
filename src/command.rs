//! Output types: the [`CameraCommand`] stream and the in-flight camera state
//! threaded through the orchestrator (spec §3, §4.6).

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::geometry::{Quat, Vec3};

/// One emitted keyframe (spec §3: "CameraCommand (output element)").
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraCommand {
    pub position: Vec3,
    pub target: Vec3,
    /// Populated only for `roll` rotations; otherwise the client infers
    /// orientation from `position`/`target` via look-at (spec §3).
    #[serde(default)]
    pub orientation: Option<Quat>,
    pub duration: f64,
    pub easing: Easing,
}

impl CameraCommand {
    /// A held keyframe: `position`/`target`/`orientation` unchanged, just a
    /// duration and easing (spec §4.5's hold-command pattern for static and
    /// zero-magnitude steps).
    pub fn hold(position: Vec3, target: Vec3, orientation: Option<Quat>, duration: f64, easing: Easing) -> Self {
        Self { position, target, orientation, duration, easing }
    }
}

/// `(position, target, orientation)` threaded between steps (spec §4.6
/// "State threading"). `orientation` is `None` whenever the client should
/// derive facing from `position`/`target` via look-at.
#[derive(Debug, Clone, Copy)]
pub struct CameraState {
    pub position: Vec3,
    pub target: Vec3,
    pub orientation: Option<Quat>,
}

impl CameraState {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target, orientation: None }
    }

    /// Advance state to reflect the last command emitted by a step generator.
    pub fn advance(&self, last: &CameraCommand) -> CameraState {
        CameraState {
            position: last.position,
            target: last.target,
            orientation: last.orientation,
        }
    }

    /// Camera-local forward vector (toward the target).
    pub fn forward(&self) -> Vec3 {
        crate::geometry::normalize_or(self.target - self.position, Vec3::new(0.0, 0.0, -1.0))
    }
}
