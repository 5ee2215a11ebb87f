//! The `MotionPlan` input type (spec §3, §6): a time-ordered sequence of
//! symbolic camera intents produced by the upstream Motion Planner.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Recognized motion kinds (spec §1, §6).
///
/// `#[serde(other)]` maps any unrecognized `type` string to `Unknown` instead
/// of failing deserialization of the whole plan — the orchestrator is the
/// one that decides an unknown step is skipped-with-a-logged-error (spec
/// §6: "Unknown types are skipped with a logged error"), not serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionKind {
    Static,
    Zoom,
    Orbit,
    Pan,
    Tilt,
    Dolly,
    Truck,
    Pedestal,
    Rotate,
    MoveTo,
    FocusOn,
    FlyBy,
    FlyAway,
    #[serde(other)]
    Unknown,
}

/// One step in a `MotionPlan`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionStep {
    #[serde(rename = "type")]
    pub kind: MotionKind,
    pub duration_ratio: f64,
    #[serde(default)]
    pub parameters: HashMap<String, Value>,
}

impl MotionStep {
    pub fn string_param(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).and_then(Value::as_str)
    }

    pub fn f64_param(&self, key: &str) -> Option<f64> {
        self.parameters.get(key).and_then(Value::as_f64)
    }
}

/// `MotionPlan.metadata` (spec §3).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanMetadata {
    pub requested_duration: Option<f64>,
}

/// The full motion plan handed to [`crate::interpret`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionPlan {
    #[serde(default)]
    pub metadata: PlanMetadata,
    pub steps: Vec<MotionStep>,
}

impl MotionPlan {
    /// Whether every step is `static` (and so the plan needs no
    /// `requested_duration`, per spec §3's "required for any non-static
    /// step").
    pub fn all_static(&self) -> bool {
        self.steps.iter().all(|s| s.kind == MotionKind::Static)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_does_not_fail_deserialization() {
        let json = serde_json::json!({
            "type": "teleport",
            "duration_ratio": 1.0,
            "parameters": {}
        });
        let step: MotionStep = serde_json::from_value(json).unwrap();
        assert_eq!(step.kind, MotionKind::Unknown);
    }

    #[test]
    fn string_and_f64_param_accessors() {
        let json = serde_json::json!({
            "type": "dolly",
            "duration_ratio": 1.0,
            "parameters": {"direction": "in", "distance_override": 2.5}
        });
        let step: MotionStep = serde_json::from_value(json).unwrap();
        assert_eq!(step.string_param("direction"), Some("in"));
        assert_eq!(step.f64_param("distance_override"), Some(2.5));
        assert_eq!(step.f64_param("missing"), None);
    }
}
