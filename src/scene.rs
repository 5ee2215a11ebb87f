//! Read-only inputs consumed from upstream collaborators (spec §3, §6).
//!
//! Nothing here is computed by this crate; these types are filled in by the
//! Scene Analysis and Environmental Analysis pipelines and borrowed for the
//! duration of a single [`crate::interpret`] call.

use serde::{Deserialize, Serialize};

use crate::geometry::Aabb;

/// A named feature point on the subject (e.g. "left eye", "hood ornament").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub description: String,
    pub position: crate::geometry::Vec3,
}

/// Spatial facts about the subject of the shot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpatialAnalysis {
    pub bounds: Aabb,
}

/// Read-only scene analysis input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneAnalysis {
    pub spatial: SpatialAnalysis,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl SceneAnalysis {
    pub fn find_feature(&self, name: &str) -> Option<&Feature> {
        self.features
            .iter()
            .find(|f| f.id == name || f.description == name)
    }
}

/// Optional camera distance/height envelope (spec §3, §4.4).
///
/// Wire field names are `camelCase` (`minDistance`, ...), matching spec §3's
/// literal field names for this collaborator's payload — distinct from
/// `MotionPlan`'s `snake_case` wire format, since the two are produced by
/// different upstream services.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraConstraints {
    pub min_distance: Option<f64>,
    pub max_distance: Option<f64>,
    pub min_height: Option<f64>,
    pub max_height: Option<f64>,
}

/// Read-only environmental analysis input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalAnalysis {
    #[serde(default)]
    pub camera_constraints: Option<CameraConstraints>,
    #[serde(default)]
    pub user_vertical_adjustment: f64,
}

impl EnvironmentalAnalysis {
    /// The `Δy` applied to every resolved target (spec §4.2).
    #[inline]
    pub fn vertical_offset(&self) -> f64 {
        self.user_vertical_adjustment
    }

    #[inline]
    pub fn constraints(&self) -> CameraConstraints {
        self.camera_constraints.unwrap_or_default()
    }
}
