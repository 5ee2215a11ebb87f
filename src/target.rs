//! Symbolic target resolution (spec §4.2).
//!
//! A single pure function turns a symbolic name (`object_center`,
//! `object_top_left`, a feature id, ...) into a world-space point. The face
//! and corner vocabulary is closed and small, so it is a `match` rather than
//! a `HashMap`, mirroring the closed-enum-with-string-fallback pattern spec
//! §9 recommends.

use crate::geometry::{Aabb, Vec3};
use crate::scene::{EnvironmentalAnalysis, SceneAnalysis};

/// Resolve `name` to a world-space point (spec §4.2).
///
/// `current_target` is the fallback for the `current_target` sentinel.
/// Returns `None` when `name` is unrecognized and no feature matches it.
pub fn resolve_target(
    name: &str,
    scene: &SceneAnalysis,
    env: &EnvironmentalAnalysis,
    current_target: Vec3,
) -> Option<Vec3> {
    if name == "current_target" {
        return Some(current_target);
    }

    let bounds = scene.spatial.bounds;
    let dy = Vec3::new(0.0, env.vertical_offset(), 0.0);

    if let Some(point) = resolve_bounds_point(name, bounds) {
        return Some(point + dy);
    }

    scene.find_feature(name).map(|f| f.position)
}

fn resolve_bounds_point(name: &str, b: Aabb) -> Option<Vec3> {
    let c = b.center();
    let (min, max) = (b.min, b.max);

    Some(match name {
        "object_center" => c,
        "object_top_center" => Vec3::new(c.x, max.y, c.z),
        "object_bottom_center" => Vec3::new(c.x, min.y, c.z),
        "object_left_center" => Vec3::new(min.x, c.y, c.z),
        "object_right_center" => Vec3::new(max.x, c.y, c.z),
        "object_front_center" => Vec3::new(c.x, c.y, max.z),
        "object_back_center" => Vec3::new(c.x, c.y, min.z),
        "object_top_left" | "object_top_left_corner" | "object_top_left_center" => {
            Vec3::new(min.x, max.y, c.z)
        }
        "object_top_right" | "object_top_right_corner" | "object_top_right_center" => {
            Vec3::new(max.x, max.y, c.z)
        }
        "object_bottom_left" | "object_bottom_left_corner" | "object_bottom_left_center" => {
            Vec3::new(min.x, min.y, c.z)
        }
        "object_bottom_right" | "object_bottom_right_corner" | "object_bottom_right_center" => {
            Vec3::new(max.x, min.y, c.z)
        }
        _ => return None,
    })
}
