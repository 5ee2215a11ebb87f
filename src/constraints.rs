//! Height/distance envelope clamp and raycast AABB clamp (spec §4.4).

use crate::geometry::{normalize_or, Aabb, Ray, Vec3};
use crate::scene::CameraConstraints;

/// Clamp `candidate`'s height into `[min_height, max_height]` and, when
/// `reference` is given, its distance to `reference` into
/// `[min_distance, max_distance]` (spec §4.4 "Envelope clamp").
pub fn envelope_clamp(
    candidate: Vec3,
    reference: Option<Vec3>,
    constraints: CameraConstraints,
) -> Vec3 {
    let mut p = candidate;

    if let Some(min_h) = constraints.min_height {
        if p.y < min_h {
            p.y = min_h;
        }
    }
    if let Some(max_h) = constraints.max_height {
        if p.y > max_h {
            p.y = max_h;
        }
    }

    if let Some(reference) = reference {
        let offset = p - reference;
        let dist = offset.norm();
        if dist > crate::geometry::NORMALIZE_EPS {
            let dir = offset / dist;
            let mut clamped = dist;
            if let Some(min_d) = constraints.min_distance {
                clamped = clamped.max(min_d);
            }
            if let Some(max_d) = constraints.max_distance {
                clamped = clamped.min(max_d);
            }
            if (clamped - dist).abs() > crate::geometry::NORMALIZE_EPS {
                p = reference + dir * clamped;
            }
        }
    }

    p
}

/// Dynamic raycast standoff: `clamp(0.05 * diagonal(B), 0.1, 0.5)` (spec §4.4).
pub fn standoff(subject: Aabb) -> f64 {
    (0.05 * subject.diagonal()).clamp(0.1, 0.5)
}

/// Cast from the previous safe position toward `candidate`, stopping short of
/// the (vertically shifted) subject AABB `b` by the dynamic offset, or
/// pushing the candidate out of `b` if it already lies inside it (spec §4.4
/// "Raycast AABB clamp").
pub fn raycast_clamp(previous: Vec3, candidate: Vec3, b: Aabb) -> Vec3 {
    let o = standoff(b);
    let travel = candidate - previous;
    let travel_len = travel.norm();

    if travel_len > crate::geometry::NORMALIZE_EPS {
        let dir = travel / travel_len;
        let ray = Ray::new(previous, dir);
        if let Some(t) = b.ray_enter(&ray) {
            if t < travel_len {
                let hit = ray.at(t);
                return hit - dir * o;
            }
        }
    }

    if b.contains_point(candidate) {
        let surface = b.nearest_surface_point(candidate);
        let out_dir = normalize_or(candidate - b.center(), Vec3::zeros());
        if out_dir.norm() < crate::geometry::NORMALIZE_EPS {
            return surface;
        }
        return surface + out_dir * o;
    }

    candidate
}
