//! Pure geometry primitives used throughout the interpreter.
//!
//! This module intentionally contains no interpreter-specific concepts (no
//! targets, no descriptors, no camera state). It defines the vector,
//! quaternion, AABB, and ray types the rest of the crate builds on, mirroring
//! the split `shared::collision::types` makes between "data + math" and
//! "algorithms that use the data".
//!
//! All operations are pure and allocate only on the stack.

use nalgebra as na;
use parry3d_f64::bounding_volume::Aabb as PAabb;
use serde::{Deserialize, Serialize};

/// World-space vector / point. All distances are in the caller's chosen
/// world units; the interpreter itself is unit-agnostic.
pub type Vec3 = na::Vector3<f64>;

/// World-space orientation.
pub type Quat = na::UnitQuaternion<f64>;

/// Guard threshold below which a vector is treated as zero-length (spec §4.1).
pub const NORMALIZE_EPS: f64 = 1e-6;

/// Normalize `v`, returning `fallback` if `v`'s length is below [`NORMALIZE_EPS`].
#[inline]
pub fn normalize_or(v: Vec3, fallback: Vec3) -> Vec3 {
    let len = v.norm();
    if len < NORMALIZE_EPS { fallback } else { v / len }
}

/// Construct a unit quaternion rotating by `angle_rad` about `axis`.
///
/// `axis` is normalized internally; if it is degenerate, the identity
/// rotation is returned (a zero-length rotation axis has no defined effect).
#[inline]
pub fn axis_angle(axis: Vec3, angle_rad: f64) -> Quat {
    match na::Unit::try_new(axis, NORMALIZE_EPS) {
        Some(unit_axis) => na::UnitQuaternion::from_axis_angle(&unit_axis, angle_rad),
        None => na::UnitQuaternion::identity(),
    }
}

/// Rotate `v` by `q`.
#[inline]
pub fn rotate(q: Quat, v: Vec3) -> Vec3 {
    q * v
}

/// Orientation whose forward axis faces `dir`, with `up` as the reference
/// up vector. Used to synthesize a starting orientation for `roll` rotations
/// when the camera state carries none yet (spec §4.5: "the client infers
/// orientation via look-at" whenever `orientation` is absent).
#[inline]
pub fn look_at(dir: Vec3, up: Vec3) -> Quat {
    na::UnitQuaternion::face_towards(&dir, &up)
}

/// A ray in world space: `origin + t * dir` for `t >= 0`.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    #[inline]
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    /// Point along the ray at parameter `t`.
    #[inline]
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Axis-aligned bounding box.
///
/// Backed by [`parry3d_f64::bounding_volume::Aabb`] for storage so this type
/// composes with the rest of the `parry3d-f64` ecosystem if a caller needs
/// it, but the intersection routines below are hand-rolled slab tests rather
/// than a `parry3d` query dispatch: the interpreter only ever tests a single
/// ray against a single box, never a swept shape against a shape set, so the
/// general shape-cast machinery `shared::collision::narrow_phase` wraps is
/// more machinery than this crate needs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[inline]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn dimensions(&self) -> Vec3 {
        self.max - self.min
    }

    #[inline]
    pub fn diagonal(&self) -> f64 {
        self.dimensions().norm()
    }

    /// Translate the box by `delta`. Used to shift the subject AABB by the
    /// user's vertical offset (spec §4.4: "`B` is the subject AABB
    /// translated upward by `Δy`").
    #[inline]
    pub fn translated(&self, delta: Vec3) -> Aabb {
        Aabb::new(self.min + delta, self.max + delta)
    }

    #[inline]
    pub fn contains_point(&self, p: Vec3) -> bool {
        p.x > self.min.x
            && p.x < self.max.x
            && p.y > self.min.y
            && p.y < self.max.y
            && p.z > self.min.z
            && p.z < self.max.z
    }

    /// Clamp `p` onto or inside the box on every axis.
    #[inline]
    pub fn clamp_point(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
            p.z.clamp(self.min.z, self.max.z),
        )
    }

    /// Nearest point on the box's surface to `p` (assumes `p` is inside or on
    /// the box; for an interior point this is the nearest face).
    pub fn nearest_surface_point(&self, p: Vec3) -> Vec3 {
        let c = self.clamp_point(p);
        let dist_to = [
            (c.x - self.min.x, Vec3::new(self.min.x, c.y, c.z)),
            (self.max.x - c.x, Vec3::new(self.max.x, c.y, c.z)),
            (c.y - self.min.y, Vec3::new(c.x, self.min.y, c.z)),
            (self.max.y - c.y, Vec3::new(c.x, self.max.y, c.z)),
            (c.z - self.min.z, Vec3::new(c.x, c.y, self.min.z)),
            (self.max.z - c.z, Vec3::new(c.x, c.y, self.max.z)),
        ];
        dist_to
            .into_iter()
            .min_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(_, point)| point)
            .unwrap_or(c)
    }

    /// Nearest entry `t >= 0` where `ray` crosses into this box, via the
    /// standard slab method. `None` if the ray misses the box entirely, or
    /// only ever exits it (never enters from outside).
    pub fn ray_enter(&self, ray: &Ray) -> Option<f64> {
        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let dir = ray.dir[axis];
            let lo = self.min[axis];
            let hi = self.max[axis];

            if dir.abs() < NORMALIZE_EPS {
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }

            let inv_dir = 1.0 / dir;
            let mut t1 = (lo - origin) * inv_dir;
            let mut t2 = (hi - origin) * inv_dir;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }
            t_min = t_min.max(t1);
            t_max = t_max.min(t2);
            if t_min > t_max {
                return None;
            }
        }

        if t_max < 0.0 {
            return None;
        }
        Some(t_min.max(0.0))
    }

    /// Convert to the `parry3d-f64` representation.
    pub fn to_parry(self) -> PAabb {
        PAabb::new(
            na::Point3::new(self.min.x, self.min.y, self.min.z),
            na::Point3::new(self.max.x, self.max.y, self.max.z),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_or_guards_zero_length() {
        let v = Vec3::new(0.0, 0.0, 0.0);
        assert_eq!(normalize_or(v, Vec3::new(1.0, 0.0, 0.0)), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn normalize_or_normalizes_nonzero() {
        let v = Vec3::new(3.0, 0.0, 4.0);
        let n = normalize_or(v, Vec3::new(1.0, 0.0, 0.0));
        assert!((n.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn aabb_contains_point_is_strict() {
        let b = Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(b.contains_point(Vec3::new(0.0, 0.0, 0.0)));
        assert!(!b.contains_point(Vec3::new(1.0, 0.0, 0.0)));
        assert!(!b.contains_point(Vec3::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn ray_enter_hits_box_from_outside() {
        let b = Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let ray = Ray::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let t = b.ray_enter(&ray).expect("should hit");
        assert!((t - 4.0).abs() < 1e-9);
    }

    #[test]
    fn ray_enter_misses_box() {
        let b = Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let ray = Ray::new(Vec3::new(-5.0, 5.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(b.ray_enter(&ray).is_none());
    }

    #[test]
    fn axis_angle_rotates_as_expected() {
        let q = axis_angle(Vec3::new(0.0, 1.0, 0.0), std::f64::consts::FRAC_PI_2);
        let v = rotate(q, Vec3::new(1.0, 0.0, 0.0));
        assert!((v - Vec3::new(0.0, 0.0, -1.0)).norm() < 1e-9);
    }
}
