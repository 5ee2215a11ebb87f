//! Qualitative magnitude → numeric value mapping (spec §4.3).
//!
//! Three independent modes share the same `Descriptor` vocabulary: distance
//! (dolly/truck/pedestal/fly_by/fly_away), factor (zoom), and goal-distance
//! (an absolute target camera–subject distance). The scale tables are const
//! arrays indexed by the enum discriminant, the way `shared::collision`'s
//! settings module centralizes tunable constants in one place rather than
//! scattering magic numbers through call sites.

use crate::geometry::Vec3;
use crate::plan::MotionKind;

/// Canonical qualitative magnitude (spec §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Descriptor {
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
}

const DISTANCE_SCALE: [f64; 5] = [0.1, 0.3, 0.75, 1.5, 3.0];
const ZOOM_IN_FACTOR: [f64; 5] = [0.9, 0.7, 0.5, 0.3, 0.15];
const ZOOM_OUT_FACTOR: [f64; 5] = [1.1, 1.3, 1.8, 2.5, 4.0];
const GOAL_DISTANCE_SCALE: [f64; 5] = [0.5, 1.0, 1.5, 2.5, 4.0];

impl Descriptor {
    fn index(self) -> usize {
        match self {
            Descriptor::Tiny => 0,
            Descriptor::Small => 1,
            Descriptor::Medium => 2,
            Descriptor::Large => 3,
            Descriptor::Huge => 4,
        }
    }

    /// Normalize a free-form string (spec §3: `close`, `near`, `far`, `a_bit`,
    /// `significantly`, ...) to the closed enum. Unrecognized strings return
    /// `None` so the caller can fall back per the step's own rule.
    pub fn parse(s: &str) -> Option<Descriptor> {
        match s.to_ascii_lowercase().as_str() {
            "tiny" | "a_bit" | "slightly" | "barely" => Some(Descriptor::Tiny),
            "small" | "close" | "near" | "a_little" => Some(Descriptor::Small),
            "medium" | "moderate" | "somewhat" => Some(Descriptor::Medium),
            "large" | "far" | "significantly" | "considerably" => Some(Descriptor::Large),
            "huge" | "very_far" | "dramatically" | "enormously" => Some(Descriptor::Huge),
            _ => None,
        }
    }

    fn distance_scale(self) -> f64 {
        DISTANCE_SCALE[self.index()]
    }

    fn goal_distance_scale(self) -> f64 {
        GOAL_DISTANCE_SCALE[self.index()]
    }

    fn zoom_factor(self, direction_in: bool) -> f64 {
        if direction_in { ZOOM_IN_FACTOR[self.index()] } else { ZOOM_OUT_FACTOR[self.index()] }
    }
}

/// Base metric for distance mode (spec §4.3), chosen per motion kind.
fn base_metric(kind: MotionKind, dimensions: Vec3, diagonal: f64, current_distance: f64) -> f64 {
    let raw = match kind {
        MotionKind::Pedestal => dimensions.y,
        MotionKind::Truck => dimensions.x,
        MotionKind::Dolly | MotionKind::FlyAway => {
            (0.5 * diagonal).max(0.5 * current_distance)
        }
        MotionKind::FlyBy => diagonal,
        _ => diagonal,
    };
    raw.max(0.1)
}

/// Distance-mode magnitude (spec §4.3: base metric × scale, with the dolly
/// rescale special case and final clamp).
pub fn distance_value(
    descriptor: Descriptor,
    kind: MotionKind,
    dimensions: Vec3,
    diagonal: f64,
    current_distance: f64,
) -> f64 {
    let base = base_metric(kind, dimensions, diagonal, current_distance);
    let mut value = base * descriptor.distance_scale();

    if kind == MotionKind::Dolly
        && matches!(descriptor, Descriptor::Tiny | Descriptor::Small)
        && current_distance < base
    {
        value = current_distance * descriptor.distance_scale();
    }

    let ceiling = (5.0 * diagonal).max(20.0);
    value.clamp(0.1, ceiling)
}

/// Factor-mode magnitude for zoom (spec §4.3). `direction_in` is `true` for
/// `direction: "in"`, `false` for `"out"`.
pub fn zoom_factor(descriptor: Descriptor, direction_in: bool) -> f64 {
    descriptor.zoom_factor(direction_in)
}

/// Nudge a zoom factor so `current_distance * factor` lands within
/// `[min_distance, max_distance]`, and so the factor still strictly moves in
/// the requested direction (spec §4.3: "±0.01 to ensure they strictly move
/// in the requested direction").
pub fn adjust_factor_for_constraints(
    factor: f64,
    current_distance: f64,
    min_distance: Option<f64>,
    max_distance: Option<f64>,
    direction_in: bool,
) -> f64 {
    let mut f = factor;
    if current_distance > crate::geometry::NORMALIZE_EPS {
        if let Some(min) = min_distance {
            let lower_bound_factor = min / current_distance;
            if current_distance * f < min {
                f = lower_bound_factor;
            }
        }
        if let Some(max) = max_distance {
            let upper_bound_factor = max / current_distance;
            if current_distance * f > max {
                f = upper_bound_factor;
            }
        }
    }

    if direction_in && f >= 1.0 {
        f = (f - 0.01).max(0.01);
    } else if !direction_in && f <= 1.0 {
        f = f + 0.01;
    }
    f.max(0.01)
}

/// Goal-distance mode (spec §4.3): an absolute camera–target distance.
pub fn goal_distance(descriptor: Descriptor, diagonal: f64) -> f64 {
    (descriptor.goal_distance_scale() * diagonal).max(0.05)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_aliases() {
        assert_eq!(Descriptor::parse("close"), Some(Descriptor::Small));
        assert_eq!(Descriptor::parse("VERY_FAR"), Some(Descriptor::Huge));
        assert_eq!(Descriptor::parse("sideways"), None);
    }

    #[test]
    fn distance_value_is_monotonic_across_descriptors() {
        let dims = Vec3::new(2.0, 2.0, 2.0);
        let diagonal = dims.norm();
        let values: Vec<f64> = [
            Descriptor::Tiny,
            Descriptor::Small,
            Descriptor::Medium,
            Descriptor::Large,
            Descriptor::Huge,
        ]
        .into_iter()
        .map(|d| distance_value(d, MotionKind::Orbit, dims, diagonal, 10.0))
        .collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn distance_value_uses_object_height_for_pedestal() {
        let dims = Vec3::new(1.0, 4.0, 1.0);
        let diagonal = dims.norm();
        let v = distance_value(Descriptor::Medium, MotionKind::Pedestal, dims, diagonal, 10.0);
        assert!((v - 4.0 * 0.75).abs() < 1e-9);
    }

    #[test]
    fn dolly_rescales_by_current_distance_when_small_and_close() {
        let dims = Vec3::new(10.0, 10.0, 10.0);
        let diagonal = dims.norm();
        let current_distance = 1.0;
        let v = distance_value(Descriptor::Small, MotionKind::Dolly, dims, diagonal, current_distance);
        assert!((v - current_distance * 0.3).abs() < 1e-9);
    }

    #[test]
    fn zoom_factor_adjusted_to_respect_min_distance() {
        let factor = zoom_factor(Descriptor::Huge, true);
        let adjusted =
            adjust_factor_for_constraints(factor, 5.0, Some(2.0), None, true);
        assert!((5.0 * adjusted - 2.0).abs() < 1e-6);
    }

    #[test]
    fn goal_distance_is_floored() {
        assert!(goal_distance(Descriptor::Tiny, 0.0) >= 0.05);
    }
}
