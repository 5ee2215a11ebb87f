//! Easing name registry (spec §6).
//!
//! The interpreter only ever *names* an easing curve in its output; it never
//! evaluates one (spec §9: "the interpreter never evaluates them"). Client
//! playback owns the actual `[0,1] -> [0,1]` functions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    #[serde(other)]
    Unknown,
}

impl Easing {
    /// Resolve to a registered curve, falling back to `default` (and logging
    /// a warning) for `Unknown` or any name outside the registry (spec §6).
    pub fn resolve(self, default: Easing) -> Easing {
        match self {
            Easing::Unknown => {
                log::warn!("unrecognized easing name, falling back to default");
                default
            }
            known => known,
        }
    }

    /// Map a `speed` descriptor to an easing curve, per spec §4.5: "`speed`
    /// influences easing when the parameter's easing is the default or
    /// `linear`".
    pub fn from_speed(speed: &str) -> Option<Easing> {
        match speed {
            "very_fast" => Some(Easing::Linear),
            "fast" => Some(Easing::EaseOutQuad),
            "slow" => Some(Easing::EaseInOutQuad),
            "medium" => None,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_falls_back_to_default() {
        assert_eq!(Easing::Unknown.resolve(Easing::EaseInQuad), Easing::EaseInQuad);
    }

    #[test]
    fn known_passes_through() {
        assert_eq!(Easing::Linear.resolve(Easing::EaseInQuad), Easing::Linear);
    }

    #[test]
    fn speed_mapping() {
        assert_eq!(Easing::from_speed("fast"), Some(Easing::EaseOutQuad));
        assert_eq!(Easing::from_speed("slow"), Some(Easing::EaseInOutQuad));
        assert_eq!(Easing::from_speed("very_fast"), Some(Easing::Linear));
        assert_eq!(Easing::from_speed("medium"), None);
        assert_eq!(Easing::from_speed("sideways"), None);
    }
}
