//! Host-supplied configuration (spec §6).
//!
//! The interpreter never loads files or reads environment variables; a host
//! application constructs an [`InterpreterConfig`] and passes it into every
//! [`crate::interpret`] call, the way `CinematicConfig` is built up and
//! handed to a processor in the cinematic reference pack rather than read
//! from disk by the processor itself.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::InterpretError;

/// Tunables that are not part of any single motion plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// Hard ceiling on the number of keyframes a single `interpret()` call
    /// may emit (spec §6: "post-generation ceiling, hard failure if
    /// exceeded").
    pub max_keyframes: usize,
    /// Optional ceiling on `|Δposition| / duration` checked by the
    /// validator (spec §4.7). Violations are warnings, not failures.
    pub max_velocity: Option<f64>,
    /// Fallback easing for unrecognized names and for steps that don't
    /// otherwise choose one (spec §6).
    pub default_easing: Easing,
}

impl InterpreterConfig {
    pub fn validate(&self) -> Result<(), InterpretError> {
        if self.max_keyframes == 0 {
            return Err(InterpretError::InvalidConfig(
                "max_keyframes must be greater than zero".into(),
            ));
        }
        if let Some(v) = self.max_velocity {
            if !(v > 0.0) {
                return Err(InterpretError::InvalidConfig(
                    "max_velocity must be positive when set".into(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self { max_keyframes: 4096, max_velocity: None, default_easing: Easing::EaseInOutQuad }
    }
}
