//! Deterministic compiler from a symbolic `MotionPlan` to a time-ordered
//! stream of low-level `CameraCommand`s.
//!
//! Public API policy
//! -----------------
//! Expose only what a host needs to:
//! - describe a shot (`MotionPlan`, `SceneAnalysis`, `EnvironmentalAnalysis`,
//!   `InterpreterConfig`), and
//! - compile it deterministically (`interpret`).
//!
//! The crate performs no I/O and holds no global state; logging is the only
//! side channel and goes through the `log` facade, which the host wires to
//! an actual sink.

pub mod command;
pub mod config;
pub mod constraints;
pub mod descriptor;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod orchestrator;
pub mod plan;
pub mod scene;
mod steps;
pub mod target;
pub mod validator;

pub use command::{CameraCommand, CameraState};
pub use config::InterpreterConfig;
pub use easing::Easing;
pub use error::InterpretError;
pub use orchestrator::{interpret, InterpretOutcome};
pub use plan::{MotionKind, MotionPlan, MotionStep, PlanMetadata};
pub use scene::{CameraConstraints, EnvironmentalAnalysis, Feature, SceneAnalysis, SpatialAnalysis};
pub use validator::{ValidationReport, Violation, ViolationKind, Warning, WarningKind};
