//! One generator per motion kind (spec §4.5). `generate_step` is the single
//! dispatch point the orchestrator calls; everything else here is private
//! per-kind implementation, one file per kind, mirroring the split
//! `shared::collision` makes between kinematic/ground/narrow_phase under one
//! `mod.rs` re-exporting a minimal surface.

mod common;
mod dolly;
mod focus_on;
mod fly_away;
mod fly_by;
mod move_to;
mod orbit;
mod pan;
mod pedestal;
mod rotate;
mod static_hold;
mod tilt;
mod truck;
mod zoom;

pub use common::{resolve_easing, StepContext, StepOutcome};

use crate::command::CameraState;
use crate::plan::MotionStep;

/// Dispatch a single step to its generator (spec §4.5).
pub fn generate_step(
    ctx: &StepContext,
    state: CameraState,
    duration: f64,
    step: &MotionStep,
) -> StepOutcome {
    use crate::plan::MotionKind::*;
    match step.kind {
        Static => static_hold::generate(ctx, state, duration, step),
        Zoom => zoom::generate(ctx, state, duration, step),
        Orbit => orbit::generate(ctx, state, duration, step),
        Pan => pan::generate(ctx, state, duration, step),
        Tilt => tilt::generate(ctx, state, duration, step),
        Dolly => dolly::generate(ctx, state, duration, step),
        Truck => truck::generate(ctx, state, duration, step),
        Pedestal => pedestal::generate(ctx, state, duration, step),
        Rotate => rotate::generate(ctx, state, duration, step),
        MoveTo => move_to::generate(ctx, state, duration, step),
        FocusOn => focus_on::generate(ctx, state, duration, step),
        FlyBy => fly_by::generate(ctx, state, duration, step),
        FlyAway => fly_away::generate(ctx, state, duration, step),
        Unknown => {
            log::error!("unrecognized motion step type, skipping");
            StepOutcome::Skipped
        }
    }
}
