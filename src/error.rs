//! Error taxonomy (spec §7).
//!
//! Only per-call, plan-structural failures short-circuit `interpret()`.
//! Per-step failures (bad parameters, unresolvable targets) are logged and
//! skipped by the orchestrator — they never become an `InterpretError`.

/// Fatal, per-call errors. Returning one of these means no keyframes were
/// produced at all (spec §7: "Per-call failures short-circuit the entire
/// interpret with a structured error").
#[derive(Debug, thiserror::Error)]
pub enum InterpretError {
    #[error("interpreter config invalid: {0}")]
    InvalidConfig(String),

    #[error("motion plan has no steps")]
    EmptyPlan,

    #[error("motion plan requires metadata.requested_duration for non-static steps")]
    MissingDuration,
}
