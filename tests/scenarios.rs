//! The six literal scenarios from spec §8, exercised end-to-end through
//! `interpret()`.

use std::collections::HashMap;

use scene_interpreter::*;
use scene_interpreter::geometry::{Aabb, Vec3};

fn tiny_bounds_far_away() -> SceneAnalysis {
    SceneAnalysis {
        spatial: SpatialAnalysis {
            bounds: Aabb::new(Vec3::new(990.0, 990.0, 990.0), Vec3::new(991.0, 991.0, 991.0)),
        },
        features: Vec::new(),
    }
}

fn step(kind: MotionKind, ratio: f64, params: &[(&str, serde_json::Value)]) -> MotionStep {
    let mut parameters = HashMap::new();
    for (k, v) in params {
        parameters.insert((*k).to_string(), v.clone());
    }
    MotionStep { kind, duration_ratio: ratio, parameters }
}

#[test]
fn s1_static_hold() {
    let plan = MotionPlan {
        metadata: PlanMetadata { requested_duration: Some(2.0) },
        steps: vec![step(MotionKind::Static, 1.0, &[])],
    };
    let scene = tiny_bounds_far_away();
    let env = EnvironmentalAnalysis::default();
    let config = InterpreterConfig::default();
    let state = CameraState::new(Vec3::new(0.0, 1.0, 5.0), Vec3::zeros());

    let outcome = interpret(&plan, &scene, &env, &config, state).unwrap();

    assert_eq!(outcome.commands.len(), 1);
    let cmd = &outcome.commands[0];
    assert_eq!(cmd.position, Vec3::new(0.0, 1.0, 5.0));
    assert_eq!(cmd.target, Vec3::zeros());
    assert_eq!(cmd.duration, 2.0);
    assert_eq!(cmd.easing, Easing::Linear);
    assert!(outcome.validation.is_valid());
}

#[test]
fn s2_dolly_forward_by_override() {
    let plan = MotionPlan {
        metadata: PlanMetadata { requested_duration: Some(1.0) },
        steps: vec![step(
            MotionKind::Dolly,
            1.0,
            &[("direction", "in".into()), ("distance_override", 2.0.into())],
        )],
    };
    let scene = tiny_bounds_far_away();
    let env = EnvironmentalAnalysis::default();
    let config = InterpreterConfig::default();
    let state = CameraState::new(Vec3::new(0.0, 0.0, 5.0), Vec3::zeros());

    let outcome = interpret(&plan, &scene, &env, &config, state).unwrap();

    assert_eq!(outcome.commands.len(), 2);
    let last = outcome.commands.last().unwrap();
    assert!((last.position - Vec3::new(0.0, 0.0, 3.0)).norm() < 1e-9);
    assert_eq!(last.target, Vec3::zeros());
}

#[test]
fn s3_zoom_in_clamped_by_min_distance() {
    let plan = MotionPlan {
        metadata: PlanMetadata { requested_duration: Some(1.0) },
        steps: vec![step(
            MotionKind::Zoom,
            1.0,
            &[("direction", "in".into()), ("factor_descriptor", "huge".into())],
        )],
    };
    let scene = tiny_bounds_far_away();
    let env = EnvironmentalAnalysis {
        camera_constraints: Some(CameraConstraints { min_distance: Some(2.0), ..Default::default() }),
        user_vertical_adjustment: 0.0,
    };
    let config = InterpreterConfig::default();
    let state = CameraState::new(Vec3::new(0.0, 0.0, 5.0), Vec3::zeros());

    let outcome = interpret(&plan, &scene, &env, &config, state).unwrap();

    let last = outcome.commands.last().unwrap();
    let final_distance = (last.position - last.target).norm();
    assert!((final_distance - 2.0).abs() < 1e-6);
}

#[test]
fn s4_orbit_90_degrees_ccw_about_y() {
    let plan = MotionPlan {
        metadata: PlanMetadata { requested_duration: Some(1.0) },
        steps: vec![step(
            MotionKind::Orbit,
            1.0,
            &[("direction", "counter-clockwise".into()), ("angle", 90.0.into())],
        )],
    };
    let scene = SceneAnalysis {
        spatial: SpatialAnalysis {
            bounds: Aabb::new(Vec3::new(-0.01, -0.01, -0.01), Vec3::new(0.01, 0.01, 0.01)),
        },
        features: Vec::new(),
    };
    let env = EnvironmentalAnalysis::default();
    let config = InterpreterConfig::default();
    let state = CameraState::new(Vec3::new(5.0, 0.0, 0.0), Vec3::zeros());

    let outcome = interpret(&plan, &scene, &env, &config, state).unwrap();

    assert_eq!(outcome.commands.len(), 45);
    let last = outcome.commands.last().unwrap();
    // Sign convention documented in DESIGN.md and src/steps/orbit.rs:
    // counter-clockwise is a positive rotation about +Y.
    assert!((last.position - Vec3::new(0.0, 0.0, -5.0)).norm() < 1e-6);
    assert!((last.target - Vec3::zeros()).norm() < 1e-9);
    let sum: f64 = outcome.commands.iter().map(|c| c.duration).sum();
    assert!((sum - 1.0).abs() < 1e-9);
}

#[test]
fn s5_target_blend_between_steps() {
    let plan = MotionPlan {
        metadata: PlanMetadata { requested_duration: Some(1.0) },
        steps: vec![
            step(MotionKind::Static, 0.5, &[]),
            step(MotionKind::Static, 0.5, &[("target", "object_center".into())]),
        ],
    };
    let scene = SceneAnalysis {
        spatial: SpatialAnalysis {
            bounds: Aabb::new(Vec3::new(0.9, -0.1, -0.1), Vec3::new(1.1, 0.1, 0.1)),
        },
        features: Vec::new(),
    };
    let env = EnvironmentalAnalysis::default();
    let config = InterpreterConfig::default();
    let state = CameraState::new(Vec3::new(0.0, 1.0, 5.0), Vec3::zeros());

    let outcome = interpret(&plan, &scene, &env, &config, state).unwrap();

    assert_eq!(outcome.commands.len(), 4);
    assert!((outcome.commands[0].duration - 0.5).abs() < 1e-9);
    assert!((outcome.commands[1].duration - 0.15).abs() < 1e-9);
    assert!((outcome.commands[1].target - Vec3::new(1.0, 0.0, 0.0)).norm() < 1e-9);
    assert!((outcome.commands[2].duration - 0.05).abs() < 1e-9);
    assert_eq!(outcome.commands[2].target, outcome.commands[1].target);
    assert_eq!(outcome.commands[3].target, outcome.commands[1].target);

    let sum: f64 = outcome.commands.iter().map(|c| c.duration).sum();
    assert!((sum - 1.0).abs() <= 1e-3);
}

#[test]
fn s6_collision_clamp() {
    let plan = MotionPlan {
        metadata: PlanMetadata { requested_duration: Some(1.0) },
        steps: vec![step(
            MotionKind::Dolly,
            1.0,
            &[("direction", "in".into()), ("distance_override", 5.0.into())],
        )],
    };
    let scene = SceneAnalysis {
        spatial: SpatialAnalysis {
            bounds: Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0)),
        },
        features: Vec::new(),
    };
    let env = EnvironmentalAnalysis::default();
    let config = InterpreterConfig::default();
    let state = CameraState::new(Vec3::new(3.0, 0.0, 0.0), Vec3::zeros());

    let outcome = interpret(&plan, &scene, &env, &config, state).unwrap();

    let last = outcome.commands.last().unwrap();
    let diagonal = 2.0 * 3.0_f64.sqrt();
    let offset = (0.05 * diagonal).clamp(0.1, 0.5);
    assert!((last.position.x - (1.0 + offset)).abs() < 1e-6);
    assert!(outcome.validation.is_valid());
}

/// A `pan`/`tilt` with an explicit `target` that already equals the live
/// target never gets a blend inserted (nothing to pivot), but must still
/// consume its full duration allocation rather than emitting zero commands
/// (spec §3 invariant 2, §8 invariant 1).
#[test]
fn pan_with_already_current_target_still_consumes_duration() {
    let plan = MotionPlan {
        metadata: PlanMetadata { requested_duration: Some(2.0) },
        steps: vec![step(MotionKind::Pan, 1.0, &[("target", "current_target".into())])],
    };
    let scene = tiny_bounds_far_away();
    let env = EnvironmentalAnalysis::default();
    let config = InterpreterConfig::default();
    let state = CameraState::new(Vec3::new(0.0, 1.0, 5.0), Vec3::zeros());

    let outcome = interpret(&plan, &scene, &env, &config, state).unwrap();

    assert!(!outcome.commands.is_empty());
    let sum: f64 = outcome.commands.iter().map(|c| c.duration).sum();
    assert!((sum - 2.0).abs() <= 1e-3);
}

/// Same property for `tilt`.
#[test]
fn tilt_with_already_current_target_still_consumes_duration() {
    let plan = MotionPlan {
        metadata: PlanMetadata { requested_duration: Some(1.5) },
        steps: vec![step(MotionKind::Tilt, 1.0, &[("target", "current_target".into())])],
    };
    let scene = tiny_bounds_far_away();
    let env = EnvironmentalAnalysis::default();
    let config = InterpreterConfig::default();
    let state = CameraState::new(Vec3::new(0.0, 1.0, 5.0), Vec3::zeros());

    let outcome = interpret(&plan, &scene, &env, &config, state).unwrap();

    assert!(!outcome.commands.is_empty());
    let sum: f64 = outcome.commands.iter().map(|c| c.duration).sum();
    assert!((sum - 1.5).abs() <= 1e-3);
}
