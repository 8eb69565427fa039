// Host-side tests for the tracking session lifecycle.

use glam::Vec2;
use stagecraft_core::{CapabilityError, TrackingSession, TrackingStatus};

fn active_session() -> TrackingSession {
    let mut t = TrackingSession::default();
    assert!(t.begin());
    t.camera_ready();
    t.model_ready();
    t
}

#[test]
fn status_lines_follow_startup() {
    let mut t = TrackingSession::default();
    assert!(t.status().start_enabled());
    assert!(t.begin());
    assert_eq!(t.status().status_line(), "SYSTEM :: INITIALIZING CAMERA...");
    assert!(!t.status().start_enabled());
    t.camera_ready();
    assert_eq!(t.status().status_line(), "SYSTEM :: LOADING NEURAL NET...");
    t.model_ready();
    assert_eq!(*t.status(), TrackingStatus::Active);
    assert_eq!(t.status().status_line(), "SYSTEM :: TRACKING ACTIVE");
}

#[test]
fn begin_while_active_is_ignored() {
    let mut t = active_session();
    assert!(!t.begin());
    assert_eq!(*t.status(), TrackingStatus::Active);
}

#[test]
fn failure_reenables_start_for_retry() {
    let mut t = TrackingSession::default();
    t.begin();
    t.fail(CapabilityError::CameraUnavailable("Permission denied".into()));
    assert_eq!(t.status().status_line(), "ERROR :: Permission denied");
    assert!(t.status().start_enabled());
    assert!(t.begin());
    assert_eq!(*t.status(), TrackingStatus::InitializingCamera);
}

#[test]
fn model_ready_out_of_order_does_not_activate() {
    let mut t = TrackingSession::default();
    t.begin();
    t.model_ready();
    assert_eq!(*t.status(), TrackingStatus::InitializingCamera);
}

#[test]
fn detections_before_active_are_dropped() {
    let mut t = TrackingSession::default();
    t.begin();
    assert!(t.on_detection(Some(Vec2::new(1.0, 1.0))).is_none());
    assert_eq!(t.smoother().smoothed(), Vec2::new(0.5, 0.5));
}

#[test]
fn frame_without_face_leaves_state_alone() {
    let mut t = active_session();
    assert!(t.on_detection(None).is_none());
    assert_eq!(t.frames(), 0);
    assert_eq!(t.smoother().smoothed(), Vec2::new(0.5, 0.5));
}

#[test]
fn active_detection_updates_smoother() {
    let mut t = active_session();
    let o = t.on_detection(Some(Vec2::new(1.0, 0.5))).unwrap();
    assert_eq!(t.frames(), 1);
    assert!(t.smoother().smoothed().x > 0.5);
    // mirrored: moving right in camera space reads as moving left
    assert!(o.rotate_y_deg > 0.0);
}
