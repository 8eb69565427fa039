// Host-side tests for pose smoothing and orientation mapping.

use glam::Vec2;
use stagecraft_core::{orientation_for, ParallaxParams, PoseSmoother};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

// Deterministic pseudo-random samples in [0, 1].
fn samples(n: usize) -> Vec<Vec2> {
    let mut x: u32 = 0x1234_ABCD;
    let mut next = move || {
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        x as f32 / u32::MAX as f32
    };
    (0..n).map(|_| Vec2::new(next(), next())).collect()
}

#[test]
fn smoothed_position_stays_in_unit_square() {
    let mut s = PoseSmoother::default();
    for sample in samples(500) {
        s.update(sample);
        let p = s.smoothed();
        assert!((0.0..=1.0).contains(&p.x), "x escaped: {}", p.x);
        assert!((0.0..=1.0).contains(&p.y), "y escaped: {}", p.y);
    }
}

#[test]
fn repeated_sample_converges_monotonically() {
    let mut s = PoseSmoother::default();
    let mut prev = s.smoothed();
    for _ in 0..200 {
        s.update(Vec2::new(1.0, 0.5));
        let p = s.smoothed();
        assert!(p.x >= prev.x, "x went backwards: {} -> {}", prev.x, p.x);
        assert!(p.x <= 1.0);
        assert_eq!(p.y, 0.5);
        prev = p;
    }
    assert!(prev.x > 0.999);
}

#[test]
fn single_sample_moves_by_smoothing_factor() {
    let mut s = PoseSmoother::default();
    s.update(Vec2::new(1.0, 0.0));
    let p = s.smoothed();
    assert!(approx(p.x, 0.56));
    assert!(approx(p.y, 0.44));
}

#[test]
fn mirrored_mapping_matches_window_convention() {
    let o = orientation_for(Vec2::new(0.8, 0.5), &ParallaxParams::default());
    assert!(approx(o.offset.x, -0.6));
    assert!(approx(o.rotate_y_deg, 30.0));
    assert!(approx(o.rotate_x_deg, 0.0));
    assert_eq!(o.debug_line(), "X: -0.60 / Y: 0.00 / RotY: 30.0°");
}

#[test]
fn unmirrored_right_turns_negative_yaw() {
    let params = ParallaxParams {
        mirror: false,
        ..ParallaxParams::default()
    };
    let o = orientation_for(Vec2::new(0.8, 0.5), &params);
    assert!(approx(o.rotate_y_deg, -30.0));
}

#[test]
fn moving_down_pitches_positive() {
    let o = orientation_for(Vec2::new(0.5, 1.0), &ParallaxParams::default());
    assert!(approx(o.rotate_x_deg, 50.0));
    let o = orientation_for(Vec2::new(0.5, 0.0), &ParallaxParams::default());
    assert!(approx(o.rotate_x_deg, -50.0));
}

#[test]
fn update_returns_orientation_of_new_state() {
    let mut s = PoseSmoother::default();
    let o = s.update(Vec2::new(0.9, 0.2));
    assert_eq!(o, s.orientation());
    assert_eq!(o, orientation_for(s.smoothed(), s.params()));
}
