//! Face-position smoothing for the parallax window.
//!
//! A detector reports the face centre once per video frame as a normalized
//! point. [`PoseSmoother`] low-passes that point and maps it to the two
//! rotation angles a "looking into a window" transform needs. Nothing here
//! touches a rendering surface; the caller applies the [`Orientation`].

use crate::constants::{MIRROR_MODE, ROTATION_STRENGTH_DEG, SMOOTHED_ORIGIN, SMOOTHING};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxParams {
    /// Degrees of rotation produced by a full offset from the frame centre.
    pub strength_deg: f32,
    /// Exponential smoothing factor in (0, 1].
    pub smoothing: f32,
    /// Flip the horizontal axis (selfie camera).
    pub mirror: bool,
}

impl Default for ParallaxParams {
    fn default() -> Self {
        Self {
            strength_deg: ROTATION_STRENGTH_DEG,
            smoothing: SMOOTHING,
            mirror: MIRROR_MODE,
        }
    }
}

/// Rotation to apply to the front layer, derived from the smoothed position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    /// Offset from the frame centre in \[-1, 1\] on both axes, after mirroring.
    pub offset: Vec2,
    /// Pitch in degrees; positive when the viewer moves down.
    pub rotate_x_deg: f32,
    /// Yaw in degrees; negative when the viewer moves right.
    pub rotate_y_deg: f32,
}

impl Orientation {
    /// CSS transform for a layer centred with `translate(-50%, -50%)`.
    pub fn css_transform(&self) -> String {
        format!(
            "translate(-50%, -50%) rotateY({}deg) rotateX({}deg)",
            self.rotate_y_deg, self.rotate_x_deg
        )
    }

    pub fn debug_line(&self) -> String {
        format!(
            "X: {:.2} / Y: {:.2} / RotY: {:.1}°",
            self.offset.x, self.offset.y, self.rotate_y_deg
        )
    }
}

/// Map a smoothed position to an orientation. Pure; no smoothing state.
pub fn orientation_for(smoothed: Vec2, params: &ParallaxParams) -> Orientation {
    let mapped_x = if params.mirror {
        1.0 - smoothed.x
    } else {
        smoothed.x
    };
    let offset = (Vec2::new(mapped_x, smoothed.y) - Vec2::splat(0.5)) * 2.0;
    Orientation {
        offset,
        rotate_x_deg: offset.y * params.strength_deg,
        rotate_y_deg: -offset.x * params.strength_deg,
    }
}

/// Clamp a raw detection into the unit square. Non-finite samples are rejected
/// since a single NaN would poison the filter forever.
#[inline]
pub fn sanitize_sample(sample: Vec2) -> Option<Vec2> {
    sample
        .is_finite()
        .then(|| sample.clamp(Vec2::ZERO, Vec2::ONE))
}

/// First-order low-pass filter over detection samples.
#[derive(Clone, Debug)]
pub struct PoseSmoother {
    params: ParallaxParams,
    smoothed: Vec2,
}

impl Default for PoseSmoother {
    fn default() -> Self {
        Self::new(ParallaxParams::default())
    }
}

impl PoseSmoother {
    pub fn new(params: ParallaxParams) -> Self {
        Self {
            params,
            smoothed: Vec2::from_array(SMOOTHED_ORIGIN),
        }
    }

    pub fn params(&self) -> &ParallaxParams {
        &self.params
    }

    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }

    /// Fold one detection into the smoothed position and return the resulting
    /// orientation. A rejected sample leaves the state untouched.
    pub fn update(&mut self, sample: Vec2) -> Orientation {
        match sanitize_sample(sample) {
            Some(s) => {
                self.smoothed += (s - self.smoothed) * self.params.smoothing;
            }
            None => {
                log::debug!("[parallax] dropping non-finite sample {:?}", sample);
            }
        }
        self.orientation()
    }

    /// Orientation for the current smoothed position.
    pub fn orientation(&self) -> Orientation {
        orientation_for(self.smoothed, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_centred_with_no_rotation() {
        let o = PoseSmoother::default().orientation();
        assert_eq!(o.rotate_x_deg, 0.0);
        assert!(o.rotate_y_deg.abs() < 1e-6);
    }

    #[test]
    fn nan_sample_is_ignored() {
        let mut s = PoseSmoother::default();
        s.update(Vec2::new(f32::NAN, 0.3));
        assert_eq!(s.smoothed(), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn out_of_range_sample_is_clamped() {
        assert_eq!(
            sanitize_sample(Vec2::new(1.7, -0.2)),
            Some(Vec2::new(1.0, 0.0))
        );
    }

    #[test]
    fn css_transform_format() {
        let o = Orientation {
            offset: Vec2::ZERO,
            rotate_x_deg: 10.0,
            rotate_y_deg: -5.5,
        };
        assert_eq!(
            o.css_transform(),
            "translate(-50%, -50%) rotateY(-5.5deg) rotateX(10deg)"
        );
    }
}
