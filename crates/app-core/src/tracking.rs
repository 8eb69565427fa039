//! Lifecycle of a face-tracking attempt.
//!
//! The host acquires the camera and the detector; this only records how far
//! it got, which status line to show, and whether the start action should be
//! offered again. Detections are folded into the smoother only while active.

use crate::error::CapabilityError;
use crate::parallax::{Orientation, ParallaxParams, PoseSmoother};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackingStatus {
    Idle,
    InitializingCamera,
    LoadingModel,
    Active,
    Failed(CapabilityError),
}

impl TrackingStatus {
    pub fn status_line(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::InitializingCamera => "SYSTEM :: INITIALIZING CAMERA...".to_string(),
            Self::LoadingModel => "SYSTEM :: LOADING NEURAL NET...".to_string(),
            Self::Active => "SYSTEM :: TRACKING ACTIVE".to_string(),
            Self::Failed(e) => e.status_line(),
        }
    }

    /// Whether the start button should be visible.
    pub fn start_enabled(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed(_))
    }
}

pub struct TrackingSession {
    status: TrackingStatus,
    smoother: PoseSmoother,
    frames: u64,
}

impl Default for TrackingSession {
    fn default() -> Self {
        Self::new(ParallaxParams::default())
    }
}

impl TrackingSession {
    pub fn new(params: ParallaxParams) -> Self {
        Self {
            status: TrackingStatus::Idle,
            smoother: PoseSmoother::new(params),
            frames: 0,
        }
    }

    pub fn status(&self) -> &TrackingStatus {
        &self.status
    }

    pub fn smoother(&self) -> &PoseSmoother {
        &self.smoother
    }

    /// Frames with a detection applied since tracking became active.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Begin an attempt. Returns false when one is already running or active.
    pub fn begin(&mut self) -> bool {
        if !self.status.start_enabled() {
            log::debug!("[tracking] begin ignored in {:?}", self.status);
            return false;
        }
        self.status = TrackingStatus::InitializingCamera;
        true
    }

    pub fn camera_ready(&mut self) {
        if self.status == TrackingStatus::InitializingCamera {
            self.status = TrackingStatus::LoadingModel;
        }
    }

    pub fn model_ready(&mut self) {
        if self.status == TrackingStatus::LoadingModel {
            log::info!("[tracking] active");
            self.frames = 0;
            self.status = TrackingStatus::Active;
        }
    }

    pub fn fail(&mut self, error: CapabilityError) {
        log::error!("[tracking] {}", error);
        self.status = TrackingStatus::Failed(error);
    }

    /// Apply one frame's detection result. Frames without a face, or frames
    /// arriving while not active, leave the smoothed position untouched.
    pub fn on_detection(&mut self, center: Option<Vec2>) -> Option<Orientation> {
        if self.status != TrackingStatus::Active {
            return None;
        }
        let center = center?;
        self.frames += 1;
        Some(self.smoother.update(center))
    }
}
