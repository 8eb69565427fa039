use crate::constants::{
    DEBUG_ID, FRONT_LAYER_ID, START_BUTTON_ID, STATUS_ERROR, STATUS_ID, STATUS_READY,
};
use crate::{dom, overlay};
use glam::Vec2;
use stagecraft_core::{CapabilityError, TrackingSession, TrackingStatus};
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Parallax window driven by the page's face detector.
///
/// The page owns the camera and the detection model. It calls `begin()` when
/// the start button is pressed, reports progress through `camera_ready()` /
/// `model_ready()` or a failure, and forwards every detector result.
#[wasm_bindgen]
pub struct FaceWindow {
    session: TrackingSession,
    layer: web::HtmlElement,
    status: web::Element,
    debug: Option<web::Element>,
    start_button: web::Element,
}

#[wasm_bindgen]
impl FaceWindow {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<FaceWindow, JsValue> {
        Self::from_page().map_err(|e| JsValue::from_str(&format!("{:?}", e)))
    }

    /// Returns false when an attempt is already under way.
    pub fn begin(&mut self) -> bool {
        let started = self.session.begin();
        if started {
            self.render_status();
        }
        started
    }

    pub fn camera_ready(&mut self) {
        self.session.camera_ready();
        self.render_status();
    }

    pub fn model_ready(&mut self) {
        self.session.model_ready();
        self.render_status();
    }

    pub fn camera_failed(&mut self, reason: String) {
        self.session.fail(CapabilityError::CameraUnavailable(reason));
        self.render_status();
    }

    pub fn detector_failed(&mut self, reason: String) {
        self.session.fail(CapabilityError::DetectorUnavailable(reason));
        self.render_status();
    }

    /// Feed the normalized centre of the first detected face.
    pub fn on_detection(&mut self, x: f32, y: f32) {
        let Some(o) = self.session.on_detection(Some(Vec2::new(x, y))) else {
            return;
        };
        _ = self.layer.style().set_property("transform", &o.css_transform());
        if let Some(debug) = &self.debug {
            debug.set_text_content(Some(&o.debug_line()));
        }
    }

    /// A frame in which no face was found.
    pub fn on_no_detection(&mut self) {
        self.session.on_detection(None);
    }
}

impl FaceWindow {
    fn from_page() -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        Ok(Self {
            session: TrackingSession::default(),
            layer: dom::require_as(&document, FRONT_LAYER_ID)?,
            status: dom::require(&document, STATUS_ID)?,
            debug: document.get_element_by_id(DEBUG_ID),
            start_button: dom::require(&document, START_BUTTON_ID)?,
        })
    }

    fn render_status(&self) {
        let status = self.session.status();
        self.status.set_text_content(Some(&status.status_line()));
        dom::set_class(&self.status, STATUS_READY, *status == TrackingStatus::Active);
        dom::set_class(
            &self.status,
            STATUS_ERROR,
            matches!(status, TrackingStatus::Failed(_)),
        );
        if status.start_enabled() {
            overlay::show(&self.start_button);
        } else {
            overlay::hide(&self.start_button);
        }
    }
}
