use crate::constants::{FADE_IN, FADE_OUT, HIDDEN};
use crate::dom;
use stagecraft_core::Fade;
use web_sys as web;

#[inline]
pub fn show(el: &web::Element) {
    dom::set_class(el, HIDDEN, false);
}

#[inline]
pub fn hide(el: &web::Element) {
    dom::set_class(el, HIDDEN, true);
}

/// Start a CSS transition of the full-screen overlay.
pub fn fade(el: &web::Element, direction: Fade) {
    let (from, to) = match direction {
        Fade::ToOpaque => (FADE_OUT, FADE_IN),
        Fade::ToClear => (FADE_IN, FADE_OUT),
    };
    dom::set_class(el, from, false);
    dom::set_class(el, to, true);
}
