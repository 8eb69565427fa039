use stagecraft_core::TimerId;
use std::collections::HashMap;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fire-once browser timers keyed by the sequencer's timer ids.
#[derive(Default)]
pub struct WebTimers {
    handles: HashMap<TimerId, i32>,
}

impl WebTimers {
    pub fn set(&mut self, timer: TimerId, delay: Duration, callback: impl FnOnce() + 'static) {
        let Some(window) = web::window() else {
            log::error!("[timers] no window; dropping {:?}", timer);
            return;
        };
        let cb = Closure::once_into_js(callback);
        let ms = delay.as_millis().min(i32::MAX as u128) as i32;
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref::<js_sys::Function>(),
            ms,
        ) {
            Ok(handle) => {
                self.handles.insert(timer, handle);
            }
            Err(e) => log::error!("[timers] setTimeout failed: {:?}", e),
        }
    }

    pub fn clear(&mut self, timer: TimerId) {
        if let Some(handle) = self.handles.remove(&timer) {
            if let Some(window) = web::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
    }

    /// Drop bookkeeping for a timer that already fired.
    pub fn fired(&mut self, timer: TimerId) {
        self.handles.remove(&timer);
    }
}
