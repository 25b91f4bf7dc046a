use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// A one-second browser interval. Dropping it stops the ticks.
pub struct PaymentTimer {
    interval_id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl PaymentTimer {
    pub fn start(on_tick: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(on_tick) as Box<dyn FnMut()>);
        let interval_id = web_sys::window()?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                1000,
            )
            .ok()?;
        Some(Self {
            interval_id,
            _callback: callback,
        })
    }
}

impl Drop for PaymentTimer {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.interval_id);
        }
    }
}
