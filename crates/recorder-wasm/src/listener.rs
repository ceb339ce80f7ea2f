use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget};

/// A capturing-phase DOM listener. Dropping it removes the listener.
pub struct Subscription {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Subscription {
    pub fn capture<F>(
        target: &EventTarget,
        event_type: &'static str,
        handler: F,
    ) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback_and_bool(
            event_type,
            callback.as_ref().unchecked_ref(),
            true,
        )?;
        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Err(e) = self.target.remove_event_listener_with_callback_and_bool(
            self.event_type,
            self.callback.as_ref().unchecked_ref(),
            true,
        ) {
            tracing::debug!("Failed to remove {} listener: {:?}", self.event_type, e);
        }
    }
}
