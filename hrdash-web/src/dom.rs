use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    if cfg!(target_arch = "wasm32") {
        web_sys::console::error_1(&JsValue::from(message));
    } else {
        log::error!("{message}");
    }
}

/// An event listener registered on a DOM target for as long as this value lives.
///
/// Dropping the listener removes it from the target and frees the closure.
pub struct DomListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl DomListener {
    /// Attach `handler` for `event` on `target`.
    ///
    /// # Errors
    /// Returns the JavaScript exception if the browser refuses the registration.
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Attach `handler` on the current document, reporting failures to the console.
    pub fn on_document<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let doc = document()?;
        match Self::new(doc.as_ref(), event, handler) {
            Ok(listener) => Some(listener),
            Err(err) => {
                console_error(&format!(
                    "Failed to register {event} listener: {}",
                    js_error_message(&err)
                ));
                None
            }
        }
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Whether the event target lies inside any of `roots`.
#[must_use]
pub fn event_within(event: &Event, roots: &[Option<web_sys::Element>]) -> bool {
    let Some(node) = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
        return false;
    };
    roots
        .iter()
        .flatten()
        .any(|root| root.contains(Some(&node)))
}
