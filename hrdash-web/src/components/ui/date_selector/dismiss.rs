use crate::dom::{self, DomListener};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::hook;
use yew::prelude::*;

/// While `open`, watch the document for a pointer-down outside every element in
/// `roots` and for Escape, calling `on_dismiss` for either. The listeners are
/// removed when `open` turns false or the component unmounts.
#[hook]
pub fn use_dismiss(open: bool, roots: Vec<NodeRef>, on_dismiss: Callback<()>) {
    use_effect_with(open, move |open| {
        let listeners: Vec<DomListener> = if *open && cfg!(target_arch = "wasm32") {
            let pointer = {
                let on_dismiss = on_dismiss.clone();
                DomListener::on_document("pointerdown", move |event| {
                    let elements: Vec<Option<web_sys::Element>> =
                        roots.iter().map(NodeRef::cast::<web_sys::Element>).collect();
                    if !dom::event_within(&event, &elements) {
                        on_dismiss.emit(());
                    }
                })
            };
            let escape = DomListener::on_document("keydown", move |event| {
                if event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|kb| kb.key() == "Escape")
                {
                    on_dismiss.emit(());
                }
            });
            [pointer, escape].into_iter().flatten().collect()
        } else {
            Vec::new()
        };
        move || drop(listeners)
    });
}
