pub use wasm_bindgen::JsCast;
pub use web_sys::{Event, HtmlInputElement, InputEvent, KeyboardEvent, MouseEvent};
pub use yew::classes;
pub use yew::function_component;
pub use yew::html::TargetCast;
pub use yew::prelude::{AttrValue, Callback, Classes, Html, Properties, html};
pub use yew::{use_effect_with, use_node_ref, use_state};

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}
