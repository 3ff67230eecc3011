use crate::components::daisy_ui::foundation as f;
use crate::dom::{self, DomListener};
use f::TargetCast;
use hrdash_calendar::{DropdownKey, DropdownOption, DropdownOutcome, DropdownState, filter_options};
use std::rc::Rc;

#[derive(f::Properties, PartialEq, Clone)]
pub struct SearchableDropdownProps {
    pub options: Rc<Vec<DropdownOption>>,
    /// Value of the committed option, if any.
    #[prop_or_default]
    pub value: Option<f::AttrValue>,
    #[prop_or_default]
    pub on_select: f::Callback<f::AttrValue>,
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(SearchableDropdown)]
pub fn searchable_dropdown(props: &SearchableDropdownProps) -> f::Html {
    let state = f::use_state(DropdownState::default);
    let root_ref = f::use_node_ref();

    {
        let state = state.clone();
        let root_ref = root_ref.clone();
        f::use_effect_with(state.is_open(), move |open| {
            let listener = (*open && cfg!(target_arch = "wasm32")).then(|| {
                DomListener::on_document("pointerdown", move |event| {
                    if !dom::event_within(&event, &[root_ref.cast::<web_sys::Element>()]) {
                        let mut next = (*state).clone();
                        next.close();
                        state.set(next);
                    }
                })
            })
            .flatten();
            move || drop(listener)
        });
    }

    let options = props.options.clone();
    let filtered: Vec<DropdownOption> = filter_options(&options, state.query())
        .into_iter()
        .cloned()
        .collect();

    let on_focus = {
        let state = state.clone();
        let options = options.clone();
        f::Callback::from(move |_: web_sys::FocusEvent| {
            let mut next = (*state).clone();
            next.open(&options);
            state.set(next);
        })
    };

    let on_input = {
        let state = state.clone();
        let options = options.clone();
        f::Callback::from(move |e: f::InputEvent| {
            let Some(input) = e.target_dyn_into::<f::HtmlInputElement>() else {
                return;
            };
            let mut next = (*state).clone();
            next.set_query(&input.value(), &options);
            state.set(next);
        })
    };

    let on_keydown = {
        let state = state.clone();
        let options = options.clone();
        let on_select = props.on_select.clone();
        f::Callback::from(move |e: f::KeyboardEvent| {
            let key = DropdownKey::from_key(&e.key());
            let Some(key) = key.filter(|key| state.captures(*key)) else {
                return;
            };
            e.prevent_default();
            let mut next = (*state).clone();
            let outcome = next.handle_key(key, &options);
            state.set(next);
            if let DropdownOutcome::Selected(choice) = outcome {
                on_select.emit(f::AttrValue::from(choice.value));
            }
        })
    };

    let committed_label = props.value.as_ref().and_then(|value| {
        options
            .iter()
            .find(|opt| opt.value.as_str() == value.as_str())
            .map(|opt| opt.label.clone())
    });
    let input_value = if state.is_open() || !state.query().is_empty() {
        state.query().to_string()
    } else {
        committed_label.unwrap_or_default()
    };

    let list_id = format!(
        "{}-listbox",
        props.id.as_deref().unwrap_or("searchable-dropdown")
    );
    let active_id = state
        .highlighted()
        .filter(|_| state.is_open())
        .map(|idx| format!("{list_id}-{idx}"));
    let mut class = f::class_list(&["dropdown", "w-full"], &props.class);
    if state.is_open() {
        class.push("dropdown-open");
    }

    f::html! {
        <div class={class} ref={root_ref}>
            if let Some(label) = props.label.clone() {
                <label class="label" for={props.id.clone()}>{ label }</label>
            }
            <input
                id={props.id.clone()}
                type="text"
                class="input input-bordered w-full"
                role="combobox"
                aria-expanded={state.is_open().to_string()}
                aria-controls={list_id.clone()}
                aria-activedescendant={active_id}
                placeholder={crate::i18n::t("dropdown.search")}
                value={input_value}
                onfocus={on_focus}
                oninput={on_input}
                onkeydown={on_keydown}
            />
            if state.is_open() {
                <ul id={list_id.clone()} class="dropdown-content menu p-2 shadow bg-base-100 rounded-box mt-2 w-full" role="listbox">
                    if filtered.is_empty() {
                        <li class="menu-disabled" aria-disabled="true">{ crate::i18n::t("dropdown.no_results") }</li>
                    }
                    { for filtered.iter().enumerate().map(|(idx, opt)| {
                        let highlighted = state.highlighted() == Some(idx);
                        let on_pick = {
                            let state = state.clone();
                            let options = options.clone();
                            let on_select = props.on_select.clone();
                            f::Callback::from(move |_: f::MouseEvent| {
                                let mut next = (*state).clone();
                                let picked = next.select(idx, &options);
                                state.set(next);
                                if let Some(choice) = picked {
                                    on_select.emit(f::AttrValue::from(choice.value));
                                }
                            })
                        };
                        f::html! {
                            <li
                                id={format!("{list_id}-{idx}")}
                                role="option"
                                aria-selected={highlighted.to_string()}
                                class={f::classes!(highlighted.then_some("active"))}
                                data-value={opt.value.clone()}
                                onclick={on_pick}
                            >
                                { opt.label.clone() }
                            </li>
                        }
                    }) }
                </ul>
            }
        </div>
    }
}
