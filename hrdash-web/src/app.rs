use crate::components::daisy_ui::SearchableDropdown;
use crate::components::ui::DateSelector;
use crate::storage::{self, CandidateDraft};
use crate::{dom, i18n};
use hrdash_calendar::{DropdownOption, format_display, parse_optional};
use std::collections::BTreeMap;
use yew::prelude::*;

/// First and last selectable interview dates.
pub const INTERVIEW_WINDOW: (&str, &str) = ("2026-11-02", "2026-12-18");

#[must_use]
pub fn departments() -> Vec<DropdownOption> {
    [
        ("eng", "Engineering"),
        ("design", "Design"),
        ("fin", "Finance"),
        ("hr", "Human Resources"),
        ("legal", "Legal"),
        ("mkt", "Marketing"),
        ("ops", "Operations"),
        ("sales", "Sales"),
    ]
    .into_iter()
    .map(|(value, label)| DropdownOption::new(value, label))
    .collect()
}

/// Store a date selector change; the empty string clears the field.
fn date_field(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.to_string())
}

fn display_or_unset(value: Option<&str>) -> String {
    parse_optional(value)
        .ok()
        .flatten()
        .map_or_else(|| i18n::t("form.unset"), |d| format_display(Some(d)))
}

fn initial_draft() -> CandidateDraft {
    storage::load_draft()
        .unwrap_or_else(|err| {
            log::warn!("discarding saved candidate draft: {err}");
            None
        })
        .unwrap_or_default()
}

#[function_component(App)]
pub fn app() -> Html {
    let form = use_state(initial_draft);
    let options = use_memo((), |()| departments());

    use_effect_with((*form).clone(), |draft| {
        if let Err(err) = storage::save_draft(draft) {
            dom::console_error(&format!("Failed to save candidate draft: {err}"));
        }
    });

    let on_dob = {
        let form = form.clone();
        Callback::from(move |raw: String| {
            form.set(CandidateDraft {
                date_of_birth: date_field(&raw),
                ..(*form).clone()
            });
        })
    };
    let on_interview = {
        let form = form.clone();
        Callback::from(move |raw: String| {
            form.set(CandidateDraft {
                interview: date_field(&raw),
                ..(*form).clone()
            });
        })
    };
    let on_department = {
        let form = form.clone();
        Callback::from(move |value: AttrValue| {
            form.set(CandidateDraft {
                department: Some(value.to_string()),
                ..(*form).clone()
            });
        })
    };

    let (window_from, window_to) = INTERVIEW_WINDOW;
    let window_hint = {
        let from = display_or_unset(Some(window_from));
        let to = display_or_unset(Some(window_to));
        let mut vars = BTreeMap::new();
        vars.insert("from", from.as_str());
        vars.insert("to", to.as_str());
        i18n::tr("form.window", Some(&vars))
    };
    let department_label = form
        .department
        .as_ref()
        .and_then(|value| options.iter().find(|o| o.value == *value))
        .map_or_else(|| i18n::t("form.unset"), |o| o.label.clone());

    html! {
        <main id="main" class="container mx-auto p-4 max-w-xl">
            <h1 class="text-2xl font-bold mb-4">{ i18n::t("form.title") }</h1>
            <form class="flex flex-col gap-4" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                <DateSelector
                    id="dob"
                    label={i18n::t("form.dob")}
                    value={form.date_of_birth.clone().map(AttrValue::from)}
                    disable_future=true
                    on_change={on_dob}
                />
                <div>
                    <DateSelector
                        id="interview"
                        label={i18n::t("form.interview")}
                        value={form.interview.clone().map(AttrValue::from)}
                        min_date={window_from}
                        max_date={window_to}
                        on_change={on_interview}
                    />
                    <p class="text-xs opacity-70 mt-1">{ window_hint }</p>
                </div>
                <SearchableDropdown
                    id="department"
                    label={i18n::t("form.department")}
                    options={options.clone()}
                    value={form.department.clone().map(AttrValue::from)}
                    on_select={on_department}
                />
            </form>
            <section class="mt-6" aria-live="polite">
                <h2 class="font-semibold">{ i18n::t("form.summary") }</h2>
                <dl class="grid grid-cols-2 gap-1" data-testid="summary">
                    <dt>{ i18n::t("form.dob") }</dt>
                    <dd data-field="dob">{ display_or_unset(form.date_of_birth.as_deref()) }</dd>
                    <dt>{ i18n::t("form.interview") }</dt>
                    <dd data-field="interview">{ display_or_unset(form.interview.as_deref()) }</dd>
                    <dt>{ i18n::t("form.department") }</dt>
                    <dd data-field="department">{ department_label }</dd>
                </dl>
            </section>
        </main>
    }
}
