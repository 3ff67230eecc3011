mod dismiss;
pub mod model;
#[cfg(test)]
mod tests;
mod view;

use crate::components::daisy_ui::Calendar;
use crate::i18n;
use chrono::NaiveDate;
use dismiss::use_dismiss;
use hrdash_calendar::{
    Bounds, BoundsConfig, Clock, Commit, DateSelectorState, NavDirection, SystemClock, ViewMode,
    parse_optional,
};
use model::{SelectorAction, SelectorModel, step};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct DateSelectorProps {
    /// Controlled value: an ISO date or any date-like string, `None` when unset.
    #[prop_or_default]
    pub value: Option<AttrValue>,
    /// Receives `YYYY-MM-DD`, or an empty string when cleared.
    #[prop_or_default]
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub disable_future: bool,
    #[prop_or_default]
    pub min_date: Option<AttrValue>,
    #[prop_or_default]
    pub max_date: Option<AttrValue>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    /// Render with the popover already open.
    #[prop_or_default]
    pub default_open: bool,
    /// Overrides the system clock; compared by pointer.
    #[prop_or_default]
    pub clock: Option<Rc<dyn Clock>>,
}

impl PartialEq for DateSelectorProps {
    fn eq(&self, other: &Self) -> bool {
        let same_clock = match (&self.clock, &other.clock) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_clock
            && self.value == other.value
            && self.on_change == other.on_change
            && self.disable_future == other.disable_future
            && self.min_date == other.min_date
            && self.max_date == other.max_date
            && self.id == other.id
            && self.label == other.label
            && self.placeholder == other.placeholder
            && self.class == other.class
            && self.default_open == other.default_open
    }
}

impl DateSelectorProps {
    /// The raw bound props; [`Bounds`] is resolved from this once per change.
    #[must_use]
    pub fn bounds_config(&self) -> BoundsConfig {
        BoundsConfig {
            min_date: self.min_date.as_deref().map(str::to_string),
            max_date: self.max_date.as_deref().map(str::to_string),
            disable_future: self.disable_future,
        }
    }

    fn today(&self) -> NaiveDate {
        self.clock
            .as_ref()
            .map_or_else(|| SystemClock.today(), |clock| clock.today())
    }
}

/// The controlled value, or `None` when it is absent or malformed.
fn parse_value(raw: Option<&AttrValue>) -> Option<NaiveDate> {
    parse_optional(raw.map(AttrValue::as_str)).unwrap_or_else(|err| {
        log::warn!("date selector ignoring value: {err}");
        None
    })
}

fn emit(commit: Option<Commit>, on_change: &Callback<String>) {
    if let Some(commit) = commit {
        on_change.emit(commit.value());
    }
}

#[function_component(DateSelector)]
pub fn date_selector(props: &DateSelectorProps) -> Html {
    let today = props.today();
    let bounds = *use_memo(props.bounds_config(), Bounds::from_config);
    let value = *use_memo(props.value.clone(), |raw| parse_value(raw.as_ref()));

    let state = {
        let default_open = props.default_open;
        use_reducer(move || {
            let mut initial = DateSelectorState::new(value, &bounds, today);
            if default_open {
                initial.open();
            }
            SelectorModel(initial)
        })
    };
    let input_ref = use_node_ref();
    let popover_ref = use_node_ref();
    let years_ref = use_node_ref();

    {
        let state = state.clone();
        use_effect_with(value, move |value| {
            state.dispatch(SelectorAction::Sync(*value));
        });
    }

    {
        let dispatcher = state.dispatcher();
        use_dismiss(
            state.0.is_open(),
            vec![input_ref.clone(), popover_ref.clone()],
            Callback::from(move |()| dispatcher.dispatch(SelectorAction::Dismiss)),
        );
    }

    {
        let years_ref = years_ref.clone();
        use_effect_with(state.0.view(), move |view| {
            if *view == ViewMode::Year
                && let Some(list) = years_ref.cast::<web_sys::Element>()
                && let Ok(Some(current)) = list.query_selector("[data-current='true']")
            {
                current.scroll_into_view();
            }
        });
    }

    // Every handler computes the next state from the rendered snapshot, then
    // emits at most one change for it.
    let run = {
        let state = state.clone();
        let on_change = props.on_change.clone();
        Rc::new(
            move |op: &dyn Fn(&mut DateSelectorState) -> Option<Commit>| {
                let (next, commit) = step(&state.0, op);
                state.dispatch(SelectorAction::Apply(next));
                emit(commit, &on_change);
            },
        )
    };

    let on_open = {
        let run = run.clone();
        Callback::from(move |()| {
            run(&|s: &mut DateSelectorState| {
                s.open();
                None
            });
        })
    };
    let on_nav = {
        let run = run.clone();
        Callback::from(move |direction: NavDirection| {
            run(&|s: &mut DateSelectorState| {
                s.navigate_month(direction, &bounds);
                None
            });
        })
    };
    let on_switch = {
        let run = run.clone();
        Callback::from(move |target: ViewMode| {
            run(&|s: &mut DateSelectorState| {
                s.switch_view(target);
                None
            });
        })
    };
    let on_pick_month = {
        let run = run.clone();
        Callback::from(move |index: u32| {
            run(&|s: &mut DateSelectorState| {
                s.pick_month(index);
                None
            });
        })
    };
    let on_pick_year = {
        let run = run.clone();
        Callback::from(move |year: i32| {
            run(&|s: &mut DateSelectorState| {
                s.pick_year(year);
                None
            });
        })
    };
    let on_pick_day = {
        let run = run.clone();
        Callback::from(move |day: u32| run(&|s: &mut DateSelectorState| s.pick_day(day, &bounds, today)))
    };
    let on_clear = {
        let run = run.clone();
        Callback::from(move |_: MouseEvent| run(&|s: &mut DateSelectorState| Some(s.clear())))
    };
    let on_today = {
        let run = run.clone();
        Callback::from(move |_: MouseEvent| run(&|s: &mut DateSelectorState| Some(s.today(today))))
    };

    let current = &state.0;
    let month_names = i18n::month_names();
    let open = current.is_open();
    let popover = if open {
        let cursor = current.cursor();
        let body = match current.view() {
            ViewMode::Day => {
                let weekdays: Vec<AttrValue> = i18n::weekday_names()
                    .into_iter()
                    .map(AttrValue::from)
                    .collect();
                html! {
                    <Calendar cells={current.day_cells(&bounds, today)} {weekdays} on_select={on_pick_day} />
                }
            }
            ViewMode::Month => view::month_grid(
                &current.month_cells(&bounds, today),
                &month_names,
                &on_pick_month,
            ),
            ViewMode::Year => view::year_list(
                &current.year_cells(&bounds, today),
                years_ref,
                &on_pick_year,
            ),
        };
        let label_month = usize::try_from(cursor.month_index())
            .ok()
            .and_then(|idx| month_names.get(idx))
            .cloned()
            .unwrap_or_else(|| format!("{:02}", cursor.month()));
        html! {
            <div ref={popover_ref} class="date-selector__popover card bg-base-100 shadow-lg p-2 absolute z-10 mt-1"
                 role="dialog" aria-label={current.header_label(&month_names)}
                 data-view={format!("{:?}", current.view()).to_lowercase()}>
                { view::header(view::HeaderProps {
                    label_month,
                    label_year: cursor.year(),
                    on_nav,
                    on_switch,
                }) }
                { body }
                { view::footer(on_clear, on_today) }
            </div>
        }
    } else {
        html! {}
    };

    let class = {
        let mut classes = classes!("date-selector", "relative");
        classes.push(props.class.clone());
        classes
    };
    let placeholder = props
        .placeholder
        .clone()
        .unwrap_or_else(|| AttrValue::from(i18n::t("date_selector.placeholder")));

    html! {
        <div {class}>
            if let Some(label) = props.label.clone() {
                <label class="label" for={props.id.clone()}>{ label }</label>
            }
            <input
                ref={input_ref}
                id={props.id.clone()}
                type="text"
                class="input input-bordered w-full"
                readonly=true
                aria-haspopup="dialog"
                aria-expanded={open.to_string()}
                {placeholder}
                value={current.display_text()}
                onfocus={on_open.reform(|_: FocusEvent| ())}
                onclick={on_open.reform(|_: MouseEvent| ())}
            />
            { popover }
        </div>
    }
}
