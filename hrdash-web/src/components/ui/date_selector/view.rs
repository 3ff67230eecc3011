use hrdash_calendar::{MonthCell, NavDirection, ViewMode, YearCell};
use yew::prelude::*;

use crate::i18n;

pub(super) struct HeaderProps {
    pub label_month: String,
    pub label_year: i32,
    pub on_nav: Callback<NavDirection>,
    pub on_switch: Callback<ViewMode>,
}

pub(super) fn header(p: HeaderProps) -> Html {
    let prev = {
        let on_nav = p.on_nav.clone();
        Callback::from(move |_: MouseEvent| on_nav.emit(NavDirection::Prev))
    };
    let next = {
        let on_nav = p.on_nav;
        Callback::from(move |_: MouseEvent| on_nav.emit(NavDirection::Next))
    };
    let to_month = {
        let on_switch = p.on_switch.clone();
        Callback::from(move |_: MouseEvent| on_switch.emit(ViewMode::Month))
    };
    let to_year = {
        let on_switch = p.on_switch;
        Callback::from(move |_: MouseEvent| on_switch.emit(ViewMode::Year))
    };
    html! {
        <div class="date-selector__header flex items-center justify-between gap-1">
            <button type="button" class="btn btn-ghost btn-xs" data-nav="prev"
                    aria-label={i18n::t("date_selector.prev_month")} onclick={prev}>{"‹"}</button>
            <div class="flex gap-1">
                <button type="button" class="btn btn-ghost btn-xs font-semibold" data-view="month"
                        aria-label={i18n::t("date_selector.choose_month")} onclick={to_month}>
                    { p.label_month }
                </button>
                <button type="button" class="btn btn-ghost btn-xs font-semibold" data-view="year"
                        aria-label={i18n::t("date_selector.choose_year")} onclick={to_year}>
                    { p.label_year }
                </button>
            </div>
            <button type="button" class="btn btn-ghost btn-xs" data-nav="next"
                    aria-label={i18n::t("date_selector.next_month")} onclick={next}>{"›"}</button>
        </div>
    }
}

pub(super) fn month_grid(cells: &[MonthCell], names: &[String], on_pick: &Callback<u32>) -> Html {
    html! {
        <div class="date-selector__months grid grid-cols-3 gap-1" role="listbox"
             aria-label={i18n::t("date_selector.choose_month")}>
            { for cells.iter().map(|cell| {
                let index = cell.index;
                let name = usize::try_from(index)
                    .ok()
                    .and_then(|idx| names.get(idx))
                    .cloned()
                    .unwrap_or_else(|| format!("{:02}", index + 1));
                let onclick = {
                    let on_pick = on_pick.clone();
                    Callback::from(move |_: MouseEvent| on_pick.emit(index))
                };
                let class = if cell.current {
                    classes!("btn", "btn-sm", "btn-primary")
                } else {
                    classes!("btn", "btn-sm", "btn-ghost")
                };
                html! {
                    <button type="button" class={class} role="option"
                            data-month={index.to_string()}
                            aria-selected={cell.current.to_string()}
                            disabled={cell.disabled} {onclick}>
                        { name }
                    </button>
                }
            }) }
        </div>
    }
}

pub(super) fn year_list(cells: &[YearCell], list_ref: NodeRef, on_pick: &Callback<i32>) -> Html {
    html! {
        <div ref={list_ref} class="date-selector__years grid grid-cols-4 gap-1 max-h-64 overflow-y-auto"
             role="listbox" aria-label={i18n::t("date_selector.choose_year")}>
            { for cells.iter().map(|cell| {
                let year = cell.year;
                let onclick = {
                    let on_pick = on_pick.clone();
                    Callback::from(move |_: MouseEvent| on_pick.emit(year))
                };
                let class = if cell.current {
                    classes!("btn", "btn-xs", "btn-primary")
                } else {
                    classes!("btn", "btn-xs", "btn-ghost")
                };
                html! {
                    <button type="button" class={class} role="option"
                            data-year={year.to_string()}
                            data-current={cell.current.then_some("true")}
                            aria-selected={cell.current.to_string()}
                            disabled={cell.disabled} {onclick}>
                        { year }
                    </button>
                }
            }) }
        </div>
    }
}

pub(super) fn footer(on_clear: Callback<MouseEvent>, on_today: Callback<MouseEvent>) -> Html {
    html! {
        <div class="date-selector__footer flex justify-between mt-2">
            <button type="button" class="btn btn-ghost btn-sm" data-action="clear" onclick={on_clear}>
                { i18n::t("date_selector.clear") }
            </button>
            <button type="button" class="btn btn-ghost btn-sm" data-action="today" onclick={on_today}>
                { i18n::t("date_selector.today") }
            </button>
        </div>
    }
}
