use crate::components::daisy_ui::foundation as f;
use hrdash_calendar::{DayCell, DayState};

#[derive(f::Properties, PartialEq, Clone)]
pub struct CalendarProps {
    /// Output of `hrdash_calendar::day_grid`: leading blanks, then the days.
    pub cells: Vec<DayCell>,
    /// Column headers, Sunday first.
    pub weekdays: Vec<f::AttrValue>,
    #[prop_or_default]
    pub on_select: f::Callback<u32>,
    #[prop_or_default]
    pub class: f::Classes,
}

fn day_classes(cell: &DayCell) -> f::Classes {
    let mut classes = f::classes!("btn", "btn-xs", "m-1");
    match cell.state() {
        DayState::Selected => classes.push("btn-primary"),
        DayState::Today => classes.push(f::classes!("btn-ghost", "btn-outline")),
        DayState::Plain | DayState::Blank => classes.push("btn-ghost"),
    }
    classes
}

#[f::function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> f::Html {
    let class = f::class_list(&["calendar", "bg-base-100", "rounded-box"], &props.class);
    f::html! {
        <div class={class} role="grid" aria-label={crate::i18n::t("calendar.label")}>
            <div class="grid grid-cols-7 text-center text-sm font-semibold">
                { for props.weekdays.iter().map(|day| f::html!{ <div role="columnheader">{ day.clone() }</div> }) }
            </div>
            <div class="grid grid-cols-7 text-center">
                { for props.cells.iter().map(|cell| match *cell {
                    DayCell::Blank => f::html! {
                        <span class="calendar-blank" aria-hidden="true"></span>
                    },
                    DayCell::Day { day, date, disabled, selected, today } => {
                        let on_select = props.on_select.clone();
                        let select_cb = f::Callback::from(move |_: f::MouseEvent| on_select.emit(day));
                        f::html! {
                            <button
                                type="button"
                                class={day_classes(cell)}
                                role="gridcell"
                                data-date={date.to_string()}
                                data-today={today.then_some("true")}
                                aria-selected={selected.to_string()}
                                disabled={disabled}
                                onclick={select_cb}
                            >
                                { day }
                            </button>
                        }
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use futures::executor::block_on;
    use hrdash_calendar::{Bounds, CursorMonth, day_grid};
    use yew::LocalServerRenderer;

    fn render(cells: Vec<DayCell>) -> String {
        let props = CalendarProps {
            cells,
            weekdays: ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]
                .into_iter()
                .map(f::AttrValue::from)
                .collect(),
            on_select: f::Callback::noop(),
            class: f::Classes::new(),
        };
        block_on(LocalServerRenderer::<Calendar>::with_props(props).render())
    }

    #[test]
    fn renders_blanks_and_day_buttons() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let html = render(day_grid(CursorMonth::new(2024, 3), &Bounds::default(), None, today));
        assert_eq!(html.matches("calendar-blank").count(), 5);
        assert_eq!(html.matches("role=\"gridcell\"").count(), 31);
        assert!(html.contains("data-date=\"2024-03-31\""));
    }

    #[test]
    fn disabled_selected_and_today_markers() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let selected = NaiveDate::from_ymd_opt(2024, 6, 3);
        let bounds = Bounds::new(None, None, true);
        let html = render(day_grid(CursorMonth::new(2024, 6), &bounds, selected, today));
        assert_eq!(html.matches("disabled").count(), 15);
        assert_eq!(html.matches("btn-primary").count(), 1);
        assert!(html.contains("data-today=\"true\""));
        assert!(html.contains("btn-outline"));
    }
}
