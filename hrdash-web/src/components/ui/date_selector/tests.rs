use super::{DateSelector, DateSelectorProps};
use chrono::NaiveDate;
use futures::executor::block_on;
use hrdash_calendar::{Clock, FixedClock};
use std::rc::Rc;
use yew::LocalServerRenderer;
use yew::prelude::*;

fn fixed_clock() -> Rc<dyn Clock> {
    Rc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()))
}

fn base() -> DateSelectorProps {
    DateSelectorProps {
        value: None,
        on_change: Callback::noop(),
        disable_future: false,
        min_date: None,
        max_date: None,
        id: Some(AttrValue::from("dob")),
        label: None,
        placeholder: None,
        class: Classes::new(),
        default_open: false,
        clock: Some(fixed_clock()),
    }
}

fn render(props: DateSelectorProps) -> String {
    crate::i18n::set_lang("en");
    block_on(LocalServerRenderer::<DateSelector>::with_props(props).render())
}

#[test]
fn closed_selector_shows_committed_value_only() {
    let html = render(DateSelectorProps {
        value: Some(AttrValue::from("2024-03-10")),
        ..base()
    });
    assert!(html.contains("value=\"10-03-2024\""));
    assert!(html.contains("readonly"));
    assert!(!html.contains("date-selector__popover"));
}

#[test]
fn malformed_value_renders_empty_field() {
    let html = render(DateSelectorProps {
        value: Some(AttrValue::from("31/02/2024")),
        ..base()
    });
    assert!(html.contains("value=\"\""));
}

#[test]
fn open_popover_disables_future_days() {
    let html = render(DateSelectorProps {
        disable_future: true,
        default_open: true,
        ..base()
    });
    assert!(html.contains("data-view=\"day\""));
    assert!(html.contains("June 2024"));
    assert_eq!(html.matches("role=\"gridcell\"").count(), 30);
    assert_eq!(html.matches("disabled").count(), 15);
    assert!(html.contains("data-date=\"2024-06-16\""));
    assert!(html.contains("Today"));
    assert!(html.contains("Clear"));
}

#[test]
fn min_max_window_leaves_eleven_days_enabled() {
    let html = render(DateSelectorProps {
        min_date: Some(AttrValue::from("2024-03-10")),
        max_date: Some(AttrValue::from("2024-03-20")),
        default_open: true,
        ..base()
    });
    assert!(html.contains("March 2024"));
    assert_eq!(html.matches("role=\"gridcell\"").count(), 31);
    assert_eq!(html.matches("disabled").count(), 20);
}

#[test]
fn past_max_date_anchors_cursor() {
    let html = render(DateSelectorProps {
        max_date: Some(AttrValue::from("2023-01-01")),
        default_open: true,
        ..base()
    });
    assert!(html.contains("January 2023"));
    assert!(!html.contains("June 2024"));
}

#[test]
fn labels_follow_the_active_language() {
    crate::i18n::set_lang("es");
    let props = DateSelectorProps {
        default_open: true,
        label: Some(AttrValue::from("Fecha")),
        ..base()
    };
    let html = block_on(LocalServerRenderer::<DateSelector>::with_props(props).render());
    crate::i18n::set_lang("en");
    assert!(html.contains("Junio 2024"));
    assert!(html.contains("Hoy"));
    assert!(html.contains("for=\"dob\""));
}

#[test]
fn props_compare_clock_by_pointer() {
    let a = base();
    let b = a.clone();
    assert!(a == b);
    let other_clock = DateSelectorProps {
        clock: Some(fixed_clock()),
        ..a.clone()
    };
    assert!(a != other_clock);
}

#[test]
fn bounds_config_depends_only_on_bound_props() {
    let bounded = DateSelectorProps {
        min_date: Some(AttrValue::from("2024-01-01")),
        ..base()
    };
    let relabeled = DateSelectorProps {
        label: Some(AttrValue::from("Interview")),
        value: Some(AttrValue::from("2024-03-10")),
        ..bounded.clone()
    };
    assert_eq!(bounded.bounds_config(), relabeled.bounds_config());
    assert_ne!(bounded.bounds_config(), base().bounds_config());
    assert_eq!(
        bounded.bounds_config().min_date.as_deref(),
        Some("2024-01-01")
    );
}
