use futures::executor::block_on;
use hrdash_calendar::DropdownOption;
use hrdash_web::app::{App, departments};
use hrdash_web::components::daisy_ui::{SearchableDropdown, SearchableDropdownProps};
use std::rc::Rc;
use yew::{AttrValue, Callback, Classes, LocalServerRenderer};

#[test]
fn dropdown_shows_committed_label_when_closed() {
    hrdash_web::i18n::set_lang("en");
    let props = SearchableDropdownProps {
        options: Rc::new(departments()),
        value: Some(AttrValue::from("fin")),
        on_select: Callback::noop(),
        id: Some(AttrValue::from("department")),
        label: Some(AttrValue::from("Department")),
        class: Classes::new(),
    };
    let html = block_on(LocalServerRenderer::<SearchableDropdown>::with_props(props).render());
    assert!(html.contains("value=\"Finance\""));
    assert!(html.contains("role=\"combobox\""));
    assert!(html.contains("aria-expanded=\"false\""));
    assert!(!html.contains("role=\"listbox\""));
    assert!(!html.contains("aria-activedescendant"));
}

#[test]
fn dropdown_ignores_unknown_committed_value() {
    hrdash_web::i18n::set_lang("en");
    let props = SearchableDropdownProps {
        options: Rc::new(vec![DropdownOption::new("a", "Alpha")]),
        value: Some(AttrValue::from("zzz")),
        on_select: Callback::noop(),
        id: None,
        label: None,
        class: Classes::new(),
    };
    let html = block_on(LocalServerRenderer::<SearchableDropdown>::with_props(props).render());
    assert!(html.contains("value=\"\""));
    assert!(!html.contains("Alpha"));
}

#[test]
fn app_renders_form_with_unset_summary() {
    hrdash_web::i18n::set_lang("en");
    let html = block_on(LocalServerRenderer::<App>::new().render());
    assert!(html.contains("Candidate profile"));
    assert!(html.contains("id=\"dob\""));
    assert!(html.contains("id=\"interview\""));
    assert!(html.contains("id=\"department\""));
    assert_eq!(html.matches("Not set").count(), 3);
    assert!(html.contains("Interviews run from 02-11-2026 to 18-12-2026"));
}

#[test]
fn app_follows_language_switch() {
    hrdash_web::i18n::set_lang("fr");
    let html = block_on(LocalServerRenderer::<App>::new().render());
    hrdash_web::i18n::set_lang("en");
    assert!(html.contains("Profil du candidat"));
    assert_eq!(html.matches("Non renseigné").count(), 3);
}
