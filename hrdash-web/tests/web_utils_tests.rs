#[cfg(target_arch = "wasm32")]
use hrdash_web::dom;
use hrdash_web::i18n;
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
#[test]
fn dom_helpers_find_window() {
    assert!(dom::window().is_some());
    assert!(dom::document().is_some());
}

#[test]
fn i18n_bundle_switches_and_formats() {
    i18n::set_lang("en");
    assert_eq!(i18n::current_lang(), "en");

    let mut vars = BTreeMap::new();
    vars.insert("from", "02-11-2026");
    vars.insert("to", "18-12-2026");
    let window = i18n::tr("form.window", Some(&vars));
    assert_eq!(window, "Interviews run from 02-11-2026 to 18-12-2026");
    assert_eq!(i18n::t("missing.key"), "missing.key");

    i18n::set_lang("es");
    assert_eq!(i18n::current_lang(), "es");
    assert_eq!(i18n::month_names()[0], "Enero");
    i18n::set_lang("en");
}

#[test]
fn unknown_locale_keeps_current_bundle() {
    i18n::set_lang("es");
    i18n::set_lang("xx");
    assert_eq!(i18n::current_lang(), "es");
    i18n::set_lang("en");
}

#[test]
fn missing_translation_falls_back_to_english() {
    i18n::set_lang("fr");
    assert_eq!(i18n::t("dropdown.no_results"), "No matches");
    assert_eq!(i18n::t("date_selector.today"), "Aujourd'hui");
    i18n::set_lang("en");
}

#[test]
fn calendar_lists_have_fixed_lengths() {
    for meta in i18n::locales() {
        i18n::set_lang(meta.code);
        assert_eq!(i18n::month_names().len(), 12, "{}", meta.code);
        assert_eq!(i18n::weekday_names().len(), 7, "{}", meta.code);
    }
    i18n::set_lang("en");
}

#[test]
fn list_of_scalar_key_is_empty() {
    i18n::set_lang("en");
    assert!(i18n::list("form.title").is_empty());
}
