//! Locale bundle checks: every bundle parses and carries the calendar keys

use serde_json::Value;
use std::collections::BTreeSet;

fn locale_codes() -> Vec<String> {
    let mut locales = Vec::new();
    let entries = std::fs::read_dir("i18n").expect("i18n directory should exist");
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            locales.push(stem.to_string());
        }
    }
    locales.sort();
    locales
}

fn load_locale(locale: &str) -> (String, Value) {
    let path = format!("i18n/{locale}.json");
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {path}"));
    let json: Value =
        serde_json::from_str(&content).unwrap_or_else(|_| panic!("Failed to parse JSON in {path}"));
    (content, json)
}

fn find_nested<'a>(json: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(json, |current, part| current.get(part))
}

fn collect_keys(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let next_prefix = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            if v.is_object() {
                collect_keys(&next_prefix, v, out);
            } else {
                out.insert(next_prefix);
            }
        }
    }
}

#[test]
fn bundled_locales_match_registry() {
    let on_disk = locale_codes();
    let registered: Vec<String> = crate::i18n::locales()
        .iter()
        .map(|meta| meta.code.to_string())
        .collect();
    assert_eq!(on_disk, registered);
}

#[test]
fn locales_only_use_keys_known_to_english() {
    let (_, base_json) = load_locale("en");
    let mut base_keys = BTreeSet::new();
    collect_keys("", &base_json, &mut base_keys);

    for locale in locale_codes() {
        let (_, json) = load_locale(&locale);
        let mut keys = BTreeSet::new();
        collect_keys("", &json, &mut keys);
        let extra: Vec<_> = keys.difference(&base_keys).collect();
        assert!(extra.is_empty(), "Unknown keys {extra:?} in locale '{locale}'");
    }
}

#[test]
fn calendar_keys_exist_in_every_locale() {
    let required_keys = [
        "calendar.label",
        "date_selector.placeholder",
        "date_selector.prev_month",
        "date_selector.next_month",
        "date_selector.choose_month",
        "date_selector.choose_year",
        "date_selector.today",
        "date_selector.clear",
    ];

    for locale in locale_codes() {
        let (_, json) = load_locale(&locale);
        for key in required_keys {
            assert!(
                find_nested(&json, key).is_some_and(Value::is_string),
                "Missing key '{key}' in locale '{locale}'"
            );
        }
        let months = find_nested(&json, "calendar.months").and_then(Value::as_array);
        assert_eq!(months.map(Vec::len), Some(12), "months in '{locale}'");
        let weekdays = find_nested(&json, "calendar.weekdays").and_then(Value::as_array);
        assert_eq!(weekdays.map(Vec::len), Some(7), "weekdays in '{locale}'");
    }
}

#[test]
fn locales_have_balanced_templates() {
    for locale in locale_codes() {
        let (content, _json) = load_locale(&locale);
        let open_count = content.matches('{').count();
        let close_count = content.matches('}').count();
        assert_eq!(
            open_count, close_count,
            "Unmatched braces in {locale}: {open_count} open, {close_count} close"
        );
        assert!(
            !content.contains("{{"),
            "Found doubled opening brace in {locale}"
        );
    }
}
