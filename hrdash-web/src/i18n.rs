use once_cell::sync::Lazy;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;

const STORAGE_KEY: &str = "hrdash.locale";

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta { code: "en" },
    LocaleMeta { code: "es" },
    LocaleMeta { code: "fr" },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../i18n/en.json")),
    ("es", include_str!("../i18n/es.json")),
    ("fr", include_str!("../i18n/fr.json")),
];

static PARSED: Lazy<BTreeMap<&'static str, Value>> = Lazy::new(|| {
    LOCALE_TABLE
        .iter()
        .filter_map(|(code, data)| match serde_json::from_str(data) {
            Ok(value) => Some((*code, value)),
            Err(err) => {
                log::error!("i18n bundle {code} is invalid: {err}");
                None
            }
        })
        .collect()
});

pub struct I18nBundle {
    pub lang: String,
    translations: Value,
    fallback: Value,
}

fn load_translations(lang: &str) -> Option<Value> {
    PARSED.get(lang).cloned()
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let translations = load_translations(lang)?;
    let fallback = load_translations("en").unwrap_or_else(|| translations.clone());
    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn empty_bundle() -> I18nBundle {
    I18nBundle {
        lang: "en".to_string(),
        translations: Value::Object(serde_json::Map::new()),
        fallback: Value::Object(serde_json::Map::new()),
    }
}

/// Supported locales, English first.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

fn saved_lang() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .unwrap_or_else(|| "en".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "en".to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new(
        build_bundle(&saved_lang())
            .or_else(|| build_bundle("en"))
            .unwrap_or_else(empty_bundle),
    );
}

/// Set the current language.
///
/// Unknown codes are ignored. On wasm32 the choice is written to `<html lang>`
/// and persisted to localStorage.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("unsupported locale {lang}, keeping {}", current_lang());
        return;
    };
    CURRENT.with(|cell| cell.replace(bundle));
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
            let _ = el.set_attribute("lang", lang);
        }
        if let Some(storage) = web_sys::window().and_then(|win| win.local_storage().ok().flatten())
        {
            let _ = storage.set_item(STORAGE_KEY, lang);
        }
    }
}

#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|c| c.borrow().lang.clone())
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

fn lookup<T>(key: &str, read: impl Fn(&Value) -> Option<T>) -> Option<T> {
    CURRENT.with(|cell| {
        let bundle = cell.borrow();
        get_nested_value(&bundle.translations, key)
            .and_then(&read)
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(&read))
    })
}

/// Translate a key to the current language, falling back to English and then
/// to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key, replacing `{name}` placeholders from `args`.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    lookup(key, |v| render_value(v, args)).unwrap_or_else(|| key.to_string())
}

/// A translated string list, such as month names.
#[must_use]
pub fn list(key: &str) -> Vec<String> {
    lookup(key, |v| {
        v.as_array().map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
    })
    .unwrap_or_default()
}

/// Full month names, January first.
#[must_use]
pub fn month_names() -> Vec<String> {
    list("calendar.months")
}

/// Two-letter weekday headers, Sunday first.
#[must_use]
pub fn weekday_names() -> Vec<String> {
    list("calendar.weekdays")
}
