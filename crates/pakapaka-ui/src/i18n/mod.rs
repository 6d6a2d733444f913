//! Lightweight JSON-backed translations with per-locale bundles.

use serde_json::Value;
use std::sync::LazyLock;

/// Locales the pages are rendered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    /// Japanese.
    Ja,
    /// English.
    En,
}

impl LocaleCode {
    /// All supported locales.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Ja, Self::En]
    }

    /// Two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
        }
    }

    /// Map a language tag (`ja`, `ja-JP`, `EN_us`) to a supported locale.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

/// Default locale; the site is written in Japanese.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::Ja;

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    locale: LocaleCode,
    tree: Value,
}

impl TranslationBundle {
    /// Build the bundle for `locale`.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let tree: Value = serde_json::from_str(raw_locale(locale)).unwrap_or(Value::Null);
        Self { locale, tree }
    }

    /// Resolve a dotted path (`section.key`) with default-locale fallback and
    /// caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&FALLBACK.tree, path))
            .unwrap_or_else(|| default.to_string())
    }

    /// Locale backing this bundle.
    #[must_use]
    pub const fn locale(&self) -> LocaleCode {
        self.locale
    }
}

static FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(DEFAULT_LOCALE));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::Ja => include_str!("../../i18n/ja.json"),
        LocaleCode::En => include_str!("../../i18n/en.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_falls_back_to_default() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(bundle.text("nonexistent.key", "fallback"), "fallback");
    }

    #[test]
    fn bundles_load_all_locales() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            assert_eq!(bundle.locale(), locale);
            assert!(!bundle.text("like.failed", "").is_empty());
        }
    }

    #[test]
    fn english_alert_differs_from_japanese() {
        assert_eq!(
            TranslationBundle::new(LocaleCode::En).text("like.failed", ""),
            "Something went wrong"
        );
        assert_eq!(
            TranslationBundle::new(LocaleCode::Ja).text("like.failed", ""),
            "エラーが発生しました"
        );
    }

    #[test]
    fn lang_tags_map_to_their_base_language() {
        assert_eq!(LocaleCode::from_lang_tag("ja-JP"), Some(LocaleCode::Ja));
        assert_eq!(LocaleCode::from_lang_tag("EN_us"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("fr"), None);
        assert_eq!(LocaleCode::from_lang_tag(""), None);
    }
}
