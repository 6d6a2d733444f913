//! Behavior configuration read from data attributes on the bound root.
//!
//! # Design
//! - Parsing is DOM-free: callers pass `(attribute, value)` pairs and the
//!   document `lang`, so the rules are testable natively.
//! - Unknown attributes are ignored; malformed flag values are errors.

use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use pakapaka_api_models::LIKE_POST_ENDPOINT;
use thiserror::Error;

/// Root attribute overriding the like endpoint prefix.
pub const LIKE_ENDPOINT_ATTR: &str = "data-like-endpoint";
/// Root attribute overriding the alert locale.
pub const LOCALE_ATTR: &str = "data-locale";
/// Root attribute toggling HTTP status checks on like responses.
pub const STRICT_STATUS_ATTR: &str = "data-strict-status";
/// Root attribute toggling stale like response suppression.
pub const IGNORE_STALE_ATTR: &str = "data-ignore-stale";

/// Every attribute [`UiConfig::from_attributes`] understands.
pub const CONFIG_ATTRIBUTES: [&str; 4] = [
    LIKE_ENDPOINT_ATTR,
    LOCALE_ATTR,
    STRICT_STATUS_ATTR,
    IGNORE_STALE_ATTR,
];

/// Configuration attribute failures.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Attribute value could not be interpreted.
    #[error("invalid value `{value}` for `{attribute}`")]
    InvalidField {
        /// Attribute carrying the value.
        attribute: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Settings shared by every behavior bound under one root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// Like route prefix, without a trailing `/`.
    pub like_endpoint: String,
    /// Locale of the failure alert.
    pub locale: LocaleCode,
    /// Reject non-2xx like responses before parsing them.
    pub strict_status: bool,
    /// Drop like responses superseded by a newer click on the same post.
    pub ignore_stale: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            like_endpoint: LIKE_POST_ENDPOINT.to_string(),
            locale: DEFAULT_LOCALE,
            strict_status: true,
            ignore_stale: true,
        }
    }
}

impl UiConfig {
    /// Build a configuration from root attributes and the document language.
    ///
    /// An explicit `data-locale` wins over `document_lang`; tags that name an
    /// unsupported language fall back to the default locale.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidField`] for a flag that is not a boolean
    /// or an endpoint that is not an absolute path or URL.
    pub fn from_attributes<'a, I>(
        attributes: I,
        document_lang: Option<&str>,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        let mut locale_set = false;
        for (attribute, value) in attributes {
            match attribute {
                LIKE_ENDPOINT_ATTR => config.like_endpoint = parse_endpoint(value)?,
                LOCALE_ATTR => {
                    config.locale = LocaleCode::from_lang_tag(value).unwrap_or(DEFAULT_LOCALE);
                    locale_set = true;
                }
                STRICT_STATUS_ATTR => config.strict_status = parse_flag(STRICT_STATUS_ATTR, value)?,
                IGNORE_STALE_ATTR => config.ignore_stale = parse_flag(IGNORE_STALE_ATTR, value)?,
                _ => {}
            }
        }
        if !locale_set {
            if let Some(locale) = document_lang.and_then(LocaleCode::from_lang_tag) {
                config.locale = locale;
            }
        }
        Ok(config)
    }
}

fn parse_flag(attribute: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidField {
            attribute,
            value: value.to_string(),
        }),
    }
}

fn parse_endpoint(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    let absolute = trimmed.starts_with('/')
        || trimmed.starts_with("http://")
        || trimmed.starts_with("https://");
    if !absolute {
        return Err(ConfigError::InvalidField {
            attribute: LIKE_ENDPOINT_ATTR,
            value: value.to_string(),
        });
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_legacy_page() {
        let config = UiConfig::from_attributes([], None).expect("config");
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.like_endpoint, "/like-post");
        assert_eq!(config.locale, LocaleCode::Ja);
        assert!(config.strict_status);
        assert!(config.ignore_stale);
    }

    #[test]
    fn attributes_override_defaults() {
        let config = UiConfig::from_attributes(
            [
                (LIKE_ENDPOINT_ATTR, "/api/like-post/"),
                (LOCALE_ATTR, "en-US"),
                (STRICT_STATUS_ATTR, "off"),
                (IGNORE_STALE_ATTR, "FALSE"),
                ("data-unrelated", "whatever"),
            ],
            None,
        )
        .expect("config");
        assert_eq!(config.like_endpoint, "/api/like-post");
        assert_eq!(config.locale, LocaleCode::En);
        assert!(!config.strict_status);
        assert!(!config.ignore_stale);
    }

    #[test]
    fn explicit_locale_wins_over_document_lang() {
        let config =
            UiConfig::from_attributes([(LOCALE_ATTR, "ja")], Some("en")).expect("config");
        assert_eq!(config.locale, LocaleCode::Ja);
        let config = UiConfig::from_attributes([], Some("en")).expect("config");
        assert_eq!(config.locale, LocaleCode::En);
    }

    #[test]
    fn unsupported_locale_falls_back() {
        let config = UiConfig::from_attributes([(LOCALE_ATTR, "fr")], None).expect("config");
        assert_eq!(config.locale, DEFAULT_LOCALE);
        let config = UiConfig::from_attributes([], Some("de")).expect("config");
        assert_eq!(config.locale, DEFAULT_LOCALE);
    }

    #[test]
    fn malformed_flag_is_rejected() {
        let err = UiConfig::from_attributes([(STRICT_STATUS_ATTR, "maybe")], None)
            .expect_err("invalid");
        assert_eq!(
            err,
            ConfigError::InvalidField {
                attribute: STRICT_STATUS_ATTR,
                value: "maybe".into()
            }
        );
    }

    #[test]
    fn relative_endpoint_is_rejected() {
        assert!(UiConfig::from_attributes([(LIKE_ENDPOINT_ATTR, "like-post")], None).is_err());
        let config = UiConfig::from_attributes(
            [(LIKE_ENDPOINT_ATTR, "https://pakapaka.example/like-post")],
            None,
        )
        .expect("config");
        assert_eq!(config.like_endpoint, "https://pakapaka.example/like-post");
    }
}
