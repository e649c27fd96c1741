// SPDX-License-Identifier: MPL-2.0
use super::Translate;
use crate::config::defaults::DEFAULT_LOCALE;
use crate::config::Config;
use crate::error::{Error, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    /// Loads every embedded `.ftl` file and picks the active locale.
    ///
    /// `lang` takes precedence over `config.language`, which takes precedence
    /// over the OS locale. Falls back to [`DEFAULT_LOCALE`].
    pub fn new(lang: Option<String>, config: &Config) -> Result<Self> {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let locale: LanguageIdentifier = locale_str.parse()?;
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let bundle = build_bundle(locale.clone(), source)
                .map_err(|reason| Error::Locale(format!("{filename}: {reason}")))?;
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE.parse()?;
        let current_locale =
            resolve_locale(lang, config, &available_locales).unwrap_or(default_locale);

        Ok(Self {
            bundles,
            available_locales,
            current_locale,
        })
    }

    /// Switches the active locale. Unknown locales are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        } else {
            log::warn!("Locale {locale} is not available, keeping {}", self.current_locale);
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    #[must_use]
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// Resolves `key` in the active locale.
    ///
    /// `group.name` looks up attribute `name` of message `group`; a key
    /// without a dot looks up the message value.
    pub fn tr(&self, key: &str) -> String {
        if let Some(value) = self.lookup(key) {
            return value;
        }
        log::warn!("Missing translation for {key} in {}", self.current_locale);
        format!("MISSING: {}", key)
    }

    fn lookup(&self, key: &str) -> Option<String> {
        let bundle = self.bundles.get(&self.current_locale)?;
        let (id, attribute) = match key.split_once('.') {
            Some((id, attribute)) => (id, Some(attribute)),
            None => (key, None),
        };
        let msg = bundle.get_message(id)?;
        let pattern = match attribute {
            Some(name) => msg.get_attribute(name)?.value(),
            None => msg.value()?,
        };

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(value.to_string())
        } else {
            log::warn!("Failed to format {key}: {errors:?}");
            None
        }
    }
}

impl Translate for I18n {
    fn tr(&self, key: &str) -> String {
        I18n::tr(self, key)
    }
}

fn build_bundle(
    locale: LanguageIdentifier,
    source: String,
) -> std::result::Result<FluentBundle<FluentResource>, String> {
    let res = FluentResource::try_new(source)
        .map_err(|(_, errors)| format!("invalid FTL: {errors:?}"))?;
    let mut bundle = FluentBundle::new(vec![locale]);
    bundle.set_use_isolating(false);
    bundle
        .add_resource(res)
        .map_err(|errors| format!("conflicting messages: {errors:?}"))?;
    Ok(bundle)
}

fn resolve_locale(
    lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Explicit argument
    if let Some(lang_str) = lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Config file
    if let Some(lang_str) = &config.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}
