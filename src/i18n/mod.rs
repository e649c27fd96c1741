// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for notification titles.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Automatic locale detection from an explicit argument, config, or system settings
//! - Embedded `.ftl` translation files
//! - Runtime language switching
//! - Dotted `group.attribute` keys mapped onto Fluent message attributes

pub mod fluent;

pub use fluent::I18n;

/// Resolves a translation key to display text.
pub trait Translate {
    fn tr(&self, key: &str) -> String;
}

impl<T: Translate + ?Sized> Translate for &T {
    fn tr(&self, key: &str) -> String {
        (**self).tr(key)
    }
}
