// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for toast notifications.
//!
//! # Categories
//!
//! - **Timers**: Display duration per toast type
//! - **Locale**: Fallback language
//! - **Keys**: Translation keys for error titles

// ==========================================================================
// Timer Defaults
// ==========================================================================

/// Display duration of a success toast (in milliseconds).
pub const SUCCESS_TIMER_MS: u32 = 3000;

/// Display duration of an error toast (in milliseconds).
pub const ERROR_TIMER_MS: u32 = 5000;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither the caller, the config nor the OS picks one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Translation Keys
// ==========================================================================

/// Title of the toast shown when creating an item fails.
pub const CREATE_ERROR_KEY: &str = "notifications.createError";

/// Title of the toast shown when updating an item fails.
pub const UPDATE_ERROR_KEY: &str = "notifications.updateError";

/// Title of the toast shown when removing an item fails.
pub const REMOVE_ERROR_KEY: &str = "notifications.removeError";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(SUCCESS_TIMER_MS > 0);
    // Errors stay on screen longer than successes
    assert!(ERROR_TIMER_MS > SUCCESS_TIMER_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_defaults_are_valid() {
        assert_eq!(SUCCESS_TIMER_MS, 3000);
        assert_eq!(ERROR_TIMER_MS, 5000);
    }

    #[test]
    fn error_keys_are_distinct_and_grouped() {
        let keys = [CREATE_ERROR_KEY, UPDATE_ERROR_KEY, REMOVE_ERROR_KEY];
        for key in keys {
            assert!(key.starts_with("notifications."));
        }
        assert_ne!(CREATE_ERROR_KEY, UPDATE_ERROR_KEY);
        assert_ne!(UPDATE_ERROR_KEY, REMOVE_ERROR_KEY);
        assert_ne!(CREATE_ERROR_KEY, REMOVE_ERROR_KEY);
    }

    #[test]
    fn default_locale_parses() {
        assert!(DEFAULT_LOCALE
            .parse::<unic_langid::LanguageIdentifier>()
            .is_ok());
    }
}
