// SPDX-License-Identifier: MPL-2.0
//! Toast factory.
//!
//! Records are built by layering caller-supplied [`ToastFields`] over a
//! fixed [`ToastDefaults`] base. Any field set on the overrides wins.

use super::notification::{NotificationRecord, ToastType};

/// Base values for one toast type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastDefaults {
    pub kind: ToastType,
    pub timer: u32,
}

impl ToastDefaults {
    pub const SUCCESS: Self = Self::for_type(ToastType::Success);
    pub const ERROR: Self = Self::for_type(ToastType::Error);

    const fn for_type(kind: ToastType) -> Self {
        Self {
            kind,
            timer: kind.default_timer_ms(),
        }
    }
}

/// Caller-supplied toast content. `None` keeps the base value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastFields {
    pub kind: Option<ToastType>,
    pub timer: Option<u32>,
    pub title: String,
    pub description: Option<String>,
}

impl ToastFields {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    #[must_use]
    pub fn with_timer(mut self, timer: u32) -> Self {
        self.timer = Some(timer);
        self
    }

    #[must_use]
    pub fn with_type(mut self, kind: ToastType) -> Self {
        self.kind = Some(kind);
        self
    }
}

/// Builds a record from `base`, then applies each field set in `overrides`.
pub fn apply_defaults(base: ToastDefaults, overrides: ToastFields) -> NotificationRecord {
    if overrides.title.is_empty() {
        log::warn!("Building a {} toast with an empty title", overrides.kind.unwrap_or(base.kind));
    }
    NotificationRecord {
        kind: overrides.kind.unwrap_or(base.kind),
        title: overrides.title,
        description: overrides.description,
        timer: overrides.timer.unwrap_or(base.timer),
    }
}

pub fn build_success_toast(fields: ToastFields) -> NotificationRecord {
    apply_defaults(ToastDefaults::SUCCESS, fields)
}

pub fn build_error_toast(fields: ToastFields) -> NotificationRecord {
    apply_defaults(ToastDefaults::ERROR, fields)
}
