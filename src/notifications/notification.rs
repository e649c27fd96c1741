// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `NotificationRecord` handed to a store and the
//! `ToastType` that decides its default display duration.

use crate::config::defaults::{ERROR_TIMER_MS, SUCCESS_TIMER_MS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by a store to a dispatched record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Toast type; determines the default timer and the store's styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastType {
    /// Operation completed successfully (3s).
    Success,
    /// Operation failed (5s).
    Error,
}

impl ToastType {
    /// Returns the default display duration in milliseconds.
    #[must_use]
    pub const fn default_timer_ms(self) -> u32 {
        match self {
            ToastType::Success => SUCCESS_TIMER_MS,
            ToastType::Error => ERROR_TIMER_MS,
        }
    }
}

impl fmt::Display for ToastType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastType::Success => write!(f, "success"),
            ToastType::Error => write!(f, "error"),
        }
    }
}

/// One toast, as handed to the store.
///
/// Serializes to `{"type", "title", "timer"}` with `"description"` only
/// when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    #[serde(rename = "type")]
    pub kind: ToastType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display duration in milliseconds.
    pub timer: u32,
}
