// SPDX-License-Identifier: MPL-2.0
//! `toast_dispatch` builds toast notifications for a UI frontend.
//!
//! It assembles success and error records, localizes error titles with
//! Fluent, extracts readable descriptions from error values, and hands the
//! result to a notification store.

pub mod config;
pub mod error;
pub mod i18n;
pub mod notifications;
