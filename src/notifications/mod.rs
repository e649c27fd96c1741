// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! # Components
//!
//! - [`notification`] - `NotificationRecord` and `ToastType`
//! - [`toast`] - Toast factory layering caller fields over per-type defaults
//! - [`extract`] - Error-to-description extraction
//! - [`store`] - `Dispatch` seam and an in-memory `ToastStore`
//! - [`notifier`] - `Notifier` tying translation, extraction and dispatch together
//!
//! # Usage
//!
//! ```
//! use toast_dispatch::config::Config;
//! use toast_dispatch::i18n::I18n;
//! use toast_dispatch::notifications::{ChainExtractor, Notifier, ToastStore};
//!
//! let i18n = I18n::new(Some("en-US".to_string()), &Config::default()).unwrap();
//! let mut notifier = Notifier::new(&i18n, ChainExtractor, ToastStore::new());
//!
//! notifier.notify_success("Item saved");
//! let err = std::io::Error::other("connection reset");
//! notifier.notify_create_error(Some(&err));
//!
//! assert_eq!(notifier.dispatcher().len(), 2);
//! ```
//!
//! # Timers
//!
//! - Success: 3s
//! - Error: 5s
//! - Either can be overridden per toast through [`ToastFields`]

pub mod extract;
pub mod notification;
pub mod notifier;
pub mod store;
pub mod toast;

pub use extract::{ChainExtractor, ExtractError};
pub use notification::{NotificationId, NotificationRecord, ToastType};
pub use notifier::{ErrorCategory, Notifier};
pub use store::{Dispatch, ToastStore};
pub use toast::{apply_defaults, build_error_toast, build_success_toast, ToastDefaults, ToastFields};
