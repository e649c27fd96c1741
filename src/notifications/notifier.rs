// SPDX-License-Identifier: MPL-2.0
//! Success and error toasts for create/update/remove operations.

use super::extract::ExtractError;
use super::notification::NotificationRecord;
use super::store::Dispatch;
use super::toast::{build_error_toast, build_success_toast, ToastFields};
use crate::config::defaults::{CREATE_ERROR_KEY, REMOVE_ERROR_KEY, UPDATE_ERROR_KEY};
use crate::i18n::Translate;
use std::error::Error;

/// Operation whose failure is being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Create,
    Update,
    Remove,
}

impl ErrorCategory {
    /// Returns the i18n key of the toast title for this category.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ErrorCategory::Create => CREATE_ERROR_KEY,
            ErrorCategory::Update => UPDATE_ERROR_KEY,
            ErrorCategory::Remove => REMOVE_ERROR_KEY,
        }
    }

    /// Resolves the localized toast title.
    pub fn title(self, translator: &impl Translate) -> String {
        translator.tr(self.i18n_key())
    }
}

/// Builds toasts and hands them to a dispatcher.
///
/// Holds no state of its own between calls: the same inputs always
/// produce the same record.
#[derive(Debug)]
pub struct Notifier<T, X, D> {
    translator: T,
    extractor: X,
    dispatcher: D,
}

impl<T, X, D> Notifier<T, X, D>
where
    T: Translate,
    X: ExtractError,
    D: Dispatch,
{
    pub fn new(translator: T, extractor: X, dispatcher: D) -> Self {
        Self {
            translator,
            extractor,
            dispatcher,
        }
    }

    /// Dispatches a success toast with the given title.
    pub fn notify_success(&mut self, title: impl Into<String>) -> D::Receipt {
        self.dispatcher.dispatch(build_success_toast(ToastFields::titled(title)))
    }

    pub fn notify_create_error(&mut self, error: Option<&(dyn Error + 'static)>) -> D::Receipt {
        self.notify_error_for(ErrorCategory::Create, error)
    }

    pub fn notify_update_error(&mut self, error: Option<&(dyn Error + 'static)>) -> D::Receipt {
        self.notify_error_for(ErrorCategory::Update, error)
    }

    pub fn notify_remove_error(&mut self, error: Option<&(dyn Error + 'static)>) -> D::Receipt {
        self.notify_error_for(ErrorCategory::Remove, error)
    }

    /// Dispatches an error toast titled for `category`.
    pub fn notify_error_for(
        &mut self,
        category: ErrorCategory,
        error: Option<&(dyn Error + 'static)>,
    ) -> D::Receipt {
        let title = category.title(&self.translator);
        self.notify_error(title, error)
    }

    /// Dispatches an error toast with a caller-supplied title.
    ///
    /// The description is the extractor's text for `error`, or absent
    /// when no error is given.
    pub fn notify_error(
        &mut self,
        title: impl Into<String>,
        error: Option<&(dyn Error + 'static)>,
    ) -> D::Receipt {
        let record = self.error_record(title.into(), error);
        self.dispatcher.dispatch(record)
    }

    fn error_record(
        &self,
        title: String,
        error: Option<&(dyn Error + 'static)>,
    ) -> NotificationRecord {
        let description = error.map(|err| self.extractor.extract(err));
        build_error_toast(ToastFields::titled(title).with_description(description))
    }

    #[must_use]
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut D {
        &mut self.dispatcher
    }

    #[must_use]
    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Gives back the translator, extractor and dispatcher.
    pub fn into_parts(self) -> (T, X, D) {
        (self.translator, self.extractor, self.dispatcher)
    }
}
