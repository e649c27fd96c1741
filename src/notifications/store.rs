// SPDX-License-Identifier: MPL-2.0
//! Dispatch of built records to a notification store.
//!
//! [`Dispatch`] is the seam the notifier talks to. [`ToastStore`] is a plain
//! in-memory store that appends every record it receives; display limits and
//! dismissal belong to whatever renders the toasts.

use super::notification::{NotificationId, NotificationRecord};

/// Accepts a record and makes it visible to the user.
pub trait Dispatch {
    /// Whatever the store hands back for a dispatched record.
    type Receipt;

    fn dispatch(&mut self, record: NotificationRecord) -> Self::Receipt;
}

impl<D: Dispatch + ?Sized> Dispatch for &mut D {
    type Receipt = D::Receipt;

    fn dispatch(&mut self, record: NotificationRecord) -> Self::Receipt {
        (**self).dispatch(record)
    }
}

/// Append-only store of dispatched records, oldest first.
#[derive(Debug, Default)]
pub struct ToastStore {
    records: Vec<(NotificationId, NotificationRecord)>,
    next_id: u64,
}

impl ToastStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored records in dispatch order.
    pub fn records(&self) -> impl Iterator<Item = &NotificationRecord> {
        self.records.iter().map(|(_, record)| record)
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&NotificationRecord> {
        self.records
            .iter()
            .find(|(stored, _)| *stored == id)
            .map(|(_, record)| record)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Removes and returns all records. Identifiers are not reused.
    pub fn drain(&mut self) -> Vec<(NotificationId, NotificationRecord)> {
        std::mem::take(&mut self.records)
    }
}

impl Dispatch for ToastStore {
    type Receipt = NotificationId;

    fn dispatch(&mut self, record: NotificationRecord) -> NotificationId {
        let id = NotificationId::new(self.next_id);
        self.next_id += 1;
        log::debug!(
            "Dispatching {} toast {id} \"{}\" ({}ms)",
            record.kind,
            record.title,
            record.timer
        );
        self.records.push((id, record));
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::toast::{build_error_toast, build_success_toast, ToastFields};

    #[test]
    fn new_store_is_empty() {
        let store = ToastStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn dispatch_appends_in_order() {
        let mut store = ToastStore::new();
        store.dispatch(build_success_toast(ToastFields::titled("first")));
        store.dispatch(build_error_toast(ToastFields::titled("second")));

        let titles: Vec<&str> = store.records().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn dispatch_returns_distinct_ids() {
        let mut store = ToastStore::new();
        let a = store.dispatch(build_success_toast(ToastFields::titled("same")));
        let b = store.dispatch(build_success_toast(ToastFields::titled("same")));

        assert_ne!(a, b);
        assert_eq!(store.get(a), store.get(b));
    }

    #[test]
    fn get_unknown_id_returns_none() {
        let mut store = ToastStore::new();
        let id = store.dispatch(build_success_toast(ToastFields::titled("x")));
        store.drain();
        assert!(store.get(id).is_none());
    }

    #[test]
    fn drain_empties_without_reusing_ids() {
        let mut store = ToastStore::new();
        let first = store.dispatch(build_success_toast(ToastFields::titled("x")));
        let drained = store.drain();

        assert_eq!(drained.len(), 1);
        assert!(store.is_empty());

        let second = store.dispatch(build_success_toast(ToastFields::titled("y")));
        assert_ne!(first, second);
    }

    #[test]
    fn mutable_reference_dispatches_into_the_store() {
        fn send<D: Dispatch>(mut dispatcher: D, record: NotificationRecord) -> D::Receipt {
            dispatcher.dispatch(record)
        }

        let mut store = ToastStore::new();
        let id = send(&mut store, build_success_toast(ToastFields::titled("via ref")));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id).map(|r| r.title.as_str()), Some("via ref"));
    }
}
