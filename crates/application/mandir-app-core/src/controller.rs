use std::sync::Arc;

use mandir_core::{catalog, BookingSubmission, DismissReason, DraftField, Event};

use crate::app_core::{AppStore, DomainEvent};
use crate::ports::BookingSink;

/// Drives the booking dialog through the store and reports confirmations to a [`BookingSink`].
///
/// Every transition runs synchronously to completion on the caller's thread.
pub struct BookingDialogController<K> {
    store: AppStore,
    sink: Arc<K>,
}

impl<K: BookingSink> BookingDialogController<K> {
    pub fn new(store: AppStore, sink: K) -> Self {
        Self {
            store,
            sink: Arc::new(sink),
        }
    }

    pub fn is_open(&self) -> bool {
        self.store.with_state(|s| s.booking.is_open())
    }

    pub fn open(&self, event: Event) {
        tracing::debug!(event_id = %event.id, "booking dialog opened");
        self.store.apply(DomainEvent::BookingOpened(event));
    }

    /// Opens the dialog for the featured event (or the first one listed).
    pub fn open_default(&self) {
        self.open(catalog::featured_or_first().clone());
    }

    pub fn set_field(&self, field: DraftField) {
        self.store.apply(DomainEvent::BookingFieldEdited(field));
    }

    pub fn cancel(&self) {
        if self.is_open() {
            tracing::debug!("booking cancelled");
            self.store.apply(DomainEvent::BookingCancelled);
        }
    }

    pub fn dismiss(&self, reason: DismissReason) {
        if self.is_open() {
            tracing::debug!(?reason, "booking dismissed");
            self.store.apply(DomainEvent::BookingDismissed(reason));
        }
    }

    /// Emits the submission to the sink, then closes the dialog. Returns `None` when closed.
    pub fn confirm(&self) -> Option<BookingSubmission> {
        let submission = self
            .store
            .with_state(|s| s.booking.draft().map(|d| d.to_submission()))?;

        tracing::info!(
            event_id = %submission.event_id,
            party_size = submission.party_size,
            donation = submission.donation_amount,
            "booking confirmed"
        );
        self.sink.on_confirm(submission.clone());
        self.store
            .apply(DomainEvent::BookingConfirmed(submission.clone()));
        Some(submission)
    }
}
