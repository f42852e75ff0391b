//! Open/closed lifecycle of the booking dialog.

use crate::booking::{BookingDraft, BookingSubmission, DraftField, FieldRejected};
use crate::Event;

/// What closed the dialog without confirming. Both behave identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// Click on the area outside the dialog.
    Backdrop,
    /// The cancellation key (Escape).
    CancelKey,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BookingDialog {
    #[default]
    Closed,
    Open(BookingDraft),
}

impl BookingDialog {
    pub fn is_open(&self) -> bool {
        matches!(self, BookingDialog::Open(_))
    }

    pub fn draft(&self) -> Option<&BookingDraft> {
        match self {
            BookingDialog::Open(d) => Some(d),
            BookingDialog::Closed => None,
        }
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.draft().map(|d| &d.selected_event)
    }

    /// Starts a fresh attempt for `event`, discarding any draft in progress.
    pub fn open(&mut self, event: Event) {
        *self = BookingDialog::Open(BookingDraft::new(event));
    }

    /// No-op while closed.
    pub fn set_field(&mut self, field: DraftField) -> Result<(), FieldRejected> {
        match self {
            BookingDialog::Open(d) => d.apply(field),
            BookingDialog::Closed => Ok(()),
        }
    }

    /// Returns whether a draft was discarded.
    pub fn cancel(&mut self) -> bool {
        let was_open = self.is_open();
        *self = BookingDialog::Closed;
        was_open
    }

    pub fn dismiss(&mut self, _reason: DismissReason) -> bool {
        self.cancel()
    }

    /// Closes the dialog and hands back the submission snapshot, if it was open.
    pub fn confirm(&mut self) -> Option<BookingSubmission> {
        match std::mem::take(self) {
            BookingDialog::Open(d) => Some(d.to_submission()),
            BookingDialog::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn confirm_while_closed_emits_nothing() {
        let mut dialog = BookingDialog::default();
        assert_eq!(dialog.confirm(), None);
        assert!(!dialog.cancel());
        assert!(dialog.set_field(DraftField::PartySize(99)).is_ok());
        assert_eq!(dialog, BookingDialog::Closed);
    }

    #[test]
    fn reopening_discards_previous_edits() {
        let events = catalog::events();
        let mut dialog = BookingDialog::default();
        dialog.open(events[0].clone());
        dialog
            .set_field(DraftField::AttendeeName("Asha".into()))
            .unwrap();
        dialog.set_field(DraftField::PartySize(6)).unwrap();

        dialog.open(events[2].clone());

        assert_eq!(
            dialog.draft(),
            Some(&BookingDraft::new(events[2].clone()))
        );
    }

    #[test]
    fn both_dismiss_reasons_close_the_dialog() {
        for reason in [DismissReason::Backdrop, DismissReason::CancelKey] {
            let mut dialog = BookingDialog::default();
            dialog.open(catalog::featured_or_first().clone());
            assert!(dialog.dismiss(reason));
            assert!(!dialog.is_open());
        }
    }
}
