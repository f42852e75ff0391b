use mandir_core::{BookingSubmission, DismissReason, DraftField, Event};

use crate::domain::{AppSettings, HomepageVariant};

#[derive(Debug, Clone)]
pub enum DomainEvent {
    // Boot state
    BootLoadingStarted,
    InitialStateLoaded { settings: AppSettings },
    BootFailed { message: String },

    // Page
    VariantSelected(HomepageVariant),

    // Booking dialog
    BookingOpened(Event),
    BookingFieldEdited(DraftField),
    BookingCancelled,
    BookingDismissed(DismissReason),
    BookingConfirmed(BookingSubmission),

    // User-visible errors
    UserError(String),
    ErrorCleared,
}
