use mandir_core::{DismissReason, DraftField, EventId};

use crate::domain::HomepageVariant;

#[derive(Debug, Clone)]
pub enum AppCommand {
    // Boot
    LoadInitialState,

    // Page
    SelectVariant(HomepageVariant),
    RequestDonation { cause_key: String },
    DismissError,

    // Booking dialog
    OpenBooking(EventId),
    OpenDefaultBooking,
    EditBookingField(DraftField),
    CancelBooking,
    DismissBooking(DismissReason),
    ConfirmBooking,
}
