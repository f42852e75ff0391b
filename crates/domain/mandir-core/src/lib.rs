use serde::{Deserialize, Serialize};

pub mod booking;
pub mod catalog;
pub mod dialog;
pub mod hours;

pub use booking::{BookingDraft, BookingSubmission, DraftField, FieldRejected};
pub use catalog::CatalogError;
pub use dialog::{BookingDialog, DismissReason};

pub type EventId = String;

/// A scheduled happening offered for booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    /// Short weekday label, e.g. "Fri".
    pub day: String,
    /// Human date, e.g. "This Friday".
    pub date: String,
    pub time: String,
    pub title: String,
    pub location: String,
    pub highlight: String,
    #[serde(default)]
    pub featured: bool,
}

impl Event {
    /// "Fri • 6:30 PM • Main Mandap"
    pub fn schedule_line(&self) -> String {
        format!("{} • {} • {}", self.day, self.time, self.location)
    }
}

/// A seva that donations can be directed to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DonationCause {
    pub key: String,
    pub title: String,
    pub description: String,
}
