pub mod booking_modal;
pub mod causes;
pub mod events;
pub mod footer;
pub mod header;

use mandir_core::EventId;

/// Intents raised while drawing the page body; the app turns them into commands.
#[derive(Debug, Default)]
pub struct PageResponse {
    pub book: Option<EventId>,
    pub book_default: bool,
    /// Cause key of the Donate button pressed.
    pub donate: Option<String>,
}
