use mandir_core::BookingSubmission;

use crate::domain::AppSettings;

pub trait SettingsRepo: Send + Sync + 'static {
    fn load(&self) -> anyhow::Result<AppSettings>;
    fn save(&self, settings: &AppSettings) -> anyhow::Result<()>;
}

/// Receives each confirmed booking. Wire this to the real booking engine.
pub trait BookingSink: Send + Sync + 'static {
    fn on_confirm(&self, submission: BookingSubmission);
}

/// Sink used by the demo front ends: records the submission in the log and drops it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogBookingSink;

impl BookingSink for LogBookingSink {
    fn on_confirm(&self, submission: BookingSubmission) {
        tracing::info!(
            event_id = %submission.event_id,
            party_size = submission.party_size,
            donation = submission.donation_amount,
            "booking submitted (demo only, not sent anywhere)"
        );
    }
}
