use anyhow::{Context, Result};
use mandir_app_core::{AppState, AppStore, BookingDialogController, LogBookingSink};
use mandir_core::{catalog, BookingDraft, BookingSubmission, DraftField};

/// Form values for a scripted booking.
#[derive(Debug, Clone, Default)]
pub struct BookingArgs {
    pub event_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub party_size: Option<u32>,
    pub donation: Option<u32>,
    pub include_donation: bool,
}

impl BookingArgs {
    fn edits(&self) -> Vec<DraftField> {
        let mut edits = vec![
            DraftField::AttendeeName(self.name.clone()),
            DraftField::AttendeeEmail(self.email.clone()),
            DraftField::AttendeePhone(self.phone.clone()),
            DraftField::IncludeDonation(self.include_donation),
        ];
        if let Some(n) = self.party_size {
            edits.push(DraftField::PartySize(n));
        }
        if let Some(amount) = self.donation {
            edits.push(DraftField::DonationAmount(amount));
        }
        edits
    }
}

pub fn cmd_events() -> String {
    let mut out = String::new();
    for e in catalog::events() {
        let marker = if e.featured { " *" } else { "" };
        out.push_str(&format!(
            "{:<6} {:<22} {}{}\n",
            e.id,
            e.title,
            e.schedule_line(),
            marker
        ));
    }
    out
}

pub fn cmd_causes() -> String {
    let mut out = String::new();
    for c in catalog::donation_causes() {
        out.push_str(&format!("{:<7} {:<24} {}\n", c.key, c.title, c.description));
    }
    out
}

/// Runs one booking attempt through the dialog controller and returns what it emitted.
///
/// Values the form would reject fail the command instead of being silently dropped.
pub fn cmd_book(args: &BookingArgs) -> Result<BookingSubmission> {
    let event = catalog::find_event(&args.event_id)?;

    let edits = args.edits();
    let mut probe = BookingDraft::new(event.clone());
    for field in &edits {
        probe
            .apply(field.clone())
            .with_context(|| format!("Invalid value for {}", field.name()))?;
    }

    let store = AppStore::new(AppState::default());
    let controller = BookingDialogController::new(store, LogBookingSink);
    controller.open(event.clone());
    for field in edits {
        controller.set_field(field);
    }
    controller
        .confirm()
        .context("Booking dialog closed before confirmation")
}

pub fn submission_json(submission: &BookingSubmission) -> Result<String> {
    Ok(serde_json::to_string_pretty(submission)?)
}
