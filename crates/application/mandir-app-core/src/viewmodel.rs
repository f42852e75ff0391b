use chrono::NaiveTime;

use mandir_config::{
    DONATION_AMOUNTS, OPENING_HOURS_LABEL, PARTY_SIZE_MAX, PARTY_SIZE_MIN,
};
use mandir_core::{catalog, hours, BookingSubmission, DonationCause, Event, EventId};

use crate::domain::{AppState, HomepageVariant};

fn format_amount(amount: u32) -> String {
    format!("${amount}")
}

fn attendees_label(n: u8) -> String {
    if n == 1 {
        "1 attendee".into()
    } else {
        format!("{n} attendees")
    }
}

// --- Page shell ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Events,
    Book,
    Donate,
    /// Placeholder link with no destination in the mockup.
    Inert,
}

#[derive(Debug, Clone)]
pub struct NavItemVm {
    pub label: &'static str,
    pub target: NavTarget,
}

pub fn nav_items() -> Vec<NavItemVm> {
    [
        ("Events", NavTarget::Events),
        ("Book", NavTarget::Book),
        ("Donate", NavTarget::Donate),
        ("Daily Puja", NavTarget::Inert),
        ("Announcements", NavTarget::Inert),
        ("Gallery", NavTarget::Inert),
        ("Watch", NavTarget::Inert),
    ]
    .into_iter()
    .map(|(label, target)| NavItemVm { label, target })
    .collect()
}

#[derive(Debug, Clone)]
pub struct VariantBannerVm {
    pub variant: HomepageVariant,
    pub heading: &'static str,
    pub text: &'static str,
}

pub fn variant_banner_vm(state: &AppState) -> VariantBannerVm {
    let (heading, text) = match state.variant {
        HomepageVariant::A => (
            "Demo A:",
            "Evolutionary refresh — Events, Book, Donate are all top priority.",
        ),
        HomepageVariant::B => (
            "Demo B:",
            "Radical ‘Live Mandir’ — guided flow: Events → Book → Donate, with booking visible in the demo.",
        ),
    };
    VariantBannerVm {
        variant: state.variant,
        heading,
        text,
    }
}

// --- Events & causes ---

#[derive(Debug, Clone)]
pub struct EventCardVm {
    pub id: EventId,
    pub day: String,
    pub date: String,
    pub title: String,
    pub schedule: String,
    pub highlight: String,
    pub featured: bool,
}

impl From<&Event> for EventCardVm {
    fn from(e: &Event) -> Self {
        Self {
            id: e.id.clone(),
            day: e.day.clone(),
            date: e.date.clone(),
            title: e.title.clone(),
            schedule: e.schedule_line(),
            highlight: e.highlight.clone(),
            featured: e.featured,
        }
    }
}

pub fn events_vm() -> Vec<EventCardVm> {
    catalog::events().iter().map(EventCardVm::from).collect()
}

pub fn featured_event_vm() -> EventCardVm {
    EventCardVm::from(catalog::featured_or_first())
}

#[derive(Debug, Clone)]
pub struct DonationCauseVm {
    pub key: String,
    pub title: String,
    pub description: String,
    /// External link for the Donate button, when one is configured.
    pub url: Option<String>,
}

pub fn donation_causes_vm(state: &AppState) -> Vec<DonationCauseVm> {
    catalog::donation_causes()
        .iter()
        .map(|c: &DonationCause| DonationCauseVm {
            key: c.key.clone(),
            title: c.title.clone(),
            description: c.description.clone(),
            url: state.settings.donation_url.clone(),
        })
        .collect()
}

// --- Live status (Demo B) ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveStatusVm {
    pub is_open: bool,
    pub label: &'static str,
    pub hours: &'static str,
}

pub fn live_status_vm(now: NaiveTime) -> LiveStatusVm {
    let is_open = hours::is_open_at(now);
    LiveStatusVm {
        is_open,
        label: if is_open { "Open now" } else { "Closed now" },
        hours: OPENING_HOURS_LABEL,
    }
}

// --- Booking dialog ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationOptionVm {
    pub amount: u32,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct BookingDialogVm {
    pub title: String,
    pub schedule: String,
    pub attendee_name: String,
    pub attendee_email: String,
    pub attendee_phone: String,
    pub party_size: u8,
    pub party_size_options: Vec<u8>,
    pub include_donation: bool,
    /// Empty while the donation add-on is switched off.
    pub donation_options: Vec<DonationOptionVm>,
    pub summary: String,
}

pub fn booking_dialog_vm(state: &AppState) -> Option<BookingDialogVm> {
    let draft = state.booking.draft()?;
    let event = &draft.selected_event;

    let donation_options = if draft.include_donation {
        DONATION_AMOUNTS
            .iter()
            .map(|&amount| DonationOptionVm {
                amount,
                label: format_amount(amount),
                selected: amount == draft.donation_amount(),
            })
            .collect()
    } else {
        Vec::new()
    };

    let mut summary = attendees_label(draft.party_size());
    if draft.include_donation {
        summary.push_str(&format!(
            " • {} donation",
            format_amount(draft.effective_donation())
        ));
    }

    Some(BookingDialogVm {
        title: event.title.clone(),
        schedule: event.schedule_line(),
        attendee_name: draft.attendee_name.clone(),
        attendee_email: draft.attendee_email.clone(),
        attendee_phone: draft.attendee_phone.clone(),
        party_size: draft.party_size(),
        party_size_options: (PARTY_SIZE_MIN..=PARTY_SIZE_MAX).collect(),
        include_donation: draft.include_donation,
        donation_options,
        summary,
    })
}

/// One-line notice shown after a booking is confirmed.
pub fn confirmation_notice(state: &AppState) -> Option<String> {
    let s: &BookingSubmission = state.last_submission.as_ref()?;
    let title = catalog::find_event(&s.event_id)
        .map(|e| e.title.as_str())
        .unwrap_or(s.event_id.as_str());
    let mut line = format!("Booked {title} for {}", attendees_label(s.party_size));
    if s.donation_amount > 0 {
        line.push_str(&format!(" with a {} donation", format_amount(s.donation_amount)));
    }
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_core::{reduce, DomainEvent};
    use mandir_core::DraftField;

    fn open(state: AppState, id: &str) -> AppState {
        let event = catalog::find_event(id).unwrap().clone();
        reduce(state, DomainEvent::BookingOpened(event))
    }

    #[test]
    fn closed_dialog_has_no_view_model() {
        assert!(booking_dialog_vm(&AppState::default()).is_none());
    }

    #[test]
    fn dialog_vm_marks_the_selected_amount() {
        let state = open(AppState::default(), "evt-3");
        let vm = booking_dialog_vm(&state).unwrap();

        assert_eq!(vm.title, "Aarti + Prasad");
        assert_eq!(vm.schedule, "Sun • 5:30 PM • Temple Hall");
        assert_eq!(vm.party_size_options.len(), 10);
        let selected: Vec<_> = vm
            .donation_options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(selected, ["$25"]);
        assert_eq!(vm.summary, "1 attendee • $25 donation");
    }

    #[test]
    fn amount_choices_hide_when_donation_is_off() {
        let state = open(AppState::default(), "evt-1");
        let state = reduce(
            state,
            DomainEvent::BookingFieldEdited(DraftField::IncludeDonation(false)),
        );
        let vm = booking_dialog_vm(&state).unwrap();
        assert!(vm.donation_options.is_empty());
        assert_eq!(vm.summary, "1 attendee");
    }

    #[test]
    fn live_status_follows_opening_hours() {
        let morning = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
        let evening = NaiveTime::from_hms_opt(19, 45, 0).unwrap();
        assert_eq!(live_status_vm(morning).label, "Closed now");
        assert!(live_status_vm(evening).is_open);
    }

    #[test]
    fn confirmation_notice_names_the_event() {
        let state = open(AppState::default(), "evt-2");
        let submission = state.booking.draft().unwrap().to_submission();
        let state = reduce(state, DomainEvent::BookingConfirmed(submission));
        assert_eq!(
            confirmation_notice(&state).as_deref(),
            Some("Booked Family Seva Morning for 1 attendee with a $25 donation")
        );
    }

    #[test]
    fn cause_cards_carry_the_configured_donation_link() {
        let mut state = AppState::default();
        assert!(donation_causes_vm(&state).iter().all(|c| c.url.is_none()));

        state.settings.donation_url = Some("https://example.org/give".into());
        let causes = donation_causes_vm(&state);
        assert_eq!(causes.len(), 3);
        assert!(causes
            .iter()
            .all(|c| c.url.as_deref() == Some("https://example.org/give")));
    }

    #[test]
    fn banner_follows_variant() {
        let mut state = AppState::default();
        assert_eq!(variant_banner_vm(&state).heading, "Demo B:");
        state.variant = HomepageVariant::A;
        assert_eq!(variant_banner_vm(&state).heading, "Demo A:");
    }
}
