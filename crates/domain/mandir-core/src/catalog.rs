//! Static event and donation-cause listings.

use std::sync::OnceLock;

use crate::{DonationCause, Event};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no event with id '{0}'")]
    UnknownEvent(String),
    #[error("no donation cause with key '{0}'")]
    UnknownCause(String),
}

static EVENTS: OnceLock<Vec<Event>> = OnceLock::new();
static CAUSES: OnceLock<Vec<DonationCause>> = OnceLock::new();

pub fn events() -> &'static [Event] {
    EVENTS.get_or_init(|| {
        vec![
            Event {
                id: "evt-1".into(),
                day: "Fri".into(),
                date: "This Friday".into(),
                time: "6:30 PM".into(),
                title: "Bhajan & Satsang".into(),
                location: "Main Mandap".into(),
                highlight: "Community singing + satsang.".into(),
                featured: true,
            },
            Event {
                id: "evt-2".into(),
                day: "Sat".into(),
                date: "This Saturday".into(),
                time: "11:00 AM".into(),
                title: "Family Seva Morning".into(),
                location: "Community Hall".into(),
                highlight: "Volunteer seva teams welcome.".into(),
                featured: false,
            },
            Event {
                id: "evt-3".into(),
                day: "Sun".into(),
                date: "This Sunday".into(),
                time: "5:30 PM".into(),
                title: "Aarti + Prasad".into(),
                location: "Temple Hall".into(),
                highlight: "Join for evening aarti.".into(),
                featured: false,
            },
            Event {
                id: "evt-4".into(),
                day: "Wed".into(),
                date: "Next Week".into(),
                time: "7:00 AM".into(),
                title: "Surya Narayan Puja".into(),
                location: "Temple Hall".into(),
                highlight: "Special puja.".into(),
                featured: false,
            },
        ]
    })
}

pub fn donation_causes() -> &'static [DonationCause] {
    CAUSES.get_or_init(|| {
        [
            ("temple", "Temple Worship", "Daily puja, aarti, supplies, upkeep."),
            (
                "bhojan",
                "Bhojan Sponsorship",
                "Sponsor prasad / bhojan for devotees.",
            ),
            ("care", "Health & Care", "Support compassionate services and care."),
        ]
        .into_iter()
        .map(|(key, title, description)| DonationCause {
            key: key.into(),
            title: title.into(),
            description: description.into(),
        })
        .collect()
    })
}

pub fn find_event(id: &str) -> Result<&'static Event, CatalogError> {
    events()
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| CatalogError::UnknownEvent(id.to_string()))
}

pub fn find_cause(key: &str) -> Result<&'static DonationCause, CatalogError> {
    donation_causes()
        .iter()
        .find(|c| c.key == key)
        .ok_or_else(|| CatalogError::UnknownCause(key.to_string()))
}

/// The event every generic "Book" action opens: the featured one, else the first.
pub fn featured_or_first() -> &'static Event {
    let all = events();
    all.iter().find(|e| e.featured).unwrap_or(&all[0])
}
