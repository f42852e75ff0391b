use serde::{Deserialize, Serialize};

use mandir_config::{
    is_offered_donation, is_valid_party_size, DEFAULT_DONATION_AMOUNT, DEFAULT_INCLUDE_DONATION,
    DEFAULT_PARTY_SIZE, DONATION_AMOUNTS, PARTY_SIZE_MAX, PARTY_SIZE_MIN,
};

use crate::{Event, EventId};

/// A value the booking form refused; the draft keeps its previous value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldRejected {
    #[error("party size {value} is outside {min}..={max}")]
    PartySizeOutOfRange { value: u32, min: u8, max: u8 },
    #[error("donation amount {value} is not one of {offered:?}")]
    DonationAmountNotOffered {
        value: u32,
        offered: &'static [u32],
    },
}

/// A single form edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    AttendeeName(String),
    AttendeeEmail(String),
    AttendeePhone(String),
    PartySize(u32),
    IncludeDonation(bool),
    DonationAmount(u32),
}

impl DraftField {
    pub fn name(&self) -> &'static str {
        match self {
            DraftField::AttendeeName(_) => "attendeeName",
            DraftField::AttendeeEmail(_) => "attendeeEmail",
            DraftField::AttendeePhone(_) => "attendeePhone",
            DraftField::PartySize(_) => "partySize",
            DraftField::IncludeDonation(_) => "includeDonation",
            DraftField::DonationAmount(_) => "donationAmount",
        }
    }
}

/// In-progress, uncommitted form state for one booking attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub selected_event: Event,
    pub attendee_name: String,
    pub attendee_email: String,
    pub attendee_phone: String,
    party_size: u8,
    pub include_donation: bool,
    donation_amount: u32,
}

impl BookingDraft {
    pub fn new(event: Event) -> Self {
        Self {
            selected_event: event,
            attendee_name: String::new(),
            attendee_email: String::new(),
            attendee_phone: String::new(),
            party_size: DEFAULT_PARTY_SIZE,
            include_donation: DEFAULT_INCLUDE_DONATION,
            donation_amount: DEFAULT_DONATION_AMOUNT,
        }
    }

    pub fn party_size(&self) -> u8 {
        self.party_size
    }

    /// Stored amount, regardless of `include_donation`.
    pub fn donation_amount(&self) -> u32 {
        self.donation_amount
    }

    /// Amount that would be submitted right now.
    pub fn effective_donation(&self) -> u32 {
        if self.include_donation {
            self.donation_amount
        } else {
            0
        }
    }

    pub fn apply(&mut self, field: DraftField) -> Result<(), FieldRejected> {
        match field {
            DraftField::AttendeeName(v) => self.attendee_name = v,
            DraftField::AttendeeEmail(v) => self.attendee_email = v,
            DraftField::AttendeePhone(v) => self.attendee_phone = v,
            DraftField::PartySize(v) => {
                let size = u8::try_from(v)
                    .ok()
                    .filter(|s| is_valid_party_size(*s))
                    .ok_or(FieldRejected::PartySizeOutOfRange {
                        value: v,
                        min: PARTY_SIZE_MIN,
                        max: PARTY_SIZE_MAX,
                    })?;
                self.party_size = size;
            }
            DraftField::IncludeDonation(v) => self.include_donation = v,
            DraftField::DonationAmount(v) => {
                if !is_offered_donation(v) {
                    return Err(FieldRejected::DonationAmountNotOffered {
                        value: v,
                        offered: &DONATION_AMOUNTS,
                    });
                }
                self.donation_amount = v;
            }
        }
        Ok(())
    }

    pub fn to_submission(&self) -> BookingSubmission {
        BookingSubmission {
            event_id: self.selected_event.id.clone(),
            attendee_name: self.attendee_name.clone(),
            attendee_email: self.attendee_email.clone(),
            attendee_phone: self.attendee_phone.clone(),
            party_size: self.party_size,
            donation_amount: self.effective_donation(),
        }
    }
}

/// Finalized payload handed to the booking engine on confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    pub event_id: EventId,
    pub attendee_name: String,
    pub attendee_email: String,
    pub attendee_phone: String,
    pub party_size: u8,
    pub donation_amount: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn draft() -> BookingDraft {
        BookingDraft::new(catalog::events()[1].clone())
    }

    #[test]
    fn new_draft_uses_documented_defaults() {
        let d = draft();
        assert_eq!(d.selected_event.id, "evt-2");
        assert_eq!(d.party_size(), 1);
        assert!(d.include_donation);
        assert_eq!(d.donation_amount(), 25);
        assert!(d.attendee_name.is_empty());
        assert!(d.attendee_email.is_empty());
        assert!(d.attendee_phone.is_empty());
    }

    #[test]
    fn party_size_outside_bounds_keeps_previous_value() {
        let mut d = draft();
        d.apply(DraftField::PartySize(4)).unwrap();
        for bad in [0, 11, 256, u32::MAX] {
            let err = d.apply(DraftField::PartySize(bad)).unwrap_err();
            assert!(matches!(err, FieldRejected::PartySizeOutOfRange { value, .. } if value == bad));
            assert_eq!(d.party_size(), 4);
        }
    }

    #[test]
    fn donation_amount_must_be_offered() {
        let mut d = draft();
        d.apply(DraftField::DonationAmount(101)).unwrap();
        assert!(d.apply(DraftField::DonationAmount(50)).is_err());
        assert!(d.apply(DraftField::DonationAmount(0)).is_err());
        assert_eq!(d.donation_amount(), 101);
    }

    #[test]
    fn disabled_donation_submits_zero_but_keeps_stored_amount() {
        let mut d = draft();
        d.apply(DraftField::DonationAmount(51)).unwrap();
        d.apply(DraftField::IncludeDonation(false)).unwrap();

        assert_eq!(d.donation_amount(), 51);
        assert_eq!(d.to_submission().donation_amount, 0);

        d.apply(DraftField::IncludeDonation(true)).unwrap();
        assert_eq!(d.to_submission().donation_amount, 51);
    }

    #[test]
    fn submission_serializes_with_camel_case_keys() {
        let mut d = draft();
        d.apply(DraftField::AttendeeName("Asha".into())).unwrap();
        let json = serde_json::to_value(d.to_submission()).unwrap();
        assert_eq!(json["eventId"], "evt-2");
        assert_eq!(json["attendeeName"], "Asha");
        assert_eq!(json["partySize"], 1);
        assert_eq!(json["donationAmount"], 25);
    }
}
