//! Central configuration constants for booking limits, opening hours and contact details.

/// Smallest party that can be booked.
pub const PARTY_SIZE_MIN: u8 = 1;

/// Largest party that can be booked.
pub const PARTY_SIZE_MAX: u8 = 10;

/// Party size a fresh booking starts with.
pub const DEFAULT_PARTY_SIZE: u8 = PARTY_SIZE_MIN;

/// Donation add-on amounts offered in the booking dialog (whole dollars).
pub const DONATION_AMOUNTS: [u32; 4] = [10, 25, 51, 101];

/// Donation amount a fresh booking starts with.
pub const DEFAULT_DONATION_AMOUNT: u32 = 25;

/// Whether a fresh booking includes the donation add-on.
pub const DEFAULT_INCLUDE_DONATION: bool = true;

/// Opening time, minutes after midnight (07:30).
pub const OPENS_AT_MINUTES: u32 = 7 * 60 + 30;

/// Closing time, minutes after midnight (20:30).
pub const CLOSES_AT_MINUTES: u32 = 20 * 60 + 30;

pub const ORGANIZATION_NAME: &str = "Voice of Vedas";
pub const TEMPLE_NAME: &str = "Vishnu Mandir";
pub const CONTACT_PHONE: &str = "+1 905-886-1724";
pub const CONTACT_EMAIL: &str = "info@vishnumandir.com";
pub const STREET_ADDRESS: &str = "8640 Yonge St, Richmond Hill, ON";
pub const OPENING_HOURS_LABEL: &str = "Mon–Sun 7:30 AM–8:30 PM";

/// Returns true when `v` is a party size the booking form accepts.
pub fn is_valid_party_size(v: u8) -> bool {
    (PARTY_SIZE_MIN..=PARTY_SIZE_MAX).contains(&v)
}

/// Returns true when `v` is one of the offered donation amounts.
pub fn is_offered_donation(v: u32) -> bool {
    DONATION_AMOUNTS.contains(&v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_within_their_domains() {
        assert!(is_valid_party_size(DEFAULT_PARTY_SIZE));
        assert!(is_offered_donation(DEFAULT_DONATION_AMOUNT));
        assert!(OPENS_AT_MINUTES < CLOSES_AT_MINUTES);
    }

    #[test]
    fn party_size_bounds_are_inclusive() {
        assert!(!is_valid_party_size(0));
        assert!(is_valid_party_size(1));
        assert!(is_valid_party_size(10));
        assert!(!is_valid_party_size(11));
    }
}
