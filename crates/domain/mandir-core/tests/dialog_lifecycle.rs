use mandir_core::catalog::{events, find_event};
use mandir_core::{BookingDialog, BookingSubmission, DismissReason, DraftField};

#[test]
fn open_resets_every_event_to_defaults() {
    for event in events() {
        let mut dialog = BookingDialog::default();
        dialog.open(event.clone());

        let draft = dialog.draft().expect("dialog should be open");
        assert_eq!(&draft.selected_event, event);
        assert_eq!(draft.party_size(), 1);
        assert!(draft.include_donation);
        assert_eq!(draft.donation_amount(), 25);
        assert_eq!(draft.attendee_name, "");
        assert_eq!(draft.attendee_email, "");
        assert_eq!(draft.attendee_phone, "");
    }
}

#[test]
fn confirm_emits_last_set_values_and_closes() {
    let mut dialog = BookingDialog::default();
    dialog.open(find_event("evt-1").unwrap().clone());
    dialog
        .set_field(DraftField::AttendeeName("Asha".into()))
        .unwrap();
    dialog.set_field(DraftField::PartySize(3)).unwrap();

    let submission = dialog.confirm();

    assert_eq!(
        submission,
        Some(BookingSubmission {
            event_id: "evt-1".into(),
            attendee_name: "Asha".into(),
            attendee_email: String::new(),
            attendee_phone: String::new(),
            party_size: 3,
            donation_amount: 25,
        })
    );
    assert_eq!(dialog, BookingDialog::Closed);
}

#[test]
fn overwritten_fields_report_the_latest_value() {
    let mut dialog = BookingDialog::default();
    dialog.open(events()[3].clone());
    let edits = [
        DraftField::AttendeeEmail("a@example.org".into()),
        DraftField::AttendeeEmail("b@example.org".into()),
        DraftField::AttendeePhone("555-0100".into()),
        DraftField::PartySize(2),
        DraftField::PartySize(12),
        DraftField::DonationAmount(10),
        DraftField::DonationAmount(11),
    ];
    for edit in edits {
        let _ = dialog.set_field(edit);
    }

    let s = dialog.confirm().unwrap();
    assert_eq!(s.event_id, "evt-4");
    assert_eq!(s.attendee_email, "b@example.org");
    assert_eq!(s.attendee_phone, "555-0100");
    assert_eq!(s.party_size, 2);
    assert_eq!(s.donation_amount, 10);
}

#[test]
fn turning_donation_off_submits_zero() {
    let mut dialog = BookingDialog::default();
    dialog.open(events()[0].clone());
    dialog.set_field(DraftField::DonationAmount(101)).unwrap();
    dialog.set_field(DraftField::IncludeDonation(false)).unwrap();

    assert_eq!(dialog.confirm().unwrap().donation_amount, 0);
}

#[test]
fn cancel_and_dismiss_discard_the_draft() {
    let mut dialog = BookingDialog::default();
    dialog.open(events()[1].clone());
    dialog
        .set_field(DraftField::AttendeeName("Ravi".into()))
        .unwrap();
    assert!(dialog.cancel());
    assert_eq!(dialog.confirm(), None);

    dialog.open(events()[1].clone());
    assert!(dialog.dismiss(DismissReason::CancelKey));
    assert_eq!(dialog.confirm(), None);
}
