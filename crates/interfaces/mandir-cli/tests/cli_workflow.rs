use mandir_app_core::HomepageVariant;
use mandir_cli::commands::{self, BookingArgs};
use mandir_cli::settings::SettingsManager;
use mandir_cli::CliVariant;
use tempfile::tempdir;

fn args(event: &str) -> BookingArgs {
    BookingArgs {
        event_id: event.into(),
        include_donation: true,
        ..Default::default()
    }
}

#[test]
fn events_listing_marks_the_featured_event() {
    let out = commands::cmd_events();
    assert_eq!(out.lines().count(), 4);
    let featured: Vec<_> = out.lines().filter(|l| l.ends_with(" *")).collect();
    assert_eq!(featured.len(), 1);
    assert!(featured[0].starts_with("evt-1"));
}

#[test]
fn causes_listing_has_every_cause() {
    let out = commands::cmd_causes();
    for key in ["temple", "bhojan", "care"] {
        assert!(out.lines().any(|l| l.starts_with(key)), "missing {key}");
    }
}

#[test]
fn book_with_defaults_matches_the_dialog_defaults() {
    let submission = commands::cmd_book(&BookingArgs {
        name: "Asha".into(),
        party_size: Some(3),
        ..args("evt-1")
    })
    .unwrap();

    assert_eq!(submission.event_id, "evt-1");
    assert_eq!(submission.attendee_name, "Asha");
    assert_eq!(submission.attendee_email, "");
    assert_eq!(submission.party_size, 3);
    assert_eq!(submission.donation_amount, 25);
}

#[test]
fn book_without_donation_reports_zero() {
    let submission = commands::cmd_book(&BookingArgs {
        donation: None,
        include_donation: false,
        ..args("evt-4")
    })
    .unwrap();
    assert_eq!(submission.donation_amount, 0);
}

#[test]
fn book_prints_camel_case_json() {
    let submission = commands::cmd_book(&BookingArgs {
        donation: Some(101),
        ..args("evt-2")
    })
    .unwrap();
    let json = commands::submission_json(&submission).unwrap();
    assert!(json.contains(r#""eventId": "evt-2""#), "{json}");
    assert!(json.contains(r#""donationAmount": 101"#), "{json}");
}

#[test]
fn book_rejects_values_outside_the_form() {
    let err = commands::cmd_book(&BookingArgs {
        party_size: Some(11),
        ..args("evt-1")
    })
    .unwrap_err();
    assert!(format!("{err:#}").contains("partySize"), "{err:#}");

    assert!(commands::cmd_book(&BookingArgs {
        donation: Some(30),
        ..args("evt-1")
    })
    .is_err());
}

#[test]
fn book_unknown_event_fails() {
    let err = commands::cmd_book(&args("evt-9")).unwrap_err();
    assert!(err.to_string().contains("evt-9"));
}

#[test]
fn variant_round_trips_through_the_settings_file() {
    let dir = tempdir().unwrap();
    let settings = SettingsManager::new(Some(dir.path().to_path_buf()));

    assert_eq!(settings.variant().unwrap(), HomepageVariant::B);
    settings.set_variant(CliVariant::A.into()).unwrap();
    assert_eq!(settings.variant().unwrap(), HomepageVariant::A);

    let reopened = SettingsManager::new(Some(dir.path().to_path_buf()));
    assert_eq!(reopened.variant().unwrap(), HomepageVariant::A);
}

#[test]
fn donation_url_is_kept_when_variant_changes() {
    let dir = tempdir().unwrap();
    let settings = SettingsManager::new(Some(dir.path().to_path_buf()));

    settings
        .set_donation_url(Some("https://example.org/give".into()))
        .unwrap();
    settings.set_variant(HomepageVariant::A).unwrap();

    let loaded = settings.load().unwrap();
    assert_eq!(loaded.donation_url.as_deref(), Some("https://example.org/give"));

    assert!(settings.set_donation_url(Some("ftp://nope".into())).is_err());
    settings.set_donation_url(None).unwrap();
    assert_eq!(settings.load().unwrap().donation_url, None);
}
