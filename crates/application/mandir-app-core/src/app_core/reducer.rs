use crate::domain::{AppState, BootState};

use super::events::DomainEvent;

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::BootLoadingStarted => {
            state.boot = BootState::Loading;
        }

        DomainEvent::InitialStateLoaded { settings } => {
            state.variant = settings.homepage_variant;
            state.settings = settings;
            state.boot = BootState::Ready;
        }

        DomainEvent::BootFailed { message } => {
            state.boot = BootState::Failed(message);
        }

        DomainEvent::VariantSelected(v) => {
            state.variant = v;
            state.settings.homepage_variant = v;
        }

        DomainEvent::BookingOpened(event) => {
            state.last_submission = None;
            state.booking.open(event);
        }

        DomainEvent::BookingFieldEdited(field) => {
            let name = field.name();
            if let Err(e) = state.booking.set_field(field) {
                tracing::debug!(field = name, "booking field rejected: {e}");
            }
        }

        DomainEvent::BookingCancelled => {
            state.booking.cancel();
        }

        DomainEvent::BookingDismissed(reason) => {
            state.booking.dismiss(reason);
        }

        DomainEvent::BookingConfirmed(submission) => {
            state.booking.cancel();
            state.last_submission = Some(submission);
        }

        DomainEvent::UserError(msg) => state.error = Some(msg),
        DomainEvent::ErrorCleared => state.error = None,
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppSettings, HomepageVariant};
    use mandir_core::catalog;
    use mandir_core::{BookingDialog, DismissReason, DraftField};

    fn opened() -> AppState {
        reduce(
            AppState::default(),
            DomainEvent::BookingOpened(catalog::events()[0].clone()),
        )
    }

    #[test]
    fn initial_state_applies_saved_variant() {
        let settings = AppSettings {
            homepage_variant: HomepageVariant::A,
            donation_url: None,
        };
        let state = reduce(
            AppState::default(),
            DomainEvent::InitialStateLoaded { settings },
        );
        assert_eq!(state.boot, BootState::Ready);
        assert_eq!(state.variant, HomepageVariant::A);
    }

    #[test]
    fn rejected_field_leaves_state_untouched() {
        let before = opened();
        let after = reduce(
            before.clone(),
            DomainEvent::BookingFieldEdited(DraftField::PartySize(0)),
        );
        assert_eq!(before.booking, after.booking);
    }

    #[test]
    fn dismiss_closes_without_recording_a_submission() {
        let state = reduce(
            opened(),
            DomainEvent::BookingDismissed(DismissReason::Backdrop),
        );
        assert_eq!(state.booking, BookingDialog::Closed);
        assert!(state.last_submission.is_none());
    }

    #[test]
    fn confirmed_booking_is_remembered_until_next_open() {
        let submission = opened().booking.draft().unwrap().to_submission();
        let state = reduce(opened(), DomainEvent::BookingConfirmed(submission.clone()));
        assert!(!state.booking.is_open());
        assert_eq!(state.last_submission, Some(submission));

        let state = reduce(
            state,
            DomainEvent::BookingOpened(catalog::events()[1].clone()),
        );
        assert!(state.last_submission.is_none());
    }
}
