use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use tokio::sync::mpsc;

use mandir_core::catalog;

use crate::app_core::{AppCommand, AppStore, DomainEvent};
use crate::controller::BookingDialogController;
use crate::domain::{AppSettings, BootState, HomepageVariant};
use crate::ports::{BookingSink, SettingsRepo};

pub struct AppKernel<S, K> {
    pub store: AppStore,
    booking: BookingDialogController<K>,
    settings: Arc<S>,
    saver: Option<std_mpsc::Sender<AppSettings>>,

    tx: mpsc::Sender<DomainEvent>,
    rx: mpsc::Receiver<DomainEvent>,
}

impl<S, K> AppKernel<S, K>
where
    S: SettingsRepo,
    K: BookingSink,
{
    pub fn new(store: AppStore, settings: S, sink: K) -> Self {
        let (tx, rx) = mpsc::channel(100);
        Self {
            booking: BookingDialogController::new(store.clone(), sink),
            store,
            settings: Arc::new(settings),
            saver: None,
            tx,
            rx,
        }
    }

    pub fn booking(&self) -> &BookingDialogController<K> {
        &self.booking
    }

    pub fn dispatch(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::LoadInitialState => {
                self.store.apply(DomainEvent::BootLoadingStarted);
                let tx = self.tx.clone();
                let settings = self.settings.clone();
                let spawn_res = std::thread::Builder::new()
                    .name("mandir-load-settings".into())
                    .spawn(move || {
                        let ev = match settings.load() {
                            Ok(settings) => DomainEvent::InitialStateLoaded { settings },
                            Err(e) => DomainEvent::BootFailed {
                                message: e.to_string(),
                            },
                        };
                        let _ = tx.blocking_send(ev);
                    });

                if let Err(e) = spawn_res {
                    self.store.apply(DomainEvent::BootFailed {
                        message: format!("Failed to start boot worker thread: {e}"),
                    });
                }
            }

            AppCommand::SelectVariant(v) => self.select_variant(v),

            AppCommand::RequestDonation { cause_key } => {
                self.request_donation(&cause_key);
            }

            AppCommand::DismissError => self.store.apply(DomainEvent::ErrorCleared),

            AppCommand::OpenBooking(id) => match catalog::find_event(&id) {
                Ok(event) => self.booking.open(event.clone()),
                Err(e) => self.store.apply(DomainEvent::UserError(e.to_string())),
            },

            AppCommand::OpenDefaultBooking => self.booking.open_default(),

            AppCommand::EditBookingField(field) => self.booking.set_field(field),

            AppCommand::CancelBooking => self.booking.cancel(),

            AppCommand::DismissBooking(reason) => self.booking.dismiss(reason),

            AppCommand::ConfirmBooking => {
                self.booking.confirm();
            }
        }
    }

    /// Validates the cause and returns the configured donation page to open, if any.
    pub fn request_donation(&mut self, cause_key: &str) -> Option<String> {
        match catalog::find_cause(cause_key) {
            Ok(cause) => {
                tracing::info!(cause = %cause.key, "donation requested");
                self.store.with_state(|s| s.settings.donation_url.clone())
            }
            Err(e) => {
                self.store.apply(DomainEvent::UserError(e.to_string()));
                None
            }
        }
    }

    fn select_variant(&mut self, v: HomepageVariant) {
        let (boot, current) = self.store.with_state(|s| (s.boot.clone(), s.variant));
        if current == v {
            return;
        }
        match boot {
            BootState::Loading => {
                tracing::debug!(?v, "variant change ignored while settings load");
            }
            BootState::Failed(_) => {
                // Unreadable settings file: the choice lives in memory only.
                tracing::warn!(?v, "variant changed for this session only");
                self.store.apply(DomainEvent::VariantSelected(v));
            }
            BootState::Ready => {
                self.store.apply(DomainEvent::VariantSelected(v));
                let snapshot = self.store.with_state(|s| s.settings.clone());
                self.queue_save(snapshot);
            }
        }
    }

    fn queue_save(&mut self, snapshot: AppSettings) {
        let snapshot = match &self.saver {
            Some(saver) => match saver.send(snapshot) {
                Ok(()) => return,
                Err(std_mpsc::SendError(snapshot)) => snapshot,
            },
            None => snapshot,
        };

        match spawn_save_worker(self.settings.clone(), self.tx.clone()) {
            Ok(saver) => {
                let _ = saver.send(snapshot);
                self.saver = Some(saver);
            }
            Err(e) => self.store.apply(DomainEvent::UserError(format!(
                "Failed to start settings save worker thread: {e}"
            ))),
        }
    }

    /// Applies events produced by worker threads. Call once per frame.
    pub fn tick(&mut self) {
        while let Ok(ev) = self.rx.try_recv() {
            self.store.apply(ev);
        }
    }

    pub fn sender(&self) -> mpsc::Sender<DomainEvent> {
        self.tx.clone()
    }
}

/// Starts the thread that owns all settings writes. Snapshots are saved in the
/// order they were queued; a backlog collapses to its newest entry.
fn spawn_save_worker<S: SettingsRepo>(
    repo: Arc<S>,
    events: mpsc::Sender<DomainEvent>,
) -> std::io::Result<std_mpsc::Sender<AppSettings>> {
    let (saver, queue) = std_mpsc::channel::<AppSettings>();
    std::thread::Builder::new()
        .name("mandir-save-settings".into())
        .spawn(move || {
            while let Ok(mut latest) = queue.recv() {
                while let Ok(newer) = queue.try_recv() {
                    latest = newer;
                }
                if let Err(e) = repo.save(&latest) {
                    tracing::error!("Failed to save settings: {e:#}");
                    let _ = events.blocking_send(DomainEvent::UserError(e.to_string()));
                }
            }
        })?;
    Ok(saver)
}
