mod app;
mod components;
mod screens;
mod theme;
mod utils;

use mandir_app_core::persistence::FilePersistence;
use mandir_app_core::{AppCommand, AppKernel, AppState, AppStore, LogBookingSink};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

pub type DesktopKernel = AppKernel<FilePersistence, LogBookingSink>;

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run() -> eframe::Result<()> {
    setup_logging();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([720.0, 520.0])
            .with_title("Vishnu Mandir — Voice of Vedas"),
        ..Default::default()
    };

    eframe::run_native(
        "Vishnu Mandir",
        options,
        Box::new(|cc| {
            theme::setup(&cc.egui_ctx);

            let store = AppStore::new(AppState::default());
            let mut kernel = DesktopKernel::new(store, FilePersistence::new(), LogBookingSink);
            kernel.dispatch(AppCommand::LoadInitialState);

            Ok(Box::new(app::MandirUiApp::new(kernel)))
        }),
    )
}
