pub mod app_core;
pub mod controller;
pub mod domain;
pub mod kernel;
pub mod persistence;
pub mod ports;
pub mod viewmodel;

pub use app_core::*;
pub use controller::BookingDialogController;
pub use domain::{AppSettings, AppState, BootState, HomepageVariant};
pub use kernel::AppKernel;
pub use ports::*;
pub use viewmodel::*;
