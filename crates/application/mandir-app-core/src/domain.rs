use serde::{Deserialize, Serialize};

use mandir_core::{BookingDialog, BookingSubmission};

/// Which of the two homepage layouts is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomepageVariant {
    /// Evolutionary refresh.
    A,
    /// "Live Mandir" guided flow.
    #[default]
    B,
}

impl HomepageVariant {
    pub fn label(self) -> &'static str {
        match self {
            HomepageVariant::A => "Demo A",
            HomepageVariant::B => "Demo B",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub homepage_variant: HomepageVariant,
    /// Where donation buttons point. Unset means donations are only logged.
    #[serde(default)]
    pub donation_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootState {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub boot: BootState,
    pub variant: HomepageVariant,
    pub settings: AppSettings,

    pub booking: BookingDialog,
    /// Most recent confirmation, cleared when a new attempt starts.
    pub last_submission: Option<BookingSubmission>,

    pub error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            boot: BootState::Loading,
            variant: HomepageVariant::default(),
            settings: AppSettings::default(),
            booking: BookingDialog::Closed,
            last_submission: None,
            error: None,
        }
    }
}
