use anyhow::{anyhow, Result};
use mandir_app_core::persistence::FilePersistence;
use mandir_app_core::{AppSettings, HomepageVariant};
use std::path::PathBuf;

/// Reads and updates the settings file shared with the desktop app.
pub struct SettingsManager {
    persistence: FilePersistence,
}

impl SettingsManager {
    pub fn new(config_dir: Option<PathBuf>) -> Self {
        let persistence = match config_dir {
            Some(dir) => FilePersistence::in_dir(dir),
            None => FilePersistence::new(),
        };
        Self { persistence }
    }

    pub fn load(&self) -> Result<AppSettings> {
        self.persistence.load_settings()
    }

    pub fn variant(&self) -> Result<HomepageVariant> {
        Ok(self.load()?.homepage_variant)
    }

    pub fn set_variant(&self, variant: HomepageVariant) -> Result<AppSettings> {
        let mut settings = self.load()?;
        settings.homepage_variant = variant;
        self.persistence.save_settings(&settings)?;
        Ok(settings)
    }

    pub fn set_donation_url(&self, url: Option<String>) -> Result<AppSettings> {
        if let Some(u) = &url {
            if !(u.starts_with("https://") || u.starts_with("http://")) {
                return Err(anyhow!("Donation URL must start with http:// or https://"));
            }
        }
        let mut settings = self.load()?;
        settings.donation_url = url;
        self.persistence.save_settings(&settings)?;
        Ok(settings)
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new(None)
    }
}
