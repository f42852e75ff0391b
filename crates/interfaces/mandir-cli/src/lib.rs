pub mod commands;
pub mod settings;

use clap::ValueEnum;
use mandir_app_core::HomepageVariant;

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum CliVariant {
    A,
    B,
}

impl From<CliVariant> for HomepageVariant {
    fn from(v: CliVariant) -> Self {
        match v {
            CliVariant::A => HomepageVariant::A,
            CliVariant::B => HomepageVariant::B,
        }
    }
}
