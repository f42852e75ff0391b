use clap::{Parser, Subcommand};
use mandir_cli::commands::{self, BookingArgs};
use mandir_cli::settings::SettingsManager;
use mandir_cli::CliVariant;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[arg(long, global = true, env = "MANDIR_CONFIG_DIR", help = "Settings directory (defaults to the platform config dir)")]
    config_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the event catalog (* marks the featured event)
    Events,
    /// List donation causes
    Causes,
    /// Run a booking attempt and print the submission as JSON
    Book {
        #[arg(long)]
        event: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long)]
        party_size: Option<u32>,
        #[arg(long, conflicts_with = "no_donation")]
        donation: Option<u32>,
        #[arg(long)]
        no_donation: bool,
    },
    /// Show or set the homepage variant the desktop app opens with
    Variant {
        #[command(subcommand)]
        command: VariantCommands,
    },
    /// Configure the external donation page
    DonationUrl {
        #[command(subcommand)]
        command: DonationUrlCommands,
    },
}

#[derive(Subcommand)]
enum VariantCommands {
    Show,
    Set {
        #[arg(value_enum)]
        variant: CliVariant,
    },
}

#[derive(Subcommand)]
enum DonationUrlCommands {
    Show,
    Set { url: String },
    Clear,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let settings = SettingsManager::new(cli.config_dir);

    match cli.command {
        Commands::Events => print!("{}", commands::cmd_events()),
        Commands::Causes => print!("{}", commands::cmd_causes()),
        Commands::Book {
            event,
            name,
            email,
            phone,
            party_size,
            donation,
            no_donation,
        } => {
            let submission = commands::cmd_book(&BookingArgs {
                event_id: event,
                name,
                email,
                phone,
                party_size,
                donation,
                include_donation: !no_donation,
            })?;
            println!("{}", commands::submission_json(&submission)?);
        }
        Commands::Variant { command } => match command {
            VariantCommands::Show => println!("{}", settings.variant()?.label()),
            VariantCommands::Set { variant } => {
                let saved = settings.set_variant(variant.into())?;
                println!(":: Homepage variant set to {}", saved.homepage_variant.label());
            }
        },
        Commands::DonationUrl { command } => match command {
            DonationUrlCommands::Show => match settings.load()?.donation_url {
                Some(url) => println!("{url}"),
                None => println!("(not set)"),
            },
            DonationUrlCommands::Set { url } => {
                settings.set_donation_url(Some(url))?;
                println!(":: Donation URL saved");
            }
            DonationUrlCommands::Clear => {
                settings.set_donation_url(None)?;
                println!(":: Donation URL cleared");
            }
        },
    }

    Ok(())
}
