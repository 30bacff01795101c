//! `settings` command handlers.

use clap::{Subcommand, ValueEnum};
use radar_core::{add_tag, cron_to_human, ListingType, Settings, FREQUENCY_PRESETS};
use radar_scan::{FileStore, SettingsStore};

/// Listing categories accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListingTypeArg {
    Jobs,
    Apartments,
    Both,
}

impl From<ListingTypeArg> for ListingType {
    fn from(arg: ListingTypeArg) -> Self {
        match arg {
            ListingTypeArg::Jobs => ListingType::Jobs,
            ListingTypeArg::Apartments => ListingType::Apartments,
            ListingTypeArg::Both => ListingType::Both,
        }
    }
}

/// Sub-commands available under `settings`.
#[derive(Debug, Subcommand)]
pub enum SettingsCommands {
    /// Print the saved settings
    Show {
        /// Print the stored JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Update the saved settings; repeatable flags add entries
    Set {
        /// Add a search keyword
        #[arg(long = "keyword")]
        keywords: Vec<String>,
        /// Add a location
        #[arg(long = "location")]
        locations: Vec<String>,
        #[arg(long, value_enum)]
        listing_type: Option<ListingTypeArg>,
        /// Add a website to scan besides LinkedIn
        #[arg(long = "url")]
        urls: Vec<String>,
        /// Notification email; pass an empty value to clear it
        #[arg(long)]
        email: Option<String>,
        /// Scan frequency as one of the preset cron expressions
        #[arg(long, value_parser = parse_frequency)]
        frequency: Option<String>,
    },
    /// Restore default settings
    Reset,
}

fn parse_frequency(value: &str) -> Result<String, String> {
    let value = value.trim();
    if FREQUENCY_PRESETS.iter().any(|(cron, _)| *cron == value) {
        return Ok(value.to_owned());
    }
    let choices = FREQUENCY_PRESETS
        .iter()
        .map(|(cron, label)| format!("'{cron}' ({label})"))
        .collect::<Vec<_>>()
        .join(", ");
    Err(format!("unsupported frequency; choose one of {choices}"))
}

/// # Errors
///
/// Returns an error if the updated settings cannot be saved.
pub(crate) fn run_settings(storage: &FileStore, command: SettingsCommands) -> anyhow::Result<()> {
    let store = SettingsStore::new(storage.clone());
    match command {
        SettingsCommands::Show { json } => {
            let settings = store.load();
            if json {
                println!("{}", serde_json::to_string_pretty(&settings)?);
            } else {
                print_settings(&settings);
            }
            Ok(())
        }
        SettingsCommands::Set {
            keywords,
            locations,
            listing_type,
            urls,
            email,
            frequency,
        } => {
            let mut settings = store.load();
            let update = SettingsUpdate {
                keywords,
                locations,
                listing_type: listing_type.map(Into::into),
                urls,
                email,
                frequency,
            };
            update.apply(&mut settings);
            save(&store, &settings)?;
            println!("settings saved");
            print_settings(&settings);
            Ok(())
        }
        SettingsCommands::Reset => {
            let settings = Settings::default();
            save(&store, &settings)?;
            println!("settings reset to defaults");
            Ok(())
        }
    }
}

fn save(store: &SettingsStore<FileStore>, settings: &Settings) -> anyhow::Result<()> {
    store.save(settings).map_err(|e| {
        tracing::warn!(error = %e, "settings save failed");
        anyhow::anyhow!(e.user_message())
    })
}

/// Changes requested on the command line.
#[derive(Debug, Default)]
pub(crate) struct SettingsUpdate {
    pub keywords: Vec<String>,
    pub locations: Vec<String>,
    pub listing_type: Option<ListingType>,
    pub urls: Vec<String>,
    pub email: Option<String>,
    pub frequency: Option<String>,
}

impl SettingsUpdate {
    pub(crate) fn apply(self, settings: &mut Settings) {
        for keyword in &self.keywords {
            add_tag(&mut settings.keywords, keyword);
        }
        for location in &self.locations {
            add_tag(&mut settings.locations, location);
        }
        for url in &self.urls {
            add_tag(&mut settings.additional_urls, url);
        }
        if let Some(listing_type) = self.listing_type {
            settings.listing_type = listing_type;
        }
        if let Some(email) = self.email {
            settings.notification_email = email.trim().to_owned();
        }
        if let Some(frequency) = self.frequency {
            settings.frequency = frequency;
        }
    }
}

fn print_settings(settings: &Settings) {
    let list = |values: &[String]| {
        if values.is_empty() {
            "(default)".to_owned()
        } else {
            values.join(", ")
        }
    };
    println!("keywords:      {}", list(&settings.keywords));
    println!("locations:     {}", list(&settings.locations));
    println!("listing type:  {}", settings.listing_type.instruction_label());
    println!("extra sites:   {}", list(&settings.additional_urls));
    println!(
        "email:         {}",
        if settings.notification_email.is_empty() {
            "(not set)"
        } else {
            settings.notification_email.as_str()
        }
    );
    println!(
        "frequency:     {} ({})",
        cron_to_human(&settings.frequency),
        settings.frequency
    );
}
