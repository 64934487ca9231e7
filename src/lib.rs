pub mod calendar;
pub mod cli;
pub mod config;
pub mod self_check;

use anyhow::{Context, Result};
use log::*;
use std::path::Path;

/// Convert the listing at `input` and return the iCalendar text.
pub fn convert_file(input: &Path, config: &Config) -> Result<String> {
    let document = calendar::import_events_from_file(input, config)
        .with_context(|| format!("Failed to convert {}", input.display()))?;
    info!("Writing calendar with {} events", document.len());
    Ok(document.to_ical())
}

pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

// Re-export commonly used types
pub use calendar::{parse_temporal, CalendarDocument, CalendarEvent, ConvertError, DateParseError, TemporalValue};
pub use config::Config;
