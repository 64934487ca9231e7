use clap::Parser;
use std::path::PathBuf;

/// csv2ics - convert a tab-separated list of events into an iCalendar document
#[derive(Debug, Parser)]
#[command(name = "csv2ics")]
#[command(about = "Convert a tab-separated list of events into an iCalendar document", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Tab-separated input with summary, description, location, start and end
    /// columns (if not specified, runs the built-in date parser self-check)
    pub input: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_is_optional() {
        let cli = Cli::try_parse_from(["csv2ics"]).unwrap();
        assert!(cli.input.is_none());
    }

    #[test]
    fn test_input_path() {
        let cli = Cli::try_parse_from(["csv2ics", "events.tsv"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("events.tsv")));
    }

    #[test]
    fn test_flags_are_rejected() {
        assert!(Cli::try_parse_from(["csv2ics", "--delimiter", ","]).is_err());
    }
}
