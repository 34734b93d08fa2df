//! Command-line and environment configuration.

use clap::{Parser, Subcommand, ValueEnum};

use boxoffice_core::{Capacity, DomainResult};
use boxoffice_inventory::InventoryLedger;
use boxoffice_observability::LogFormat;

/// Show times offered when none are configured.
pub const DEFAULT_SHOWTIMES: [&str; 4] = ["10:00 AM", "1:00 PM", "4:00 PM", "7:00 PM"];

fn default_showtimes() -> Vec<String> {
    DEFAULT_SHOWTIMES.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Parser)]
#[command(name = "boxoffice")]
#[command(about = "Track ticket inventory per show time")]
pub struct Cli {
    /// Tickets allotted to every show time
    #[arg(long, env = "BOXOFFICE_CAPACITY", default_value_t = Capacity::DEFAULT.get())]
    pub capacity: u32,

    /// Show time label (repeatable; comma separated in BOXOFFICE_SLOTS)
    #[arg(
        long = "slot",
        env = "BOXOFFICE_SLOTS",
        value_delimiter = ',',
        default_values_t = default_showtimes()
    )]
    pub slots: Vec<String>,

    /// Output format for listings and demo results
    #[arg(long, env = "BOXOFFICE_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log line format (logs go to stderr)
    #[arg(long, env = "BOXOFFICE_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List shows, run the scripted bookings, list shows again
    #[default]
    Demo,
    /// List shows of a freshly built ledger
    Shows,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    /// Build the ledger described by this configuration.
    pub fn build_ledger(&self) -> DomainResult<InventoryLedger> {
        InventoryLedger::uniform(&self.slots, Capacity::new(self.capacity))
    }
}

/// Parse `args` as if none of the `BOXOFFICE_*` variables were set.
#[cfg(test)]
pub(crate) fn parse_without_env<'a>(
    args: impl IntoIterator<Item = &'a str>,
) -> Result<Cli, clap::Error> {
    use clap::{CommandFactory, FromArgMatches};

    let matches = Cli::command()
        .mut_args(|arg| arg.env(None::<&'static str>))
        .try_get_matches_from(args)?;
    Cli::from_arg_matches(&matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn defaults_match_the_four_showtimes() {
        let cli = parse_without_env(["boxoffice"]).unwrap();
        assert_eq!(cli.capacity, 50);
        assert_eq!(cli.slots, DEFAULT_SHOWTIMES);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.log_format, LogFormat::Pretty);
        assert_eq!(cli.command, None);
    }

    #[test]
    fn slots_accept_repeats_and_commas() {
        let cli = parse_without_env([
            "boxoffice",
            "--slot",
            "9:00 AM,noon",
            "--slot",
            "midnight",
            "--capacity",
            "12",
            "shows",
        ])
        .unwrap();
        assert_eq!(cli.slots, ["9:00 AM", "noon", "midnight"]);
        assert_eq!(cli.command, Some(Command::Shows));

        let ledger = cli.build_ledger().unwrap();
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.remaining("noon"), Some(12));
    }

    #[test]
    fn unknown_log_format_is_a_parse_error() {
        assert!(parse_without_env(["boxoffice", "--log-format", "xml"]).is_err());
    }

    #[test]
    fn environment_variables_are_not_consulted_when_isolated() {
        let cmd = Cli::command().mut_args(|arg| arg.env(None::<&'static str>));
        assert!(cmd.get_arguments().all(|arg| arg.get_env().is_none()));

        // The real command does read them.
        let capacity = Cli::command()
            .get_arguments()
            .find(|arg| arg.get_id().as_str() == "capacity")
            .and_then(|arg| arg.get_env().map(|env| env.to_os_string()));
        assert_eq!(capacity.as_deref(), Some(std::ffi::OsStr::new("BOXOFFICE_CAPACITY")));
    }
}
