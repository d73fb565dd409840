use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dp", about = concat!("dayplan v", env!("CARGO_PKG_VERSION"), " - morning, afternoon, evening"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read settings from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with no tasks instead of the sample set
    #[arg(long, global = true)]
    pub empty: bool,

    /// Append logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks grouped by time of day
    List(ListArgs),
    /// Show completion statistics
    Stats,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only one group (morning, afternoon, evening)
    #[arg(long = "time-of-day", value_name = "T")]
    pub time_of_day: Option<String>,
    /// Hide completed tasks
    #[arg(long)]
    pub pending: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_launches_board() {
        let cli = Cli::try_parse_from(["dp"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.empty);
    }

    #[test]
    fn test_list_flags() {
        let cli =
            Cli::try_parse_from(["dp", "list", "--time-of-day", "evening", "--pending", "--json"])
                .unwrap();
        assert!(cli.json);
        match cli.command {
            Some(Commands::List(args)) => {
                assert_eq!(args.time_of_day.as_deref(), Some("evening"));
                assert!(args.pending);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["dp", "stats", "--empty", "--config", "c.toml"]).unwrap();
        assert!(cli.empty);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert!(matches!(cli.command, Some(Commands::Stats)));
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(Cli::try_parse_from(["dp", "frobnicate"]).is_err());
    }
}
