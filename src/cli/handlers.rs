use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::logging::{self, LogTarget};
use crate::model::config::{AppConfig, SeedMode};
use crate::model::task::TimeOfDay;
use crate::ops::grouping::{group_by_time_of_day, summarize};
use crate::ops::store::TaskStore;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let config = config_io::load_config(cli.config.as_deref())?;
    let log_file = cli.log_file.clone().or_else(|| config.log.file.clone());
    let store = session_store(&config, cli.empty);

    match cli.command {
        None => {
            // The board owns the terminal: file logging or nothing
            let target = log_file.as_deref().map_or(LogTarget::Off, LogTarget::File);
            logging::init_logging(&config.log.level, target)?;
            crate::tui::run(store, &config.ui)
        }
        Some(cmd) => {
            let target = log_file.as_deref().map_or(LogTarget::Stderr, LogTarget::File);
            logging::init_logging(&config.log.level, target)?;
            match cmd {
                Commands::List(args) => cmd_list(&store, args, json),
                Commands::Stats => cmd_stats(&store, json),
            }
        }
    }
}

/// Starting task set: `--empty` beats `[session] seed`
pub fn session_store(config: &AppConfig, empty: bool) -> TaskStore {
    if empty || config.session.seed == SeedMode::Empty {
        TaskStore::new()
    } else {
        TaskStore::seeded()
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(store: &TaskStore, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let only = args
        .time_of_day
        .as_deref()
        .map(|s| {
            TimeOfDay::parse(s).ok_or_else(|| {
                format!(
                    "unknown time of day '{}' (expected: morning, afternoon, evening)",
                    s
                )
            })
        })
        .transpose()?;

    let groups = group_by_time_of_day(store.tasks());
    let selected = groups
        .iter()
        .filter(|g| only.is_none_or(|tod| g.time_of_day == tod));

    if json {
        let results: Vec<_> = selected.map(|g| group_to_json(g, args.pending)).collect();
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        let mut first = true;
        for group in selected {
            if !first {
                println!();
            }
            first = false;
            for line in format_group(group, args.pending) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn cmd_stats(store: &TaskStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let summary = summarize(store.tasks());
    let groups = group_by_time_of_day(store.tasks());

    if json {
        let output = StatsJson {
            summary,
            groups: groups.iter().map(group_stats_to_json).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for line in format_stats(&summary, &groups) {
            println!("{}", line);
        }
    }
    Ok(())
}
