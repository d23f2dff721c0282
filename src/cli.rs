use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::suggestion::{PriorityFilter, SuggestionOrigin};

#[derive(Debug, Parser)]
#[command(
    name = "converso",
    about = "Terminal inbox with AI action suggestions (TUI + CLI)"
)]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start TUI shell
    Run,
    /// Print the action center queue and exit
    Actions {
        /// Priority filter: all, high, medium or low
        #[arg(short, long, default_value = "all", value_parser = parse_priority_filter)]
        priority: PriorityFilter,

        /// List proactive suggestions instead of active ones
        #[arg(long)]
        proactive: bool,
    },
}

impl Command {
    pub fn origin(&self) -> SuggestionOrigin {
        match self {
            Command::Actions {
                proactive: true, ..
            } => SuggestionOrigin::Proactive,
            _ => SuggestionOrigin::Active,
        }
    }
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}

fn parse_priority_filter(value: &str) -> Result<PriorityFilter, String> {
    PriorityFilter::parse(value)
        .ok_or_else(|| format!("unknown priority `{value}` (expected all, high, medium or low)"))
}
