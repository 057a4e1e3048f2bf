//! Command-line parsing for the yardage card.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the estimation code.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "yardage", version, about = "Speed-scaled golf yardage card")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the yardage table for today's driver speed.
    Table(TableArgs),
    /// Show how a single club's estimate is derived.
    Club(ClubArgs),
    /// List every club label the estimator understands.
    Catalog,
    /// Print a previously exported card JSON.
    Show(ShowArgs),
    /// Write a markdown bundle reviewing every catalog club.
    Debug(DebugArgs),
}

/// Card file selection, shared by commands that need anchors.
#[derive(Debug, Parser, Clone)]
pub struct ConfigArgs {
    /// Card file (YAML). Defaults to `$YARDAGE_CONFIG`, then `data/config.yaml`.
    #[arg(short = 'c', long, value_name = "YAML")]
    pub config: Option<PathBuf>,
}

/// Today's conditions.
#[derive(Debug, Parser, Clone)]
pub struct TodayArgs {
    /// Driver clubhead speed today (mph). Defaults to the card's baseline.
    #[arg(long, value_name = "MPH")]
    pub chs: Option<f64>,

    /// Manual adjustment added to every carry (yards).
    #[arg(
        long,
        default_value_t = 0,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i64).range(-25..=25)
    )]
    pub offset: i64,
}

/// Options for the yardage table.
#[derive(Debug, Parser, Clone)]
pub struct TableArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(flatten)]
    pub today: TodayArgs,

    /// Subtract yards (default from the card) from wedge rows and partials only.
    #[arg(long, value_name = "YD", num_args = 0..=1)]
    pub choke_down: Option<Option<f64>>,

    /// Show the Total (carry + rollout) column.
    #[arg(long)]
    pub total: bool,

    /// Clubs to show, comma-separated. Defaults to the card's bag.
    #[arg(long, value_delimiter = ',')]
    pub clubs: Vec<String>,

    /// Export the table to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export the card (inputs, rows, partials) to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

/// Options for a single club.
#[derive(Debug, Parser)]
pub struct ClubArgs {
    /// Club label, e.g. `7i` or `GW (50°)`.
    pub label: String,

    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(flatten)]
    pub today: TodayArgs,
}

/// Options for printing a saved card.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Card JSON file produced by `yardage table --export-json`.
    #[arg(long, value_name = "JSON")]
    pub card: PathBuf,

    /// Show the Total column.
    #[arg(long)]
    pub total: bool,
}

/// Options for the debug bundle.
#[derive(Debug, Parser)]
pub struct DebugArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Driver clubhead speed to evaluate at (mph). Defaults to the card's baseline.
    #[arg(long, value_name = "MPH")]
    pub chs: Option<f64>,

    /// Output directory.
    #[arg(long, default_value = "debug")]
    pub dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_table_flags() {
        let cli = Cli::parse_from([
            "yardage", "table", "--chs", "115", "--offset", "-3", "--choke-down", "--total", "--clubs",
            "Driver,7i,PW (46°)",
        ]);
        let Command::Table(args) = cli.command else {
            panic!("expected table");
        };
        assert_eq!(args.today.chs, Some(115.0));
        assert_eq!(args.today.offset, -3);
        assert_eq!(args.choke_down, Some(None));
        assert!(args.total);
        assert_eq!(args.clubs, vec!["Driver", "7i", "PW (46°)"]);
    }

    #[test]
    fn choke_down_takes_optional_value() {
        let cli = Cli::parse_from(["yardage", "table", "--choke-down", "5"]);
        let Command::Table(args) = cli.command else {
            panic!("expected table");
        };
        assert_eq!(args.choke_down, Some(Some(5.0)));
    }

    #[test]
    fn choke_down_help_names_wedges() {
        use clap::CommandFactory;

        let cmd = Cli::command();
        let table = cmd.find_subcommand("table").unwrap();
        let arg = table.get_arguments().find(|a| a.get_id() == "choke_down").unwrap();
        let help = arg.get_help().unwrap().to_string();
        assert!(help.contains("wedge rows and partials only"));
    }

    #[test]
    fn offset_is_bounded() {
        assert!(Cli::try_parse_from(["yardage", "table", "--offset", "30"]).is_err());
    }

    #[test]
    fn club_takes_positional_label() {
        let cli = Cli::parse_from(["yardage", "-v", "club", "GW (50°)", "-c", "card.yaml"]);
        assert_eq!(cli.verbose, 1);
        let Command::Club(args) = cli.command else {
            panic!("expected club");
        };
        assert_eq!(args.label, "GW (50°)");
        assert_eq!(args.config.config, Some(PathBuf::from("card.yaml")));
    }
}
