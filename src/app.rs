//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging
//! - loads the card file
//! - runs the card pipeline
//! - prints tables and writes optional exports

use std::path::Path;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{ClubArgs, Command, DebugArgs, ShowArgs, TableArgs, TodayArgs};
use crate::domain::{CardConfig, CardRequest, Category, DEFAULT_WEDGE_LOFTS, build_full_catalog};
use crate::error::AppError;
use crate::io::{card_file, load_card_config, read_card_json, resolve_config_path, write_card_json, write_rows_csv};

pub mod pipeline;

/// Entry point for the `yardage` binary.
pub fn run() -> Result<(), AppError> {
    // `yardage` and `yardage --chs 112` behave like `yardage table ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    init_tracing(cli.verbose);

    match cli.command {
        Command::Table(args) => handle_table(args),
        Command::Club(args) => handle_club(args),
        Command::Catalog => handle_catalog(),
        Command::Show(args) => handle_show(args),
        Command::Debug(args) => handle_debug(args),
    }
}

/// Logs go to stderr so tables on stdout stay clean.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        })
    });
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(explicit: Option<&Path>) -> Result<CardConfig, AppError> {
    let path = resolve_config_path(explicit);
    debug!(path = %path.display(), "using card file");
    load_card_config(&path)
}

fn handle_table(args: TableArgs) -> Result<(), AppError> {
    let config = load_config(args.config.config.as_deref())?;
    let request = card_request(&args, &config)?;
    let output = pipeline::run_card(&config, &request)?;

    print!("{}", crate::report::format_summary(&config, &output.request));
    print!("{}", crate::report::format_table(&output.rows, args.total));
    let partials = crate::report::format_partials(&config.partials.scheme, &output.partials);
    if !partials.is_empty() {
        println!();
        print!("{partials}");
    }

    // Optional exports.
    if let Some(path) = &args.export {
        write_rows_csv(path, &output.rows)?;
    }
    if let Some(path) = &args.export_json {
        write_card_json(path, &card_file(&output, &config))?;
    }

    Ok(())
}

fn handle_club(args: ClubArgs) -> Result<(), AppError> {
    let config = load_config(args.config.config.as_deref())?;
    let request = CardRequest {
        chs_today: chs_today(&args.today, &config),
        manual_offset: args.today.offset as f64,
        choke_down_yd: None,
        clubs: vec![args.label],
    };
    let output = pipeline::run_card(&config, &request)?;

    for row in &output.rows {
        print!("{}", crate::report::format_club_detail(row));
    }
    Ok(())
}

fn handle_catalog() -> Result<(), AppError> {
    for label in build_full_catalog(DEFAULT_WEDGE_LOFTS) {
        println!("{:<14} {}", label, Category::of(&label));
    }
    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let card = read_card_json(&args.card)?;

    print!("{}", crate::report::format_card_header(&card));
    print!("{}", crate::report::format_table(&card.rows, args.total));
    let partials = crate::report::format_partials(&card.partial_scheme, &card.partials);
    if !partials.is_empty() {
        println!();
        print!("{partials}");
    }
    Ok(())
}

fn handle_debug(args: DebugArgs) -> Result<(), AppError> {
    let config = load_config(args.config.config.as_deref())?;
    let chs = args.chs.unwrap_or(config.driver_chs_mph);
    let path = crate::debug::write_debug_bundle(&config, chs, &args.dir)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Build today's request from table flags and card defaults.
///
/// Bag order: `--clubs`, then `ui.default_bag`, then the anchor labels.
pub fn card_request(args: &TableArgs, config: &CardConfig) -> Result<CardRequest, AppError> {
    let clubs = if !args.clubs.is_empty() {
        args.clubs.iter().map(|c| c.trim().to_string()).filter(|c| !c.is_empty()).collect()
    } else if !config.default_bag.is_empty() {
        config.default_bag.clone()
    } else {
        config.anchors.iter().map(|a| a.label.clone()).collect()
    };

    let choke_down_yd = match args.choke_down {
        Some(requested) => Some(config.choke_down.resolve(requested)?),
        None => None,
    };

    Ok(CardRequest {
        chs_today: chs_today(&args.today, config),
        manual_offset: args.today.offset as f64,
        choke_down_yd,
        clubs,
    })
}

fn chs_today(today: &TodayArgs, config: &CardConfig) -> f64 {
    today.chs.unwrap_or(config.driver_chs_mph)
}

/// Rewrite argv so `yardage` defaults to `yardage table`.
///
/// Rules:
/// - `yardage`                      -> `yardage table`
/// - `yardage --chs 112 ...`        -> `yardage table --chs 112 ...`
/// - `yardage --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("table".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    // Verbosity flags are global; keep them in place and look past them.
    let first_other = argv[1..]
        .iter()
        .position(|a| !is_verbosity_flag(a))
        .map(|i| i + 1);
    match first_other {
        None => argv.push("table".to_string()),
        Some(i) if argv[i].starts_with('-') => argv.insert(i, "table".to_string()),
        Some(_) => {}
    }
    argv
}

fn is_verbosity_flag(arg: &str) -> bool {
    arg == "--verbose" || (arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v'))
}
