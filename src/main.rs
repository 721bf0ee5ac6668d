use std::path::{Path, PathBuf};

use arona_stats::config::Settings;
use arona_stats::io::excel_write;
use arona_stats::model::{ArmorType, CategoryMarker};
use arona_stats::render::{PlainTextRenderer, TableRenderer};
use arona_stats::report::{RankedReport, TableReport, rank_bracket, ranked_listing, to_json};
use arona_stats::{Result, StatsEngine, StatsError};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose)?;

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let engine = StatsEngine::open(&cli.workbook, settings)?;
    let json = cli.json;

    match cli.command {
        Command::RaidStats(args) => execute_raid_stats(&engine, args, json),
        Command::EraidStats(args) => execute_eraid_stats(&engine, args, json),
        Command::RaidStudent(args) => {
            let marker = CategoryMarker::raid(args.season);
            execute_entity_table(&engine, &args.name, &marker, args.export.as_deref(), json)
        }
        Command::EraidStudent(args) => {
            let armor: ArmorType = args.armor_type.parse()?;
            let marker = CategoryMarker::elite_raid(args.season, armor);
            execute_entity_table(&engine, &args.name, &marker, args.export.as_deref(), json)
        }
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| StatsError::Logging(error.to_string()))
}

fn execute_raid_stats(engine: &StatsEngine, args: RaidStatsArgs, json: bool) -> Result<()> {
    let bracket = rank_bracket(args.rank)?;
    let marker = CategoryMarker::raid(args.season);
    print_ranked(engine, &marker, bracket, args.top, args.export.as_deref(), json)
}

fn execute_eraid_stats(engine: &StatsEngine, args: EraidStatsArgs, json: bool) -> Result<()> {
    let bracket = rank_bracket(args.rank)?;
    let armor: ArmorType = args.armor_type.parse()?;
    let marker = CategoryMarker::elite_raid(args.season, armor);
    print_ranked(engine, &marker, bracket, args.top, args.export.as_deref(), json)
}

fn print_ranked(
    engine: &StatsEngine,
    marker: &CategoryMarker,
    bracket: &str,
    top: Option<usize>,
    export: Option<&Path>,
    json: bool,
) -> Result<()> {
    let name = engine.resolve_name(marker);
    let rows = engine.stats(marker);

    if json {
        let report = RankedReport {
            marker,
            column: &name,
            bracket,
            rows: &rows,
        };
        println!("{}", to_json(&report)?);
    } else {
        let top = top.unwrap_or(engine.settings().top);
        print!("{}", ranked_listing(&name, bracket, &rows, top));
    }

    if let Some(path) = export {
        excel_write::write_ranked_list(path, name.as_str(), &rows)?;
    }
    Ok(())
}

fn execute_entity_table(
    engine: &StatsEngine,
    name: &str,
    marker: &CategoryMarker,
    export: Option<&Path>,
    json: bool,
) -> Result<()> {
    let found = engine.entity_table(name, marker);

    if json {
        let report = TableReport {
            entity: name,
            marker,
            sheet: found.as_ref().map(|(sheet, _)| sheet.as_str()),
            table: found.as_ref().map(|(_, table)| table),
        };
        println!("{}", to_json(&report)?);
    }

    let Some((sheet, table)) = found else {
        if !json {
            println!("⚠ 找不到 `{name}` `{marker}` 的數據");
        }
        return Ok(());
    };

    if !json {
        println!("📊 {name} - {sheet} 的使用數據");
        print!("{}", PlainTextRenderer.render_table(&table));
    }

    if let Some(path) = export {
        excel_write::write_sub_table(path, &sheet, &table)?;
    }
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Character usage statistics for raid and elite raid seasons."
)]
struct Cli {
    /// Workbook holding the usage data.
    #[arg(long, global = true, default_value = "data.xlsx")]
    workbook: PathBuf,

    /// Optional JSON file overriding markers and column names.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ranked character usage for a raid season.
    RaidStats(RaidStatsArgs),
    /// Ranked character usage for an elite raid season and armor type.
    EraidStats(EraidStatsArgs),
    /// A character's raid table for one season.
    RaidStudent(RaidStudentArgs),
    /// A character's elite raid table for one season and armor type.
    EraidStudent(EraidStudentArgs),
}

#[derive(clap::Args)]
struct RaidStatsArgs {
    /// Season number.
    #[arg(long)]
    season: u32,

    /// Rank used to pick the bracket label (1~20000).
    #[arg(long)]
    rank: u32,

    /// Number of entries to show.
    #[arg(long)]
    top: Option<usize>,

    /// Also write the full list to this .xlsx file.
    #[arg(long)]
    export: Option<PathBuf>,
}

#[derive(clap::Args)]
struct EraidStatsArgs {
    /// Season number.
    #[arg(long)]
    season: u32,

    /// LightArmor, ElasticArmor, HeavyArmor or Unarmed.
    #[arg(long)]
    armor_type: String,

    /// Rank used to pick the bracket label (1~20000).
    #[arg(long)]
    rank: u32,

    /// Number of entries to show.
    #[arg(long)]
    top: Option<usize>,

    /// Also write the full list to this .xlsx file.
    #[arg(long)]
    export: Option<PathBuf>,
}

#[derive(clap::Args)]
struct RaidStudentArgs {
    /// Character name, matched against sheet names.
    #[arg(long)]
    name: String,

    /// Season number.
    #[arg(long)]
    season: u32,

    /// Also write the table to this .xlsx file.
    #[arg(long)]
    export: Option<PathBuf>,
}

#[derive(clap::Args)]
struct EraidStudentArgs {
    /// Character name, matched against sheet names.
    #[arg(long)]
    name: String,

    /// Season number.
    #[arg(long)]
    season: u32,

    /// LightArmor, ElasticArmor, HeavyArmor or Unarmed.
    #[arg(long)]
    armor_type: String,

    /// Also write the table to this .xlsx file.
    #[arg(long)]
    export: Option<PathBuf>,
}
