use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use ghadi_rs::{
    AstronomicalSource, CITIES, CalculationResult, ClockTime, EveningLabel, GhadiConfig,
    GhadiyaluError, Instant, ManualSource, ROW_HEADERS, ReferenceZone, ScheduleOptions,
    SourceError, SunTable, TimeError, calculate_from, find_city, parse_iso_date,
};

#[derive(Parser)]
#[command(name = "ghadiyalu", about = "Ghadi schedule calculator", version)]
struct Cli {
    /// Config file (default: $GHADI_CONFIG, then ./ghadiyalu.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,
    /// Errors only
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Morning and Evening ghadis for a date
    Calc {
        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        #[command(flatten)]
        sun: SunArgs,
        /// Mark the ghadi running at this local time (YYYY-MM-DD HH:MM[:SS])
        #[arg(long)]
        now: Option<String>,
    },
    /// The ghadi running right now
    Now {
        #[command(flatten)]
        sun: SunArgs,
    },
    /// List built-in cities
    Cities,
}

#[derive(Args)]
struct SunArgs {
    /// Sunrise (HH:MM); selects manual entry
    #[arg(long)]
    sunrise: Option<String>,
    /// Sunset (HH:MM); selects manual entry
    #[arg(long)]
    sunset: Option<String>,
    /// City to look up in the sun table
    #[arg(long)]
    city: Option<String>,
    /// TOML table of precomputed sunrise/sunset times
    #[arg(long)]
    sun_table: Option<PathBuf>,
    /// Label every evening ghadi with the sunset's date and weekday
    #[arg(long)]
    fixed_evening_date: bool,
    /// Ghadis per batch
    #[arg(long)]
    segments: Option<u32>,
    /// IANA zone name (default: Asia/Kolkata)
    #[arg(long)]
    zone: Option<String>,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    match cli.command {
        Commands::Cities => {
            for city in &CITIES {
                println!(
                    "{:<12} {:>10.6} {:>10.6}",
                    city.name, city.location.latitude_deg, city.location.longitude_deg
                );
            }
        }

        Commands::Calc { date, sun, now } => {
            let config = load_config(cli.config.as_deref());
            let options = require(schedule_options(&config, &sun));
            let date = require(parse_date(&date));
            let now = now.map(|s| require(parse_now(&s, options.zone)));
            let result = require(run(&config, &sun, date, &options));
            print_result(&result, now.as_ref(), sun.json);
        }

        Commands::Now { sun } => {
            let config = load_config(cli.config.as_deref());
            let options = require(schedule_options(&config, &sun));
            let now = options.zone.now();
            let result = require(run(&config, &sun, now.date_naive(), &options));
            match result.locate(&now) {
                Some(active) if !sun.json => {
                    let segment = result.schedule(active.batch).get(active.index);
                    let row = segment.map(|s| s.row());
                    match row {
                        Some(row) => println!(
                            "{} ghadi {} of {} ({} - {})",
                            active.batch,
                            active.index,
                            options.segments_per_batch,
                            row.start_time,
                            row.end_time
                        ),
                        None => println!("{} ghadi {}", active.batch, active.index),
                    }
                }
                None if !sun.json => println!("No ghadi is running"),
                _ => print_json(&serde_json::to_string_pretty(&result.report(Some(&now)))),
            }
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("GHADI_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("Failed to initialize logging: {e}");
    }
}

fn require<T>(result: Result<T, GhadiyaluError>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn load_config(path: Option<&Path>) -> GhadiConfig {
    GhadiConfig::discover(path).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}");
        std::process::exit(1);
    })
}

/// Config values overridden by any flags given.
fn schedule_options(
    config: &GhadiConfig,
    sun: &SunArgs,
) -> Result<ScheduleOptions, GhadiyaluError> {
    let mut options = ScheduleOptions::from_config(config)?;
    if let Some(name) = &sun.zone {
        options.zone = ReferenceZone::from_name(name)?;
    }
    if let Some(n) = sun.segments {
        options.segments_per_batch = n;
    }
    if sun.fixed_evening_date {
        options.evening_label = EveningLabel::FixedToEveningDate;
    }
    Ok(options)
}

/// Pick the sunrise/sunset source and compute both schedules.
///
/// Explicit `--sunrise`/`--sunset` always mean manual entry. Otherwise a
/// city (flag or config) is looked up in the sun table, and failing that the
/// config's default sunrise and sunset are used.
fn run(
    config: &GhadiConfig,
    sun: &SunArgs,
    date: NaiveDate,
    options: &ScheduleOptions,
) -> Result<CalculationResult, GhadiyaluError> {
    let manual_requested = sun.sunrise.is_some() || sun.sunset.is_some();
    let city = sun.city.as_deref().or(config.city.as_deref());

    match city {
        Some(name) if !manual_requested => {
            let city = find_city(name)?;
            let table_path = sun
                .sun_table
                .as_deref()
                .or(config.sun_table.as_deref())
                .ok_or_else(|| {
                    SourceError::Table(format!(
                        "city lookup for {} needs a sun table (--sun-table)",
                        city.name
                    ))
                })?;
            tracing::debug!(city = city.name, table = %table_path.display(), "using sun table");
            let source = AstronomicalSource::new(SunTable::load(table_path)?, *city);
            calculate_from(&source, date, options)
        }
        _ => {
            let sunrise = match &sun.sunrise {
                Some(s) => ClockTime::parse(s)?,
                None => config.default_sunrise()?,
            };
            let sunset = match &sun.sunset {
                Some(s) => ClockTime::parse(s)?,
                None => config.default_sunset()?,
            };
            calculate_from(&ManualSource::new(sunrise, sunset), date, options)
        }
    }
}

/// `YYYY-MM-DD`, validated as a calendar date.
fn parse_date(s: &str) -> Result<NaiveDate, GhadiyaluError> {
    Ok(parse_iso_date(s)?)
}

const NOW_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Local date and time in the reference zone.
fn parse_now(s: &str, zone: ReferenceZone) -> Result<Instant, GhadiyaluError> {
    let s = s.trim();
    let naive = NOW_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| TimeError::InvalidDateFormat {
            input: s.to_string(),
            expected: "YYYY-MM-DD HH:MM[:SS]",
        })?;
    Ok(zone.localize_naive(naive)?)
}

fn print_result(result: &CalculationResult, now: Option<&Instant>, json: bool) {
    if json {
        print_json(&serde_json::to_string_pretty(&result.report(now)));
    } else {
        print!("{}", render_table(result, now));
    }
}

fn print_json(out: &Result<String, serde_json::Error>) {
    match out {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize: {e}");
            std::process::exit(1);
        }
    }
}

/// Header lines followed by one row per ghadi; the running ghadi is
/// prefixed with `*`.
fn render_table(result: &CalculationResult, now: Option<&Instant>) -> String {
    let rows: Vec<_> = match now {
        Some(now) => result.active_rows(now),
        None => result.combined_rows().into_iter().map(|r| (r, false)).collect(),
    };

    let mut out = String::new();
    out.push_str(&result.date_line());
    out.push('\n');
    out.push_str(&result.sun_line());
    out.push_str("\n\n");
    out.push_str(&format_line("", &ROW_HEADERS.map(|h| h.to_string())));
    for (row, active) in &rows {
        out.push_str(&format_line(if *active { "*" } else { "" }, &row.cells()));
    }
    out
}

fn format_line(marker: &str, cells: &[String; 6]) -> String {
    format!(
        "{:<1} {:<10}  {:<9}  {:<7}  {:>8}  {:<10}  {:<10}\n",
        marker, cells[0], cells[1], cells[2], cells[3], cells[4], cells[5]
    )
}
