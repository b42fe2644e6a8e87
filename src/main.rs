use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use four_pillars::adapters::SolarTermCalendar;
use four_pillars::application::{
    BuildTimelineCommand, BuildTimelineHandler, GenerateReportCommand, GenerateReportHandler,
};
use four_pillars::config::{AppConfig, LoggingConfig};
use four_pillars::domain::foundation::{DomainError, ErrorCode};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "four-pillars")]
#[command(about = "Four Pillars chart engine - birth data in, chart report out", long_about = None)]
#[command(version)]
struct Cli {
    /// Emit single-line JSON instead of pretty-printed output
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the full chart report
    Report {
        #[command(flatten)]
        birth: BirthArgs,
    },

    /// Build the year-by-year timeline with active luck cycles
    Timeline {
        #[command(flatten)]
        birth: BirthArgs,

        /// Number of years after birth (defaults to the configured length)
        #[arg(long)]
        years: Option<u32>,
    },
}

#[derive(Args)]
struct BirthArgs {
    /// Read the command as JSON from stdin instead of flags
    #[arg(long, conflicts_with_all = ["date", "time", "longitude", "latitude", "gender"])]
    stdin: bool,

    /// Local birth date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,

    /// Local birth time (HH:MM)
    #[arg(long)]
    time: Option<String>,

    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    longitude: Option<f64>,

    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    latitude: Option<f64>,

    /// male or female
    #[arg(long)]
    gender: Option<String>,
}

impl BirthArgs {
    fn into_command(self) -> Result<GenerateReportCommand, String> {
        if self.stdin {
            return read_stdin_json();
        }
        Ok(GenerateReportCommand {
            birth_date: self.date,
            birth_time: self.time,
            longitude: self.longitude,
            latitude: self.latitude,
            gender: self.gender,
        })
    }
}

fn read_stdin_json<T: serde::de::DeserializeOwned>() -> Result<T, String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| format!("Failed to read stdin: {e}"))?;
    serde_json::from_str(&input).map_err(|e| format!("Invalid JSON command: {e}"))
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries the JSON result, so logs go to stderr
    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: String,
    message: &'a str,
    details: &'a std::collections::HashMap<String, String>,
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> ExitCode {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    match rendered {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[{}] Failed to serialize output: {e}", ErrorCode::InternalError);
            ExitCode::FAILURE
        }
    }
}

fn print_domain_error(err: &DomainError, compact: bool) -> ExitCode {
    let body = ErrorBody {
        code: err.code.to_string(),
        message: &err.message,
        details: &err.details,
    };
    print_json(&serde_json::json!({ "error": body }), compact);
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load_validated() {
        Ok(config) => config,
        Err(e) => {
            let err = DomainError::new(ErrorCode::InvalidConfiguration, e.to_string());
            print_domain_error(&err, cli.compact);
            return ExitCode::from(2);
        }
    };
    init_tracing(&config.logging);

    let oracle = Arc::new(SolarTermCalendar::new());

    match cli.command {
        Commands::Report { birth } => {
            let cmd = match birth.into_command() {
                Ok(cmd) => cmd,
                Err(e) => {
                    eprintln!("{e}");
                    return ExitCode::from(2);
                }
            };
            let handler = GenerateReportHandler::new(oracle, config.engine);
            match handler.handle(&cmd) {
                Ok(report) => print_json(&report, cli.compact),
                Err(err) => print_domain_error(&err, cli.compact),
            }
        }
        Commands::Timeline { birth, years } => {
            let birth = match birth.into_command() {
                Ok(cmd) => cmd,
                Err(e) => {
                    eprintln!("{e}");
                    return ExitCode::from(2);
                }
            };
            let handler = BuildTimelineHandler::new(oracle, config.engine);
            match handler.handle(&BuildTimelineCommand { birth, years }) {
                Ok(result) => print_json(&result, cli.compact),
                Err(err) => print_domain_error(&err, cli.compact),
            }
        }
    }
}
