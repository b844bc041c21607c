use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use runcal::{Context, build_run_calendar, calendar_file_name, render_calendar};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = match parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    init_logging(cli.verbosity);

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &CliConfig) -> Result<(), String> {
    let config = match &cli.config {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| format!("failed to read config file {}: {err}", path.display()))?,
        None => read_stdin_input()?,
    };

    let ctx = Context { processing_year: cli.processing_year };
    let records = build_run_calendar(&config, &ctx).map_err(|err| err.to_string())?;

    let out_path = cli.out_dir.join(calendar_file_name(cli.processing_year));
    fs::write(&out_path, render_calendar(&records))
        .map_err(|err| format!("failed to write {}: {err}", out_path.display()))?;

    info!(path = %out_path.display(), records = records.len(), "calendar written");
    println!("wrote {} calendar records to {}", records.len(), out_path.display());
    Ok(())
}

struct CliConfig {
    processing_year: i32,
    config: Option<PathBuf>,
    out_dir: PathBuf,
    verbosity: u8,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut processing_year: Option<i32> = None;
    let mut config: Option<PathBuf> = None;
    let mut out_dir = PathBuf::from(".");
    let mut verbosity = 0u8;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("runcal {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-v" => verbosity = verbosity.saturating_add(1),
            "-vv" => verbosity = verbosity.saturating_add(2),
            "--ProcessingYear" => {
                let value = args.next().ok_or_else(|| "error: --ProcessingYear expects a value".to_string())?;
                processing_year = Some(parse_year(&value)?);
            }
            "--config" | "-c" => {
                let value = args.next().ok_or_else(|| "error: --config expects a value".to_string())?;
                config = Some(PathBuf::from(value));
            }
            "--out-dir" => {
                let value = args.next().ok_or_else(|| "error: --out-dir expects a value".to_string())?;
                out_dir = PathBuf::from(value);
            }
            _ if arg.starts_with("--ProcessingYear=") => {
                let value = arg.trim_start_matches("--ProcessingYear=");
                processing_year = Some(parse_year(value)?);
            }
            _ if arg.starts_with("--config=") => {
                config = Some(PathBuf::from(arg.trim_start_matches("--config=")));
            }
            _ if arg.starts_with("--out-dir=") => {
                out_dir = PathBuf::from(arg.trim_start_matches("--out-dir="));
            }
            _ => {
                return Err(format!("error: unknown option '{arg}'\n\n{}", help_text()));
            }
        }
    }

    let processing_year = processing_year
        .ok_or_else(|| format!("error: --ProcessingYear is required\n\n{}", help_text()))?;

    Ok(CliConfig { processing_year, config, out_dir, verbosity })
}

fn parse_year(value: &str) -> Result<i32, String> {
    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        value.parse().map_err(|_| format!("error: invalid --ProcessingYear '{value}'"))
    } else {
        Err(format!("error: invalid --ProcessingYear '{value}' (expected a 4-digit year)"))
    }
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

/// Map `-v` counts to a default log level; `RUST_LOG` overrides when set.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("runcal={level}")));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn help_text() -> String {
    format!(
        "runcal {version}

Expands extract scheduling rules into a run calendar for one year.

Usage:
  runcal --ProcessingYear <YYYY> [OPTIONS]

Options:
  --ProcessingYear <YYYY>    Year to create the calendar for (4 digits, required).
  -c, --config <path>        Configuration file to read. Reads stdin if omitted.
  --out-dir <path>           Directory for RunCalendar_<YYYY>.txt. Default: current directory.
  -v                         Increase log verbosity (repeatable).
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Configuration or I/O error; no calendar file is written.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
