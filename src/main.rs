use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sre_drills::data::duration::parse_duration;
use sre_drills::report::{self, BackupView, DiskView, HealthView, LogView, ReportView};
use sre_drills::{
    analyze_logs, calculate_backup_time, contains_duplicate, find_max, find_min,
    monitor_disk_usage, run_health_check, top_k_frequent, two_sum, Clock, FileSource, FixedClock,
    ParseMode, ReaderSource, Settings, SystemClock, TextSource,
};

/// Settings file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG: &str = "drills.toml";

#[derive(Parser, Debug)]
#[command(name = "sre-drills")]
#[command(about = "Sequence warm-ups and SRE drills: disk bands, backups, logs and health checks")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Settings file (TOML or JSON) with thresholds and inventory
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Pin the clock for reproducible timestamps ("YYYY-MM-DD HH:MM:SS")
    #[arg(long, global = true)]
    now: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report whether any value appears at least twice
    Dup(Numbers),

    /// Largest value
    Max(Numbers),

    /// Smallest value
    Min(Numbers),

    /// Indices of the first two values that add up to the target
    #[command(name = "two-sum")]
    TwoSum {
        /// Sum to look for
        #[arg(short, long, allow_negative_numbers = true)]
        target: i64,

        #[command(flatten)]
        numbers: Numbers,
    },

    /// The K most frequent values
    #[command(name = "top-k")]
    TopK {
        /// How many values to return
        #[arg(short = 'k', default_value_t = 2)]
        k: usize,

        #[command(flatten)]
        numbers: Numbers,
    },

    /// Band the configured servers by disk usage
    Disk {
        /// Warning cutoff in percent (overrides settings)
        #[arg(long)]
        warning: Option<f64>,

        /// Critical cutoff in percent (overrides settings)
        #[arg(long)]
        critical: Option<f64>,
    },

    /// Project backup time for the configured databases
    Backup {
        /// Network speed in GB per hour (overrides settings)
        #[arg(long)]
        speed: Option<f64>,
    },

    /// Tally a log file (or stdin)
    Logs(LogsArgs),

    /// Evaluate the configured services
    Health {
        /// Response time limit, e.g. "2s" or "500ms" (overrides settings)
        #[arg(long)]
        max_latency: Option<String>,
    },

    /// Run every SRE drill over the configured inventory
    Run {
        /// Export the full report to a JSON file
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(ClapArgs, Debug)]
struct Numbers {
    /// Input values
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    values: Vec<i64>,
}

#[derive(ClapArgs, Debug)]
struct LogsArgs {
    /// Log file to read; falls back to `log_file` from settings, then stdin
    file: Option<PathBuf>,

    /// Skip malformed lines instead of failing
    #[arg(long)]
    lenient: bool,

    /// Number of error messages to rank
    #[arg(long)]
    top: Option<usize>,

    /// Level tag counted as an error
    #[arg(long)]
    error_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let clock = build_clock(args.now.as_deref())?;

    match args.command {
        Command::Dup(numbers) => println!("{}", contains_duplicate(&numbers.values)),
        Command::Max(numbers) => println!("{}", find_max(&numbers.values)?),
        Command::Min(numbers) => println!("{}", find_min(&numbers.values)?),
        Command::TwoSum { target, numbers } => match two_sum(&numbers.values, target) {
            Some((i, j)) => println!("[{}, {}]", i, j),
            None => println!("[]"),
        },
        Command::TopK { k, numbers } => println!("{:?}", top_k_frequent(&numbers.values, k)),
        Command::Disk { warning, critical } => {
            let mut settings = load_settings(args.config.as_deref())?;
            if let Some(warning) = warning {
                settings.disk.warning = warning;
            }
            if let Some(critical) = critical {
                settings.disk.critical = critical;
            }
            let report = monitor_disk_usage(settings.servers(), &settings.disk)?;
            print!("{}", DiskView(&report));
        }
        Command::Backup { speed } => {
            let settings = load_settings(args.config.as_deref())?;
            let speed = speed.unwrap_or(settings.backup.network_speed_gbph);
            let plan = calculate_backup_time(settings.databases(), speed, clock.as_ref())?;
            print!("{}", BackupView(&plan));
        }
        Command::Logs(logs) => run_logs(logs, args.config.as_deref())?,
        Command::Health { max_latency } => {
            let mut settings = load_settings(args.config.as_deref())?;
            if let Some(limit) = max_latency {
                settings.health.max_response_time = parse_duration(&limit)?;
            }
            let report = run_health_check(settings.services(), &settings.health, clock.as_ref());
            print!("{}", HealthView(&report));
        }
        Command::Run { export, json } => {
            let settings = load_settings(args.config.as_deref())?;
            let log_text = match &settings.log_file {
                Some(path) => Some(FileSource::new(path).read_text()?),
                None => None,
            };

            let drills = report::run_all(&settings, log_text.as_deref(), clock.as_ref())?;

            if json {
                println!("{}", report::to_json(&drills)?);
            } else {
                print!("{}", ReportView(&drills));
            }

            if let Some(path) = export {
                report::export_to_file(&drills, &path)?;
                eprintln!("Exported drill report to: {}", path.display());
            }
        }
    }

    Ok(())
}

/// Tally log text from the first available source
fn run_logs(args: LogsArgs, config: Option<&Path>) -> Result<()> {
    let mut settings = load_settings(config)?;
    let mut source: Box<dyn TextSource> = match resolve_logs(args, &mut settings) {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(ReaderSource::stdin()),
    };
    debug!(source = source.description(), "reading log text");

    let text = source.read_text()?;
    let report = analyze_logs(&text, &settings.logs)
        .with_context(|| format!("Failed to analyze {}", source.description()))?;
    print!("{}", LogView(&report));
    Ok(())
}

/// Apply the `logs` flags over the settings and pick the log file.
///
/// The positional file wins over `log_file` from settings; `None` means stdin.
fn resolve_logs(args: LogsArgs, settings: &mut Settings) -> Option<PathBuf> {
    if args.lenient {
        settings.logs.mode = ParseMode::Lenient;
    }
    if let Some(top) = args.top {
        settings.logs.top_errors = top;
    }
    if let Some(level) = args.error_level {
        settings.logs.error_level = level;
    }
    args.file.or_else(|| settings.log_file.clone())
}

/// Load settings from `--config`, or `drills.toml` in the working directory if present
fn load_settings(config: Option<&Path>) -> Result<Settings> {
    let default = Path::new(DEFAULT_CONFIG);
    let path = config.or_else(|| default.exists().then_some(default));
    debug!(config = ?path, "loading settings");
    Settings::load(path)
}

fn build_clock(now: Option<&str>) -> Result<Box<dyn Clock>> {
    match now {
        Some(s) => {
            let clock = FixedClock::parse(s)
                .with_context(|| format!("Invalid --now value {:?}, expected YYYY-MM-DD HH:MM:SS", s))?;
            Ok(Box::new(clock))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

/// Install the stderr log subscriber; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_two_sum_with_negative_values() {
        let args =
            Args::try_parse_from(["sre-drills", "two-sum", "--target", "-1", "3", "-4", "5"])
                .unwrap();
        match args.command {
            Command::TwoSum { target, numbers } => {
                assert_eq!(target, -1);
                assert_eq!(numbers.values, vec![3, -4, 5]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_top_k() {
        let args = Args::try_parse_from(["sre-drills", "top-k", "-k", "1", "7", "7", "8"]).unwrap();
        assert!(matches!(args.command, Command::TopK { k: 1, .. }));
    }

    #[test]
    fn test_numbers_required() {
        assert!(Args::try_parse_from(["sre-drills", "max"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "sre-drills",
            "run",
            "--now",
            "2026-01-07 22:00:00",
            "--config",
            "fixtures/drills.toml",
        ])
        .unwrap();
        assert_eq!(args.now.as_deref(), Some("2026-01-07 22:00:00"));
        assert_eq!(args.config, Some(PathBuf::from("fixtures/drills.toml")));
    }

    fn logs_args(argv: &[&str]) -> LogsArgs {
        let args = Args::try_parse_from(argv).unwrap();
        match args.command {
            Command::Logs(logs) => logs,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_logs_applies_flags() {
        let args = logs_args(&[
            "sre-drills",
            "logs",
            "--lenient",
            "--top",
            "5",
            "--error-level",
            "FATAL",
        ]);
        let mut settings = Settings::default();

        assert_eq!(resolve_logs(args, &mut settings), None);
        assert_eq!(settings.logs.mode, ParseMode::Lenient);
        assert_eq!(settings.logs.top_errors, 5);
        assert_eq!(settings.logs.error_level, "FATAL");
    }

    #[test]
    fn test_resolve_logs_keeps_settings_without_flags() {
        let mut settings = Settings::default();
        let before = settings.logs.clone();

        resolve_logs(logs_args(&["sre-drills", "logs"]), &mut settings);
        assert_eq!(settings.logs, before);
    }

    #[test]
    fn test_resolve_logs_file_fallback() {
        let mut settings = Settings {
            log_file: Some(PathBuf::from("/var/log/app.log")),
            ..Settings::default()
        };

        let from_settings = resolve_logs(logs_args(&["sre-drills", "logs"]), &mut settings);
        assert_eq!(from_settings, Some(PathBuf::from("/var/log/app.log")));

        let explicit = resolve_logs(logs_args(&["sre-drills", "logs", "today.log"]), &mut settings);
        assert_eq!(explicit, Some(PathBuf::from("today.log")));
    }

    #[test]
    fn test_build_clock() {
        let clock = build_clock(Some("2026-01-07 22:00:00")).unwrap();
        assert_eq!(clock.now().to_string(), "2026-01-07 22:00:00");
        assert!(build_clock(Some("not a time")).is_err());
    }
}
