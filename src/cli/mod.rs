//! `ordino_cli`: prints insights, summaries and badge progress from local
//! JSON snapshots.

pub mod output;

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{Datelike, Local};
use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigManager};
use crate::core::refresh::RefreshDriver;
use crate::core::services::{BadgeService, InsightService, ServiceError};
use crate::domain::Period;
use crate::errors::{DataError, ValidationError};
use crate::storage::JsonSnapshotSource;
use crate::taxonomy::Taxonomy;

const USAGE: &str = "\
usage:
  ordino_cli insights [--data <dir>] [--month <1-12>] [--year <yyyy>] [--json]
  ordino_cli summary  [--data <dir>] [--month <1-12>] [--year <yyyy>] [--json]
  ordino_cli watch    [--data <dir>] [--month <1-12>] [--year <yyyy>] [--ticks <n>]
  ordino_cli badge <receipts-count>";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}\n{}", USAGE)]
    Usage(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Insights(PeriodArgs),
    Summary(PeriodArgs),
    Watch { args: PeriodArgs, ticks: usize },
    Badge(i64),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct PeriodArgs {
    data: Option<PathBuf>,
    month: Option<u32>,
    year: Option<i32>,
    json: bool,
}

impl PeriodArgs {
    fn period(&self) -> Result<Period, CliError> {
        let today = Local::now().date_naive();
        let year = self.year.unwrap_or_else(|| today.year());
        let month = match self.month {
            Some(0) => return Err(CliError::Usage("--month is 1-based (1-12)".into())),
            Some(month) => month - 1,
            None => today.month0(),
        };
        Ok(Period::new(month, year)?)
    }

    fn source(&self, config: &Config) -> JsonSnapshotSource {
        let dir = self
            .data
            .clone()
            .unwrap_or_else(|| config.resolved_data_dir());
        JsonSnapshotSource::new(dir)
    }
}

/// Entry point for the binary: reads process arguments, writes to stdout.
pub fn run_cli() -> Result<(), CliError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = ConfigManager::new().load()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, &config, &mut out)
}

pub fn run(args: &[String], config: &Config, out: &mut dyn Write) -> Result<(), CliError> {
    if !config.ui_color_enabled {
        colored::control::set_override(false);
    }
    match parse(args)? {
        Command::Insights(args) => {
            let period = args.period()?;
            let snapshot = args.source(config).load()?;
            let insights = InsightService::compute_insights_with(
                Taxonomy::standard(),
                &config.rules,
                &snapshot.transactions,
                &snapshot.budgets,
                period,
            )?;
            if args.json {
                let json = serde_json::to_string_pretty(&insights).map_err(DataError::from)?;
                writeln!(out, "{json}")?;
            } else {
                writeln!(out, "=== {} ===", period)?;
                for insight in &insights {
                    writeln!(out, "{}", output::insight_line(insight, &config.currency))?;
                }
            }
        }
        Command::Summary(args) => {
            let period = args.period()?;
            let snapshot = args.source(config).load()?;
            let summary = InsightService::summarize_period(&snapshot.transactions, period)?;
            if args.json {
                let json = serde_json::to_string_pretty(&summary).map_err(DataError::from)?;
                writeln!(out, "{json}")?;
            } else {
                for line in output::summary_lines(&summary, &config.currency) {
                    writeln!(out, "{line}")?;
                }
            }
        }
        Command::Watch { args, ticks } => {
            let period = args.period()?;
            let driver = RefreshDriver::new(args.source(config), config.rules);
            info!(period = %period, ticks, "watching snapshot directory");
            let mut write_error = None;
            driver.watch(period, config.refresh_interval(), ticks, |dashboard| {
                for line in output::dashboard_lines(dashboard, &config.currency) {
                    if let Err(err) = writeln!(out, "{line}") {
                        write_error.get_or_insert(err);
                    }
                }
            });
            if let Some(err) = write_error {
                return Err(err.into());
            }
        }
        Command::Badge(count) => {
            let progress = BadgeService::classify(count)?;
            writeln!(out, "{}", output::badge_line(&progress))?;
        }
    }
    Ok(())
}

fn parse(args: &[String]) -> Result<Command, CliError> {
    let (command, rest) = args
        .split_first()
        .ok_or_else(|| CliError::Usage("missing command".into()))?;
    match command.as_str() {
        "insights" => Ok(Command::Insights(parse_period_args(rest, &[])?.0)),
        "summary" => Ok(Command::Summary(parse_period_args(rest, &[])?.0)),
        "watch" => {
            let (args, extra) = parse_period_args(rest, &["--ticks"])?;
            if args.json {
                return Err(CliError::Usage("watch does not support --json".into()));
            }
            let ticks = match extra.first() {
                Some((_, value)) => parse_number("--ticks", value)?,
                None => 1,
            };
            Ok(Command::Watch { args, ticks })
        }
        "badge" => match rest {
            [count] => Ok(Command::Badge(parse_number("receipts-count", count)?)),
            _ => Err(CliError::Usage("badge expects exactly one count".into())),
        },
        other => Err(CliError::Usage(format!("unknown command `{other}`"))),
    }
}

type ExtraFlags<'a> = Vec<(&'a str, &'a str)>;

fn parse_period_args<'a>(
    args: &'a [String],
    extra_flags: &[&str],
) -> Result<(PeriodArgs, ExtraFlags<'a>), CliError> {
    let mut parsed = PeriodArgs::default();
    let mut extra = Vec::new();
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        if flag == "--json" {
            parsed.json = true;
            continue;
        }
        let value = iter
            .next()
            .ok_or_else(|| CliError::Usage(format!("{flag} expects a value")))?;
        match flag.as_str() {
            "--data" => parsed.data = Some(PathBuf::from(value)),
            "--month" => parsed.month = Some(parse_number("--month", value)?),
            "--year" => parsed.year = Some(parse_number("--year", value)?),
            known if extra_flags.contains(&known) => extra.push((known, value.as_str())),
            other => return Err(CliError::Usage(format!("unknown option `{other}`"))),
        }
    }
    Ok((parsed, extra))
}

fn parse_number<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, CliError> {
    raw.trim()
        .parse()
        .map_err(|_| CliError::Usage(format!("{name} must be a number, got `{raw}`")))
}
