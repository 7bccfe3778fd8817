use std::{
    fmt::Write as _,
    io::{self, BufRead, Write as _},
    str,
};

use anyhow::bail;
use estimator::{Prediction, Predictor, Profile, config::parse_year};
use log::warn;
use machine_learning::Regressor;
use serde::Serialize;

pub const USAGE: &str = "\
Usage: salary-estimator [--until YEAR] [--json]

Reads one JSON profile per line from stdin and prints its estimated salary.

Options:
  --until YEAR  also project the estimate up to YEAR, 2020..=2100 (overrides SALARY_UNTIL)
  --json        print JSON lines instead of text
  -h, --help    print this message

Environment:
  SALARY_MODEL  model artifact path (default: model.json)
  SALARY_UNTIL  default projection horizon
  RUST_LOG      log filter";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Command line arguments.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub until: Option<i32>,
    pub format: Format,
    pub help: bool,
}

impl Args {
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--until" => {
                    let Some(year) = args.next() else {
                        bail!("--until expects a year\n\n{USAGE}");
                    };
                    parsed.until = Some(parse_year("--until", &year)?);
                }
                "--json" => parsed.format = Format::Json,
                "-h" | "--help" => parsed.help = true,
                other => bail!("unknown argument: {other}\n\n{USAGE}"),
            }
        }

        Ok(parsed)
    }
}

/// The answer to one profile.
#[derive(Debug, Serialize)]
pub struct Report {
    pub estimate: Prediction,
    pub projections: Vec<Prediction>,
}

impl Report {
    pub fn render(&self, format: Format) -> anyhow::Result<String> {
        if format == Format::Json {
            return Ok(serde_json::to_string(self)?);
        }

        let mut out = format!(
            "ESTIMATED SALARY: ${:.1}K USD ({})",
            self.estimate.salary_k, self.estimate.year
        );
        for p in &self.projections {
            write!(out, "\n  {p}")?;
        }
        Ok(out)
    }
}

/// Estimates the salary of the JSON profile in `line` and, when `until` is given, projects it to
/// every following year up to `until`.
pub fn respond<M: Regressor>(
    predictor: &Predictor<M>,
    line: &str,
    until: Option<i32>,
) -> estimator::Result<Report> {
    let profile = Profile::from_json(line)?;
    let estimate = predictor.estimate(&profile)?;

    let projections = match until {
        Some(until) => predictor.project(&profile, (estimate.year + 1)..=until)?,
        None => Vec::new(),
    };

    Ok(Report {
        estimate,
        projections,
    })
}

/// A line that could not be answered, as printed in JSON mode.
#[derive(Debug, Serialize)]
struct LineError<'a> {
    line: usize,
    error: &'a str,
}

/// Answers every JSON profile in `input`, one per line, writing one answer per profile to
/// `output`.
///
/// Blank lines are skipped. A line that can't be answered is reported in place of its answer and
/// the following lines are still read.
///
/// # Errors
/// Fails only if reading `input` or writing `output` fails.
pub fn run<M, R, W>(
    predictor: &Predictor<M>,
    input: R,
    mut output: W,
    until: Option<i32>,
    format: Format,
) -> anyhow::Result<()>
where
    M: Regressor,
    R: BufRead,
    W: io::Write,
{
    for (i, raw) in input.split(b'\n').enumerate() {
        let raw = raw?;
        let n = i + 1;

        let line = match str::from_utf8(&raw) {
            Ok(line) => line.trim(),
            Err(e) => {
                write_error(&mut output, format, n, &format!("invalid UTF-8: {e}"))?;
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        match respond(predictor, line, until) {
            Ok(report) => writeln!(output, "{}", report.render(format)?)?,
            Err(e) => write_error(&mut output, format, n, &e.to_string())?,
        }
    }

    output.flush()?;
    Ok(())
}

fn write_error<W: io::Write>(
    output: &mut W,
    format: Format,
    line: usize,
    error: &str,
) -> anyhow::Result<()> {
    warn!("line {line}: {error}");

    match format {
        Format::Text => writeln!(output, "line {line}: {error}")?,
        Format::Json => writeln!(
            output,
            "{}",
            serde_json::to_string(&LineError { line, error })?
        )?,
    }
    Ok(())
}
