//! Sequence Predictor command line
//!
//! Reads one comma-separated sequence per line (from the arguments, or from
//! stdin when there are none) and writes one JSON object per line:
//!
//! ```text
//! $ sequence-predictor "1, 4, 9, 16"
//! {"input":"1, 4, 9, 16","pattern":"(a-b) -> (a-b) -> ()","predictions":[25.0,36.0,49.0,64.0,81.0]}
//! ```
//!
//! `--operations` lists the registered operations instead.
//!
//! Environment:
//! - `RUST_LOG`: log filter for stderr output (default `info`)
//! - `PREDICT_STEPS`: predictions per sequence (default 5)
//! - `PREDICT_FUZZY_THRESHOLD`, `PREDICT_MAX_DEPTH`: search tunables

mod input;

use predict::{OperationRegistry, PredictError, Predictor, PredictorConfig};
use serde::Serialize;
use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_STEPS: usize = 5;
const ENV_STEPS: &str = "PREDICT_STEPS";

/// Outcome for one input line
#[derive(Debug, Serialize)]
struct Report {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    predictions: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<PredictError>,
}

impl Report {
    fn failed(input: &str, error: PredictError) -> Self {
        Self {
            input: input.to_string(),
            pattern: None,
            predictions: Vec::new(),
            error: Some(error),
        }
    }
}

/// Predictions per sequence, from `PREDICT_STEPS`
fn steps_from_env() -> Result<usize, PredictError> {
    match env::var(ENV_STEPS) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| PredictError::config(format!("{}='{}': {}", ENV_STEPS, raw, e))),
        Err(_) => Ok(DEFAULT_STEPS),
    }
}

fn predict_line(line: &str, config: &PredictorConfig, steps: usize) -> Report {
    let values = match input::parse(line) {
        Ok(v) => v,
        Err(e) => return Report::failed(line, e.into()),
    };

    let mut predictor = Predictor::new(values).with_config(config.clone());
    if let Err(e) = predictor.initialize() {
        return Report::failed(line, e);
    }

    Report {
        input: line.to_string(),
        pattern: Some(predictor.pattern_description()),
        predictions: predictor.prediction_stream().take(steps).collect(),
        error: None,
    }
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> io::Result<()> {
    let json = serde_json::to_string(value).map_err(io::Error::from)?;
    writeln!(out, "{}", json)?;
    out.flush()
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match PredictorConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(2);
        }
    };
    let steps = match steps_from_env() {
        Ok(s) => s,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(2);
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();
    let mut stdout = io::stdout().lock();

    if args.iter().any(|a| a == "--operations") {
        return match write_json(&mut stdout, &OperationRegistry::standard().list()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("Error writing output: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    info!(steps, threshold = config.fuzzy_threshold, "sequence predictor v{} started", env!("CARGO_PKG_VERSION"));

    let lines: Box<dyn Iterator<Item = io::Result<String>>> = if args.is_empty() {
        Box::new(io::stdin().lock().lines())
    } else {
        Box::new(args.into_iter().map(Ok::<String, io::Error>))
    };

    let mut failures = 0usize;
    for line in lines {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("Error reading input: {}", e);
                return ExitCode::FAILURE;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let report = predict_line(line, &config, steps);
        match &report.error {
            Some(e) => {
                failures += 1;
                debug!(input = line, "{}", e);
            }
            None => debug!(input = line, pattern = report.pattern.as_deref(), "predicted"),
        }

        if let Err(e) = write_json(&mut stdout, &report) {
            error!("Error writing response: {}", e);
            return ExitCode::FAILURE;
        }
    }

    info!(failures, "done");
    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
