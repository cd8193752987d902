//! stderr logging via `tracing-subscriber`.
//!
//! The configured level is the default directive; `RUST_LOG` still wins.

use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::config::LoggingConfig;

pub fn init(cfg: &LoggingConfig, verbosity: u8) {
    let level = effective_level(parse_level(&cfg.level).unwrap_or(LevelFilter::WARN), verbosity);

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_filter(filter);

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

/// Raise `base` by one step per `-v`.
fn effective_level(base: LevelFilter, verbosity: u8) -> LevelFilter {
    const LADDER: [LevelFilter; 6] = [
        LevelFilter::OFF,
        LevelFilter::ERROR,
        LevelFilter::WARN,
        LevelFilter::INFO,
        LevelFilter::DEBUG,
        LevelFilter::TRACE,
    ];
    let start = LADDER.iter().position(|l| *l == base).unwrap_or(2);
    LADDER[(start + verbosity as usize).min(LADDER.len() - 1)]
}
