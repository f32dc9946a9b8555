//! Browser console logging

use crate::config::AppConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// Route `tracing` events to the browser console
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let level = AppConfig::LOG_LEVEL
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::INFO);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(level);

    if tracing_subscriber::registry().with(fmt_layer).try_init().is_ok() {
        debug!(api = AppConfig::API_BASE_URL, %level, "logging initialized");
    }
}
