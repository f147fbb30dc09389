use std::path::Path;

use miette::{Context, IntoDiagnostic, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
    Layer,
};


/// Sets up the global tracing subscriber.
///
/// Console output always goes to standard error so that role listings printed
/// to standard output stay machine-readable. If `log_file_output_directory` is set,
/// events are additionally written to `log_file_name` inside it.
///
/// The returned guard must be kept alive until the program exits,
/// otherwise buffered file output can be lost.
pub fn initialize_tracing(
    console_level_filter: EnvFilter,
    log_file_level_filter: EnvFilter,
    log_file_output_directory: Option<&Path>,
    log_file_name: &str,
) -> Result<Option<WorkerGuard>> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(console_level_filter);

    let (file_layer, guard) = match log_file_output_directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::never(directory, log_file_name);
            let (non_blocking_appender, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking_appender)
                .with_filter(log_file_level_filter);

            (Some(file_layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("Failed to install the global tracing subscriber.")?;

    Ok(guard)
}


/// The console filter from `RUST_LOG`, if that is set and valid,
/// otherwise `configured_filter`.
pub fn console_filter_with_environment_override(configured_filter: EnvFilter) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or(configured_filter)
}
