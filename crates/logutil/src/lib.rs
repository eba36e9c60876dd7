use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    HumanReadable,
    Json,
}

/// Configure the global tracing subscriber.
///
/// `default_level` is used when `RUST_LOG` doesn't provide a directive.
pub fn configure_global_logger(
    default_level: tracing::Level,
    format: LogFormat,
) -> Result<(), SetGlobalDefaultError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let builder = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true);

    match format {
        LogFormat::HumanReadable => tracing::subscriber::set_global_default(builder.finish()),
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
    }
}

/// Install a subscriber that writes through the test harness' captured output.
///
/// Safe to call from every test, only the first call installs anything.
pub fn init_test_logger() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::TRACE.into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_test_writer()
        .with_env_filter(env_filter)
        .with_file(true)
        .with_line_number(true)
        .finish();

    // Already set by a previous test.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
