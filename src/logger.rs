use tracing_subscriber::fmt::format;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;

/// Logger initialization without timestamps but with colors.
///
/// `RUST_LOG` directives are honoured; `debug` raises the default level.
/// Records from the `log` facade are bridged into tracing.
pub fn init_logger(debug: bool) {
    // Empty time formatter that doesn't print anything
    struct EmptyTime;
    impl FormatTime for EmptyTime {
        fn format_time(
            &self,
            _: &mut tracing_subscriber::fmt::format::Writer<'_>,
        ) -> std::fmt::Result {
            Ok(())
        }
    }

    let format = format()
        .with_timer(EmptyTime)
        .with_level(true)
        .with_target(true)
        .with_ansi(true);

    let default_level = if debug {
        tracing_subscriber::filter::LevelFilter::DEBUG
    } else {
        tracing_subscriber::filter::LevelFilter::INFO
    };
    let filter = tracing_subscriber::filter::EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    // Logs go to stderr so documents on stdout stay clean
    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .try_init();

    if let Err(err) = installed {
        eprintln!("Logger already initialized: {err}");
    }
}
