use tracing_subscriber::EnvFilter;

use crate::args::LogArgs;

/// Logs go to stderr so stdout only carries command output. `RUST_LOG` overrides
/// `--log-level` when set.
pub fn init_logger(args: &LogArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if args.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}
