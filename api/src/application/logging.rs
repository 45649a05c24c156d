use tracing_subscriber::EnvFilter;

use crate::args::LogArgs;

/// Installs the global subscriber. Falls back to `info` when the filter
/// directive cannot be parsed.
pub fn init_logger(args: &LogArgs) {
    let filter = EnvFilter::try_new(&args.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if args.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
