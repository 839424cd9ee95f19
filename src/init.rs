//! Initialization that needs to be done on startup

use log::LevelFilter;

/// Performs any global state initialization that needs to be done before performing image operations.
///
/// `verbosity` is the number of `-v` flags: warnings only by default, then info, debug and trace.
/// `RUST_LOG` overrides it when set.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // a logger can only be installed once per process; later calls are no-ops
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .try_init();
}
