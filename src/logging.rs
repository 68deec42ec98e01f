//! Tracing subscriber setup
//!
//! Logs go to stderr so stdout stays clean for the report (and for `--json`).
//! `RUST_LOG` wins over the `-v` count when set.

use is_terminal::IsTerminal;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Level for a `-v` count: none = warn, `-v` = info, `-vv` = debug, more = trace.
pub fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn filter_for(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level_for(verbose).to_string().to_lowercase();
        EnvFilter::new(format!("warn,kunit_insert={level}"))
    })
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(verbose: u8) {
    let ansi = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .try_init();
}
