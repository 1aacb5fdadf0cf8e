//! Logging setup for the tickgen CLI.

use tracing_subscriber::EnvFilter;

/// Crates whose events are shown at the selected level; everything else is
/// capped at `warn`.
const CRATES: &[&str] = &["tickgen", "tickgen_fetch", "tickgen_format"];

/// Maps `-q` / `-v` flags to a level name.
const fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "warn";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Builds the default filter directive, e.g. `warn,tickgen=info,...`.
fn default_directive(verbose: u8, quiet: bool) -> String {
    let level = level_for(verbose, quiet);
    let mut directive = String::from("warn");
    for name in CRATES {
        directive.push_str(&format!(",{name}={level}"));
    }
    directive
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over flags.
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
