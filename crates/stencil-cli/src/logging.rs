//! Diagnostics for the `stencil` binary.
//!
//! The core and adapter crates emit `tracing` events (tree rendered, snapshot
//! loaded, each entry written); this module decides which of them reach
//! stderr. `RUST_LOG` replaces the flag-derived filter entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events the default filter lets through.
const CRATES: [&str; 3] = ["stencil", "stencil_core", "stencil_adapters"];

/// Install the stderr subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(args.log_level())));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// `stencil=<lvl>,stencil_core=<lvl>,...`; dependencies stay silent.
fn filter_directive(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_names_each_stencil_crate() {
        assert_eq!(
            filter_directive(LevelFilter::DEBUG),
            "stencil=debug,stencil_core=debug,stencil_adapters=debug"
        );
    }

    #[test]
    fn directive_parses_as_env_filter() {
        for level in [LevelFilter::ERROR, LevelFilter::WARN, LevelFilter::TRACE] {
            assert!(EnvFilter::try_new(filter_directive(level)).is_ok());
        }
    }
}
