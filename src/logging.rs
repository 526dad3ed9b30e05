//! Stderr logging for the `termshell` binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging for the given `-v` count.
///
/// `0` shows warnings, `1` info, `2` or more debug. `RUST_LOG` takes
/// precedence when set.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}

const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "termshell=warn",
        1 => "termshell=info",
        _ => "termshell=debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "termshell=warn");
        assert_eq!(default_directive(1), "termshell=info");
        assert_eq!(default_directive(5), "termshell=debug");
    }
}
