//! Diagnostic logging for rfleetlog, built on `tracing`.
//!
//! User-facing output goes through `ui::messages`; this is for the `-v`
//! and `RUST_LOG` diagnostics written to stderr.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and above.
    #[default]
    Normal,
    /// Debug and above.
    Verbose,
    /// Everything.
    Trace,
}

impl Verbosity {
    /// Map `-q` / repeated `-v` flags to a verbosity.
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Trace,
        }
    }

    #[must_use]
    pub fn to_level(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over
/// `verbosity`. Calling it twice is harmless.
pub fn init_logging(verbosity: Verbosity) {
    let default_filter = format!("rfleetlog={}", verbosity.to_level());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(false)
            .with_line_number(false),
    );

    let _ = subscriber.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_to_verbosity() {
        assert_eq!(Verbosity::from_flags(true, 3), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(false, 1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, 2), Verbosity::Trace);
    }

    #[test]
    fn verbosity_to_level() {
        assert_eq!(Verbosity::Quiet.to_level(), Level::ERROR);
        assert_eq!(Verbosity::Normal.to_level(), Level::WARN);
        assert_eq!(Verbosity::Verbose.to_level(), Level::DEBUG);
        assert_eq!(Verbosity::Trace.to_level(), Level::TRACE);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_logging(Verbosity::Normal);
        init_logging(Verbosity::Trace);
    }
}
