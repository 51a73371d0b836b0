//! Logger bootstrap for the CLI and for tests that want to see diagnostics.
//!
//! Library code only talks to the `log` facade; installing a backend is left
//! to the binary.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Picks the default filter for the given verbosity.
#[must_use]
pub const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initialises `env_logger`, honouring `RUST_LOG` over the verbosity default.
///
/// Returns `false` when a logger was already installed, which lets tests call
/// this repeatedly.
#[must_use]
pub fn init(verbose: bool) -> bool {
    let env = Env::default().default_filter_or(default_level(verbose).to_string());
    Builder::from_env(env).try_init().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serial_test::serial;

    #[rstest]
    #[case(true, LevelFilter::Debug)]
    #[case(false, LevelFilter::Warn)]
    fn verbosity_selects_level(#[case] verbose: bool, #[case] expected: LevelFilter) {
        assert_eq!(default_level(verbose), expected);
    }

    #[rstest]
    #[serial]
    fn repeated_init_is_tolerated() {
        let _first = init(false);
        assert!(!init(true));
    }
}
