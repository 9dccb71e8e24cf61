//! Log output for hosts that don't install their own logger
//!
//! The crate only emits through the `log` facade. Calling [`init`] is optional.

use env_logger::{Builder, Env};

/// Install an `env_logger` writing to stderr.
///
/// `RUST_LOG` takes precedence; otherwise this crate logs at `debug` when
/// `debug` is set and at `warn` when it isn't. Returns `false` if a logger was
/// already installed.
pub fn init(debug: bool) -> bool {
    let default = if debug {
        "warn,homeregistry_client=debug"
    } else {
        "warn"
    };

    Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init()
        .is_ok()
}
