//! Logging utilities and structured logging support
//!
//! Library code logs through these re-exports of the `log` macros; the
//! host picks the backend.

pub use log::{debug, trace, warn};

/// Install `env_logger` as the backend, ignoring a logger that is already installed
///
/// Returns whether this call installed it. Safe to call from every test.
pub fn try_init() -> bool {
    env_logger::builder().is_test(cfg!(test)).try_init().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_init_is_idempotent() {
        try_init();
        assert!(!try_init());
        debug!("logger installed");
    }
}
