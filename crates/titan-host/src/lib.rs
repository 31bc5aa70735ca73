pub mod runner;
pub mod storage;

pub use runner::GameRunner;
pub use storage::{HighScoreStore, StorageError};

/// Install `env_logger` for native hosts. `RUST_LOG` overrides `default_level`.
/// Safe to call more than once.
pub fn init_logging(default_level: log::LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();
}
