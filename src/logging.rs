use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

/// Install the global subscriber, appending to `path`.
///
/// Falls back to stderr when the log file cannot be opened. Calling this
/// twice leaves the first subscriber in place.
pub fn init(path: &Path) {
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("failed to open log file {}: {err}", path.display());
            let _ = tracing_subscriber::fmt()
                .with_max_level(Level::INFO)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
            return;
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}
