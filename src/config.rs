use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::options::WindowOptions;

pub const COOKIE_FILE_NAME: &str = "cookies.json";
pub const LOG_FILE_NAME: &str = "app.log";
pub const DEFAULT_COOKIE_DOMAIN: &str = ".grok.com";

/// Fixed application settings. There are no CLI flags or environment
/// overrides; everything comes from [`AppConfig::default`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub window: WindowOptions,
    /// Lives next to the executable.
    pub cookie_file: PathBuf,
    /// Lives in the working directory.
    pub log_file: PathBuf,
    /// Substituted when a cookie carries no domain.
    pub default_domain: String,
    /// Pause before exiting after a fatal startup error.
    pub exit_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowOptions {
                title: Some("Grok".to_string()),
                url: Some("https://grok.com".to_string()),
                width: Some(1280.0),
                height: Some(720.0),
                resizable: None,
                devtools: None,
            },
            cookie_file: base_dir().join(COOKIE_FILE_NAME),
            log_file: PathBuf::from(LOG_FILE_NAME),
            default_domain: DEFAULT_COOKIE_DOMAIN.to_string(),
            exit_delay: Duration::from_secs(2),
        }
    }
}

/// Directory containing the running executable, or the working directory
/// when that cannot be determined.
pub fn base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
