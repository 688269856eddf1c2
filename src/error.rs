use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed cookie file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize cookies: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("webview runtime is not available on {platform}")]
    RuntimeUnavailable { platform: String },

    #[error("failed to create window: {0}")]
    Window(#[from] tao::error::OsError),

    #[error("failed to create webview: {0}")]
    Webview(#[from] wry::Error),

    #[error("script evaluation failed: {0}")]
    Script(String),

    #[error("failed to read cookie jar: {0}")]
    CookieJar(String),

    #[error("no window has been created")]
    NoWindow,

    #[error("event loop already started")]
    AlreadyRunning,

    #[error("window was already closed and cannot be reopened")]
    WindowClosed,
}
