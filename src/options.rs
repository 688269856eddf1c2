use crate::error::{Error, Result};

const DEFAULT_WIDTH: f64 = 800.0;
const DEFAULT_HEIGHT: f64 = 600.0;

/// Options for creating the native window.
///
/// Every field is optional; `None` resolves to a built-in default when the
/// window is built.
#[derive(Debug, Clone, Default)]
pub struct WindowOptions {
    /// Window title. Default: ""
    pub title: Option<String>,
    /// Page loaded into the webview. Default: "about:blank"
    pub url: Option<String>,
    /// Inner width in logical pixels. Default: 800
    pub width: Option<f64>,
    /// Inner height in logical pixels. Default: 600
    pub height: Option<f64>,
    /// Allow resizing. Default: true
    pub resizable: Option<bool>,
    /// Enable devtools. Default: false
    pub devtools: Option<bool>,
}

impl WindowOptions {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn size(&self) -> (f64, f64) {
        (
            self.width.unwrap_or(DEFAULT_WIDTH),
            self.height.unwrap_or(DEFAULT_HEIGHT),
        )
    }

    /// The page to load. Only `http:` and `https:` pages are accepted.
    pub fn url(&self) -> Result<String> {
        let Some(raw) = self.url.as_deref() else {
            return Ok("about:blank".to_string());
        };
        let trimmed = raw.trim();
        let parsed = url::Url::parse(trimmed).map_err(|e| Error::InvalidUrl {
            url: trimmed.to_string(),
            reason: e.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed.into()),
            other => Err(Error::InvalidUrl {
                url: trimmed.to_string(),
                reason: format!("scheme '{}' is not allowed, use http or https", other),
            }),
        }
    }
}
