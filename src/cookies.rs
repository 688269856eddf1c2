//! On-disk cookie persistence.
//!
//! The file is a JSON array of [`CookieRecord`]s, rewritten wholesale on
//! every save. Reading goes through [`LiveCookie`] so a record missing its
//! optional fields picks up the same defaults on both paths.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{error, info};

use crate::error::{Error, Result};

/// Expiry stored for cookies that end with the browsing session.
pub const SESSION_EXPIRY: i64 = -1;

/// A cookie as persisted in `cookies.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieRecord {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    /// Unix seconds; `<= 0` marks a session cookie.
    pub expires: i64,
    pub secure: bool,
    /// Kept on disk only, script injection cannot set it.
    pub http_only: bool,
}

impl CookieRecord {
    /// The expiry timestamp, or `None` for a session cookie.
    pub fn expires_at(&self) -> Option<i64> {
        (self.expires > 0).then_some(self.expires)
    }
}

/// A cookie as reported by the webview's jar. Only `name` and `value` are
/// guaranteed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveCookie {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub expires: Option<i64>,
    #[serde(default)]
    pub secure: Option<bool>,
    #[serde(default)]
    pub http_only: Option<bool>,
}

impl LiveCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    /// Fill in the persisted defaults for every field the jar left out.
    pub fn into_record(self, default_domain: &str) -> CookieRecord {
        CookieRecord {
            name: self.name,
            value: self.value,
            domain: self.domain.unwrap_or_else(|| default_domain.to_string()),
            path: self.path.unwrap_or_else(|| "/".to_string()),
            expires: self.expires.unwrap_or(SESSION_EXPIRY),
            secure: self.secure.unwrap_or(false),
            http_only: self.http_only.unwrap_or(false),
        }
    }
}

impl From<&wry::cookie::Cookie<'_>> for LiveCookie {
    fn from(cookie: &wry::cookie::Cookie<'_>) -> Self {
        Self {
            name: cookie.name().to_string(),
            value: cookie.value().to_string(),
            domain: cookie.domain().map(str::to_string),
            path: cookie.path().map(str::to_string),
            expires: cookie
                .expires()
                .and_then(|e| e.datetime())
                .map(|dt| dt.unix_timestamp()),
            secure: cookie.secure(),
            http_only: cookie.http_only(),
        }
    }
}

/// Accepts integer or fractional timestamps, truncating the latter.
fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw.map(|secs| secs as i64))
}

/// Reads and writes the cookie file at a fixed path.
#[derive(Debug, Clone)]
pub struct CookieStore {
    path: PathBuf,
    default_domain: String,
}

impl CookieStore {
    pub fn new(path: impl Into<PathBuf>, default_domain: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            default_domain: default_domain.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored record, in file order. A missing file is an empty
    /// jar, not an error.
    pub fn load(&self) -> Result<Vec<CookieRecord>> {
        Ok(self.read_file()?.unwrap_or_default())
    }

    /// [`load`](Self::load), logging any failure and treating it as an
    /// empty jar.
    pub fn load_or_default(&self) -> Vec<CookieRecord> {
        match self.read_file() {
            Ok(Some(records)) => {
                info!(count = records.len(), path = %self.path.display(), "cookies loaded");
                records
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                error!("failed to load cookies: {e}");
                Vec::new()
            }
        }
    }

    /// `Ok(None)` when there is no file to read.
    fn read_file(&self) -> Result<Option<Vec<CookieRecord>>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(Error::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let entries: Vec<LiveCookie> =
            serde_json::from_str(&raw).map_err(|source| Error::Parse {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(
            entries
                .into_iter()
                .map(|c| c.into_record(&self.default_domain))
                .collect(),
        ))
    }

    /// Replace the stored jar with `jar`. Returns the number of records
    /// written.
    pub fn save(&self, jar: &[LiveCookie]) -> Result<usize> {
        let records: Vec<CookieRecord> = jar
            .iter()
            .cloned()
            .map(|c| c.into_record(&self.default_domain))
            .collect();
        let json = serde_json::to_string_pretty(&records).map_err(Error::Serialize)?;
        fs::write(&self.path, json).map_err(|source| Error::Write {
            path: self.path.clone(),
            source,
        })?;
        Ok(records.len())
    }
}
