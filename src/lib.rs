//! A single native window hosting one web page, with the page's cookies
//! persisted to `cookies.json` across restarts.

pub mod config;
pub mod cookies;
pub mod error;
pub mod events;
pub mod logging;
pub mod options;
mod platform;
pub mod runtime;
pub mod script;
pub mod session;
pub mod window;
pub mod window_manager;

pub use config::AppConfig;
pub use cookies::{CookieRecord, CookieStore, LiveCookie};
pub use error::{Error, Result};
pub use window::{WebviewHandle, WindowHost, WindowState};
pub use window_manager::WindowManager;
