use tracing::{debug, error, info, warn};

use crate::cookies::LiveCookie;
use crate::error::{Error, Result};
use crate::events::WindowEventHandlers;

/// The two webview primitives the session needs, plus teardown.
pub trait WebviewHandle {
    /// Run `script` in the loaded page.
    fn evaluate_script(&self, script: &str) -> Result<()>;

    /// The current cookie jar of the loaded page.
    fn cookies(&self) -> Result<Vec<LiveCookie>>;

    /// Release the native window and webview.
    fn destroy(self) -> Result<()>
    where
        Self: Sized;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Unopened,
    Open,
    Closing,
    Closed,
}

/// Owns at most one window and drives its lifecycle:
/// `Unopened -> Open -> Closing -> Closed`, with no way back.
pub struct WindowHost<H: WebviewHandle> {
    state: WindowState,
    window: Option<H>,
    handlers: WindowEventHandlers,
}

impl<H: WebviewHandle> WindowHost<H> {
    pub fn new(handlers: WindowEventHandlers) -> Self {
        Self {
            state: WindowState::Unopened,
            window: None,
            handlers,
        }
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn window(&self) -> Option<&H> {
        self.window.as_ref()
    }

    /// Build and hold the window. Returns `Ok(false)` without calling
    /// `build` when a window is already open.
    pub fn open_with<F>(&mut self, build: F) -> Result<bool>
    where
        F: FnOnce() -> Result<H>,
    {
        match self.state {
            WindowState::Open => {
                debug!("window already open, ignoring create");
                return Ok(false);
            }
            WindowState::Closing | WindowState::Closed => return Err(Error::WindowClosed),
            WindowState::Unopened => {}
        }
        let window = build().inspect_err(|e| error!("failed to create window: {e}"))?;
        self.window = Some(window);
        self.state = WindowState::Open;
        Ok(true)
    }

    /// `Err(NoWindow)` unless a window is currently open.
    pub fn ensure_open(&self) -> Result<()> {
        match self.state {
            WindowState::Open => Ok(()),
            WindowState::Unopened => Err(Error::NoWindow),
            WindowState::Closing | WindowState::Closed => Err(Error::WindowClosed),
        }
    }

    /// Dispatch a finished navigation to the page-load handler.
    pub fn page_loaded(&mut self, url: &str) {
        if self.state != WindowState::Open {
            return;
        }
        if let (Some(window), Some(cb)) = (self.window.as_ref(), self.handlers.on_page_load.as_mut())
        {
            cb(window as &dyn WebviewHandle, url);
        }
    }

    /// Run the close handler, then take the window out of its slot and
    /// destroy it. Each step runs even if the one before it failed.
    /// Returns `false` if there was no open window.
    pub fn close(&mut self) -> bool {
        if self.state != WindowState::Open {
            return false;
        }
        self.state = WindowState::Closing;

        if let (Some(window), Some(cb)) = (self.window.as_ref(), self.handlers.on_close.as_mut()) {
            cb(window as &dyn WebviewHandle);
        }

        match self.window.take() {
            Some(window) => match window.destroy() {
                Ok(()) => info!("window destroyed"),
                Err(e) => error!("failed to destroy window: {e}"),
            },
            None => warn!("close requested with no window held"),
        }

        self.state = WindowState::Closed;
        true
    }
}

impl<H: WebviewHandle> Drop for WindowHost<H> {
    fn drop(&mut self) {
        if let Some(window) = self.window.take() {
            match window.destroy() {
                Ok(()) => info!("window destroyed on exit"),
                Err(e) => warn!("failed to destroy window on exit: {e}"),
            }
        }
    }
}
