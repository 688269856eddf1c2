use crate::window::WebviewHandle;

/// Callback for finished page loads: (webview, url).
pub type PageLoadCallback = Box<dyn FnMut(&dyn WebviewHandle, &str)>;

/// Callback run while the window is closing, before the webview is destroyed.
pub type CloseCallback = Box<dyn FnMut(&dyn WebviewHandle)>;

/// Stored event handlers for the window.
#[derive(Default)]
pub struct WindowEventHandlers {
    pub on_page_load: Option<PageLoadCallback>,
    pub on_close: Option<CloseCallback>,
}

impl WindowEventHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_page_load(mut self, cb: impl FnMut(&dyn WebviewHandle, &str) + 'static) -> Self {
        self.on_page_load = Some(Box::new(cb));
        self
    }

    pub fn on_close(mut self, cb: impl FnMut(&dyn WebviewHandle) + 'static) -> Self {
        self.on_close = Some(Box::new(cb));
        self
    }
}

/// Events forwarded from webview handlers into the tao event loop.
#[derive(Debug, Clone)]
pub enum UserEvent {
    /// A navigation finished loading: (url).
    PageLoaded(String),
}
