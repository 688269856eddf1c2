/// Cross-platform window + webview built on tao (windowing) and wry
/// (webview). Works on macOS, Windows and Linux.
use tao::dpi::LogicalSize;
use tao::event_loop::{EventLoopProxy, EventLoopWindowTarget};
use tao::window::{Window, WindowBuilder, WindowId};

#[cfg(target_os = "linux")]
use wry::WebViewBuilderExtUnix;
use wry::{PageLoadEvent, WebView, WebViewBuilder};

use crate::cookies::LiveCookie;
use crate::error::{Error, Result};
use crate::events::UserEvent;
use crate::options::WindowOptions;
use crate::window::WebviewHandle;

/// A window + webview pair.
pub struct WindowEntry {
    // Field order matters: the webview must drop before its window.
    webview: WebView,
    window: Window,
}

impl WindowEntry {
    /// Create the tao window and attach a wry webview loading
    /// `options.url`. Finished page loads are forwarded through `proxy`.
    pub fn build(
        target: &EventLoopWindowTarget<UserEvent>,
        proxy: EventLoopProxy<UserEvent>,
        options: &WindowOptions,
    ) -> Result<Self> {
        let url = options.url()?;
        let (width, height) = options.size();

        let window = WindowBuilder::new()
            .with_title(options.title())
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(options.resizable.unwrap_or(true))
            .build(target)?;

        let wv_builder = WebViewBuilder::new()
            .with_url(url)
            .with_devtools(options.devtools.unwrap_or(false))
            // Page load handler: only finished navigations are forwarded.
            .with_on_page_load_handler(move |event, url| {
                if let PageLoadEvent::Finished = event {
                    let _ = proxy.send_event(UserEvent::PageLoaded(url));
                }
            });

        #[cfg(target_os = "linux")]
        let webview = {
            use tao::platform::unix::WindowExtUnix;
            wv_builder.build_gtk(window.gtk_window())?
        };

        #[cfg(not(target_os = "linux"))]
        let webview = wv_builder.build(&window)?;

        Ok(Self { webview, window })
    }

    pub fn id(&self) -> WindowId {
        self.window.id()
    }
}

impl WebviewHandle for WindowEntry {
    fn evaluate_script(&self, script: &str) -> Result<()> {
        self.webview
            .evaluate_script(script)
            .map_err(|e| Error::Script(e.to_string()))
    }

    /// Cookies of the loaded page only. The whole store is read when the
    /// page URL is unknown or not http(s).
    fn cookies(&self) -> Result<Vec<LiveCookie>> {
        let jar = match page_url(self.webview.url().ok()) {
            Some(url) => self.webview.cookies_for_url(&url),
            None => self.webview.cookies(),
        }
        .map_err(|e| Error::CookieJar(e.to_string()))?;
        Ok(jar.iter().map(LiveCookie::from).collect())
    }

    fn destroy(self) -> Result<()> {
        // Dropping closes the window and tears down the webview.
        drop(self);
        Ok(())
    }
}

/// The URL to scope the cookie jar to, if the page is an http(s) page.
fn page_url(current: Option<String>) -> Option<String> {
    current.filter(|url| url.starts_with("http://") || url.starts_with("https://"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jar_is_scoped_to_http_pages() {
        assert_eq!(
            page_url(Some("https://grok.com/chat".into())).as_deref(),
            Some("https://grok.com/chat")
        );
        assert_eq!(
            page_url(Some("http://localhost:8080/".into())).as_deref(),
            Some("http://localhost:8080/")
        );
    }

    #[test]
    fn unknown_or_internal_pages_read_the_whole_store() {
        assert_eq!(page_url(None), None);
        assert_eq!(page_url(Some("about:blank".into())), None);
        assert_eq!(page_url(Some(String::new())), None);
    }
}
