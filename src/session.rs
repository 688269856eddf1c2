//! Connects the cookie store to the window lifecycle: stored cookies are
//! replayed on every finished page load and the live jar is saved when the
//! window closes.

use std::rc::Rc;

use tracing::{error, info};

use crate::cookies::{CookieRecord, CookieStore};
use crate::error::Result;
use crate::events::WindowEventHandlers;
use crate::script::set_cookie_statement;
use crate::window::WebviewHandle;

/// Inject one `document.cookie` statement per record, in order. The first
/// failure aborts the rest of the batch.
pub fn restore_cookies(webview: &dyn WebviewHandle, records: &[CookieRecord]) -> Result<usize> {
    for record in records {
        webview.evaluate_script(&set_cookie_statement(record))?;
    }
    Ok(records.len())
}

/// Read the live jar and overwrite the store with it.
pub fn persist_cookies(webview: &dyn WebviewHandle, store: &CookieStore) -> Result<usize> {
    let jar = webview.cookies()?;
    store.save(&jar)
}

/// Handlers that restore cookies on page load and persist them on close.
/// Failures are logged, never raised.
pub fn handlers(store: Rc<CookieStore>) -> WindowEventHandlers {
    let load_store = Rc::clone(&store);
    WindowEventHandlers::new()
        .on_page_load(move |webview, url| {
            let records = load_store.load_or_default();
            match restore_cookies(webview, &records) {
                Ok(count) => info!(count, %url, "cookies restored"),
                Err(e) => error!("failed to restore cookies: {e}"),
            }
        })
        .on_close(move |webview| match persist_cookies(webview, &store) {
            Ok(count) => info!(count, path = %store.path().display(), "cookies saved"),
            Err(e) => error!("failed to save cookies: {e}"),
        })
}
