#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use webview_session::{Error, LiveCookie, Result, WebviewHandle};

/// In-memory webview that records every script it is asked to run.
#[derive(Clone, Default)]
pub struct FakeWebview {
    pub scripts: Rc<RefCell<Vec<String>>>,
    pub jar: Vec<LiveCookie>,
    /// Fail the nth `evaluate_script` call (0-based).
    pub fail_script_at: Option<usize>,
    pub fail_cookies: bool,
    pub fail_destroy: bool,
    pub destroyed: Rc<Cell<bool>>,
}

impl WebviewHandle for FakeWebview {
    fn evaluate_script(&self, script: &str) -> Result<()> {
        let mut scripts = self.scripts.borrow_mut();
        if self.fail_script_at == Some(scripts.len()) {
            return Err(Error::Script("page is gone".into()));
        }
        scripts.push(script.to_string());
        Ok(())
    }

    fn cookies(&self) -> Result<Vec<LiveCookie>> {
        if self.fail_cookies {
            return Err(Error::CookieJar("jar unavailable".into()));
        }
        Ok(self.jar.clone())
    }

    fn destroy(self) -> Result<()> {
        self.destroyed.set(true);
        if self.fail_destroy {
            return Err(Error::WindowClosed);
        }
        Ok(())
    }
}

/// Collects formatted log lines in memory.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn lines_with(&self, level: &str) -> usize {
        self.contents().lines().filter(|l| l.contains(level)).count()
    }

    /// Run `f` with this capture installed as the thread's subscriber.
    pub fn scope<T>(&self, f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(self.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
