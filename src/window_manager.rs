use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::platform::run_return::EventLoopExtRunReturn;
use tao::window::WindowId;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::events::{UserEvent, WindowEventHandlers};
use crate::options::WindowOptions;
use crate::platform::WindowEntry;
use crate::window::{WindowHost, WindowState};

/// Owns the tao event loop and the single window host.
///
/// Must be created and run on the main thread.
pub struct WindowManager {
    /// Taken out while `run` is dispatching so the handler can borrow the
    /// host mutably.
    event_loop: Option<EventLoop<UserEvent>>,
    host: WindowHost<WindowEntry>,
    window_id: Option<WindowId>,
    started: bool,
}

impl WindowManager {
    pub fn new(handlers: WindowEventHandlers) -> Self {
        let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
        Self {
            event_loop: Some(event_loop),
            host: WindowHost::new(handlers),
            window_id: None,
            started: false,
        }
    }

    /// Create the window. A second call while it is open does nothing and
    /// returns `Ok(false)`.
    pub fn create_window(&mut self, options: &WindowOptions) -> Result<bool> {
        let event_loop = self.event_loop.as_ref().ok_or(Error::AlreadyRunning)?;
        let proxy = event_loop.create_proxy();
        let created = self
            .host
            .open_with(|| WindowEntry::build(event_loop, proxy, options))?;
        if created {
            self.window_id = self.host.window().map(WindowEntry::id);
            info!(title = options.title(), "window created");
        }
        Ok(created)
    }

    /// Block until the window closes. Fails if no window was created.
    pub fn run(&mut self) -> Result<()> {
        if self.started {
            return Err(Error::AlreadyRunning);
        }
        // Nothing could ever close the loop without a window.
        self.host.ensure_open()?;
        let mut event_loop = self.event_loop.take().ok_or(Error::AlreadyRunning)?;
        self.started = true;
        info!("event loop started");

        let host = &mut self.host;
        let window_id = self.window_id;

        event_loop.run_return(|event, _target, control_flow| {
            *control_flow = ControlFlow::Wait;

            match event {
                Event::UserEvent(UserEvent::PageLoaded(url)) => {
                    debug!(%url, "page loaded");
                    host.page_loaded(&url);
                }
                Event::WindowEvent {
                    window_id: id,
                    event: WindowEvent::CloseRequested,
                    ..
                } if Some(id) == window_id => {
                    host.close();
                    *control_flow = ControlFlow::Exit;
                }
                _ => {}
            }

            if host.state() == WindowState::Closed {
                *control_flow = ControlFlow::Exit;
            }
        });

        self.window_id = None;
        info!("event loop finished");
        Ok(())
    }
}
