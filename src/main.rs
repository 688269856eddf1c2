use std::rc::Rc;

use tracing::{error, info};

use webview_session::{logging, runtime, session, AppConfig, CookieStore, Error, WindowManager};

fn main() {
    let config = AppConfig::default();
    logging::init(&config.log_file);

    if let Err(e) = run(&config) {
        error!("application initialization failed: {e}");
        // Give the log writer a moment before the process goes away.
        std::thread::sleep(config.exit_delay);
    }
}

fn run(config: &AppConfig) -> webview_session::Result<()> {
    let runtime = runtime::check_runtime();
    if !runtime.available {
        return Err(Error::RuntimeUnavailable {
            platform: runtime.platform,
        });
    }
    info!(
        platform = %runtime.platform,
        version = runtime.version.as_deref().unwrap_or("system"),
        "webview runtime available"
    );

    let store = Rc::new(CookieStore::new(
        config.cookie_file.clone(),
        config.default_domain.clone(),
    ));
    let mut manager = WindowManager::new(session::handlers(store));
    manager.create_window(&config.window)?;
    manager.run()
}
