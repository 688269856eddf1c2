/// Information about the native webview runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    /// Whether the webview runtime is available.
    pub available: bool,
    /// The version string of the runtime, if available.
    pub version: Option<String>,
    /// The current platform: "macos", "windows", "linux" or "unsupported".
    pub platform: String,
}

/// Check if the native webview runtime is available.
///
/// - **macOS**: WKWebView is a system framework.
/// - **Windows**: WebView2 must be installed.
/// - **Linux**: WebKitGTK must be installed.
pub fn check_runtime() -> RuntimeInfo {
    let platform = current_platform().to_string();
    match wry::webview_version() {
        Ok(version) => runtime_info(platform, Some(version)),
        Err(_) => runtime_info(platform, None),
    }
}

fn runtime_info(platform: String, version: Option<String>) -> RuntimeInfo {
    // WebView2 reports "0.0.0.0" when only a stub is present.
    let version = version.filter(|v| !v.is_empty() && v != "0.0.0.0");
    RuntimeInfo {
        available: version.is_some() || platform == "macos",
        version,
        platform,
    }
}

fn current_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else {
        "unsupported"
    }
}
