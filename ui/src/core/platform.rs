//! Platform detection and host services (task spawning, external links).

use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
    Mobile,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else if cfg!(any(target_os = "android", target_os = "ios")) {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

/// Run a future on the UI executor. Must be called inside the Dioxus runtime.
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(future);
}

/// Open a URL with the platform's default handler.
pub fn open_external_url(url: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or("window unavailable")?;
        window
            .open_with_url_and_target(url, "_blank")
            .map_err(|e| format!("window.open failed: {e:?}"))?;
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        webbrowser::open(url).map_err(|err| err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_tests_are_not_web() {
        assert_ne!(Platform::current(), Platform::Web);
        assert!(!Platform::current().as_str().is_empty());
    }
}
