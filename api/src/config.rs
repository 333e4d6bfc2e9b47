//! Backend endpoint configuration.
//!
//! One knob: `BACKEND_URL`, the base URL of the storefront backend. The wasm
//! build bakes it in at compile time (`option_env!`); native builds may also
//! override it at run time. Falls back to a local development backend.

/// Environment variable supplying the backend base URL.
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";

/// Resolve the backend base URL, without a trailing slash.
pub fn backend_url() -> String {
    #[cfg(not(target_arch = "wasm32"))]
    if let Ok(url) = std::env::var(BACKEND_URL_VAR) {
        if !url.trim().is_empty() {
            return normalize(&url);
        }
    }

    normalize(option_env!("BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL))
}

fn normalize(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        assert_eq!(normalize("http://api.example.com/"), "http://api.example.com");
        assert_eq!(normalize(" http://api.example.com "), "http://api.example.com");
    }
}
