use std::{env, net::SocketAddr};

/// Title used in every page's `<title>` when `APP_TITLE` is not set.
pub const DEFAULT_APP_TITLE: &str = "FYP Showcase";

/// Address the shell binds to locally when `SHELL_ADDR` is not set.
pub const DEFAULT_LOCAL_ADDR: &str = "127.0.0.1:5173";

/// AppConfig
///
/// Holds the shell's entire configuration state. Loaded once at startup and
/// never mutated afterwards; handlers pull it out of `AppState` via FromRef.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Runtime environment marker. Selects the log format and which variables are mandatory.
    pub env: Env,
    // Socket the HTTP server listens on.
    pub bind_addr: SocketAddr,
    // Application name shown in page titles and headers.
    pub app_title: String,
}

/// Env
///
/// Defines the runtime context the shell is running in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// Non-panicking local configuration for test scaffolding.
    fn default() -> Self {
        Self {
            env: Env::Local,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            app_title: DEFAULT_APP_TITLE.to_string(),
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// Reads the configuration from environment variables, failing fast.
    ///
    /// # Panics
    /// Panics if `SHELL_ADDR` is missing in production, or if it is set to
    /// something that is not a socket address.
    pub fn load() -> Self {
        let env = match env::var("APP_ENV").as_deref() {
            Ok("production") => Env::Production,
            _ => Env::Local,
        };

        let raw_addr = match env {
            Env::Production => {
                env::var("SHELL_ADDR").expect("FATAL: SHELL_ADDR must be set in production.")
            }
            Env::Local => env::var("SHELL_ADDR").unwrap_or_else(|_| DEFAULT_LOCAL_ADDR.to_string()),
        };
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .unwrap_or_else(|_| panic!("FATAL: SHELL_ADDR is not a socket address: {raw_addr}"));

        let app_title = env::var("APP_TITLE")
            .ok()
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_APP_TITLE.to_string());

        Self {
            env,
            bind_addr,
            app_title,
        }
    }
}
