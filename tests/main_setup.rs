use fyp_shell::{
    AppConfig,
    config::{DEFAULT_APP_TITLE, Env},
};
use serial_test::serial;
use std::{env, net::SocketAddr, panic};

const CONFIG_VARS: [&str; 3] = ["APP_ENV", "SHELL_ADDR", "APP_TITLE"];

// --- Setup/Teardown Utilities ---

/// Runs `test` with the given variables set (or removed, for `None`) and
/// restores the previous environment afterwards, even if `test` panics.
fn run_with_env<T, R>(vars: &[(&str, Option<&str>)], test: T) -> R
where
    T: FnOnce() -> R + panic::UnwindSafe,
{
    let originals: Vec<(&str, Option<String>)> = CONFIG_VARS
        .iter()
        .map(|&var| (var, env::var(var).ok()))
        .collect();

    unsafe {
        for (key, value) in vars {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }

    let result = panic::catch_unwind(test);

    unsafe {
        for (key, original_value) in originals {
            match original_value {
                Some(val) => env::set_var(key, val),
                None => env::remove_var(key),
            }
        }
    }

    match result {
        Ok(value) => value,
        Err(e) => panic::resume_unwind(e),
    }
}

// --- Tests ---

#[test]
#[serial]
fn test_app_config_local_env_defaults() {
    let config = run_with_env(
        &[("APP_ENV", Some("local")), ("SHELL_ADDR", None), ("APP_TITLE", None)],
        AppConfig::load,
    );

    assert_eq!(config.env, Env::Local);
    assert_eq!(config.bind_addr, "127.0.0.1:5173".parse::<SocketAddr>().unwrap());
    assert_eq!(config.app_title, DEFAULT_APP_TITLE);
}

#[test]
#[serial]
fn test_app_config_unknown_env_falls_back_to_local() {
    let config = run_with_env(
        &[("APP_ENV", Some("staging")), ("SHELL_ADDR", None)],
        AppConfig::load,
    );

    assert_eq!(config.env, Env::Local);
}

#[test]
#[serial]
fn test_app_config_reads_overrides() {
    let config = run_with_env(
        &[
            ("APP_ENV", Some("production")),
            ("SHELL_ADDR", Some("0.0.0.0:8080")),
            ("APP_TITLE", Some("Arena")),
        ],
        AppConfig::load,
    );

    assert_eq!(config.env, Env::Production);
    assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    assert_eq!(config.app_title, "Arena");
}

#[test]
#[serial]
fn test_app_config_blank_title_uses_default() {
    let config = run_with_env(
        &[("APP_ENV", Some("local")), ("SHELL_ADDR", None), ("APP_TITLE", Some("   "))],
        AppConfig::load,
    );

    assert_eq!(config.app_title, DEFAULT_APP_TITLE);
}

#[test]
#[serial]
fn test_app_config_production_fail_fast() {
    // SHELL_ADDR has no default in production.
    let result = run_with_env(
        &[("APP_ENV", Some("production")), ("SHELL_ADDR", None)],
        || panic::catch_unwind(AppConfig::load),
    );

    assert!(
        result.is_err(),
        "Production config loading should panic without SHELL_ADDR"
    );
}

#[test]
#[serial]
fn test_app_config_rejects_malformed_address() {
    let result = run_with_env(
        &[("APP_ENV", Some("local")), ("SHELL_ADDR", Some("localhost"))],
        || panic::catch_unwind(AppConfig::load),
    );

    assert!(result.is_err(), "A host without a port is not a socket address");
}
