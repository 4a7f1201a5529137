// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for learnboard directories.
//!
//! # Path Resolution Order
//!
//! Both the data directory (persisted locale state) and the config directory
//! (`settings.toml`) are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`LEARNBOARD_DATA_DIR`, `LEARNBOARD_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Learnboard";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "LEARNBOARD_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "LEARNBOARD_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` command-line overrides.
///
/// Only the first call takes effect; later calls are logged and ignored.
pub fn init_cli_overrides(data_dir: Option<PathBuf>, config_dir: Option<PathBuf>) {
    if !set_overrides(&CLI_DATA_DIR, data_dir, &CLI_CONFIG_DIR, config_dir) {
        tracing::warn!("directory overrides already initialized; ignoring");
    }
}

/// Fills each still-empty slot. Returns `false` if either was already set.
fn set_overrides(
    data_slot: &OnceLock<Option<PathBuf>>,
    data_dir: Option<PathBuf>,
    config_slot: &OnceLock<Option<PathBuf>>,
    config_dir: Option<PathBuf>,
) -> bool {
    let data_set = data_slot.set(data_dir).is_ok();
    let config_set = config_slot.set(config_dir).is_ok();
    data_set && config_set
}

fn resolve_dir(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_var: &str,
    platform: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory holding persisted locale state.
///
/// Platform defaults:
/// - Linux: `~/.local/share/Learnboard/`
/// - macOS: `~/Library/Application Support/Learnboard/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\Learnboard\`
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_dir(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir)
}

/// Returns the directory holding `settings.toml`.
///
/// Platform defaults:
/// - Linux: `~/.config/Learnboard/`
/// - macOS: `~/Library/Application Support/Learnboard/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\Learnboard\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_dir(override_path, &CLI_CONFIG_DIR, ENV_CONFIG_DIR, dirs::config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_data_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);

        if let Some(path) = get_app_data_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "data dir should contain app name"
            );
        }
    }

    #[test]
    fn app_config_dir_is_absolute() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(path.is_absolute(), "config dir should be absolute path");
        }
    }

    #[test]
    fn config_override_is_set_even_when_data_override_exists() {
        let data_slot = OnceLock::new();
        let config_slot = OnceLock::new();
        data_slot.set(Some(PathBuf::from("/first/data"))).unwrap();

        let all_set = set_overrides(
            &data_slot,
            Some(PathBuf::from("/second/data")),
            &config_slot,
            Some(PathBuf::from("/config")),
        );

        assert!(!all_set);
        assert_eq!(data_slot.get(), Some(&Some(PathBuf::from("/first/data"))));
        assert_eq!(config_slot.get(), Some(&Some(PathBuf::from("/config"))));
    }

    #[test]
    fn override_path_takes_precedence_for_data_dir() {
        let override_path = PathBuf::from("/custom/data/path");
        let result = get_app_data_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "");

        if let Some(path) = get_app_data_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        let result = get_app_data_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));

        std::env::remove_var(ENV_DATA_DIR);
    }
}
