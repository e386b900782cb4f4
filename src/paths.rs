//! Derived path and location queries.
//!
//! Thin zero-argument wrappers over the resolver: each location setting
//! gets a query that reads the process environment and falls back to a
//! computed default, usually the running executable's directory. Each
//! query also has an `_in` variant taking an explicit environment for
//! callers (and tests) that do not want process-global state.

use crate::env::{EnvFlag, Environment, ProcessEnv};
use crate::names;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the main configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Subdirectory of the executable directory searched for plugins by default.
pub const PLUGIN_DIR_NAME: &str = "plugins";

/// Directory containing the running executable, or `""` when the OS cannot
/// report the executable's path.
///
/// The empty string composes into a relative (likely invalid) path rather
/// than an error; callers of the derived queries validate the result
/// before use.
pub fn executable_dir() -> String {
    match std::env::current_exe() {
        Ok(exe) => exe
            .parent()
            .map(|dir| dir.to_string_lossy().into_owned())
            .unwrap_or_default(),
        Err(err) => {
            debug!(%err, "executable path unavailable, using empty directory");
            String::new()
        }
    }
}

fn resolve_dir(
    name: &str,
    env: &impl Environment,
    default_dir: impl FnOnce() -> String,
) -> PathBuf {
    PathBuf::from(EnvFlag::new(name).resolve(env, default_dir))
}

/// Path of the main configuration file: the resolved config directory
/// joined with `config.json`.
pub fn config_file_path() -> PathBuf {
    config_file_path_in(&ProcessEnv, executable_dir)
}

/// As [`config_file_path`], with the environment and fallback directory
/// supplied by the caller.
pub fn config_file_path_in(
    env: &impl Environment,
    default_dir: impl FnOnce() -> String,
) -> PathBuf {
    let dir = EnvFlag::new(names::CONFIG_LOCATION).resolve(env, default_dir);
    Path::new(&dir).join(CONFIG_FILE_NAME)
}

/// Directory holding supplementary configuration files. Empty when unset;
/// there is no computed fallback for this one.
pub fn confdir_path() -> PathBuf {
    confdir_path_in(&ProcessEnv)
}

/// As [`confdir_path`], with the environment supplied by the caller.
pub fn confdir_path_in(env: &impl Environment) -> PathBuf {
    resolve_dir(names::CONFDIR_LOCATION, env, String::new)
}

/// Directory holding runtime asset files, defaulting to the executable's
/// directory.
pub fn asset_dir() -> PathBuf {
    asset_dir_in(&ProcessEnv, executable_dir)
}

/// As [`asset_dir`], with the environment and fallback directory supplied
/// by the caller.
pub fn asset_dir_in(env: &impl Environment, default_dir: impl FnOnce() -> String) -> PathBuf {
    resolve_dir(names::ASSET_LOCATION, env, default_dir)
}

/// Directory holding TLS certificates, defaulting to the executable's
/// directory.
pub fn cert_dir() -> PathBuf {
    cert_dir_in(&ProcessEnv, executable_dir)
}

/// As [`cert_dir`], with the environment and fallback directory supplied
/// by the caller.
pub fn cert_dir_in(env: &impl Environment, default_dir: impl FnOnce() -> String) -> PathBuf {
    resolve_dir(names::CERT_LOCATION, env, default_dir)
}

/// Directory searched for plugins, defaulting to `plugins/` under the
/// executable's directory.
pub fn plugin_dir() -> PathBuf {
    plugin_dir_in(&ProcessEnv, executable_dir)
}

/// As [`plugin_dir`], with the environment and fallback directory supplied
/// by the caller.
pub fn plugin_dir_in(env: &impl Environment, default_dir: impl FnOnce() -> String) -> PathBuf {
    resolve_dir(names::PLUGIN_LOCATION, env, || {
        Path::new(&default_dir())
            .join(PLUGIN_DIR_NAME)
            .to_string_lossy()
            .into_owned()
    })
}

/// Directory holding external helper tools, defaulting to the executable's
/// directory.
pub fn tool_dir() -> PathBuf {
    tool_dir_in(&ProcessEnv, executable_dir)
}

/// As [`tool_dir`], with the environment and fallback directory supplied
/// by the caller.
pub fn tool_dir_in(env: &impl Environment, default_dir: impl FnOnce() -> String) -> PathBuf {
    resolve_dir(names::TOOL_LOCATION, env, default_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_config_file_from_alternate_name() {
        let env = env_of(&[("CADDY_LOCATION_CONFIG", "/etc/myapp")]);
        let path = config_file_path_in(&env, || panic!("fallback must not run"));
        assert_eq!(path, PathBuf::from("/etc/myapp/config.json"));
    }

    #[test]
    fn test_config_file_from_executable_dir() {
        let env = env_of(&[]);
        let path = config_file_path_in(&env, || "/opt/app/bin".to_string());
        assert_eq!(path, PathBuf::from("/opt/app/bin/config.json"));
    }

    #[test]
    fn test_config_file_with_undiscoverable_executable() {
        // An empty fallback directory composes into a relative path.
        let env = env_of(&[]);
        let path = config_file_path_in(&env, String::new);
        assert_eq!(path, PathBuf::from("config.json"));
    }

    #[test]
    fn test_confdir_empty_when_unset() {
        let env = env_of(&[]);
        assert_eq!(confdir_path_in(&env), PathBuf::new());
    }

    #[test]
    fn test_confdir_from_canonical_name() {
        let env = env_of(&[("caddy.location.confdir", "/etc/myapp/conf.d")]);
        assert_eq!(confdir_path_in(&env), PathBuf::from("/etc/myapp/conf.d"));
    }

    #[test]
    fn test_asset_dir_falls_back_to_executable_dir() {
        let env = env_of(&[]);
        assert_eq!(
            asset_dir_in(&env, || "/opt/app/bin".to_string()),
            PathBuf::from("/opt/app/bin")
        );
    }

    #[test]
    fn test_cert_dir_override() {
        let env = env_of(&[("CADDY_LOCATION_CERT", "/etc/ssl/private")]);
        assert_eq!(
            cert_dir_in(&env, || panic!("fallback must not run")),
            PathBuf::from("/etc/ssl/private")
        );
    }

    #[test]
    fn test_plugin_dir_default_subdirectory() {
        let env = env_of(&[]);
        assert_eq!(
            plugin_dir_in(&env, || "/opt/app/bin".to_string()),
            PathBuf::from("/opt/app/bin/plugins")
        );
    }

    #[test]
    fn test_plugin_dir_override_skips_subdirectory() {
        let env = env_of(&[("CADDY_LOCATION_PLUGIN", "/usr/lib/myapp")]);
        assert_eq!(
            plugin_dir_in(&env, || panic!("fallback must not run")),
            PathBuf::from("/usr/lib/myapp")
        );
    }

    #[test]
    fn test_tool_dir_falls_back_to_executable_dir() {
        let env = env_of(&[]);
        assert_eq!(
            tool_dir_in(&env, || "/opt/app/bin".to_string()),
            PathBuf::from("/opt/app/bin")
        );
    }

    #[test]
    fn test_executable_dir_is_parent_of_current_exe() {
        // current_exe works under the test harness; the parent must be
        // non-empty there.
        let dir = executable_dir();
        assert!(!dir.is_empty());
    }
}
