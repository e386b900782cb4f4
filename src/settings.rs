//! Effective-settings snapshot for startup diagnostics.
//!
//! A one-shot, serializable capture of every recognized setting: the raw
//! environment values (tagged absent when neither name is set) and the
//! derived locations. Intended to be logged once at startup so operators
//! can see which overrides are in effect.

use crate::env::{EnvFlag, Environment, ProcessEnv};
use crate::names;
use crate::paths;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Point-in-time capture of the resolved settings.
///
/// Raw values are `None` when neither the canonical nor the alternate name
/// is set; an explicitly empty variable captures as `Some("")`. Capturing
/// reads the environment and mutates nothing.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub config_file: PathBuf,
    pub confdir: PathBuf,
    pub asset_dir: PathBuf,
    pub cert_dir: PathBuf,
    pub plugin_dir: PathBuf,
    pub tool_dir: PathBuf,
    pub use_readv: Option<String>,
    pub use_splice: Option<String>,
    pub use_vmess_padding: Option<String>,
    pub cone_disabled: Option<String>,
    pub buffer_size: Option<String>,
    pub browser_dialer_address: Option<String>,
    pub xudp_log: Option<String>,
    pub xudp_base_key: Option<String>,
    pub tun_fd: Option<String>,
    pub mph_cache_path: Option<String>,
}

impl Snapshot {
    /// Capture from the process environment.
    pub fn capture() -> Self {
        Self::capture_in(&ProcessEnv, paths::executable_dir)
    }

    /// As [`Snapshot::capture`], with the environment and executable
    /// directory fallback supplied by the caller.
    pub fn capture_in(env: &impl Environment, default_dir: impl Fn() -> String) -> Self {
        let raw = |name: &str| EnvFlag::new(name).lookup(env).map(|found| found.value);
        Self {
            config_file: paths::config_file_path_in(env, &default_dir),
            confdir: paths::confdir_path_in(env),
            asset_dir: paths::asset_dir_in(env, &default_dir),
            cert_dir: paths::cert_dir_in(env, &default_dir),
            plugin_dir: paths::plugin_dir_in(env, &default_dir),
            tool_dir: paths::tool_dir_in(env, &default_dir),
            use_readv: raw(names::USE_READV),
            use_splice: raw(names::USE_SPLICE),
            use_vmess_padding: raw(names::USE_VMESS_PADDING),
            cone_disabled: raw(names::CONE_DISABLED),
            buffer_size: raw(names::BUFFER_SIZE),
            browser_dialer_address: raw(names::BROWSER_DIALER_ADDRESS),
            xudp_log: raw(names::XUDP_LOG),
            xudp_base_key: raw(names::XUDP_BASE_KEY),
            tun_fd: raw(names::TUN_FD),
            mph_cache_path: raw(names::MPH_CACHE_PATH),
        }
    }

    /// Emit the snapshot at debug level as a single JSON object.
    pub fn log(&self) {
        match serde_json::to_string(self) {
            Ok(json) => debug!(settings = %json, "effective settings"),
            Err(err) => debug!(%err, "failed to serialize settings snapshot"),
        }
    }
}
