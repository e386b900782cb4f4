//! Canonical names of the recognized settings.
//!
//! Every key is looked up both as written and under its upper-snake
//! alternate (`caddy.buf.readv` / `CADDY_BUF_READV`). The set is fixed;
//! all environment access goes through these constants rather than ad-hoc
//! string literals.

/// Directory containing the main configuration file.
pub const CONFIG_LOCATION: &str = "caddy.location.config";
/// Directory holding supplementary configuration files.
pub const CONFDIR_LOCATION: &str = "caddy.location.confdir";
/// Directory holding runtime asset files.
pub const ASSET_LOCATION: &str = "caddy.location.asset";
/// Directory holding TLS certificates.
pub const CERT_LOCATION: &str = "caddy.location.cert";
/// Directory searched for plugins.
pub const PLUGIN_LOCATION: &str = "caddy.location.plugin";
/// Directory holding external helper tools.
pub const TOOL_LOCATION: &str = "caddy.location.tool";

/// Toggle for vectorized reads.
pub const USE_READV: &str = "caddy.buf.readv";
/// Toggle for splice-based copies.
pub const USE_SPLICE: &str = "caddy.buf.splice";
/// Toggle for VMess protocol padding.
pub const USE_VMESS_PADDING: &str = "caddy.vmess.padding";
/// Toggle disabling cone NAT behavior.
pub const CONE_DISABLED: &str = "caddy.cone.disabled";

/// Per-connection buffer size.
pub const BUFFER_SIZE: &str = "caddy.ray.buffer.size";
/// Listen address of the browser dialer.
pub const BROWSER_DIALER_ADDRESS: &str = "caddy.browser.dialer";
/// Toggle for XUDP session logging.
pub const XUDP_LOG: &str = "caddy.xudp.show";
/// Base key for XUDP session derivation.
pub const XUDP_BASE_KEY: &str = "caddy.xudp.basekey";

/// File descriptor of a pre-opened TUN device.
pub const TUN_FD: &str = "caddy.tun.fd";

/// Cache file path for the MPH domain matcher.
pub const MPH_CACHE_PATH: &str = "caddy.mph.cache";
