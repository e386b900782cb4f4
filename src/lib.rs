//! Layered environment setting resolution.
//!
//! Runtime settings are requested by dotted lowercase canonical names
//! (`caddy.location.config`). Resolution checks the canonical name in the
//! environment first, then its upper-snake alternate
//! (`CADDY_LOCATION_CONFIG`), and finally falls back to a caller-supplied
//! default. Resolution is one-shot and read-only: nothing is cached and
//! nothing is mutated.

pub mod env;
pub mod names;
pub mod paths;
pub mod settings;

pub use env::{EnvFlag, Environment, Lookup, ProcessEnv, Tier, normalize_env_name};
