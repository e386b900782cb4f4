//! Two-tier environment variable resolution.
//!
//! A setting is identified by a dotted lowercase canonical name plus an
//! upper-snake alternate derived from it. Lookup checks the canonical name
//! first, then the alternate, then falls back to a caller-supplied default.
//! Presence decides a match: a variable set to the empty string wins over
//! the default.

use std::collections::HashMap;
use tracing::{trace, warn};

/// Read-only source of environment variables.
///
/// The resolver takes its environment as an explicit capability so tests
/// can inject a map instead of mutating process state.
pub trait Environment {
    /// Return the variable's value if it is set, even to the empty string.
    fn get(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }
}

impl Environment for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl<E: Environment> Environment for &E {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

/// Which lookup tier produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// The canonical dotted name matched.
    Canonical,
    /// The upper-snake alternate name matched.
    Alternate,
}

/// A successful two-tier lookup: the value and the tier it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub value: String,
    pub tier: Tier,
}

/// A setting identifier: a canonical name plus its normalized alternate.
///
/// Identifiers are stateless value objects, built fresh per query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFlag {
    name: String,
    alt_name: String,
}

impl EnvFlag {
    /// Build a flag for a canonical name, deriving the alternate form.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let alt_name = normalize_env_name(&name);
        Self { name, alt_name }
    }

    /// The canonical dotted name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The upper-snake alternate name.
    pub fn alt_name(&self) -> &str {
        &self.alt_name
    }

    /// Two-tier lookup: the canonical name first, then the alternate.
    ///
    /// Returns `None` only when both names are unset. A variable set to
    /// the empty string is a match.
    pub fn lookup(&self, env: &impl Environment) -> Option<Lookup> {
        if let Some(value) = env.get(&self.name) {
            trace!(name = %self.name, "setting found under canonical name");
            return Some(Lookup {
                value,
                tier: Tier::Canonical,
            });
        }
        if !self.alt_name.is_empty() {
            if let Some(value) = env.get(&self.alt_name) {
                trace!(name = %self.name, alt = %self.alt_name, "setting found under alternate name");
                return Some(Lookup {
                    value,
                    tier: Tier::Alternate,
                });
            }
        }
        None
    }

    /// Resolve to a string, falling back to `default` when both names are
    /// unset.
    ///
    /// `default` runs at most once and never runs when a lookup hits, so
    /// it may be expensive (filesystem queries etc.).
    pub fn resolve<E, F>(&self, env: &E, default: F) -> String
    where
        E: Environment,
        F: FnOnce() -> String,
    {
        match self.lookup(env) {
            Some(found) => found.value,
            None => default(),
        }
    }

    /// Resolve to an `i32`, falling back to `default` when both names are
    /// unset or the value does not parse as a base-10 signed 32-bit
    /// integer.
    ///
    /// Malformed values are discarded, not surfaced: a bad operator-supplied
    /// setting must never block startup.
    pub fn resolve_int(&self, env: &impl Environment, default: i32) -> i32 {
        match self.lookup(env) {
            None => default,
            Some(found) => match found.value.parse::<i32>() {
                Ok(v) => v,
                Err(_) => {
                    warn!(
                        name = %self.name,
                        value = %found.value,
                        default,
                        "ignoring non-integer setting value"
                    );
                    default
                }
            },
        }
    }
}

/// Map a canonical name to its environment-variable form: trimmed,
/// upper-cased, with every `.` replaced by `_`.
///
/// Total and deterministic; an empty input produces an empty output.
pub fn normalize_env_name(name: &str) -> String {
    name.trim().to_uppercase().replace('.', "_")
}
