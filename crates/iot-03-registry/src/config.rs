//! Registry configuration.
//!
//! Defaults accept every well-formed request; `from_env` applies overrides
//! from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Default maximum decoded payload size (64 KiB).
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 64 * 1024;

/// Which existing names an alias may not collide with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AliasPolicy {
    /// Reject aliases equal to an identity name or an already-bound alias.
    #[default]
    Exclusive,
    /// Reject aliases equal to an identity name only. Aliases may be
    /// re-bound by later things.
    IdentityOnly,
}

impl AliasPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AliasPolicy::Exclusive => "exclusive",
            AliasPolicy::IdentityOnly => "identity-only",
        }
    }
}

impl FromStr for AliasPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exclusive" => Ok(AliasPolicy::Exclusive),
            "identity-only" | "identity_only" => Ok(AliasPolicy::IdentityOnly),
            other => Err(ConfigError::InvalidValue {
                field: "alias_policy",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for AliasPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("{field} must be greater than zero")]
    ZeroLimit { field: &'static str },
}

/// Admission limits and policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub alias_policy: AliasPolicy,
    /// Maximum byte length of an owner name or alias (unbounded if `None`)
    pub max_name_len: Option<usize>,
    /// Maximum number of aliases per thing (unbounded if `None`)
    pub max_aliases: Option<usize>,
    /// Maximum decoded invoke payload size in bytes
    pub max_payload_bytes: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            alias_policy: AliasPolicy::default(),
            max_name_len: None,
            max_aliases: None,
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
        }
    }
}

impl RegistryConfig {
    /// Defaults with environment overrides.
    ///
    /// # Environment Variables
    ///
    /// - `IOT_ALIAS_POLICY`: `exclusive` or `identity-only` (default: exclusive)
    /// - `IOT_MAX_NAME_LEN`: name length limit (default: unbounded)
    /// - `IOT_MAX_ALIASES`: alias count limit (default: unbounded)
    /// - `IOT_MAX_PAYLOAD_BYTES`: payload size limit (default: 65536)
    ///
    /// Any unparseable value is an `InvalidValue` error, and the result is
    /// validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(policy) = read_var("IOT_ALIAS_POLICY") {
            config.alias_policy = policy.parse()?;
        }
        if let Some(len) = parse_usize_var("IOT_MAX_NAME_LEN", "max_name_len")? {
            config.max_name_len = Some(len);
        }
        if let Some(count) = parse_usize_var("IOT_MAX_ALIASES", "max_aliases")? {
            config.max_aliases = Some(count);
        }
        if let Some(bytes) = parse_usize_var("IOT_MAX_PAYLOAD_BYTES", "max_payload_bytes")? {
            config.max_payload_bytes = bytes;
        }

        config.validate()?;
        debug!(?config, "Registry config loaded from environment");
        Ok(config)
    }

    /// Reject zero limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_name_len == Some(0) {
            return Err(ConfigError::ZeroLimit {
                field: "max_name_len",
            });
        }
        if self.max_aliases == Some(0) {
            return Err(ConfigError::ZeroLimit {
                field: "max_aliases",
            });
        }
        if self.max_payload_bytes == 0 {
            return Err(ConfigError::ZeroLimit {
                field: "max_payload_bytes",
            });
        }
        Ok(())
    }

    /// Builder-style policy override.
    pub fn with_alias_policy(mut self, alias_policy: AliasPolicy) -> Self {
        self.alias_policy = alias_policy;
        self
    }
}

fn read_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_usize_var(name: &str, field: &'static str) -> Result<Option<usize>, ConfigError> {
    read_var(name)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { field, value: raw })
        })
        .transpose()
}
