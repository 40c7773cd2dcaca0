//! Configuration for the `fundwire` tool.
//!
//! Values come from an optional TOML file, then a few environment
//! variables override them:
//!
//! - `FUNDWIRE_PROTOCOL_VERSION` (default: `funding_wire::PROTOCOL_VERSION`)
//! - `FUNDWIRE_UPPERCASE_HEX`    (default: "false")

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Protocol version passed to every encode/decode call.
    pub protocol_version: u32,

    /// Print hex output in upper case.
    pub uppercase_hex: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            protocol_version: funding_wire::PROTOCOL_VERSION,
            uppercase_hex: false,
        }
    }
}

impl CliConfig {
    /// Load from `path` (if any), then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                Self::from_toml_str(&raw)
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
            None => Self::default(),
        };

        base.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Apply overrides from `lookup`, which maps a variable name to its
    /// value when set.
    pub fn with_overrides<F>(self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let protocol_version =
            read_or_default(&lookup, "FUNDWIRE_PROTOCOL_VERSION", self.protocol_version)?;
        let uppercase_hex = read_or_default(&lookup, "FUNDWIRE_UPPERCASE_HEX", self.uppercase_hex)?;

        Ok(CliConfig {
            protocol_version,
            uppercase_hex,
        })
    }

    /// Render bytes as hex in the configured case.
    pub fn hex(&self, bytes: &[u8]) -> String {
        if self.uppercase_hex {
            hex::encode_upper(bytes)
        } else {
            hex::encode(bytes)
        }
    }
}

fn read_or_default<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => val
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value for {}: {:?}", key, val)),
        None => Ok(default),
    }
}
