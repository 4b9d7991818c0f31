use std::env;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_SEED_COUNT: usize = 57;
const DEFAULT_SEED: u64 = 42;

/// Server settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    /// Number of feedback records generated at start-up.
    pub seed_count: usize,
    /// RNG seed for the generated records.
    pub seed: u64,
}

impl ServerConfig {
    /// `PORT`, `BIND_ADDR`, `FEEDBACK_SEED_COUNT`, `FEEDBACK_SEED`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            bind_addr: lookup("BIND_ADDR")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            seed_count: parse_or(&lookup, "FEEDBACK_SEED_COUNT", DEFAULT_SEED_COUNT)?,
            seed: parse_or(&lookup, "FEEDBACK_SEED", DEFAULT_SEED)?,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid {key}: {raw:?}")),
        _ => Ok(default),
    }
}
