/*!
 * Allocator Configuration
 *
 * Runtime configuration for accounting mode and allocation tracing
 */

use crate::core::limits::{ENV_ACCOUNTING, ENV_TRACE_ALLOCATIONS};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown accounting mode '{0}' (expected 'approximate' or 'exact')")]
    UnknownAccountingMode(String),

    #[error("Invalid boolean '{value}' for {key}")]
    InvalidFlag { key: &'static str, value: String },

    #[error("Malformed configuration: {0}")]
    Malformed(String),
}

/// How released and resized bytes are accounted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountingMode {
    /// Block sizes are not retained: releases only bump `free_count`, resizes
    /// charge the full new size
    #[default]
    Approximate,
    /// Block sizes are kept in a side table keyed by address so releases and
    /// resizes adjust `current_usage` and `total_freed` exactly
    Exact,
}

impl FromStr for AccountingMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "approximate" | "approx" => Ok(AccountingMode::Approximate),
            "exact" => Ok(AccountingMode::Exact),
            other => Err(ConfigError::UnknownAccountingMode(other.to_string())),
        }
    }
}

/// Allocator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocatorConfig {
    pub accounting: AccountingMode,
    /// Emit a trace event for every allocate/resize/release
    pub trace_allocations: bool,
}

impl AllocatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with exact block accounting
    pub fn exact() -> Self {
        Self {
            accounting: AccountingMode::Exact,
            ..Self::default()
        }
    }

    pub fn with_accounting(mut self, accounting: AccountingMode) -> Self {
        self.accounting = accounting;
        self
    }

    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.trace_allocations = enabled;
        self
    }

    /// Parse from JSON, e.g. `{"accounting": "exact"}`
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Read configuration from the environment
    ///
    /// Environment variables:
    /// - `DS_MEMORY_ACCOUNTING`: `approximate` (default) or `exact`
    /// - `DS_TRACE_ALLOCATIONS`: `1`/`true` to trace every call (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(mode) = lookup(ENV_ACCOUNTING) {
            config.accounting = mode.parse()?;
        }

        if let Some(flag) = lookup(ENV_TRACE_ALLOCATIONS) {
            config.trace_allocations = parse_flag(ENV_TRACE_ALLOCATIONS, &flag)?;
        }

        tracing::debug!(
            accounting = ?config.accounting,
            trace_allocations = config.trace_allocations,
            "allocator configuration loaded"
        );

        Ok(config)
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}
