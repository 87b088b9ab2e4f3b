//! Generator configuration from environment.

use nuflo_core::{DeploymentConfig, DEFAULT_MAX_ATTEMPTS};
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub well_count: usize,
    pub gateway_count: usize,
    pub alert_count: usize,
    pub max_attempts: usize,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        let deployment = DeploymentConfig::default();
        Self {
            well_count: deployment.well_count,
            gateway_count: deployment.gateway_count,
            alert_count: deployment.alert_count,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unparseable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            well_count: parse_or(&lookup, "NUFLO_WELLS", defaults.well_count),
            gateway_count: parse_or(&lookup, "NUFLO_GATEWAYS", defaults.gateway_count),
            alert_count: parse_or(&lookup, "NUFLO_ALERTS", defaults.alert_count),
            max_attempts: lookup("NUFLO_MAX_ATTEMPTS")
                .and_then(|s| parse_max_attempts(&s).ok())
                .unwrap_or(defaults.max_attempts),
            seed: lookup("NUFLO_SEED").and_then(|s| s.trim().parse().ok()),
        }
    }

    /// Apply command-line values on top of this config; `None` keeps the current value.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(wells) = overrides.wells {
            self.well_count = wells;
        }
        if let Some(gateways) = overrides.gateways {
            self.gateway_count = gateways;
        }
        if let Some(alerts) = overrides.alerts {
            self.alert_count = alerts;
        }
        if let Some(max_attempts) = overrides.max_attempts {
            self.max_attempts = max_attempts;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }

    pub fn deployment(&self) -> DeploymentConfig {
        DeploymentConfig {
            well_count: self.well_count,
            gateway_count: self.gateway_count,
            alert_count: self.alert_count,
            max_attempts: self.max_attempts,
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub wells: Option<usize>,
    pub gateways: Option<usize>,
    pub alerts: Option<usize>,
    pub max_attempts: Option<usize>,
    pub seed: Option<u64>,
}

/// Parse an attempt cap, which must be at least 1.
pub fn parse_max_attempts(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("max attempts must be at least 1".to_string()),
        Ok(value) => Ok(value),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
