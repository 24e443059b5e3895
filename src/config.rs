//! # Load Test Configuration
//!
//! Settings that shape each simulated user: login credentials, the random
//! seed, think-times and transaction weights for both user profiles.
//!
//! Values come from three layers, later ones winning:
//!
//! 1. built-in defaults (the numbers the scenarios were designed around)
//! 2. an optional YAML file passed with `--config`
//! 3. environment variables
//!
//! ## Environment Variables
//!
//! - `ASSETLOAD_USERNAME` / `ASSETLOAD_PASSWORD`: login credentials
//! - `ASSETLOAD_SEED`: base seed; user `n` seeds its generator with `seed + n`
//!
//! ## Example File
//!
//! ```yaml
//! credentials:
//!   username: Terminal Reality Admin
//!   password: H@rri50n
//! seed: 42
//! single:
//!   weight: 1
//!   think_time: { min_ms: 1000, max_ms: 3000 }
//!   transactions:
//!     create_asset: 3
//!     dashboard_stats: 1
//!     trial_status: 1
//!     list_assets: 1
//! bulk:
//!   weight: 1
//!   think_time: { min_ms: 500, max_ms: 1500 }
//! ```

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::Credentials;

/// Uniform think-time window between two transactions of one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinkTime {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl ThinkTime {
    pub const fn from_millis(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    pub fn min(&self) -> Duration {
        Duration::from_millis(self.min_ms)
    }

    pub fn max(&self) -> Duration {
        Duration::from_millis(self.max_ms)
    }
}

/// Relative weights of the single-asset profile's transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleWeights {
    pub create_asset: usize,
    pub dashboard_stats: usize,
    pub trial_status: usize,
    pub list_assets: usize,
}

impl Default for SingleWeights {
    fn default() -> Self {
        Self {
            create_asset: 3,
            dashboard_stats: 1,
            trial_status: 1,
            list_assets: 1,
        }
    }
}

/// Single-asset-heavy user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleProfile {
    /// Share of users assigned to this profile in a mixed run.
    pub weight: usize,
    pub think_time: ThinkTime,
    pub transactions: SingleWeights,
}

impl Default for SingleProfile {
    fn default() -> Self {
        Self {
            weight: 1,
            think_time: ThinkTime::from_millis(1_000, 3_000),
            transactions: SingleWeights::default(),
        }
    }
}

/// Bulk-import user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkProfile {
    pub weight: usize,
    pub think_time: ThinkTime,
}

impl Default for BulkProfile {
    fn default() -> Self {
        Self {
            weight: 1,
            think_time: ThinkTime::from_millis(500, 1_500),
        }
    }
}

/// Complete configuration shared (read-only) by every simulated user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadTestConfig {
    pub credentials: Credentials,
    pub seed: Option<u64>,
    pub single: SingleProfile,
    pub bulk: BulkProfile,
}

impl LoadTestConfig {
    /// Load defaults, then `path` if given, then environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&raw).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Apply `ASSETLOAD_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(username) = lookup("ASSETLOAD_USERNAME") {
            self.credentials.username = username;
        }
        if let Some(password) = lookup("ASSETLOAD_PASSWORD") {
            self.credentials.password = password;
        }
        if let Some(seed) = lookup("ASSETLOAD_SEED") {
            let seed = seed
                .trim()
                .parse()
                .with_context(|| format!("ASSETLOAD_SEED must be an unsigned integer, got {seed:?}"))?;
            self.seed = Some(seed);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        for (name, think) in [
            ("single", self.single.think_time),
            ("bulk", self.bulk.think_time),
        ] {
            if think.min_ms > think.max_ms {
                bail!(
                    "{name}.think_time: min_ms ({}) exceeds max_ms ({})",
                    think.min_ms,
                    think.max_ms
                );
            }
        }
        let w = &self.single.transactions;
        for (name, weight) in [
            ("single.weight", self.single.weight),
            ("bulk.weight", self.bulk.weight),
            ("single.transactions.create_asset", w.create_asset),
            ("single.transactions.dashboard_stats", w.dashboard_stats),
            ("single.transactions.trial_status", w.trial_status),
            ("single.transactions.list_assets", w.list_assets),
        ] {
            if weight == 0 {
                bail!("{name} must be at least 1");
            }
        }
        Ok(())
    }

    /// Seed for the user at `index`, if the run is seeded.
    pub fn user_seed(&self, index: usize) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(index as u64))
    }
}
