// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! Settings come from a YAML file (`$SEATPLAN_CONFIG`, else `./seatplan.yaml`
//! when present) with every field optional. `SEATPLAN_EVENT_ID` and
//! `SEATPLAN_DATA_DIR` override the file.

use crate::models::document::HallSize;
use crate::planner::generator::{BanquetGridParams, SeatGridParams};
use crate::planner::history::DEFAULT_HISTORY_LIMIT;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "SEATPLAN_CONFIG";
pub const EVENT_ID_ENV: &str = "SEATPLAN_EVENT_ID";
pub const DATA_DIR_ENV: &str = "SEATPLAN_DATA_DIR";
const DEFAULT_CONFIG_FILE: &str = "seatplan.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Event whose hall size is loaded and saved.
    pub event_id: Option<String>,
    /// Directory of per-event documents. Without it the hall lives in memory.
    pub data_dir: Option<PathBuf>,
    /// Hall used until (or unless) a stored one loads.
    pub default_hall: HallSize,
    pub load_debounce_ms: u64,
    pub history_limit: usize,
    pub seat_grid: SeatGridParams,
    pub banquet_grid: BanquetGridParams,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            event_id: None,
            data_dir: None,
            default_hall: HallSize::DEFAULT,
            load_debounce_ms: 300,
            history_limit: DEFAULT_HISTORY_LIMIT,
            seat_grid: SeatGridParams::default(),
            banquet_grid: BanquetGridParams::default(),
        }
    }
}

impl AppConfig {
    /// Load from the environment and the default config file locations.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let path = explicit.or_else(|| {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.exists().then_some(default)
        });
        Self::resolve(path.as_deref(), |key| std::env::var(key).ok())
    }

    /// Read `path` (if any) and apply overrides from `env`.
    pub fn resolve(path: Option<&Path>, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(event_id) = env(EVENT_ID_ENV).filter(|v| !v.trim().is_empty()) {
            config.event_id = Some(event_id);
        }
        if let Some(dir) = env(DATA_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }
        if !config.default_hall.is_usable() {
            log::warn!("Configured default hall is not drawable, using 1800x1200");
            config.default_hall = HallSize::DEFAULT;
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read config {}", path.display()))?;
        let config = serde_yaml::from_str(&text)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
