//! tablegrid.toml configuration parser.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Players seated at one table.
pub const DEFAULT_TABLE_SIZE: u32 = 4;

/// Ceiling on candidate pass numbers tried by the search.
pub const DEFAULT_MAX_SEARCH_ITERATIONS: u32 = 100;

/// On-disk shape of `tablegrid.toml`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TablegridConfig {
    pub scheduler: Option<SchedulerSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchedulerSection {
    pub table_size: Option<u32>,
    pub max_search_iterations: Option<u32>,
}

/// Resolved scheduler settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    pub table_size: u32,
    pub max_search_iterations: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            table_size: DEFAULT_TABLE_SIZE,
            max_search_iterations: DEFAULT_MAX_SEARCH_ITERATIONS,
        }
    }
}

impl TablegridConfig {
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> CoreResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> CoreResult<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Fill in defaults and validate.
    pub fn scheduler(&self) -> CoreResult<SchedulerConfig> {
        let section = self.scheduler.clone().unwrap_or_default();
        let config = SchedulerConfig {
            table_size: section.table_size.unwrap_or(DEFAULT_TABLE_SIZE),
            max_search_iterations: section
                .max_search_iterations
                .unwrap_or(DEFAULT_MAX_SEARCH_ITERATIONS),
        };

        if config.table_size == 0 {
            return Err(CoreError::InvalidConfig(
                "scheduler.table_size must be at least 1".to_string(),
            ));
        }
        if config.max_search_iterations == 0 {
            return Err(CoreError::InvalidConfig(
                "scheduler.max_search_iterations must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }
}
