//! Host settings from `.inlay/config.toml`

use std::path::Path;

use inlay_catalog::{CatalogClient, VolumesQuery, DEFAULT_BASE_URL};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::policy::CellPolicy;

const CONFIG_FILENAME: &str = "config.toml";
const INLAY_DIR: &str = ".inlay";

// ─────────────────────────────────────────────────────────────────
// Settings Types
// ─────────────────────────────────────────────────────────────────

/// Catalog request parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Full-text search terms sent as the `q` parameter.
    #[serde(default = "default_query")]
    pub query: String,

    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            query: default_query(),
            max_results: default_max_results(),
        }
    }
}

impl CatalogSettings {
    /// Client for the configured endpoint.
    pub fn client(&self) -> CatalogClient {
        CatalogClient::new(self.base_url.clone())
    }

    /// Query carrying the configured terms and cap.
    pub fn volumes_query(&self) -> VolumesQuery {
        VolumesQuery {
            terms: self.query.clone(),
            max_results: self.max_results,
        }
    }
}

/// Mixed-renderer list parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CellSettings {
    /// 1-in-N chance a fresh forward position renders embedded.
    /// 1 embeds every eligible position.
    #[serde(default = "default_embed_one_in")]
    pub embed_one_in: u32,

    /// List length.
    #[serde(default = "default_cell_count")]
    pub count: usize,
}

impl Default for CellSettings {
    fn default() -> Self {
        Self {
            embed_one_in: default_embed_one_in(),
            count: default_cell_count(),
        }
    }
}

impl CellSettings {
    /// Entropy-seeded policy with the configured embed chance.
    pub fn policy(&self) -> CellPolicy {
        CellPolicy::new(self.embed_one_in)
    }
}

/// Settings for both sample flows.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub cells: CellSettings,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_query() -> String {
    "greenwood tulsa".to_string()
}

fn default_max_results() -> u32 {
    15
}

fn default_embed_one_in() -> u32 {
    3
}

fn default_cell_count() -> usize {
    100
}

// ─────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────

/// Load settings from `<dir>/.inlay/config.toml`.
///
/// Returns default settings if the file doesn't exist or can't be
/// parsed.
pub fn load_settings(dir: &Path) -> Settings {
    let config_path = dir.join(INLAY_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}
