// config.rs — Optional `wac.toml` settings.
//
//   trusted_origins = ["https://apps.example.com"]
//   log_filter = "wac_check=debug"
//
//   [profiles]
//   "https://alice.example.com/profile/card" = "profiles/alice.yaml"
//
// Relative profile paths are resolved against the directory holding the
// config file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Settings shared by every `wac` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Origins exempt from origin checks on every request.
    #[serde(default)]
    pub trusted_origins: Vec<String>,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_filter: Option<String>,

    /// Owner document IRI → local graph file holding that profile.
    #[serde(default)]
    pub profiles: BTreeMap<String, PathBuf>,
}

impl CliConfig {
    /// Load the config file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config: CliConfig = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        for file in config.profiles.values_mut() {
            if file.is_relative() {
                *file = base.join(&*file);
            }
        }
        Ok(config)
    }

    /// Load from file if it exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
