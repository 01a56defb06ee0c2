use crate::hash::HashAlgorithm;
use crate::secret::Secret;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Client configuration loaded from `~/.config/cpkit/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Coordination store endpoints, e.g. `"https://etcd-0.internal:2379"`.
    pub endpoints: Vec<String>,
    /// Algorithm used to derive object identifiers. `fnv64a` is fine for
    /// identifier shortening but must not be used for secrets.
    #[serde(default = "default_id_algorithm")]
    pub id_algorithm: HashAlgorithm,
    /// Credential presented to the control plane. Redacted whenever the
    /// config is serialized back out; omitted entirely when unset.
    #[serde(default, skip_serializing_if = "Secret::is_empty")]
    pub auth_token: Secret,
    /// Seconds to wait when establishing a store connection.
    #[serde(default = "default_dial_timeout_secs")]
    pub dial_timeout_secs: u64,
}

fn default_id_algorithm() -> HashAlgorithm {
    HashAlgorithm::Fnv64a
}

fn default_dial_timeout_secs() -> u64 {
    5
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: vec!["http://127.0.0.1:2379".to_string()],
            id_algorithm: default_id_algorithm(),
            auth_token: Secret::default(),
            dial_timeout_secs: default_dial_timeout_secs(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cpkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ClientConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ClientConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ClientConfig = toml::from_str(&data)?;
    Ok(cfg)
}
