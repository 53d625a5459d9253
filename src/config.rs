use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// GraphQL endpoint of the monitored daemon
    pub endpoint: String,
    /// Detail-view poll interval in milliseconds
    pub poll_interval_ms: u64,
    /// Sidebar summary poll interval in milliseconds (network-only fetch)
    pub sidebar_interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color theme: default, dracula, gruvbox, nord
    pub theme: String,
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for Config {
    fn default() -> Self {
        Self { general: GeneralConfig::default(), ui: UiConfig::default() }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8080/graphql/query".to_string(),
            poll_interval_ms: 1000,
            sidebar_interval_ms: 5000,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { theme: "default".to_string() }
    }
}

// ── Load / Save ───────────────────────────────────────────────────────

impl Config {
    pub fn load() -> Self {
        match try_load() {
            Ok(c) => c,
            Err(_) => {
                // Write defaults on first run (best-effort)
                let _ = try_write_defaults();
                Config::default()
            }
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dealtop").join("dealtop.toml"))
    }
}

fn try_load() -> Result<Config> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    let text = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&text)?;
    Ok(cfg)
}

fn try_write_defaults() -> Result<()> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(&Config::default())?;
    fs::write(
        path,
        format!("# dealtop configuration\n# Generated on first run — edit freely\n\n{}", text),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_poll_contract() {
        let cfg = Config::default();
        assert_eq!(cfg.general.poll_interval_ms, 1000);
        assert_eq!(cfg.general.sidebar_interval_ms, 5000);
        assert_eq!(cfg.ui.theme, "default");
    }

    #[test]
    fn partial_config_fills_missing_sections() {
        let cfg: Config = toml::from_str(
            "[general]\nendpoint = \"http://host:9090/graphql\"\npoll_interval_ms = 2000\nsidebar_interval_ms = 5000\n",
        )
        .unwrap();
        assert_eq!(cfg.general.endpoint, "http://host:9090/graphql");
        assert_eq!(cfg.general.poll_interval_ms, 2000);
        assert_eq!(cfg.ui.theme, "default");
    }
}
