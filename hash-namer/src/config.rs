//! 应用配置（TOML 文件 + 默认值）。
//!
//! 「常见格式」清单是编辑性数据，作为配置注入而不是写死在排序逻辑里，
//! 后续增删条目不需要改动 Ranker。

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::ranker::{PopularSet, DEFAULT_POPULAR};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub namer: NamerSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamerSettings {
    /// 排序时优先展示的格式名清单（精确整名匹配）。
    #[serde(default = "default_popular")]
    pub popular: Vec<String>,
    /// 批量识别是否并行。各输入之间无共享可变状态，开关只影响吞吐。
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// 是否在输出中带上 John the Ripper 格式名。
    #[serde(default = "default_true")]
    pub john: bool,
    /// 是否在输出中带上 hashcat mode。
    #[serde(default = "default_true")]
    pub hashcat: bool,
}

fn default_popular() -> Vec<String> {
    DEFAULT_POPULAR.iter().map(ToString::to_string).collect()
}

const fn default_parallel() -> bool {
    true
}

const fn default_true() -> bool {
    true
}

impl Default for NamerSettings {
    fn default() -> Self {
        Self {
            popular: default_popular(),
            parallel: default_parallel(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            john: true,
            hashcat: true,
        }
    }
}

impl AppConfig {
    /// 从 TOML 配置文件加载配置。
    ///
    /// # Errors
    ///
    /// 当读取文件失败或 TOML 解析失败时返回错误。
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    #[must_use]
    pub fn load_or_default(path: Option<&Path>) -> Self {
        path.and_then(|p| Self::load(p).ok())
            .or_else(|| Self::load(&Self::default_config_path()).ok())
            .unwrap_or_default()
    }

    /// 将配置保存为 TOML 文件。
    ///
    /// # Errors
    ///
    /// 当创建父目录、序列化或写入文件失败时返回错误。
    pub fn save(
        &self,
        path: &Path,
    ) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    #[must_use]
    pub fn default_config_path() -> PathBuf {
        config_base_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hash-namer")
            .join("config.toml")
    }

    /// 从配置构建常见格式集合。
    #[must_use]
    pub fn popular_set(&self) -> PopularSet {
        PopularSet::new(self.namer.popular.iter().cloned())
    }

    /// 基础配置校验（防止明显的无效值进入运行态）。
    ///
    /// # Errors
    ///
    /// 当配置字段不满足基本约束时返回错误。
    pub fn validate(&self) -> Result<()> {
        if self.namer.popular.iter().any(|name| name.trim().is_empty()) {
            bail!("namer.popular 不允许包含空白格式名");
        }
        Ok(())
    }

    #[must_use]
    pub fn generate_default_config() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

fn config_base_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(dir);
    }

    #[cfg(windows)]
    {
        if let Some(dir) = std::env::var_os("APPDATA").map(PathBuf::from) {
            return Some(dir);
        }
    }

    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_popular_matches_editorial_list() {
        let config = AppConfig::default();
        assert_eq!(config.namer.popular.len(), DEFAULT_POPULAR.len());
        assert!(config.namer.popular.iter().any(|n| n == "MD5"));
        assert!(config.namer.parallel);
        assert!(config.output.john);
        assert!(config.output.hashcat);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.namer.popular, config.namer.popular);
        assert_eq!(parsed.namer.parallel, config.namer.parallel);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: AppConfig = toml::from_str("[namer]\npopular = [\"MD5\"]\n").unwrap();
        assert_eq!(parsed.namer.popular, vec!["MD5".to_string()]);
        assert!(parsed.namer.parallel);
        assert!(parsed.output.hashcat);
    }

    #[test]
    fn test_validate_rejects_blank_popular_name() {
        let mut config = AppConfig::default();
        config.namer.popular.push("  ".to_string());
        assert!(config.validate().is_err());
    }
}
