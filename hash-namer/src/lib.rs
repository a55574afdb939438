#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

//! hash-namer：根据模式原型库识别一个「长得像哈希」的字符串可能的格式，
//! 并按「常见格式优先」输出候选列表。
//!
//! 引擎分三层：原型库（[`database`]，只读数据）→ 匹配（[`matcher`]，稳定过滤）
//! → 排序（[`ranker`]，稳定分区）。所有操作都是纯函数，库与常见集合在
//! 构建后只读共享，批量识别可以安全并行。

pub mod config;
pub mod database;
pub mod matcher;
pub mod output;
pub mod prelude;
pub mod prototypes;
pub mod ranker;
pub mod types;

use anyhow::Result;

pub use config::{AppConfig, NamerSettings, OutputSettings};
pub use database::{Prototype, PrototypeDatabase};
pub use matcher::MatchRule;
pub use output::Prettifier;
pub use ranker::{rank, PopularSet, DEFAULT_POPULAR};
pub use types::{FormatMatch, IdentifyReport};

/// 识别器门面：原型库 + 常见格式集合 + 批量策略。
///
/// 构建一次后所有方法都只读自身，可跨线程共享引用。
#[derive(Debug, Clone)]
pub struct HashNamer {
    database: PrototypeDatabase,
    popular: PopularSet,
    parallel: bool,
}

impl HashNamer {
    /// 使用默认配置构建识别器。
    ///
    /// # Errors
    ///
    /// 原型库编译失败时返回错误（配置错误，启动即失败）。
    pub fn new() -> Result<Self> {
        Self::with_config(&AppConfig::default())
    }

    /// 使用给定配置构建识别器。
    ///
    /// # Errors
    ///
    /// 配置校验失败或原型库编译失败时返回错误。
    pub fn with_config(config: &AppConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            database: PrototypeDatabase::load()?,
            popular: config.popular_set(),
            parallel: config.namer.parallel,
        })
    }

    #[must_use]
    pub const fn database(&self) -> &PrototypeDatabase {
        &self.database
    }

    #[must_use]
    pub const fn popular(&self) -> &PopularSet {
        &self.popular
    }

    /// 识别单个输入并按常见格式优先排序。
    ///
    /// 空输入按普通输入评估；没有任何命中时返回空列表，不是错误。
    #[must_use]
    pub fn identify(
        &self,
        input: &str,
    ) -> Vec<FormatMatch> {
        log::trace!("识别输入: {input}");
        let matched = matcher::identify(&self.database, input);
        let ranked = ranker::rank(matched, &self.popular);
        log::debug!("输入命中 {} 个候选格式", ranked.len());
        ranked.into_iter().map(FormatMatch::from).collect()
    }

    /// 识别单个输入并打包成报告。
    #[must_use]
    pub fn report(
        &self,
        input: &str,
    ) -> IdentifyReport {
        IdentifyReport {
            input: input.to_string(),
            matches: self.identify(input),
            error: None,
        }
    }

    /// 识别一行原始字节。非法 UTF-8 只影响这一个输入：
    /// 报告带上错误说明占住位置，批量中的其他输入照常处理。
    #[must_use]
    pub fn report_bytes(
        &self,
        raw: &[u8],
    ) -> IdentifyReport {
        match std::str::from_utf8(raw) {
            Ok(text) => self.report(text),
            Err(err) => {
                log::warn!("跳过非法 UTF-8 输入: {err}");
                IdentifyReport::failed(
                    String::from_utf8_lossy(raw).into_owned(),
                    format!("输入不是合法 UTF-8: {err}"),
                )
            }
        }
    }

    /// 批量识别：输出与输入 index 对齐，每个输入独立计算。
    /// 并行与否只影响吞吐，报告内容与顺序完全一致。
    #[must_use]
    pub fn identify_batch<S>(
        &self,
        inputs: &[S],
    ) -> Vec<IdentifyReport>
    where
        S: AsRef<str> + Sync,
    {
        if self.parallel {
            use rayon::prelude::*;
            inputs.par_iter().map(|s| self.report(s.as_ref())).collect()
        } else {
            inputs.iter().map(|s| self.report(s.as_ref())).collect()
        }
    }

    /// 字节行的批量识别（文件输入路径），同样保持 index 对齐。
    #[must_use]
    pub fn identify_batch_bytes(
        &self,
        lines: &[&[u8]],
    ) -> Vec<IdentifyReport> {
        if self.parallel {
            use rayon::prelude::*;
            lines.par_iter().map(|raw| self.report_bytes(raw)).collect()
        } else {
            lines.iter().map(|raw| self.report_bytes(raw)).collect()
        }
    }
}

/// 单输入识别的便捷入口（每次调用构建默认识别器）。
///
/// # Errors
///
/// 原型库编译失败时返回错误。
pub fn identify_and_rank(input: &str) -> Result<Vec<FormatMatch>> {
    Ok(HashNamer::new()?.identify(input))
}

/// 批量识别的便捷入口，输出与输入 index 对齐。
///
/// # Errors
///
/// 原型库编译失败时返回错误。
pub fn identify_and_rank_batch<S>(inputs: &[S]) -> Result<Vec<IdentifyReport>>
where
    S: AsRef<str> + Sync,
{
    Ok(HashNamer::new()?.identify_batch(inputs))
}

/// 库内 JSON API：与 CLI 的 greppable 输出一致，保持输入顺序。
///
/// # Errors
///
/// 原型库编译失败或序列化失败时返回错误。
pub fn api_return_matches_as_json<S>(inputs: &[S]) -> Result<String>
where
    S: AsRef<str> + Sync,
{
    let config = AppConfig::default();
    let namer = HashNamer::with_config(&config)?;
    let reports = namer.identify_batch(inputs);
    let prettifier = Prettifier::new(&config.output, false, namer.popular().clone());
    prettifier.greppable(&reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MD5_HASH: &str = "5f4dcc3b5aa765d61d8327deb882cf99";

    #[test]
    fn test_identify_is_deterministic() {
        let namer = HashNamer::new().unwrap();
        assert_eq!(namer.identify(MD5_HASH), namer.identify(MD5_HASH));
    }

    #[test]
    fn test_md5_ranked_before_non_popular() {
        let namer = HashNamer::new().unwrap();
        let matches = namer.identify(MD5_HASH);
        assert!(!matches.is_empty());

        let md5_pos = matches.iter().position(|m| m.name == "MD5").unwrap();
        let first_unpopular = matches
            .iter()
            .position(|m| !namer.popular().contains(&m.name))
            .unwrap();
        assert!(md5_pos < first_unpopular);
    }

    #[test]
    fn test_popular_first_invariant() {
        let namer = HashNamer::new().unwrap();
        for input in [MD5_HASH, "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d", ""] {
            let matches = namer.identify(input);
            // 不允许「不常见」条目出现在任何「常见」条目之前
            let mut seen_unpopular = false;
            for m in &matches {
                if namer.popular().contains(&m.name) {
                    assert!(!seen_unpopular, "常见格式 {} 排在了不常见格式之后", m.name);
                } else {
                    seen_unpopular = true;
                }
            }
        }
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let namer = HashNamer::new().unwrap();
        assert!(namer.identify("not_a_hash!!").is_empty());
    }

    #[test]
    fn test_batch_preserves_order_and_isolation() {
        let namer = HashNamer::new().unwrap();
        let inputs = [MD5_HASH.to_string(), "not_a_hash!!".to_string()];
        let reports = namer.identify_batch(&inputs);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].input, inputs[0]);
        assert_eq!(reports[1].input, inputs[1]);
        assert!(!reports[0].matches.is_empty());
        assert!(reports[1].matches.is_empty());
        assert!(reports[1].error.is_none());
    }

    #[test]
    fn test_parallel_and_sequential_batches_agree() {
        let mut config = AppConfig::default();
        config.namer.parallel = true;
        let parallel = HashNamer::with_config(&config).unwrap();
        config.namer.parallel = false;
        let sequential = HashNamer::with_config(&config).unwrap();

        let inputs = [
            MD5_HASH.to_string(),
            "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d".to_string(),
            String::new(),
            "not_a_hash!!".to_string(),
        ];
        assert_eq!(parallel.identify_batch(&inputs), sequential.identify_batch(&inputs));
    }

    #[test]
    fn test_invalid_utf8_line_isolated_in_batch() {
        let namer = HashNamer::new().unwrap();
        let lines: Vec<&[u8]> = vec![MD5_HASH.as_bytes(), &[0xff, 0xfe, 0x41]];
        let reports = namer.identify_batch_bytes(&lines);
        assert_eq!(reports.len(), 2);
        assert!(reports[0].error.is_none());
        assert!(!reports[0].matches.is_empty());
        assert!(reports[1].error.is_some());
        assert!(reports[1].matches.is_empty());
    }

    #[test]
    fn test_custom_popular_set_is_injectable() {
        let mut config = AppConfig::default();
        config.namer.popular = vec!["Snefru-128".to_string()];
        let namer = HashNamer::with_config(&config).unwrap();
        let matches = namer.identify(MD5_HASH);
        assert_eq!(matches.first().map(|m| m.name.as_str()), Some("Snefru-128"));
    }

    #[test]
    fn test_api_json_is_index_aligned() {
        let inputs = [MD5_HASH.to_string(), "not_a_hash!!".to_string()];
        let json = api_return_matches_as_json(&inputs).unwrap();
        let reports: Vec<IdentifyReport> = serde_json::from_str(&json).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].input, inputs[0]);
        assert_eq!(reports[1].input, inputs[1]);
    }
}
