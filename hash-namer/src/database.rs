//! 原型库：启动时一次性编译全部匹配规则，之后只读共享。
//!
//! 规则采用急切校验：任何一条正则编译失败都视为配置错误，
//! 构建立即失败并指明出错的原型，绝不静默降级为「该格式永远不匹配」。

use anyhow::{Context, Result};

use crate::matcher::MatchRule;
use crate::prototypes::{FormatInfo, PrototypeEntry, PROTOTYPE_TABLE};

/// 一条已编译的原型：匹配规则 + 该规则接受的全部命名格式。
#[derive(Debug, Clone)]
pub struct Prototype {
    rule: MatchRule,
    formats: &'static [FormatInfo],
}

impl Prototype {
    /// 该原型是否接受给定输入。
    #[must_use]
    pub fn accepts(
        &self,
        input: &str,
    ) -> bool {
        self.rule.accepts(input)
    }

    #[must_use]
    pub const fn formats(&self) -> &'static [FormatInfo] {
        self.formats
    }

    #[must_use]
    pub const fn rule(&self) -> &MatchRule {
        &self.rule
    }
}

/// 已编译的完整原型库。构建一次、进程内只读共享，迭代顺序即表序。
#[derive(Debug, Clone)]
pub struct PrototypeDatabase {
    prototypes: Vec<Prototype>,
}

impl PrototypeDatabase {
    /// 从内置原型表构建。
    ///
    /// # Errors
    ///
    /// 任何一条正则编译失败时返回错误，错误信息包含出错的正则及其首个格式名。
    pub fn load() -> Result<Self> {
        Self::from_entries(PROTOTYPE_TABLE)
    }

    /// 从任意原型表构建（内置表与测试表走同一条路径）。
    ///
    /// # Errors
    ///
    /// 同 [`Self::load`]。
    pub fn from_entries(entries: &'static [PrototypeEntry]) -> Result<Self> {
        let mut prototypes = Vec::with_capacity(entries.len());
        for entry in entries {
            let rule = MatchRule::compile(entry.regex, entry.ignore_case).with_context(|| {
                format!(
                    "原型正则编译失败: {} (首个格式: {})",
                    entry.regex,
                    entry.formats.first().map_or("<无>", |f| f.name)
                )
            })?;
            prototypes.push(Prototype {
                rule,
                formats: entry.formats,
            });
        }

        log::debug!("原型库构建完成: {} 条原型", prototypes.len());
        Ok(Self { prototypes })
    }

    /// 按权威顺序返回全部原型。
    #[must_use]
    pub fn prototypes(&self) -> &[Prototype] {
        &self.prototypes
    }

    /// 按权威顺序展开全部命名格式（跨原型平铺）。
    pub fn all_formats(&self) -> impl Iterator<Item = &'static FormatInfo> + '_ {
        self.prototypes.iter().flat_map(|p| p.formats.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    /// 命名格式总数（一条原型可对应多个格式）。
    #[must_use]
    pub fn format_count(&self) -> usize {
        self.prototypes.iter().map(|p| p.formats.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_compiles() {
        let db = PrototypeDatabase::load().unwrap();
        assert!(!db.is_empty());
        assert!(db.format_count() >= db.len());
    }

    #[test]
    fn test_iteration_order_is_stable_across_loads() {
        let a = PrototypeDatabase::load().unwrap();
        let b = PrototypeDatabase::load().unwrap();
        let names_a: Vec<&str> = a.all_formats().map(|f| f.name).collect();
        let names_b: Vec<&str> = b.all_formats().map(|f| f.name).collect();
        assert_eq!(names_a, names_b);
    }

    #[test]
    fn test_known_formats_present() {
        let db = PrototypeDatabase::load().unwrap();
        let names: Vec<&str> = db.all_formats().map(|f| f.name).collect();
        for expected in ["MD5", "SHA-1", "SHA-256", "NTLM", "bcrypt"] {
            assert!(names.contains(&expected), "缺少格式: {expected}");
        }
    }

    #[test]
    fn test_invalid_pattern_is_a_load_error() {
        static BAD_FORMATS: [FormatInfo; 1] = [FormatInfo {
            name: "Broken",
            hashcat: None,
            john: None,
            extended: false,
            description: None,
        }];
        static BAD_TABLE: [PrototypeEntry; 1] = [PrototypeEntry {
            regex: r"^[a-f0-9{4}$", // 故意不闭合的字符类
            ignore_case: true,
            formats: &BAD_FORMATS,
        }];

        let err = PrototypeDatabase::from_entries(&BAD_TABLE).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("Broken"), "错误必须指明出错的原型: {msg}");
    }
}
