//! 按「常见格式优先」对候选做稳定分区。
//!
//! 这不是排序：只走一遍输入，把名字命中常见集合的候选挪到前面，
//! 两个分区内部的相对顺序都保持原型库的权威顺序不变。

use std::collections::HashSet;

use crate::prototypes::FormatInfo;

/// 默认的常见格式清单（编辑性数据，可被配置覆盖）。
pub const DEFAULT_POPULAR: &[&str] = &[
    "MD5",
    "MD4",
    "NTLM",
    "SHA-256",
    "SHA-515",
    "Keccak-256",
    "Keccak-512",
    "Blake2",
    "bcrypt",
    "SHA-1",
    "HMAC-SHA1 (key = $salt)",
];

/// 常见格式名集合。只做精确整名匹配，O(1) 查询，构建后只读。
#[derive(Debug, Clone)]
pub struct PopularSet {
    names: HashSet<String>,
}

impl Default for PopularSet {
    fn default() -> Self {
        Self::new(DEFAULT_POPULAR.iter().map(ToString::to_string))
    }
}

impl PopularSet {
    #[must_use]
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    /// 精确整名匹配；子串或前缀巧合不算命中。
    #[must_use]
    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.names.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// 稳定分区：常见格式在前，其余在后，分区内部保持输入顺序。
///
/// 对任意输入都是全函数：空输入给空输出；全部常见或全不常见时输出即输入。
/// 按候选实例逐个判定，同名的多个候选互不影响。
#[must_use]
pub fn rank(
    matches: impl IntoIterator<Item = &'static FormatInfo>,
    popular: &PopularSet,
) -> Vec<&'static FormatInfo> {
    let mut front = Vec::new();
    let mut rest = Vec::new();
    for info in matches {
        if popular.contains(info.name) {
            front.push(info);
        } else {
            rest.push(info);
        }
    }
    front.append(&mut rest);
    front
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn info(name: &'static str) -> FormatInfo {
        FormatInfo {
            name,
            hashcat: None,
            john: None,
            extended: false,
            description: None,
        }
    }

    static SAMPLE: [FormatInfo; 5] = [
        info("CRC-32"),
        info("MD5"),
        info("Snefru-128"),
        info("NTLM"),
        info("MD5"),
    ];

    fn sample_refs() -> Vec<&'static FormatInfo> {
        SAMPLE.iter().collect()
    }

    #[test]
    fn test_popular_moves_to_front_preserving_order() {
        let ranked = rank(sample_refs(), &PopularSet::default());
        let names: Vec<&str> = ranked.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["MD5", "NTLM", "MD5", "CRC-32", "Snefru-128"]);
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        assert!(rank(Vec::new(), &PopularSet::default()).is_empty());
    }

    #[test]
    fn test_all_popular_unchanged() {
        static ALL: [FormatInfo; 2] = [info("MD5"), info("SHA-1")];
        let ranked = rank(ALL.iter(), &PopularSet::default());
        let names: Vec<&str> = ranked.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["MD5", "SHA-1"]);
    }

    #[test]
    fn test_none_popular_unchanged() {
        static NONE: [FormatInfo; 2] = [info("CRC-32"), info("Snefru-128")];
        let ranked = rank(NONE.iter(), &PopularSet::new(std::iter::empty::<String>()));
        let names: Vec<&str> = ranked.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["CRC-32", "Snefru-128"]);
    }

    #[test]
    fn test_membership_is_exact_not_substring() {
        static LOOKALIKE: [FormatInfo; 2] = [info("MD5-like"), info("MD5")];
        let popular = PopularSet::new(["MD5".to_string()]);
        let ranked = rank(LOOKALIKE.iter(), &popular);
        let names: Vec<&str> = ranked.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["MD5", "MD5-like"]);
    }

    #[test]
    fn test_same_name_instances_are_ranked_independently() {
        // 两个同名 "Custom" 候选：一个在常见集合中按实例判定，不做按名去重
        static CUSTOM: [FormatInfo; 3] = [info("Other"), info("Custom"), info("Custom")];
        let popular = PopularSet::new(["Custom".to_string()]);
        let ranked = rank(CUSTOM.iter(), &popular);
        let names: Vec<&str> = ranked.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Custom", "Custom", "Other"]);
    }
}
