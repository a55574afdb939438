//! 匹配规则与稳定过滤匹配。
//!
//! 匹配规则被抽象为「能回答 `accepts(input) -> bool` 的谓词」，
//! 而不是绑定某一种正则方言；`identify` 对整个原型库做一次稳定过滤，
//! 命中格式的相对顺序等于它们在库中的相对顺序，不做任何重排。

use anyhow::{bail, Result};
use regex::Regex;

use crate::database::PrototypeDatabase;
use crate::prototypes::FormatInfo;

/// 匹配规则的具体变体。
///
/// 当前原型表只产生 `Pattern`；`AnyOf` 用于由多个备选写法组成的复合格式
/// （任一子规则命中即接受）。
#[derive(Debug, Clone)]
pub enum MatchRule {
    /// 单条正则。
    Pattern(Regex),
    /// 多条正则的并联，任一命中即接受。
    AnyOf(Vec<Regex>),
}

impl MatchRule {
    /// 编译单条正则规则。`ignore_case` 通过内联 `(?i)` 实现。
    ///
    /// # Errors
    ///
    /// 正则无法编译时返回错误（调用方负责带上原型上下文）。
    pub fn compile(
        pattern: &str,
        ignore_case: bool,
    ) -> Result<Self> {
        let pat = if ignore_case {
            format!("(?i){pattern}")
        } else {
            pattern.to_string()
        };
        Ok(Self::Pattern(Regex::new(&pat)?))
    }

    /// 编译复合规则（任一子正则命中即接受）。
    ///
    /// # Errors
    ///
    /// 子正则列表为空或任何一条无法编译时返回错误。
    pub fn any_of<'a>(
        patterns: impl IntoIterator<Item = &'a str>,
        ignore_case: bool,
    ) -> Result<Self> {
        let mut compiled = Vec::new();
        for pattern in patterns {
            let pat = if ignore_case {
                format!("(?i){pattern}")
            } else {
                pattern.to_string()
            };
            compiled.push(Regex::new(&pat)?);
        }
        if compiled.is_empty() {
            bail!("复合匹配规则至少需要一条子正则");
        }
        Ok(Self::AnyOf(compiled))
    }

    /// 该规则是否接受给定输入。对任意输入都是全函数，不会失败。
    #[must_use]
    pub fn accepts(
        &self,
        input: &str,
    ) -> bool {
        match self {
            Self::Pattern(re) => re.is_match(input),
            Self::AnyOf(res) => res.iter().any(|re| re.is_match(input)),
        }
    }
}

/// 对单个输入做识别：按库的权威顺序逐条评估原型，命中则展开其全部命名格式。
///
/// 返回惰性迭代器，调用方可以提前停止，也可以整体收集；
/// 空输入与「无任何命中」都是普通结果，不是错误。
pub fn identify<'a>(
    database: &'a PrototypeDatabase,
    input: &'a str,
) -> impl Iterator<Item = &'static FormatInfo> + 'a {
    database
        .prototypes()
        .iter()
        .filter(move |proto| proto.accepts(input))
        .flat_map(|proto| proto.formats().iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names_for(input: &str) -> Vec<&'static str> {
        let db = PrototypeDatabase::load().unwrap();
        identify(&db, input).map(|f| f.name).collect()
    }

    #[test]
    fn test_md5_candidates_include_md5() {
        let names = names_for("5f4dcc3b5aa765d61d8327deb882cf99");
        assert!(names.contains(&"MD5"));
        assert!(names.contains(&"NTLM"));
    }

    #[test]
    fn test_order_follows_database_order() {
        let db = PrototypeDatabase::load().unwrap();
        let matched: Vec<&'static str> =
            identify(&db, "5f4dcc3b5aa765d61d8327deb882cf99").map(|f| f.name).collect();

        // 稳定过滤：命中序列必须是库整体展开序列的子序列
        let all: Vec<&'static str> = db.all_formats().map(|f| f.name).collect();
        let mut cursor = 0usize;
        for name in &matched {
            let pos = all[cursor..]
                .iter()
                .position(|n| n == name)
                .expect("matched name must appear after cursor");
            cursor += pos + 1;
        }
    }

    #[test]
    fn test_garbage_input_matches_nothing() {
        assert!(names_for("not_a_hash!!").is_empty());
    }

    #[test]
    fn test_empty_input_is_ordinary() {
        // 空串按普通输入评估，结果由库内容决定，不允许 panic
        let _ = names_for("");
    }

    #[test]
    fn test_any_of_rule_accepts_either_branch() {
        let rule = MatchRule::any_of(["^[a-f0-9]{32}$", "^[a-f0-9]{40}$"], true).unwrap();
        assert!(rule.accepts("5F4DCC3B5AA765D61D8327DEB882CF99"));
        assert!(rule.accepts("aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"));
        assert!(!rule.accepts("zzzz"));
    }

    #[test]
    fn test_any_of_rejects_empty_list() {
        assert!(MatchRule::any_of(std::iter::empty::<&str>(), false).is_err());
    }
}
