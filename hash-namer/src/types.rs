//! 对外输出的数据记录（可序列化，供展示层与 JSON API 使用）。

use serde::{Deserialize, Serialize};

use crate::prototypes::FormatInfo;

/// 一次命中的哈希格式候选。
///
/// `hashcat` / `john` / `description` 为辅助元数据，引擎不解释其内容，
/// 仅从原型表原样带出。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatMatch {
    pub name: String,
    pub hashcat: Option<u32>,
    pub john: Option<String>,
    pub extended: bool,
    pub description: Option<String>,
}

impl From<&FormatInfo> for FormatMatch {
    fn from(info: &FormatInfo) -> Self {
        Self {
            name: info.name.to_string(),
            hashcat: info.hashcat,
            john: info.john.map(ToString::to_string),
            extended: info.extended,
            description: info.description.map(ToString::to_string),
        }
    }
}

/// 单个输入的识别报告：原始输入 + 排序后的候选格式。
///
/// `matches` 为空不是错误，表示没有任何格式接受该输入；
/// `error` 仅在该输入本身无法处理时出现（如文件行不是合法 UTF-8），
/// 不影响批量中的其他输入。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifyReport {
    pub input: String,
    pub matches: Vec<FormatMatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IdentifyReport {
    /// 输入无法处理时的报告（占住批量中的位置，保持 index 对齐）。
    #[must_use]
    pub fn failed(
        input: String,
        error: String,
    ) -> Self {
        Self {
            input,
            matches: Vec::new(),
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_match_from_info() {
        static INFO: FormatInfo = FormatInfo {
            name: "MD5",
            hashcat: Some(0),
            john: Some("raw-md5"),
            extended: false,
            description: None,
        };

        let m = FormatMatch::from(&INFO);
        assert_eq!(m.name, "MD5");
        assert_eq!(m.hashcat, Some(0));
        assert_eq!(m.john.as_deref(), Some("raw-md5"));
        assert!(!m.extended);
        assert!(m.description.is_none());
    }

    #[test]
    fn test_report_error_not_serialized_when_absent() {
        let report = IdentifyReport {
            input: "abc".to_string(),
            matches: Vec::new(),
            error: None,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("error"));

        let failed = IdentifyReport::failed("abc".to_string(), "bad utf-8".to_string());
        let json = serde_json::to_string(&failed).unwrap();
        assert!(json.contains("bad utf-8"));
    }
}
