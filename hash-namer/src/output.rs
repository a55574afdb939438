//! 展示层：把识别报告渲染成人读文本或可 grep 的 JSON。
//!
//! 核心引擎只产出 [`IdentifyReport`]；这里决定怎么打印，
//! 包括 john/hashcat 字段过滤与无障碍模式（省略大段「不太可能」列表）。

use anyhow::Result;

use crate::config::OutputSettings;
use crate::ranker::PopularSet;
use crate::types::{FormatMatch, IdentifyReport};

/// 报告渲染器。字段过滤只发生在展示层，核心结果不受影响。
#[derive(Debug, Clone)]
pub struct Prettifier {
    accessible: bool,
    john: bool,
    hashcat: bool,
    popular: PopularSet,
}

impl Prettifier {
    #[must_use]
    pub fn new(
        output: &OutputSettings,
        accessible: bool,
        popular: PopularSet,
    ) -> Self {
        Self {
            accessible,
            john: output.john,
            hashcat: output.hashcat,
            popular,
        }
    }

    /// 人读文本渲染：常见格式列在 "Most Likely"，其余列在 "Least Likely"。
    /// 无障碍模式下省略 "Least Likely" 大块文本（对屏幕阅读器不友好）。
    #[must_use]
    pub fn pretty(
        &self,
        reports: &[IdentifyReport],
    ) -> String {
        let mut out = String::new();
        for report in reports {
            out.push_str(&report.input);
            out.push('\n');

            if let Some(err) = &report.error {
                out.push_str(&format!("输入无法处理: {err}\n\n"));
                continue;
            }
            if report.matches.is_empty() {
                out.push_str("没有任何已知格式接受该输入\n\n");
                continue;
            }

            let (likely, unlikely): (Vec<&FormatMatch>, Vec<&FormatMatch>) = report
                .matches
                .iter()
                .partition(|m| self.popular.contains(&m.name));

            if !likely.is_empty() {
                out.push_str("\nMost Likely\n");
                for m in &likely {
                    out.push_str(&self.render_match(m));
                    out.push('\n');
                }
            }

            if !unlikely.is_empty() && !self.accessible {
                out.push_str("\nLeast Likely\n");
                for m in &unlikely {
                    out.push_str(&self.render_match(m));
                    out.push('\n');
                }
            }

            out.push('\n');
        }
        out
    }

    /// 可 grep 的 JSON：整个批次一个数组，保持输入顺序与 index 对齐。
    ///
    /// # Errors
    ///
    /// 序列化失败时返回错误（正常数据不会发生）。
    pub fn greppable(
        &self,
        reports: &[IdentifyReport],
    ) -> Result<String> {
        let filtered: Vec<IdentifyReport> =
            reports.iter().map(|r| self.filter_report(r)).collect();
        Ok(serde_json::to_string_pretty(&filtered)?)
    }

    fn render_match(
        &self,
        m: &FormatMatch,
    ) -> String {
        let mut line = m.name.clone();
        if self.hashcat {
            if let Some(mode) = m.hashcat {
                line.push_str(&format!(", HC: {mode}"));
            }
        }
        if self.john {
            if let Some(john) = &m.john {
                line.push_str(&format!(" JtR: {john}"));
            }
        }
        if let Some(description) = &m.description {
            line.push_str(&format!(" Summary: {description}"));
        }
        line
    }

    fn filter_report(
        &self,
        report: &IdentifyReport,
    ) -> IdentifyReport {
        let matches = report
            .matches
            .iter()
            .map(|m| {
                let mut m = m.clone();
                if !self.john {
                    m.john = None;
                }
                if !self.hashcat {
                    m.hashcat = None;
                }
                m
            })
            .collect();
        IdentifyReport {
            input: report.input.clone(),
            matches,
            error: report.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> IdentifyReport {
        IdentifyReport {
            input: "5f4dcc3b5aa765d61d8327deb882cf99".to_string(),
            matches: vec![
                FormatMatch {
                    name: "MD5".to_string(),
                    hashcat: Some(0),
                    john: Some("raw-md5".to_string()),
                    extended: false,
                    description: None,
                },
                FormatMatch {
                    name: "Snefru-128".to_string(),
                    hashcat: None,
                    john: Some("snefru-128".to_string()),
                    extended: false,
                    description: None,
                },
            ],
            error: None,
        }
    }

    #[test]
    fn test_pretty_splits_likely_and_unlikely() {
        let prettifier =
            Prettifier::new(&OutputSettings::default(), false, PopularSet::default());
        let text = prettifier.pretty(&[sample_report()]);
        assert!(text.contains("Most Likely"));
        assert!(text.contains("Least Likely"));
        assert!(text.contains("MD5, HC: 0 JtR: raw-md5"));
        let most = text.find("Most Likely").unwrap();
        let least = text.find("Least Likely").unwrap();
        assert!(most < least);
    }

    #[test]
    fn test_accessible_mode_omits_unlikely_block() {
        let prettifier =
            Prettifier::new(&OutputSettings::default(), true, PopularSet::default());
        let text = prettifier.pretty(&[sample_report()]);
        assert!(text.contains("Most Likely"));
        assert!(!text.contains("Least Likely"));
    }

    #[test]
    fn test_greppable_preserves_order_and_filters_fields() {
        let settings = OutputSettings {
            john: false,
            hashcat: true,
        };
        let prettifier = Prettifier::new(&settings, false, PopularSet::default());
        let empty = IdentifyReport {
            input: "not_a_hash!!".to_string(),
            matches: Vec::new(),
            error: None,
        };
        let json = prettifier.greppable(&[sample_report(), empty]).unwrap();

        let parsed: Vec<IdentifyReport> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].input, "5f4dcc3b5aa765d61d8327deb882cf99");
        assert_eq!(parsed[1].input, "not_a_hash!!");
        assert!(parsed[1].matches.is_empty());
        assert!(parsed[0].matches.iter().all(|m| m.john.is_none()));
        assert_eq!(parsed[0].matches[0].hashcat, Some(0));
    }

    #[test]
    fn test_pretty_reports_per_input_error() {
        let prettifier =
            Prettifier::new(&OutputSettings::default(), false, PopularSet::default());
        let failed = IdentifyReport::failed("\u{fffd}".to_string(), "非法 UTF-8".to_string());
        let text = prettifier.pretty(&[failed]);
        assert!(text.contains("输入无法处理"));
    }
}
