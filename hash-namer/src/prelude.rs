//! Prelude 模块 - 一次性导入所有常用类型
//!
//! ```rust
//! use hash_namer::prelude::*;
//! ```

// 识别器门面
pub use crate::HashNamer;

// 配置
pub use crate::config::{AppConfig, NamerSettings, OutputSettings};

// 原型库与匹配规则
pub use crate::database::{Prototype, PrototypeDatabase};
pub use crate::matcher::MatchRule;
pub use crate::prototypes::{FormatInfo, PrototypeEntry, PROTOTYPE_TABLE};

// 排序
pub use crate::ranker::{rank, PopularSet, DEFAULT_POPULAR};

// 识别结果
pub use crate::types::{FormatMatch, IdentifyReport};

// 展示层
pub use crate::output::Prettifier;

// 便捷入口
pub use crate::{api_return_matches_as_json, identify_and_rank, identify_and_rank_batch};

// 错误处理
pub use anyhow::{Context, Result};
