//! # 运行配置
//!
//! 由命令行参数（含环境变量）生成的一次运行的完整配置。
//!
//! ## 依赖关系
//! - 由 `cli::Cli` 转换而来
//! - 被 `commands/normalize.rs` 使用

use crate::cli::Cli;
use crate::error::{NormalizeError, Result};

use std::path::PathBuf;

/// 一次运行的配置
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// 搜索根目录（未解析，保持用户输入）
    pub root: PathBuf,
    /// 外部规范化工具
    pub tool: String,
    /// 详细输出
    pub verbose: bool,
}

impl RunConfig {
    /// 从命令行参数构建配置
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let tool = cli.tool.trim().to_string();
        if tool.is_empty() {
            return Err(NormalizeError::Other(
                "Normalizer tool name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            root: cli.directory,
            tool,
            verbose: cli.verbose,
        })
    }
}
