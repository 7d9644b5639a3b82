//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 参数
//! - `directory`: 搜索根目录（默认当前目录）
//! - `-v/--verbose`: 详细输出
//! - `--tool`: 外部规范化工具（亦可由 `UFO_NORMALIZER` 环境变量指定）
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 转换为 `config::RunConfig` 后交给 `commands/`

use crate::batch::normalizer::DEFAULT_TOOL;

use clap::Parser;
use std::path::PathBuf;

/// normalize-ufo - 递归规范化 UFO 字体源
#[derive(Parser, Debug)]
#[command(name = "normalize-ufo")]
#[command(version)]
#[command(about = "Normalize all UFO files recursively in a directory", long_about = None)]
#[command(after_help = "Examples:
  normalize-ufo                    # Process current directory
  normalize-ufo /path/to/fonts     # Process specific directory
  normalize-ufo .                  # Process current directory explicitly")]
pub struct Cli {
    /// Directory to search for UFO files
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Show verbose output from ufonormalizer
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Normalizer executable to invoke on each UFO directory
    #[arg(long, env = "UFO_NORMALIZER", default_value = DEFAULT_TOOL)]
    pub tool: String,
}
