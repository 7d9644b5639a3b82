//! # 批量处理模块
//!
//! 查找 UFO 目录并逐个交给外部工具规范化。
//!
//! ## 功能
//! - 递归收集候选目录
//! - 调用外部 `ufonormalizer`
//! - 串行执行与结果统计
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs` 使用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod normalizer;
pub mod runner;

pub use collector::UfoCollector;
pub use normalizer::Normalizer;
pub use runner::{BatchResult, BatchRunner, ProcessResult};
