//! # 统一错误处理模块
//!
//! 定义 normalize-ufo 的所有错误类型，使用 `thiserror` 派生。
//!
//! 只有"调用无效"类错误会向上传播到 `main`；单个 UFO 的处理失败
//! 会被记录为 `batch::runner::ProcessResult`，不会中断整个批次。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// normalize-ufo 统一错误类型
#[derive(Error, Debug)]
pub enum NormalizeError {
    // ─────────────────────────────────────────────────────────────
    // 目标目录错误
    // ─────────────────────────────────────────────────────────────
    #[error("Directory '{path}' does not exist")]
    DirectoryNotFound { path: String },

    #[error("'{path}' is not a directory")]
    NotADirectory { path: String },

    #[error("Failed to resolve path: {path}")]
    Canonicalize {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Failed to run '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, NormalizeError>;
