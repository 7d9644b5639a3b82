//! # 进程退出码
//!
//! 供脚本与 CI 判断运行结果的稳定退出码。
//!
//! ## 依赖关系
//! - 被 `main.rs`、`batch/runner.rs` 使用

/// 全部成功，或未找到任何 UFO 目录
pub const OK: i32 = 0;
/// 部分成功
pub const PARTIAL: i32 = 1;
/// 目标目录不存在或不是目录
pub const INVALID: i32 = 1;
/// 找到了 UFO 目录但全部失败
pub const FAILED: i32 = 2;
