//! # 命令执行模块
//!
//! 实现命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `config.rs`, `batch/`, `utils/`
//! - 子模块: normalize

pub mod normalize;

use crate::config::RunConfig;
use crate::error::Result;

/// 执行命令，返回进程退出码
pub fn run(config: &RunConfig) -> Result<i32> {
    let result = normalize::execute(config)?;
    Ok(result.exit_code())
}
