//! # normalize-ufo - 递归规范化 UFO 字体源
//!
//! 在目标目录下递归查找 `.ufo` 目录，逐个调用外部工具
//! `ufonormalizer` 进行规范化，并以退出码报告整体结果。
//!
//! ## 退出码
//! - `0` - 全部成功（含未找到任何 UFO 的情况）
//! - `1` - 目标目录无效，或部分成功
//! - `2` - 找到了 UFO 但全部失败
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── config.rs   (运行配置)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── batch/     (收集、调用外部工具、串行执行)
//!   ├── utils/      (输出与进度条)
//!   ├── logging.rs  (诊断日志)
//!   ├── exit_codes.rs
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod config;
mod error;
mod exit_codes;
mod logging;
mod utils;

use clap::Parser;
use cli::Cli;
use config::RunConfig;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let code = match RunConfig::from_cli(cli).and_then(|config| commands::run(&config)) {
        Ok(code) => code,
        Err(e) => {
            utils::output::print_error(&format!("Error: {}", e));
            exit_codes::INVALID
        }
    };

    std::process::exit(code);
}
