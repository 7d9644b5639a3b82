//! # 诊断日志
//!
//! 基于 `tracing` 的诊断输出，与终端报告分离：
//! - 终端报告（`utils/output.rs`）：stdout，始终输出
//! - 诊断日志（本模块）：stderr，由 `RUST_LOG` 过滤
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `tracing-subscriber`

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化 tracing subscriber
///
/// 优先读取 `RUST_LOG`；未设置时 `--verbose` 为 `debug`，否则为 `warn`。
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}
