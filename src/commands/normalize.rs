//! # normalize 命令实现
//!
//! 递归查找 UFO 目录并逐个调用外部工具规范化。
//!
//! ## 功能
//! - 校验目标目录
//! - 收集 `.ufo` 目录
//! - 串行调用 `ufonormalizer`
//! - 打印逐项结果与汇总
//!
//! ## 依赖关系
//! - 使用 `config.rs` 的 `RunConfig`
//! - 使用 `batch/` 模块收集与执行
//! - 使用 `utils/output.rs`

use crate::batch::{BatchResult, BatchRunner, Normalizer, ProcessResult, UfoCollector};
use crate::config::RunConfig;
use crate::error::{NormalizeError, Result};
use crate::utils::output;

use std::path::{Path, PathBuf};
use tracing::info;

/// 失败列表最多打印的条目数
const MAX_LISTED_FAILURES: usize = 10;

/// 执行 normalize 命令
///
/// 目标目录无效时返回错误，此时不会进行任何搜索。
pub fn execute(config: &RunConfig) -> Result<BatchResult> {
    let root = resolve_root(&config.root)?;

    output::print_header("UFO Normalization");
    output::print_info(&format!("Normalizing UFO files in: {}", root.display()));
    output::print_separator();

    let dirs = UfoCollector::new(&root).collect();

    if dirs.is_empty() {
        output::print_warning("No UFO files found.");
        let result = BatchResult::new(0);
        print_summary(&result);
        return Ok(result);
    }

    info!(count = dirs.len(), tool = %config.tool, "starting normalization");

    let normalizer = Normalizer::new(config.tool.as_str());
    let runner = BatchRunner::new("Normalizing");
    let result = runner.run(dirs, |dir| process_one(&normalizer, dir, config.verbose));

    output::print_separator();
    output::print_done("Normalization complete!");
    print_summary(&result);
    print_failures(&result);

    Ok(result)
}

/// 校验并解析目标目录
fn resolve_root(root: &Path) -> Result<PathBuf> {
    if !root.exists() {
        return Err(NormalizeError::DirectoryNotFound {
            path: root.display().to_string(),
        });
    }

    if !root.is_dir() {
        return Err(NormalizeError::NotADirectory {
            path: root.display().to_string(),
        });
    }

    root.canonicalize()
        .map_err(|e| NormalizeError::Canonicalize {
            path: root.display().to_string(),
            source: e,
        })
}

/// 处理单个 UFO 目录并打印结果
fn process_one(normalizer: &Normalizer, dir: &Path, verbose: bool) -> ProcessResult {
    output::print_info(&format!("Processing: {}", dir.display()));

    let result = match normalizer.normalize(dir) {
        Ok(out) => {
            output::print_success(&format!("Successfully normalized: {}", dir.display()));
            if !out.stdout.is_empty() {
                output::print_detail("Output", &out.stdout);
            }
            if verbose && !out.stderr.is_empty() {
                output::print_detail("Warnings", &out.stderr);
            }
            ProcessResult::Success
        }
        Err(NormalizeError::CommandFailed { stderr, .. }) => {
            output::print_failure(&format!("Failed to normalize: {}", dir.display()));
            output::print_detail("Error", &stderr);
            ProcessResult::Failed(stderr)
        }
        Err(NormalizeError::CommandNotFound { command }) => {
            output::print_error(&format!("{} command not found", command));
            output::print_error(&format!(
                "Please ensure {} is installed and in your PATH",
                command
            ));
            return ProcessResult::Abort(format!("{} command not found", command));
        }
        Err(e) => {
            let reason = match std::error::Error::source(&e) {
                Some(source) => format!("{}: {}", e, source),
                None => e.to_string(),
            };
            output::print_failure(&format!(
                "Unexpected error processing {}: {}",
                dir.display(),
                reason
            ));
            ProcessResult::Failed(reason)
        }
    };

    output::print_sub_separator();
    result
}

/// 打印汇总行
fn print_summary(result: &BatchResult) {
    output::print_done(&format!(
        "Successfully processed: {}/{} UFO files",
        result.success, result.total
    ));

    if let Some(reason) = &result.aborted {
        output::print_warning(&format!(
            "Stopped early ({}); {} of {} directories were attempted",
            reason,
            result.attempted(),
            result.total
        ));
    }
}

/// 打印失败列表
fn print_failures(result: &BatchResult) {
    if result.failures.is_empty() {
        return;
    }

    output::print_warning("Failed directories:");
    for (path, err) in result.failures.iter().take(MAX_LISTED_FAILURES) {
        let first_line = err.lines().next().unwrap_or_default();
        output::print_failure(&format!("  {}: {}", path, first_line));
    }
    if result.failures.len() > MAX_LISTED_FAILURES {
        output::print_warning(&format!(
            "  ... and {} more",
            result.failures.len() - MAX_LISTED_FAILURES
        ));
    }
}
