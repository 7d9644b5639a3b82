//! # 批量执行器
//!
//! 按发现顺序逐个处理 UFO 目录，并汇总结果。
//!
//! ## 功能
//! - 严格串行：同一时刻只运行一个外部进程
//! - 进度条显示（处理期间暂停绘制，避免与输出交错）
//! - 遇到 `Abort` 时终止剩余条目
//! - 汇总统计与退出码映射
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `exit_codes.rs` 映射最终退出码

use crate::exit_codes;
use crate::utils::progress;

use std::path::PathBuf;
use tracing::warn;

/// 单个目录处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// 处理成功
    Success,
    /// 处理失败，继续下一个
    Failed(String), // 错误信息
    /// 处理失败且后续条目无法继续（如外部工具缺失）
    Abort(String),
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 失败数量（不含中止的条目）
    pub failed: usize,
    /// 候选目录总数
    pub total: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
    /// 中止原因
    pub aborted: Option<String>,
}

impl BatchResult {
    /// 创建空结果
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    /// 合并处理结果
    pub fn merge(&mut self, path: &str, result: ProcessResult) {
        match result {
            ProcessResult::Success => self.success += 1,
            ProcessResult::Failed(err) => {
                self.failed += 1;
                self.failures.push((path.to_string(), err));
            }
            ProcessResult::Abort(reason) => self.aborted = Some(reason),
        }
    }

    /// 实际调用了外部工具的数量
    pub fn attempted(&self) -> usize {
        self.success + self.failed
    }

    /// 映射为进程退出码
    pub fn exit_code(&self) -> i32 {
        if self.success == self.total {
            exit_codes::OK
        } else if self.success > 0 {
            exit_codes::PARTIAL
        } else {
            exit_codes::FAILED
        }
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 进度条消息
    message: String,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    /// 串行处理目录列表
    ///
    /// `processor` 在进度条暂停期间执行，可以直接打印输出。
    pub fn run<F>(&self, dirs: Vec<PathBuf>, mut processor: F) -> BatchResult
    where
        F: FnMut(&PathBuf) -> ProcessResult,
    {
        let total = dirs.len();
        let pb = progress::create_progress_bar(total as u64, &self.message);
        let mut batch_result = BatchResult::new(total);

        for dir in &dirs {
            let result = pb.suspend(|| processor(dir));
            let stop = matches!(result, ProcessResult::Abort(_));

            batch_result.merge(&dir.display().to_string(), result);
            pb.inc(1);

            if stop {
                warn!(
                    remaining = total - batch_result.attempted() - 1,
                    "aborting remaining directories"
                );
                break;
            }
        }

        pb.finish_and_clear();
        batch_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dirs(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_empty_run_is_ok() {
        let result = BatchRunner::new("test").run(vec![], |_| ProcessResult::Success);
        assert_eq!(result.success, 0);
        assert_eq!(result.total, 0);
        assert_eq!(result.exit_code(), exit_codes::OK);
    }

    #[test]
    fn test_all_success() {
        let result = BatchRunner::new("test").run(dirs(&["a.ufo", "b.ufo", "c.ufo"]), |_| {
            ProcessResult::Success
        });
        assert_eq!(result.success, 3);
        assert_eq!(result.total, 3);
        assert_eq!(result.exit_code(), exit_codes::OK);
    }

    #[test]
    fn test_partial_success() {
        let result = BatchRunner::new("test").run(dirs(&["A.ufo", "B.ufo", "sub/C.ufo"]), |p| {
            if p.ends_with("B.ufo") {
                ProcessResult::Failed("bad glyph".to_string())
            } else {
                ProcessResult::Success
            }
        });
        assert_eq!(result.success, 2);
        assert_eq!(result.failed, 1);
        assert_eq!(result.total, 3);
        assert_eq!(
            result.failures,
            vec![("B.ufo".to_string(), "bad glyph".to_string())]
        );
        assert_eq!(result.exit_code(), exit_codes::PARTIAL);
    }

    #[test]
    fn test_all_failed() {
        let result = BatchRunner::new("test").run(dirs(&["a.ufo", "b.ufo"]), |_| {
            ProcessResult::Failed("boom".to_string())
        });
        assert_eq!(result.success, 0);
        assert_eq!(result.failed, 2);
        assert_eq!(result.exit_code(), exit_codes::FAILED);
    }

    #[test]
    fn test_abort_stops_iteration() {
        let mut seen = Vec::new();
        let result = BatchRunner::new("test").run(dirs(&["a.ufo", "b.ufo", "c.ufo", "d.ufo"]), |p| {
            seen.push(p.clone());
            if p.ends_with("b.ufo") {
                ProcessResult::Abort("tool missing".to_string())
            } else {
                ProcessResult::Success
            }
        });

        assert_eq!(seen, dirs(&["a.ufo", "b.ufo"]));
        assert_eq!(result.success, 1);
        assert_eq!(result.attempted(), 1);
        assert_eq!(result.total, 4);
        assert_eq!(result.aborted.as_deref(), Some("tool missing"));
        assert_eq!(result.exit_code(), exit_codes::PARTIAL);
    }

    #[test]
    fn test_abort_on_first_is_complete_failure() {
        let mut calls = 0;
        let result = BatchRunner::new("test").run(dirs(&["a.ufo", "b.ufo"]), |_| {
            calls += 1;
            ProcessResult::Abort("tool missing".to_string())
        });
        assert_eq!(calls, 1);
        assert_eq!(result.success, 0);
        assert_eq!(result.exit_code(), exit_codes::FAILED);
    }

    #[test]
    fn test_processes_in_given_order() {
        let mut seen = Vec::new();
        let input = dirs(&["z.ufo", "a.ufo", "m.ufo"]);
        BatchRunner::new("test").run(input.clone(), |p| {
            seen.push(p.clone());
            ProcessResult::Success
        });
        assert_eq!(seen, input);
    }
}
