//! # 外部规范化工具调用
//!
//! 对单个 UFO 目录执行 `ufonormalizer <path>`，同步等待结束，
//! 以退出状态判断成败。
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs` 调用
//! - 使用 `error.rs` 区分"工具缺失"与其他失败

use crate::error::{NormalizeError, Result};

use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, instrument};

/// 默认的外部工具名称
pub const DEFAULT_TOOL: &str = "ufonormalizer";

/// 外部工具成功运行时捕获的输出
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

/// 外部规范化工具
#[derive(Debug, Clone)]
pub struct Normalizer {
    /// 可执行文件名称或路径
    program: String,
}

impl Normalizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// 规范化一个 UFO 目录
    ///
    /// - 退出码 0: 返回捕获的 stdout/stderr
    /// - 找不到可执行文件: `CommandNotFound`
    /// - 退出码非 0: `CommandFailed`，携带 stderr（为空时为退出状态描述）
    /// - 其他启动/等待错误: `Spawn`
    #[instrument(skip(self), fields(tool = %self.program))]
    pub fn normalize(&self, ufo: &Path) -> Result<ToolOutput> {
        debug!(path = %ufo.display(), "running normalizer");

        let output = Command::new(&self.program)
            .arg(ufo)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => NormalizeError::CommandNotFound {
                    command: self.program.clone(),
                },
                _ => NormalizeError::Spawn {
                    command: self.program.clone(),
                    source: e,
                },
            })?;

        debug!(status = %output.status, "normalizer finished");

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if output.status.success() {
            Ok(ToolOutput { stdout, stderr })
        } else {
            let stderr = if stderr.is_empty() {
                format!("'{} {}' {}", self.program, ufo.display(), output.status)
            } else {
                stderr
            };
            Err(NormalizeError::CommandFailed {
                command: format!("{} {}", self.program, ufo.display()),
                stderr,
            })
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_zero_exit_is_success() {
        let dir = tempfile::tempdir().unwrap();
        let out = Normalizer::new("true").normalize(dir.path()).unwrap();
        assert!(out.stdout.is_empty());
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn test_stdout_is_captured_and_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        // `echo <path>` 回显唯一的参数
        let out = Normalizer::new("echo").normalize(dir.path()).unwrap();
        assert_eq!(out.stdout, dir.path().display().to_string());
    }

    #[test]
    fn test_nonzero_exit_without_stderr() {
        let dir = tempfile::tempdir().unwrap();
        match Normalizer::new("false").normalize(dir.path()) {
            Err(NormalizeError::CommandFailed { command, stderr }) => {
                assert!(command.starts_with("false "));
                assert!(stderr.contains("exit status"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_nonzero_exit_with_stderr() {
        let dir = tempfile::tempdir().unwrap();
        // `ls` 对不存在的路径报错并返回非 0
        let missing = dir.path().join("missing.ufo");
        match Normalizer::new("ls").normalize(&missing) {
            Err(NormalizeError::CommandFailed { stderr, .. }) => {
                assert!(stderr.contains("missing.ufo"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_missing_tool() {
        let dir = tempfile::tempdir().unwrap();
        let result = Normalizer::new("definitely-not-a-real-ufonormalizer").normalize(dir.path());
        assert!(matches!(result, Err(NormalizeError::CommandNotFound { .. })));
    }

    #[test]
    fn test_non_executable_is_unexpected_error() {
        let dir = tempfile::tempdir().unwrap();
        // 目录不可执行，启动时报 PermissionDenied 而非 NotFound
        let result = Normalizer::new(dir.path().display().to_string()).normalize(dir.path());
        assert!(matches!(result, Err(NormalizeError::Spawn { .. })));
    }

    #[test]
    fn test_default_tool_name() {
        assert_eq!(Normalizer::default().program, DEFAULT_TOOL);
    }
}
