//! # UFO 目录收集器
//!
//! 在目标目录下递归查找以 `.ufo` 结尾的目录。
//!
//! ## 功能
//! - 递归目录搜索（不进入符号链接，但指向目录的链接本身可作为候选）
//! - 按扩展名精确匹配（区分大小写）
//! - 保持遍历顺序，不排序
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs` 调用
//! - 使用 `walkdir` 遍历目录

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// UFO 源目录的扩展名
pub const UFO_EXTENSION: &str = "ufo";

/// UFO 目录收集器
pub struct UfoCollector {
    /// 搜索根目录
    root: PathBuf,
}

impl UfoCollector {
    /// 创建新的收集器
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 收集所有匹配的目录
    ///
    /// 根目录本身不计入结果；匹配目录内部仍会继续遍历。
    /// 指向目录的符号链接计入结果，但不会进入其内部遍历。
    /// 无法读取的条目记录警告后跳过。
    pub fn collect(&self) -> Vec<PathBuf> {
        if !self.root.is_dir() {
            return vec![];
        }

        let found: Vec<PathBuf> = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(e) => Some(e),
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    None
                }
            })
            .filter(|e| {
                // 链接本身不被进入，仅检查其目标是否为目录
                e.file_type().is_dir() || (e.path_is_symlink() && e.path().is_dir())
            })
            .filter(|e| Self::matches(e.path()))
            .map(|e| e.into_path())
            .collect();

        debug!(root = %self.root.display(), count = found.len(), "collected UFO directories");
        found
    }

    /// 检查目录名是否以 `.ufo` 结尾
    fn matches(path: &Path) -> bool {
        path.extension() == Some(OsStr::new(UFO_EXTENSION))
    }
}
