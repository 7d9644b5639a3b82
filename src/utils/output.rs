//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印单个条目失败消息（stdout，与进度行保持顺序）
pub fn print_failure(msg: &str) {
    println!("{} {}", "[FAIL]".red().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印缩进的附加内容（外部工具输出等），多行文本逐行缩进
pub fn print_detail(label: &str, text: &str) {
    let mut lines = text.lines();
    if let Some(first) = lines.next() {
        println!("    {} {}", format!("{}:", label).dimmed(), first);
    }
    for line in lines {
        println!("    {}", line);
    }
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// 打印条目之间的短分隔线
pub fn print_sub_separator() {
    println!("{}", "-".repeat(30).dimmed());
}
