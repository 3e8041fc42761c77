//! 日志工具模块
//!
//! 提供日志初始化和输出的辅助函数

use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，未设置时使用 `default_filter`。
/// 重复初始化（例如测试中）会被忽略。
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `bank_file`: 种子题库文件
/// - `data_file`: 快照文件（未配置时使用内存题库）
pub fn log_startup(bank_file: &str, data_file: Option<&str>) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 题库服务启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📚 种子题库: {}", bank_file);
    match data_file {
        Some(path) => info!("💾 快照文件: {}", path),
        None => info!("💾 使用内存题库"),
    }
    info!("{}", "=".repeat(60));
}

/// 记录一轮抽题的统计
///
/// # 参数
/// - `category`: 分类名称
/// - `asked`: 抽出的题目数量
pub fn log_quiz_complete(category: Option<&str>, asked: usize) {
    info!("\n{}", "─".repeat(60));
    info!(
        "✓ 抽题结束 [{}]: 共 {} 道题",
        category.unwrap_or("全部分类"),
        asked
    );
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
