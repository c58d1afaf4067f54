// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 过滤器: RUST_LOG 环境变量，缺省 info
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 人类可读的单行文本
    #[default]
    Text,
    /// JSON 行（含当前 span 字段，如 year / language）
    Json,
}

fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// 初始化日志系统（文本格式）
///
/// # 环境变量
/// - RUST_LOG: 例如 RUST_LOG=missal_kalendar::engine=debug 查看逐日裁决
///
/// # 示例
/// ```no_run
/// use missal_kalendar::logging;
/// logging::init();
/// ```
pub fn init() {
    init_with(LogFormat::Text);
}

/// 按指定格式初始化；重复调用时保留首次安装的订阅者
pub fn init_with(format: LogFormat) {
    let result = match format {
        LogFormat::Text => fmt()
            .with_env_filter(filter("info"))
            .with_target(true)
            .with_line_number(true)
            .try_init(),
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(filter("info"))
            .with_current_span(true)
            .try_init(),
    };
    if result.is_err() {
        tracing::debug!("日志订阅者已存在，跳过初始化");
    }
}

/// 初始化测试环境的日志系统（debug 级别，输出到测试捕获）
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
