/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 种子题库（TOML）
    pub bank_file: String,
    /// JSON 快照文件，未设置时使用内存题库
    pub data_file: Option<String>,
    /// 默认日志过滤规则（`RUST_LOG` 优先）
    pub log_filter: String,
    /// 是否逐题输出抽题过程
    pub verbose_logging: bool,
    /// 启动后试玩的分类，0 表示所有分类
    pub quiz_category: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bank_file: "data/trivia.toml".to_string(),
            data_file: None,
            log_filter: "info".to_string(),
            verbose_logging: false,
            quiz_category: 0,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            bank_file: std::env::var("TRIVIA_BANK_FILE").unwrap_or(default.bank_file),
            data_file: std::env::var("TRIVIA_DATA_FILE").ok().filter(|v| !v.is_empty()).or(default.data_file),
            log_filter: std::env::var("TRIVIA_LOG").unwrap_or(default.log_filter),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            quiz_category: std::env::var("TRIVIA_QUIZ_CATEGORY").ok().and_then(|v| v.parse().ok()).unwrap_or(default.quiz_category),
        }
    }
}
