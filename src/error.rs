use thiserror::Error;

/// 应用程序错误类型
///
/// 与外部调用方约定的四种错误，每种一一对应一个 HTTP 状态码。
/// 题库的原始错误永远不会直接返回给调用方，必须先归类为其中之一。
#[derive(Debug, Error)]
pub enum AppError {
    /// 资源不存在 (404)
    #[error("资源不存在: {reason}")]
    NotFound { reason: String },
    /// 方法不允许 (405)
    #[error("方法不允许: {method} {path}")]
    MethodNotAllowed { method: String, path: String },
    /// 无法处理的请求 (422)
    #[error("无法处理的请求: {reason}")]
    Unprocessable {
        reason: String,
        #[source]
        source: Option<StoreError>,
    },
    /// 内部错误 (500)
    #[error("内部错误: {reason}")]
    Internal {
        reason: String,
        #[source]
        source: Option<StoreError>,
    },
}

/// 题库存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    /// 写入违反约束（缺少字段、难度越界等）
    #[error("违反约束: {reason}")]
    Constraint { reason: String },
    /// 主键重复
    #[error("主键重复: {collection} #{id}")]
    Duplicate { collection: &'static str, id: i64 },
    /// 快照文件读写失败
    #[error("快照读写失败 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 快照序列化失败
    #[error("快照序列化失败: {0}")]
    Serialization(#[from] serde_json::Error),
    /// 存储不可用
    #[error("存储不可用: {reason}")]
    Unavailable { reason: String },
}

impl AppError {
    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::NotFound { .. } => 404,
            AppError::MethodNotAllowed { .. } => 405,
            AppError::Unprocessable { .. } => 422,
            AppError::Internal { .. } => 500,
        }
    }

    /// 返回给调用方的固定错误信息
    pub fn message(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "Not found",
            AppError::MethodNotAllowed { .. } => "Method not allowed",
            AppError::Unprocessable { .. } => "Unprocessable",
            AppError::Internal { .. } => "Internal server error",
        }
    }

    // ========== 便捷构造函数 ==========

    pub fn not_found(reason: impl Into<String>) -> Self {
        AppError::NotFound {
            reason: reason.into(),
        }
    }

    pub fn method_not_allowed(method: impl Into<String>, path: impl Into<String>) -> Self {
        AppError::MethodNotAllowed {
            method: method.into(),
            path: path.into(),
        }
    }

    /// 请求体格式错误等与存储无关的 422
    pub fn unprocessable(reason: impl Into<String>) -> Self {
        AppError::Unprocessable {
            reason: reason.into(),
            source: None,
        }
    }

    /// 存储交互失败时使用的 422
    pub fn store_unprocessable(reason: impl Into<String>, source: StoreError) -> Self {
        AppError::Unprocessable {
            reason: reason.into(),
            source: Some(source),
        }
    }

    pub fn internal(reason: impl Into<String>) -> Self {
        AppError::Internal {
            reason: reason.into(),
            source: None,
        }
    }

    pub fn store_internal(reason: impl Into<String>, source: StoreError) -> Self {
        AppError::Internal {
            reason: reason.into(),
            source: Some(source),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

/// 存储层结果类型
pub type StoreResult<T> = Result<T, StoreError>;
