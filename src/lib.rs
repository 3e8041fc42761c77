//! # Trivia Quiz
//!
//! 分类题库的查询与抽题服务
//!
//! ## 架构设计
//!
//! ### ① 存储层（Store）
//! - `store/` - 题库接口 `QuestionStore` 及其实现，按ID排序返回结果
//! - `MemoryStore` - 进程内题库
//! - `JsonFileStore` - 每次写入后落盘为 JSON 快照
//!
//! ### ② 业务能力层（Services）
//! - `pagination` - 固定每页 10 条的分页
//! - `category_index` - 分类ID → 分类名称
//! - `question_query` - 列表、搜索、按分类查询、新增、删除
//! - `quiz_draw` - 不重复的随机抽题
//!
//! ### ③ 调用约定层（Api）
//! - `api/` - 请求体校验、路由分发、JSON 响应与错误码
//!
//! ### ④ 应用外壳
//! - `app` - 打开题库、写入种子、试运行
//!
//! 题库句柄由调用方显式传入每个操作，核心层不保存请求之间的状态。

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

// 重新导出常用类型
pub use api::{Api, Method, Request, Response};
pub use app::{App, RunStats};
pub use config::Config;
pub use error::{AppError, AppResult, StoreError, StoreResult};
pub use models::{Category, NewQuestion, Question};
pub use store::{JsonFileStore, MemoryStore, QuestionStore};
