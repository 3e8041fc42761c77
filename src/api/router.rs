//! 请求分发
//!
//! | 方法 | 路径 | 操作 |
//! |------|------|------|
//! | GET | `/categories` | 分类列表 |
//! | GET | `/questions?page=N` | 全部题目 |
//! | POST | `/questions` | 搜索（带 `searchTerm`）或新增 |
//! | DELETE | `/questions/<id>` | 删除题目 |
//! | GET | `/categories/<id>/questions?page=N` | 分类下的题目 |
//! | POST | `/quizzes` | 抽题 |
//!
//! 路径存在但方法不对时返回 405，路径不存在时返回 404。

use super::request::{parse_body, QuestionsAction, QuestionsBody, QuizBody};
use super::response::{
    CategoriesResponse, CategoryQuestionsResponse, CreatedResponse, DeletedResponse,
    ErrorResponse, QuestionsResponse, QuizResponse, SearchResponse,
};
use crate::error::{AppError, AppResult};
use crate::services::{
    create_question, delete_question, draw_question, list_categories, list_questions,
    parse_page, questions_in_category, search_questions, CategoryScope,
};
use crate::store::QuestionStore;
use anyhow::Result;
use regex::Regex;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// 请求方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 已解析的请求
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub path: String,
    /// 查询参数 `page` 的原始值
    pub page: Option<String>,
    pub body: Option<JsonValue>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            page: None,
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>, body: JsonValue) -> Self {
        Self::new(Method::Post, path).with_body(body)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn with_body(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }
}

/// 响应：状态码 + JSON 响应体
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: JsonValue,
}

impl Response {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Categories,
    Questions,
    Question(i64),
    CategoryQuestions(i64),
    Quizzes,
}

/// 请求分发器
///
/// 持有题库句柄，本身不保存任何请求之间的状态。
pub struct Api {
    store: Arc<dyn QuestionStore>,
    question_path: Regex,
    category_questions_path: Regex,
}

impl Api {
    pub fn new(store: Arc<dyn QuestionStore>) -> Result<Self> {
        Ok(Self {
            store,
            question_path: Regex::new(r"^/questions/(\d+)$")?,
            category_questions_path: Regex::new(r"^/categories/(\d+)/questions$")?,
        })
    }

    pub fn store(&self) -> &dyn QuestionStore {
        self.store.as_ref()
    }

    /// 处理一个请求，所有错误都渲染为错误响应
    pub fn handle(&self, request: &Request) -> Response {
        debug!("{} {} page={:?}", request.method, request.path, request.page);

        match self.dispatch(request) {
            Ok(body) => Response { status: 200, body },
            Err(err) => {
                let status = err.status_code();
                if status >= 500 {
                    error!("[{} {}] {}: {:?}", request.method, request.path, status, err);
                } else {
                    warn!("[{} {}] {}: {}", request.method, request.path, status, err);
                }
                Response {
                    status,
                    body: serde_json::to_value(ErrorResponse::from(&err))
                        .unwrap_or(JsonValue::Null),
                }
            }
        }
    }

    fn dispatch(&self, request: &Request) -> AppResult<JsonValue> {
        let route = self
            .route(&request.path)
            .ok_or_else(|| AppError::not_found(format!("未知路径: {}", request.path)))?;
        let page = parse_page(request.page.as_deref());
        let store = self.store();

        match (route, request.method) {
            (Route::Categories, Method::Get) => {
                to_json(CategoriesResponse::from(list_categories(store)?))
            }
            (Route::Questions, Method::Get) => {
                to_json(QuestionsResponse::from(list_questions(store, page)?))
            }
            (Route::Questions, Method::Post) => {
                let body: QuestionsBody = parse_body(request.body.as_ref())?;
                match body.into_action() {
                    QuestionsAction::Search(term) => {
                        to_json(SearchResponse::from(search_questions(store, &term, page)?))
                    }
                    QuestionsAction::Create(new_question) => {
                        to_json(CreatedResponse::from(create_question(store, new_question)?))
                    }
                }
            }
            (Route::Question(id), Method::Delete) => {
                to_json(DeletedResponse::from(delete_question(store, id)?))
            }
            (Route::CategoryQuestions(id), Method::Get) => to_json(
                CategoryQuestionsResponse::from(questions_in_category(store, id, page)?),
            ),
            (Route::Quizzes, Method::Post) => {
                let body: QuizBody = parse_body(request.body.as_ref())?;
                to_json(self.play_quiz(body)?)
            }
            _ => Err(AppError::method_not_allowed(
                request.method.as_str(),
                request.path.as_str(),
            )),
        }
    }

    fn play_quiz(&self, body: QuizBody) -> AppResult<QuizResponse> {
        let store = self.store();
        let scope = CategoryScope::from_id(body.quiz_category.id.0);
        let outcome = draw_question(
            store,
            scope,
            &body.previous_questions,
            &mut rand::thread_rng(),
        )?;

        // 请求中没有分类名称时从题库补全
        let current_category = match (body.quiz_category.label, scope) {
            (Some(label), _) => Some(label),
            (None, CategoryScope::Only(id)) => store
                .find_category(id)
                .map_err(|e| AppError::store_unprocessable("读取分类失败", e))?
                .map(|c| c.label),
            (None, CategoryScope::All) => None,
        };

        Ok(QuizResponse {
            success: true,
            question: outcome.into_question(),
            current_category,
        })
    }

    fn route(&self, path: &str) -> Option<Route> {
        match path {
            "/categories" => return Some(Route::Categories),
            "/questions" => return Some(Route::Questions),
            "/quizzes" => return Some(Route::Quizzes),
            _ => {}
        }

        if let Some(caps) = self.question_path.captures(path) {
            return caps[1].parse().ok().map(Route::Question);
        }
        if let Some(caps) = self.category_questions_path.captures(path) {
            return caps[1].parse().ok().map(Route::CategoryQuestions);
        }
        None
    }
}

fn to_json<T: Serialize>(payload: T) -> AppResult<JsonValue> {
    serde_json::to_value(payload).map_err(|e| AppError::internal(format!("序列化响应失败: {}", e)))
}
