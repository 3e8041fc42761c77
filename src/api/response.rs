//! 响应体定义
//!
//! 成功响应都带 `"success": true`，错误响应为
//! `{"success": false, "error": <状态码>, "message": <信息>}`。

use crate::error::AppError;
use crate::models::Question;
use crate::services::{
    CategoryIndex, CategoryQuestions, Created, Deleted, QuestionListing, QuestionPage,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryIndex,
    pub total_categories: usize,
}

impl From<CategoryIndex> for CategoriesResponse {
    fn from(categories: CategoryIndex) -> Self {
        Self {
            success: true,
            total_categories: categories.len(),
            categories,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryIndex,
    /// 全部题目列表不属于任何分类，始终为 null
    pub current_category: Option<String>,
}

impl From<QuestionListing> for QuestionsResponse {
    fn from(listing: QuestionListing) -> Self {
        Self {
            success: true,
            questions: listing.page.questions,
            total_questions: listing.page.total_questions,
            categories: listing.categories,
            current_category: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

impl From<QuestionPage> for SearchResponse {
    fn from(page: QuestionPage) -> Self {
        Self {
            success: true,
            questions: page.questions,
            total_questions: page.total_questions,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

impl From<Created> for CreatedResponse {
    fn from(created: Created) -> Self {
        Self {
            success: true,
            created: created.created,
            questions: created.page.questions,
            total_questions: created.page.total_questions,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

impl From<Deleted> for DeletedResponse {
    fn from(deleted: Deleted) -> Self {
        Self {
            success: true,
            deleted: deleted.deleted,
            questions: deleted.page.questions,
            total_questions: deleted.page.total_questions,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

impl From<CategoryQuestions> for CategoryQuestionsResponse {
    fn from(result: CategoryQuestions) -> Self {
        Self {
            success: true,
            questions: result.page.questions,
            total_questions: result.page.total_questions,
            current_category: result.current_category,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    /// 题目已抽完时为 null
    pub question: Option<Question>,
    pub current_category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            success: false,
            error: err.status_code(),
            message: err.message(),
        }
    }
}
