//! 题目查询服务 - 业务能力层
//!
//! 列表、搜索、按分类查询、新增、删除。
//! 所有结果都带有未分页的匹配总数，而不是当前页的条数。

use crate::error::{AppError, AppResult};
use crate::models::{NewQuestion, Question};
use crate::services::category_index::{bundled_categories, CategoryIndex};
use crate::services::pagination::paginate;
use crate::store::QuestionStore;
use tracing::{debug, info};

/// 一页题目及匹配总数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

impl QuestionPage {
    fn from_matches(matches: &[Question], page: i64) -> Self {
        Self {
            questions: paginate(matches, page).to_vec(),
            total_questions: matches.len(),
        }
    }
}

/// 全部题目列表，附带分类索引
#[derive(Debug, Clone)]
pub struct QuestionListing {
    pub page: QuestionPage,
    pub categories: CategoryIndex,
}

/// 某个分类下的题目
#[derive(Debug, Clone)]
pub struct CategoryQuestions {
    pub page: QuestionPage,
    pub current_category: String,
}

/// 新增后的结果
#[derive(Debug, Clone)]
pub struct Created {
    pub created: i64,
    pub page: QuestionPage,
}

/// 删除后的结果
#[derive(Debug, Clone)]
pub struct Deleted {
    pub deleted: i64,
    pub page: QuestionPage,
}

/// 全部题目（按ID排序）
///
/// 当前页为空时返回 404，包括页码超出范围的情况。
pub fn list_questions(store: &dyn QuestionStore, page: i64) -> AppResult<QuestionListing> {
    let all = store
        .list_questions()
        .map_err(|e| AppError::store_internal("读取题目失败", e))?;
    let categories = bundled_categories(store)?;

    let page_data = QuestionPage::from_matches(&all, page);
    if page_data.questions.is_empty() {
        return Err(AppError::not_found(format!("第 {} 页没有题目", page)));
    }

    Ok(QuestionListing {
        page: page_data,
        categories,
    })
}

/// 按题干搜索（不区分大小写的子串匹配）
///
/// 空字符串匹配所有题目；当前页为空是正常结果。
pub fn search_questions(
    store: &dyn QuestionStore,
    search_term: &str,
    page: i64,
) -> AppResult<QuestionPage> {
    let matches = store
        .search_questions(search_term)
        .map_err(|e| AppError::store_unprocessable("搜索题目失败", e))?;

    debug!("搜索 \"{}\" 命中 {} 道题", search_term, matches.len());
    Ok(QuestionPage::from_matches(&matches, page))
}

/// 某个分类下的题目
///
/// 先确认分类存在，再查询题目。分类不存在或当前页为空时返回 404。
pub fn questions_in_category(
    store: &dyn QuestionStore,
    category_id: i64,
    page: i64,
) -> AppResult<CategoryQuestions> {
    let category = store
        .find_category(category_id)
        .map_err(|e| AppError::store_internal("读取分类失败", e))?
        .ok_or_else(|| AppError::not_found(format!("分类 {} 不存在", category_id)))?;

    let matches = store
        .questions_by_category(category.id)
        .map_err(|e| AppError::NotFound {
            reason: format!("读取分类 {} 的题目失败: {}", category.id, e),
        })?;

    let page_data = QuestionPage::from_matches(&matches, page);
    if page_data.questions.is_empty() {
        return Err(AppError::not_found(format!(
            "分类 {} 第 {} 页没有题目",
            category.id, page
        )));
    }

    Ok(CategoryQuestions {
        page: page_data,
        current_category: category.label,
    })
}

/// 新增题目，返回新ID及更新后的第一页
pub fn create_question(store: &dyn QuestionStore, new_question: NewQuestion) -> AppResult<Created> {
    let question = store
        .insert_question(new_question)
        .map_err(|e| AppError::store_unprocessable("新增题目失败", e))?;
    info!("新增题目 {}", question);

    let page = first_page(store).map_err(|e| AppError::store_unprocessable("读取题目失败", e))?;
    Ok(Created {
        created: question.id,
        page,
    })
}

/// 删除题目，返回删除后的第一页
///
/// 题目不存在时返回 404；删除过程中的其他失败一律返回 422。
pub fn delete_question(store: &dyn QuestionStore, question_id: i64) -> AppResult<Deleted> {
    let existing = store
        .find_question(question_id)
        .map_err(|e| AppError::store_unprocessable("查询题目失败", e))?;
    if existing.is_none() {
        return Err(AppError::not_found(format!("题目 {} 不存在", question_id)));
    }

    let removed = store
        .delete_question(question_id)
        .map_err(|e| AppError::store_unprocessable("删除题目失败", e))?;
    if !removed {
        // 查询与删除之间被其他请求删掉了
        return Err(AppError::unprocessable(format!(
            "题目 {} 已被删除",
            question_id
        )));
    }
    info!("删除题目 #{}", question_id);

    let page = first_page(store).map_err(|e| AppError::store_unprocessable("读取题目失败", e))?;
    Ok(Deleted {
        deleted: question_id,
        page,
    })
}

fn first_page(store: &dyn QuestionStore) -> crate::error::StoreResult<QuestionPage> {
    let all = store.list_questions()?;
    Ok(QuestionPage::from_matches(&all, 1))
}
