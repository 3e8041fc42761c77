//! 分类索引
//!
//! 分类ID → 分类名称。单独查询分类时分类为空视为 404，
//! 作为题目列表的附带信息时分类为空只是一个空映射。

use crate::error::{AppError, AppResult};
use crate::models::Category;
use crate::store::QuestionStore;
use std::collections::BTreeMap;
use tracing::debug;

/// 分类ID → 分类名称
pub type CategoryIndex = BTreeMap<i64, String>;

pub fn build_category_index(categories: &[Category]) -> CategoryIndex {
    categories
        .iter()
        .map(|c| (c.id, c.label.clone()))
        .collect()
}

/// 分类列表（单独查询）
///
/// 没有任何分类时返回 [`AppError::NotFound`]。
pub fn list_categories(store: &dyn QuestionStore) -> AppResult<CategoryIndex> {
    let index = bundled_categories(store)?;
    if index.is_empty() {
        return Err(AppError::not_found("没有任何分类"));
    }
    debug!("分类数量: {}", index.len());
    Ok(index)
}

/// 分类列表（作为其他响应的一部分），允许为空
pub fn bundled_categories(store: &dyn QuestionStore) -> AppResult<CategoryIndex> {
    let categories = store
        .list_categories()
        .map_err(|e| AppError::store_internal("读取分类失败", e))?;
    Ok(build_category_index(&categories))
}
