//! 抽题服务 - 业务能力层
//!
//! 在指定分类范围内，从未出过的题目里等概率抽取一道。
//! 可选题目为空时返回 [`DrawOutcome::Exhausted`]，这不是错误。

use crate::error::{AppError, AppResult, StoreResult};
use crate::models::Question;
use crate::store::QuestionStore;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// 抽题的分类范围
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    /// 所有分类
    All,
    /// 指定分类
    Only(i64),
}

impl CategoryScope {
    /// 分类ID为 0 表示所有分类
    pub fn from_id(category_id: i64) -> Self {
        if category_id == 0 {
            CategoryScope::All
        } else {
            CategoryScope::Only(category_id)
        }
    }

    pub fn admits(&self, question: &Question) -> bool {
        match self {
            CategoryScope::All => true,
            CategoryScope::Only(id) => question.category == *id,
        }
    }
}

/// 抽题结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    Drawn(Question),
    /// 该范围内的题目都已出过
    Exhausted,
}

impl DrawOutcome {
    pub fn into_question(self) -> Option<Question> {
        match self {
            DrawOutcome::Drawn(question) => Some(question),
            DrawOutcome::Exhausted => None,
        }
    }
}

/// 可选题目：在范围内且不在 `previous_questions` 中
pub fn eligible_questions(
    store: &dyn QuestionStore,
    scope: CategoryScope,
    previous_questions: &[i64],
) -> StoreResult<Vec<Question>> {
    let candidates = match scope {
        CategoryScope::All => store.list_questions()?,
        CategoryScope::Only(category_id) => store.questions_by_category(category_id)?,
    };

    let asked: HashSet<i64> = previous_questions.iter().copied().collect();
    Ok(candidates
        .into_iter()
        .filter(|q| scope.admits(q) && !asked.contains(&q.id))
        .collect())
}

/// 抽一道题
///
/// # 参数
/// - `store`: 题库
/// - `scope`: 分类范围
/// - `previous_questions`: 本轮已出过的题目ID
/// - `rng`: 随机数生成器
///
/// # 返回
/// 抽到的题目，或 [`DrawOutcome::Exhausted`]；题库读取失败时返回 422
pub fn draw_question<R: Rng + ?Sized>(
    store: &dyn QuestionStore,
    scope: CategoryScope,
    previous_questions: &[i64],
    rng: &mut R,
) -> AppResult<DrawOutcome> {
    let eligible = eligible_questions(store, scope, previous_questions)
        .map_err(|e| AppError::store_unprocessable("读取可抽题目失败", e))?;

    debug!(
        "抽题范围 {:?}: 已出 {} 道, 可选 {} 道",
        scope,
        previous_questions.len(),
        eligible.len()
    );

    Ok(match eligible.choose(rng) {
        Some(question) => DrawOutcome::Drawn(question.clone()),
        None => DrawOutcome::Exhausted,
    })
}
