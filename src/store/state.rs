use crate::error::{StoreError, StoreResult};
use crate::models::{Category, NewQuestion, Question};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 题库的完整状态
///
/// `last_question_id` 只增不减，被删除题目的ID不会再分配。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct BankState {
    last_question_id: i64,
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
}

impl BankState {
    pub(crate) fn list_questions(&self) -> Vec<Question> {
        self.questions.values().cloned().collect()
    }

    pub(crate) fn list_categories(&self) -> Vec<Category> {
        self.categories.values().cloned().collect()
    }

    pub(crate) fn find_category(&self, id: i64) -> Option<Category> {
        self.categories.get(&id).cloned()
    }

    pub(crate) fn find_question(&self, id: i64) -> Option<Question> {
        self.questions.get(&id).cloned()
    }

    pub(crate) fn search_questions(&self, term: &str) -> Vec<Question> {
        let needle = term.to_lowercase();
        self.questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub(crate) fn questions_by_category(&self, category_id: i64) -> Vec<Question> {
        self.questions
            .values()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect()
    }

    pub(crate) fn insert_question(&mut self, new_question: NewQuestion) -> StoreResult<Question> {
        let NewQuestion {
            question,
            answer,
            category,
            difficulty,
        } = new_question;

        let question = question.ok_or_else(|| missing("question"))?;
        let answer = answer.ok_or_else(|| missing("answer"))?;
        let category = category.ok_or_else(|| missing("category"))?;
        let difficulty = difficulty.ok_or_else(|| missing("difficulty"))?;
        if difficulty < 1 {
            return Err(StoreError::Constraint {
                reason: format!("difficulty 必须为正整数, 实际为 {}", difficulty),
            });
        }

        let id = self.last_question_id + 1;
        let record = Question {
            id,
            question,
            answer,
            category,
            difficulty,
        };
        self.questions.insert(id, record.clone());
        self.last_question_id = id;
        Ok(record)
    }

    pub(crate) fn insert_category(&mut self, category: Category) -> StoreResult<Category> {
        if self.categories.contains_key(&category.id) {
            return Err(StoreError::Duplicate {
                collection: "categories",
                id: category.id,
            });
        }
        self.categories.insert(category.id, category.clone());
        Ok(category)
    }

    pub(crate) fn delete_question(&mut self, id: i64) -> bool {
        self.questions.remove(&id).is_some()
    }

    pub(crate) fn count_all(&self) -> usize {
        self.questions.len()
    }
}

fn missing(field: &str) -> StoreError {
    StoreError::Constraint {
        reason: format!("{} 不能为空", field),
    }
}
