//! 测试用题库夹具

use super::{MemoryStore, QuestionStore};
use crate::error::{StoreError, StoreResult};
use crate::models::{Category, NewQuestion, Question};

/// 分类 {1: Science, 2: Art}，`science` 道题在分类 1，`art` 道题在分类 2
pub(crate) fn seeded_store(science: usize, art: usize) -> MemoryStore {
    let store = MemoryStore::new();
    store.insert_category(Category::new(1, "Science")).unwrap();
    store.insert_category(Category::new(2, "Art")).unwrap();
    for i in 0..science {
        store
            .insert_question(NewQuestion::new(format!("Science question {}", i + 1), "answer", 1, 1))
            .unwrap();
    }
    for i in 0..art {
        store
            .insert_question(NewQuestion::new(format!("Art question {}", i + 1), "answer", 2, 2))
            .unwrap();
    }
    store
}

/// 所有操作都失败的题库
pub(crate) struct FailingStore;

fn unavailable<T>() -> StoreResult<T> {
    Err(StoreError::Unavailable {
        reason: "connection refused".to_string(),
    })
}

impl QuestionStore for FailingStore {
    fn list_questions(&self) -> StoreResult<Vec<Question>> {
        unavailable()
    }

    fn list_categories(&self) -> StoreResult<Vec<Category>> {
        unavailable()
    }

    fn find_category(&self, _id: i64) -> StoreResult<Option<Category>> {
        unavailable()
    }

    fn find_question(&self, _id: i64) -> StoreResult<Option<Question>> {
        unavailable()
    }

    fn search_questions(&self, _term: &str) -> StoreResult<Vec<Question>> {
        unavailable()
    }

    fn questions_by_category(&self, _category_id: i64) -> StoreResult<Vec<Question>> {
        unavailable()
    }

    fn insert_question(&self, _new_question: NewQuestion) -> StoreResult<Question> {
        unavailable()
    }

    fn insert_category(&self, _category: Category) -> StoreResult<Category> {
        unavailable()
    }

    fn delete_question(&self, _id: i64) -> StoreResult<bool> {
        unavailable()
    }

    fn count_all(&self) -> StoreResult<usize> {
        unavailable()
    }
}
