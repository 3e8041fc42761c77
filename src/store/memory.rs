use super::state::BankState;
use super::QuestionStore;
use crate::error::StoreResult;
use crate::models::{Category, NewQuestion, Question};
use parking_lot::RwLock;

/// 进程内题库
///
/// 读写各自在一次加锁内完成，进程退出后数据丢失。
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<BankState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QuestionStore for MemoryStore {
    fn list_questions(&self) -> StoreResult<Vec<Question>> {
        Ok(self.state.read().list_questions())
    }

    fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.state.read().list_categories())
    }

    fn find_category(&self, id: i64) -> StoreResult<Option<Category>> {
        Ok(self.state.read().find_category(id))
    }

    fn find_question(&self, id: i64) -> StoreResult<Option<Question>> {
        Ok(self.state.read().find_question(id))
    }

    fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        Ok(self.state.read().search_questions(term))
    }

    fn questions_by_category(&self, category_id: i64) -> StoreResult<Vec<Question>> {
        Ok(self.state.read().questions_by_category(category_id))
    }

    fn insert_question(&self, new_question: NewQuestion) -> StoreResult<Question> {
        self.state.write().insert_question(new_question)
    }

    fn insert_category(&self, category: Category) -> StoreResult<Category> {
        self.state.write().insert_category(category)
    }

    fn delete_question(&self, id: i64) -> StoreResult<bool> {
        Ok(self.state.write().delete_question(id))
    }

    fn count_all(&self) -> StoreResult<usize> {
        Ok(self.state.read().count_all())
    }
}
