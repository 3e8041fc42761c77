//! 题库存储层
//!
//! 核心逻辑只通过 [`QuestionStore`] 访问数据，题库句柄由调用方显式传入。
//! 每个方法各自保证原子性，核心层不持有跨操作的锁。
//!
//! - [`MemoryStore`] - 进程内题库
//! - [`JsonFileStore`] - 每次写入后落盘为 JSON 快照的题库

pub mod file;
pub mod memory;
mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::StoreResult;
use crate::models::{Category, NewQuestion, Question};

/// 题库接口
///
/// 所有列表结果均按 ID 升序返回。
pub trait QuestionStore: Send + Sync {
    /// 全部题目
    fn list_questions(&self) -> StoreResult<Vec<Question>>;

    /// 全部分类
    fn list_categories(&self) -> StoreResult<Vec<Category>>;

    fn find_category(&self, id: i64) -> StoreResult<Option<Category>>;

    fn find_question(&self, id: i64) -> StoreResult<Option<Question>>;

    /// 题干包含 `term` 的题目（不区分大小写）
    fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    /// 指定分类下的题目
    fn questions_by_category(&self, category_id: i64) -> StoreResult<Vec<Question>>;

    /// 插入题目并分配新ID
    ///
    /// 字段缺失或难度小于 1 时返回 [`StoreError::Constraint`](crate::error::StoreError::Constraint)。
    fn insert_question(&self, new_question: NewQuestion) -> StoreResult<Question>;

    /// 插入分类（ID 由调用方指定）
    fn insert_category(&self, category: Category) -> StoreResult<Category>;

    /// 删除题目，题目不存在时返回 `false`
    fn delete_question(&self, id: i64) -> StoreResult<bool>;

    /// 题目总数
    fn count_all(&self) -> StoreResult<usize>;
}
