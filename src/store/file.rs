//! JSON 快照题库
//!
//! 状态整体保存在一个 JSON 文件中。每次写操作先在副本上执行，
//! 快照写入临时文件并重命名成功后才替换内存中的状态；
//! 落盘失败时本次写操作整体作废。

use super::state::BankState;
use super::QuestionStore;
use crate::error::{StoreError, StoreResult};
use crate::models::{Category, NewQuestion, Question};
use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 落盘为 JSON 快照的题库
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    state: RwLock<BankState>,
}

impl JsonFileStore {
    /// 打开快照文件，文件不存在时从空题库开始
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let state = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| io_error(&path, source))?;
            serde_json::from_str(&content)?
        } else {
            BankState::default()
        };

        debug!("打开题库快照: {}", path.display());
        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 在副本上执行写操作，落盘成功后再提交
    fn mutate<T>(&self, op: impl FnOnce(&mut BankState) -> StoreResult<T>) -> StoreResult<T> {
        let mut guard = self.state.write();
        let mut next = guard.clone();
        let output = op(&mut next)?;
        self.persist(&next)?;
        *guard = next;
        Ok(output)
    }

    fn persist(&self, state: &BankState) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(state)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, bytes).map_err(|source| io_error(&tmp_path, source))?;
        fs::rename(&tmp_path, &self.path).map_err(|source| io_error(&self.path, source))?;
        debug!("快照已写入: {}", self.path.display());
        Ok(())
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}

impl QuestionStore for JsonFileStore {
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
        self.mutate(|state| state.insert_question(new_question))
    }

    fn insert_category(&self, category: Category) -> StoreResult<Category> {
        self.mutate(|state| state.insert_category(category))
    }

    fn delete_question(&self, id: i64) -> StoreResult<bool> {
        // 不存在的题目不触发落盘
        if self.state.read().find_question(id).is_none() {
            return Ok(false);
        }
        self.mutate(|state| Ok(state.delete_question(id)))
    }

    fn count_all(&self) -> StoreResult<usize> {
        Ok(self.state.read().count_all())
    }
}
