use serde::{Deserialize, Serialize};

/// 题目
///
/// 由题库在插入时分配 `id`，之后不可修改，只能整条删除。
/// 序列化后的字段即对外返回的题目格式。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// 所属分类ID（题库不检查分类是否存在）
    pub category: i64,
    pub difficulty: i64,
}

/// 待插入的题目
///
/// 字段在边界层不做校验，由题库在写入时按约束检查。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

impl NewQuestion {
    /// 构造一个字段齐全的题目
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: i64,
        difficulty: i64,
    ) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
            category: Some(category),
            difficulty: Some(difficulty),
        }
    }
}

/// 题目分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub label: String,
}

impl Category {
    pub fn new(id: i64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} [分类 {} | 难度 {}] {}",
            self.id,
            self.category,
            self.difficulty,
            crate::utils::logging::truncate_text(&self.question, 60)
        )
    }
}
