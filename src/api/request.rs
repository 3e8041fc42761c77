//! 请求体定义
//!
//! 请求体在进入业务层之前先反序列化为这里的结构，
//! 反序列化失败统一视为 422。

use crate::error::{AppError, AppResult};
use crate::models::NewQuestion;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

/// 整数或数字字符串
///
/// 前端提交的分类ID可能是 `1` 也可能是 `"1"`，统一转换为 `i64`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LooseInt(pub i64);

impl<'de> Deserialize<'de> for LooseInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;
        use std::fmt;

        struct LooseIntVisitor;

        impl<'de> Visitor<'de> for LooseIntVisitor {
            type Value = LooseInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a string containing an integer")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value
                    .trim()
                    .parse::<i64>()
                    .map(LooseInt)
                    .map_err(|_| E::custom(format!("not an integer: {:?}", value)))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(LooseInt(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i64::try_from(value)
                    .map(LooseInt)
                    .map_err(|_| E::custom(format!("integer out of range: {}", value)))
            }
        }

        deserializer.deserialize_any(LooseIntVisitor)
    }
}

/// `POST /questions` 的请求体
///
/// 带 `searchTerm` 时为搜索，否则为新增题目。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionsBody {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<LooseInt>,
    pub category: Option<LooseInt>,
}

/// `POST /questions` 实际要执行的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionsAction {
    Search(String),
    Create(NewQuestion),
}

impl QuestionsBody {
    pub fn into_action(self) -> QuestionsAction {
        match self.search_term {
            Some(term) => QuestionsAction::Search(term),
            None => QuestionsAction::Create(NewQuestion {
                question: self.question,
                answer: self.answer,
                category: self.category.map(|c| c.0),
                difficulty: self.difficulty.map(|d| d.0),
            }),
        }
    }
}

/// `POST /quizzes` 的请求体
#[derive(Debug, Clone, Deserialize)]
pub struct QuizBody {
    /// 本轮已出过的题目ID，缺省为空
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategory,
}

/// 抽题分类，`id` 为 0 表示所有分类
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    pub id: LooseInt,
    #[serde(rename = "type", default)]
    pub label: Option<String>,
}

/// 解析请求体，缺失或格式错误时返回 422
pub fn parse_body<T: DeserializeOwned>(body: Option<&JsonValue>) -> AppResult<T> {
    let body = body.ok_or_else(|| AppError::unprocessable("缺少请求体"))?;
    serde_json::from_value(body.clone())
        .map_err(|e| AppError::unprocessable(format!("请求体格式错误: {}", e)))
}
