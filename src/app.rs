//! 应用外壳
//!
//! 负责打开题库、写入种子，并通过 [`Api`] 完整走一遍调用约定：
//! 列分类、逐页浏览题目、在配置的分类中抽题直到抽完。

use crate::api::{Api, Request};
use crate::config::Config;
use crate::models::{load_question_bank, seed_store, Question};
use crate::store::{JsonFileStore, MemoryStore, QuestionStore};
use crate::utils::logging::{log_quiz_complete, log_startup, truncate_text};
use anyhow::{Context, Result};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// 一次运行的统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub categories: usize,
    pub pages: usize,
    pub total_questions: usize,
    pub quiz_questions: usize,
}

/// 应用主结构
pub struct App {
    config: Config,
    api: Api,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config.bank_file, config.data_file.as_deref());

        let store: Arc<dyn QuestionStore> = match &config.data_file {
            Some(path) => Arc::new(
                JsonFileStore::open(path).with_context(|| format!("无法打开快照文件: {}", path))?,
            ),
            None => Arc::new(MemoryStore::new()),
        };

        let bank_path = Path::new(&config.bank_file);
        if bank_path.exists() {
            let bank = load_question_bank(bank_path).await?;
            let inserted = seed_store(store.as_ref(), bank)?;
            if inserted > 0 {
                info!("✓ 写入种子题目 {} 道", inserted);
            }
        } else {
            warn!("⚠️ 种子题库不存在: {}", config.bank_file);
        }

        let api = Api::new(store)?;
        Ok(Self { config, api })
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunStats> {
        let mut stats = RunStats::default();

        let response = self.api.handle(&Request::get("/categories"));
        if response.is_success() {
            stats.categories = response.body["total_categories"].as_u64().unwrap_or(0) as usize;
            info!("📂 分类数量: {}", stats.categories);
        } else {
            warn!("⚠️ 题库中没有分类");
        }

        stats.pages = self.browse_pages(&mut stats.total_questions);
        stats.quiz_questions = self.play_quiz()?;

        Ok(stats)
    }

    /// 逐页浏览全部题目，直到返回 404
    fn browse_pages(&self, total_questions: &mut usize) -> usize {
        let mut page = 1;
        loop {
            let response = self
                .api
                .handle(&Request::get("/questions").with_page(page.to_string()));
            if !response.is_success() {
                return page - 1;
            }

            *total_questions = response.body["total_questions"].as_u64().unwrap_or(0) as usize;
            let count = response.body["questions"].as_array().map_or(0, |q| q.len());
            info!("📄 第 {} 页: {} 道题 (共 {} 道)", page, count, total_questions);
            page += 1;
        }
    }

    /// 在配置的分类中连续抽题，直到没有新题
    fn play_quiz(&self) -> Result<usize> {
        let mut previous: Vec<i64> = Vec::new();

        loop {
            let response = self.api.handle(&Request::post(
                "/quizzes",
                json!({
                    "previous_questions": previous,
                    "quiz_category": {"id": self.config.quiz_category},
                }),
            ));
            if !response.is_success() {
                anyhow::bail!("抽题失败: {}", response.body);
            }

            let question: Option<Question> = serde_json::from_value(response.body["question"].clone())
                .context("无法解析抽题结果")?;

            match question {
                Some(question) => {
                    if self.config.verbose_logging {
                        info!("❓ {} → {}", question, truncate_text(&question.answer, 40));
                    }
                    previous.push(question.id);
                }
                None => {
                    log_quiz_complete(response.body["current_category"].as_str(), previous.len());
                    return Ok(previous.len());
                }
            }
        }
    }
}
