use crate::models::question::{Category, NewQuestion};
use crate::store::QuestionStore;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 题库种子文件
///
/// ```toml
/// [[categories]]
/// id = 1
/// type = "Science"
///
/// [[questions]]
/// question = "What is the heaviest organ in the human body?"
/// answer = "The Liver"
/// difficulty = 4
/// category = 1
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionBank {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<SeedQuestion>,
}

/// 种子文件中的一道题（没有ID，插入时由题库分配）
#[derive(Debug, Clone, Deserialize)]
pub struct SeedQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: i64,
}

impl From<SeedQuestion> for NewQuestion {
    fn from(seed: SeedQuestion) -> Self {
        NewQuestion::new(seed.question, seed.answer, seed.category, seed.difficulty)
    }
}

/// 从 TOML 文件加载题库种子
pub async fn load_question_bank(toml_file_path: &Path) -> Result<QuestionBank> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", toml_file_path.display()))?;

    let bank: QuestionBank = toml::from_str(&content)
        .with_context(|| format!("无法解析TOML文件: {}", toml_file_path.display()))?;

    tracing::info!(
        "成功加载 {} 个分类, {} 个题目",
        bank.categories.len(),
        bank.questions.len()
    );

    Ok(bank)
}

/// 将种子写入题库
///
/// 只有在题库为空时才写入，返回实际插入的题目数量。
pub fn seed_store(store: &dyn QuestionStore, bank: QuestionBank) -> Result<usize> {
    if store.count_all()? > 0 || !store.list_categories()?.is_empty() {
        tracing::info!("题库已有数据，跳过种子写入");
        return Ok(0);
    }

    for category in bank.categories {
        store
            .insert_category(category.clone())
            .with_context(|| format!("写入分类失败: {}", category.label))?;
    }

    let mut inserted = 0;
    for seed in bank.questions {
        store
            .insert_question(seed.into())
            .context("写入种子题目失败")?;
        inserted += 1;
    }

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::io::Write;

    const BANK: &str = r#"
[[categories]]
id = 1
type = "Science"

[[categories]]
id = 2
type = "Art"

[[questions]]
question = "What is the heaviest organ in the human body?"
answer = "The Liver"
difficulty = 4
category = 1

[[questions]]
question = "Which Dutch graphic artist was known for impossible constructions?"
answer = "Escher"
difficulty = 1
category = 2
"#;

    #[tokio::test]
    async fn test_load_and_seed_bank() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BANK.as_bytes()).unwrap();

        let bank = load_question_bank(file.path()).await.unwrap();
        assert_eq!(bank.categories.len(), 2);
        assert_eq!(bank.questions.len(), 2);

        let store = MemoryStore::new();
        assert_eq!(seed_store(&store, bank.clone()).unwrap(), 2);
        assert_eq!(store.count_all().unwrap(), 2);

        // 第二次写入应被跳过
        assert_eq!(seed_store(&store, bank).unwrap(), 0);
        assert_eq!(store.count_all().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_reported() {
        let err = load_question_bank(Path::new("no/such/bank.toml"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("无法读取TOML文件"));
    }
}
