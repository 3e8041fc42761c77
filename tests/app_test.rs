use std::io::Write;
use trivia_quiz::{App, Config, JsonFileStore, QuestionStore, Request};

fn shipped_bank() -> String {
    concat!(env!("CARGO_MANIFEST_DIR"), "/data/trivia.toml").to_string()
}

#[tokio::test]
async fn test_run_over_shipped_bank() {
    let config = Config {
        bank_file: shipped_bank(),
        ..Config::default()
    };

    let app = App::initialize(config).await.unwrap();
    let stats = app.run().await.unwrap();

    assert_eq!(stats.categories, 6);
    assert_eq!(stats.pages, 2);
    assert_eq!(stats.total_questions, 19);
    assert_eq!(stats.quiz_questions, 19);
}

#[tokio::test]
async fn test_quiz_in_single_category() {
    let config = Config {
        bank_file: shipped_bank(),
        quiz_category: 2,
        ..Config::default()
    };

    let app = App::initialize(config).await.unwrap();
    let stats = app.run().await.unwrap();
    assert_eq!(stats.quiz_questions, 4);
}

#[tokio::test]
async fn test_snapshot_store_is_seeded_once() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("bank.json");

    let mut bank = tempfile::NamedTempFile::new().unwrap();
    bank.write_all(
        br#"
[[categories]]
id = 1
type = "Science"

[[questions]]
question = "Who discovered penicillin?"
answer = "Alexander Fleming"
difficulty = 3
category = 1
"#,
    )
    .unwrap();

    let config = Config {
        bank_file: bank.path().display().to_string(),
        data_file: Some(data_file.display().to_string()),
        ..Config::default()
    };

    {
        let app = App::initialize(config.clone()).await.unwrap();
        let response = app.api().handle(&Request::delete("/questions/1"));
        assert_eq!(response.status, 200);
    }

    // 快照中分类仍在，种子不会再次写入
    let app = App::initialize(config).await.unwrap();
    assert_eq!(app.api().store().count_all().unwrap(), 0);

    let store = JsonFileStore::open(&data_file).unwrap();
    assert_eq!(store.list_categories().unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_bank_starts_empty() {
    let config = Config {
        bank_file: "does/not/exist.toml".to_string(),
        ..Config::default()
    };

    let app = App::initialize(config).await.unwrap();
    let stats = app.run().await.unwrap();
    assert_eq!(stats.categories, 0);
    assert_eq!(stats.pages, 0);
    assert_eq!(stats.quiz_questions, 0);
}
