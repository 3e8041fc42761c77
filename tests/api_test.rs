use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;
use trivia_quiz::{Api, Category, MemoryStore, NewQuestion, QuestionStore, Request};

/// 分类 {1: Science, 2: Art}，12 道题全部属于分类 1
fn science_bank() -> Api {
    let store = MemoryStore::new();
    store.insert_category(Category::new(1, "Science")).unwrap();
    store.insert_category(Category::new(2, "Art")).unwrap();
    for i in 1..=12 {
        store
            .insert_question(NewQuestion::new(
                format!("Science question number {}", i),
                format!("answer {}", i),
                1,
                (i % 5) + 1,
            ))
            .unwrap();
    }
    Api::new(Arc::new(store)).unwrap()
}

fn ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

#[test]
fn test_list_first_and_second_page() {
    let api = science_bank();

    let first = api.handle(&Request::get("/questions").with_page("1"));
    assert_eq!(first.status, 200);
    assert_eq!(first.body["success"], true);
    assert_eq!(ids(&first.body).len(), 10);
    assert_eq!(first.body["total_questions"], 12);
    assert_eq!(first.body["categories"], json!({"1": "Science", "2": "Art"}));
    assert_eq!(first.body["current_category"], Value::Null);

    let second = api.handle(&Request::get("/questions").with_page("2"));
    assert_eq!(second.status, 200);
    assert_eq!(ids(&second.body), vec![11, 12]);
    assert_eq!(second.body["total_questions"], 12);

    let beyond = api.handle(&Request::get("/questions").with_page("3"));
    assert_eq!(beyond.status, 404);
    assert_eq!(
        beyond.body,
        json!({"success": false, "error": 404, "message": "Not found"})
    );
}

#[test]
fn test_categories_listing() {
    let api = science_bank();
    let response = api.handle(&Request::get("/categories"));
    assert_eq!(response.status, 200);
    assert_eq!(response.body["total_categories"], 2);
    assert_eq!(response.body["categories"]["2"], "Art");

    let empty = Api::new(Arc::new(MemoryStore::new())).unwrap();
    assert_eq!(empty.handle(&Request::get("/categories")).status, 404);
}

#[test]
fn test_quiz_until_exhausted() {
    let api = science_bank();
    let mut previous: Vec<i64> = Vec::new();

    for _ in 0..12 {
        let response = api.handle(&Request::post(
            "/quizzes",
            json!({
                "previous_questions": previous,
                "quiz_category": {"id": 1, "type": "Science"}
            }),
        ));
        assert_eq!(response.status, 200);
        let question = &response.body["question"];
        assert_eq!(question["category"], 1);

        let id = question["id"].as_i64().unwrap();
        assert!(!previous.contains(&id));
        previous.push(id);
    }

    let response = api.handle(&Request::post(
        "/quizzes",
        json!({
            "previous_questions": previous,
            "quiz_category": {"id": 1, "type": "Science"}
        }),
    ));
    assert_eq!(response.status, 200);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["question"], Value::Null);
    assert_eq!(response.body["current_category"], "Science");
}

#[test]
fn test_quiz_all_categories_without_previous_questions() {
    let api = science_bank();
    let response = api.handle(&Request::post(
        "/quizzes",
        json!({"quiz_category": {"id": 0, "type": "click"}}),
    ));
    assert_eq!(response.status, 200);
    assert!(response.body["question"]["id"].is_i64());
    assert_eq!(response.body["current_category"], "click");
}

#[test]
fn test_malformed_quiz_request_is_unprocessable() {
    let api = science_bank();
    let response = api.handle(&Request::post(
        "/quizzes",
        json!({"previous_questions": "1,2,3", "quiz_category": {"id": 1}}),
    ));
    assert_eq!(response.status, 422);
    assert_eq!(response.body["message"], "Unprocessable");

    let response = api.handle(&Request::post("/quizzes", json!({"previous_questions": []})));
    assert_eq!(response.status, 422);
}

#[test]
fn test_created_question_appears_only_in_its_category() {
    let api = science_bank();

    let created = api.handle(&Request::post(
        "/questions",
        json!({
            "question": "What is the chemical symbol for gold?",
            "answer": "Au",
            "difficulty": 2,
            "category": "1"
        }),
    ));
    assert_eq!(created.status, 200);
    assert_eq!(created.body["created"], 13);
    assert_eq!(created.body["total_questions"], 13);
    assert_eq!(ids(&created.body).len(), 10);

    let science = api.handle(&Request::get("/categories/1/questions").with_page("2"));
    assert_eq!(science.status, 200);
    assert!(ids(&science.body).contains(&13));
    assert_eq!(science.body["total_questions"], 13);
    assert_eq!(science.body["current_category"], "Science");

    // Art 分类存在但没有题目
    let art = api.handle(&Request::get("/categories/2/questions"));
    assert_eq!(art.status, 404);
}

#[test]
fn test_create_with_invalid_fields_is_unprocessable() {
    let api = science_bank();

    let missing_answer = api.handle(&Request::post(
        "/questions",
        json!({"question": "Unanswerable?", "difficulty": 1, "category": 1}),
    ));
    assert_eq!(missing_answer.status, 422);

    let bad_difficulty = api.handle(&Request::post(
        "/questions",
        json!({"question": "Q", "answer": "A", "difficulty": "hard", "category": 1}),
    ));
    assert_eq!(bad_difficulty.status, 422);

    let total = api.handle(&Request::get("/questions"));
    assert_eq!(total.body["total_questions"], 12);
}

#[test]
fn test_search_is_case_insensitive() {
    let api = science_bank();
    api.store()
        .insert_question(NewQuestion::new("Which Title did the book win?", "None", 2, 1))
        .unwrap();

    let response = api.handle(&Request::post("/questions", json!({"searchTerm": "title"})));
    assert_eq!(response.status, 200);
    assert_eq!(ids(&response.body), vec![13]);
    assert_eq!(response.body["total_questions"], 1);
    assert!(response.body.get("current_category").is_none());

    let nothing = api.handle(&Request::post("/questions", json!({"searchTerm": "xyzzy"})));
    assert_eq!(nothing.status, 200);
    assert_eq!(nothing.body["questions"], json!([]));
    assert_eq!(nothing.body["total_questions"], 0);
}

#[test]
fn test_search_total_counts_all_matches() {
    let api = science_bank();
    let second = api.handle(
        &Request::post("/questions", json!({"searchTerm": "NUMBER"})).with_page("2"),
    );
    assert_eq!(second.status, 200);
    assert_eq!(ids(&second.body), vec![11, 12]);
    assert_eq!(second.body["total_questions"], 12);
}

#[test]
fn test_delete_question() {
    let api = science_bank();

    let response = api.handle(&Request::delete("/questions/5"));
    assert_eq!(response.status, 200);
    assert_eq!(response.body["deleted"], 5);
    assert_eq!(response.body["total_questions"], 11);

    let remaining: HashSet<i64> = api
        .store()
        .list_questions()
        .unwrap()
        .iter()
        .map(|q| q.id)
        .collect();
    assert!(!remaining.contains(&5));
    assert_eq!(remaining.len(), 11);

    let again = api.handle(&Request::delete("/questions/5"));
    assert_eq!(again.status, 404);
}

#[test]
fn test_unknown_category_is_not_found() {
    let api = science_bank();
    let response = api.handle(&Request::get("/categories/1000/questions"));
    assert_eq!(response.status, 404);
}
