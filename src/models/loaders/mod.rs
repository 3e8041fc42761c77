pub mod toml_loader;

pub use toml_loader::{load_question_bank, seed_store, QuestionBank, SeedQuestion};
