pub mod loaders;
pub mod question;

pub use loaders::{load_question_bank, seed_store, QuestionBank, SeedQuestion};
pub use question::{Category, NewQuestion, Question};
