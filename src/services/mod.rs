pub mod category_index;
pub mod pagination;
pub mod question_query;
pub mod quiz_draw;

pub use category_index::{build_category_index, bundled_categories, list_categories, CategoryIndex};
pub use pagination::{paginate, parse_page, QUESTIONS_PER_PAGE};
pub use question_query::{
    create_question, delete_question, list_questions, questions_in_category, search_questions,
    CategoryQuestions, Created, Deleted, QuestionListing, QuestionPage,
};
pub use quiz_draw::{draw_question, eligible_questions, CategoryScope, DrawOutcome};
