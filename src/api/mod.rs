//! 调用约定层
//!
//! 把 (方法, 路径, 页码, 请求体) 形式的请求分发到业务能力层，
//! 并把结果渲染为 JSON 响应。网络传输不在本层范围内。

pub mod request;
pub mod response;
pub mod router;

pub use request::{LooseInt, QuestionsAction, QuestionsBody, QuizBody, QuizCategory};
pub use response::ErrorResponse;
pub use router::{Api, Method, Request, Response};
