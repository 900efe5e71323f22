mod quiz;
mod responses;

pub use quiz::{DisplayCondition, Question, Quiz, Response};
pub use responses::{UserResponse, UserResponses};
