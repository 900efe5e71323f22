//! Storage collaborators.
//!
//! The session never touches process-wide state: user accounts and saved
//! submissions live behind these injected capabilities, so any backend (the
//! in-memory ones here, a file, a database) can stand in.

mod responses;
mod users;

pub use responses::{InMemoryQuizStore, QuizRepository, StoreError};
pub use users::{InMemoryUsers, UserDirectory};
