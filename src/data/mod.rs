mod loader;
mod sample;

pub use loader::{LoadError, load_quiz_from_json};
pub use sample::sample_quiz;
