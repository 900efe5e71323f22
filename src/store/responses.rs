use crate::models::{Quiz, UserResponse, UserResponses};

/// Error from a quiz repository. The in-memory store never produces one,
/// but a real backend fails in ways the session has to surface.
#[derive(Debug)]
pub enum StoreError {
    /// No quiz is currently available.
    QuizUnavailable,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::QuizUnavailable => write!(f, "no quiz is currently available"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Source of the current quiz and of per-user saved submissions. The user
/// identity is an explicit parameter on every call.
pub trait QuizRepository {
    /// The quiz currently open for responses.
    async fn fetch_current_quiz(&self) -> Result<Quiz, StoreError>;

    /// A user's saved submission for a quiz, if they have one.
    async fn fetch_user_responses(
        &self,
        quiz_id: u32,
        user_email: &str,
    ) -> Result<Option<Vec<UserResponse>>, StoreError>;

    /// Store a submission, replacing any earlier one by the same user.
    async fn save_user_responses(
        &mut self,
        quiz_id: u32,
        user_email: &str,
        responses: &[UserResponse],
    ) -> Result<(), StoreError>;
}

/// Repository backed by in-process storage: one current quiz and the
/// submissions received while the program runs.
pub struct InMemoryQuizStore {
    quiz: Quiz,
    submissions: Vec<UserResponses>,
}

impl InMemoryQuizStore {
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            submissions: Vec::new(),
        }
    }
}

impl QuizRepository for InMemoryQuizStore {
    async fn fetch_current_quiz(&self) -> Result<Quiz, StoreError> {
        Ok(self.quiz.clone())
    }

    async fn fetch_user_responses(
        &self,
        quiz_id: u32,
        user_email: &str,
    ) -> Result<Option<Vec<UserResponse>>, StoreError> {
        if quiz_id != self.quiz.quiz_id {
            return Ok(None);
        }
        Ok(self
            .submissions
            .iter()
            .find(|submission| submission.user_email == user_email)
            .map(|submission| submission.responses.clone()))
    }

    async fn save_user_responses(
        &mut self,
        _quiz_id: u32,
        user_email: &str,
        responses: &[UserResponse],
    ) -> Result<(), StoreError> {
        self.submissions
            .retain(|submission| submission.user_email != user_email);
        self.submissions.push(UserResponses {
            user_email: user_email.to_string(),
            responses: responses.to_vec(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_quiz;

    fn resp(question_id: u32, response_id: u32) -> UserResponse {
        UserResponse {
            question_id,
            response_id,
        }
    }

    #[tokio::test]
    async fn test_fetch_without_submission_is_none() {
        let store = InMemoryQuizStore::new(sample_quiz());

        let found = store
            .fetch_user_responses(1, "ada@example.com")
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_prior_submission() {
        let mut store = InMemoryQuizStore::new(sample_quiz());

        store
            .save_user_responses(1, "ada@example.com", &[resp(1, 1)])
            .await
            .unwrap();
        store
            .save_user_responses(1, "ada@example.com", &[resp(1, 2), resp(2, 11)])
            .await
            .unwrap();

        let found = store
            .fetch_user_responses(1, "ada@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, vec![resp(1, 2), resp(2, 11)]);
    }

    #[tokio::test]
    async fn test_submissions_scoped_by_email() {
        let mut store = InMemoryQuizStore::new(sample_quiz());

        store
            .save_user_responses(1, "ada@example.com", &[resp(1, 1)])
            .await
            .unwrap();

        let found = store
            .fetch_user_responses(1, "grace@example.com")
            .await
            .unwrap();
        assert!(found.is_none());
    }
}
