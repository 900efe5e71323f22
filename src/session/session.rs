//! The quiz-taking session owned by one authenticated user.

use uuid::Uuid;

use crate::models::{Question, Quiz};
use crate::store::{QuizRepository, StoreError};

use super::{AnswerSet, navigation};

/// One row of the summary screen: a visible question and the label of the
/// chosen response, if the question has been answered.
#[derive(Debug)]
pub struct SummaryEntry<'a> {
    pub question: &'a Question,
    pub response_label: Option<&'a str>,
}

/// A single user's pass through the current quiz.
///
/// Owns the cursor into the question sequence and the answer set, and is
/// discarded on logout or exit. All reads the presentation layer needs are
/// derived here; the UI never inspects the answer set directly.
pub struct QuizSession {
    id: Uuid,
    user_email: String,
    quiz: Quiz,
    answers: AnswerSet,
    position: usize,
    already_submitted: bool,
    saved: bool,
}

impl QuizSession {
    /// Fetch the current quiz and the user's prior submission, committing
    /// both into a fresh session at once. A non-empty prior submission puts
    /// the session straight at the summary, read-only.
    pub async fn load<R: QuizRepository>(repo: &R, user_email: &str) -> Result<Self, StoreError> {
        let quiz = repo.fetch_current_quiz().await?;
        let prior = repo.fetch_user_responses(quiz.quiz_id, user_email).await?;

        let already_submitted = prior.as_ref().is_some_and(|responses| !responses.is_empty());
        let answers = AnswerSet::from_responses(prior.unwrap_or_default());
        let position = if already_submitted {
            navigation::summary_position(&quiz.questions)
        } else {
            0
        };

        Ok(Self {
            id: Uuid::new_v4(),
            user_email: user_email.to_string(),
            quiz,
            answers,
            position,
            already_submitted,
            saved: false,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The user already submitted in an earlier session; only the summary
    /// is shown and nothing can be changed.
    pub fn already_submitted(&self) -> bool {
        self.already_submitted
    }

    /// Responses were saved during this session.
    pub fn saved(&self) -> bool {
        self.saved
    }

    pub fn at_summary(&self) -> bool {
        self.already_submitted
            || self.position == navigation::summary_position(&self.quiz.questions)
    }

    /// The question under the cursor; `None` at the summary.
    pub fn current_question(&self) -> Option<&Question> {
        if self.already_submitted {
            return None;
        }
        self.quiz.questions.get(self.position)
    }

    /// The recorded response for the question under the cursor.
    pub fn current_response_id(&self) -> Option<u32> {
        self.current_question()
            .and_then(|question| self.answers.response_for(question.question_id))
    }

    pub fn can_go_previous(&self) -> bool {
        !self.already_submitted && !self.saved && self.position > 0
    }

    /// Forward navigation is only offered once the current question has a
    /// recorded answer.
    pub fn can_go_next(&self) -> bool {
        self.current_response_id().is_some()
    }

    pub fn can_save(&self) -> bool {
        self.at_summary() && !self.already_submitted && !self.saved
    }

    /// Record a response for a question, clearing answers of questions
    /// gated on it.
    pub fn select_response(&mut self, question_id: u32, response_id: u32) {
        self.answers.select(&self.quiz, question_id, response_id);
    }

    /// Move to the next visible question, or to the summary.
    pub fn advance(&mut self) {
        self.position = navigation::next_position(&self.quiz.questions, &self.answers, self.position);
    }

    /// Move to the previous visible question, falling back to the first.
    pub fn go_back(&mut self) {
        self.position =
            navigation::previous_position(&self.quiz.questions, &self.answers, self.position);
    }

    /// The summary rows: every currently visible question in quiz order,
    /// paired with the label of its chosen response.
    pub fn summary(&self) -> Vec<SummaryEntry<'_>> {
        self.quiz
            .questions
            .iter()
            .filter(|question| self.answers.can_display(question))
            .map(|question| SummaryEntry {
                question,
                response_label: self
                    .answers
                    .response_for(question.question_id)
                    .and_then(|response_id| question.response_label(response_id)),
            })
            .collect()
    }

    /// Submit the answers in the order they were last set. May be called
    /// again; the repository treats a re-save as a replacement.
    pub async fn save<R: QuizRepository>(&mut self, repo: &mut R) -> Result<(), StoreError> {
        repo.save_user_responses(self.quiz.quiz_id, &self.user_email, self.answers.as_slice())
            .await?;
        self.saved = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_quiz;
    use crate::models::UserResponse;
    use crate::store::InMemoryQuizStore;

    const USER: &str = "ada@example.com";

    fn resp(question_id: u32, response_id: u32) -> UserResponse {
        UserResponse {
            question_id,
            response_id,
        }
    }

    async fn fresh_session(store: &InMemoryQuizStore) -> QuizSession {
        QuizSession::load(store, USER).await.unwrap()
    }

    #[tokio::test]
    async fn test_fresh_session_starts_at_first_question() {
        let store = InMemoryQuizStore::new(sample_quiz());
        let session = fresh_session(&store).await;

        assert!(!session.already_submitted());
        assert_eq!(session.position(), 0);
        assert_eq!(session.current_question().unwrap().question_id, 1);
        assert!(!session.can_go_previous());
        assert!(!session.can_go_next());
    }

    #[tokio::test]
    async fn test_next_enabled_once_answered() {
        let store = InMemoryQuizStore::new(sample_quiz());
        let mut session = fresh_session(&store).await;

        assert!(!session.can_go_next());
        session.select_response(1, 1);
        assert!(session.can_go_next());
    }

    #[tokio::test]
    async fn test_summary_filters_hidden_questions() {
        let store = InMemoryQuizStore::new(sample_quiz());
        let mut session = fresh_session(&store).await;

        session.select_response(1, 1);
        session.select_response(2, 11);
        session.select_response(4, 31);

        let summary = session.summary();
        let ids: Vec<u32> = summary
            .iter()
            .map(|entry| entry.question.question_id)
            .collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[tokio::test]
    async fn test_full_run_through_and_save() {
        let mut store = InMemoryQuizStore::new(sample_quiz());
        let mut session = fresh_session(&store).await;

        session.select_response(1, 1);
        session.advance();
        assert_eq!(session.current_question().unwrap().question_id, 2);

        session.select_response(2, 12);
        session.advance();
        // Answer 12 satisfies question 3's condition.
        assert_eq!(session.current_question().unwrap().question_id, 3);

        session.select_response(3, 23);
        session.advance();
        assert_eq!(session.current_question().unwrap().question_id, 4);

        session.select_response(4, 31);
        session.advance();
        assert!(session.at_summary());
        assert!(session.can_save());

        let labels: Vec<Option<&str>> = session
            .summary()
            .iter()
            .map(|entry| entry.response_label)
            .collect();
        assert_eq!(
            labels,
            vec![
                Some("Train"),
                Some("Money saving"),
                Some("Environment protection"),
                Some("Yes"),
            ]
        );

        session.save(&mut store).await.unwrap();
        assert!(session.saved());
        assert!(!session.can_save());

        let saved = store
            .fetch_user_responses(1, USER)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            saved,
            vec![resp(1, 1), resp(2, 12), resp(3, 23), resp(4, 31)]
        );
    }

    #[tokio::test]
    async fn test_advance_at_summary_is_a_no_op() {
        let store = InMemoryQuizStore::new(sample_quiz());
        let mut session = fresh_session(&store).await;

        session.select_response(1, 1);
        session.select_response(2, 11);
        session.select_response(4, 31);
        session.advance();
        session.advance();
        session.advance();
        assert!(session.at_summary());

        let summary = session.position();
        session.advance();
        assert_eq!(session.position(), summary);
    }

    #[tokio::test]
    async fn test_going_back_from_summary_skips_hidden_question() {
        let store = InMemoryQuizStore::new(sample_quiz());
        let mut session = fresh_session(&store).await;

        session.select_response(1, 1);
        session.advance();
        session.select_response(2, 11);
        session.advance();
        session.select_response(4, 31);
        session.advance();
        assert!(session.at_summary());

        session.go_back();
        assert_eq!(session.current_question().unwrap().question_id, 4);
        session.go_back();
        assert_eq!(session.current_question().unwrap().question_id, 2);
    }

    #[tokio::test]
    async fn test_prior_submission_resumes_at_summary() {
        let mut store = InMemoryQuizStore::new(sample_quiz());
        store
            .save_user_responses(1, USER, &[resp(1, 2), resp(2, 11), resp(4, 32)])
            .await
            .unwrap();

        let session = fresh_session(&store).await;

        assert!(session.already_submitted());
        assert!(session.at_summary());
        assert!(session.current_question().is_none());
        assert!(!session.can_go_previous());
        assert!(!session.can_save());

        let labels: Vec<Option<&str>> = session
            .summary()
            .iter()
            .map(|entry| entry.response_label)
            .collect();
        assert_eq!(labels, vec![Some("Bus"), Some("Time saving"), Some("No")]);
    }

    #[tokio::test]
    async fn test_save_twice_is_allowed() {
        let mut store = InMemoryQuizStore::new(sample_quiz());
        let mut session = fresh_session(&store).await;

        session.select_response(1, 1);
        session.save(&mut store).await.unwrap();
        session.save(&mut store).await.unwrap();

        let saved = store.fetch_user_responses(1, USER).await.unwrap().unwrap();
        assert_eq!(saved, vec![resp(1, 1)]);
    }
}
