use crate::models::{Question, Quiz, UserResponse};

/// The answers recorded so far: at most one response per question, kept in
/// the order they were last set. Replacing an answer moves it to the end,
/// and that order is what gets submitted.
#[derive(Debug, Clone, Default)]
pub struct AnswerSet {
    responses: Vec<UserResponse>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the set from a previously saved submission.
    pub fn from_responses(responses: Vec<UserResponse>) -> Self {
        Self { responses }
    }

    /// The recorded response for a question, if any.
    pub fn response_for(&self, question_id: u32) -> Option<u32> {
        self.responses
            .iter()
            .find(|resp| resp.question_id == question_id)
            .map(|resp| resp.response_id)
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// All answers in insertion/update order.
    pub fn as_slice(&self) -> &[UserResponse] {
        &self.responses
    }

    /// Whether a question is currently visible. Unconditional questions
    /// always are; a gated question only while its gating question has
    /// exactly the gating response recorded.
    pub fn can_display(&self, question: &Question) -> bool {
        match &question.display_condition {
            Some(cond) => self.response_for(cond.question_id) == Some(cond.response_id),
            None => true,
        }
    }

    /// Record a response, replacing any previous one for the same question,
    /// then drop the answers of every question gated on it. Dependents are
    /// dropped even when the new response still satisfies their condition,
    /// and only direct dependents are dropped: a question gated on one of
    /// the dropped questions keeps its answer.
    pub fn select(&mut self, quiz: &Quiz, question_id: u32, response_id: u32) {
        self.responses.retain(|resp| resp.question_id != question_id);
        self.responses.push(UserResponse {
            question_id,
            response_id,
        });

        for question in &quiz.questions {
            let gated_on_changed = question
                .display_condition
                .as_ref()
                .is_some_and(|cond| cond.question_id == question_id);
            if gated_on_changed {
                self.responses
                    .retain(|resp| resp.question_id != question.question_id);
            }
        }
    }
}
