use serde::Deserialize;

/// A quiz as served by the backend. Immutable once loaded; the order of
/// `questions` defines the position sequence.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub quiz_id: u32,
    pub title: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique within the quiz.
    pub question_id: u32,
    pub question_label: String,
    pub possible_responses: Vec<Response>,
    /// When present, the question is shown only if the referenced
    /// question currently has the referenced answer recorded.
    #[serde(default)]
    pub display_condition: Option<DisplayCondition>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Unique within the question's possible responses.
    pub response_id: u32,
    pub response_label: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayCondition {
    pub question_id: u32,
    pub response_id: u32,
}

impl Question {
    /// Label of one of this question's possible responses.
    pub fn response_label(&self, response_id: u32) -> Option<&str> {
        self.possible_responses
            .iter()
            .find(|resp| resp.response_id == response_id)
            .map(|resp| resp.response_label.as_str())
    }
}
