//! Saved-response types shared between the session and the store.

use serde::{Deserialize, Serialize};

/// A single chosen answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub question_id: u32,
    pub response_id: u32,
}

/// A stored submission: all answers of one user for one quiz, in the
/// order they were last set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponses {
    pub user_email: String,
    pub responses: Vec<UserResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serialization() {
        let resp = UserResponse {
            question_id: 2,
            response_id: 12,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"questionId":2,"responseId":12}"#);

        let back: UserResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resp);
    }
}
