//! Built-in quiz used when no quiz file is given, and by tests.

use crate::models::{DisplayCondition, Question, Quiz, Response};

fn response(response_id: u32, response_label: &str) -> Response {
    Response {
        response_id,
        response_label: response_label.to_string(),
    }
}

/// The transportation quiz: four questions, the third of which is only
/// shown when question 2 was answered with "Money saving" (response 12).
pub fn sample_quiz() -> Quiz {
    Quiz {
        quiz_id: 1,
        title: "Transportation quiz".to_string(),
        questions: vec![
            Question {
                question_id: 1,
                question_label: "What kind of transportation do you use to come to the office ?"
                    .to_string(),
                possible_responses: vec![
                    response(1, "Train"),
                    response(2, "Bus"),
                    response(3, "Car"),
                    response(4, "Walking"),
                ],
                display_condition: None,
            },
            Question {
                question_id: 2,
                question_label: "Why did you choose this transportation ?".to_string(),
                possible_responses: vec![
                    response(11, "Time saving"),
                    response(12, "Money saving"),
                    response(13, "More safe"),
                    response(14, "Environment protection"),
                    response(15, "No possible alternative"),
                    response(16, "Other reason"),
                ],
                display_condition: None,
            },
            Question {
                question_id: 3,
                question_label: "What can convince you to change transportation ? (Optional exercise)"
                    .to_string(),
                possible_responses: vec![
                    response(21, "Time saving"),
                    response(22, "Money saving"),
                    response(23, "Environment protection"),
                    response(24, "Other reason"),
                ],
                display_condition: Some(DisplayCondition {
                    question_id: 2,
                    response_id: 12,
                }),
            },
            Question {
                question_id: 4,
                question_label: "Do you accept to share your answers with the statistic departement ?"
                    .to_string(),
                possible_responses: vec![response(31, "Yes"), response(32, "No")],
                display_condition: None,
            },
        ],
    }
}
