//! Position arithmetic over the question sequence.
//!
//! Positions are dense indices `0..questions.len()`, with `questions.len()`
//! itself the terminal summary position. Both scans consult the answer set
//! to skip questions whose display condition is currently unmet.

use crate::models::Question;

use super::AnswerSet;

/// The terminal position, at which the summary is shown.
pub fn summary_position(questions: &[Question]) -> usize {
    questions.len()
}

/// First visible question after `current`, or the summary position when
/// nothing further is visible. Calling at the summary stays at the summary.
pub fn next_position(questions: &[Question], answers: &AnswerSet, current: usize) -> usize {
    for index in current + 1..questions.len() {
        if answers.can_display(&questions[index]) {
            return index;
        }
    }
    questions.len()
}

/// First visible question before `current`, falling back to `0`. The scan
/// never tests index 0 itself: the first question is taken as the landing
/// spot whether or not its condition holds.
pub fn previous_position(questions: &[Question], answers: &AnswerSet, current: usize) -> usize {
    for index in (1..current).rev() {
        if answers.can_display(&questions[index]) {
            return index;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_quiz;
    use crate::models::{DisplayCondition, Quiz, Response};

    fn answered(quiz: &Quiz, picks: &[(u32, u32)]) -> AnswerSet {
        let mut answers = AnswerSet::new();
        for (question_id, response_id) in picks {
            answers.select(quiz, *question_id, *response_id);
        }
        answers
    }

    #[test]
    fn test_next_skips_hidden_question() {
        let quiz = sample_quiz();
        // Question 3 is gated on answer 12 to question 2; 11 leaves it
        // hidden, even with a stale answer to question 3 still recorded.
        let answers = AnswerSet::from_responses(vec![
            crate::models::UserResponse {
                question_id: 1,
                response_id: 1,
            },
            crate::models::UserResponse {
                question_id: 2,
                response_id: 11,
            },
            crate::models::UserResponse {
                question_id: 3,
                response_id: 23,
            },
        ]);

        assert_eq!(next_position(&quiz.questions, &answers, 1), 3);
    }

    #[test]
    fn test_next_lands_on_visible_gated_question() {
        let quiz = sample_quiz();
        let answers = answered(&quiz, &[(1, 1), (2, 12)]);

        assert_eq!(next_position(&quiz.questions, &answers, 1), 2);
    }

    #[test]
    fn test_next_past_last_question_is_summary() {
        let quiz = sample_quiz();
        let answers = answered(&quiz, &[(1, 1), (2, 11), (4, 31)]);

        assert_eq!(
            next_position(&quiz.questions, &answers, 3),
            summary_position(&quiz.questions)
        );
    }

    #[test]
    fn test_next_at_summary_stays_at_summary() {
        let quiz = sample_quiz();
        let answers = AnswerSet::new();
        let summary = summary_position(&quiz.questions);

        assert_eq!(next_position(&quiz.questions, &answers, summary), summary);
    }

    #[test]
    fn test_previous_skips_hidden_question() {
        let quiz = sample_quiz();
        let answers = answered(&quiz, &[(1, 1), (2, 11), (4, 31)]);

        // From question 4 (index 3), index 2 is hidden, so land on index 1.
        assert_eq!(previous_position(&quiz.questions, &answers, 3), 1);
    }

    #[test]
    fn test_previous_from_first_question_stays_at_zero() {
        let quiz = sample_quiz();
        let answers = AnswerSet::new();

        assert_eq!(previous_position(&quiz.questions, &answers, 0), 0);
    }

    #[test]
    fn test_previous_never_tests_first_question() {
        // A quiz whose first question is gated and unmet: the backward scan
        // still lands on index 0 because it only tests indices above 0.
        let gated_first = Quiz {
            quiz_id: 9,
            title: "Gated first".to_string(),
            questions: vec![
                crate::models::Question {
                    question_id: 1,
                    question_label: "Hidden first".to_string(),
                    possible_responses: vec![Response {
                        response_id: 1,
                        response_label: "Only".to_string(),
                    }],
                    display_condition: Some(DisplayCondition {
                        question_id: 99,
                        response_id: 1,
                    }),
                },
                crate::models::Question {
                    question_id: 2,
                    question_label: "Second".to_string(),
                    possible_responses: vec![Response {
                        response_id: 1,
                        response_label: "Only".to_string(),
                    }],
                    display_condition: None,
                },
            ],
        };
        let answers = AnswerSet::new();

        assert!(!answers.can_display(&gated_first.questions[0]));
        assert_eq!(previous_position(&gated_first.questions, &answers, 1), 0);
    }

    #[test]
    fn test_empty_quiz_summary_is_position_zero() {
        let questions: Vec<Question> = Vec::new();
        let answers = AnswerSet::new();

        assert_eq!(summary_position(&questions), 0);
        assert_eq!(next_position(&questions, &answers, 0), 0);
    }
}
