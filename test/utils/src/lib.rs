/// Response body from the generation service for a short arithmetic quiz.
pub fn addition_quiz_fixture() -> &'static str {
    return r#"
[
    {
        "id": 1,
        "question": "2+2?",
        "answers": ["3", "4", "5"],
        "correctAnswerIndex": 1
    },
    {
        "id": 2,
        "question": "3+5?",
        "answers": ["8", "9"],
        "correctAnswerIndex": 0
    }
]
"#
    .trim();
}
