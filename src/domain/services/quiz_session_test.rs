use super::QuizSession;
use super::Score;
use crate::domain::models::Question;

fn addition_quiz() -> Vec<Question> {
    return vec![Question::new(1, "2+2?", &["3", "4", "5"], 1)];
}

#[test]
fn it_starts_empty() {
    let session = QuizSession::default();
    assert!(session.is_empty());
    assert_eq!(session.len(), 0);
    assert_eq!(session.score(), Score::default());
}

#[test]
fn it_clears_selected_answers_on_load() {
    let mut first = Question::new(1, "2+2?", &["3", "4", "5"], 1);
    first.selected_answer = Some(2);
    let mut second = Question::new(2, "3+3?", &["6", "7"], 0);
    second.selected_answer = Some(0);

    let mut session = QuizSession::default();
    session.load(vec![first, second]);

    assert_eq!(session.len(), 2);
    assert!(session
        .questions()
        .iter()
        .all(|e| return e.selected_answer.is_none()));
}

#[test]
fn it_replaces_previous_sessions() {
    let mut session = QuizSession::default();
    session.load(addition_quiz());
    session.select_answer(1, 1);

    session.load(vec![Question::new(9, "Largest planet?", &["Mars", "Jupiter"], 1)]);

    assert_eq!(session.len(), 1);
    assert!(session.question(1).is_none());
    assert!(!session.is_answered(9));
}

#[test]
fn it_marks_correct_answers() {
    let mut session = QuizSession::default();
    session.load(addition_quiz());
    session.select_answer(1, 1);

    assert!(session.is_answered(1));
    assert_eq!(session.is_correct(1), Some(true));
}

#[test]
fn it_marks_incorrect_answers() {
    let mut session = QuizSession::default();
    session.load(addition_quiz());
    session.select_answer(1, 0);

    assert!(session.is_answered(1));
    assert_eq!(session.is_correct(1), Some(false));
}

#[test]
fn it_leaves_correctness_undefined_until_answered() {
    let mut session = QuizSession::default();
    session.load(addition_quiz());

    assert!(!session.is_answered(1));
    assert_eq!(session.is_correct(1), None);
}

#[test]
fn it_ignores_unknown_questions() {
    let mut session = QuizSession::default();
    session.load(addition_quiz());
    let before = session.clone();

    session.select_answer(42, 1);

    assert_eq!(session, before);
    assert!(!session.is_answered(42));
    assert_eq!(session.is_correct(42), None);
}

#[test]
fn it_ignores_out_of_range_answers() {
    let mut session = QuizSession::default();
    session.load(addition_quiz());

    session.select_answer(1, 3);

    assert!(!session.is_answered(1));
}

#[test]
fn it_selects_answers_idempotently() {
    let mut once = QuizSession::default();
    once.load(addition_quiz());
    once.select_answer(1, 2);

    let mut twice = QuizSession::default();
    twice.load(addition_quiz());
    twice.select_answer(1, 2);
    twice.select_answer(1, 2);

    assert_eq!(once, twice);
}

#[test]
fn it_allows_changing_answers() {
    let mut session = QuizSession::default();
    session.load(addition_quiz());

    session.select_answer(1, 0);
    assert_eq!(session.is_correct(1), Some(false));

    session.select_answer(1, 1);
    assert_eq!(session.is_correct(1), Some(true));
}

#[test]
fn it_drops_duplicate_ids() {
    let mut session = QuizSession::default();
    session.load(vec![
        Question::new(1, "2+2?", &["3", "4"], 1),
        Question::new(1, "Duplicate?", &["yes", "no"], 0),
        Question::new(2, "3+3?", &["6", "7"], 0),
    ]);

    assert_eq!(session.len(), 2);
    assert_eq!(session.question(1).unwrap().text, "2+2?");

    session.select_answer(1, 1);
    assert_eq!(session.is_correct(1), Some(true));
}

#[test]
fn it_preserves_question_and_answer_order() {
    let mut session = QuizSession::default();
    session.load(vec![
        Question::new(3, "c", &["z", "y", "x"], 2),
        Question::new(1, "a", &["b", "a"], 1),
    ]);

    let ids = session.questions().iter().map(|e| return e.id).collect::<Vec<i64>>();
    assert_eq!(ids, vec![3, 1]);
    assert_eq!(session.question(3).unwrap().answers, vec!["z", "y", "x"]);
}

#[test]
fn it_scores_sessions() {
    let mut session = QuizSession::default();
    session.load(vec![
        Question::new(1, "2+2?", &["3", "4"], 1),
        Question::new(2, "3+3?", &["6", "7"], 0),
        Question::new(3, "4+4?", &["8", "9"], 0),
    ]);
    session.select_answer(1, 1);
    session.select_answer(2, 1);

    assert_eq!(
        session.score(),
        Score {
            answered: 2,
            correct: 1,
            total: 3,
        }
    );
}
