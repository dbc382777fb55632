use anyhow::Result;
use mockito::Matcher;
use test_utils::addition_quiz_fixture;

use super::ErrorResponse;
use super::RemoteGenerator;
use crate::domain::models::GenerationError;
use crate::domain::models::Question;
use crate::domain::models::QuizGenerator;

#[tokio::test]
async fn it_generates_from_notes() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/generatefromnotes")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="notes""#.to_string()),
            Matcher::Regex("Addition is commutative".to_string()),
        ]))
        .with_status(200)
        .with_body(addition_quiz_fixture())
        .create();

    let generator = RemoteGenerator::new(&server.url());
    let res = generator
        .generate_from_notes("Addition is commutative")
        .await?;

    mock.assert();
    assert_eq!(
        res,
        vec![
            Question::new(1, "2+2?", &["3", "4", "5"], 1),
            Question::new(2, "3+5?", &["8", "9"], 0),
        ]
    );

    return Ok(());
}

#[tokio::test]
async fn it_generates_from_files() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/generatefromfile")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file"; filename="lecture.txt""#.to_string()),
            Matcher::Regex("(?i)content-type: text/plain".to_string()),
            Matcher::Regex("Plants convert light".to_string()),
        ]))
        .with_status(200)
        .with_body(addition_quiz_fixture())
        .create();

    let generator = RemoteGenerator::new(&format!("{}/", server.url()));
    let res = generator
        .generate_from_file("lecture.txt", b"Plants convert light", "text/plain")
        .await?;

    mock.assert();
    assert_eq!(res.len(), 2);

    return Ok(());
}

#[tokio::test]
async fn it_reports_service_errors() -> Result<()> {
    let body = serde_json::to_string(&ErrorResponse {
        error: "File type not allowed.".to_string(),
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/generatefromfile")
        .with_status(400)
        .with_body(body)
        .create();

    let generator = RemoteGenerator::new(&server.url());
    let res = generator
        .generate_from_file("lecture.txt", b"text", "text/plain")
        .await;

    mock.assert();
    match res {
        Err(GenerationError::HttpStatus { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, Some("File type not allowed.".to_string()));
        }
        _ => panic!("Expected a status error"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_treats_non_200_success_codes_as_failures() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/generatefromnotes")
        .with_status(201)
        .with_body(addition_quiz_fixture())
        .create();

    let generator = RemoteGenerator::new(&server.url());
    let res = generator.generate_from_notes("notes").await;

    mock.assert();
    assert!(matches!(
        res,
        Err(GenerationError::HttpStatus {
            status: 201,
            message: None
        })
    ));
}

#[tokio::test]
async fn it_reports_malformed_responses() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/generatefromnotes")
        .with_status(200)
        .with_body(r#"{"questions": "not a list"}"#)
        .create();

    let generator = RemoteGenerator::new(&server.url());
    let res = generator.generate_from_notes("notes").await;

    mock.assert();
    assert!(matches!(res, Err(GenerationError::Decode(_))));
}

#[tokio::test]
async fn it_reports_invalid_questions() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/generatefromnotes")
        .with_status(200)
        .with_body(r#"[{"id": 5, "question": "2+2?", "answers": ["4"], "correctAnswerIndex": 3}]"#)
        .create();

    let generator = RemoteGenerator::new(&server.url());
    let res = generator.generate_from_notes("notes").await;

    mock.assert();
    assert!(matches!(
        res,
        Err(GenerationError::InvalidQuestion { id: 5, .. })
    ));
}

#[tokio::test]
async fn it_reports_unreachable_services() {
    let generator = RemoteGenerator::new("http://127.0.0.1:1");
    let res = generator.generate_from_notes("notes").await;

    match res {
        Err(err) => {
            assert!(matches!(err, GenerationError::Transport(_)));
            assert!(err.is_request_failure());
        }
        Ok(_) => panic!("Expected a transport error"),
    }
}
