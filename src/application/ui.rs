#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::env;
use std::path;

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use dialoguer::Editor;
use dialoguer::Input;
use dialoguer::Select;
use strum::IntoEnumIterator;
use yansi::Paint;

use crate::application::cli;
use crate::domain::models::FileUpload;
use crate::domain::models::GenerationMethod;
use crate::domain::models::Question;
use crate::domain::models::NOTES_MAX_LENGTH;
use crate::domain::services::AppState;
use crate::domain::services::QuizSession;
use crate::domain::services::Score;
use crate::infrastructure::generators::remote::RemoteGenerator;

fn answer_label(idx: usize) -> String {
    let letter = (b'a' + (idx % 26) as u8) as char;
    return format!("{letter})");
}

pub fn format_question(question: &Question, number: usize) -> String {
    let mut lines = vec![format!("{number}. {}", question.text)];
    for (idx, answer) in question.answers.iter().enumerate() {
        lines.push(format!("   {} {answer}", answer_label(idx)));
    }

    return lines.join("\n");
}

/// Plain text rendering of a quiz including its answer key.
pub fn format_quiz(questions: &[Question]) -> String {
    if questions.is_empty() {
        return "No questions were generated.".to_string();
    }

    return questions
        .iter()
        .enumerate()
        .map(|(idx, question)| {
            let correct = question
                .answers
                .get(question.correct_answer_index)
                .map(|e| return e.as_str())
                .unwrap_or_default();
            return format!(
                "{}\n   Answer: {} {correct}",
                format_question(question, idx + 1),
                answer_label(question.correct_answer_index)
            );
        })
        .collect::<Vec<String>>()
        .join("\n\n");
}

pub fn format_feedback(is_correct: Option<bool>) -> Option<&'static str> {
    match is_correct {
        Some(true) => return Some("Correct"),
        Some(false) => return Some("Incorrect. Try Again."),
        None => return None,
    }
}

pub fn format_character_count(notes: &str) -> String {
    return format!("{} / {NOTES_MAX_LENGTH}", notes.chars().count());
}

pub fn format_score(score: &Score) -> String {
    return format!(
        "You answered {} of {} questions, {} correct.",
        score.answered, score.total, score.correct
    );
}

fn select_method(theme: &ColorfulTheme) -> Result<Option<GenerationMethod>> {
    let methods = GenerationMethod::iter().collect::<Vec<GenerationMethod>>();
    let mut items = methods
        .iter()
        .map(|method| return format!("{} - {}", method.title(), method.description()))
        .collect::<Vec<String>>();
    items.push("Quit".to_string());

    let idx = Select::with_theme(theme)
        .with_prompt("How would you like to generate your quiz?")
        .default(0)
        .items(&items)
        .interact_opt()?;

    return Ok(idx.and_then(|idx| return methods.get(idx).copied()));
}

fn prompt_notes(theme: &ColorfulTheme, current: &str) -> Result<String> {
    if env::var("VISUAL").is_ok() || env::var("EDITOR").is_ok() {
        let notes = Editor::new().edit(current)?;
        return Ok(notes.unwrap_or_default());
    }

    let notes = Input::<String>::with_theme(theme)
        .with_prompt("Enter notes")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;

    return Ok(notes);
}

fn prompt_file(theme: &ColorfulTheme) -> Result<String> {
    let file_path = Input::<String>::with_theme(theme)
        .with_prompt("Path to a .txt or .pdf file")
        .interact_text()?;

    return Ok(file_path);
}

fn take_quiz(theme: &ColorfulTheme, session: &mut QuizSession) -> Result<()> {
    let questions = session.questions().to_vec();

    println!("\n{}", Paint::new("Generated Questions").bold().underline());
    for (idx, question) in questions.iter().enumerate() {
        println!("\n{}", Paint::new(format!("{}. {}", idx + 1, question.text)).bold());

        let mut items = question.answers.clone();
        items.push("Skip".to_string());

        loop {
            let selection = Select::with_theme(theme)
                .default(0)
                .items(&items)
                .interact_opt()?;

            let answer_index = match selection {
                Some(answer_index) if answer_index < question.answers.len() => answer_index,
                _ => break,
            };

            session.select_answer(question.id, answer_index);
            let is_correct = session.is_correct(question.id);
            match format_feedback(is_correct) {
                Some(feedback) if is_correct == Some(true) => {
                    println!("{}", Paint::green(feedback));
                    break;
                }
                Some(feedback) => println!("{}", Paint::red(feedback)),
                None => break,
            }
        }
    }

    println!("\n{}", Paint::new(format_score(&session.score())).bold());
    return Ok(());
}

/// Runs the interactive form: pick a method, provide notes or a file,
/// generate, then answer the questions.
pub async fn start() -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut app_state = AppState::new(Box::<RemoteGenerator>::default());

    println!("{}", Paint::new("QuizGen").bold());

    loop {
        let method = match select_method(&theme)? {
            Some(method) => method,
            None => return Ok(()),
        };
        app_state.controller.select_method(method);

        match method {
            GenerationMethod::Notes => {
                let notes = prompt_notes(&theme, app_state.controller.notes())?;
                app_state.controller.set_notes(&notes);
                println!(
                    "{}",
                    Paint::new(format_character_count(app_state.controller.notes())).dimmed()
                );
            }
            GenerationMethod::File => {
                let file_path = prompt_file(&theme)?;
                match FileUpload::from_path(path::Path::new(file_path.trim())).await {
                    Ok(upload) => {
                        app_state.controller.set_file(upload);
                        if let Some(file) = app_state.controller.file() {
                            println!("{}", Paint::new(format!("Selected {}", file.filename)).dimmed());
                        }
                    }
                    Err(err) => {
                        tracing::error!(error = ?err, file_path = file_path, "Failed to read upload");
                        println!("{}", Paint::red(format!("Could not read {file_path}: {err}")));
                        continue;
                    }
                }
            }
        }

        println!("{}", Paint::yellow("Generating quiz..."));
        if let Err(err) = app_state.generate().await {
            if err.is_request_failure() {
                println!(
                    "{}",
                    Paint::new(format!("Run with RUST_LOG=quizgen to write debug logs to {}", cli::log_dir().join("debug.log").to_string_lossy())).dimmed()
                );
            }
            println!("{}", Paint::red(err.to_string()));
            continue;
        }

        take_quiz(&theme, &mut app_state.session)?;

        let again = Confirm::with_theme(&theme)
            .with_prompt("Generate another quiz?")
            .default(true)
            .interact()?;
        if !again {
            return Ok(());
        }
    }
}
