//! End-to-end tests for the interactive session loop.

mod mocks;

use address_book::cli::{run_session, CommandHandler};
use address_book::{BirthdayWindow, Directory};
use chrono::NaiveDate;
use mocks::MockDirectoryRepository;
use std::io::Cursor;

fn run(input: &str, handler: &mut CommandHandler, repo: &MockDirectoryRepository) -> String {
    let mut output = Vec::new();
    run_session(handler, repo, Cursor::new(input.to_string()), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

fn handler() -> CommandHandler {
    CommandHandler::new(Directory::new(), BirthdayWindow::default())
        .with_reference_date(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap())
}

#[test]
fn test_session_saves_on_exit() {
    let repo = MockDirectoryRepository::new();
    let mut handler = handler();

    let output = run(
        "add Oleh 0932244555\nadd_birthday Oleh 08.06.2000\nbirthdays\nexit\nadd Anna 1\n",
        &mut handler,
        &repo,
    );

    assert!(output.contains("Contact added."));
    assert!(output.contains("Birthday added."));
    assert!(output.contains("Oleh: 10.06.2024"));
    assert!(output.trim_end().ends_with("Bye!"));

    assert_eq!(repo.get_call_count("save"), 1);
    let saved = repo.saved().unwrap();
    assert_eq!(saved.len(), 1);
    assert!(saved.find_record("Anna").is_none());
}

#[test]
fn test_session_saves_on_end_of_input() {
    let repo = MockDirectoryRepository::new();
    let mut handler = handler();

    run("add Oleh 111\n", &mut handler, &repo);

    assert_eq!(repo.get_call_count("save"), 1);
    assert!(repo.saved().unwrap().find_record("oleh").is_some());
}

#[test]
fn test_session_reports_bad_input_and_continues() {
    let repo = MockDirectoryRepository::new();
    let mut handler = handler();

    let output = run("\nfly\nadd Oleh\nall\nquit\n", &mut handler, &repo);

    assert!(output.contains("Please, enter not empty string!"));
    assert!(output.contains("Invalid command 'fly'! Try again..."));
    assert!(output.contains("Example: 'add Oleh 0932244555'"));
    assert!(output.contains("No data exist!"));
    assert!(output.contains("Bye!"));
}

#[test]
fn test_session_prints_welcome_and_prompt() {
    let repo = MockDirectoryRepository::new();
    let mut handler = handler();

    let output = run("hello\n", &mut handler, &repo);

    assert!(output.starts_with("Welcome to the assistant bot!"));
    assert!(output.contains(">>> How can I help you?"));
}
