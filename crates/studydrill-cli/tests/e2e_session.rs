//! End-to-end scripted quiz sessions against a tempdir document corpus.
//!
//! These tests drive the full pipeline (fetch → parse → generate → session →
//! report) through the binary, piping answers over stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn studydrill() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("studydrill").unwrap()
}

const RUST_DOC: &str = r#"## Ownership
**Description:** Every value has a single owner.

## Borrowing
**Description:** Temporary access without ownership.
"#;

const ALGEBRA_DOC: &str = r#"## Groups
**Description:** A set with an associative operation.

## Rings
**Description:** A group with a second distributive operation.
"#;

const CHOICE_DOC: &str = r#"## X
**Description:** d1

## Y
**Description:** d2

## Z
**Description:** d3

## W
**Description:** d4
"#;

fn corpus() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("rust-en.md"), RUST_DOC).unwrap();
    std::fs::write(dir.path().join("algebra-en.md"), ALGEBRA_DOC).unwrap();
    std::fs::write(dir.path().join("shapes-en.md"), CHOICE_DOC).unwrap();
    dir
}

fn artifact_count(dir: &std::path::Path, ext: &str) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .filter(|e| e.path().extension().is_some_and(|x| x == ext))
                .count()
        })
        .unwrap_or(0)
}

#[test]
fn mixed_topic_flashcard_session_produces_artifacts() {
    let docs = corpus();
    let output = TempDir::new().unwrap();

    // 2 topics x 2 description flashcards; reveal + "y" for each.
    studydrill()
        .arg("run")
        .arg("--topics")
        .arg("rust,algebra")
        .arg("--docs")
        .arg(docs.path())
        .arg("--kinds")
        .arg("flashcard")
        .arg("--mode")
        .arg("sequential")
        .arg("--seed")
        .arg("3")
        .arg("--output")
        .arg(output.path())
        .arg("--format")
        .arg("json,markdown,html")
        .write_stdin("\ny\n\ny\n\ny\n\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session complete."))
        .stdout(predicate::str::contains("rust"))
        .stdout(predicate::str::contains("algebra"))
        .stdout(predicate::str::contains("100%"))
        .stdout(predicate::str::contains("Strength"));

    assert_eq!(artifact_count(output.path(), "json"), 1);
    assert_eq!(artifact_count(output.path(), "md"), 1);
    assert_eq!(artifact_count(output.path(), "html"), 1);
}

#[test]
fn weak_topic_is_flagged_for_review() {
    let docs = corpus();

    // rust answered wrong, algebra answered right.
    studydrill()
        .arg("run")
        .arg("--topics")
        .arg("rust,algebra")
        .arg("--docs")
        .arg(docs.path())
        .arg("--kinds")
        .arg("flashcard")
        .arg("--mode")
        .arg("sequential")
        .arg("--seed")
        .arg("5")
        .write_stdin("\nn\n\nn\n\ny\n\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Review rust (0%)"))
        .stdout(predicate::str::contains("Strength: algebra (100%)"));
}

#[test]
fn quit_early_yields_an_interim_report() {
    let docs = corpus();

    studydrill()
        .arg("run")
        .arg("--topics")
        .arg("rust")
        .arg("--docs")
        .arg(docs.path())
        .arg("--kinds")
        .arg("flashcard")
        .arg("--seed")
        .arg("1")
        .write_stdin("\ny\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session ended early"))
        .stdout(predicate::str::contains("overall"));
}

#[test]
fn stdin_eof_ends_the_session_gracefully() {
    let docs = corpus();

    studydrill()
        .arg("run")
        .arg("--topics")
        .arg("rust")
        .arg("--docs")
        .arg(docs.path())
        .arg("--kinds")
        .arg("flashcard")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session ended early"));
}

#[test]
fn choice_session_presents_four_options() {
    let docs = corpus();

    // 4 concepts, each with exactly 3 distractors available.
    studydrill()
        .arg("run")
        .arg("--topics")
        .arg("shapes")
        .arg("--docs")
        .arg(docs.path())
        .arg("--kinds")
        .arg("choice")
        .arg("--seed")
        .arg("7")
        .write_stdin("1\n1\n1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session complete."))
        .stdout(predicate::str::contains("  1) "))
        .stdout(predicate::str::contains("  4) "));
}

#[test]
fn missing_topic_is_a_zero_state_not_a_crash() {
    let docs = corpus();

    studydrill()
        .arg("run")
        .arg("--topics")
        .arg("ghost")
        .arg("--docs")
        .arg(docs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No questions could be generated"))
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn single_topic_report_shows_overall_score_only() {
    let docs = corpus();

    studydrill()
        .arg("run")
        .arg("--topics")
        .arg("rust")
        .arg("--docs")
        .arg(docs.path())
        .arg("--kinds")
        .arg("flashcard")
        .arg("--seed")
        .arg("2")
        .write_stdin("\ny\n\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session complete."))
        .stdout(predicate::str::contains("overall"))
        .stdout(predicate::str::contains("50%"));
}
