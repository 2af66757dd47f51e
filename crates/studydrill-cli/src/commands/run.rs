//! The `studydrill run` command: an interactive terminal quiz session.

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;

use studydrill_core::loader::SessionLoader;
use studydrill_core::model::{Question, SessionPhase};
use studydrill_core::report::SessionReport;
use studydrill_core::session::QuizSession;
use studydrill_report::{write_html_report, write_markdown_report};

use super::SelectionArgs;

pub async fn execute(args: SelectionArgs, output: Option<PathBuf>, format: String) -> Result<()> {
    let selection = super::resolve(&args)?;
    let mut rng = super::make_rng(args.seed);

    let loader = SessionLoader::new(selection.source);
    let batch = loader.load(&selection.plan, &mut rng).await;

    for warning in &batch.warnings {
        eprintln!("Warning: {}: {}", warning.topic, warning.message);
    }
    if batch.is_empty() {
        println!("No questions could be generated for the requested topics.");
        return Ok(());
    }

    println!(
        "Starting session: {} questions across {} topic(s). Answer with the prompts; q quits early.",
        batch.questions.len(),
        batch.topics.len()
    );

    let mut session = QuizSession::new(batch.questions);
    session.start(Utc::now())?;

    let stdin = std::io::stdin();
    let mut input = AnswerInput::new(stdin.lock());
    let completed = drive_session(&mut session, &mut input)?;

    let report = SessionReport::from_session(
        &session,
        &batch.topics,
        selection.plan.language,
        selection.plan.mode,
    );
    print_summary(&report, completed);

    let output_dir = output.unwrap_or(selection.output_dir);
    save_artifacts(&report, &output_dir, &format)?;

    Ok(())
}

/// Line reader over stdin (or any `BufRead`) so tests can script answers.
pub struct AnswerInput<R> {
    reader: R,
}

impl<R: BufRead> AnswerInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Next trimmed line; `None` on EOF, which ends the session.
    fn next(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

enum Step {
    Answered(bool),
    Quit,
}

/// Ask every remaining question. Returns `true` when the session ran to
/// completion, `false` on early quit (the report then covers answers so far).
fn drive_session<R: BufRead>(
    session: &mut QuizSession,
    input: &mut AnswerInput<R>,
) -> Result<bool> {
    while session.phase() == SessionPhase::InProgress {
        let Some(question) = session.current_question().cloned() else {
            break;
        };
        let snapshot = session.snapshot();

        println!();
        if let Some(topic) = question.topic() {
            println!("[{}/{}] ({topic})", snapshot.index + 1, snapshot.total);
        } else {
            println!("[{}/{}]", snapshot.index + 1, snapshot.total);
        }

        let step = match &question {
            Question::Flashcard {
                concept,
                text,
                side,
                ..
            } => {
                println!("{concept} — {side}");
                println!("Press Enter to reveal (q to quit)");
                match input.next() {
                    None => Step::Quit,
                    Some(line) if line == "q" => Step::Quit,
                    Some(_) => {
                        session.reveal_answer()?;
                        println!("  {text}");
                        ask_self_grade(input)
                    }
                }
            }
            Question::Choice {
                prompt,
                options,
                correct_answer,
                ..
            } => {
                println!("{prompt}");
                for (i, option) in options.iter().enumerate() {
                    println!("  {}) {}", i + 1, option);
                }
                ask_choice(input, options, correct_answer)
            }
        };

        match step {
            Step::Answered(is_correct) => {
                session.submit_answer(is_correct, Utc::now())?;
            }
            Step::Quit => return Ok(false),
        }
    }
    Ok(true)
}

fn ask_self_grade<R: BufRead>(input: &mut AnswerInput<R>) -> Step {
    println!("Did you get it right? [y/n/q]");
    loop {
        match input.next().as_deref() {
            None | Some("q") => return Step::Quit,
            Some("y") | Some("yes") => return Step::Answered(true),
            Some("n") | Some("no") => return Step::Answered(false),
            Some(_) => println!("Please answer y, n, or q."),
        }
    }
}

fn ask_choice<R: BufRead>(
    input: &mut AnswerInput<R>,
    options: &[String],
    correct_answer: &str,
) -> Step {
    println!("Your answer [1-{}, q to quit]", options.len());
    loop {
        match input.next().as_deref() {
            None | Some("q") => return Step::Quit,
            Some(line) => match line.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => {
                    let is_correct = options[n - 1] == correct_answer;
                    if is_correct {
                        println!("Correct!");
                    } else {
                        println!("Incorrect — the answer was: {correct_answer}");
                    }
                    return Step::Answered(is_correct);
                }
                _ => println!("Please answer a number from 1 to {}.", options.len()),
            },
        }
    }
}

fn print_summary(report: &SessionReport, completed: bool) {
    use comfy_table::{Cell, Table};

    println!();
    if completed {
        println!("Session complete.");
    } else {
        println!("Session ended early — interim results.");
    }

    let mut table = Table::new();
    table.set_header(vec!["Topic", "Correct", "Total", "Score"]);
    for (topic, stats) in &report.per_topic {
        table.add_row(vec![
            Cell::new(topic),
            Cell::new(stats.correct),
            Cell::new(stats.total),
            Cell::new(format!("{}%", stats.pct)),
        ]);
    }
    table.add_row(vec![
        Cell::new("overall"),
        Cell::new(report.total_correct),
        Cell::new(report.total_questions),
        Cell::new(format!("{}%", report.overall_pct)),
    ]);
    println!("{table}");

    for line in report.recommendation_lines() {
        println!("  {line}");
    }
}

fn save_artifacts(report: &SessionReport, output: &std::path::Path, format: &str) -> Result<()> {
    let timestamp = Utc::now().format("%Y-%m-%dT%H%M%S");

    for fmt in format.split(',').map(str::trim) {
        match fmt {
            // The text rendering is the console summary itself.
            "text" | "" => {}
            "json" => {
                let path = output.join(format!("report-{timestamp}.json"));
                report.save_json(&path)?;
                println!("Results saved to: {}", path.display());
            }
            "markdown" => {
                let path = output.join(format!("report-{timestamp}.md"));
                write_markdown_report(report, &path)?;
                println!("Markdown report: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("report-{timestamp}.html"));
                write_html_report(report, &path)?;
                println!("HTML report: {}", path.display());
            }
            other => {
                eprintln!("Unknown format: {other}");
            }
        }
    }
    Ok(())
}
