//! The `studydrill preview` command.

use anyhow::Result;

use studydrill_core::loader::SessionLoader;
use studydrill_core::model::Question;

use super::SelectionArgs;

pub async fn execute(args: SelectionArgs) -> Result<()> {
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

    println!("{} questions:", batch.questions.len());
    for question in &batch.questions {
        let kind = match question {
            Question::Flashcard { side, .. } => format!("flashcard/{side}"),
            Question::Choice { .. } => "choice".to_string(),
        };
        let topic = question.topic().unwrap_or("-");
        println!(
            "  [{:>3}] {:<22} {:<16} {}",
            question.id(),
            kind,
            topic,
            question.concept()
        );
    }

    Ok(())
}
