//! The `studydrill topics` command.

use std::path::PathBuf;

use anyhow::Result;

use studydrill_core::model::Language;

pub fn execute(docs: PathBuf, language: Language) -> Result<()> {
    let topics = super::discover_topics(&docs, language)?;

    if topics.is_empty() {
        println!(
            "No documents for language '{language}' in {}. Run `studydrill init` for a starter set.",
            docs.display()
        );
        return Ok(());
    }

    println!("Topics in {} ({language}):", docs.display());
    for topic in &topics {
        println!("  {topic}");
    }

    Ok(())
}
