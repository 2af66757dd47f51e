//! The `studydrill validate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use studydrill_core::model::Language;
use studydrill_core::parser::{inspect_document, parse_document};

pub fn execute(docs: PathBuf, topics: Option<String>, language: Language) -> Result<()> {
    let topics = match topics {
        Some(raw) => super::parse_topics(&raw)?,
        None => super::discover_topics(&docs, language)?,
    };
    anyhow::ensure!(
        !topics.is_empty(),
        "no documents matching *-{language}.md in {}",
        docs.display()
    );

    let mut total_warnings = 0;

    for topic in &topics {
        let path = docs.join(format!("{topic}-{language}.md"));
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let concepts = parse_document(&text);
        println!("{topic}-{language}: {} concepts", concepts.len());

        let warnings = inspect_document(&text);
        for w in &warnings {
            let prefix = w
                .concept
                .as_ref()
                .map(|c| format!("  [{c}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All documents parsed cleanly.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
