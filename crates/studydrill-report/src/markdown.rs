//! Markdown report rendering.

use std::path::Path;

use anyhow::Result;

use studydrill_core::report::{RecommendationKind, SessionReport};

/// Render a session report as Markdown.
pub fn render_markdown(report: &SessionReport) -> String {
    let mut md = String::new();

    md.push_str("# studydrill report\n\n");
    md.push_str(&format!(
        "Topics: **{}** | language: {} | mode: {} | {}\n\n",
        report.topics.join(", "),
        report.language,
        report.mode,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    md.push_str(&format!(
        "**Score:** {}/{} ({}%)\n\n",
        report.total_correct, report.total_questions, report.overall_pct
    ));

    if let Some(ms) = report.duration_ms {
        md.push_str(&format!("Duration: {:.1}s\n\n", ms as f64 / 1000.0));
    }

    if !report.per_topic.is_empty() {
        md.push_str("## Per topic\n\n");
        md.push_str("| Topic | Correct | Total | Score |\n");
        md.push_str("|-------|---------|-------|-------|\n");
        for (topic, stats) in &report.per_topic {
            md.push_str(&format!(
                "| {} | {} | {} | {}% |\n",
                topic, stats.correct, stats.total, stats.pct
            ));
        }
        md.push('\n');
    }

    let improve: Vec<_> = report
        .recommendations
        .iter()
        .filter(|r| r.kind == RecommendationKind::Improve)
        .collect();
    let strength: Vec<_> = report
        .recommendations
        .iter()
        .filter(|r| r.kind == RecommendationKind::Strength)
        .collect();

    if !improve.is_empty() {
        md.push_str("## Needs review\n\n");
        for r in improve {
            md.push_str(&format!("- {r}\n"));
        }
        md.push('\n');
    }

    if !strength.is_empty() {
        md.push_str("## Strengths\n\n");
        for r in strength {
            md.push_str(&format!("- {r}\n"));
        }
    }

    md
}

/// Write a Markdown report to a file.
pub fn write_markdown_report(report: &SessionReport, path: &Path) -> Result<()> {
    let md = render_markdown(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, md)?;
    Ok(())
}
