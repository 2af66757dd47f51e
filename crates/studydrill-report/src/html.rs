//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;

use studydrill_core::report::{RecommendationKind, SessionReport};
use studydrill_core::statistics::TopicStats;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page from a session report.
pub fn generate_html(report: &SessionReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>studydrill report — {}</title>\n",
        html_escape(&report.topics.join(", "))
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>studydrill report</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Topics: <strong>{}</strong> | {} | {} | {}</p>\n",
        html_escape(&report.topics.join(", ")),
        report.language,
        report.mode,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Summary
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Summary</h2>\n");
    let overall_class = score_class(report.overall_pct);
    html.push_str(&format!(
        "<p class=\"score {}\">{} / {} correct ({}%)</p>\n",
        overall_class, report.total_correct, report.total_questions, report.overall_pct
    ));
    if let Some(ms) = report.duration_ms {
        html.push_str(&format!(
            "<p class=\"meta\">Duration: {:.1}s</p>\n",
            ms as f64 / 1000.0
        ));
    }

    if !report.per_topic.is_empty() {
        html.push_str("<table class=\"summary\">\n");
        html.push_str(
            "<thead><tr><th>Topic</th><th>Correct</th><th>Total</th><th>Score</th></tr></thead>\n",
        );
        html.push_str("<tbody>\n");
        for (topic, stats) in &report.per_topic {
            html.push_str(&format!(
                "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}%</td></tr>\n",
                score_class(stats.pct),
                html_escape(topic),
                stats.correct,
                stats.total,
                stats.pct,
            ));
        }
        html.push_str("</tbody></table>\n");
        html.push_str(&generate_bar_chart(&report.per_topic));
    }
    html.push_str("</section>\n");

    // Recommendations
    if !report.recommendations.is_empty() {
        html.push_str("<section class=\"recommendations\">\n");
        html.push_str("<h2>Recommendations</h2>\n<ul>\n");
        for r in &report.recommendations {
            let class = match r.kind {
                RecommendationKind::Improve => "improve",
                RecommendationKind::Strength => "strength",
            };
            html.push_str(&format!(
                "<li class=\"{}\">{}</li>\n",
                class,
                html_escape(&r.to_string())
            ));
        }
        html.push_str("</ul>\n</section>\n");
    }

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &SessionReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn score_class(pct: u8) -> &'static str {
    if pct >= 80 {
        "pass"
    } else if pct >= 70 {
        "mid"
    } else {
        "fail"
    }
}

fn generate_bar_chart(per_topic: &BTreeMap<String, TopicStats>) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 200;

    let total_height = per_topic.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, (topic, stats)) in per_topic.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = stats.pct as usize * max_width / 100;

        let color = if stats.pct >= 80 {
            "#22c55e"
        } else if stats.pct >= 70 {
            "#eab308"
        } else {
            "#ef4444"
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(topic)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{}%</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            stats.pct
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --pass: #dcfce7; --mid: #fef9c3; --fail: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --mid: #713f12; --fail: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.score { font-size: 1.5rem; font-weight: bold; padding: 0.5rem 1rem; border-radius: 8px; display: inline-block; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.pass { background: var(--pass); }
.mid { background: var(--mid); }
.fail { background: var(--fail); }
li.improve { color: #ef4444; }
li.strength { color: #22c55e; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;
