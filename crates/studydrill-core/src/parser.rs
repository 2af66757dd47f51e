//! Study document parser.
//!
//! Converts the markdown-like study document format into [`Concept`]s:
//! `## ` headers open concept sections, bold `**Description:**` /
//! `**Comparison:**` / `**Example:**` labels (English or Spanish, any mix)
//! route the following text. The parser is a forgiving line scanner — it
//! never fails, and unrecognized input is dropped rather than reported.
//! [`inspect_document`] produces the author-facing diagnostics instead.

use crate::model::{CardSide, Concept};

const DESCRIPTION_LABELS: &[&str] = &["description:", "descripción:", "descripcion:"];
const COMPARISON_LABELS: &[&str] = &["comparison:", "comparación:", "comparacion:"];
const EXAMPLE_LABELS: &[&str] = &["example:", "ejemplo:"];

/// What a bold label routes the following text into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LabelKind {
    Description,
    Comparison,
    Example,
}

/// Find a bold `**Label:**` span in a line.
///
/// Returns the label kind and the remainder of the line after the closing
/// `**`. Labels are matched case-insensitively; a bold span that is not a
/// known label makes the whole line plain content.
fn match_label(line: &str) -> Option<(LabelKind, &str)> {
    let open = line.find("**")?;
    let rest = &line[open + 2..];
    let close = rest.find("**")?;
    let candidate = rest[..close].trim().to_lowercase();
    let remainder = &rest[close + 2..];

    let kind = if DESCRIPTION_LABELS.contains(&candidate.as_str()) {
        LabelKind::Description
    } else if COMPARISON_LABELS.contains(&candidate.as_str()) {
        LabelKind::Comparison
    } else if EXAMPLE_LABELS.contains(&candidate.as_str()) {
        LabelKind::Example
    } else {
        return None;
    };
    Some((kind, remainder))
}

/// One `## ` section as scanned, before the description-required filter.
#[derive(Debug, Default)]
struct RawSection {
    name: String,
    description: String,
    comparison: String,
    saw_example: bool,
    saw_field_label: bool,
}

impl RawSection {
    fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            ..Default::default()
        }
    }

    /// Append a trimmed, non-empty piece to the given buffer, space-joined.
    fn append(&mut self, side: CardSide, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let buffer = match side {
            CardSide::Description => &mut self.description,
            CardSide::Comparison => &mut self.comparison,
        };
        if !buffer.is_empty() {
            buffer.push(' ');
        }
        buffer.push_str(text);
    }
}

/// Scan every `## ` section of a document, keeping even description-less
/// ones so diagnostics can see them.
fn scan_sections(text: &str) -> Vec<RawSection> {
    let mut sections: Vec<RawSection> = Vec::new();
    let mut current: Option<RawSection> = None;
    // Which buffer plain lines flow into; `None` before the first label and
    // after an Example label.
    let mut active: Option<CardSide> = None;

    for line in text.lines() {
        if let Some(header) = line.strip_prefix("## ") {
            if let Some(done) = current.take() {
                sections.push(done);
            }
            current = Some(RawSection::new(header));
            active = None;
            continue;
        }

        let Some(section) = current.as_mut() else {
            // Content before the first header has nowhere to go.
            continue;
        };

        // Fence markers are dropped; the lines between them follow the
        // normal routing rules.
        if line.trim_start().starts_with("```") {
            continue;
        }

        if let Some((kind, remainder)) = match_label(line) {
            match kind {
                LabelKind::Description => {
                    section.saw_field_label = true;
                    active = Some(CardSide::Description);
                    section.append(CardSide::Description, remainder);
                }
                LabelKind::Comparison => {
                    section.saw_field_label = true;
                    active = Some(CardSide::Comparison);
                    section.append(CardSide::Comparison, remainder);
                }
                LabelKind::Example => {
                    section.saw_example = true;
                    active = None;
                }
            }
            continue;
        }

        if let Some(side) = active {
            section.append(side, line);
        }
    }

    if let Some(done) = current.take() {
        sections.push(done);
    }
    sections
}

/// Parse a study document into concepts, in document order.
///
/// Never fails: empty or unrecognizable input yields an empty vector.
/// Sections without a description are dropped.
pub fn parse_document(text: &str) -> Vec<Concept> {
    scan_sections(text)
        .into_iter()
        .filter(|s| !s.description.is_empty())
        .map(|s| Concept {
            name: s.name,
            description: s.description,
            comparison: s.comparison,
        })
        .collect()
}

/// A non-fatal finding from document inspection.
#[derive(Debug, Clone)]
pub struct DocumentWarning {
    /// The concept name (if the warning concerns a single section).
    pub concept: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Inspect a document for common authoring mistakes.
///
/// Parsing stays silent about these: the quiz pipeline treats them as
/// missing content. The `validate` command surfaces them to authors.
pub fn inspect_document(text: &str) -> Vec<DocumentWarning> {
    let sections = scan_sections(text);
    let mut warnings = Vec::new();

    for section in &sections {
        if section.description.is_empty() {
            warnings.push(DocumentWarning {
                concept: Some(section.name.clone()),
                message: "no description; section will be dropped".into(),
            });
        }
        if section.saw_example && !section.saw_field_label {
            warnings.push(DocumentWarning {
                concept: Some(section.name.clone()),
                message: "has an example but no description or comparison label".into(),
            });
        }
    }

    // Duplicate names among the sections that actually become concepts
    let mut seen = std::collections::HashSet::new();
    for section in &sections {
        if section.description.is_empty() {
            continue;
        }
        if !seen.insert(section.name.as_str()) {
            warnings.push(DocumentWarning {
                concept: Some(section.name.clone()),
                message: format!("duplicate concept name: {}", section.name),
            });
        }
    }

    warnings
}
