//! Plain-text backend for terminals without styling and for logs.

use super::{Element, RenderedNotes, Run};

const DIVIDER_WIDTH: usize = 24;

/// Renders the notes as plain text with markup removed.
///
/// The label is upper-cased, level 1 and 2 headings are underlined with `=`
/// and `-`, bullets become `•` and numbered items count from 1.
pub fn to_plain_text(notes: &RenderedNotes) -> String {
    let mut lines = vec![notes.label.to_uppercase()];

    for element in &notes.elements {
        match element {
            Element::Heading { level, runs, .. } => {
                let text = runs_text(runs);
                let underline = match level {
                    1 => Some('='),
                    2 => Some('-'),
                    _ => None,
                };
                let width = text.chars().count();
                lines.push(text);
                if let Some(c) = underline {
                    lines.push(c.to_string().repeat(width));
                }
            }
            Element::TextBlock { runs } => lines.push(runs_text(runs)),
            Element::BulletList { items } => {
                lines.extend(items.iter().map(|item| format!("• {}", runs_text(item))));
            }
            Element::NumberedList { items } => {
                lines.extend(
                    items
                        .iter()
                        .enumerate()
                        .map(|(i, item)| format!("{}. {}", i + 1, runs_text(item))),
                );
            }
            Element::Divider => lines.push("─".repeat(DIVIDER_WIDTH)),
            Element::Spacer { .. } => lines.push(String::new()),
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Flattens runs to their text.
pub fn runs_text(runs: &[Run]) -> String {
    let mut buf = String::new();
    push_runs(&mut buf, runs);
    buf
}

fn push_runs(buf: &mut String, runs: &[Run]) {
    for run in runs {
        match run {
            Run::Plain(s) | Run::Monospace(s) => buf.push_str(s),
            Run::Bold(children) | Run::Italic(children) => push_runs(buf, children),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render_notes, style::Theme};

    #[test]
    fn level_three_heading_has_no_underline() {
        let text = to_plain_text(&render_notes(Some("### Plan"), &Theme::default()));
        assert_eq!(text, "HANDOFF NOTES\nPlan\n");
    }

    #[test]
    fn underline_matches_char_count() {
        let text = to_plain_text(&render_notes(Some("## Évaluation"), &Theme::default()));
        assert_eq!(text, "HANDOFF NOTES\nÉvaluation\n----------\n");
    }
}
