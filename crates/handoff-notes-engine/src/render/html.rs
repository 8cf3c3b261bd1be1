//! HTML backend: one element per line, inline styles taken from the [`Theme`].

use html_escape::encode_text;

use super::{Element, RenderedNotes, Run, style::Theme};

/// Renders the notes as an HTML fragment. All text content is escaped.
pub fn to_html(notes: &RenderedNotes, theme: &Theme) -> String {
    let mut out = format!(
        "<div class=\"handoff-notes\" style=\"font-size:{}px\">\n",
        theme.font_size
    );
    out.push_str(&format!(
        "<div class=\"handoff-notes-label\">{}</div>\n",
        encode_text(&notes.label)
    ));

    for element in &notes.elements {
        write_element(&mut out, element, theme);
    }

    out.push_str("</div>\n");
    out
}

fn write_element(out: &mut String, element: &Element, theme: &Theme) {
    match element {
        Element::Heading { level, size, runs } => {
            out.push_str(&format!(
                "<div class=\"handoff-heading level-{level}\" style=\"font-size:{}px\">",
                theme.heading_px(*size)
            ));
            write_runs(out, runs, theme);
            out.push_str("</div>\n");
        }
        Element::TextBlock { runs } => {
            out.push_str("<p>");
            write_runs(out, runs, theme);
            out.push_str("</p>\n");
        }
        Element::BulletList { items } => write_list(out, "ul", items, theme),
        Element::NumberedList { items } => write_list(out, "ol", items, theme),
        Element::Divider => out.push_str("<hr>\n"),
        Element::Spacer { height } => out.push_str(&format!(
            "<div class=\"handoff-spacer\" style=\"height:{height}px\"></div>\n"
        )),
    }
}

fn write_list(out: &mut String, tag: &str, items: &[Vec<Run>], theme: &Theme) {
    out.push_str(&format!("<{tag}>\n"));
    for item in items {
        out.push_str("<li>");
        write_runs(out, item, theme);
        out.push_str("</li>\n");
    }
    out.push_str(&format!("</{tag}>\n"));
}

fn write_runs(out: &mut String, runs: &[Run], theme: &Theme) {
    for run in runs {
        match run {
            Run::Plain(s) => out.push_str(&encode_text(s)),
            Run::Bold(children) => {
                out.push_str("<strong>");
                write_runs(out, children, theme);
                out.push_str("</strong>");
            }
            Run::Italic(children) => {
                out.push_str("<em>");
                write_runs(out, children, theme);
                out.push_str("</em>");
            }
            Run::Monospace(s) => out.push_str(&format!(
                "<code style=\"font-size:{}px\">{}</code>",
                theme.code_font_size,
                encode_text(s)
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_notes;

    #[test]
    fn escapes_text_content() {
        let theme = Theme::default();
        let html = to_html(&render_notes(Some("BP <90 & `a<b`"), &theme), &theme);
        assert!(html.contains("<p>BP &lt;90 &amp; <code style=\"font-size:12px\">a&lt;b</code></p>"));
    }

    #[test]
    fn empty_notes_keep_label() {
        let theme = Theme::default();
        let html = to_html(&render_notes(None, &theme), &theme);
        assert_eq!(
            html,
            "<div class=\"handoff-notes\" style=\"font-size:14px\">\n\
             <div class=\"handoff-notes-label\">Handoff Notes</div>\n\
             </div>\n"
        );
    }
}
