//! Terminal backend: maps the presentation tree to ratatui text and shows it
//! in a scrollable full-screen view.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use handoff_notes_engine::{Element, RenderedNotes, Run, SizeTier};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::{Stdout, stdout};

const DIVIDER_WIDTH: usize = 24;

/// Terminals have one font size, so heading tiers differ by decoration.
fn heading_style(size: SizeTier) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match size {
        SizeTier::Large => style.fg(Color::Yellow).add_modifier(Modifier::UNDERLINED),
        SizeTier::Medium => style.fg(Color::Yellow),
        SizeTier::Small => style,
    }
}

fn code_style(base: Style) -> Style {
    base.fg(Color::Cyan).bg(Color::Black)
}

/// Maps rendered notes to styled terminal text, one line per block or item.
pub fn to_text(notes: &RenderedNotes) -> Text<'static> {
    let mut lines = vec![Line::from(Span::styled(
        notes.label.to_uppercase(),
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
    ))];

    for element in &notes.elements {
        match element {
            Element::Heading { size, runs, .. } => {
                lines.push(Line::from(spans(runs, heading_style(*size))));
            }
            Element::TextBlock { runs } => lines.push(Line::from(spans(runs, Style::default()))),
            Element::BulletList { items } => {
                lines.extend(items.iter().map(|item| list_line("  • ".to_string(), item)));
            }
            Element::NumberedList { items } => {
                lines.extend(
                    items
                        .iter()
                        .enumerate()
                        .map(|(i, item)| list_line(format!("  {}. ", i + 1), item)),
                );
            }
            Element::Divider => lines.push(Line::from(Span::styled(
                "─".repeat(DIVIDER_WIDTH),
                Style::default().fg(Color::DarkGray),
            ))),
            Element::Spacer { .. } => lines.push(Line::default()),
        }
    }

    Text::from(lines)
}

fn list_line(marker: String, item: &[Run]) -> Line<'static> {
    let mut line = vec![Span::raw(marker)];
    line.extend(spans(item, Style::default()));
    Line::from(line)
}

fn spans(runs: &[Run], style: Style) -> Vec<Span<'static>> {
    let mut out = vec![];
    push_spans(&mut out, runs, style);
    out
}

fn push_spans(out: &mut Vec<Span<'static>>, runs: &[Run], style: Style) {
    for run in runs {
        match run {
            Run::Plain(s) => out.push(Span::styled(s.clone(), style)),
            Run::Bold(children) => push_spans(out, children, style.add_modifier(Modifier::BOLD)),
            Run::Italic(children) => {
                push_spans(out, children, style.add_modifier(Modifier::ITALIC))
            }
            Run::Monospace(s) => out.push(Span::styled(s.clone(), code_style(style))),
        }
    }
}

struct Viewer {
    title: String,
    text: Text<'static>,
    scroll: u16,
}

impl Viewer {
    fn max_scroll(&self) -> u16 {
        u16::try_from(self.text.lines.len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    fn scroll_down(&mut self, n: u16) {
        self.scroll = self.scroll.saturating_add(n).min(self.max_scroll());
    }

    fn scroll_up(&mut self, n: u16) {
        self.scroll = self.scroll.saturating_sub(n);
    }
}

/// Shows `text` full-screen until the user quits.
pub fn run(title: &str, text: Text<'static>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut viewer = Viewer {
        title: title.to_string(),
        text,
        scroll: 0,
    };
    let res = run_viewer(&mut terminal, &mut viewer);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_viewer(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    viewer: &mut Viewer,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, viewer))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => viewer.scroll_down(1),
                KeyCode::Up | KeyCode::Char('k') => viewer.scroll_up(1),
                KeyCode::PageDown | KeyCode::Char(' ') => viewer.scroll_down(10),
                KeyCode::PageUp => viewer.scroll_up(10),
                KeyCode::Home | KeyCode::Char('g') => viewer.scroll = 0,
                KeyCode::End | KeyCode::Char('G') => viewer.scroll = viewer.max_scroll(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, viewer: &Viewer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let content = Paragraph::new(viewer.text.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(viewer.title.as_str()),
        )
        .wrap(Wrap { trim: false })
        .scroll((viewer.scroll, 0));
    f.render_widget(content, chunks[0]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Up | "),
        Span::raw("↓/j: Down | "),
        Span::raw("PgUp/PgDn: Page | g/G: Top/Bottom"),
    ]);
    f.render_widget(Paragraph::new(help), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use handoff_notes_engine::{Theme, render_notes};

    fn rendered(notes: &str) -> Text<'static> {
        to_text(&render_notes(Some(notes), &Theme::default()))
    }

    #[test]
    fn label_line_comes_first() {
        let text = rendered("");
        assert_eq!(text.lines.len(), 1);
        assert_eq!(text.lines[0].spans[0].content, "HANDOFF NOTES");
    }

    #[test]
    fn runs_carry_inline_styles() {
        let text = rendered("**a** _b_ `c`");
        let spans = &text.lines[1].spans;

        assert_eq!(spans[0].content, "a");
        assert!(spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(spans[2].content, "b");
        assert!(spans[2].style.add_modifier.contains(Modifier::ITALIC));
        assert_eq!(spans[4].content, "c");
        assert_eq!(spans[4].style.bg, Some(Color::Black));
    }

    #[test]
    fn nested_runs_combine_styles() {
        let text = rendered("**bold _both_**");
        let both = &text.lines[1].spans[1];

        assert_eq!(both.content, "both");
        assert!(both.style.add_modifier.contains(Modifier::BOLD | Modifier::ITALIC));
    }

    #[test]
    fn list_items_get_markers() {
        let text = rendered("1. a\n2. b\n- c");
        let markers: Vec<_> = text.lines[1..]
            .iter()
            .map(|line| line.spans[0].content.to_string())
            .collect();

        assert_eq!(markers, vec!["  1. ", "  2. ", "  • "]);
    }

    #[test]
    fn heading_tiers_are_distinct() {
        let styles = [SizeTier::Large, SizeTier::Medium, SizeTier::Small].map(heading_style);

        assert_ne!(styles[0], styles[1]);
        assert_ne!(styles[1], styles[2]);
    }

    #[test]
    fn scroll_is_clamped() {
        let mut viewer = Viewer {
            title: String::new(),
            text: rendered("a\nb"),
            scroll: 0,
        };

        viewer.scroll_down(10);
        assert_eq!(viewer.scroll, 2);
        viewer.scroll_up(10);
        assert_eq!(viewer.scroll, 0);
    }
}
