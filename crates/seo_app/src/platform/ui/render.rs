use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use seo_core::{AppViewModel, FormField, Phase};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::constants::*;
use super::keys::Focus;
use super::layout::form_layout;

pub fn render(frame: &mut Frame, view: &AppViewModel, focus: Focus) {
    let layout = form_layout(frame.area());

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            APP_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(APP_TAGLINE),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, layout.header);

    let urls = TextInput {
        label: URLS_LABEL,
        placeholder: URLS_PLACEHOLDER,
        text: &view.urls_text,
        focused: focus == Focus::Urls,
        missing: view.missing_field == Some(FormField::Urls),
    };
    let keywords = TextInput {
        label: KEYWORDS_LABEL,
        placeholder: KEYWORDS_PLACEHOLDER,
        text: &view.keywords_text,
        focused: focus == Focus::Keywords,
        missing: view.missing_field == Some(FormField::Keywords),
    };
    urls.render(frame, layout.urls);
    keywords.render(frame, layout.keywords);

    let submit_style = if focus == Focus::Submit {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let submit = Paragraph::new(SUBMIT_LABEL)
        .alignment(Alignment::Center)
        .style(submit_style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(submit, layout.submit);

    let results = Paragraph::new(result_lines(view))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(RESULTS_TITLE),
        );
    frame.render_widget(results, layout.results);

    frame.render_widget(
        Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
        layout.help,
    );
}

fn result_lines(view: &AppViewModel) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(message) = &view.message {
        let color = match view.phase {
            Phase::Failed => Color::Red,
            Phase::Pending => Color::Yellow,
            Phase::Idle | Phase::Succeeded => Color::Reset,
        };
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(color),
        )));
    }
    if let Some(link) = &view.download_link {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{DOWNLOAD_LABEL}: "),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                link.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }
    if let Some(note) = &view.download_note {
        lines.push(Line::from(note.clone()));
    }
    lines
}

struct TextInput<'a> {
    label: &'a str,
    placeholder: &'a str,
    text: &'a str,
    focused: bool,
    missing: bool,
}

impl TextInput<'_> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let title = if self.missing {
            format!("{} - {}", self.label, REQUIRED_HINT)
        } else {
            self.label.to_string()
        };
        let border_style = match (self.missing, self.focused) {
            (true, _) => Style::default().fg(Color::Red),
            (false, true) => Style::default().fg(Color::Yellow),
            (false, false) => Style::default(),
        };
        let inner_width = usize::from(area.width.saturating_sub(2));

        // One column stays free for the caret.
        let visible = visible_tail(self.text, inner_width.saturating_sub(1));
        let content = if self.text.is_empty() && !self.focused {
            Span::styled(self.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(visible.as_str())
        };
        let input = Paragraph::new(Line::from(content)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );
        frame.render_widget(input, area);

        if self.focused && area.width > 2 && area.height > 2 {
            let offset = u16::try_from(visible.width()).unwrap_or(u16::MAX);
            frame.set_cursor_position(Position::new(area.x + 1 + offset, area.y + 1));
        }
    }
}

/// The longest suffix of `text` that fits in `max_width` terminal columns,
/// so the caret end of long input stays visible.
fn visible_tail(text: &str, max_width: usize) -> String {
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let width = ch.width().unwrap_or(0);
        if used + width > max_width {
            break;
        }
        used += width;
        start = idx;
    }
    text[start..].to_string()
}
