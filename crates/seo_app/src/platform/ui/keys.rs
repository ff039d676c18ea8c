use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use seo_core::{AppViewModel, Msg};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Urls,
    Keywords,
    Submit,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Urls => Focus::Keywords,
            Focus::Keywords => Focus::Submit,
            Focus::Submit => Focus::Urls,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Urls => Focus::Submit,
            Focus::Keywords => Focus::Urls,
            Focus::Submit => Focus::Keywords,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Focus(Focus),
    Send(Msg),
    Ignore,
}

pub fn map_key(key: KeyEvent, focus: Focus, view: &AppViewModel) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('d') if ctrl => KeyAction::Send(Msg::DownloadClicked),
        KeyCode::Tab | KeyCode::Down => KeyAction::Focus(focus.next()),
        KeyCode::BackTab | KeyCode::Up => KeyAction::Focus(focus.prev()),
        // Enter submits from any field, like a form.
        KeyCode::Enter => KeyAction::Send(Msg::SubmitClicked),
        KeyCode::Char(' ') if focus == Focus::Submit => KeyAction::Send(Msg::SubmitClicked),
        KeyCode::Backspace => edit(focus, view, |text| {
            text.pop();
        }),
        KeyCode::Char(ch) if !ctrl => edit(focus, view, |text| text.push(ch)),
        _ => KeyAction::Ignore,
    }
}

/// Pasted text goes into the focused field as one edit; line breaks are
/// dropped, as a single-line input does, so a paste never submits.
pub fn map_paste(text: &str, focus: Focus, view: &AppViewModel) -> KeyAction {
    let single_line: String = text
        .chars()
        .filter(|ch| !matches!(ch, '\r' | '\n'))
        .collect();
    if single_line.is_empty() {
        return KeyAction::Ignore;
    }
    edit(focus, view, |field| field.push_str(&single_line))
}

fn edit(focus: Focus, view: &AppViewModel, apply: impl FnOnce(&mut String)) -> KeyAction {
    match focus {
        Focus::Urls => {
            let mut text = view.urls_text.clone();
            apply(&mut text);
            KeyAction::Send(Msg::UrlsChanged(text))
        }
        Focus::Keywords => {
            let mut text = view.keywords_text.clone();
            apply(&mut text);
            KeyAction::Send(Msg::KeywordsChanged(text))
        }
        Focus::Submit => KeyAction::Ignore,
    }
}
