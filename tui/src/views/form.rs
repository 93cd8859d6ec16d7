//! Puzzle options and content input.

use crate::{App, AppView, preferences::Preferences};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lexigrid_providers::{Difficulty, GenerateRequest, InputSource, Language, WordCount};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::path::Path;

/// Longest accepted puzzle text, in characters.
pub const MAX_CHARS: usize = 8000;

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    Language,
    WordCount,
    Difficulty,
    Source,
    #[default]
    Content,
    Submit,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Language,
        FormField::WordCount,
        FormField::Difficulty,
        FormField::Source,
        FormField::Content,
        FormField::Submit,
    ];

    fn next(self) -> Self {
        let i = FormField::ALL.iter().position(|f| *f == self).unwrap_or(0);
        FormField::ALL[(i + 1) % FormField::ALL.len()]
    }

    fn prev(self) -> Self {
        let i = FormField::ALL.iter().position(|f| *f == self).unwrap_or(0);
        FormField::ALL[(i + FormField::ALL.len() - 1) % FormField::ALL.len()]
    }
}

#[derive(Debug, Default)]
pub struct FormState {
    pub field: FormField,
    pub source: InputSource,
    pub language: Language,
    pub word_count: WordCount,
    pub difficulty: Difficulty,
    /// Pasted text, or the contents of the loaded file.
    pub text: String,
    /// Path typed in file mode.
    pub file_path: String,
    /// Name of the file whose contents are in `text`.
    pub file_name: Option<String>,
    pub topic: String,
    /// Last generation error, shown under the form.
    pub error: Option<String>,
    /// Spinner frame counter.
    pub tick: usize,
}

/// Step to the neighbouring option in `all`, wrapping around.
fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let i = all.iter().position(|x| *x == current).unwrap_or(0);
    let n = all.len();
    if forward {
        all[(i + 1) % n]
    } else {
        all[(i + n - 1) % n]
    }
}

impl FormState {
    pub fn from_preferences(prefs: &Preferences) -> Self {
        Self {
            language: prefs.language,
            word_count: prefs.word_count,
            difficulty: prefs.difficulty,
            ..Default::default()
        }
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_over_limit(&self) -> bool {
        self.char_count() > MAX_CHARS
    }

    /// Submit is disabled while loading, for blank or oversized text, and for
    /// a blank topic.
    pub fn is_submit_disabled(&self, loading: bool) -> bool {
        let invalid = match self.source {
            InputSource::Text | InputSource::File => {
                self.text.trim().is_empty() || self.is_over_limit()
            }
            InputSource::Topic => self.topic.trim().is_empty(),
        };
        loading || invalid
    }

    /// The request to send, if the form is currently valid.
    pub fn request(&self) -> Option<GenerateRequest> {
        if self.is_submit_disabled(false) {
            return None;
        }
        let content = match self.source {
            InputSource::Topic => self.topic.trim(),
            InputSource::Text | InputSource::File => self.text.trim(),
        };
        Some(GenerateRequest {
            source: self.source,
            content: content.to_string(),
            word_count: self.word_count,
            difficulty: self.difficulty,
            language: self.language,
        })
    }

    /// Read the file at `file_path` into `text`.
    pub fn load_file(&mut self) -> std::io::Result<()> {
        let path = Path::new(self.file_path.trim());
        let contents = std::fs::read_to_string(path)?;
        log::info!(
            "loaded {} characters from {}",
            contents.chars().count(),
            path.display()
        );
        self.file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        self.text = contents;
        Ok(())
    }

    /// Bracketed paste into the field being edited.
    pub fn paste(&mut self, pasted: &str) {
        self.field = FormField::Content;
        match self.source {
            InputSource::Text => self.text.push_str(pasted),
            InputSource::File => self.file_path.push_str(pasted.trim()),
            InputSource::Topic => self
                .topic
                .push_str(&pasted.replace(['\r', '\n'], " ")),
        }
    }

    fn input_mut(&mut self) -> &mut String {
        match self.source {
            InputSource::Text => &mut self.text,
            InputSource::File => &mut self.file_path,
            InputSource::Topic => &mut self.topic,
        }
    }

    /// Left/right on one of the option rows.
    fn cycle_field(&mut self, forward: bool) {
        match self.field {
            FormField::Language => {
                self.language = cycle(&Language::ALL, self.language, forward);
            }
            FormField::WordCount => {
                self.word_count = cycle(&WordCount::ALL, self.word_count, forward);
            }
            FormField::Difficulty => {
                self.difficulty = cycle(&Difficulty::ALL, self.difficulty, forward);
            }
            FormField::Source => {
                self.source = cycle(&InputSource::ALL, self.source, forward);
            }
            FormField::Content | FormField::Submit => {}
        }
    }
}

impl App {
    pub fn draw_form(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let theme = self.state.theme;
        let loading = self.is_loading();
        let form = &self.state.form;

        let [centered_area] = Layout::horizontal([Constraint::Max(80)])
            .flex(Flex::Center)
            .areas(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.secondary))
            .title(Span::styled(
                " New Puzzle ",
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(centered_area);
        frame.render_widget(block, centered_area);

        let [options_area, content_area, status_area, footer_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        // Option rows
        let option = |field: FormField, label: &str, value: String| {
            let focused = form.field == field;
            let marker = if focused { "▸ " } else { "  " };
            let value_style = if focused {
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.primary)),
                Span::styled(format!("{:<12}", label), Style::default().fg(theme.dimmed)),
                Span::styled(format!("◂ {} ▸", value), value_style),
            ])
        };
        let mut lines = vec![
            option(
                FormField::Language,
                "Language",
                form.language.native_name().to_string(),
            ),
            option(FormField::WordCount, "Words", form.word_count.name().to_string()),
            option(
                FormField::Difficulty,
                "Difficulty",
                form.difficulty.name().to_string(),
            ),
        ];

        // Source tabs
        let mut tabs = vec![
            Span::styled(
                if form.field == FormField::Source { "▸ " } else { "  " },
                Style::default().fg(theme.primary),
            ),
            Span::styled(format!("{:<12}", "Source"), Style::default().fg(theme.dimmed)),
        ];
        for source in InputSource::ALL {
            let style = if source == form.source {
                Style::default()
                    .fg(theme.filled_cell_bg)
                    .bg(theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.dimmed)
            };
            tabs.push(Span::styled(format!(" {} ", source.name()), style));
            tabs.push(Span::raw(" "));
        }
        lines.push(Line::from(tabs));
        frame.render_widget(Paragraph::new(lines), options_area);

        self.draw_form_content(frame, content_area);

        // Status: spinner or error
        let form = &self.state.form;
        let status = if loading {
            let spin = SPINNER[form.tick / 3 % SPINNER.len()];
            let label = match form.source {
                InputSource::Topic => "Writing about your topic and building the puzzle...",
                _ => "Building your puzzle...",
            };
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", spin), Style::default().fg(theme.primary)),
                Span::styled(label, Style::default().fg(theme.text)),
            ]))
        } else if let Some(error) = &form.error {
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(theme.error)))
                .wrap(Wrap { trim: true })
        } else {
            Paragraph::new("")
        };
        frame.render_widget(status, status_area);

        // Footer with the submit button
        let disabled = form.is_submit_disabled(loading);
        let submit_style = match (disabled, form.field == FormField::Submit) {
            (true, _) => Style::default().fg(theme.dimmed),
            (false, true) => Style::default()
                .fg(theme.filled_cell_bg)
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD),
            (false, false) => Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        };
        let footer = Line::from(vec![
            Span::styled("[ Generate ]", submit_style),
            Span::styled("  ↑↓", Style::default().fg(theme.primary)),
            Span::styled(" field  ", Style::default().fg(theme.dimmed)),
            Span::styled("←→", Style::default().fg(theme.primary)),
            Span::styled(" change  ", Style::default().fg(theme.dimmed)),
            Span::styled("Ctrl+G", Style::default().fg(theme.primary)),
            Span::styled(" generate  ", Style::default().fg(theme.dimmed)),
            Span::styled("ESC", Style::default().fg(theme.primary)),
            Span::styled(if loading { " cancel" } else { " back" }, Style::default().fg(theme.dimmed)),
        ]);
        frame.render_widget(Paragraph::new(footer), footer_area);
    }

    fn draw_form_content(&self, frame: &mut Frame, area: Rect) {
        let theme = self.state.theme;
        let form = &self.state.form;
        let focused = form.field == FormField::Content;
        let border = if focused { theme.primary } else { theme.dimmed };

        let (title, body, hint) = match form.source {
            InputSource::Text => (
                " Text ".to_string(),
                form.text.clone(),
                "Paste or type the text to build the puzzle from.",
            ),
            InputSource::File => (
                match &form.file_name {
                    Some(name) => format!(" File: {} ", name),
                    None => " File path ".to_string(),
                },
                form.file_path.clone(),
                "Type a path to a text file and press Enter to load it.",
            ),
            InputSource::Topic => (
                " Topic ".to_string(),
                form.topic.clone(),
                "e.g. 'The history of space exploration'",
            ),
        };

        let count_style = if form.is_over_limit() {
            Style::default().fg(theme.error)
        } else {
            Style::default().fg(theme.dimmed)
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(title, Style::default().fg(theme.secondary)));
        if form.source != InputSource::Topic {
            block = block.title_bottom(
                Line::from(Span::styled(
                    format!(" {}/{} ", form.char_count(), MAX_CHARS),
                    count_style,
                ))
                .right_aligned(),
            );
        }

        let paragraph = if body.is_empty() {
            Paragraph::new(Span::styled(hint, Style::default().fg(theme.dimmed)))
        } else {
            let cursor = if focused { "▏" } else { "" };
            let text = format!("{}{}", body, cursor);
            // keep the end of long text in view
            let inner_width = area.width.saturating_sub(2).max(1) as usize;
            let inner_height = area.height.saturating_sub(2) as usize;
            let wrapped_lines: usize = text
                .lines()
                .map(|line| line.chars().count() / inner_width + 1)
                .sum();
            let scroll = wrapped_lines.saturating_sub(inner_height) as u16;
            Paragraph::new(text)
                .style(Style::default().fg(theme.text))
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0))
        };
        frame.render_widget(paragraph.block(block), area);
    }

    pub fn handle_form_input(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let form = &mut self.state.form;

        match key.code {
            KeyCode::Esc => {
                if self.is_loading() {
                    self.cancel_generation();
                } else {
                    self.set_view(AppView::Menu);
                }
            }
            KeyCode::Char('g') | KeyCode::Char('G') if ctrl => self.submit_form(),
            KeyCode::Char('h') | KeyCode::Char('H') if ctrl => self.show_help(),
            KeyCode::Up | KeyCode::BackTab => form.field = form.field.prev(),
            KeyCode::Down | KeyCode::Tab => form.field = form.field.next(),
            KeyCode::Left => form.cycle_field(false),
            KeyCode::Right => form.cycle_field(true),
            KeyCode::Enter => match form.field {
                FormField::Submit => self.submit_form(),
                FormField::Content => match form.source {
                    InputSource::Text => form.text.push('\n'),
                    InputSource::File => {
                        if let Err(e) = form.load_file() {
                            log::warn!("could not load {}: {}", form.file_path, e);
                            form.error = Some(format!("Could not read file: {}", e));
                        } else {
                            form.error = None;
                        }
                    }
                    InputSource::Topic => self.submit_form(),
                },
                _ => form.field = form.field.next(),
            },
            KeyCode::Backspace if form.field == FormField::Content => {
                form.input_mut().pop();
            }
            KeyCode::Char(c) if !ctrl && form.field == FormField::Content => {
                form.input_mut().push(c);
            }
            _ => {}
        }
    }

    /// Remember the chosen options and start generating.
    fn submit_form(&mut self) {
        if self.state.form.is_submit_disabled(self.is_loading()) {
            return;
        }
        let Some(request) = self.state.form.request() else {
            return;
        };

        let prefs = &mut self.state.preferences;
        prefs.language = request.language;
        prefs.word_count = request.word_count;
        prefs.difficulty = request.difficulty;
        self.save_preferences();

        self.start_generation(request);
    }
}
