//! Board, keyboard and summary views
//!
//! Each view borrows the state it draws; none of them own game state.

use super::app::{Message, MessageStyle};
use crate::core::{Classification, KEYBOARD_ROWS, LetterBoard, LetterState, WORD_LEN};
use crate::game::{Attempt, Game, MAX_ATTEMPTS, Statistics, Summary};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

/// Something that can draw itself into a frame region
pub trait Renderable {
    fn render(&self, f: &mut Frame, area: Rect);
}

fn tile_style(class: Option<Classification>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match class {
        Some(Classification::Exact) => base.fg(Color::Black).bg(Color::Green),
        Some(Classification::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(Classification::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

fn key_style(state: LetterState) -> Style {
    match state {
        LetterState::Exact => tile_style(Some(Classification::Exact)),
        LetterState::Present => tile_style(Some(Classification::Present)),
        LetterState::Used => Style::default().fg(Color::DarkGray),
        LetterState::Unknown => Style::default().fg(Color::White).bg(Color::Gray),
    }
}

/// The 6x5 guess grid
pub struct BoardView<'a> {
    game: &'a Game<'a>,
}

impl<'a> BoardView<'a> {
    #[must_use]
    pub const fn new(game: &'a Game<'a>) -> Self {
        Self { game }
    }

    fn row_line(attempt: Option<&Attempt>, is_open: bool) -> Line<'static> {
        let mut spans = Vec::with_capacity(WORD_LEN * 2);
        for i in 0..WORD_LEN {
            let letter = attempt.and_then(|a| a.slot(i));
            let class = attempt.and_then(|a| a.classification(i));
            let text = match letter {
                Some(b) => format!(" {} ", char::from(b).to_ascii_uppercase()),
                None if is_open => " _ ".to_string(),
                None => " · ".to_string(),
            };
            spans.push(Span::styled(text, tile_style(class)));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl Renderable for BoardView<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let history = self.game.history();
        let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);
        for row in 0..MAX_ATTEMPTS {
            let line = if let Some(attempt) = history.get(row) {
                Self::row_line(Some(attempt), false)
            } else if self.game.current_row() == Some(row) {
                Self::row_line(self.game.current(), true)
            } else {
                Self::row_line(None, false)
            };
            lines.push(line);
            lines.push(Line::from(""));
        }

        let board = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(format!(
                    " Board - {} of {MAX_ATTEMPTS} ",
                    self.game.attempts_used()
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        f.render_widget(board, area);
    }
}

/// On-screen keyboard mirroring letter states
pub struct KeyboardView<'a> {
    letters: &'a LetterBoard,
}

impl<'a> KeyboardView<'a> {
    #[must_use]
    pub const fn new(letters: &'a LetterBoard) -> Self {
        Self { letters }
    }
}

impl Renderable for KeyboardView<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = Vec::with_capacity(KEYBOARD_ROWS.len() * 2);
        for row in KEYBOARD_ROWS {
            let mut spans = Vec::new();
            for b in row.bytes() {
                let label = format!(" {} ", char::from(b).to_ascii_uppercase());
                spans.push(Span::styled(label, key_style(self.letters.get(b))));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }

        let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        f.render_widget(keyboard, area);
    }
}

/// Recent warnings and notices
pub struct MessagesView<'a> {
    messages: &'a [Message],
}

impl<'a> MessagesView<'a> {
    #[must_use]
    pub const fn new(messages: &'a [Message]) -> Self {
        Self { messages }
    }
}

impl Renderable for MessagesView<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .messages
            .iter()
            .rev()
            .map(|msg| {
                let style = match msg.style {
                    MessageStyle::Info => Style::default().fg(Color::White),
                    MessageStyle::Success => Style::default().fg(Color::Green),
                    MessageStyle::Error => Style::default().fg(Color::Red),
                };
                ListItem::new(msg.text.clone()).style(style)
            })
            .collect();

        let list = List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));
        f.render_widget(list, area);
    }
}

/// End-of-game overlay with the share grid
pub struct SummaryView<'a> {
    summary: &'a Summary,
    stats: &'a Statistics,
}

impl<'a> SummaryView<'a> {
    #[must_use]
    pub const fn new(summary: &'a Summary, stats: &'a Statistics) -> Self {
        Self { summary, stats }
    }
}

impl Renderable for SummaryView<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let (title, color) = if self.summary.won {
            (" 🎉 YOU WON! 🎉 ", Color::Green)
        } else {
            (" YOU LOST ", Color::Red)
        };

        let mut lines = vec![
            Line::from(vec![
                Span::raw("The word was "),
                Span::styled(
                    self.summary.secret.text().to_uppercase(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
        ];
        lines.push(Line::from(format!("Wordle {}", self.summary.score())));
        lines.extend(self.summary.numbered_grid().into_iter().map(Line::from));
        lines.push(Line::from(""));
        lines.push(Line::from(format!(
            "Played {} | Win {:.0}% | Streak {} | Max {}",
            self.stats.total_games,
            self.stats.win_rate(),
            self.stats.current_streak,
            self.stats.max_streak
        )));
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "n: New game | q: Quit",
            Style::default().fg(Color::DarkGray),
        ));

        let height = (lines.len() as u16 + 2).min(area.height);
        let popup = centered_rect(44, height, area);
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

        f.render_widget(Clear, popup);
        f.render_widget(paragraph, popup);
    }
}

/// A `width` x `height` rectangle centered in `area`, clipped to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width.min(area.width)),
            Constraint::Fill(1),
        ])
        .split(vertical[1])[1]
}
