//! TUI rendering with ratatui
//!
//! Lays out the views for the game screen.

use super::app::App;
use super::views::{BoardView, KeyboardView, MessagesView, Renderable, SummaryView};
use crate::game::{GameState, MAX_ATTEMPTS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Board
            Constraint::Length(8),  // Keyboard
            Constraint::Min(4),     // Messages
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    BoardView::new(&app.game).render(f, chunks[1]);
    KeyboardView::new(app.game.letters()).render(f, chunks[2]);
    MessagesView::new(&app.log.messages).render(f, chunks[3]);
    render_status(f, app, chunks[4]);

    if let Some(summary) = app.summary() {
        SummaryView::new(summary, &app.stats).render(f, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mode_text = match app.game.state() {
        GameState::AwaitingInput => format!("Guess {}/{MAX_ATTEMPTS}", app.game.attempts_used() + 1),
        GameState::Won => "Solved".to_string(),
        GameState::Lost => "Game over".to_string(),
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.game.is_ended() {
        "n: New Game | q: Quit"
    } else {
        "Enter: Submit | Esc: Quit | Ctrl-N: New Game"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Key;
    use crate::interactive::input::Action;
    use crate::wordlists::Dictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_board_and_keyboard() {
        let dictionary = Dictionary::from_slice(&["apple", "crane"]).unwrap();
        let app = App::new(&dictionary, StdRng::seed_from_u64(5));
        let text = screen(&app);

        assert!(text.contains("WORDLE"));
        assert!(text.contains("Keyboard"));
        assert!(text.contains("Guess 1/6"));
    }

    #[test]
    fn draws_typed_letters() {
        let dictionary = Dictionary::from_slice(&["apple", "crane"]).unwrap();
        let mut app = App::new(&dictionary, StdRng::seed_from_u64(5));
        for b in *b"cr" {
            app.apply(Action::Game(Key::Letter(b)));
        }
        let text = screen(&app);
        // Open row: two typed tiles then blanks
        assert!(text.contains(" C   R   _ "));
    }

    #[test]
    fn draws_summary_when_over() {
        let dictionary = Dictionary::from_slice(&["apple", "crane"]).unwrap();
        let mut app = App::new(&dictionary, StdRng::seed_from_u64(5));
        let secret = app.game.secret().text().to_string();
        for b in secret.bytes() {
            app.apply(Action::Game(Key::Letter(b)));
        }
        app.apply(Action::Game(Key::Submit));

        let text = screen(&app);
        assert!(text.contains("The word was"));
        assert!(text.contains(&secret.to_uppercase()));
        assert!(text.contains("Wordle 1/6"));
        assert!(text.contains("(1)"));
    }
}
