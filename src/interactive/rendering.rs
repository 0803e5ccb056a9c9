//! TUI rendering with ratatui
//!
//! Board, word list, clock and score for a live game.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::board_lines;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and clock
            Constraint::Percentage(45), // Words and messages
        ])
        .split(chunks[1]);

    render_play_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎲 BOGGLE")
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

fn render_play_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(7),    // Board
            Constraint::Length(3), // Clock
            Constraint::Length(4), // Score
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_clock(f, app, chunks[1]);
    render_score(f, app, chunks[2]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let style = if app.input_mode == InputMode::GameOver {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![Line::from("")];
    for row in board_lines(app.session.board()) {
        lines.push(Line::from(Span::styled(row, style)));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Board {} ", app.session.board().dimension()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_clock(f: &mut Frame, app: &App, area: Rect) {
    let clock = app.session.clock();
    let color = match clock.remaining() {
        0..=60 => Color::Red,
        61..=120 => Color::Yellow,
        _ => Color::Green,
    };
    // Cast is safe: fraction_left is within [0, 1]
    let percent = (clock.fraction_left() * 100.0).round() as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent.min(100))
        .label(clock.to_string());

    f.render_widget(gauge, area);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let found = app.session.ledger().found_words().count();
    let mut content = vec![Line::from(vec![
        Span::raw("Score: "),
        Span::styled(
            app.session.score().to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("   Words found: {found}")),
    ])];

    if let Some((words, points)) = app.board_potential {
        content.push(Line::from(Span::styled(
            format!("Board held {words} words worth {points} points"),
            Style::default().fg(Color::Cyan),
        )));
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(65), // Words
            Constraint::Percentage(35), // Messages
        ])
        .split(area);

    render_words(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .ledger()
        .entries()
        .iter()
        .rev()
        .map(|entry| {
            if entry.valid {
                ListItem::new(format!(
                    "✓ {:<16} +{}",
                    entry.text.to_uppercase(),
                    entry.points()
                ))
                .style(Style::default().fg(Color::Green))
            } else {
                ListItem::new(format!("✗ {}", entry.text.to_uppercase()))
                    .style(Style::default().fg(Color::Red))
            }
        })
        .collect();

    let words = List::new(items).block(
        Block::default()
            .title(format!(" Words ({}) ", app.session.ledger().entries().len()))
            .borders(Borders::ALL),
    );
    f.render_widget(words, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
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

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Typing => (
            " Enter a word, or @row,col row,col ... to pick cells ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Best: {} | Total: {}",
        app.stats.games_played, app.stats.best_score, app.stats.total_score
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Typing => "Esc: Quit | Ctrl-N: New Game | Enter: Submit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
