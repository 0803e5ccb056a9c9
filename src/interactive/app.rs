//! TUI application state and logic

use crate::commands::simple::{Command, parse_command};
use crate::core::{BoardError, Lexicon};
use crate::game::{GameConfig, GameSession, Outcome, TimerNotice, find_words, max_score};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

const TICK_RATE: Duration = Duration::from_secs(1);

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a>,
    config: GameConfig,
    rng: StdRng,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    /// Words and points the finished board held
    pub board_potential: Option<(usize, u32)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub best_score: u32,
    pub total_score: u32,
}

impl<'a> App<'a> {
    /// Start the first game
    ///
    /// # Errors
    /// Returns `BoardError` if the board cannot be generated.
    pub fn new(lexicon: &'a Lexicon, config: GameConfig) -> Result<Self, BoardError> {
        let mut rng = config.rng();
        let session = GameSession::new(lexicon, &config, &mut rng)?;

        Ok(Self {
            session,
            config,
            rng,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Chain adjacent letters into words.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter, or '@r,c r,c ...' to pick cells"
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Typing,
            board_potential: None,
        })
    }

    /// Submit whatever is in the input buffer
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        match parse_command(&input) {
            Command::Word(word) if word.is_empty() => {}
            Command::Word(word) => match self.session.submit_typed(&word) {
                Ok(outcome) => self.report(&word, outcome),
                Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
            },
            Command::Path(path) => match self.session.submit_path(&path) {
                Ok((word, outcome)) => self.report(&word, outcome),
                Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
            },
            Command::Quit => self.finish_game(),
            Command::Board | Command::Words => {
                self.add_message("The board and words are always shown", MessageStyle::Info);
            }
            Command::Unknown(text) => {
                self.add_message(&format!("Not understood: {text}"), MessageStyle::Error);
            }
        }
    }

    fn report(&mut self, word: &str, outcome: Outcome) {
        let word = word.to_uppercase();
        if !outcome.first_seen {
            self.add_message(&format!("Already tried {word}"), MessageStyle::Info);
        } else if outcome.valid {
            self.add_message(
                &format!("{word} +{}", outcome.points),
                MessageStyle::Success,
            );
        } else {
            self.add_message(&format!("{word} is not on the board"), MessageStyle::Error);
        }
    }

    /// Advance the clock by one second
    pub fn tick(&mut self) {
        if self.input_mode == InputMode::GameOver {
            return;
        }
        match self.session.tick() {
            Some(TimerNotice::TimeUp) => {
                self.add_message("Time's up!", MessageStyle::Error);
                self.finish_game();
            }
            Some(notice) => self.add_message(&notice.to_string(), MessageStyle::Info),
            None => {}
        }
    }

    /// Freeze the current game and record its score
    pub fn finish_game(&mut self) {
        if self.input_mode == InputMode::GameOver {
            return;
        }
        self.session.end_game();

        let score = self.session.score();
        self.stats.games_played += 1;
        self.stats.total_score += score;
        self.stats.best_score = self.stats.best_score.max(score);

        let words = find_words(self.session.board(), self.session.lexicon());
        self.board_potential = Some((words.len(), max_score(&words)));

        self.input_mode = InputMode::GameOver;
        self.add_message(&format!("Game over! Final score {score}"), MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Roll a new board and start over
    pub fn new_game(&mut self) {
        if self.input_mode == InputMode::Typing && !self.session.ledger().entries().is_empty() {
            self.finish_game();
        }
        match GameSession::new(self.session.lexicon(), &self.config, &mut self.rng) {
            Ok(session) => {
                self.session = session;
                self.input_buffer.clear();
                self.messages.clear();
                self.board_potential = None;
                self.input_mode = InputMode::Typing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Typing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if last_tick.elapsed() >= TICK_RATE {
            app.tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;
    use crate::wordlists::embedded_lexicon;

    fn press(app: &mut App<'_>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App<'_>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn app(lexicon: &Lexicon) -> App<'_> {
        App::new(lexicon, GameConfig::default().with_seed(Some(21))).unwrap()
    }

    #[test]
    fn typed_words_are_recorded() {
        let lexicon = embedded_lexicon();
        let mut app = app(&lexicon);

        type_text(&mut app, "zzzz");
        assert!(app.input_buffer.is_empty());
        assert!(app.session.ledger().contains("zzzz"));
        assert_eq!(
            app.messages.last().map(|m| m.style.clone()),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn picked_cells_are_spelled_and_recorded() {
        let lexicon = embedded_lexicon();
        let mut app = app(&lexicon);
        let path = [Position::new(0, 0), Position::new(0, 1)];
        let spelled = app.session.board().path_word(&path).unwrap();

        type_text(&mut app, "@0,0 0,1");
        assert!(app.session.ledger().contains(&spelled));
        assert_eq!(app.session.ledger().entries().len(), 1);
    }

    #[test]
    fn broken_path_is_reported() {
        let lexicon = embedded_lexicon();
        let mut app = app(&lexicon);

        type_text(&mut app, "@0,0 2,2");
        assert!(app.session.ledger().entries().is_empty());
        assert_eq!(
            app.messages.last().map(|m| m.style.clone()),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn backspace_edits_input() {
        let lexicon = embedded_lexicon();
        let mut app = app(&lexicon);

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "a");
    }

    #[test]
    fn messages_are_capped() {
        let lexicon = embedded_lexicon();
        let mut app = app(&lexicon);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }

    #[test]
    fn clock_ends_the_game() {
        let lexicon = embedded_lexicon();
        let config = GameConfig::default().with_seed(Some(4)).with_duration(3);
        let mut app = App::new(&lexicon, config).unwrap();

        for _ in 0..3 {
            app.tick();
        }
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert!(app.session.is_over());
        assert_eq!(app.stats.games_played, 1);
        assert!(app.board_potential.is_some());

        // Letters no longer reach the input once the game is over
        press(&mut app, KeyCode::Char('x'));
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn new_game_after_game_over() {
        let lexicon = embedded_lexicon();
        let mut app = app(&lexicon);

        type_text(&mut app, ":quit");
        assert_eq!(app.input_mode, InputMode::GameOver);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Typing);
        assert!(!app.session.is_over());
        assert!(app.session.ledger().entries().is_empty());
        assert_eq!(app.stats.games_played, 1);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let lexicon = embedded_lexicon();
        let mut app = app(&lexicon);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = self::app(&lexicon);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
