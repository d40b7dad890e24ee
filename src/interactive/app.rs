//! TUI application state and event loop

use crate::config::{self, Theme};
use crate::core::Verdict;
use crate::game::{COLS, Effect, Game, InputEvent, Message, MessageKind, ROWS};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;
use std::time::{Duration, Instant};

/// Redraw cadence; also bounds how late a due reveal can fire
const TICK_RATE: Duration = Duration::from_millis(50);

/// How long a rejected row stays highlighted
const SHAKE_DURATION: Duration = Duration::from_millis(500);

/// A tile color waiting for its cosmetic delay to elapse
#[derive(Debug, Clone, Copy)]
struct PendingReveal {
    due: Instant,
    row: usize,
    col: usize,
    verdict: Verdict,
}

/// Presentation state for the board: letters, revealed colors, and the
/// reveal/shake timers
///
/// Reveals are queued with a deadline and promoted on tick, so the next row
/// can be typed while earlier tiles are still flipping.
#[derive(Debug, Default)]
pub struct BoardView {
    letters: [[Option<char>; COLS]; ROWS],
    revealed: [[Option<Verdict>; COLS]; ROWS],
    pending: Vec<PendingReveal>,
    shake: Option<(usize, Instant)>,
}

impl BoardView {
    pub(crate) fn set_letter(&mut self, row: usize, col: usize, letter: Option<char>) {
        self.letters[row][col] = letter;
    }

    pub(crate) fn schedule(&mut self, due: Instant, row: usize, col: usize, verdict: Verdict) {
        self.pending.push(PendingReveal {
            due,
            row,
            col,
            verdict,
        });
    }

    pub(crate) fn shake(&mut self, row: usize, until: Instant) {
        self.shake = Some((row, until));
    }

    /// Promote due reveals and expire the shake highlight
    pub(crate) fn tick(&mut self, now: Instant) {
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due <= now {
                let reveal = self.pending.swap_remove(i);
                self.revealed[reveal.row][reveal.col] = Some(reveal.verdict);
            } else {
                i += 1;
            }
        }
        if let Some((_, until)) = self.shake
            && until <= now
        {
            self.shake = None;
        }
    }

    pub(crate) fn clear(&mut self) {
        self.letters = [[None; COLS]; ROWS];
        self.revealed = [[None; COLS]; ROWS];
        self.pending.clear();
        self.shake = None;
    }

    #[must_use]
    pub(crate) const fn letter(&self, row: usize, col: usize) -> Option<char> {
        self.letters[row][col]
    }

    #[must_use]
    pub(crate) const fn verdict(&self, row: usize, col: usize) -> Option<Verdict> {
        self.revealed[row][col]
    }

    #[must_use]
    pub(crate) fn shaking(&self, row: usize) -> bool {
        matches!(self.shake, Some((shaken, _)) if shaken == row)
    }
}

/// Application state
pub struct App {
    game: Game,
    pub(crate) view: BoardView,
    pub(crate) key_shades: FxHashMap<char, Verdict>,
    pub(crate) message: Option<Message>,
    pub(crate) play_again: bool,
    pub(crate) theme: Theme,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(game: Game, theme: Theme, warning: Option<String>) -> Self {
        Self {
            game,
            view: BoardView::default(),
            key_shades: FxHashMap::default(),
            message: warning.map(|text| Message::new(text, MessageKind::Warning)),
            play_again: false,
            theme,
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn tick(&mut self, now: Instant) {
        self.view.tick(now);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => self.toggle_theme(),
            KeyCode::Enter => {
                // Once the game is over, Enter is the play-again control
                let input = if self.game.status().is_over() {
                    InputEvent::Reset
                } else {
                    InputEvent::Submit
                };
                self.dispatch(input);
            }
            KeyCode::Backspace => self.dispatch(InputEvent::Backspace),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.dispatch(InputEvent::Letter(c)),
            _ => {}
        }
    }

    fn dispatch(&mut self, input: InputEvent) {
        let effects = self.game.apply(input);
        self.apply_effects(effects, Instant::now());
    }

    /// Mirror engine effects into presentation state
    pub fn apply_effects(&mut self, effects: Vec<Effect>, now: Instant) {
        for effect in effects {
            match effect {
                Effect::SetTile { row, col, letter } => self.view.set_letter(row, col, letter),
                Effect::RevealTile {
                    row,
                    col,
                    verdict,
                    delay,
                } => self.view.schedule(now + delay, row, col, verdict),
                Effect::SetKey { letter, verdict } => {
                    self.key_shades.insert(letter, verdict);
                }
                Effect::ShowMessage(message) => self.message = Some(message),
                Effect::ClearMessage => self.message = None,
                Effect::ShakeRow(row) => self.view.shake(row, now + SHAKE_DURATION),
                Effect::ShowPlayAgain => self.play_again = true,
                Effect::HidePlayAgain => self.play_again = false,
                Effect::ClearBoard => self.view.clear(),
                Effect::ClearKeyboard => self.key_shades.clear(),
            }
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if config::save_theme(self.theme).is_err() {
            self.message = Some(Message::new(
                "Could not save theme preference.",
                MessageKind::Warning,
            ));
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.on_key(key);
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_promote_exactly_at_their_deadline() {
        let mut view = BoardView::default();
        let t0 = Instant::now();

        view.schedule(t0 + Duration::from_millis(250), 0, 1, Verdict::Correct);
        view.schedule(t0 + Duration::from_millis(500), 0, 2, Verdict::Present);

        view.tick(t0);
        assert_eq!(view.verdict(0, 1), None);

        view.tick(t0 + Duration::from_millis(250));
        assert_eq!(view.verdict(0, 1), Some(Verdict::Correct));
        assert_eq!(view.verdict(0, 2), None);

        view.tick(t0 + Duration::from_millis(600));
        assert_eq!(view.verdict(0, 2), Some(Verdict::Present));
    }

    #[test]
    fn shake_expires() {
        let mut view = BoardView::default();
        let t0 = Instant::now();

        view.shake(3, t0 + Duration::from_millis(500));
        assert!(view.shaking(3));
        assert!(!view.shaking(2));

        view.tick(t0 + Duration::from_millis(501));
        assert!(!view.shaking(3));
    }

    #[test]
    fn clear_drops_pending_reveals() {
        let mut view = BoardView::default();
        let t0 = Instant::now();

        view.set_letter(0, 0, Some('a'));
        view.schedule(t0 + Duration::from_millis(250), 0, 0, Verdict::Absent);
        view.clear();

        view.tick(t0 + Duration::from_secs(1));
        assert_eq!(view.letter(0, 0), None);
        assert_eq!(view.verdict(0, 0), None);
    }
}
