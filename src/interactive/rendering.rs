//! TUI rendering with ratatui
//!
//! Pure drawing: everything shown here comes from the presentation state
//! the app mirrors out of the engine's effects.

use super::app::App;
use crate::config::Theme;
use crate::core::Verdict;
use crate::game::{COLS, GameStatus, MessageKind, ROWS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

// Tile colors, same in both themes
const CORRECT: Color = Color::Rgb(0x8f, 0xbc, 0x8f);
const PRESENT: Color = Color::Rgb(0xd8, 0xa7, 0xb1);
const ABSENT: Color = Color::Rgb(0x78, 0x7c, 0x7e);

const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

struct Palette {
    bg: Color,
    fg: Color,
    dim: Color,
    tile_empty: Color,
    key_empty: Color,
}

const fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            bg: Color::Rgb(0x12, 0x12, 0x13),
            fg: Color::Rgb(0xf8, 0xf8, 0xf8),
            dim: Color::Rgb(0x81, 0x83, 0x84),
            tile_empty: Color::Rgb(0x3a, 0x3a, 0x3c),
            key_empty: Color::Rgb(0x56, 0x57, 0x58),
        },
        Theme::Light => Palette {
            bg: Color::Rgb(0xfa, 0xfa, 0xfa),
            fg: Color::Rgb(0x1a, 0x1a, 0x1b),
            dim: Color::Rgb(0x78, 0x7c, 0x7e),
            tile_empty: Color::Rgb(0xd3, 0xd6, 0xda),
            key_empty: Color::Rgb(0xd3, 0xd6, 0xda),
        },
    }
}

const fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Correct => CORRECT,
        Verdict::Present => PRESENT,
        Verdict::Absent => ABSENT,
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let colors = palette(app.theme);

    // Paint the whole background first
    f.render_widget(
        Block::default().style(Style::default().bg(colors.bg)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Header
            Constraint::Length(ROWS as u16 + 2), // Board
            Constraint::Length(5),              // Keyboard
            Constraint::Length(3),              // Message area
            Constraint::Length(3),              // Status bar
        ])
        .split(f.area());

    render_header(f, &colors, chunks[0]);
    render_board(f, app, &colors, chunks[1]);
    render_keyboard(f, app, &colors, chunks[2]);
    render_message(f, app, &colors, chunks[3]);
    render_status(f, app, &colors, chunks[4]);
}

fn render_header(f: &mut Frame, colors: &Palette, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(colors.fg)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(colors.dim)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let mut lines = Vec::with_capacity(ROWS);

    for row in 0..ROWS {
        let shaking = app.view.shaking(row);
        let mut spans = Vec::with_capacity(COLS * 2);

        for col in 0..COLS {
            let letter = app.view.letter(row, col).unwrap_or(' ');
            let text = format!(" {} ", letter.to_ascii_uppercase());

            let style = match app.view.verdict(row, col) {
                Some(verdict) => Style::default()
                    .bg(verdict_color(verdict))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                None if shaking => Style::default()
                    .bg(colors.tile_empty)
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
                None => Style::default()
                    .bg(colors.tile_empty)
                    .fg(colors.fg)
                    .add_modifier(Modifier::BOLD),
            };

            spans.push(Span::styled(text, style));
            if col + 1 < COLS {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(colors.dim)),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let mut lines = Vec::with_capacity(KEY_ROWS.len());

    for key_row in KEY_ROWS {
        let mut spans = Vec::with_capacity(key_row.len() * 2);
        for key in key_row.chars() {
            let bg = app
                .key_shades
                .get(&key)
                .map_or(colors.key_empty, |&verdict| verdict_color(verdict));
            spans.push(Span::styled(
                format!("{} ", key.to_ascii_uppercase()),
                Style::default().bg(bg).fg(Color::White),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
    }

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(colors.dim)),
    );
    f.render_widget(keyboard, area);
}

fn render_message(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let (text, style) = match &app.message {
        Some(message) => {
            let fg = match message.kind {
                MessageKind::Info => colors.fg,
                MessageKind::Success => Color::Green,
                MessageKind::Warning => Color::Yellow,
                MessageKind::Error => Color::Red,
            };
            (
                message.text.clone(),
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            )
        }
        None => (String::new(), Style::default().fg(colors.fg)),
    };

    let message = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(colors.dim)),
        );
    f.render_widget(message, area);
}

fn render_status(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let help = if app.play_again {
        "Enter: Play Again | Tab: Theme | Esc: Quit"
    } else {
        match app.game().status() {
            GameStatus::Playing => "Type a word | Enter: Submit | Backspace: Delete | Tab: Theme | Esc: Quit",
            GameStatus::Won | GameStatus::Lost => "Enter: Play Again | Esc: Quit",
        }
    };

    let status = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors.dim));
    f.render_widget(status, area);
}
