//! Interactive player
//!
//! Runs a page in the alternate screen:
//! - wall-clock timers drive every sequencer
//! - terminals autostart when scrolled into view
//! - keyboard and mouse activate the fast-forward and restart controls

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};

use super::input::{handle_event, InputResult, FOOTER_ROWS};
use super::widget::PageView;
use crate::page::Page;
use crate::theme::{ClassColors, Theme};

/// Result of a playback operation
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackResult {
    /// Every terminal finished before the user quit
    Success(String),
    /// The user quit while terminals were still pending
    Interrupted,
    /// Playback failed with an error
    Error(String),
}

impl PlaybackResult {
    /// Get a human-readable message for this result
    pub fn message(&self) -> String {
        match self {
            PlaybackResult::Success(name) => format!("Played: {}", name),
            PlaybackResult::Interrupted => "Playback interrupted".to_string(),
            PlaybackResult::Error(e) => format!("Failed to play: {}", e),
        }
    }
}

/// Presentation settings for the interactive player.
#[derive(Debug, Clone)]
pub struct PlayerOptions {
    pub tick_rate: Duration,
    pub theme: Theme,
    pub classes: ClassColors,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(16),
            theme: Theme::default(),
            classes: ClassColors::default(),
        }
    }
}

/// Raw mode, alternate screen and mouse capture for the player's lifetime.
struct Screen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Screen {
    /// Enter the alternate screen with explicit rollback on error.
    fn enter() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(t) => t,
            Err(e) => {
                let mut stdout = io::stdout();
                let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
                let _ = disable_raw_mode();
                return Err(e.into());
            }
        };
        let mut screen = Self { terminal };
        screen.terminal.hide_cursor()?;
        Ok(screen)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Play a page until the user quits.
///
/// Controls:
/// - f: fast-forward the focused terminal
/// - r: restart the focused terminal (once finished)
/// - Tab/Shift-Tab: move focus
/// - arrows, j/k, PgUp/PgDn, Home/End: scroll
/// - mouse: click a control, wheel to scroll
/// - q/Esc/Ctrl-C: quit
pub fn play_page(mut page: Page, name: &str, options: &PlayerOptions) -> Result<PlaybackResult> {
    let mut screen = Screen::enter()?;
    let size = screen.terminal.size()?;
    page.set_viewport(size.height.saturating_sub(FOOTER_ROWS) as usize);
    tracing::debug!(
        terminals = page.terminals().len(),
        width = size.width,
        height = size.height,
        "Player started"
    );

    let start = Instant::now();
    let mut dirty = true;
    loop {
        dirty |= page.tick(start.elapsed());
        if dirty {
            screen
                .terminal
                .draw(|frame| draw(frame, &page, name, options))?;
            dirty = false;
        }

        if event::poll(options.tick_rate)? {
            let event = event::read()?;
            dirty = true;
            if handle_event(event, &mut page) == InputResult::Quit {
                break;
            }
        }
    }

    Ok(if page.is_settled() {
        PlaybackResult::Success(name.to_string())
    } else {
        PlaybackResult::Interrupted
    })
}

fn draw(frame: &mut Frame, page: &Page, name: &str, options: &PlayerOptions) {
    let [body, footer] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(FOOTER_ROWS),
    ])
    .areas(frame.area());

    frame.render_widget(PageView::new(page, &options.theme, &options.classes), body);

    let hint = Style::default().fg(options.theme.text_secondary);
    let key = Style::default().fg(options.theme.accent);
    let mut spans = vec![Span::styled(format!(" {} ", name), key)];
    for (k, label) in [
        ("f", "fast"),
        ("r", "restart"),
        ("tab", "focus"),
        ("↑↓", "scroll"),
        ("q", "quit"),
    ] {
        spans.push(Span::styled(format!(" {}", k), key));
        spans.push(Span::styled(format!(" {} ", label), hint));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), footer);
}
