//! Interactive terminal dashboard.
//!
//! A keyboard-driven interface mirroring the CLI report: a search box,
//! an analytics panel, and a filterable, paginated suggestion list.
//! Synthesis runs on a background tokio runtime; the render loop polls
//! the shared [`SearchSession`](crate::session::SearchSession) so only
//! the latest search's result is ever applied.

pub mod app;
pub mod renderer;
pub mod theme;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use app::App;

/// Dashboard TUI manager owning the terminal and application state.
pub struct Dashboard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
}

impl Dashboard {
    pub fn new(app: App) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal, app })
    }

    /// Run the interactive event loop.
    pub fn run(&mut self) -> Result<()> {
        loop {
            // Apply any freshly published search result before drawing.
            self.app.sync();

            self.terminal.draw(|f| renderer::render(f, &self.app))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        break;
                    }

                    if self.app.handle_key(key)? {
                        break; // Exit requested
                    }
                }
            }
        }

        self.cleanup()?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
