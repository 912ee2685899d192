//! Main TUI application state.
//!
//! Handles:
//! - Input event handling
//! - Service integration (prediction runs inline on key press)

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::application::PricingService;
use crate::ports::PriceModel;

use super::styles::ShowroomTheme;
use super::ui::{
    quote::{render_quote, QuoteState},
    render_disclaimer,
    vehicle::{render_vehicle_form, FormField, VehicleFormState},
};

/// Main application state
pub struct App<M>
where
    M: PriceModel,
{
    service: PricingService<M>,

    /// Whether the app should quit
    should_quit: bool,

    form_state: VehicleFormState,

    quote_state: QuoteState,
}

impl<M> App<M>
where
    M: PriceModel,
{
    /// Create the application around a ready pricing service.
    ///
    /// The entry point owns model loading; a model that failed to load never
    /// reaches the UI.
    #[must_use]
    pub fn new(service: PricingService<M>) -> Self {
        Self {
            service,
            should_quit: false,
            form_state: VehicleFormState::default(),
            quote_state: QuoteState::default(),
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    // Windows reports both press and release
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Content
                Constraint::Length(3), // Footer/error
                Constraint::Length(2), // Disclaimer
            ])
            .split(f.area());

        render_header(f, chunks[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);
        render_vehicle_form(f, columns[0], &self.form_state);
        render_quote(f, columns[1], &self.quote_state, self.service.policy());

        self.render_footer(f, chunks[2]);
        render_disclaimer(f, chunks[3]);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let content = if let Some(err) = &self.form_state.error_message {
            Line::from(vec![
                Span::styled("! ", ShowroomTheme::danger()),
                Span::styled(err.clone(), ShowroomTheme::danger()),
            ])
        } else {
            Line::from(vec![
                Span::styled("[↑↓] ", ShowroomTheme::key_hint()),
                Span::styled("Navigate ", ShowroomTheme::key_desc()),
                Span::styled("[←→] ", ShowroomTheme::key_hint()),
                Span::styled("Change ", ShowroomTheme::key_desc()),
                Span::styled("[0-9] ", ShowroomTheme::key_hint()),
                Span::styled("Edit ", ShowroomTheme::key_desc()),
                Span::styled("[Enter] ", ShowroomTheme::key_hint()),
                Span::styled("Predict ", ShowroomTheme::key_desc()),
                Span::styled("[Ctrl-R] ", ShowroomTheme::key_hint()),
                Span::styled("Reset ", ShowroomTheme::key_desc()),
                Span::styled("[Esc] ", ShowroomTheme::key_hint()),
                Span::styled("Quit", ShowroomTheme::key_desc()),
            ])
        };

        let footer = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(ShowroomTheme::border()),
        );

        f.render_widget(footer, area);
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if key == KeyCode::Char('r') && modifiers.contains(KeyModifiers::CONTROL) {
            self.edit(VehicleFormState::reset);
            return;
        }

        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::BackTab => self.form_state.prev_field(),
            KeyCode::Down | KeyCode::Tab => self.form_state.next_field(),
            KeyCode::Enter => self.submit(),
            KeyCode::Left => self.edit(|form| form.step(false)),
            KeyCode::Right => self.edit(|form| form.step(true)),
            KeyCode::Backspace => self.edit(VehicleFormState::delete_char),
            // Plain R resets only from a selector; numeric fields ignore letters
            KeyCode::Char('r') | KeyCode::Char('R')
                if matches!(self.form_state.selected(), FormField::Choice(_)) =>
            {
                self.edit(VehicleFormState::reset);
            }
            KeyCode::Char(c) => self.edit(|form| form.input_char(c)),
            _ => {}
        }
    }

    /// Apply a form edit; a shown price no longer matches edited inputs.
    fn edit(&mut self, change: impl FnOnce(&mut VehicleFormState)) {
        let before = self.form_state.to_vehicle_spec();
        change(&mut self.form_state);
        if self.form_state.to_vehicle_spec() != before {
            self.quote_state = QuoteState::Idle;
        }
    }

    fn submit(&mut self) {
        let spec = self.form_state.to_vehicle_spec();
        self.quote_state = match self.service.quote(spec) {
            Ok(quote) => QuoteState::Complete { quote },
            Err(e) => {
                tracing::error!("Prediction failed: {}", e);
                QuoteState::Error {
                    message: e.to_string(),
                }
            }
        };
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        "Vehicle Price Prediction",
        ShowroomTheme::title(),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(ShowroomTheme::border()),
    );

    f.render_widget(header, area);
}
