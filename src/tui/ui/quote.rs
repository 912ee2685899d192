//! "Predict Vehicle Price" panel.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::{PriceQuote, UnknownCategoryPolicy};
use crate::tui::styles::ShowroomTheme;

/// Prediction panel state
#[derive(Debug, Clone, Default)]
pub enum QuoteState {
    /// No prediction for the current inputs
    #[default]
    Idle,
    /// Completed with result
    Complete { quote: PriceQuote },
    /// Error occurred
    Error { message: String },
}

/// Render the prediction panel
pub fn render_quote(f: &mut Frame, area: Rect, state: &QuoteState, policy: UnknownCategoryPolicy) {
    let block = Block::default()
        .title(Span::styled(" Predict Vehicle Price ", ShowroomTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(match state {
            QuoteState::Complete { .. } => ShowroomTheme::border_focused(),
            QuoteState::Error { .. } => ShowroomTheme::danger(),
            QuoteState::Idle => ShowroomTheme::border(),
        });
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Instructions
            Constraint::Min(0),    // Result
        ])
        .margin(1)
        .split(inner);

    let instructions = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Press ", ShowroomTheme::text_secondary()),
            Span::styled("[Enter]", ShowroomTheme::key_hint()),
            Span::styled(
                " to get the estimated price for the selected vehicle configuration.",
                ShowroomTheme::text_secondary(),
            ),
        ]),
        Line::from(Span::styled(
            format!("Options unknown to the model: {policy}"),
            ShowroomTheme::text_muted(),
        )),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(instructions, chunks[0]);

    match state {
        QuoteState::Idle => {}
        QuoteState::Complete { quote } => render_result(f, chunks[1], quote),
        QuoteState::Error { message } => render_error(f, chunks[1], message),
    }
}

fn render_result(f: &mut Frame, area: Rect, quote: &PriceQuote) {
    let content = Paragraph::new(vec![
        Line::from(Span::styled("Predicted Price", ShowroomTheme::subtitle())),
        Line::from(""),
        Line::from(Span::styled(quote.formatted_price(), ShowroomTheme::price())),
        Line::from(""),
        Line::from(Span::styled(
            "Price prediction completed successfully!",
            ShowroomTheme::success(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(ShowroomTheme::border()),
    );

    f.render_widget(content, area);
}

fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let content = Paragraph::new(vec![
        Line::from(Span::styled("! Prediction failed", ShowroomTheme::danger())),
        Line::from(""),
        Line::from(Span::styled(message, ShowroomTheme::text())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(ShowroomTheme::danger()),
    );

    f.render_widget(content, area);
}
