//! Vehicle feature input form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::domain::{CategoricalField, NumericField, VehicleSpec};
use crate::tui::styles::ShowroomTheme;

/// One input on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Numeric(NumericField),
    Choice(CategoricalField),
}

impl FormField {
    /// Form order: the two numerics, then the selectors in schema group order.
    pub const ALL: [Self; 8] = [
        Self::Numeric(NumericField::Horsepower),
        Self::Numeric(NumericField::Torque),
        Self::Choice(CategoricalField::Make),
        Self::Choice(CategoricalField::BodySize),
        Self::Choice(CategoricalField::BodyStyle),
        Self::Choice(CategoricalField::EngineAspiration),
        Self::Choice(CategoricalField::Drivetrain),
        Self::Choice(CategoricalField::Transmission),
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Numeric(field) => field.label(),
            Self::Choice(field) => field.label(),
        }
    }
}

fn numeric_hint(field: NumericField) -> String {
    let bounds = field.bounds();
    format!("{} ({}-{})", field.unit(), bounds.min, bounds.max)
}

/// Vehicle form state
pub struct VehicleFormState {
    spec: VehicleSpec,
    /// Edit buffers for the numeric fields, indexed like `NumericField::ALL`
    buffers: [String; 2],
    pub selected_field: usize,
    pub error_message: Option<String>,
}

impl Default for VehicleFormState {
    fn default() -> Self {
        let spec = VehicleSpec::default();
        Self {
            buffers: NumericField::ALL.map(|field| spec.numeric(field).to_string()),
            spec,
            selected_field: 0,
            error_message: None,
        }
    }
}

impl VehicleFormState {
    #[must_use]
    pub fn selected(&self) -> FormField {
        FormField::ALL[self.selected_field]
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % FormField::ALL.len();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = FormField::ALL.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// Type a digit into the current numeric field.
    ///
    /// A digit that would push the value past the field's maximum is refused
    /// and leaves the value unchanged.
    pub fn input_char(&mut self, c: char) {
        let FormField::Numeric(field) = self.selected() else {
            return;
        };
        if !c.is_ascii_digit() {
            return;
        }

        let slot = numeric_slot(field);
        let mut candidate = self.buffers[slot].clone();
        if candidate == "0" {
            candidate.clear();
        }
        candidate.push(c);

        let bounds = field.bounds();
        match candidate.parse::<u32>() {
            Ok(value) if bounds.contains(value) => {
                self.spec.set_numeric(field, i64::from(value));
                self.buffers[slot] = candidate;
                self.error_message = None;
            }
            _ => {
                self.error_message = Some(format!(
                    "{} must be between {} and {}",
                    field.label(),
                    bounds.min,
                    bounds.max
                ));
            }
        }
    }

    /// Delete the last digit of the current numeric field
    pub fn delete_char(&mut self) {
        let FormField::Numeric(field) = self.selected() else {
            return;
        };
        let slot = numeric_slot(field);
        self.buffers[slot].pop();
        let value = self.buffers[slot]
            .parse::<i64>()
            .unwrap_or_else(|_| i64::from(field.bounds().min));
        self.spec.set_numeric(field, value);
        self.error_message = None;
    }

    /// Step the current field: next/previous option, or +/- one step.
    pub fn step(&mut self, forward: bool) {
        match self.selected() {
            FormField::Numeric(field) => {
                let step = i64::from(field.bounds().step);
                let current = i64::from(self.spec.numeric(field));
                let target = if forward { current + step } else { current - step };
                self.spec.set_numeric(field, target);
                self.buffers[numeric_slot(field)] = self.spec.numeric(field).to_string();
            }
            FormField::Choice(field) => self.spec.cycle(field, forward),
        }
        self.error_message = None;
    }

    /// Restore every field to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The vehicle as currently entered. Empty numeric buffers read as the minimum.
    #[must_use]
    pub fn to_vehicle_spec(&self) -> VehicleSpec {
        self.spec
    }

    fn display_value(&self, field: FormField) -> String {
        match field {
            FormField::Numeric(numeric) => self.buffers[numeric_slot(numeric)].clone(),
            FormField::Choice(choice) => self.spec.option_label(choice).to_string(),
        }
    }
}

fn numeric_slot(field: NumericField) -> usize {
    match field {
        NumericField::Horsepower => 0,
        NumericField::Torque => 1,
    }
}

/// Render the "Feature Details" column
pub fn render_vehicle_form(f: &mut Frame, area: Rect, state: &VehicleFormState) {
    let block = Block::default()
        .title(Span::styled(" Feature Details ", ShowroomTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(ShowroomTheme::border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(12), // Fields
            Constraint::Length(4),  // Performance
            Constraint::Min(0),     // Vehicle details
        ])
        .split(inner);

    render_form_fields(f, chunks[0], state);
    render_performance(f, chunks[1], &state.spec);
    render_details(f, chunks[2], &state.spec);
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &VehicleFormState) {
    // Create a two-column layout
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mid = FormField::ALL.len() / 2;
    render_field_column(f, columns[0], state, 0..mid);
    render_field_column(f, columns[1], state, mid..FormField::ALL.len());
}

fn render_field_column(
    f: &mut Frame,
    area: Rect,
    state: &VehicleFormState,
    range: std::ops::Range<usize>,
) {
    let constraints: Vec<Constraint> = range
        .clone()
        .map(|_| Constraint::Length(3))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (row, index) in range.enumerate() {
        let field = FormField::ALL[index];
        let is_selected = index == state.selected_field;

        let (border_style, title_style) = if is_selected {
            (ShowroomTheme::border_focused(), ShowroomTheme::focused())
        } else {
            (ShowroomTheme::border(), ShowroomTheme::text_secondary())
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", field.label()), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        let value = state.display_value(field);
        let mut spans = vec![Span::raw(" ")];
        match field {
            FormField::Numeric(numeric) if value.is_empty() => {
                spans.push(Span::styled(numeric_hint(numeric), ShowroomTheme::text_muted()));
            }
            FormField::Numeric(_) => spans.push(Span::styled(value, ShowroomTheme::text())),
            FormField::Choice(_) if is_selected => {
                spans.push(Span::styled("◀ ", ShowroomTheme::cursor()));
                spans.push(Span::styled(value, ShowroomTheme::text()));
                spans.push(Span::styled(" ▶", ShowroomTheme::cursor()));
            }
            FormField::Choice(_) => spans.push(Span::styled(value, ShowroomTheme::text())),
        }
        if is_selected && matches!(field, FormField::Numeric(_)) {
            spans.push(Span::styled("▌", ShowroomTheme::cursor()));
        }

        f.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[row]);
    }
}

fn render_performance(f: &mut Frame, area: Rect, spec: &VehicleSpec) {
    let metrics: Vec<Span> = NumericField::ALL
        .iter()
        .flat_map(|field| {
            [
                Span::styled(format!("{}: ", field.label()), ShowroomTheme::text_secondary()),
                Span::styled(
                    format!("{} {}   ", spec.numeric(*field), field.unit()),
                    ShowroomTheme::title(),
                ),
            ]
        })
        .collect();

    let content = Paragraph::new(vec![
        Line::from(Span::styled("Performance", ShowroomTheme::subtitle())),
        Line::from(metrics),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(ShowroomTheme::border()),
    );

    f.render_widget(content, area);
}

fn render_details(f: &mut Frame, area: Rect, spec: &VehicleSpec) {
    let rows = spec.display_rows().map(|(feature, value)| {
        Row::new(vec![
            Cell::from(Span::styled(feature, ShowroomTheme::text_secondary())),
            Cell::from(Span::styled(value, ShowroomTheme::text())),
        ])
    });

    let table = Table::new(rows, [Constraint::Percentage(50), Constraint::Percentage(50)])
        .header(Row::new(vec!["Feature", "Value"]).style(ShowroomTheme::focused()))
        .block(Block::default().title(Span::styled("Vehicle Details", ShowroomTheme::subtitle())));

    f.render_widget(table, area);
}
