//! Ratatui-based terminal UI.
//!
//! The dashboard lays out the portfolio page top to bottom: header, the
//! Optimization Simulator (organization + three sliders + stat cards), the
//! skill and KPI charts, the case-study cards and the playground fields.
//! Sliders and playground fields are adapters over one `SimulatorState`.

use std::io;
use std::time::Duration;

use chrono::Datelike;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph, Wrap},
};
use tracing::{debug, info};

use crate::app::pipeline::PageSnapshot;
use crate::config::{Config, Rgb};
use crate::data::{KpiMetric, KpiPoint, kpi_point, profile::LINKS, profile::TAGLINE};
use crate::domain::InputField;
use crate::error::AppError;
use crate::report::{StatCard, playground_cards, simulator_cards};
use crate::state::entry::{accepts_char, display_value};
use crate::state::{NumericField, SimulatorState};

mod plotters_chart;

use plotters_chart::{ChartLine, KpiPlottersChart};

/// Slider thumb moves per PageUp/PageDown.
const PAGE_STEPS: i32 = 10;

/// Start the TUI.
pub fn run(state: SimulatorState, config: Config) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    info!("dashboard started");
    let mut app = App::new(state, config);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// A focusable control on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Organization,
    Slider(InputField),
    Field(InputField),
}

const CONTROLS: [Control; 7] = [
    Control::Organization,
    Control::Slider(InputField::ReportsPerMonth),
    Control::Slider(InputField::HoursPerReport),
    Control::Slider(InputField::AutomationLevel),
    Control::Field(InputField::ReportsPerMonth),
    Control::Field(InputField::HoursPerReport),
    Control::Field(InputField::AutomationLevel),
];

struct App {
    state: SimulatorState,
    fields: [NumericField; 3],
    focus: usize,
    config: Config,
    status: String,
    /// Year printed in the footer.
    year: i32,
}

impl App {
    fn new(state: SimulatorState, config: Config) -> Self {
        let fields = InputField::ALL.map(|f| NumericField::new(f, &state));
        Self {
            state,
            fields,
            focus: 0,
            config,
            status: "Ready.".to_string(),
            year: chrono::Local::now().year(),
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            let ready = event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))?;
            if !ready {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn focused(&self) -> Control {
        CONTROLS[self.focus]
    }

    /// Apply one key press. Returns `true` when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % CONTROLS.len();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + CONTROLS.len() - 1) % CONTROLS.len();
            }
            KeyCode::Char('r') => {
                self.state.reset();
                self.status = "Reset to defaults.".to_string();
            }
            _ => self.handle_control_key(code),
        }

        self.sync_fields();
        false
    }

    fn handle_control_key(&mut self, code: KeyCode) {
        match self.focused() {
            Control::Organization => match code {
                KeyCode::Left => self.state.cycle_org(false),
                KeyCode::Right | KeyCode::Enter => self.state.cycle_org(true),
                _ => return,
            },
            Control::Slider(field) => {
                let moved = match code {
                    KeyCode::Left => self.state.nudge_slider(field, -1),
                    KeyCode::Right => self.state.nudge_slider(field, 1),
                    KeyCode::PageDown => self.state.nudge_slider(field, -PAGE_STEPS),
                    KeyCode::PageUp => self.state.nudge_slider(field, PAGE_STEPS),
                    KeyCode::Home => self.state.jump_slider(field, false),
                    KeyCode::End => self.state.jump_slider(field, true),
                    _ => return,
                };
                self.status = format!("{}: {}", field.slider_label(), display_value(moved));
                return;
            }
            Control::Field(field) => {
                let idx = field_index(field);
                match code {
                    KeyCode::Char(c) if accepts_char(c) => self.fields[idx].push(c, &mut self.state),
                    KeyCode::Backspace => self.fields[idx].pop(&mut self.state),
                    KeyCode::Delete => self.fields[idx].clear(&mut self.state),
                    KeyCode::Char(c) => {
                        debug!(%c, "ignored non-numeric keystroke");
                        return;
                    }
                    _ => return,
                }
                self.status = format!(
                    "{}: {}",
                    field.field_label(),
                    display_value(self.state.value(field))
                );
                return;
            }
        }
        self.status = format!("Organization: {}", self.state.org().display_name());
    }

    fn sync_fields(&mut self) {
        for f in &mut self.fields {
            f.sync(&self.state);
        }
    }

    fn accent(&self) -> Color {
        rgb(self.config.theme.accent)
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let page = PageSnapshot::capture(&self.state, &self.config, self.year);

        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(10),
                Constraint::Min(12),
                Constraint::Length(7),
                Constraint::Length(6),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0], &page);
        self.draw_simulator(frame, chunks[1], &page);
        self.draw_charts(frame, chunks[2], &page);
        self.draw_stories(frame, chunks[3], &page);
        self.draw_playground(frame, chunks[4], &page);
        self.draw_footer(frame, chunks[5], &page);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect, page: &PageSnapshot) {
        let link_style = Style::default().fg(rgb(self.config.theme.accent_soft));
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{} — ", page.profile.owner),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    crate::data::profile::TITLE_SUFFIX,
                    Style::default().fg(self.accent()).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))),
            Line::from(
                LINKS
                    .iter()
                    .map(|l| Span::styled(format!("[{l}] "), link_style))
                    .collect::<Vec<_>>(),
            ),
        ];

        let p = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_simulator(&self, frame: &mut ratatui::Frame<'_>, area: Rect, page: &PageSnapshot) {
        let block = Block::default()
            .title("Optimization Simulator")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(4), Constraint::Min(0)])
            .split(inner);

        let pitch = Paragraph::new(page.profile.simulator_pitch(page.org.display_name()))
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(pitch, rows[0]);

        let controls = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(rows[1]);

        let org_lines = vec![
            Line::from(Span::styled("Organization", Style::default().fg(Color::Gray))),
            Line::from(format!("‹ {} ›", page.org.display_name())),
        ];
        frame.render_widget(
            Paragraph::new(org_lines).style(self.focus_style(Control::Organization)),
            controls[0],
        );

        for (i, field) in InputField::ALL.into_iter().enumerate() {
            let rect = controls[i + 1];
            let value = page.input.get(field);
            let track_width = rect.width.saturating_sub(2) as usize;
            let lines = vec![
                Line::from(Span::styled(field.slider_label(), Style::default().fg(Color::Gray))),
                Line::from(Span::styled(
                    slider_track(field.slider().ratio(value), track_width),
                    Style::default().fg(self.accent()),
                )),
                Line::from(format!("{}{}", display_value(value), field.value_suffix())),
            ];
            frame.render_widget(
                Paragraph::new(lines).style(self.focus_style(Control::Slider(field))),
                rect,
            );
        }

        self.draw_cards(frame, rows[2], &simulator_cards(&page.result));
    }

    fn draw_cards(&self, frame: &mut ratatui::Frame<'_>, area: Rect, cards: &[StatCard]) {
        if cards.is_empty() {
            return;
        }
        let constraints = vec![Constraint::Ratio(1, cards.len() as u32); cards.len()];
        let rects = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (card, rect) in cards.iter().zip(rects.iter()) {
            let mut spans = vec![Span::styled(
                card.value.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            if let Some(sub) = card.sub {
                spans.push(Span::styled(format!("  {sub}"), Style::default().fg(Color::Gray)));
            }
            let p = Paragraph::new(Line::from(spans)).block(
                Block::default()
                    .title(Span::styled(card.label, Style::default().fg(Color::Gray)))
                    .borders(Borders::ALL),
            );
            frame.render_widget(p, *rect);
        }
    }

    fn draw_charts(&self, frame: &mut ratatui::Frame<'_>, area: Rect, page: &PageSnapshot) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let bars: Vec<Bar> = page
            .skills
            .iter()
            .map(|s| {
                Bar::default()
                    .value(u64::from(s.score))
                    .label(Line::from(s.subject))
                    .style(Style::default().fg(self.accent()))
            })
            .collect();
        let radar = BarChart::default()
            .block(Block::default().title("Skill Radar").borders(Borders::ALL))
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0)
            .max(100)
            .data(BarGroup::default().bars(&bars));
        frame.render_widget(radar, halves[0]);

        self.draw_kpi_chart(frame, halves[1], &page.kpis);
    }

    fn draw_kpi_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect, series: &[KpiPoint]) {
        let block = Block::default().title("Real-Time Style KPIs").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let (lines, x_bounds, y_bounds) = chart_series(series);
        let widget = KpiPlottersChart {
            lines: &lines,
            x_bounds,
            y_bounds,
            fmt_x: fmt_axis_quarter,
            fmt_y: fmt_axis_y,
        };
        frame.render_widget(widget, rows[0]);

        let legend: Vec<Span> = KpiMetric::ALL
            .iter()
            .map(|m| {
                let (r, g, b) = m.rgb();
                Span::styled(format!("━ {}  ", m.label()), Style::default().fg(Color::Rgb(r, g, b)))
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(legend)), rows[1]);
    }

    fn draw_stories(&self, frame: &mut ratatui::Frame<'_>, area: Rect, page: &PageSnapshot) {
        let block = Block::default().title("Data Stories").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let count = page.stories.len().max(1) as u32;
        let rects = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, count); page.stories.len()])
            .split(inner);

        for (story, rect) in page.stories.iter().zip(rects.iter()) {
            let mut lines = vec![Line::from(Span::styled(
                story.title,
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            lines.extend(story.bullets.iter().map(|b| Line::from(format!("• {b}"))));
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), *rect);
        }
    }

    fn draw_playground(&self, frame: &mut ratatui::Frame<'_>, area: Rect, page: &PageSnapshot) {
        let block = Block::default()
            .title("Predictive Insight Playground")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(inner);

        for (field, rect) in self.fields.iter().zip(cols.iter()) {
            let focused = self.focused() == Control::Field(field.field);
            let cursor = if focused { "▏" } else { "" };
            let p = Paragraph::new(format!("{}{cursor}", field.text()))
                .style(self.focus_style(Control::Field(field.field)))
                .block(
                    Block::default()
                        .title(Span::styled(field.field.field_label(), Style::default().fg(Color::Gray)))
                        .borders(Borders::ALL),
                );
            frame.render_widget(p, *rect);
        }

        let cards = playground_cards(&page.result);
        let lines: Vec<Line> = cards
            .iter()
            .map(|c| {
                Line::from(vec![
                    Span::styled(format!("{}: ", c.label), Style::default().fg(Color::Gray)),
                    Span::styled(c.value.clone(), Style::default().add_modifier(Modifier::BOLD)),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), cols[3]);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect, page: &PageSnapshot) {
        let help = "Tab/↑/↓ focus  ←/→ adjust  PgUp/PgDn ±10  Home/End bounds  type digits in fields  r reset  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let credit = Span::styled(page.profile.footer(page.year), Style::default().fg(Color::DarkGray));
        let p = Paragraph::new(line).block(Block::default().title_bottom(credit).borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn focus_style(&self, control: Control) -> Style {
        if self.focused() == control {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default()
        }
    }
}

fn field_index(field: InputField) -> usize {
    match field {
        InputField::ReportsPerMonth => 0,
        InputField::HoursPerReport => 1,
        InputField::AutomationLevel => 2,
    }
}

fn rgb(c: Rgb) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}

/// Text slider track, e.g. `━━━━●─────` for ratio 0.4.
fn slider_track(ratio: f64, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let ratio = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 };
    let thumb = (ratio * (width as f64 - 1.0)).round() as usize;
    (0..width)
        .map(|i| match i.cmp(&thumb) {
            std::cmp::Ordering::Less => '━',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '─',
        })
        .collect()
}

/// Build chart series for Plotters.
fn chart_series(series: &[KpiPoint]) -> (Vec<ChartLine>, [f64; 2], [f64; 2]) {
    let lines: Vec<ChartLine> = KpiMetric::ALL
        .iter()
        .map(|&m| ChartLine {
            points: series
                .iter()
                .enumerate()
                .map(|(i, p)| (i as f64, m.value(p)))
                .collect(),
            color: m.rgb(),
        })
        .collect();

    let x_max = series.len().saturating_sub(1).max(1) as f64;

    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for line in &lines {
        for &(_, y) in &line.points {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    if !y_min.is_finite() || !y_max.is_finite() || y_max <= y_min {
        y_min = 0.0;
        y_max = 1.0;
    }

    // KPI values are non-negative; anchor the axis at zero like the page does.
    let y_min = y_min.min(0.0);
    let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);

    (lines, [0.0, x_max], [y_min, y_max + pad])
}

fn fmt_axis_quarter(v: f64) -> String {
    if v < 0.0 || !v.is_finite() {
        return String::new();
    }
    kpi_point(v.round() as usize).name
}

fn fmt_axis_y(v: f64) -> String {
    format!("{v:.0}")
}
