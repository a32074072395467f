//! Drawing the interactive form.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use ship_core::fields::InputField;
use ship_core::history::HISTORY_CAPACITY;
use ship_core::report::{self, ChartData};
use ship_core::style::{self as cell_style, Align, CellStyle};

use super::app::{App, Status};

const HELP: &str = "↑↓ select  ←→ step  0-9 type  Enter apply  s save  r reset  q quit";

pub fn draw(frame: &mut Frame, app: &App) {
    let [left, right] = Layout::horizontal([Constraint::Length(46), Constraint::Min(40)]).areas(frame.area());
    let [form_area, formulas_area] = Layout::vertical([Constraint::Length(15), Constraint::Min(0)]).areas(left);
    let [summary_area, history_area, chart_area] = Layout::vertical([
        Constraint::Min(16),
        Constraint::Length(HISTORY_CAPACITY as u16 + 3),
        Constraint::Length(10),
    ])
    .areas(right);

    draw_form(frame, app, form_area);
    draw_formulas(frame, formulas_area);
    draw_summary(frame, app, summary_area);
    draw_history(frame, app, history_area);
    draw_chart(frame, app, chart_area);
}

fn draw_form(frame: &mut Frame, app: &App, area: Rect) {
    let input = app.session.input();
    let mut lines: Vec<Line> = InputField::ALL
        .iter()
        .map(|field| {
            let selected = *field == app.selected;
            let value = match (&app.edit_buffer, selected) {
                (Some(buffer), true) => format!("{}_", buffer),
                _ => field.display_value(field.get(input)),
            };
            let style = if selected {
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(format!("{:<34}", field.label()), style),
                Span::styled(format!("{:>9}", value), style),
            ])
        })
        .collect();

    lines.push(Line::default());
    match &app.status {
        Some(Status::Info(msg)) => lines.push(Line::styled(msg.clone(), Style::default().fg(Color::Green))),
        Some(Status::Error(msg)) => lines.push(Line::styled(msg.clone(), Style::default().fg(Color::Red))),
        None => lines.push(Line::default()),
    }
    lines.push(Line::styled(HELP, Style::default().fg(Color::DarkGray)));

    let form = Paragraph::new(lines)
        .block(Block::bordered().title(" Shipping Scenario Inputs "))
        .wrap(Wrap { trim: false });
    frame.render_widget(form, area);
}

fn draw_formulas(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new(report::formulas_text())
        .block(Block::bordered().title(" Quick Shipping Formulas "))
        .wrap(Wrap { trim: true });
    frame.render_widget(text, area);
}

fn draw_summary(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::bordered().title(" Scenario Overview ");
    let paragraph = match app.evaluation() {
        Ok(result) => {
            let body = report::summary(app.session.input(), &result, app.session.currencies());
            let mut text = Text::default();
            for line in body.lines() {
                if result.capacity_exceeded && line.starts_with("Quantity exceeds") {
                    text.push_line(Line::styled(
                        format!("⚠ {}", line),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ));
                } else {
                    text.push_line(Line::raw(line.to_string()));
                }
            }
            Paragraph::new(text)
        }
        Err(e) => Paragraph::new(Line::styled(e.to_string(), Style::default().fg(Color::Red))),
    };
    frame.render_widget(paragraph.block(block).wrap(Wrap { trim: false }), area);
}

fn draw_history(frame: &mut Frame, app: &App, area: Rect) {
    let currencies = app.session.currencies();
    let columns = report::history_columns(currencies);
    let header_style = to_ratatui(&cell_style::header_style());
    let header = Row::new(
        columns
            .iter()
            .map(|c| Cell::from(Line::from(c.clone()).alignment(Alignment::Center)).style(header_style)),
    );

    let rows = report::history_rows(app.session.history(), currencies).into_iter().map(|cells| {
        Row::new(cells.into_iter().map(|cell| {
            Cell::from(Line::from(cell.text).alignment(alignment(cell.style.align))).style(to_ratatui(&cell.style))
        }))
    });

    let widths = columns.iter().map(|c| Constraint::Min(c.chars().count() as u16));
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(Block::bordered().title(format!(" Last {} Saved Scenarios ", HISTORY_CAPACITY)));
    frame.render_widget(table, area);
}

fn draw_chart(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::bordered().title(" Container Fill vs Leftover Items ");
    let Ok(result) = app.evaluation() else {
        frame.render_widget(block, area);
        return;
    };

    let data = ChartData::from_result(&result);
    let fill = data.fill_percent.round() as u64;
    let bars = [
        Bar::default()
            .value(fill)
            .text_value(format!("{:.1}%", data.fill_percent))
            .label(Line::from(ChartData::FILL_LABEL))
            .style(Style::default().fg(Color::Cyan)),
        Bar::default()
            .value(data.overflow_items)
            .text_value(data.overflow_items.to_string())
            .label(Line::from(ChartData::OVERFLOW_LABEL))
            .style(Style::default().fg(Color::Magenta)),
    ];

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(20)
        .bar_gap(4)
        .max(data.overflow_items.max(100));
    frame.render_widget(chart, area);
}

fn alignment(align: Align) -> Alignment {
    match align {
        Align::Left => Alignment::Left,
        Align::Center => Alignment::Center,
        Align::Right => Alignment::Right,
    }
}

/// Map a cell style descriptor onto a terminal style
fn to_ratatui(style: &CellStyle) -> Style {
    let mut out = Style::default();
    if let Some(bg) = style.background {
        out = out.bg(Color::Rgb(bg.0, bg.1, bg.2));
    }
    if let Some(fg) = style.foreground {
        out = out.fg(Color::Rgb(fg.0, fg.1, fg.2));
    }
    if style.bold {
        out = out.add_modifier(Modifier::BOLD);
    }
    out
}
