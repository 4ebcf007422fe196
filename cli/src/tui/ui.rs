use descarga_core::engine::compute_derived;
use descarga_core::{format_brl, Column, Report, ReportKind, RowTotals, SavedDay};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Padding, Paragraph, Row, Table, Tabs},
    Frame,
};

use crate::tui::app::App;

struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    positive: Color,
    negative: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    positive: Color::Green,
    negative: Color::Red,
};

fn money_style(value: f64) -> Style {
    if value < 0.0 {
        Style::default().fg(THEME.negative)
    } else {
        Style::default().fg(THEME.positive)
    }
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(title)
}

pub fn draw(f: &mut Frame, app: &mut App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header / Tabs
            Constraint::Min(10),   // Days + Summary
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    draw_header(f, app, main_layout[0]);

    let Some(report) = app.current().cloned() else {
        f.render_widget(
            Paragraph::new("Nenhum dia salvo").alignment(Alignment::Center),
            main_layout[1],
        );
        return;
    };

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Length(1),
            Constraint::Percentage(40),
        ])
        .split(main_layout[1]);

    draw_days(f, app, &report, content[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(1)])
        .split(content[2]);
    draw_summary(f, &report.totals, side[0]);
    draw_day_detail(f, app.selected_day(), side[1]);

    let help = Line::from(vec![
        Span::styled("PERÍODO: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::styled(" DIA: ", Style::default().fg(THEME.muted)),
        Span::styled("↑/↓ ", Style::default().fg(THEME.text)),
        Span::styled(" SEMANAL/MENSAL: ", Style::default().fg(THEME.muted)),
        Span::styled("tab ", Style::default().fg(THEME.text)),
        Span::styled(" SAIR: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    f.render_widget(Paragraph::new(help).alignment(Alignment::Center), main_layout[2]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(30), // Banca
            Constraint::Length(22), // Tabs
            Constraint::Min(1),     // Period selector
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        format!("DESCARGA · {}", app.banca_name),
        Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    f.render_widget(title, header_layout[0]);

    let selected = match app.kind {
        ReportKind::Weekly => 0,
        ReportKind::Monthly => 1,
    };
    let tabs = Tabs::new(vec!["Semanal", "Mensal"])
        .select(selected)
        .style(Style::default().fg(THEME.muted))
        .highlight_style(Style::default().fg(THEME.text).add_modifier(Modifier::BOLD))
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    f.render_widget(tabs, header_layout[1]);

    if let Some(report) = app.current() {
        let nav = Line::from(vec![
            Span::styled(" < ", Style::default().fg(if app.has_older() { THEME.text } else { THEME.muted })),
            Span::styled(report.label.clone(), Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
            Span::styled(" > ", Style::default().fg(if app.has_newer() { THEME.text } else { THEME.muted })),
        ]);
        let nav = Paragraph::new(nav)
            .alignment(Alignment::Right)
            .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
        f.render_widget(nav, header_layout[2]);
    }

    f.render_widget(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(THEME.muted)),
        area,
    );
}

fn draw_days(f: &mut Frame, app: &mut App, report: &Report, area: Rect) {
    let rows: Vec<Row> = report
        .days
        .iter()
        .map(|day| {
            Row::new(vec![
                Cell::from(day.date.format("%d/%m %a").to_string()),
                Cell::from(format_brl(day.totals.entradas)),
                Cell::from(format_brl(day.totals.comissao)),
                Cell::from(format_brl(day.totals.premios)),
                Cell::from(Span::styled(format_brl(day.totals.saldo_final), money_style(day.totals.saldo_final))),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(12),
            Constraint::Min(12),
            Constraint::Min(12),
            Constraint::Min(12),
        ],
    )
    .header(
        Row::new(vec!["Data", "Entradas", "Comissão", "Prêmios", "Saldo Final"])
            .style(Style::default().fg(THEME.primary)),
    )
    .block(panel(" Dias "))
    .row_highlight_style(Style::default().bg(THEME.muted).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn totals_lines(totals: &RowTotals) -> Vec<Line<'static>> {
    let line = |label: &'static str, value: f64, style: Style| {
        Line::from(vec![
            Span::styled(label, Style::default().fg(THEME.muted)),
            Span::styled(format_brl(value), style),
        ])
    };
    vec![
        line("Entradas:    ", totals.entradas, Style::default().fg(THEME.text)),
        line("Comissão:    ", totals.comissao, Style::default().fg(THEME.text)),
        line("Prêmios:     ", totals.premios, Style::default().fg(THEME.text)),
        line(
            "Saldo Final: ",
            totals.saldo_final,
            money_style(totals.saldo_final).add_modifier(Modifier::BOLD),
        ),
    ]
}

fn draw_summary(f: &mut Frame, totals: &RowTotals, area: Rect) {
    let mut text = vec![Line::from(Span::styled("Total do período", Style::default().add_modifier(Modifier::BOLD)))];
    text.push(Line::from(""));
    text.extend(totals_lines(totals));
    f.render_widget(Paragraph::new(text).block(panel(" Resumo ")), area);
}

fn draw_day_detail(f: &mut Frame, day: Option<&SavedDay>, area: Rect) {
    let Some(day) = day else {
        f.render_widget(panel(" Dia "), area);
        return;
    };

    let derived = compute_derived(&day.log, &day.settings);
    let rows: Vec<Row> = Column::ALL
        .into_iter()
        .map(|column| {
            let saldo = derived.balances[column];
            Row::new(vec![
                Cell::from(column.label()),
                Cell::from(format_brl(day.log.entradas[column])),
                Cell::from(Span::styled(format_brl(saldo), money_style(saldo))),
            ])
        })
        .collect();

    let title = format!(
        " {} · {} / {} ",
        day.date.format("%d/%m/%Y"),
        day.settings.commission_period,
        day.settings.commission_group
    );
    let table = Table::new(rows, [Constraint::Length(12), Constraint::Min(10), Constraint::Min(10)])
        .header(Row::new(vec!["Coluna", "Entradas", "Saldo"]).style(Style::default().fg(THEME.primary)))
        .block(panel(&title));
    f.render_widget(table, area);
}
