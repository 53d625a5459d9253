use crate::app::{App, QuerySlot};
use crate::ui::theme::Theme;
use crate::ui::{footer, header, sidebar};
use crate::util::human::fmt_rate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Sparkline, Wrap},
    Frame,
};

/// Transfer-rate page: per-category rates sampled from successive storage
/// snapshots, rendered as label + sparkline rows.
pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    header::render(f, root[0], app, theme);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(0)])
        .split(root[1]);

    sidebar::render(f, body[0], &app.sidebar, theme);
    render_chart(f, body[1], app, theme);

    footer::render(f, root[2], &app.active_view, &app.endpoint, theme);
}

fn render_chart(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(Span::styled(" Deal Transfers ", theme.title));

    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    if let QuerySlot::Error(msg) = &app.storage {
        f.render_widget(
            Paragraph::new(Span::styled(format!("Error: {}", msg), theme.crit))
                .wrap(Wrap { trim: true }),
            inner,
        );
        return;
    }
    if app.transfer_history.is_empty() {
        f.render_widget(Paragraph::new(Span::styled("Loading...", theme.text_dim)), inner);
        return;
    }

    let sample_count = (inner.width as usize).saturating_sub(2).max(10);
    let transfer_data = app.transfer_history.tail(sample_count);
    let staging_data = app.staging_history.tail(sample_count);

    let transfer_max = transfer_data.iter().copied().max().unwrap_or(1).max(1);
    let staging_max = staging_data.iter().copied().max().unwrap_or(1).max(1);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // transfer label
            Constraint::Length(3),  // transfer sparkline
            Constraint::Length(1),  // staging label
            Constraint::Length(3),  // staging sparkline
            Constraint::Min(1),     // footnote
        ])
        .split(inner);

    let transfer_label = Line::from(vec![
        Span::styled("Transfer ", theme.transfer_spark),
        Span::styled(fmt_rate(app.transfer_rate), theme.text),
    ]);
    f.render_widget(Paragraph::new(transfer_label), rows[0]);

    let transfer_sparkline = Sparkline::default()
        .data(&transfer_data)
        .max(transfer_max)
        .style(theme.transfer_spark);
    f.render_widget(transfer_sparkline, rows[1]);

    let staging_label = Line::from(vec![
        Span::styled("Staging  ", theme.staging_spark),
        Span::styled(fmt_rate(app.staging_rate), theme.text),
    ]);
    f.render_widget(Paragraph::new(staging_label), rows[2]);

    let staging_sparkline = Sparkline::default()
        .data(&staging_data)
        .max(staging_max)
        .style(theme.staging_spark);
    f.render_widget(staging_sparkline, rows[3]);

    let footnote = Line::from(Span::styled(
        "rates derived from successive snapshots; drops to zero when a deal completes",
        theme.text_dim,
    ));
    f.render_widget(Paragraph::new(footnote), rows[4]);
}
