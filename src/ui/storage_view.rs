use crate::app::{App, QuerySlot};
use crate::models::bars::{cumulative, CumulativeBars};
use crate::models::storage::LegacySnapshot;
use crate::ui::theme::Theme;
use crate::ui::{cumulative_bar, footer, header, sidebar};
use crate::util::human::{add_commas, fmt_bytes};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const MOUNT_POINT_DESC: &str = "The path to the directory where downloaded \
     data is kept until the deal is added to a sector";

/// Storage page: header | sidebar + detail panel | footer.
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
    render_page(f, body[1], app, theme);

    footer::render(f, root[2], &app.active_view, &app.endpoint, theme);
}

fn render_page(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(Span::styled(" Storage Space ", theme.title));

    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    // The two sections poll independently; one failing never hides the other
    let storage_height = match &app.storage {
        QuerySlot::Ready(_) => {
            let fields = if app.show_desc { 10 } else { 5 };
            6 + fields
        }
        _ => 2,
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(storage_height), Constraint::Min(0)])
        .split(inner);

    render_storage(f, rows[0], app, theme);
    render_legacy(f, rows[1], &app.legacy, app.show_desc, theme);
}

fn render_storage(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    match &app.storage {
        QuerySlot::Loading => {
            f.render_widget(Paragraph::new(Span::styled("Loading...", theme.text_dim)), area);
        }
        QuerySlot::Error(msg) => {
            f.render_widget(
                Paragraph::new(Span::styled(format!("Error: {}", msg), theme.crit))
                    .wrap(Wrap { trim: true }),
                area,
            );
        }
        QuerySlot::Ready(snap) => {
            let bars = cumulative(&snap.bars());
            let fields = field_lines(&bars, &snap.mount_point, app.show_desc, theme);

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),                    // heading
                    Constraint::Length(1),                    // stacked bar
                    Constraint::Length(2),                    // legend
                    Constraint::Length(1),                    // gap
                    Constraint::Length(fields.len() as u16),  // fields table
                    Constraint::Min(0),
                ])
                .split(area);

            f.render_widget(
                Paragraph::new(Span::styled("Deal transfers", theme.title)),
                rows[0],
            );
            cumulative_bar::render_bar(f, rows[1], &bars, theme);
            cumulative_bar::render_labels(f, rows[2], &bars, theme);
            f.render_widget(Paragraph::new(fields), rows[4]);
        }
    }
}

/// One line per field: name, human size, exact byte count. With `show_desc`
/// each field gets its operator-facing explanation on a dim second line.
fn field_lines<'a>(
    bars: &CumulativeBars,
    mount_point: &str,
    show_desc: bool,
    theme: &Theme,
) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for seg in &bars.segments {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<13}", seg.bar.name), theme.bar_style(seg.bar.name)),
            Span::styled(fmt_bytes(seg.bar.amount), theme.text),
            Span::styled(format!("  ({} bytes)", add_commas(seg.bar.amount)), theme.text_dim),
        ]));
        if show_desc {
            if let Some(desc) = seg.bar.description {
                lines.push(Line::from(Span::styled(format!("  {}", desc), theme.text_dim)));
            }
        }
    }
    lines.push(Line::from(vec![
        Span::styled(format!("{:<13}", "Mount Point"), theme.text),
        Span::styled(mount_point.to_string(), theme.text),
    ]));
    if show_desc {
        lines.push(Line::from(Span::styled(
            format!("  {}", MOUNT_POINT_DESC),
            theme.text_dim,
        )));
    }
    lines
}

/// Legacy capacity panel. Zero capacity means the legacy subsystem was never
/// present, and the whole panel is suppressed.
fn render_legacy(
    f: &mut Frame,
    area: Rect,
    slot: &QuerySlot<LegacySnapshot>,
    show_desc: bool,
    theme: &Theme,
) {
    if area.height == 0 {
        return;
    }
    match slot {
        QuerySlot::Loading => {
            f.render_widget(Paragraph::new(Span::styled("Loading...", theme.text_dim)), area);
        }
        QuerySlot::Error(msg) => {
            f.render_widget(
                Paragraph::new(Span::styled(format!("Error: {}", msg), theme.crit))
                    .wrap(Wrap { trim: true }),
                area,
            );
        }
        QuerySlot::Ready(snap) if snap.is_absent() => {}
        QuerySlot::Ready(snap) => {
            let bars = cumulative(&snap.bars());
            let fields = field_lines(&bars, &snap.mount_point, show_desc, theme);

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(2),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ])
                .split(area);

            f.render_widget(
                Paragraph::new(Span::styled("Legacy Deal transfers", theme.title)),
                rows[0],
            );
            cumulative_bar::render_bar(f, rows[1], &bars, theme);
            cumulative_bar::render_labels(f, rows[2], &bars, theme);
            f.render_widget(Paragraph::new(fields), rows[4]);
        }
    }
}
