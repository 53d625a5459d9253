use crate::app::QuerySlot;
use crate::models::storage::StorageSnapshot;
use crate::ui::theme::Theme;
use crate::util::human::{fmt_bytes, fmt_pct};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Compact capacity summary fed by its own 5 s network-only poll. Used and
/// total are recomputed from the four category amounts; with no data yet it
/// shows an empty 0% gauge, like the web sidebar it descends from.
pub fn render(f: &mut Frame, area: Rect, slot: &QuerySlot<StorageSnapshot>, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(Span::styled(" Storage Space ", theme.title));

    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let (used, total) = match slot {
        QuerySlot::Ready(snap) => (snap.used(), snap.total()),
        _ => (0, 0),
    };
    let share = if total == 0 { 0.0 } else { used as f64 / total as f64 };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(theme.usage_style(share * 100.0))
        .ratio(share.clamp(0.0, 1.0))
        .label(fmt_pct(share));
    f.render_widget(gauge, rows[0]);

    let explanation = Line::from(vec![
        Span::styled(fmt_bytes(used), theme.text),
        Span::styled(" of ", theme.text_dim),
        Span::styled(fmt_bytes(total), theme.text),
        Span::styled(" used", theme.text_dim),
    ]);
    f.render_widget(Paragraph::new(explanation), rows[1]);
}
