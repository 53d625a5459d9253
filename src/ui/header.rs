use crate::app::{App, QuerySlot};
use crate::ui::theme::Theme;
use crate::util::human::{fmt_bytes, fmt_pct};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Two-line header: title + clock, then a capacity summary of the last
/// detail snapshot.
pub fn render(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let now = Local::now().format("%H:%M:%S").to_string();
    let left = format!(" dealtop v0.1 — {} ", app.theme_variant.name());
    let right = format!(" {} ", now);

    let pad = (area.width as usize).saturating_sub(left.len() + right.len());
    let line1 = Line::from(vec![
        Span::styled(left, theme.title),
        Span::styled(" ".repeat(pad), theme.header),
        Span::styled(right, theme.text_dim),
    ]);

    let line2 = match &app.storage {
        QuerySlot::Ready(snap) => {
            let used = snap.used();
            let total = snap.total();
            let share = if total == 0 { 0.0 } else { used as f64 / total as f64 };
            Line::from(vec![
                Span::styled(
                    format!(" {} of {} used ({})  ", fmt_bytes(used), fmt_bytes(total), fmt_pct(share)),
                    theme.usage_style(share * 100.0),
                ),
                Span::styled(format!("mount {}", snap.mount_point), theme.text_dim),
            ])
        }
        _ => Line::from(Span::styled(
            format!(" polling {}", app.endpoint),
            theme.text_dim,
        )),
    };

    f.render_widget(Paragraph::new(vec![line1, line2]).style(theme.header), area);
}
