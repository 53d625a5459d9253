use crate::app::ActiveView;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(
    f: &mut Frame,
    area: Rect,
    active_view: &ActiveView,
    endpoint: &str,
    theme: &Theme,
) {
    let base: &[(&str, &str)] = match active_view {
        ActiveView::Storage => &[
            ("q", "Quit"), ("F2", "Transfers"), ("D", "Descriptions"),
            ("r", "Refresh"), ("t", "Theme"), ("?", "Help"),
        ],
        ActiveView::Transfers => &[
            ("q", "Quit"), ("Esc", "Back"), ("t", "Theme"), ("?", "Help"),
        ],
    };

    let mut spans: Vec<Span> = vec![Span::styled(" ", theme.footer_bg)];

    for (key, desc) in base {
        spans.push(Span::styled(format!(" {} ", key), theme.footer_key));
        spans.push(Span::styled(format!("{}  ", desc), theme.footer_text));
    }

    spans.push(Span::styled("  \u{2502}  ", theme.footer_text));
    spans.push(Span::styled(format!("polling {}", endpoint), theme.footer_text));

    let line = Line::from(spans);
    let para = Paragraph::new(line).style(theme.footer_bg);
    f.render_widget(para, area);
}
