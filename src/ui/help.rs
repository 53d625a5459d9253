use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, theme: &Theme) {
    let area = centered_rect(52, 14, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused)
        .title(Span::styled(" dealtop — Keybindings (? or F1 to close) ", theme.title));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        key_line(theme, "q / Ctrl-C", "Quit"),
        key_line(theme, "Esc / h",    "Back to storage view"),
        key_line(theme, "F2 / d",     "Toggle transfer-rate view"),
        key_line(theme, "D",          "Toggle field descriptions"),
        key_line(theme, "r",          "Refresh (reset to Loading)"),
        key_line(theme, "t",          "Cycle color theme"),
        key_line(theme, "? / F1",     "Toggle this help"),
        Line::from(""),
        Line::from(Span::styled(
            "Storage polls every second; the sidebar refreshes",
            theme.text_dim,
        )),
        Line::from(Span::styled(
            "every 5 s straight from the network.",
            theme.text_dim,
        )),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}

fn key_line<'a>(theme: &Theme, key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<12}", key), theme.title),
        Span::styled(desc, theme.text),
    ])
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
