use crate::models::bars::CumulativeBars;
use crate::ui::theme::Theme;
use crate::util::human::{fmt_bytes, fmt_pct};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render a stacked single-row bar. Each segment's cell range comes from its
/// cumulative offset, so adjacent segments tile exactly and never overrun
/// the area. An empty whole renders as a dim hatched track.
pub fn render_bar(f: &mut Frame, area: Rect, bars: &CumulativeBars, theme: &Theme) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    if bars.total == 0 {
        let track = "░".repeat(area.width as usize);
        f.render_widget(Paragraph::new(Span::styled(track, theme.text_dim)), area);
        return;
    }

    let mut spans: Vec<Span> = Vec::with_capacity(bars.segments.len());
    for (seg, (start, end)) in bars.segments.iter().zip(bars.cells(area.width)) {
        let cells = (end - start) as usize;
        if cells == 0 {
            continue;
        }
        spans.push(Span::styled("█".repeat(cells), theme.bar_style(seg.bar.name)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Legend line under a cumulative bar: "■ Staged 1.4 GiB (23%)  ■ ...".
pub fn render_labels(f: &mut Frame, area: Rect, bars: &CumulativeBars, theme: &Theme) {
    let mut spans: Vec<Span> = Vec::new();
    for seg in &bars.segments {
        spans.push(Span::styled("■ ", theme.bar_style(seg.bar.name)));
        spans.push(Span::styled(format!("{} ", seg.bar.name), theme.text));
        spans.push(Span::styled(
            format!("{} ({})   ", fmt_bytes(seg.bar.amount), fmt_pct(seg.share)),
            theme.text_dim,
        ));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }),
        area,
    );
}
