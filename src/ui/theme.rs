use ratatui::style::{Color, Modifier, Style};

// ── Helper: build an Rgb Color from a hex literal ──────────────────────

const fn rgb(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >>  8) & 0xFF) as u8,
        ( hex        & 0xFF) as u8,
    )
}

// ── Theme variant selector ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThemeVariant {
    Default,
    Dracula,
    Gruvbox,
    Nord,
}

impl ThemeVariant {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Dracula => "Dracula",
            Self::Gruvbox => "Gruvbox",
            Self::Nord    => "Nord",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Default => Self::Dracula,
            Self::Dracula => Self::Gruvbox,
            Self::Gruvbox => Self::Nord,
            Self::Nord    => Self::Default,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::Dracula,
            "gruvbox" => Self::Gruvbox,
            "nord"    => Self::Nord,
            _         => Self::Default,
        }
    }
}

// ── Theme struct ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct Theme {
    pub border:         Style,
    pub border_focused: Style,
    pub title:          Style,
    pub text:           Style,
    pub text_dim:       Style,
    pub header:         Style,
    pub ok:             Style,
    pub warn:           Style,
    pub crit:           Style,

    // Storage category segments (stack order)
    pub staged:         Style,
    pub transferred:    Style,
    pub pending:        Style,
    pub free:           Style,
    // Legacy panel's Used segment
    pub used:           Style,

    // Transfer-rate chart series
    pub transfer_spark: Style,
    pub staging_spark:  Style,

    // Sidebar gauge gradient
    pub gauge_low:      Style,
    pub gauge_mid:      Style,
    pub gauge_high:     Style,
    pub gauge_crit:     Style,

    pub footer_bg:      Style,
    pub footer_key:     Style,
    pub footer_text:    Style,
}

impl Theme {
    pub fn for_variant(v: ThemeVariant) -> Self {
        match v {
            ThemeVariant::Default => Self::default(),
            ThemeVariant::Dracula => Self::dracula(),
            ThemeVariant::Gruvbox => Self::gruvbox(),
            ThemeVariant::Nord    => Self::nord(),
        }
    }

    pub fn default() -> Self {
        Self {
            border:         Style::default().fg(Color::DarkGray),
            border_focused: Style::default().fg(Color::Cyan),
            title:          Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            text:           Style::default().fg(Color::White),
            text_dim:       Style::default().fg(Color::DarkGray),
            header:         Style::default().fg(Color::Black).bg(Color::Blue).add_modifier(Modifier::BOLD),
            ok:             Style::default().fg(Color::Green),
            warn:           Style::default().fg(Color::Yellow),
            crit:           Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            staged:         Style::default().fg(Color::Green),
            transferred:    Style::default().fg(Color::Cyan),
            pending:        Style::default().fg(Color::Yellow),
            free:           Style::default().fg(Color::DarkGray),
            used:           Style::default().fg(Color::LightRed),
            transfer_spark: Style::default().fg(Color::Cyan),
            staging_spark:  Style::default().fg(Color::Green),
            gauge_low:      Style::default().fg(Color::Green),
            gauge_mid:      Style::default().fg(Color::Yellow),
            gauge_high:     Style::default().fg(Color::LightRed),
            gauge_crit:     Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            footer_bg:      Style::default().bg(Color::DarkGray).fg(Color::White),
            footer_key:     Style::default().bg(Color::DarkGray).fg(Color::Cyan).add_modifier(Modifier::BOLD),
            footer_text:    Style::default().bg(Color::DarkGray).fg(Color::Gray),
        }
    }

    fn dracula() -> Self {
        // https://draculatheme.com/ — purple/pink dark theme
        Self {
            border:         Style::default().fg(rgb(0x6272a4)),
            border_focused: Style::default().fg(rgb(0xbd93f9)),
            title:          Style::default().fg(rgb(0xf8f8f2)).add_modifier(Modifier::BOLD),
            text:           Style::default().fg(rgb(0xf8f8f2)),
            text_dim:       Style::default().fg(rgb(0x6272a4)),
            header:         Style::default().fg(rgb(0xf8f8f2)).bg(rgb(0x44475a)).add_modifier(Modifier::BOLD),
            ok:             Style::default().fg(rgb(0x50fa7b)),
            warn:           Style::default().fg(rgb(0xf1fa8c)),
            crit:           Style::default().fg(rgb(0xff5555)).add_modifier(Modifier::BOLD),
            staged:         Style::default().fg(rgb(0x50fa7b)),
            transferred:    Style::default().fg(rgb(0x8be9fd)),
            pending:        Style::default().fg(rgb(0xf1fa8c)),
            free:           Style::default().fg(rgb(0x6272a4)),
            used:           Style::default().fg(rgb(0xffb86c)),
            transfer_spark: Style::default().fg(rgb(0x8be9fd)),
            staging_spark:  Style::default().fg(rgb(0x50fa7b)),
            gauge_low:      Style::default().fg(rgb(0x50fa7b)),
            gauge_mid:      Style::default().fg(rgb(0xf1fa8c)),
            gauge_high:     Style::default().fg(rgb(0xffb86c)),
            gauge_crit:     Style::default().fg(rgb(0xff5555)).add_modifier(Modifier::BOLD),
            footer_bg:      Style::default().bg(rgb(0x44475a)).fg(rgb(0xf8f8f2)),
            footer_key:     Style::default().bg(rgb(0x44475a)).fg(rgb(0xbd93f9)).add_modifier(Modifier::BOLD),
            footer_text:    Style::default().bg(rgb(0x44475a)).fg(rgb(0x6272a4)),
        }
    }

    fn gruvbox() -> Self {
        // https://github.com/morhetz/gruvbox — warm retro dark theme
        Self {
            border:         Style::default().fg(rgb(0x504945)),
            border_focused: Style::default().fg(rgb(0x83a598)),
            title:          Style::default().fg(rgb(0xebdbb2)).add_modifier(Modifier::BOLD),
            text:           Style::default().fg(rgb(0xebdbb2)),
            text_dim:       Style::default().fg(rgb(0xa89984)),
            header:         Style::default().fg(rgb(0xebdbb2)).bg(rgb(0x504945)).add_modifier(Modifier::BOLD),
            ok:             Style::default().fg(rgb(0xb8bb26)),
            warn:           Style::default().fg(rgb(0xfabd2f)),
            crit:           Style::default().fg(rgb(0xfb4934)).add_modifier(Modifier::BOLD),
            staged:         Style::default().fg(rgb(0xb8bb26)),
            transferred:    Style::default().fg(rgb(0x83a598)),
            pending:        Style::default().fg(rgb(0xfabd2f)),
            free:           Style::default().fg(rgb(0x665c54)),
            used:           Style::default().fg(rgb(0xfe8019)),
            transfer_spark: Style::default().fg(rgb(0x83a598)),
            staging_spark:  Style::default().fg(rgb(0xb8bb26)),
            gauge_low:      Style::default().fg(rgb(0xb8bb26)),
            gauge_mid:      Style::default().fg(rgb(0xfabd2f)),
            gauge_high:     Style::default().fg(rgb(0xfe8019)),
            gauge_crit:     Style::default().fg(rgb(0xfb4934)).add_modifier(Modifier::BOLD),
            footer_bg:      Style::default().bg(rgb(0x3c3836)).fg(rgb(0xebdbb2)),
            footer_key:     Style::default().bg(rgb(0x3c3836)).fg(rgb(0x83a598)).add_modifier(Modifier::BOLD),
            footer_text:    Style::default().bg(rgb(0x3c3836)).fg(rgb(0xa89984)),
        }
    }

    fn nord() -> Self {
        // https://www.nordtheme.com/ — Arctic, north-bluish clean theme
        Self {
            border:         Style::default().fg(rgb(0x4c566a)),
            border_focused: Style::default().fg(rgb(0x88c0d0)),
            title:          Style::default().fg(rgb(0xeceff4)).add_modifier(Modifier::BOLD),
            text:           Style::default().fg(rgb(0xe5e9f0)),
            text_dim:       Style::default().fg(rgb(0x4c566a)),
            header:         Style::default().fg(rgb(0xeceff4)).bg(rgb(0x3b4252)).add_modifier(Modifier::BOLD),
            ok:             Style::default().fg(rgb(0xa3be8c)),
            warn:           Style::default().fg(rgb(0xebcb8b)),
            crit:           Style::default().fg(rgb(0xbf616a)).add_modifier(Modifier::BOLD),
            staged:         Style::default().fg(rgb(0xa3be8c)),
            transferred:    Style::default().fg(rgb(0x88c0d0)),
            pending:        Style::default().fg(rgb(0xebcb8b)),
            free:           Style::default().fg(rgb(0x4c566a)),
            used:           Style::default().fg(rgb(0xd08770)),
            transfer_spark: Style::default().fg(rgb(0x88c0d0)),
            staging_spark:  Style::default().fg(rgb(0xa3be8c)),
            gauge_low:      Style::default().fg(rgb(0xa3be8c)),
            gauge_mid:      Style::default().fg(rgb(0xebcb8b)),
            gauge_high:     Style::default().fg(rgb(0xd08770)),
            gauge_crit:     Style::default().fg(rgb(0xbf616a)).add_modifier(Modifier::BOLD),
            footer_bg:      Style::default().bg(rgb(0x3b4252)).fg(rgb(0xd8dee9)),
            footer_key:     Style::default().bg(rgb(0x3b4252)).fg(rgb(0x88c0d0)).add_modifier(Modifier::BOLD),
            footer_text:    Style::default().bg(rgb(0x3b4252)).fg(rgb(0x4c566a)),
        }
    }

    /// Style for a storage category segment by its bar name.
    pub fn bar_style(&self, name: &str) -> Style {
        match name {
            "Staged"      => self.staged,
            "Transferred" => self.transferred,
            "Pending"     => self.pending,
            "Free"        => self.free,
            "Used"        => self.used,
            _             => self.text,
        }
    }

    /// Pick a usage-gradient style for a 0–100 value.
    pub fn usage_style(&self, pct: f64) -> Style {
        if      pct >= 95.0 { self.gauge_crit }
        else if pct >= 75.0 { self.gauge_high }
        else if pct >= 50.0 { self.gauge_mid  }
        else                 { self.gauge_low  }
    }
}
