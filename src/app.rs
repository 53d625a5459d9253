use crate::client::poller::{self, PollEvent};
use crate::config::Config;
use crate::input::{handle_key, Action};
use crate::models::storage::{LegacySnapshot, StorageSnapshot};
use crate::ui::theme::{Theme, ThemeVariant};
use crate::ui::{help, storage_view, transfers_view};
use crate::util::history::History;
use anyhow::Result;
use crossterm::event::{self, Event};
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

// ── View state ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ActiveView {
    Storage,
    Transfers,
}

/// The three observable states of a polled query. Loading only before the
/// first result; after that every poll lands in Ready or Error.
#[derive(Debug, Clone)]
pub enum QuerySlot<T> {
    Loading,
    Ready(T),
    Error(String),
}

impl<T> QuerySlot<T> {
    pub fn set(&mut self, result: Result<T, String>) {
        *self = match result {
            Ok(v) => QuerySlot::Ready(v),
            Err(e) => QuerySlot::Error(e),
        };
    }
}

// ── Tick interval ─────────────────────────────────────────────────────

const POLL_TIMEOUT: Duration = Duration::from_millis(150);
const RATE_HISTORY_CAP: usize = 300;

// Counters carried between snapshots to derive rates from deltas
struct RateSample {
    at:          Instant,
    transferred: u128,
    staged:      u128,
}

// ── App ───────────────────────────────────────────────────────────────

pub struct App {
    pub theme:         Theme,
    pub theme_variant: ThemeVariant,
    pub active_view:   ActiveView,
    pub show_help:     bool,
    pub show_desc:     bool,
    pub endpoint:      String,

    // Query slots, each owned by one polling loop
    pub storage: QuerySlot<StorageSnapshot>,
    pub legacy:  QuerySlot<LegacySnapshot>,
    pub sidebar: QuerySlot<StorageSnapshot>,

    // Transfer-rate chart data (KiB/s samples, one per detail poll)
    pub transfer_history: History,
    pub staging_history:  History,
    pub transfer_rate:    f64,
    pub staging_rate:     f64,
    prev_sample: Option<RateSample>,

    events: Receiver<PollEvent>,

    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, initial_theme: ThemeVariant) -> Result<Self> {
        let events = poller::spawn(
            &config.general.endpoint,
            Duration::from_millis(config.general.poll_interval_ms.max(250)),
            Duration::from_millis(config.general.sidebar_interval_ms.max(1000)),
        )?;

        Ok(Self {
            theme:         Theme::for_variant(initial_theme),
            theme_variant: initial_theme,
            active_view:   ActiveView::Storage,
            show_help:     false,
            show_desc:     false,
            endpoint:      config.general.endpoint.clone(),
            storage: QuerySlot::Loading,
            legacy:  QuerySlot::Loading,
            sidebar: QuerySlot::Loading,
            transfer_history: History::new(RATE_HISTORY_CAP),
            staging_history:  History::new(RATE_HISTORY_CAP),
            transfer_rate:    0.0,
            staging_rate:     0.0,
            prev_sample: None,
            events,
            should_quit: false,
        })
    }

    // ── Main event loop ───────────────────────────────────────────────

    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
    ) -> Result<()> {
        loop {
            self.drain_poll_events();

            terminal.draw(|f| {
                match self.active_view {
                    ActiveView::Storage   => storage_view::render(f, self),
                    ActiveView::Transfers => transfers_view::render(f, self),
                }
                if self.show_help {
                    help::render(f, &self.theme);
                }
            })?;

            if event::poll(POLL_TIMEOUT)? {
                match event::read()? {
                    Event::Key(key) => {
                        let action = handle_key(key);
                        self.handle_action(action);
                    }
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    // ── Poll result intake ────────────────────────────────────────────

    fn drain_poll_events(&mut self) {
        while let Ok(ev) = self.events.try_recv() {
            match ev {
                PollEvent::Storage(result) => {
                    if let Ok(snap) = &result {
                        self.track_rates(snap);
                    }
                    self.storage.set(result);
                }
                PollEvent::Legacy(result) => self.legacy.set(result),
                // The sidebar keeps showing its last snapshot through
                // transient failures; with no data yet it renders zeros
                PollEvent::Sidebar(Ok(snap)) => self.sidebar = QuerySlot::Ready(snap),
                PollEvent::Sidebar(Err(_)) => {}
            }
        }
    }

    /// Derive per-category rates from the counter deltas between this
    /// snapshot and the previous one. Counters shrink when a deal completes
    /// or is staged into a sector; those ticks clamp to zero.
    fn track_rates(&mut self, snap: &StorageSnapshot) {
        let now = Instant::now();
        if let Some(prev) = &self.prev_sample {
            let elapsed = now.duration_since(prev.at).as_secs_f64().max(0.001);
            let transfer = snap.transferred.saturating_sub(prev.transferred) as f64 / elapsed;
            let staging = snap.staged.saturating_sub(prev.staged) as f64 / elapsed;
            self.transfer_rate = transfer;
            self.staging_rate = staging;
            self.transfer_history.push((transfer / 1024.0) as u64);
            self.staging_history.push((staging / 1024.0) as u64);
        }
        self.prev_sample = Some(RateSample {
            at:          now,
            transferred: snap.transferred,
            staged:      snap.staged,
        });
    }

    // ── Input dispatch ────────────────────────────────────────────────

    fn handle_action(&mut self, action: Action) {
        if self.show_help {
            match action {
                Action::Quit => self.should_quit = true,
                Action::ShowHelp | Action::Back => self.show_help = false,
                _ => {}
            }
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,

            Action::ShowHelp => self.show_help = true,

            Action::CycleTheme => {
                self.theme_variant = self.theme_variant.next();
                self.theme = Theme::for_variant(self.theme_variant);
            }

            Action::ViewTransfers => {
                self.active_view = if self.active_view == ActiveView::Transfers {
                    ActiveView::Storage
                } else {
                    ActiveView::Transfers
                };
            }

            Action::Back => {
                self.active_view = ActiveView::Storage;
            }

            Action::Refresh => {
                self.storage = QuerySlot::Loading;
                self.legacy = QuerySlot::Loading;
            }

            Action::ToggleDesc => self.show_desc = !self.show_desc,

            Action::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_slot_transitions() {
        let mut slot: QuerySlot<u32> = QuerySlot::Loading;
        slot.set(Ok(7));
        assert!(matches!(slot, QuerySlot::Ready(7)));
        slot.set(Err("backend down".into()));
        match slot {
            QuerySlot::Error(msg) => assert_eq!(msg, "backend down"),
            _ => panic!("expected error state"),
        }
    }
}
