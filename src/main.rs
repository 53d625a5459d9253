mod app;
mod client;
mod config;
mod input;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::App;
use clap::Parser;
use config::Config;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;

#[derive(Parser, Debug)]
#[command(name = "dealtop", about = "btop-style deal-transfer storage monitor", version = "0.1")]
struct Cli {
    /// GraphQL endpoint of the monitored daemon (overrides config)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Detail poll interval in milliseconds (overrides config)
    #[arg(short, long)]
    interval: Option<u64>,

    /// Color theme: default, dracula, gruvbox, nord
    #[arg(short = 't', long)]
    theme: Option<String>,

    /// Print a one-shot JSON snapshot of storage data and exit
    #[arg(long)]
    json: bool,

    /// Print config file path and current values, then exit
    #[arg(long)]
    config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load();
    if let Some(endpoint) = cli.endpoint {
        cfg.general.endpoint = endpoint;
    }
    if let Some(interval) = cli.interval {
        cfg.general.poll_interval_ms = interval;
    }
    if let Some(theme) = cli.theme {
        cfg.ui.theme = theme;
    }

    if cli.json {
        return run_json_snapshot(&cfg);
    }
    if cli.config {
        return run_print_config(&cfg);
    }

    let initial_theme = ui::theme::ThemeVariant::from_name(&cfg.ui.theme);

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let result = run(&cfg, initial_theme);
    restore_terminal()?;
    result
}

fn run_json_snapshot(cfg: &Config) -> Result<()> {
    use client::graphql::GraphqlClient;
    use serde_json::{json, Value};
    use util::human::fmt_bytes;

    let client = GraphqlClient::new(&cfg.general.endpoint)?;
    let storage = client.storage()?;
    let legacy = client.legacy_storage()?;

    // Exact counts go out as decimal strings: they can exceed what a JSON
    // number (or a consumer's f64) can carry
    let legacy_out = if legacy.is_absent() {
        Value::Null
    } else {
        json!({
            "capacity":    legacy.capacity.to_string(),
            "capacity_hr": fmt_bytes(legacy.capacity),
            "used":        legacy.used.to_string(),
            "used_hr":     fmt_bytes(legacy.used),
            "mount_point": legacy.mount_point,
        })
    };

    let snapshot = json!({
        "dealtop_version": "0.1",
        "timestamp": chrono::Local::now().to_rfc3339(),
        "endpoint":  cfg.general.endpoint,
        "storage": {
            "staged":          storage.staged.to_string(),
            "staged_hr":       fmt_bytes(storage.staged),
            "transferred":     storage.transferred.to_string(),
            "transferred_hr":  fmt_bytes(storage.transferred),
            "pending":         storage.pending.to_string(),
            "pending_hr":      fmt_bytes(storage.pending),
            "free":            storage.free.to_string(),
            "free_hr":         fmt_bytes(storage.free),
            "used":            storage.used().to_string(),
            "used_hr":         fmt_bytes(storage.used()),
            "total":           storage.total().to_string(),
            "total_hr":        fmt_bytes(storage.total()),
            "mount_point":     storage.mount_point,
        },
        "legacy_storage": legacy_out,
    });

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn run_print_config(cfg: &Config) -> Result<()> {
    let path = Config::config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    println!("Config: {}", path);
    println!();
    println!("[general]");
    println!("  endpoint            = {}", cfg.general.endpoint);
    println!("  poll_interval_ms    = {}", cfg.general.poll_interval_ms);
    println!("  sidebar_interval_ms = {}", cfg.general.sidebar_interval_ms);
    println!();
    println!("[ui]");
    println!("  theme = {}", cfg.ui.theme);
    Ok(())
}

fn run(cfg: &Config, initial_theme: ui::theme::ThemeVariant) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut term = Terminal::new(backend)?;

    let mut app = App::new(cfg, initial_theme)?;
    app.run(&mut term)?;

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
