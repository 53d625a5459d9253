use crate::client::graphql::GraphqlClient;
use crate::models::storage::{LegacySnapshot, StorageSnapshot};
use anyhow::Result;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

/// One result delivered from a poll thread to the UI loop. Errors carry the
/// query layer's message verbatim; the UI shows it without interpretation.
pub enum PollEvent {
    Storage(Result<StorageSnapshot, String>),
    Legacy(Result<LegacySnapshot, String>),
    Sidebar(Result<StorageSnapshot, String>),
}

/// Spawn the two independent polling loops and hand back their shared event
/// channel. The detail loop runs both page queries on one keep-alive
/// connection; the sidebar loop runs its own no-cache client. Threads exit
/// as soon as the receiver is dropped, so tearing down the App stops all
/// polling.
pub fn spawn(
    endpoint: &str,
    detail_every: Duration,
    sidebar_every: Duration,
) -> Result<Receiver<PollEvent>> {
    let detail = GraphqlClient::new(endpoint)?;
    let sidebar = GraphqlClient::new_uncached(endpoint)?;
    let (tx, rx) = mpsc::channel();

    let detail_tx = tx.clone();
    thread::Builder::new()
        .name("poll-detail".into())
        .spawn(move || loop {
            let storage = detail.storage().map_err(|e| format!("{:#}", e));
            if detail_tx.send(PollEvent::Storage(storage)).is_err() {
                return;
            }
            let legacy = detail.legacy_storage().map_err(|e| format!("{:#}", e));
            if detail_tx.send(PollEvent::Legacy(legacy)).is_err() {
                return;
            }
            thread::sleep(detail_every);
        })?;

    thread::Builder::new()
        .name("poll-sidebar".into())
        .spawn(move || loop {
            let storage = sidebar.storage().map_err(|e| format!("{:#}", e));
            if tx.send(PollEvent::Sidebar(storage)).is_err() {
                return;
            }
            thread::sleep(sidebar_every);
        })?;

    Ok(rx)
}
