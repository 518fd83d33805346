//! Async operations for the TUI.
//!
//! Uses channels to communicate between the sync TUI loop and async tasks.
//! Fetch commands carry the request id the screen state machine is waiting
//! for; the worker echoes it back so stale outcomes can be dropped.

use image::DynamicImage;
use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::images;
use crate::models::{Category, ItemText};

/// Commands sent from the TUI to the async worker
#[derive(Debug, Clone)]
pub enum FetchCommand {
    /// Fetch a random item collection
    Items {
        /// Request id the list screen is awaiting
        request: u64,
    },
    /// Fetch the text blob for one item
    Text {
        /// Item id to fetch text for
        id: String,
        /// Request id the detail screen is awaiting
        request: u64,
    },
    /// Download and decode an item image
    Image {
        /// Server-relative image path
        path: String,
    },
    /// Shutdown the worker
    Shutdown,
}

/// Outcomes sent back from the async worker to the TUI
#[derive(Debug)]
pub enum FetchEvent {
    /// Item collection fetch settled
    Items {
        /// Echo of the command's request id
        request: u64,
        /// Parsed collection or error message
        result: Result<Category, String>,
    },
    /// Item text fetch settled
    Text {
        /// Echo of the command's request id
        request: u64,
        /// Parsed text or error message
        result: Result<ItemText, String>,
    },
    /// Image download settled
    Image {
        /// Echo of the command's image path
        path: String,
        /// Decoded bitmap or error message
        result: Result<DynamicImage, String>,
    },
}

/// Channel handles for communicating with the async worker
pub struct WorkerHandle {
    /// Send commands to the worker
    pub cmd_tx: mpsc::Sender<FetchCommand>,
    /// Receive outcomes from the worker
    pub event_rx: mpsc::Receiver<FetchEvent>,
}

/// Spawn the async worker and return handles
pub fn spawn_worker(api: ApiClient) -> WorkerHandle {
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<FetchCommand>(32);
    let (event_tx, event_rx) = mpsc::channel::<FetchEvent>(32);

    tokio::spawn(async move {
        while let Some(cmd) = cmd_rx.recv().await {
            match cmd {
                FetchCommand::Shutdown => break,
                FetchCommand::Items { request } => {
                    let result = api.random_items().await.map_err(|e| e.to_string());
                    if let Err(message) = &result {
                        tracing::warn!("Items fetch failed: {message}");
                    }
                    let _ = event_tx.send(FetchEvent::Items { request, result }).await;
                }
                FetchCommand::Text { id, request } => {
                    let result = api.item_text(&id).await.map_err(|e| e.to_string());
                    if let Err(message) = &result {
                        tracing::warn!("Text fetch for {id} failed: {message}");
                    }
                    let _ = event_tx.send(FetchEvent::Text { request, result }).await;
                }
                FetchCommand::Image { path } => {
                    let result = load_image(&api, &path).await;
                    let _ = event_tx.send(FetchEvent::Image { path, result }).await;
                }
            }
        }
        tracing::debug!("Worker shutting down");
    });

    WorkerHandle { cmd_tx, event_rx }
}

async fn load_image(api: &ApiClient, path: &str) -> Result<DynamicImage, String> {
    let url = api.image_url(path);
    let bytes = api.image_bytes(&url).await.map_err(|e| e.to_string())?;
    images::decode(&bytes).map_err(|e| e.to_string())
}
