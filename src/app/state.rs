//! Application state

use std::collections::{HashMap, HashSet};

use ratatui_image::protocol::StatefulProtocol;

use super::async_ops::{FetchCommand, FetchEvent};
use super::loader::{Loader, RemoteData, RetryUi};
use crate::config::Config;
use crate::images;
use crate::models::{Category, Item, ItemText};
use crate::theme::Palette;

/// Which screen is showing. Navigation passes the selected item by value;
/// the detail screen never re-fetches the item itself, only its text.
#[derive(Debug)]
pub enum Screen {
    /// The item collection
    List,
    /// One item's text, fetched independently by the item's id
    Detail {
        /// The item handed over from the list
        item: Item,
    },
}

/// Modal state layered over the current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// No modal
    #[default]
    Normal,
    /// Blocking error alert with Retry/Cancel (list screen failures)
    Alert,
    /// Keybinding help popup
    Help,
}

/// Application state
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// UI palette
    pub palette: Palette,
    /// Whether to quit
    pub should_quit: bool,
    /// Current screen
    pub screen: Screen,
    /// Modal layered over the screen
    pub mode: Mode,

    /// List screen fetch lifecycle; failures raise a blocking alert
    pub list: Loader<Category>,
    /// Selected item index in the list
    pub selected: usize,

    /// Detail screen fetch lifecycle, present while on the detail screen;
    /// failures show an inline retry only
    pub detail: Option<Loader<ItemText>>,

    /// Status message (bottom bar)
    pub status: String,

    next_request: u64,
    image_protocols: HashMap<String, StatefulProtocol>,
    loading_images: HashSet<String>,
    failed_images: HashSet<String>,
}

impl AppState {
    /// Create the app state with the list screen mounted in `Loading`.
    ///
    /// The caller sends [`AppState::initial_fetch`] to the worker to issue
    /// the mount fetch.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            palette: Palette::default(),
            should_quit: false,
            screen: Screen::List,
            mode: Mode::Normal,
            list: Loader::new(RetryUi::Dialog, 1),
            selected: 0,
            detail: None,
            status: "Loading items...".to_string(),
            next_request: 2,
            image_protocols: HashMap::new(),
            loading_images: HashSet::new(),
            failed_images: HashSet::new(),
        }
    }

    /// The fetch command matching the freshly mounted list screen.
    pub fn initial_fetch(&self) -> FetchCommand {
        FetchCommand::Items {
            request: self.list.request(),
        }
    }

    fn alloc_request(&mut self) -> u64 {
        let id = self.next_request;
        self.next_request += 1;
        id
    }

    /// Set status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
    }

    /// Re-enter `Loading` on the list screen and return the fetch to issue.
    ///
    /// Used for both the initial-mount retry path and the manual refresh;
    /// dismisses the alert if one is showing.
    pub fn refresh_list(&mut self) -> FetchCommand {
        let request = self.alloc_request();
        self.list.begin(request);
        self.mode = Mode::Normal;
        self.set_status("Loading items...");
        FetchCommand::Items { request }
    }

    /// Navigate to the detail screen for `item`, issuing its text fetch.
    pub fn open_detail(&mut self, item: Item) -> FetchCommand {
        let request = self.alloc_request();
        let cmd = FetchCommand::Text {
            id: item.id.clone(),
            request,
        };
        self.detail = Some(Loader::new(RetryUi::Inline, request));
        self.screen = Screen::Detail { item };
        self.set_status("Loading text...");
        cmd
    }

    /// Retry the detail screen's text fetch.
    pub fn retry_detail(&mut self) -> Option<FetchCommand> {
        let Screen::Detail { item } = &self.screen else {
            return None;
        };
        let id = item.id.clone();
        let request = self.alloc_request();
        self.detail.as_mut()?.begin(request);
        self.set_status("Loading text...");
        Some(FetchCommand::Text { id, request })
    }

    /// Navigate back to the list. An in-flight text fetch becomes stale and
    /// its late outcome is dropped on arrival.
    pub fn go_back(&mut self) {
        self.screen = Screen::List;
        self.detail = None;
        self.mode = Mode::Normal;
        self.status.clear();
    }

    /// Apply a settled fetch outcome from the worker.
    pub fn apply(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Items { request, result } => {
                if !self.list.resolve(request, result) {
                    tracing::debug!("Dropped stale items outcome for request {request}");
                    return;
                }
                let status = match self.list.state() {
                    RemoteData::Ready { payload, .. } => {
                        self.selected = 0;
                        format!("Loaded {} items", payload.items.len())
                    }
                    RemoteData::Error { .. } => {
                        if self.list.retry_ui() == RetryUi::Dialog {
                            self.mode = Mode::Alert;
                        }
                        "Failed to load data".to_string()
                    }
                    RemoteData::Loading { .. } => return,
                };
                self.status = status;
            }
            FetchEvent::Text { request, result } => {
                let Some(detail) = self.detail.as_mut() else {
                    tracing::debug!("Dropped text outcome for closed detail screen");
                    return;
                };
                if !detail.resolve(request, result) {
                    tracing::debug!("Dropped stale text outcome for request {request}");
                    return;
                }
                let status = match detail.state() {
                    RemoteData::Ready { .. } => String::new(),
                    RemoteData::Error { .. } => "Failed to load text".to_string(),
                    RemoteData::Loading { .. } => return,
                };
                self.status = status;
            }
            FetchEvent::Image { path, result } => {
                self.loading_images.remove(&path);
                match result {
                    Ok(image) => {
                        if let Some(protocol) = images::protocol_for(image) {
                            self.image_protocols.insert(path, protocol);
                        }
                    }
                    // Missing images are quietly omitted, never an error state
                    Err(error) => {
                        tracing::warn!("Failed to load image {path}: {error}");
                        self.failed_images.insert(path);
                    }
                }
            }
        }
    }

    /// Dismiss the error alert, leaving the inline error view behind.
    pub fn dismiss_alert(&mut self) {
        self.mode = Mode::Normal;
    }

    /// The currently selected item, when the list is ready
    pub fn selected_item(&self) -> Option<&Item> {
        self.list.payload()?.items.get(self.selected)
    }

    fn item_count(&self) -> usize {
        self.list.payload().map_or(0, |c| c.items.len())
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        let count = self.item_count();
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
        }
    }

    /// Move selection up
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Jump to the first item
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Jump to the last item
    pub fn select_last(&mut self) {
        self.selected = self.item_count().saturating_sub(1);
    }

    /// Image paths worth queueing for the item currently on screen.
    pub fn images_to_queue(&self) -> Vec<String> {
        if !self.config.show_images {
            return Vec::new();
        }
        let path = match &self.screen {
            Screen::List => self.selected_item().and_then(Item::image_path),
            Screen::Detail { item } => item.image_path(),
        };
        path.filter(|p| {
            !self.image_protocols.contains_key(*p)
                && !self.loading_images.contains(*p)
                && !self.failed_images.contains(*p)
        })
        .map(|p| vec![p.to_string()])
        .unwrap_or_default()
    }

    /// Mark image paths as in flight so they are not queued twice.
    pub fn mark_images_loading(&mut self, paths: &[String]) {
        for path in paths {
            self.loading_images.insert(path.clone());
        }
    }

    /// Render protocol for a loaded image, if available.
    pub fn image_protocol(&mut self, path: &str) -> Option<&mut StatefulProtocol> {
        self.image_protocols.get_mut(path)
    }

    /// Whether an image download is in flight for `path`.
    pub fn image_loading(&self, path: &str) -> bool {
        self.loading_images.contains(path)
    }

    /// Resolve the list screen from canned data (demo mode).
    pub fn preload_list(&mut self, category: Category) {
        let request = self.list.request();
        self.list.resolve(request, Ok(category));
        self.selected = 0;
    }
}
