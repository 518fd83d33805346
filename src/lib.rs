//! # Vetrina 🗂
//!
//! A terminal showcase browser for remote item collections.
//!
//! ## Overview
//!
//! Vetrina fetches a random item collection from a JSON API and lets you
//! browse it from your terminal: a list screen of colored item cards and a
//! detail screen with each item's text, with loading spinners, entrance
//! animations, and user-driven retry on failure.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          App                                │
//! │  Orchestrates all components and runs the main event loop   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │     Config      │ │       API       │ │       UI        │
//! │                 │ │                 │ │                 │
//! │ • Load/Save     │ │ • /items/random │ │ • List screen   │
//! │ • Base URL      │ │ • /texts/{id}   │ │ • Detail screen │
//! │ • Preferences   │ │ • Item images   │ │ • Handle input  │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//!          │                   │                   │
//!          └───────────────────┴───────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │     Loader      │ │    Animation    │ │     Models      │
//! │                 │ │                 │ │                 │
//! │ • Loading state │ │ • Spinner loop  │ │ • Item          │
//! │ • Retry cycle   │ │ • Entrance      │ │ • Category      │
//! │ • Stale drops   │ │   fade + slide  │ │ • ItemText      │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`] — HTTP client for the showcase API
//! - [`app`] — TUI application state, screens, and event loop
//! - [`config`] — Configuration management
//! - [`demo`] — Canned data for demo mode
//! - [`images`] — Terminal image rendering support
//! - [`models`] — Data models (Item, Category, ItemText)
//! - [`theme`] — UI palette and style helpers
//!
//! ## Example
//!
//! ```no_run
//! use vetrina::app;
//!
//! fn main() -> anyhow::Result<()> {
//!     app::run()
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::single_match_else)]

pub mod api;
pub mod app;
pub mod config;
pub mod demo;
pub mod images;
pub mod models;
pub mod theme;

// Re-export main types for convenience
pub use api::{ApiClient, ApiError, DEFAULT_BASE_URL};
pub use app::{AppState, Loader, RemoteData, RetryUi};
pub use config::Config;
pub use models::{Category, Item, ItemText};
pub use theme::Palette;

/// ASCII logo for the application
pub const LOGO: &str = r"
           __       _
 _  _ ___ / /_ _ __(_)__  ___ _
| |/ / -_) __/ '_/ / _ \/ _ `/
|___/\__/\__/_/ /_/_//_/\_,_/
";

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Repository URL
pub const REPO_URL: &str = "https://github.com/ricardodantas/vetrina";
