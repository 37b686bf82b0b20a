//! # Queue Board
//!
//! Fetches the scheduled service appointments of a store location and renders
//! them as a board of cards with status-colored badges.
//!
//! ## Modules
//!
//! - [`model`]: Appointment records as delivered by the feed
//! - [`status`]: Status to badge color mapping
//! - [`format`]: Date and time formatting
//! - [`state`]: The load lifecycle (`Loading` → `Loaded` | `Error`)
//! - [`board`]: Pure rendering of a load state (view model, HTML, text)
//! - [`loader`]: Native feed loader (feature `native`)
//! - [`api`]: Axum host shell serving the rendered board (feature `native`)
//! - [`config`]: TOML and environment configuration (feature `native`)
//!
//! Without the `native` feature only the pure modules are built, which is what
//! the browser dashboard in `board-ui` depends on.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use queueboard::{board, AppointmentLoader, AppointmentSource, LoaderConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = AppointmentLoader::new(LoaderConfig::default())?;
//!
//!     // One load, then a pure render of whatever state it settled in
//!     let state = loader.load_state().await;
//!     println!("{}", board::render_text(&state));
//!
//!     Ok(())
//! }
//! ```

pub mod board;
pub mod endpoint;
pub mod error;
pub mod format;
pub mod model;
pub mod state;
pub mod status;

#[cfg(feature = "native")]
pub mod api;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod loader;

// Re-export top-level types for convenience
pub use board::{render_html, render_page, render_text, BoardView, CardView};
pub use endpoint::{default_endpoint, endpoint_url, DEFAULT_BASE_URL, DEFAULT_LOCATION_ID};
pub use error::{LoadError, LOAD_FAILED_MESSAGE};
pub use model::{parse_appointments, Appointment, Client, Entities, Entity};
pub use state::LoadState;
pub use status::{status_classes, StatusColor};

#[cfg(feature = "native")]
pub use api::{build_router, serve, ApiError, AppState};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig, ServerConfig, SourceConfig};

#[cfg(feature = "native")]
pub use loader::{AppointmentLoader, AppointmentSource, FileSource, LoaderConfig, StaticSource};
