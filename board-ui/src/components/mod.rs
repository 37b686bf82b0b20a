//! UI Components
//!
//! Reusable Leptos components for the board.

pub mod appointment_card;
pub mod error_notice;
pub mod loading;

pub use appointment_card::AppointmentCard;
pub use error_notice::ErrorNotice;
pub use loading::Loading;
