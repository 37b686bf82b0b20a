//! Pages
//!
//! Top-level page components.

pub mod board;

pub use board::AppointmentBoard;
