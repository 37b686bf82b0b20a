//! Routes
//!
//! Route handlers organized by functionality.

pub mod appointments;
pub mod board;
pub mod health;
