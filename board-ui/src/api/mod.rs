//! Feed Access
//!
//! Browser-side loading of the appointment feed.

pub mod client;

pub use client::{fetch_appointments, get_endpoint};
