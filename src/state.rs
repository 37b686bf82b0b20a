//! Load State
//!
//! Lifecycle of the single feed load behind a board: it starts out
//! `Loading` and settles exactly once.

use crate::error::{LoadError, LOAD_FAILED_MESSAGE};
use crate::model::Appointment;

/// Current phase of the feed load and its payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Error(String),
    Loaded(Vec<Appointment>),
}

impl LoadState {
    /// Settled state for a finished load. Every error kind yields the same message.
    pub fn from_result(result: Result<Vec<Appointment>, LoadError>) -> Self {
        match result {
            Ok(appointments) => LoadState::Loaded(appointments),
            Err(_) => LoadState::Error(LOAD_FAILED_MESSAGE.to_string()),
        }
    }

    /// Apply a load result. A state that has already settled is returned unchanged.
    pub fn resolve(self, result: Result<Vec<Appointment>, LoadError>) -> Self {
        if self.is_loading() {
            Self::from_result(result)
        } else {
            tracing::debug!("Ignoring load result for an already settled board");
            self
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    pub fn appointments(&self) -> Option<&[Appointment]> {
        match self {
            LoadState::Loaded(appointments) => Some(appointments),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }
}
