//! Feed Client
//!
//! One GET against the queue board feed from the browser, abortable through
//! an `AbortController`.

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use web_sys::AbortController;

use queueboard::{default_endpoint, parse_appointments, Appointment, LoadError};

/// Local storage key for an endpoint override
const ENDPOINT_KEY: &str = "queueboard_endpoint";

/// Give up on the feed after this long
pub const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Get the feed URL from local storage or use the hard-coded endpoint.
///
/// The override lets the board read through the host shell
/// (`/api/appointments`) when the feed does not allow cross-origin reads.
pub fn get_endpoint() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(ENDPOINT_KEY).ok().flatten());

    endpoint_or_default(stored)
}

fn endpoint_or_default(stored: Option<String>) -> String {
    match stored.map(|url| url.trim().to_string()) {
        Some(url) if !url.is_empty() => url,
        _ => default_endpoint(),
    }
}

/// Fetch the appointment feed.
///
/// With a controller, the request is aborted after [`REQUEST_TIMEOUT_MS`] or
/// whenever the caller aborts it; either way it fails as a network error.
pub async fn fetch_appointments(
    controller: Option<&AbortController>,
) -> Result<Vec<Appointment>, LoadError> {
    let url = get_endpoint();
    let signal = controller.map(|c| c.signal());

    // Dropped (and so cancelled) when this function returns
    let _deadline = controller
        .cloned()
        .map(|c| Timeout::new(REQUEST_TIMEOUT_MS, move || c.abort()));

    let response = Request::get(&url)
        .abort_signal(signal.as_ref())
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Http {
            status: response.status(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    parse_appointments(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_default() {
        assert_eq!(endpoint_or_default(None), default_endpoint());
        assert_eq!(endpoint_or_default(Some("  ".to_string())), default_endpoint());
    }

    #[test]
    fn test_endpoint_override() {
        assert_eq!(
            endpoint_or_default(Some(" http://localhost:8090/api/appointments ".to_string())),
            "http://localhost:8090/api/appointments"
        );
    }
}
