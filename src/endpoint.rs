//! Feed Endpoint
//!
//! Where the appointment feed lives. Both the native loader and the browser
//! board build their request URL here.

/// Queue board feed for the `pr` board
pub const DEFAULT_BASE_URL: &str = "https://servicescheduling.bestbuy.com/api/api/QueueBoard/pr";

/// Store location the board shows
pub const DEFAULT_LOCATION_ID: &str = "422";

/// Full request URL for a base URL and location id; the id is percent-encoded
pub fn endpoint_url(base_url: &str, location_id: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let separator = if base.contains('?') { '&' } else { '?' };
    format!(
        "{}{}locationId={}",
        base,
        separator,
        urlencoding::encode(location_id.trim())
    )
}

/// The hard-coded endpoint
pub fn default_endpoint() -> String {
    endpoint_url(DEFAULT_BASE_URL, DEFAULT_LOCATION_ID)
}
