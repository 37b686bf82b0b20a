//! Loading Component
//!
//! Shown while the feed request is in flight.

use leptos::*;

use queueboard::board::{classes, LOADING_TEXT};

/// Centered loading indicator
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class={classes::LOADING} data-role="loading">
            <div class="loading-spinner w-8 h-8 mx-auto mb-2" />
            {LOADING_TEXT}
        </div>
    }
}
