//! Error Notice Component

use leptos::*;

use queueboard::board::{classes, icons};

/// Centered error icon and message
#[component]
pub fn ErrorNotice(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class={classes::ERROR} data-role="error">
            <div class={classes::ERROR_ICON}>{icons::ERROR}</div>
            {message}
        </div>
    }
}
