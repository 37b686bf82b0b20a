//! Appointment Card Component
//!
//! One appointment: client and status badge in the header, activity, program,
//! date and time range in the body.

use leptos::*;

use queueboard::board::{classes, icons, CardView};

/// Appointment card component
///
/// Same layout as `render_card` in the core `board` module, which renders the
/// card for the host shell; a change here needs the matching change there
#[component]
pub fn AppointmentCard(
    /// Position in the feed
    index: usize,
    /// Pre-formatted card content
    card: CardView,
) -> impl IntoView {
    let badge = card.badge_classes();
    let color = card.status_color.name();

    view! {
        <div class={classes::CARD} data-role="appointment-card" data-index=index>
            // Header with client and status badge
            <div class={classes::CARD_HEADER}>
                <div class={classes::CARD_TITLE}>
                    <span class={classes::ROW}>
                        <span class={classes::ICON}>{icons::CLIENT}</span>
                        {card.client_name}
                    </span>
                    <span class=badge data-status-color=color>{card.status}</span>
                </div>
            </div>

            <div class={classes::CARD_CONTENT}>
                <CardRow icon=icons::ACTIVITY text=card.activity />
                <CardRow icon=icons::PROGRAM text=card.program />
                <CardRow icon=icons::DATE text=card.date />
                <CardRow icon=icons::TIME text=card.time_range />
            </div>
        </div>
    }
}

#[component]
fn CardRow(
    icon: &'static str,
    #[prop(into)]
    text: String,
) -> impl IntoView {
    view! {
        <div class={classes::ROW}>
            <span class={classes::ICON}>{icon}</span>
            <span>{text}</span>
        </div>
    }
}
