//! Board Renderer
//!
//! Pure presentation of a [`LoadState`]. [`BoardView`] is the view model both
//! the browser dashboard and the server-rendered page are built from, so the
//! formatting and color rules exist once.

use html_escape::encode_text;

use crate::format::{display_date, display_time_range};
use crate::model::Appointment;
use crate::state::LoadState;
use crate::status::StatusColor;

pub const BOARD_TITLE: &str = "Appointment Board";
pub const LOADING_TEXT: &str = "Loading appointments...";

/// Utility classes shared by every rendering surface
pub mod classes {
    pub const LOADING: &str = "text-center p-4";
    pub const ERROR: &str = "text-center p-4 text-red-500";
    pub const ERROR_ICON: &str = "mx-auto mb-2 text-2xl";
    pub const CONTAINER: &str = "container mx-auto p-4";
    pub const TITLE: &str = "text-2xl font-bold mb-4";
    pub const GRID: &str = "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4";
    pub const CARD: &str =
        "rounded-lg border bg-white shadow-sm hover:shadow-lg transition-shadow duration-300";
    pub const CARD_HEADER: &str = "flex flex-col space-y-1.5 p-6";
    pub const CARD_TITLE: &str = "flex items-center justify-between text-lg font-semibold";
    pub const CARD_CONTENT: &str = "p-6 pt-0 space-y-2";
    pub const ROW: &str = "flex items-center";
    pub const ICON: &str = "mr-2";
    pub const BADGE: &str = "text-sm px-2 py-1 rounded";
}

/// Row icons, in card order
pub mod icons {
    pub const CLIENT: &str = "👤";
    pub const ACTIVITY: &str = "🛠";
    pub const PROGRAM: &str = "📁";
    pub const DATE: &str = "📅";
    pub const TIME: &str = "🕒";
    pub const ERROR: &str = "⚠";
}

/// Everything one card displays, already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub client_name: String,
    pub status: String,
    pub status_color: StatusColor,
    pub activity: String,
    pub program: String,
    pub date: String,
    pub time_range: String,
}

impl CardView {
    pub fn from_appointment(appointment: &Appointment) -> Self {
        Self {
            client_name: appointment.client().full_name(),
            status: appointment.status.clone(),
            status_color: StatusColor::for_status(&appointment.status),
            activity: appointment.activity().label.clone(),
            program: appointment.program().label.clone(),
            date: display_date(&appointment.scheduled_time),
            time_range: display_time_range(&appointment.scheduled_time, appointment.end_time()),
        }
    }

    /// Full class list for the status badge
    pub fn badge_classes(&self) -> String {
        format!("{} {}", classes::BADGE, self.status_color.classes())
    }
}

/// What the board shows for a given load state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardView {
    Loading,
    Error { message: String },
    Grid { cards: Vec<CardView> },
}

impl BoardView {
    /// One card per appointment, in the order received
    pub fn from_state(state: &LoadState) -> Self {
        match state {
            LoadState::Loading => BoardView::Loading,
            LoadState::Error(message) => BoardView::Error {
                message: message.clone(),
            },
            LoadState::Loaded(appointments) => BoardView::Grid {
                cards: appointments.iter().map(CardView::from_appointment).collect(),
            },
        }
    }

    pub fn card_count(&self) -> usize {
        match self {
            BoardView::Grid { cards } => cards.len(),
            _ => 0,
        }
    }
}

// ============ HTML ============

/// Render the board as an HTML fragment
pub fn render_html(state: &LoadState) -> String {
    match BoardView::from_state(state) {
        BoardView::Loading => format!(
            r#"<div class="{}" data-role="loading">{}</div>"#,
            classes::LOADING,
            LOADING_TEXT
        ),
        BoardView::Error { message } => format!(
            r#"<div class="{}" data-role="error"><div class="{}">{}</div>{}</div>"#,
            classes::ERROR,
            classes::ERROR_ICON,
            icons::ERROR,
            encode_text(&message)
        ),
        BoardView::Grid { cards } => {
            let mut html = format!(
                r#"<div class="{}"><h1 class="{}">{}</h1><div class="{}" data-role="grid">"#,
                classes::CONTAINER,
                classes::TITLE,
                BOARD_TITLE,
                classes::GRID
            );
            for (index, card) in cards.iter().enumerate() {
                html.push_str(&render_card(index, card));
            }
            html.push_str("</div></div>");
            html
        }
    }
}

/// Same layout as `AppointmentCard` in `board-ui/src/components/appointment_card.rs`;
/// a change here needs the matching change there
fn render_card(index: usize, card: &CardView) -> String {
    let row = |icon: &str, text: &str| {
        format!(
            r#"<div class="{}"><span class="{}">{}</span><span>{}</span></div>"#,
            classes::ROW,
            classes::ICON,
            icon,
            encode_text(text)
        )
    };

    format!(
        concat!(
            r#"<div class="{card}" data-role="appointment-card" data-index="{index}">"#,
            r#"<div class="{header}"><div class="{title}">"#,
            r#"<span class="{row}"><span class="{icon}">{client_icon}</span>{name}</span>"#,
            r#"<span class="{badge}" data-status-color="{color}">{status}</span>"#,
            r#"</div></div>"#,
            r#"<div class="{content}">{activity}{program}{date}{time}</div>"#,
            r#"</div>"#
        ),
        card = classes::CARD,
        index = index,
        header = classes::CARD_HEADER,
        title = classes::CARD_TITLE,
        row = classes::ROW,
        icon = classes::ICON,
        client_icon = icons::CLIENT,
        name = encode_text(&card.client_name),
        badge = card.badge_classes(),
        color = card.status_color.name(),
        status = encode_text(&card.status),
        content = classes::CARD_CONTENT,
        activity = row(icons::ACTIVITY, &card.activity),
        program = row(icons::PROGRAM, &card.program),
        date = row(icons::DATE, &card.date),
        time = row(icons::TIME, &card.time_range),
    )
}

/// Render a complete HTML document hosting the board
pub fn render_page(state: &LoadState) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="min-h-screen bg-gray-50">
<div id="root">{board}</div>
</body>
</html>
"#,
        title = BOARD_TITLE,
        board = render_html(state)
    )
}

// ============ Terminal ============

/// Render the board as plain text
pub fn render_text(state: &LoadState) -> String {
    match BoardView::from_state(state) {
        BoardView::Loading => format!("{}\n", LOADING_TEXT),
        BoardView::Error { message } => format!("{} {}\n", icons::ERROR, message),
        BoardView::Grid { cards } => {
            let mut out = format!("{}\n{}\n", BOARD_TITLE, "=".repeat(BOARD_TITLE.len()));
            if cards.is_empty() {
                out.push_str("No appointments\n");
            }
            for card in &cards {
                out.push_str(&format!("\n{} [{}]\n", card.client_name, card.status));
                out.push_str(&format!("  Activity: {}\n", card.activity));
                out.push_str(&format!("  Program:  {}\n", card.program));
                out.push_str(&format!("  Date:     {}\n", card.date));
                out.push_str(&format!("  Time:     {}\n", card.time_range));
            }
            out
        }
    }
}
