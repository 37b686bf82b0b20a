//! App Root Component

use leptos::*;

use crate::pages::AppointmentBoard;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="min-h-screen bg-gray-50">
            <AppointmentBoard />
        </main>
    }
}
