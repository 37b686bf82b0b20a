//! Board Page
//!
//! Loads the feed once when mounted and renders whatever state the load is in.

use leptos::*;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::AbortController;

use queueboard::board::{classes, BoardView, BOARD_TITLE};
use queueboard::LoadState;

use crate::api;
use crate::components::{AppointmentCard, ErrorNotice, Loading};

/// Appointment board page component
#[component]
pub fn AppointmentBoard() -> impl IntoView {
    let load_state = create_rw_signal(LoadState::Loading);

    // Cleared on teardown; a late result is then dropped instead of applied
    let mounted = Rc::new(Cell::new(true));
    let controller = AbortController::new().ok();

    {
        let mounted = Rc::clone(&mounted);
        let controller = controller.clone();
        on_cleanup(move || {
            mounted.set(false);
            if let Some(controller) = controller {
                controller.abort();
            }
        });
    }

    // The single load for this mount
    spawn_local(async move {
        let result = api::fetch_appointments(controller.as_ref()).await;
        if !mounted.get() {
            return;
        }

        if let Err(e) = &result {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "Failed to load appointments ({}): {}",
                e.kind(),
                e
            )));
        }

        load_state.update(|state| *state = std::mem::take(state).resolve(result));
    });

    move || {
        let board = load_state.with(BoardView::from_state);
        view! { <BoardContent board=board /> }
    }
}

/// Pure rendering of one board view
#[component]
fn BoardContent(board: BoardView) -> impl IntoView {
    match board {
        BoardView::Loading => view! { <Loading /> }.into_view(),
        BoardView::Error { message } => view! { <ErrorNotice message=message /> }.into_view(),
        BoardView::Grid { cards } => view! {
            <div class={classes::CONTAINER}>
                <h1 class={classes::TITLE}>{BOARD_TITLE}</h1>
                <div class={classes::GRID} data-role="grid">
                    {cards
                        .into_iter()
                        .enumerate()
                        .map(|(index, card)| view! { <AppointmentCard index=index card=card /> })
                        .collect_view()}
                </div>
            </div>
        }
        .into_view(),
    }
}
