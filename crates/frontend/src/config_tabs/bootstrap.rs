//! Readiness polling.
//!
//! The module loads at an unpredictable point relative to the admin
//! renderer, so initialization runs as a small burst of delayed attempts:
//! wait for the document-parsed signal if needed, then try on the bounded
//! [`RETRY_DELAYS_MS`](super::state::RETRY_DELAYS_MS) schedule until the
//! fieldsets appear or the budget runs out.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use super::controller::{InitOutcome, TabController};
use super::state::RetrySchedule;

/// Module entry path, called once from `start`.
pub fn run() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let on_ready = Closure::<dyn FnMut()>::new(schedule_attempts);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
        // Fires once per page; lives for the page lifetime.
        on_ready.forget();
    } else {
        schedule_attempts();
    }
}

fn schedule_attempts() {
    spawn_local(async {
        let mut schedule = RetrySchedule::new();
        while let Some(delay_ms) = schedule.next_delay() {
            TimeoutFuture::new(delay_ms).await;
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            match TabController::new(document).try_initialize() {
                // Conclusive either way; pending delays are dropped with
                // the task.
                InitOutcome::WrongPage | InitOutcome::Ready => return,
                InitOutcome::NoSections => {}
            }
        }
        log::warn!("config tabs: fieldsets never appeared, giving up");
    });
}
