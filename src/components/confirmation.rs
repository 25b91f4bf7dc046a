use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::Id;
use crate::auth::context::use_api;
use crate::booking::Ticket;
use crate::components::ticket_qr::TicketQr;
use crate::load::Loadable;

/// Ticket for a confirmed booking: id, scannable code and a print action.
#[component]
pub fn Confirmation(booking_id: Id) -> impl IntoView {
    let api = use_api();
    let ticket = RwSignal::new(Loadable::<Ticket>::Loading);

    // The ticket shows the booking as the server recorded it
    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            let result = api
                .get_booking(booking_id)
                .await
                .and_then(|b| Ticket::from_booking(booking_id, b));
            ticket.set(Loadable::from_result(result, "Failed to load booking"));
        });
    });

    let print_ticket = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    };

    view! {
        <div class="card ticket">
            <h2>"Booking confirmed!"</h2>
            {move || match ticket.get() {
                Loadable::Loading => view! { <p class="loading">"Loading ticket..."</p> }.into_any(),
                Loadable::Failed(e) => view! { <span class="status-text status-error">{e}</span> }.into_any(),
                Loadable::Loaded(t) => view! {
                    <TicketQr payload=t.qr_payload() />
                    <p class="ticket-id">{format!("Booking ID: {}", t.booking_id)}</p>
                    <div class="ticket-details">
                        <p>{format!("Seats booked: {}", t.seat_count)}</p>
                        <p>{format!("Status: {}", t.status)}</p>
                    </div>
                    <button class="btn btn-primary" on:click=print_ticket>"Download ticket"</button>
                }
                .into_any(),
            }}
        </div>
    }
}
