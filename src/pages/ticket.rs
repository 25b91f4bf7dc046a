use leptos::prelude::*;

use super::id_param;
use crate::components::confirmation::Confirmation;

#[component]
pub fn TicketPage() -> impl IntoView {
    let booking_id = id_param("id");

    view! {
        <div class="page ticket-page">
            {move || match booking_id.get() {
                Some(id) => view! { <Confirmation booking_id=id /> }.into_any(),
                None => view! { <span class="status-text status-error">"Booking not found"</span> }.into_any(),
            }}
        </div>
    }
}
