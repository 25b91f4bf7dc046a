use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{ApiError, Booking};
use crate::auth::context::{use_api, use_auth};
use crate::load::Loadable;

#[component]
pub fn MyBookingsPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let bookings = RwSignal::new(Loadable::<Vec<Booking>>::Loading);

    Effect::new(move |_| {
        let user_id = auth.snapshot.with(|s| s.user.as_ref().map(|u| u.id));
        let api = api.clone();
        spawn_local(async move {
            let result = match user_id {
                Some(id) => api.user_bookings(id).await,
                None => Err(ApiError::Auth("Please log in to see your bookings".to_string())),
            };
            bookings.set(Loadable::from_result(result, "Failed to fetch bookings"));
        });
    });

    view! {
        <div class="page bookings-page">
            <h2>"My bookings"</h2>
            {move || match bookings.get() {
                Loadable::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Loadable::Failed(e) => view! { <span class="status-text status-error">{e}</span> }.into_any(),
                Loadable::Loaded(list) if list.is_empty() => {
                    view! { <p class="empty-state">"You have no bookings yet."</p> }.into_any()
                }
                Loadable::Loaded(list) => view! {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Booking"</th>
                                <th>"Seats"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {list.into_iter().map(|b| {
                                let href = format!("/tickets/{}", b.id);
                                view! {
                                    <tr>
                                        <td>{format!("#{}", b.id)}</td>
                                        <td>{b.seats.len()}</td>
                                        <td>{b.status.unwrap_or_else(|| "confirmed".to_string())}</td>
                                        <td><a href=href class="btn-small">"View ticket"</a></td>
                                    </tr>
                                }
                            }).collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }
                .into_any(),
            }}
        </div>
    }
}
