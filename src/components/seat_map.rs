use leptos::prelude::*;

use crate::api::{Id, Seat};

#[component]
pub fn SeatMap(
    seats: Vec<Seat>,
    /// Ids currently selected
    #[prop(into)]
    selected: Signal<Vec<Id>>,
    #[prop(into)] on_select: Callback<Seat>,
) -> impl IntoView {
    view! {
        <div class="seat-map">
            {seats
                .into_iter()
                .map(|seat| {
                    let id = seat.id;
                    let available = seat.is_available;
                    let couple = seat.is_couple;
                    let label = seat.number.to_string();
                    let class = move || {
                        let mut class = String::from("seat");
                        if !available {
                            class.push_str(" seat-taken");
                        } else if selected.with(|s| s.contains(&id)) {
                            class.push_str(" seat-selected");
                        }
                        if couple {
                            class.push_str(" seat-couple");
                        }
                        class
                    };
                    view! {
                        <button
                            class=class
                            disabled=!available
                            title=if couple { "Couple seat" } else { "" }
                            on:click=move |_| {
                                if available {
                                    on_select.run(seat.clone());
                                }
                            }
                        >
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
