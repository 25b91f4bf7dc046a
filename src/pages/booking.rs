use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::id_param;
use crate::api::{ApiError, Id, Seat};
use crate::auth::context::{use_api, use_auth};
use crate::booking::{BookingPhase, BookingWorkflow, PaymentTimer};
use crate::components::confirmation::Confirmation;
use crate::components::seat_map::SeatMap;
use crate::config::ClientConfig;
use crate::format::{format_price, seat_list};

#[component]
pub fn BookingPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let config = expect_context::<ClientConfig>();
    let session_id = id_param("id");

    let window_secs = config.payment_window_secs;
    let workflow = RwSignal::new(BookingWorkflow::new(window_secs));
    let phase = Memo::new(move |_| workflow.with(|w| w.phase()));
    let awaiting_payment = Memo::new(move |_| workflow.with(|w| w.is_awaiting_payment()));
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_paying, set_is_paying) = signal(false);
    let timer = StoredValue::new_local(None::<PaymentTimer>);

    // Load the session and its seat map
    let load_api = api.clone();
    Effect::new(move |_| {
        let id = session_id.get();
        workflow.set(BookingWorkflow::new(window_secs));
        let Some(id) = id else {
            workflow.update(|w| {
                w.session_loaded(Err(ApiError::NotFound("Session not found".to_string())))
            });
            return;
        };
        let api = load_api.clone();
        spawn_local(async move {
            let result = api.get_session(id).await;
            workflow.update(|w| w.session_loaded(result));
        });
    });

    // The payment countdown runs only while awaiting payment
    Effect::new(move |_| {
        if awaiting_payment.get() {
            if timer.with_value(|t| t.is_none()) {
                timer.set_value(PaymentTimer::start(move || workflow.update(|w| w.tick())));
            }
        } else {
            timer.set_value(None);
        }
    });
    on_cleanup(move || timer.set_value(None));

    let on_select = Callback::new(move |seat: Seat| {
        workflow.update(|w| {
            w.select_seat(&seat);
        });
    });

    let on_proceed = Callback::new(move |_: ()| {
        let mut result = Ok(());
        workflow.update(|w| result = w.proceed_to_payment());
        set_error.set(result.err().map(|e| e.to_string()));
    });

    let on_change_seats = Callback::new(move |_: ()| {
        set_error.set(None);
        workflow.update(|w| {
            w.change_seats();
        });
    });

    let on_pay = Callback::new(move |_: ()| {
        let Some(user_id) = auth.snapshot.with(|s| s.user.as_ref().map(|u| u.id)) else {
            set_error.set(Some("Please log in to complete your booking".to_string()));
            return;
        };
        let request = match workflow.with(|w| w.booking_request(user_id)) {
            Ok(r) => r,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_is_paying.set(true);
        set_error.set(None);
        let api = api.clone();
        spawn_local(async move {
            match api.create_booking(&request).await {
                Ok(receipt) => {
                    workflow.update(|w| {
                        let _ = w.confirm(receipt);
                    });
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_is_paying.set(false);
        });
    });

    view! {
        <div class="page booking-page">
            {move || error.get().map(|e| view! {
                <div class="alert alert-error">{e}</div>
            })}
            {move || match phase.get() {
                BookingPhase::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                BookingPhase::Unavailable => {
                    let message = workflow
                        .with_untracked(|w| w.load_error().map(|e| e.to_string()))
                        .unwrap_or_else(|| "Session not found".to_string());
                    view! { <span class="status-text status-error">{message}</span> }.into_any()
                }
                BookingPhase::SelectingSeats => view! {
                    <SeatSelection workflow=workflow on_select=on_select on_proceed=on_proceed />
                }
                .into_any(),
                BookingPhase::AwaitingPayment => view! {
                    <PaymentStep
                        workflow=workflow
                        is_paying=is_paying
                        on_pay=on_pay
                        on_change_seats=on_change_seats
                    />
                }
                .into_any(),
                BookingPhase::Confirmed(booking_id) => view! {
                    <Confirmation booking_id=booking_id />
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn SeatSelection(
    workflow: RwSignal<BookingWorkflow>,
    on_select: Callback<Seat>,
    on_proceed: Callback<()>,
) -> impl IntoView {
    let seats = workflow.with_untracked(|w| w.session().map(|s| s.seats.clone()).unwrap_or_default());
    let selected = Signal::derive(move || {
        workflow.with(|w| w.selection().iter().map(|s| s.id).collect::<Vec<Id>>())
    });
    let summary = move || {
        workflow.with(|w| {
            let numbers = seat_list(w.selection().iter().map(|s| s.number));
            if numbers.is_empty() {
                "No seat selected".to_string()
            } else {
                format!("Seats {} - {}", numbers, format_price(w.total_price()))
            }
        })
    };
    let nothing_selected = move || workflow.with(|w| w.selection().is_empty());

    view! {
        <div class="seat-selection">
            <h2>"Select your seats"</h2>
            <div class="screen">"Screen"</div>
            <SeatMap seats=seats selected=selected on_select=on_select />
            <p class="selection-summary">{summary}</p>
            <button
                class="btn btn-primary"
                disabled=nothing_selected
                on:click=move |_| on_proceed.run(())
            >
                "Proceed to payment"
            </button>
        </div>
    }
}

/// Order summary and the (cosmetic) card form.
#[component]
fn PaymentStep(
    workflow: RwSignal<BookingWorkflow>,
    is_paying: ReadSignal<bool>,
    on_pay: Callback<()>,
    on_change_seats: Callback<()>,
) -> impl IntoView {
    let remaining = move || {
        workflow.with(|w| w.countdown().map(|c| (c.display(), c.is_expired())))
    };
    let hold_class = move || {
        let last_minute = workflow.with(|w| w.countdown().is_some_and(|c| c.remaining() < 60));
        if last_minute {
            "alert alert-error"
        } else {
            "alert alert-warning"
        }
    };
    let seats = move || workflow.with(|w| seat_list(w.selection().iter().map(|s| s.number)));
    let total = move || workflow.with(|w| format_price(w.total_price()));

    view! {
        <div class="payment-step">
            <div class=hold_class>
                {move || match remaining() {
                    Some((_, true)) => "Your seat hold has expired".to_string(),
                    Some((left, false)) => format!("Your booking will expire in {}", left),
                    None => String::new(),
                }}
            </div>
            <h2>"Payment"</h2>
            <div class="card">
                <h3>"Order summary"</h3>
                <p>{move || format!("Selected seats: {}", seats())}</p>
                <p>{move || format!("Total price: {}", total())}</p>
                <div class="form-group">
                    <input type="text" class="input" placeholder="Card number" autocomplete="off" />
                </div>
                <div class="input-row">
                    <input type="text" class="input" placeholder="Expiry date" autocomplete="off" />
                    <input type="text" class="input" placeholder="CVV" autocomplete="off" />
                </div>
                <div class="input-row">
                    <button
                        class="btn btn-secondary"
                        disabled=move || is_paying.get()
                        on:click=move |_| on_change_seats.run(())
                    >
                        "Change seats"
                    </button>
                    <button
                        class="btn btn-primary"
                        disabled=move || is_paying.get()
                        on:click=move |_| on_pay.run(())
                    >
                        {move || if is_paying.get() { "Processing..." } else { "Pay now" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
