use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::Session;
use crate::auth::context::use_api;
use crate::load::Loadable;
use crate::pages::film_detail::SessionCard;

const SESSION_TYPES: &[(&str, &str)] = &[("", "All"), ("standard", "Standard"), ("VIP", "VIP")];

#[component]
pub fn SessionsPage() -> impl IntoView {
    let api = use_api();
    let (kind, set_kind) = signal(String::new());
    let sessions = RwSignal::new(Loadable::<Vec<Session>>::Loading);

    // Refetch whenever the type filter changes
    Effect::new(move |_| {
        let requested = kind.get();
        let api = api.clone();
        sessions.set(Loadable::Loading);
        spawn_local(async move {
            let result = if requested.is_empty() {
                api.list_sessions().await
            } else {
                api.sessions_by_type(&requested).await
            };
            let next = Loadable::from_result(result, "Failed to fetch sessions");
            let current = kind.get_untracked();
            sessions.update(|s| {
                s.settle(requested.as_str(), current.as_str(), next);
            });
        });
    });

    view! {
        <div class="page sessions-page">
            <h2>"Sessions"</h2>
            <div class="form-group">
                <label for="session-type">"Type"</label>
                <select
                    id="session-type"
                    class="input"
                    disabled=move || sessions.with(|s| s.is_loading())
                    on:change=move |ev| set_kind.set(event_target_value(&ev))
                >
                    {SESSION_TYPES
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            {move || match sessions.get() {
                Loadable::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Loadable::Failed(e) => view! { <span class="status-text status-error">{e}</span> }.into_any(),
                Loadable::Loaded(list) if list.is_empty() => {
                    view! { <p class="empty-state">"No sessions scheduled."</p> }.into_any()
                }
                Loadable::Loaded(list) => view! {
                    <div class="session-list">
                        {list.into_iter().map(|s| view! { <SessionCard session=s /> }).collect::<Vec<_>>()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
