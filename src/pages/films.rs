use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::Film;
use crate::auth::context::use_api;
use crate::components::film_card::FilmCard;
use crate::load::Loadable;

#[component]
pub fn FilmsPage() -> impl IntoView {
    let api = use_api();
    let films = RwSignal::new(Loadable::<Vec<Film>>::Loading);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            let result = api.list_films().await;
            films.set(Loadable::from_result(result, "Failed to fetch films"));
        });
    });

    view! {
        <div class="page films-page">
            <h2>"Now showing"</h2>
            {move || match films.get() {
                Loadable::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Loadable::Failed(e) => view! { <span class="status-text status-error">{e}</span> }.into_any(),
                Loadable::Loaded(list) if list.is_empty() => {
                    view! { <p class="empty-state">"No films are showing right now."</p> }.into_any()
                }
                Loadable::Loaded(list) => view! {
                    <div class="card-grid">
                        {list.into_iter().map(|film| view! { <FilmCard film=film /> }).collect::<Vec<_>>()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
