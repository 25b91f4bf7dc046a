use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::Film;
use crate::auth::context::use_api;
use crate::components::film_card::FilmCard;
use crate::load::Loadable;

const FEATURED_COUNT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_api();
    let featured = RwSignal::new(Loadable::<Vec<Film>>::Loading);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            let result = api
                .list_films()
                .await
                .map(|films| films.into_iter().take(FEATURED_COUNT).collect());
            featured.set(Loadable::from_result(result, "Failed to fetch featured films"));
        });
    });

    view! {
        <div class="page home-page">
            <section class="hero">
                <h1>"Welcome to CinéHall"</h1>
                <p class="page-description">"Experience the magic of cinema"</p>
                <a href="/films" class="btn btn-primary">"Browse films"</a>
            </section>

            <section class="featured">
                <h2>"Featured films"</h2>
                {move || match featured.get() {
                    Loadable::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                    Loadable::Failed(e) => view! { <span class="status-text status-error">{e}</span> }.into_any(),
                    Loadable::Loaded(films) => view! {
                        <div class="card-grid">
                            {films.into_iter().map(|film| view! { <FilmCard film=film /> }).collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any(),
                }}
            </section>

            <section class="call-to-action">
                <h2>"Ready to experience cinema?"</h2>
                <p>"Join us for an unforgettable movie experience"</p>
                <a href="/register" class="btn btn-secondary">"Sign up now"</a>
            </section>
        </div>
    }
}
