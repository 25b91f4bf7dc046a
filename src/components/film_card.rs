use leptos::prelude::*;

use crate::api::Film;
use crate::format::format_price;

#[component]
pub fn FilmCard(film: Film) -> impl IntoView {
    let href = format!("/films/{}", film.id);
    let poster = (!film.poster_url.is_empty()).then(|| film.poster_url.clone());
    let title = film.title.clone();

    view! {
        <div class="card film-card">
            <div class="film-card-poster">
                {poster.map(|src| view! { <img src=src alt=title /> })}
            </div>
            <div class="film-card-body">
                <h3>{film.title}</h3>
                <p class="film-card-description">{film.description}</p>
                <div class="film-card-footer">
                    <span class="film-card-price">{format_price(film.price)}</span>
                    <a href=href class="btn btn-primary">"Book now"</a>
                </div>
            </div>
        </div>
    }
}
