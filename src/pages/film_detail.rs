use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::id_param;
use crate::api::{ApiClient, ApiError, Film, Id, Session};
use crate::auth::context::use_api;
use crate::components::status_badge::{BadgeTone, StatusBadge};
use crate::format::{format_price, format_start_time};
use crate::load::Loadable;

#[component]
pub fn FilmDetailPage() -> impl IntoView {
    let api = use_api();
    let film_id = id_param("id");
    let detail = RwSignal::new(Loadable::<(Film, Vec<Session>)>::Loading);

    Effect::new(move |_| {
        let id = film_id.get();
        let api = api.clone();
        detail.set(Loadable::Loading);
        spawn_local(async move {
            let result = match id {
                Some(id) => load_detail(&api, id).await,
                None => Err(ApiError::NotFound("Film not found".to_string())),
            };
            detail.set(Loadable::from_result(result, "Failed to fetch film details"));
        });
    });

    view! {
        <div class="page film-detail-page">
            {move || match detail.get() {
                Loadable::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Loadable::Failed(e) => view! { <span class="status-text status-error">{e}</span> }.into_any(),
                Loadable::Loaded((film, sessions)) => view! {
                    <div class="film-detail">
                        <FilmInfo film=film />
                        <SessionList sessions=sessions />
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

async fn load_detail(api: &ApiClient, id: Id) -> Result<(Film, Vec<Session>), ApiError> {
    let film = api.get_film(id).await?;
    let sessions = api.sessions_for_film(id).await?;
    Ok((film, sessions))
}

#[component]
fn FilmInfo(film: Film) -> impl IntoView {
    let poster = if film.poster_url.is_empty() {
        "https://via.placeholder.com/400x600".to_string()
    } else {
        film.poster_url.clone()
    };
    let age = film.min_age.map(|a| format!("Age: {}+", a));
    let trailer = film.trailer_url.clone().filter(|t| !t.is_empty());
    let trailer_title = format!("{} trailer", film.title);

    view! {
        <div class="film-info">
            <img class="film-poster" src=poster alt=film.title.clone() />
            <h1>{film.title.clone()}</h1>
            <div class="film-meta">
                <StatusBadge label=film.genre.clone() tone=BadgeTone::Accent />
                <span>{format!("{} min", film.duration)}</span>
                {age.map(|a| view! { <span>{a}</span> })}
            </div>
            <p class="film-description">{film.description.clone()}</p>
            {trailer.map(|src| view! {
                <div class="film-trailer">
                    <h2>"Trailer"</h2>
                    <iframe src=src title=trailer_title allowfullscreen=true></iframe>
                </div>
            })}
        </div>
    }
}

#[component]
fn SessionList(sessions: Vec<Session>) -> impl IntoView {
    view! {
        <div class="session-list">
            <h2>"Available sessions"</h2>
            {if sessions.is_empty() {
                view! { <p class="empty-state">"No upcoming sessions."</p> }.into_any()
            } else {
                sessions
                    .into_iter()
                    .map(|session| view! { <SessionCard session=session /> })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}

#[component]
pub fn SessionCard(session: Session) -> impl IntoView {
    let href = format!("/booking/{}", session.id);
    let tone = if session.is_vip() { BadgeTone::Accent } else { BadgeTone::Positive };

    view! {
        <a href=href class="card session-card">
            <div class="session-when">
                <h3>{format_start_time(&session.start_time)}</h3>
                <StatusBadge label=session.kind.clone() tone=tone />
                <span class="session-language">{session.language.clone()}</span>
            </div>
            <div class="session-price">
                <p class="price">{format_price(session.price)}</p>
                <p class="seats-left">{format!("{} seats available", session.available_seats)}</p>
            </div>
        </a>
    }
}
