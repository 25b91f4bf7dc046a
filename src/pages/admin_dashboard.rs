use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::admin::FilmBoard;
use crate::api::{ApiClient, ApiError, Film, Id};
use crate::auth::context::use_api;
use crate::components::status_badge::FilmStatusBadge;
use crate::format::format_price;
use crate::load::Loadable;

async fn load_board(api: &ApiClient) -> Result<FilmBoard, ApiError> {
    let films = api.list_films().await?;
    let stats = api.admin_stats().await?;
    Ok(FilmBoard::new(films, stats))
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let api = use_api();
    let board = RwSignal::new(Loadable::<FilmBoard>::Loading);
    let (error, set_error) = signal::<Option<String>>(None);

    let loader = api.clone();
    Effect::new(move |_| {
        let api = loader.clone();
        spawn_local(async move {
            let result = load_board(&api).await;
            board.set(Loadable::from_result(result, "Failed to load dashboard"));
        });
    });

    let on_delete = Callback::new(move |id: Id| {
        let api = api.clone();
        set_error.set(None);
        spawn_local(async move {
            match api.delete_film(id).await {
                Ok(()) => board.update(|b| {
                    if let Loadable::Loaded(b) = b {
                        b.remove(id);
                    }
                }),
                Err(e) => set_error.set(Some(format!("Failed to delete film: {}", e))),
            }
        });
    });

    view! {
        <div class="page admin-page">
            <div class="page-header">
                <h2>"Admin dashboard"</h2>
                <div class="btn-row">
                    <a href="/admin/films/new" class="btn btn-primary">"Add film"</a>
                    <a href="/admin/sessions/new" class="btn btn-secondary">"Add session"</a>
                </div>
            </div>
            <Show when=move || error.get().is_some()>
                <div class="alert alert-error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            {move || match board.get() {
                Loadable::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Loadable::Failed(e) => view! { <span class="status-text status-error">{e}</span> }.into_any(),
                Loadable::Loaded(b) => view! {
                    <div class="stats-grid">
                        <StatCard label="Total films" value=b.stats.total_films />
                        <StatCard label="Active films" value=b.stats.active_films />
                        <StatCard label="Total bookings" value=b.stats.total_bookings />
                    </div>
                    <FilmTable films=b.films on_delete=on_delete />
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: u32) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <span class="stat-value">{value}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

#[component]
fn FilmTable(films: Vec<Film>, on_delete: Callback<Id>) -> impl IntoView {
    if films.is_empty() {
        return view! { <p class="empty-state">"No films yet."</p> }.into_any();
    }

    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Genre"</th>
                    <th>"Duration"</th>
                    <th>"Price"</th>
                    <th>"Status"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {films.into_iter().map(|film| {
                    let id = film.id;
                    let edit_href = format!("/admin/films/{}/edit", id);
                    view! {
                        <tr>
                            <td>{film.title}</td>
                            <td>{film.genre}</td>
                            <td>{format!("{} min", film.duration)}</td>
                            <td>{format_price(film.price)}</td>
                            <td><FilmStatusBadge is_active=film.is_active /></td>
                            <td class="actions">
                                <a href=edit_href class="btn-small">"Edit"</a>
                                <button class="btn-small btn-danger" on:click=move |_| on_delete.run(id)>
                                    "Delete"
                                </button>
                            </td>
                        </tr>
                    }
                }).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
