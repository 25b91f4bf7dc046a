use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use super::id_param;
use crate::auth::context::use_api;
use crate::components::form_field::FormField;
use crate::forms::FilmForm;

/// Create a film, or edit one when the route carries an id.
#[component]
pub fn AdminFilmFormPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let film_id = id_param("id");
    let form = RwSignal::new(FilmForm::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_saving, set_is_saving) = signal(false);

    let loader = api.clone();
    Effect::new(move |_| {
        let Some(id) = film_id.get() else {
            form.set(FilmForm::default());
            return;
        };
        let api = loader.clone();
        spawn_local(async move {
            match api.get_film(id).await {
                Ok(film) => form.set(FilmForm::from_film(&film)),
                Err(e) => set_error.set(Some(format!("Failed to load film: {}", e))),
            }
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let input = match form.with(|f| f.validate()) {
            Ok(i) => i,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_is_saving.set(true);
        set_error.set(None);
        let api = api.clone();
        let navigate = navigate.clone();
        let target = film_id.get_untracked();
        spawn_local(async move {
            let result = match target {
                Some(id) => api.update_film(id, &input).await,
                None => api.create_film(&input).await,
            };
            match result {
                Ok(()) => navigate("/admin", Default::default()),
                Err(e) => set_error.set(Some(format!("Failed to save film: {}", e))),
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <div class="page admin-page">
            <h2>{move || if film_id.get().is_some() { "Edit film" } else { "New film" }}</h2>
            <Show when=move || error.get().is_some()>
                <div class="alert alert-error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <form class="card" on:submit=on_submit>
                {text_field(form, "Title", "title", |f| f.title.clone(), |f, v| f.title = v)}
                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        class="input"
                        rows="4"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>
                {text_field(form, "Duration (minutes)", "duration", |f| f.duration.clone(), |f, v| f.duration = v)}
                <FormField
                    label="Release date"
                    id="release_date"
                    input_type="date"
                    value=Signal::derive(move || form.with(|f| f.release_date.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.release_date = v))
                />
                {text_field(form, "Genre", "genre", |f| f.genre.clone(), |f, v| f.genre = v)}
                {text_field(form, "Director", "director", |f| f.director.clone(), |f, v| f.director = v)}
                {text_field(form, "Cast", "cast", |f| f.cast.clone(), |f, v| f.cast = v)}
                {text_field(form, "Poster URL", "poster_url", |f| f.poster_url.clone(), |f, v| f.poster_url = v)}
                {text_field(form, "Trailer URL", "trailer_url", |f| f.trailer_url.clone(), |f, v| f.trailer_url = v)}
                {text_field(form, "Minimum age", "min_age", |f| f.min_age.clone(), |f, v| f.min_age = v)}
                {text_field(form, "Price", "price", |f| f.price.clone(), |f, v| f.price = v)}
                <div class="form-group form-check">
                    <input
                        id="is_active"
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.is_active)
                        on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                    />
                    <label for="is_active">"Active"</label>
                </div>
                <div class="btn-row">
                    <button type="submit" class="btn btn-primary" disabled=move || is_saving.get()>
                        {move || if is_saving.get() { "Saving..." } else { "Save film" }}
                    </button>
                    <a href="/admin" class="btn btn-secondary">"Cancel"</a>
                </div>
            </form>
        </div>
    }
}

/// Text input bound to one string field of the film form.
fn text_field(
    form: RwSignal<FilmForm>,
    label: &'static str,
    id: &'static str,
    get: fn(&FilmForm) -> String,
    set: fn(&mut FilmForm, String),
) -> impl IntoView {
    view! {
        <FormField
            label=label
            id=id
            value=Signal::derive(move || form.with(get))
            on_input=Callback::new(move |v: String| form.update(|f| set(f, v)))
        />
    }
}
