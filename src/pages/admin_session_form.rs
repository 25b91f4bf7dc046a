use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::api::Film;
use crate::auth::context::use_api;
use crate::components::form_field::FormField;
use crate::forms::SessionForm;
use crate::load::Loadable;

#[component]
pub fn AdminSessionFormPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let form = RwSignal::new(SessionForm::default());
    let films = RwSignal::new(Loadable::<Vec<Film>>::Loading);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_saving, set_is_saving) = signal(false);

    let loader = api.clone();
    Effect::new(move |_| {
        let api = loader.clone();
        spawn_local(async move {
            let result = api.list_films().await;
            films.set(Loadable::from_result(result, "Failed to fetch films"));
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let session = match form.with(|f| f.validate()) {
            Ok(s) => s,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_is_saving.set(true);
        set_error.set(None);
        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.create_session(&session).await {
                Ok(()) => navigate("/admin", Default::default()),
                Err(e) => set_error.set(Some(format!("Failed to create session: {}", e))),
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <div class="page admin-page">
            <h2>"New session"</h2>
            <Show when=move || error.get().is_some()>
                <div class="alert alert-error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <form class="card" on:submit=on_submit>
                <div class="form-group">
                    <label for="film_id">"Film"</label>
                    <select
                        id="film_id"
                        class="input"
                        prop:value=move || form.with(|f| f.film_id.clone())
                        on:change=move |ev| form.update(|f| f.film_id = event_target_value(&ev))
                    >
                        <option value="">"Select a film"</option>
                        {move || match films.get() {
                            Loadable::Loaded(list) => list
                                .into_iter()
                                .map(|film| view! { <option value=film.id.to_string()>{film.title}</option> })
                                .collect::<Vec<_>>(),
                            _ => Vec::new(),
                        }}
                    </select>
                    {move || match films.get() {
                        Loadable::Failed(e) => Some(view! { <span class="status-text status-error">{e}</span> }),
                        _ => None,
                    }}
                </div>
                <FormField
                    label="Start time"
                    id="start_time"
                    input_type="datetime-local"
                    value=Signal::derive(move || form.with(|f| f.start_time.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.start_time = v))
                />
                <div class="form-group">
                    <label for="kind">"Type"</label>
                    <select
                        id="kind"
                        class="input"
                        prop:value=move || form.with(|f| f.kind.clone())
                        on:change=move |ev| form.update(|f| f.kind = event_target_value(&ev))
                    >
                        <option value="standard">"Standard"</option>
                        <option value="VIP">"VIP"</option>
                    </select>
                </div>
                <FormField
                    label="Language"
                    id="language"
                    placeholder="VO, VF, EN..."
                    value=Signal::derive(move || form.with(|f| f.language.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.language = v))
                />
                <FormField
                    label="Price"
                    id="price"
                    value=Signal::derive(move || form.with(|f| f.price.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.price = v))
                />
                <div class="btn-row">
                    <button type="submit" class="btn btn-primary" disabled=move || is_saving.get()>
                        {move || if is_saving.get() { "Saving..." } else { "Create session" }}
                    </button>
                    <a href="/admin" class="btn btn-secondary">"Cancel"</a>
                </div>
            </form>
        </div>
    }
}
