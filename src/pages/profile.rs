use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiError;
use crate::auth::context::use_auth;
use crate::components::form_field::FormField;
use crate::forms::ProfileForm;

/// Account details with an inline edit mode.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let form = RwSignal::new(ProfileForm::default());
    let (editing, set_editing) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (status, set_status) = signal::<Option<String>>(None);
    let (is_saving, set_is_saving) = signal(false);

    let snapshot = auth.snapshot;
    let start_edit = move |_| {
        if let Some(user) = snapshot.with(|s| s.user.clone()) {
            form.set(ProfileForm::from_user(&user));
            set_error.set(None);
            set_status.set(None);
            set_editing.set(true);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(user) = snapshot.with(|s| s.user.clone()) else {
            return;
        };
        let update = match form.with(|f| f.validate()) {
            Ok(u) => u,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_is_saving.set(true);
        set_error.set(None);
        let ctx = auth.clone();
        spawn_local(async move {
            match ctx.session.update_profile(&user, &update).await {
                Ok(next) => {
                    ctx.set(next);
                    set_editing.set(false);
                    set_status.set(Some("Profile updated".to_string()));
                }
                Err(ApiError::Validation(msg)) => set_error.set(Some(msg)),
                Err(e) => set_error.set(Some(format!("Failed to update profile: {}", e))),
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <div class="page profile-page">
            <h2>"My profile"</h2>
            <Show when=move || error.get().is_some()>
                <div class="alert alert-error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || status.get().is_some()>
                <span class="status-text status-ok">{move || status.get().unwrap_or_default()}</span>
            </Show>

            <div class="card" style:display=move || if editing.get() { "none" } else { "block" }>
                <p>
                    <strong>"Name: "</strong>
                    {move || snapshot.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default())}
                </p>
                <p>
                    <strong>"Email: "</strong>
                    {move || snapshot.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default())}
                </p>
                <div class="btn-row">
                    <button class="btn btn-primary" on:click=start_edit>"Edit profile"</button>
                    <a href="/bookings" class="btn btn-secondary">"My bookings"</a>
                    <a href="/delete-account" class="btn btn-danger">"Delete account"</a>
                </div>
            </div>

            <form class="card" style:display=move || if editing.get() { "block" } else { "none" } on:submit=on_submit>
                <FormField
                    label="Name"
                    id="name"
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                />
                <FormField
                    label="Email"
                    id="email"
                    input_type="email"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.email = v))
                />
                <div class="btn-row">
                    <button type="submit" class="btn btn-primary" disabled=move || is_saving.get()>
                        {move || if is_saving.get() { "Saving..." } else { "Save" }}
                    </button>
                    <button type="button" class="btn btn-secondary" on:click=move |_| set_editing.set(false)>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
