use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::auth::context::use_auth;
use crate::components::form_field::FormField;
use crate::forms::DeleteAccountForm;

/// Two steps: acknowledge the consequences, then re-enter credentials.
#[component]
pub fn DeleteAccountPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let form = RwSignal::new(DeleteAccountForm::default());
    let (acknowledged, set_acknowledged) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_deleting, set_is_deleting) = signal(false);

    let snapshot = auth.snapshot;
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(user) = snapshot.with(|s| s.user.clone()) else {
            return;
        };
        let confirmation = match form.with(|f| f.validate()) {
            Ok(c) => c,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_is_deleting.set(true);
        set_error.set(None);
        let ctx = auth.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match ctx.session.delete_account(&user, &confirmation).await {
                Ok(next) => {
                    ctx.set(next);
                    navigate("/", Default::default());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_is_deleting.set(false);
        });
    };

    view! {
        <div class="page delete-account-page">
            <h2>"Delete account"</h2>
            <div class="card warning" style:display=move || if acknowledged.get() { "none" } else { "block" }>
                <p>"Deleting your account removes your profile and booking history. This cannot be undone."</p>
                <div class="btn-row">
                    <button class="btn btn-danger" on:click=move |_| set_acknowledged.set(true)>
                        "I understand, continue"
                    </button>
                    <a href="/profile" class="btn btn-secondary">"Cancel"</a>
                </div>
            </div>

            <form class="card" style:display=move || if acknowledged.get() { "block" } else { "none" } on:submit=on_submit>
                <p>"Confirm with the email and password of this account."</p>
                <Show when=move || error.get().is_some()>
                    <div class="alert alert-error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <FormField
                    label="Email"
                    id="confirm-email"
                    input_type="email"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.email = v))
                />
                <FormField
                    label="Password"
                    id="confirm-password"
                    input_type="password"
                    value=Signal::derive(move || form.with(|f| f.password.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.password = v))
                />
                <button type="submit" class="btn btn-danger" disabled=move || is_deleting.get()>
                    {move || if is_deleting.get() { "Deleting..." } else { "Delete my account" }}
                </button>
            </form>
        </div>
    }
}
