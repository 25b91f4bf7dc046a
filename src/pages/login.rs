use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::auth::context::use_auth;
use crate::components::form_field::FormField;
use crate::forms::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginForm::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let credentials = match form.with(|f| f.validate()) {
            Ok(c) => c,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_is_loading.set(true);
        set_error.set(None);
        let ctx = auth.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match ctx.session.login(&credentials).await {
                Ok(snapshot) => {
                    ctx.set(snapshot);
                    navigate("/", Default::default());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="page auth-page">
            <h2>"Login"</h2>
            <Show when=move || error.get().is_some()>
                <div class="alert alert-error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <form on:submit=on_submit>
                <FormField
                    label="Email"
                    id="email"
                    input_type="email"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.email = v))
                />
                <FormField
                    label="Password"
                    id="password"
                    input_type="password"
                    value=Signal::derive(move || form.with(|f| f.password.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.password = v))
                />
                <button type="submit" class="btn btn-primary" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>
            <p class="auth-switch">"No account yet? " <a href="/register">"Register"</a></p>
        </div>
    }
}
