use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::auth::context::use_auth;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let snapshot = auth.snapshot;
    let logged_in = move || snapshot.with(|s| s.logged_in);
    let is_admin = move || snapshot.with(|s| s.is_admin());
    let user_name = move || {
        snapshot
            .with(|s| s.user.as_ref().map(|u| u.name.clone()))
            .unwrap_or_default()
    };

    let do_logout = move |_| {
        let ctx = auth.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let next = ctx.session.logout().await;
            ctx.set(next);
            navigate("/", Default::default());
        });
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar-brand">"CinéHall"</a>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/films" class="nav-link">"Films"</a>
                </li>
                <li class="nav-item">
                    <a href="/sessions" class="nav-link">"Sessions"</a>
                </li>
                <Show when=is_admin>
                    <li class="nav-item">
                        <a href="/admin" class="nav-link">"Admin"</a>
                    </li>
                </Show>
            </ul>
            <div class="nav-account">
                <span style:display=move || if logged_in() { "none" } else { "inline" }>
                    <a href="/login" class="nav-link">"Login"</a>
                    <a href="/register" class="btn btn-primary">"Register"</a>
                </span>
                <span style:display=move || if logged_in() { "inline" } else { "none" }>
                    <a href="/bookings" class="nav-link">"My bookings"</a>
                    <a href="/profile" class="nav-link">{user_name}</a>
                    <button class="btn btn-secondary" on:click=do_logout>"Logout"</button>
                </span>
            </div>
        </nav>
    }
}
