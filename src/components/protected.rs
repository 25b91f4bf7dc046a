use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::context::use_auth;
use crate::auth::{Access, Requirement};

/// Renders `children` only once the auth snapshot satisfies `requirement`;
/// otherwise redirects.
#[component]
pub fn Protected(requirement: Requirement, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let gate = auth.clone();
    Effect::new(move |_| {
        if let Access::Denied(target) = gate.access(requirement) {
            navigate(target, Default::default());
        }
    });

    view! {
        <Show
            when=move || auth.access(requirement) == Access::Granted
            fallback=|| view! { <p class="loading">"Loading..."</p> }
        >
            {children()}
        </Show>
    }
}
