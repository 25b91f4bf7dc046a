use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::{Access, AuthSession, AuthSnapshot, Requirement};
use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::storage::BrowserTokenStore;

pub type BrowserAuthSession = AuthSession<ApiClient, BrowserTokenStore>;

/// Shared auth state, provided once at the application root.
#[derive(Clone)]
pub struct AuthContext {
    pub snapshot: RwSignal<AuthSnapshot>,
    pub session: BrowserAuthSession,
}

impl AuthContext {
    pub fn access(&self, requirement: Requirement) -> Access {
        self.snapshot.with(|s| requirement.check(s))
    }

    pub fn set(&self, snapshot: AuthSnapshot) {
        self.snapshot.set(snapshot);
    }
}

/// Provide the API client and auth context, then run the single startup
/// profile check.
pub fn provide_auth(config: &ClientConfig) {
    let client = ApiClient::new(config);
    let tokens = BrowserTokenStore::new(config.token_key.clone());
    let ctx = AuthContext {
        snapshot: RwSignal::new(AuthSnapshot::initial()),
        session: AuthSession::new(client.clone(), tokens),
    };
    provide_context(client);
    provide_context(ctx.clone());

    spawn_local(async move {
        let snapshot = ctx.session.bootstrap().await;
        ctx.set(snapshot);
    });
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}
