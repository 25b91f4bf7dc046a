mod admin;
mod api;
mod app;
mod auth;
mod booking;
mod components;
mod config;
mod format;
mod forms;
mod load;
mod logging;
mod pages;
mod storage;

use leptos::prelude::*;

use app::App;
use config::ClientConfig;

fn main() {
    let config = ClientConfig::from_build_env();
    logging::init(&config);
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
