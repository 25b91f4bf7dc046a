pub mod admin_dashboard;
pub mod admin_film_form;
pub mod admin_session_form;
pub mod booking;
pub mod delete_account;
pub mod film_detail;
pub mod films;
pub mod home;
pub mod login;
pub mod my_bookings;
pub mod profile;
pub mod register;
pub mod sessions;
pub mod ticket;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api::Id;

/// Numeric route parameter, `None` when absent or malformed.
pub(crate) fn id_param(name: &'static str) -> Memo<Option<Id>> {
    let params = use_params_map();
    Memo::new(move |_| params.with(|p| p.get(name)).and_then(|v| v.parse::<Id>().ok()))
}
