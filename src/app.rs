use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::auth::context::provide_auth;
use crate::auth::Requirement;
use crate::components::navbar::NavBar;
use crate::components::protected::Protected;
use crate::config::ClientConfig;
use crate::pages::admin_dashboard::AdminDashboardPage;
use crate::pages::admin_film_form::AdminFilmFormPage;
use crate::pages::admin_session_form::AdminSessionFormPage;
use crate::pages::booking::BookingPage;
use crate::pages::delete_account::DeleteAccountPage;
use crate::pages::film_detail::FilmDetailPage;
use crate::pages::films::FilmsPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::my_bookings::MyBookingsPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::sessions::SessionsPage;
use crate::pages::ticket::TicketPage;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_context(config.clone());
    provide_auth(&config);

    view! {
        <Router>
            <div class="app-layout">
                <NavBar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/films") view=FilmsPage />
                        <Route path=path!("/films/:id") view=FilmDetailPage />
                        <Route path=path!("/sessions") view=SessionsPage />
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/register") view=RegisterPage />
                        <Route
                            path=path!("/booking/:id")
                            view=|| view! { <Protected requirement=Requirement::LoggedIn><BookingPage /></Protected> }
                        />
                        <Route
                            path=path!("/tickets/:id")
                            view=|| view! { <Protected requirement=Requirement::LoggedIn><TicketPage /></Protected> }
                        />
                        <Route
                            path=path!("/bookings")
                            view=|| view! { <Protected requirement=Requirement::LoggedIn><MyBookingsPage /></Protected> }
                        />
                        <Route
                            path=path!("/profile")
                            view=|| view! { <Protected requirement=Requirement::LoggedIn><ProfilePage /></Protected> }
                        />
                        <Route
                            path=path!("/delete-account")
                            view=|| view! { <Protected requirement=Requirement::LoggedIn><DeleteAccountPage /></Protected> }
                        />
                        <Route
                            path=path!("/admin")
                            view=|| view! { <Protected requirement=Requirement::Admin><AdminDashboardPage /></Protected> }
                        />
                        <Route
                            path=path!("/admin/films/new")
                            view=|| view! { <Protected requirement=Requirement::Admin><AdminFilmFormPage /></Protected> }
                        />
                        <Route
                            path=path!("/admin/films/:id/edit")
                            view=|| view! { <Protected requirement=Requirement::Admin><AdminFilmFormPage /></Protected> }
                        />
                        <Route
                            path=path!("/admin/sessions/new")
                            view=|| view! { <Protected requirement=Requirement::Admin><AdminSessionFormPage /></Protected> }
                        />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
