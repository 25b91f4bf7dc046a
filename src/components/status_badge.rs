use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Positive,
    Negative,
    Accent,
}

impl BadgeTone {
    fn class(self) -> &'static str {
        match self {
            BadgeTone::Positive => "status-badge status-pass",
            BadgeTone::Negative => "status-badge status-fail",
            BadgeTone::Accent => "status-badge status-accent",
        }
    }
}

#[component]
pub fn StatusBadge(
    /// The label text, e.g. "Active" or "VIP"
    #[prop(into)]
    label: String,
    tone: BadgeTone,
) -> impl IntoView {
    view! { <span class=tone.class()>{label}</span> }
}

/// Active/inactive pill for the admin films table.
#[component]
pub fn FilmStatusBadge(is_active: bool) -> impl IntoView {
    if is_active {
        view! { <StatusBadge label="Active" tone=BadgeTone::Positive /> }.into_any()
    } else {
        view! { <StatusBadge label="Inactive" tone=BadgeTone::Negative /> }.into_any()
    }
}
