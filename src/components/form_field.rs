use leptos::prelude::*;

/// Labelled input bound to a string signal.
#[component]
pub fn FormField(
    /// Label text, e.g. "Title"
    #[prop(into)]
    label: String,
    /// Element id, also used for the label's `for`
    #[prop(into)]
    id: String,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <input
                id=id
                type=input_type
                class="input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
