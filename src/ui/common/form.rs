use leptos::prelude::*;

/// Labeled input with an inline error slot below it
#[component]
pub fn FormField(
    /// DOM id tying the label to the input (also used as the input name)
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Autocomplete hint for the browser
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Error message for this field, if the last submit rejected it
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id class="label">{label}</label>
            <input
                id=id
                name=id
                type=input_type
                autocomplete=autocomplete
                class="input-base"
                class:input-invalid=move || error.get().is_some()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || {
                error.get().map(|message| {
                    view! {
                        <p class="error-message">{message}</p>
                    }
                })
            }}
        </div>
    }
}
